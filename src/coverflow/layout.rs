use crate::constants::*;
use crate::view::SlideTransform;

/// Responsive coverflow geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub breakpoint: f32,
    pub spacing_narrow: f32,
    pub spacing_wide: f32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            breakpoint: BREAKPOINT,
            spacing_narrow: SPACING_NARROW,
            spacing_wide: SPACING_WIDE,
        }
    }
}

impl Geometry {
    pub fn is_narrow(&self, viewport_width: f32) -> bool {
        viewport_width < self.breakpoint
    }

    pub fn spacing(&self, viewport_width: f32) -> f32 {
        if self.is_narrow(viewport_width) {
            self.spacing_narrow
        } else {
            self.spacing_wide
        }
    }

    /// Neighbours shown on each side of the focused slide.
    pub fn max_visible(&self, viewport_width: f32) -> usize {
        if self.is_narrow(viewport_width) { 1 } else { 2 }
    }

    pub fn transform(
        &self,
        slide_index: usize,
        current_index: usize,
        len: usize,
        viewport_width: f32,
    ) -> SlideTransform {
        let step = looped_step(slide_index, current_index, len);
        let distance = step.unsigned_abs();

        if distance > self.max_visible(viewport_width) {
            return SlideTransform::hidden(step);
        }

        let distance_f = distance as f32;
        SlideTransform {
            step,
            offset: step as f32 * self.spacing(viewport_width),
            scale: 1.0 - distance_f * SCALE_STEP,
            rotation: step as f32 * ROTATION_STEP,
            opacity: 1.0 - distance_f * OPACITY_STEP,
            z_order: Z_ORDER_TOP - distance as i32,
            visible: true,
        }
    }
}

/// Coverflow placement of `slide_index` with the default geometry.
pub fn compute_slide_transform(
    slide_index: usize,
    current_index: usize,
    len: usize,
    viewport_width: f32,
) -> SlideTransform {
    Geometry::default().transform(slide_index, current_index, len, viewport_width)
}

/// Signed shortest step from `current_index` to `slide_index` in a cyclic list.
///
/// When both directions are equally short (the slide sits exactly opposite in
/// an even-length list) the direct difference wins, so the answer never
/// depends on which way the carousel last moved.
pub fn looped_step(slide_index: usize, current_index: usize, len: usize) -> isize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    let direct = (slide_index as isize % len) - (current_index as isize % len);
    let looped = if direct > 0 { direct - len } else { direct + len };

    if looped.abs() < direct.abs() { looped } else { direct }
}
