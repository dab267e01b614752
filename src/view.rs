//! Render model handed from the presenter to the drawing engines.

use crate::slide::SlideView;

/// Visual placement of one slide relative to the focused one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransform {
    /// Signed looped step from the focused slide (negative = left).
    pub step: isize,
    /// Horizontal offset from the viewport centre, in pixels.
    pub offset: f32,
    pub scale: f32,
    /// Degrees around the vertical axis.
    pub rotation: f32,
    pub opacity: f32,
    pub z_order: i32,
    pub visible: bool,
}

impl SlideTransform {
    pub fn distance(&self) -> usize {
        self.step.unsigned_abs()
    }

    pub(crate) fn hidden(step: isize) -> Self {
        Self {
            step,
            offset: 0.0,
            scale: 0.0,
            rotation: 0.0,
            opacity: 0.0,
            z_order: 0,
            visible: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSlide<'a> {
    pub index: usize,
    pub slide: SlideView<'a>,
    pub transform: SlideTransform,
}

/// Navigation indicator, one per slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

/// Everything an engine needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroView<'a> {
    pub current: usize,
    pub paused: bool,
    /// Visible slides, back to front.
    pub slides: Vec<PlacedSlide<'a>>,
    pub dots: Vec<Dot>,
}

impl<'a> HeroView<'a> {
    pub fn focused(&self) -> Option<&PlacedSlide<'a>> {
        self.slides.iter().find(|placed| placed.index == self.current)
    }
}

pub fn navigation_dots(len: usize, current: usize) -> Vec<Dot> {
    (0..len)
        .map(|index| Dot { index, active: index == current })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_dot_per_slide_with_focus_marked() {
        let dots = navigation_dots(4, 2);
        assert_eq!(dots.len(), 4);
        assert_eq!(dots.iter().filter(|d| d.active).count(), 1);
        assert!(dots[2].active);
    }

    #[test]
    fn no_dots_for_empty_list() {
        assert!(navigation_dots(0, 0).is_empty());
    }

    #[test]
    fn hidden_transform_is_fully_transparent() {
        let t = SlideTransform::hidden(-3);
        assert!(!t.visible);
        assert_eq!(t.opacity, 0.0);
        assert_eq!(t.distance(), 3);
    }
}
