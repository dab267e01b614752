use crate::constants::Z_ORDER_TOP;
use crate::coverflow::layout::looped_step;
use crate::view::SlideTransform;

/// Banner placement: the focused slide fills the hero, everything else is hidden.
pub fn compute_banner_transform(slide_index: usize, current_index: usize, len: usize) -> SlideTransform {
    let step = looped_step(slide_index, current_index, len);
    if step != 0 {
        return SlideTransform::hidden(step);
    }

    SlideTransform {
        step,
        offset: 0.0,
        scale: 1.0,
        rotation: 0.0,
        opacity: 1.0,
        z_order: Z_ORDER_TOP,
        visible: true,
    }
}
