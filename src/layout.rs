use std::time::Duration;

use clap::ValueEnum;
use serde::Deserialize;

use crate::banner::layout::compute_banner_transform;
use crate::constants::{BANNER_DELAY, COVERFLOW_DELAY};
use crate::coverflow::layout::Geometry;
use crate::view::SlideTransform;

/// Hero presentation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Coverflow,
    Banner,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layout {
    Coverflow(Geometry),
    Banner,
}

impl Layout {
    pub fn new(variant: Variant, geometry: Geometry) -> Self {
        match variant {
            Variant::Coverflow => Layout::Coverflow(geometry),
            Variant::Banner => Layout::Banner,
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Layout::Coverflow(_) => Variant::Coverflow,
            Layout::Banner => Variant::Banner,
        }
    }

    pub fn default_delay(&self) -> Duration {
        match self {
            Layout::Coverflow(_) => COVERFLOW_DELAY,
            Layout::Banner => BANNER_DELAY,
        }
    }

    pub fn transform(
        &self,
        slide_index: usize,
        current_index: usize,
        len: usize,
        viewport_width: f32,
    ) -> SlideTransform {
        match self {
            Layout::Coverflow(geometry) => geometry.transform(slide_index, current_index, len, viewport_width),
            Layout::Banner => compute_banner_transform(slide_index, current_index, len),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Coverflow(Geometry::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_have_their_own_delays() {
        assert_eq!(Layout::default().default_delay(), Duration::from_millis(5000));
        assert_eq!(Layout::Banner.default_delay(), Duration::from_millis(6000));
    }

    #[test]
    fn variant_round_trips_through_layout() {
        let layout = Layout::new(Variant::Banner, Geometry::default());
        assert_eq!(layout.variant(), Variant::Banner);
        assert_eq!(Layout::new(Variant::Coverflow, Geometry::default()), Layout::default());
    }

    #[test]
    fn banner_hides_neighbours_that_coverflow_shows() {
        let coverflow = Layout::default().transform(1, 0, 3, 1280.0);
        let banner = Layout::Banner.transform(1, 0, 3, 1280.0);
        assert!(coverflow.visible);
        assert!(!banner.visible);
    }
}
