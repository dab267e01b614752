//! Hero carousel for a media-streaming front-end.
//!
//! [`Presenter`] keeps the focused slide of a featured list, auto-advances on
//! a frame-driven timer and produces a [`HeroView`] that the raylib engines in
//! [`coverflow`] and [`banner`] draw.

pub mod actions;
pub mod banner;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod coverflow;
pub mod engine;
pub mod layout;
pub mod library;
pub mod presenter;
pub mod slide;
pub mod state;
pub mod texture_loader;
pub mod timer;
pub mod view;

pub use actions::{BookmarkRequest, NoActions, SlideActions};
pub use catalog::{Catalog, CatalogError};
pub use config::{Config, ConfigError};
pub use coverflow::layout::{compute_slide_transform, Geometry};
pub use layout::{Layout, Variant};
pub use presenter::{Direction, Presenter};
pub use slide::{MediaKind, Slide, SlideView};
pub use state::CarouselState;
pub use view::{HeroView, PlacedSlide, SlideTransform};
