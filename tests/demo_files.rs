//! The sample files under `demos/` must stay loadable.

use std::path::Path;

use hero_carousel::{Catalog, Config, Layout, MediaKind, Slide, Variant};

#[test]
fn test_demo_catalog_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/featured.toml");
    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 5);

    let kinds: Vec<MediaKind> = catalog.slides().iter().map(Slide::kind).collect();
    assert!(kinds.contains(&MediaKind::Podcast));
    assert!(catalog
        .slides()
        .iter()
        .all(|slide| slide.details().image.starts_with(path.parent().unwrap())));
}

#[test]
fn test_demo_config_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/hero-carousel.toml");
    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.carousel.variant, Variant::Coverflow);
    assert_eq!(config.layout(), Layout::default());
}
