//! Featured-slide catalog, read from a TOML file of `[[slides]]` tables.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use thiserror::Error;

use crate::slide::Slide;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate slide id '{0}'")]
    DuplicateId(String),
    #[error("slide #{0} has an empty id")]
    EmptyId(usize),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    slides: Vec<Slide>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    slides: Vec<Slide>,
}

impl Catalog {
    /// Reads `path`. Relative image paths are resolved against the catalog's directory.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let catalog = Self::parse(&content, base_dir)?;
        log::info!("loaded {} slides from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn parse(content: &str, base_dir: &Path) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;

        let mut seen = HashSet::new();
        let mut slides = file.slides;
        for (position, slide) in slides.iter_mut().enumerate() {
            if slide.id().trim().is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if !seen.insert(slide.id().to_string()) {
                return Err(CatalogError::DuplicateId(slide.id().to_string()));
            }

            let details = slide.details_mut();
            if details.image.is_relative() {
                details.image = base_dir.join(&details.image);
            }
        }

        Ok(Self { slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Shared handle in catalog order.
    pub fn to_shared(&self) -> Arc<[Slide]> {
        self.slides.iter().cloned().collect()
    }

    /// Shared handle in a random order.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Arc<[Slide]> {
        let mut slides = self.slides.clone();
        slides.shuffle(rng);
        slides.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::MediaKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const CATALOG: &str = r#"
        [[slides]]
        kind = "movie"
        id = "m1"
        title = "Tidewater"
        description = "A lighthouse keeper finds a map."
        image = "posters/tidewater.jpg"
        runtime_minutes = 112
        languages = ["en", "pt"]
        premium = true

        [[slides]]
        kind = "episode"
        id = "e1"
        title = "Cold Open"
        image = "/srv/art/cold-open.png"
        series = "Night Desk"
        season = 1
        number = 1

        [[slides]]
        kind = "podcast"
        id = "p1"
        title = "Signal & Noise"
        image = "signal.jpg"
        host = "R. Ortega"
    "#;

    #[test]
    fn parses_every_kind_in_order() {
        let catalog = Catalog::parse(CATALOG, Path::new("/data")).unwrap();
        let kinds: Vec<MediaKind> = catalog.slides().iter().map(Slide::kind).collect();
        assert_eq!(kinds, vec![MediaKind::Movie, MediaKind::Episode, MediaKind::Podcast]);
        assert!(catalog.slides()[0].details().premium);
    }

    #[test]
    fn relative_images_resolve_against_base_dir() {
        let catalog = Catalog::parse(CATALOG, Path::new("/data")).unwrap();
        assert_eq!(catalog.slides()[0].details().image, Path::new("/data/posters/tidewater.jpg"));
        assert_eq!(catalog.slides()[1].details().image, Path::new("/srv/art/cold-open.png"));
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::parse("", Path::new(".")).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.to_shared().is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let doubled = format!("{CATALOG}\n[[slides]]\nkind = \"movie\"\nid = \"m1\"\ntitle = \"Again\"\nimage = \"x.jpg\"\n");
        assert!(matches!(
            Catalog::parse(&doubled, Path::new(".")),
            Err(CatalogError::DuplicateId(id)) if id == "m1"
        ));
    }

    #[test]
    fn blank_id_is_rejected() {
        let blank = "[[slides]]\nkind = \"movie\"\nid = \" \"\ntitle = \"T\"\nimage = \"x.jpg\"\n";
        assert!(matches!(Catalog::parse(blank, Path::new(".")), Err(CatalogError::EmptyId(0))));
    }

    #[test]
    fn unknown_kind_fails_to_parse() {
        let bad = "[[slides]]\nkind = \"trailer\"\nid = \"t\"\ntitle = \"T\"\nimage = \"x.jpg\"\n";
        assert!(matches!(Catalog::parse(bad, Path::new(".")), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let catalog = Catalog::parse(CATALOG, Path::new(".")).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = catalog.shuffled(&mut rng);
        let mut ids: Vec<&str> = shuffled.iter().map(Slide::id).collect();
        ids.sort();
        assert_eq!(ids, vec!["e1", "m1", "p1"]);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("none.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn load_resolves_against_file_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("featured.toml");
        std::fs::write(&path, CATALOG).unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.slides()[2].details().image, dir.path().join("signal.jpg"));
    }
}
