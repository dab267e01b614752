//! Configuration file handling.
//!
//! Loads `hero-carousel.toml` from the working directory or a custom path.
//! A missing file yields the defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::constants::*;
use crate::coverflow::layout::Geometry;
use crate::layout::{Layout, Variant};

pub const DEFAULT_CONFIG_FILE: &str = "hero-carousel.toml";

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub coverflow: CoverflowConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CarouselConfig {
    pub variant: Variant,
    /// Overrides the variant's own auto-advance delay.
    pub delay_ms: Option<u64>,
    pub autoplay: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            delay_ms: None,
            autoplay: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CoverflowConfig {
    pub breakpoint: f32,
    pub spacing_narrow: f32,
    pub spacing_wide: f32,
}

impl Default for CoverflowConfig {
    fn default() -> Self {
        let geometry = Geometry::default();
        Self {
            breakpoint: geometry.breakpoint,
            spacing_narrow: geometry.spacing_narrow,
            spacing_wide: geometry.spacing_wide,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: RENDER_WIDTH,
            height: RENDER_HEIGHT,
            fps: FPS,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config value: {0}")]
    Invalid(String),
}

impl Config {
    /// Load configuration from `path`, or from the default file when `None`.
    /// Returns the defaults if the file doesn't exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse { path: path.clone(), source },
            other => other,
        })?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.delay_ms == Some(0) {
            return Err(ConfigError::Invalid("carousel.delay_ms must be greater than 0".into()));
        }
        if self.window.fps == 0 {
            return Err(ConfigError::Invalid("window.fps must be greater than 0".into()));
        }
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        let c = &self.coverflow;
        if c.breakpoint < 0.0 || c.spacing_narrow < 0.0 || c.spacing_wide < 0.0 {
            return Err(ConfigError::Invalid("coverflow geometry must not be negative".into()));
        }
        Ok(())
    }

    pub fn geometry(&self) -> Geometry {
        Geometry {
            breakpoint: self.coverflow.breakpoint,
            spacing_narrow: self.coverflow.spacing_narrow,
            spacing_wide: self.coverflow.spacing_wide,
        }
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.carousel.variant, self.geometry())
    }

    /// Explicit auto-advance delay. `None` leaves each variant on its own
    /// default.
    pub fn delay(&self) -> Option<Duration> {
        self.carousel.delay_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.carousel.autoplay);
        assert_eq!(config.delay(), None);
        assert_eq!(config.layout().default_delay(), COVERFLOW_DELAY);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[carousel]\nvariant = \"banner\"\n\n[window]\nwidth = 640").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.carousel.variant, Variant::Banner);
        assert!(config.carousel.autoplay);
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, RENDER_HEIGHT);
        assert_eq!(config.layout(), Layout::Banner);
        assert_eq!(config.delay(), None);
        assert_eq!(config.layout().default_delay(), BANNER_DELAY);
    }

    #[test]
    fn delay_override_wins() {
        let config = Config::parse("[carousel]\ndelay_ms = 2000\nautoplay = false").unwrap();
        assert_eq!(config.delay(), Some(Duration::from_millis(2000)));
        assert!(!config.carousel.autoplay);
    }

    #[test]
    fn geometry_comes_from_coverflow_section() {
        let config = Config::parse("[coverflow]\nbreakpoint = 900.0\nspacing_wide = 300.0").unwrap();
        let geometry = config.geometry();
        assert_eq!(geometry.breakpoint, 900.0);
        assert_eq!(geometry.spacing_wide, 300.0);
        assert_eq!(geometry.spacing_narrow, SPACING_NARROW);
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[carousel\nvariant = ").unwrap();
        let err = Config::load(Some(file.path())).unwrap_err();
        match err {
            ConfigError::Parse { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_variant_is_rejected() {
        assert!(matches!(
            Config::parse("[carousel]\nvariant = \"grid\""),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn zero_delay_is_invalid() {
        assert!(matches!(
            Config::parse("[carousel]\ndelay_ms = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }
}
