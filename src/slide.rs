use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Movie,
    Episode,
    Podcast,
}

impl MediaKind {
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Episode => "episode",
            MediaKind::Podcast => "podcast",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fields every featured item carries, whatever its origin.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Details {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image: PathBuf,
    #[serde(default)]
    pub premium: bool,
}

/// A featured media item as delivered by the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Slide {
    Movie {
        #[serde(flatten)]
        details: Details,
        runtime_minutes: Option<u32>,
        #[serde(default)]
        languages: Vec<String>,
    },
    Episode {
        #[serde(flatten)]
        details: Details,
        series: String,
        season: u32,
        number: u32,
        runtime_minutes: Option<u32>,
        #[serde(default)]
        languages: Vec<String>,
    },
    Podcast {
        #[serde(flatten)]
        details: Details,
        host: Option<String>,
        length_minutes: Option<u32>,
    },
}

const NO_LANGUAGES: &[String] = &[];

/// Common display shape projected from any [`Slide`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideView<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub description: &'a str,
    pub image: &'a Path,
    pub kind: MediaKind,
    pub duration_minutes: Option<u32>,
    pub languages: &'a [String],
    pub premium: bool,
}

impl Slide {
    pub fn details(&self) -> &Details {
        match self {
            Slide::Movie { details, .. }
            | Slide::Episode { details, .. }
            | Slide::Podcast { details, .. } => details,
        }
    }

    pub(crate) fn details_mut(&mut self) -> &mut Details {
        match self {
            Slide::Movie { details, .. }
            | Slide::Episode { details, .. }
            | Slide::Podcast { details, .. } => details,
        }
    }

    pub fn id(&self) -> &str {
        &self.details().id
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            Slide::Movie { .. } => MediaKind::Movie,
            Slide::Episode { .. } => MediaKind::Episode,
            Slide::Podcast { .. } => MediaKind::Podcast,
        }
    }

    pub fn view(&self) -> SlideView<'_> {
        let details = self.details();
        let (subtitle, duration_minutes, languages) = match self {
            Slide::Movie { runtime_minutes, languages, .. } => (None, *runtime_minutes, languages.as_slice()),
            Slide::Episode { series, runtime_minutes, languages, .. } => {
                (Some(series.as_str()), *runtime_minutes, languages.as_slice())
            }
            Slide::Podcast { host, length_minutes, .. } => (host.as_deref(), *length_minutes, NO_LANGUAGES),
        };

        SlideView {
            id: &details.id,
            title: &details.title,
            subtitle,
            description: &details.description,
            image: &details.image,
            kind: self.kind(),
            duration_minutes,
            languages,
            premium: details.premium,
        }
    }
}

impl SlideView<'_> {
    /// Short metadata line drawn under the title, e.g. "episode · 42 min · EN/FR".
    pub fn caption(&self) -> String {
        let mut parts = vec![self.kind.label().to_string()];
        if let Some(minutes) = self.duration_minutes {
            parts.push(format!("{} min", minutes));
        }
        if !self.languages.is_empty() {
            let languages: Vec<String> = self.languages.iter().map(|l| l.to_uppercase()).collect();
            parts.push(languages.join("/"));
        }
        parts.join(" · ")
    }
}
