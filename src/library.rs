//! In-memory stand-in for the user's library: bookmarks and the list of
//! titles the user asked to open or play.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::actions::{BookmarkRequest, SlideActions};
use crate::slide::{MediaKind, Slide};

#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
    pub title: String,
    pub image: PathBuf,
    pub kind: MediaKind,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Details(String),
    Play(String),
}

#[derive(Debug, Default)]
pub struct Library {
    bookmarks: BTreeMap<String, Bookmark>,
    requests: Vec<Request>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.contains_key(id)
    }

    pub fn bookmarks(&self) -> impl Iterator<Item = (&str, &Bookmark)> {
        self.bookmarks.iter().map(|(id, bookmark)| (id.as_str(), bookmark))
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }
}

impl SlideActions for Library {
    fn on_select(&mut self, slide: &Slide) {
        log::info!("opening details for {} ({})", slide.details().title, slide.kind());
        self.requests.push(Request::Details(slide.id().to_string()));
    }

    fn on_play(&mut self, slide: &Slide) {
        log::info!("starting playback of {} ({})", slide.details().title, slide.kind());
        self.requests.push(Request::Play(slide.id().to_string()));
    }

    fn on_bookmark_toggle(&mut self, request: BookmarkRequest<'_>) {
        if self.bookmarks.remove(request.id).is_some() {
            log::info!("removed bookmark {}", request.id);
            return;
        }
        self.bookmarks.insert(
            request.id.to_string(),
            Bookmark {
                title: request.title.to_string(),
                image: request.image.to_path_buf(),
                kind: request.kind,
                description: request.description.to_string(),
            },
        );
        log::info!("bookmarked {} ({})", request.title, request.kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::Details;

    fn episode() -> Slide {
        Slide::Episode {
            details: Details {
                id: "e9".to_string(),
                title: "Low Tide".to_string(),
                description: "The harbor empties.".to_string(),
                image: PathBuf::from("low-tide.jpg"),
                premium: true,
            },
            series: "Harbor".to_string(),
            season: 1,
            number: 9,
            runtime_minutes: Some(47),
            languages: vec!["en".to_string()],
        }
    }

    #[test]
    fn bookmark_toggle_adds_then_removes() {
        let slide = episode();
        let mut library = Library::new();

        library.on_bookmark_toggle(BookmarkRequest::from_slide(&slide));
        assert!(library.is_bookmarked("e9"));
        let (id, bookmark) = library.bookmarks().next().unwrap();
        assert_eq!(id, "e9");
        assert_eq!(bookmark.kind, MediaKind::Episode);
        assert_eq!(bookmark.description, "The harbor empties.");

        library.on_bookmark_toggle(BookmarkRequest::from_slide(&slide));
        assert!(!library.is_bookmarked("e9"));
    }

    #[test]
    fn select_and_play_are_recorded_in_order() {
        let slide = episode();
        let mut library = Library::new();
        library.on_select(&slide);
        library.on_play(&slide);
        assert_eq!(
            library.requests(),
            &[Request::Details("e9".to_string()), Request::Play("e9".to_string())]
        );
    }
}
