use std::path::Path;

use crate::slide::{MediaKind, Slide};

/// Payload handed to [`SlideActions::on_bookmark_toggle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookmarkRequest<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub image: &'a Path,
    pub kind: MediaKind,
    pub description: &'a str,
}

impl<'a> BookmarkRequest<'a> {
    pub fn from_slide(slide: &'a Slide) -> Self {
        let view = slide.view();
        Self {
            id: view.id,
            title: view.title,
            image: view.image,
            kind: view.kind,
            description: view.description,
        }
    }
}

/// Callbacks the presenter routes user interaction to. The presenter never
/// acts on a slide itself.
pub trait SlideActions {
    /// Open the details page of `slide`.
    fn on_select(&mut self, slide: &Slide);
    fn on_play(&mut self, slide: &Slide);
    fn on_bookmark_toggle(&mut self, request: BookmarkRequest<'_>);
}

/// Ignores every action.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoActions;

impl SlideActions for NoActions {
    fn on_select(&mut self, _slide: &Slide) {}
    fn on_play(&mut self, _slide: &Slide) {}
    fn on_bookmark_toggle(&mut self, _request: BookmarkRequest<'_>) {}
}
