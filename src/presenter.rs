use std::sync::Arc;
use std::time::Duration;

use crate::actions::{BookmarkRequest, SlideActions};
use crate::layout::Layout;
use crate::slide::Slide;
use crate::state::CarouselState;
use crate::timer::AutoAdvanceTimer;
use crate::view::{navigation_dots, HeroView, PlacedSlide};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    fn delta(&self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Prev => -1,
        }
    }
}

/// Hero carousel presenter.
///
/// Holds the focused slide of a shared, read-only slide list, drives the
/// auto-advance timer and routes slide actions to `A`. Every transition
/// cancels the pending auto-advance and, when the carousel is active,
/// schedules a fresh one. The timer is owned by the presenter, so dropping
/// the presenter releases any pending auto-advance with it.
pub struct Presenter<A: SlideActions> {
    items: Arc<[Slide]>,
    state: CarouselState,
    layout: Layout,
    timer: AutoAdvanceTimer,
    /// Explicit delay; when unset the layout's own delay applies.
    delay_override: Option<Duration>,
    autoplay: bool,
    actions: A,
}

impl<A: SlideActions> Presenter<A> {
    pub fn new(items: Arc<[Slide]>, layout: Layout, actions: A) -> Self {
        let mut presenter = Self {
            state: CarouselState::initial(items.len()),
            timer: AutoAdvanceTimer::new(layout.default_delay()),
            items,
            layout,
            delay_override: None,
            autoplay: true,
            actions,
        };
        log::debug!("presenter initialized with {} slides", presenter.len());
        presenter.reschedule();
        presenter
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay_override = Some(delay);
        self.timer.set_delay(delay);
        self.reschedule();
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self.reschedule();
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index()
    }

    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Switches presentation style. Without an explicit delay the
    /// auto-advance follows the new layout's default and restarts.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
        if self.delay_override.is_none() {
            self.timer.set_delay(layout.default_delay());
        }
        log::debug!("layout {:?}, auto-advance every {:?}", layout.variant(), self.timer.delay());
        self.reschedule();
    }

    pub fn delay(&self) -> Duration {
        self.timer.delay()
    }

    pub fn pending_timers(&self) -> usize {
        self.timer.pending()
    }

    pub fn actions(&self) -> &A {
        &self.actions
    }

    pub fn actions_mut(&mut self) -> &mut A {
        &mut self.actions
    }

    pub fn advance(&mut self, direction: Direction) {
        let Some(current) = self.current_index() else {
            return;
        };
        let len = self.len() as isize;
        let next = (current as isize + direction.delta() + len).rem_euclid(len) as usize;
        self.set_index(next);
    }

    pub fn jump_to(&mut self, index: usize) {
        if self.current_index().is_none() || index >= self.len() {
            log::debug!("ignoring jump to {} ({} slides)", index, self.len());
            return;
        }
        self.set_index(index);
    }

    pub fn toggle_pause(&mut self) {
        if self.state == CarouselState::Empty {
            return;
        }
        self.state = self.state.toggled();
        log::debug!("carousel {:?}", self.state);
        self.reschedule();
    }

    /// List-replacement event. A different list resets the carousel to its
    /// initial state; the same list handle leaves it untouched.
    pub fn replace_items(&mut self, items: Arc<[Slide]>) {
        if Arc::ptr_eq(&self.items, &items) {
            return;
        }
        self.items = items;
        self.state = CarouselState::initial(self.items.len());
        log::debug!("slide list replaced, {} slides", self.items.len());
        self.reschedule();
    }

    /// Feeds elapsed frame time to the auto-advance timer. Returns true when
    /// the carousel advanced.
    pub fn update(&mut self, dt: Duration) -> bool {
        if !self.timer.tick(dt) {
            return false;
        }
        log::trace!("auto-advance fired");
        self.advance(Direction::Next);
        true
    }

    /// Visible window for the current frame, or `None` when there is nothing
    /// to render.
    pub fn view(&self, viewport_width: f32) -> Option<HeroView<'_>> {
        let current = self.current_index()?;
        let len = self.len();

        let mut slides: Vec<PlacedSlide<'_>> = self
            .items
            .iter()
            .enumerate()
            .filter_map(|(index, slide)| {
                let transform = self.layout.transform(index, current, len, viewport_width);
                transform.visible.then(|| PlacedSlide {
                    index,
                    slide: slide.view(),
                    transform,
                })
            })
            .collect();
        slides.sort_by_key(|placed| placed.transform.z_order);

        Some(HeroView {
            current,
            paused: self.is_paused(),
            slides,
            dots: navigation_dots(len, current),
        })
    }

    pub fn select_current(&mut self) {
        if let Some(slide) = self.current_index().and_then(|index| self.items.get(index)) {
            log::info!("select {}", slide.id());
            self.actions.on_select(slide);
        }
    }

    pub fn play_current(&mut self) {
        if let Some(slide) = self.current_index().and_then(|index| self.items.get(index)) {
            log::info!("play {}", slide.id());
            self.actions.on_play(slide);
        }
    }

    pub fn toggle_bookmark_current(&mut self) {
        if let Some(slide) = self.current_index().and_then(|index| self.items.get(index)) {
            log::info!("bookmark toggle {}", slide.id());
            self.actions.on_bookmark_toggle(BookmarkRequest::from_slide(slide));
        }
    }

    /// Click on the slide at `index`: the focused slide opens its details,
    /// any other slide becomes focused.
    pub fn activate(&mut self, index: usize) {
        match self.current_index() {
            Some(current) if current == index => self.select_current(),
            Some(_) => self.jump_to(index),
            None => {}
        }
    }

    fn set_index(&mut self, index: usize) {
        self.state = self.state.with_index(index);
        log::trace!("focused slide {}", index);
        self.reschedule();
    }

    fn reschedule(&mut self) {
        self.timer.cancel();
        if self.autoplay && matches!(self.state, CarouselState::Active(_)) {
            self.timer.schedule();
        }
    }
}

impl<A: SlideActions> std::fmt::Debug for Presenter<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Presenter")
            .field("len", &self.items.len())
            .field("state", &self.state)
            .field("layout", &self.layout)
            .field("timer", &self.timer)
            .field("delay_override", &self.delay_override)
            .field("autoplay", &self.autoplay)
            .finish()
    }
}
