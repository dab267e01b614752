#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CarouselState {
    Empty,         // No slides, nothing is rendered
    Active(usize), // Focused slide, auto-advance running
    Paused(usize), // Focused slide, auto-advance halted
}

impl CarouselState {
    /// Initial state for a list of `len` slides.
    pub fn initial(len: usize) -> Self {
        if len == 0 {
            CarouselState::Empty
        } else {
            CarouselState::Active(0)
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        match *self {
            CarouselState::Empty => None,
            CarouselState::Active(index) | CarouselState::Paused(index) => Some(index),
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, CarouselState::Paused(_))
    }

    /// Same pause flag, different focused slide.
    pub fn with_index(self, index: usize) -> Self {
        match self {
            CarouselState::Empty => CarouselState::Empty,
            CarouselState::Active(_) => CarouselState::Active(index),
            CarouselState::Paused(_) => CarouselState::Paused(index),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            CarouselState::Empty => CarouselState::Empty,
            CarouselState::Active(index) => CarouselState::Paused(index),
            CarouselState::Paused(index) => CarouselState::Active(index),
        }
    }
}
