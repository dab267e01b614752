use std::time::Duration;

/// Frame-driven one-shot deadline used for auto-advance.
///
/// The presenter owns exactly one of these. `schedule` always drops the
/// previous deadline before arming a new one, so at most one firing can ever
/// be pending.
#[derive(Debug)]
pub struct AutoAdvanceTimer {
    delay: Duration,
    remaining: Option<Duration>,
}

impl AutoAdvanceTimer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, remaining: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Changes the delay used by the next `schedule`; a pending deadline keeps its own.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn schedule(&mut self) {
        self.cancel();
        self.remaining = Some(self.delay);
        log::trace!("auto-advance scheduled in {:?}", self.delay);
    }

    pub fn cancel(&mut self) {
        if self.remaining.take().is_some() {
            log::trace!("auto-advance cancelled");
        }
    }

    /// Number of deadlines waiting to fire (0 or 1).
    pub fn pending(&self) -> usize {
        usize::from(self.remaining.is_some())
    }

    /// Advances the clock by `dt`. Returns true exactly once per armed deadline.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };

        match remaining.checked_sub(dt) {
            Some(left) if !left.is_zero() => {
                self.remaining = Some(left);
                false
            }
            _ => {
                self.remaining = None;
                true
            }
        }
    }
}
