//! Fixed-interval update scheduling
//!
//! The driver has no timer of its own. The application feeds a millisecond
//! clock into [`UpdateScheduler::poll`], usually from its main loop, and the
//! scheduler reports when the next refresh is due. Clock wrap-around is
//! handled, so a free-running `u32` millisecond counter works.
//!
//! ## Example
//!
//! ```
//! use st7796s::UpdateScheduler;
//!
//! let mut scheduler = UpdateScheduler::new(1_000);
//! assert!(scheduler.poll(0));
//! assert!(!scheduler.poll(999));
//! assert!(scheduler.poll(1_000));
//! ```

use crate::config::DEFAULT_UPDATE_INTERVAL_MS;

/// Tracks when the next periodic update is due
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpdateScheduler {
    interval_ms: u32,
    last_tick: Option<u32>,
}

impl UpdateScheduler {
    /// Scheduler firing every `interval_ms` (0 fires on every poll)
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_tick: None,
        }
    }

    /// Configured interval in milliseconds
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Change the interval; the next poll measures from the last tick
    pub fn set_interval_ms(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms;
    }

    /// Whether a tick is due at `now_ms`; records the tick if so
    ///
    /// The first poll is always due.
    pub fn poll(&mut self, now_ms: u32) -> bool {
        let due = match self.last_tick {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) >= self.interval_ms,
        };
        if due {
            self.last_tick = Some(now_ms);
        }
        due
    }

    /// Forget the last tick so the next poll fires immediately
    pub fn reset(&mut self) {
        self.last_tick = None;
    }
}

impl Default for UpdateScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_UPDATE_INTERVAL_MS)
    }
}

/// A component refreshed periodically by an [`UpdateScheduler`]
pub trait Scheduled {
    /// Error returned by a failed update
    type Error;

    /// Run one update cycle
    fn update(&mut self) -> Result<(), Self::Error>;

    /// The component's scheduler
    fn scheduler_mut(&mut self) -> &mut UpdateScheduler;

    /// Run [`update`](Self::update) if the interval has elapsed at `now_ms`
    ///
    /// Returns `Ok(true)` if an update ran. A failed update is reported but
    /// the schedule still advances, so the next due tick retries.
    fn poll(&mut self, now_ms: u32) -> Result<bool, Self::Error> {
        if !self.scheduler_mut().poll(now_ms) {
            return Ok(false);
        }
        self.update()?;
        Ok(true)
    }
}
