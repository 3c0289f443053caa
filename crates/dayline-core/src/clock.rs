use chrono::{Datelike, Local, Timelike};

use crate::time::{TimeOfDay, Weekday};

/// Wall-clock snapshot driving the "now" marker and the active day filter.
///
/// Recomputed from the system clock on every frame; the read is cheap and
/// idempotent, so frame-rate refresh needs no throttling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockState {
    pub now: TimeOfDay,
    pub weekday: Weekday,
}

impl ClockState {
    pub fn now_local() -> Self {
        let now = Local::now();
        let minutes = (now.hour() * 60 + now.minute()) as u16;
        Self {
            now: TimeOfDay::from_minutes(minutes),
            weekday: Weekday::from(now.weekday()),
        }
    }

    pub fn refresh(&mut self) {
        *self = Self::now_local();
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::now_local()
    }
}

/// Gate for the frame-driven clock loop.
///
/// The host's paint callback calls [`Ticker::tick`] once per frame; the loop
/// re-arms by virtue of the host rescheduling the callback, not by recursion.
/// After [`Ticker::stop`] no tick mutates the clock again, and stopping is
/// idempotent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ticker {
    stopped: bool,
}

impl Ticker {
    /// Refresh the clock if the ticker is still running.
    /// Returns whether a tick was performed.
    pub fn tick(&self, clock: &mut ClockState) -> bool {
        if self.stopped {
            return false;
        }
        clock.refresh();
        true
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
