// SPDX-License-Identifier: MPL-2.0
//! Handles for the widget's repeating timers.
//!
//! Each timer slot holds at most one active handle. Starting a slot cancels
//! whatever it held and opens a handle with a fresh generation, so the
//! subscription built from it is a brand new timer rather than a
//! continuation of the old one.

/// Identifies one scheduled repeating activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Source of unique timer generations for one widget.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    last: u64,
}

impl Scheduler {
    fn open(&mut self) -> TimerHandle {
        self.last += 1;
        TimerHandle(self.last)
    }
}

/// Holds at most one active timer handle.
#[derive(Debug, Clone, Default)]
pub struct TimerSlot {
    active: Option<TimerHandle>,
    cancellations: u32,
}

impl TimerSlot {
    /// Cancels any active timer and opens a new one.
    pub fn start(&mut self, scheduler: &mut Scheduler) -> TimerHandle {
        self.cancel();
        let handle = scheduler.open();
        self.active = Some(handle);
        handle
    }

    /// Cancels the active timer. Returns false if nothing was running.
    pub fn cancel(&mut self) -> bool {
        if self.active.take().is_some() {
            self.cancellations += 1;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<TimerHandle> {
        self.active
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Number of times an active timer was cancelled.
    #[must_use]
    pub fn cancellations(&self) -> u32 {
        self.cancellations
    }
}
