//! Cancellable quiet-period timer.
//!
//! Scheduling a new task drops the previous `gloo_timers` timeout, which
//! cancels it, so at most one task is pending per `Debouncer`. Requires a
//! browser; SSR and native builds discard scheduled tasks.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::time::Duration;

/// Single-slot delayed task runner: scheduling replaces whatever was pending.
pub trait Debounce {
    /// Run `task` after the quiet period unless rescheduled or cancelled first.
    fn schedule(&mut self, task: impl FnOnce() + 'static);
    fn cancel(&mut self);
}

pub struct Debouncer {
    delay: Duration,
    #[cfg(feature = "hydrate")]
    pending: Option<gloo_timers::callback::Timeout>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            #[cfg(feature = "hydrate")]
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Debounce for Debouncer {
    fn schedule(&mut self, task: impl FnOnce() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            let millis = u32::try_from(self.delay.as_millis()).unwrap_or(u32::MAX);
            self.pending = Some(gloo_timers::callback::Timeout::new(millis, task));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            drop(task);
        }
    }

    fn cancel(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(timeout) = self.pending.take() {
                timeout.cancel();
            }
        }
    }
}
