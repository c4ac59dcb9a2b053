//! Generation-token debouncing for search inputs.
//!
//! Every keystroke bumps the generation and schedules a delayed apply; the
//! apply only runs if no newer keystroke arrived in the meantime.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use leptos::prelude::*;

/// Monotonic input generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Debounce {
    generation: u64,
}

impl Debounce {
    /// Record a new input and return its token.
    pub fn bump(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Whether `token` belongs to the latest input.
    #[must_use]
    pub fn is_current(&self, token: u64) -> bool {
        self.generation == token
    }
}

/// Run `apply` after `delay_ms` unless a newer input superseded it.
///
/// Outside the browser `apply` runs immediately.
pub fn debounce(state: RwSignal<Debounce>, delay_ms: u32, apply: impl FnOnce() + 'static) {
    let mut token = 0;
    state.update(|d| token = d.bump());
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            if state.get_untracked().is_current(token) {
                apply();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay_ms, token);
        apply();
    }
}
