//! Bridge from [`Observable`] stores to Leptos signals.
//!
//! Stores live outside the reactive graph so they can be tested natively;
//! components mirror the values they render into signals with
//! [`watch`]. The subscription is dropped when the owning scope is cleaned
//! up.
//!
//! [`every`] and [`after`] schedule browser timers tied to the same owner
//! lifetime; outside the browser they never fire.

#[cfg(test)]
#[path = "reactive_test.rs"]
mod reactive_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::state::observable::Observable;

/// Read-only signal that tracks `source` until the current owner is disposed.
pub fn watch<T>(source: &Observable<T>) -> ReadSignal<T>
where
    T: Clone + Send + Sync + 'static,
{
    watch_map(source, T::clone)
}

/// Like [`watch`] but stores a projection of the value.
pub fn watch_map<T, U>(source: &Observable<T>, project: fn(&T) -> U) -> ReadSignal<U>
where
    T: Clone + Send + Sync + 'static,
    U: Send + Sync + 'static,
{
    let signal = RwSignal::new(source.with(project));
    let id = source.subscribe(move |value| {
        let _ = signal.try_set(project(value));
    });
    let source = source.clone();
    on_cleanup(move || {
        source.unsubscribe(id);
    });
    signal.read_only()
}

// =============================================================================
// TIMERS
// =============================================================================

/// Run `tick` every `period` until the current owner is cleaned up.
pub fn every(period: Duration, tick: impl Fn() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(period).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                tick();
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (period, tick);
    }
}

/// Run `f` once after `delay`.
pub fn after(delay: Duration, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        f();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay, f);
    }
}
