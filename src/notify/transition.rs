//! Debounced transition timer.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// How long the decorative transition marker stays raised.
pub const TRANSITION: Duration = Duration::from_millis(420);

/// Runs a closure after a delay, cancelling any run scheduled earlier.
///
/// Scheduling bumps a generation counter; a sleeper only fires if its
/// generation is still current when it wakes. That gives the "clear the
/// previous timer before starting a new one" behavior without tracking
/// thread handles.
#[derive(Debug, Default)]
pub struct Debounce {
    generation: Arc<AtomicU64>,
}

impl Debounce {
    /// Creates a debouncer with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `f` to run after `delay`, superseding any pending run.
    pub fn schedule<F>(&self, delay: Duration, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let current = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        thread::spawn(move || {
            thread::sleep(delay);
            if generation.load(Ordering::SeqCst) == current {
                f();
            }
        });
    }

    /// Cancels any pending run.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}
