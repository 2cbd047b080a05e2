//! Change subscription for the system signal.
//!
//! `dark-light` exposes a point read rather than a change event, so
//! subscription is a poll loop on a background thread. The callback fires
//! once per observed transition, never for the initial value.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::system::system_color_mode;
use crate::mode::ColorMode;

/// Handle to a running watch loop.
///
/// The loop exits when the handle is dropped or [`WatchHandle::stop`] is
/// called; stopping waits out at most one poll interval.
pub struct WatchHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl WatchHandle {
    /// Signals the loop to exit and waits for the thread to finish.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Polls the system signal every `interval`, invoking `on_change` with
/// the new mode once per observed transition.
pub fn watch<F>(interval: Duration, mut on_change: F) -> WatchHandle
where
    F: FnMut(ColorMode) + Send + 'static,
{
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);
    let thread = thread::spawn(move || {
        let mut last = system_color_mode();
        while !stop_flag.load(Ordering::Relaxed) {
            thread::sleep(interval);
            if stop_flag.load(Ordering::Relaxed) {
                break;
            }
            let current = system_color_mode();
            if current != last {
                last = current;
                on_change(current);
            }
        }
    });
    WatchHandle {
        stop,
        thread: Some(thread),
    }
}
