//! Terminal notifier.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use console::{Style, Term};

use super::transition::{Debounce, TRANSITION};
use super::Notifier;
use crate::mode::ColorMode;

/// Reflects theme state on a terminal.
///
/// Each applied change prints a styled status line. Animated changes also
/// raise a transition marker that clears itself after [`TRANSITION`];
/// a fresh change supersedes the pending clear.
pub struct TermNotifier {
    term: Term,
    transitioning: Arc<AtomicBool>,
    debounce: Debounce,
}

impl TermNotifier {
    /// Creates a notifier writing to stdout.
    pub fn stdout() -> Self {
        Self::on(Term::stdout())
    }

    /// Creates a notifier writing to the given terminal.
    pub fn on(term: Term) -> Self {
        Self {
            term,
            transitioning: Arc::new(AtomicBool::new(false)),
            debounce: Debounce::new(),
        }
    }

    /// True while a transition marker is raised.
    pub fn is_transitioning(&self) -> bool {
        self.transitioning.load(Ordering::SeqCst)
    }

    /// Renders the status line for `mode`.
    pub fn status_line(mode: ColorMode) -> String {
        let name = match mode {
            ColorMode::Dark => Style::new().blue().bold().apply_to("dark"),
            ColorMode::Light => Style::new().yellow().bold().apply_to("light"),
        };
        format!("theme: {}", name)
    }
}

impl Notifier for TermNotifier {
    fn apply(&mut self, mode: ColorMode, animate: bool) {
        let marker = if animate { " ~" } else { "" };
        let _ = self
            .term
            .write_line(&format!("{}{}", Self::status_line(mode), marker));

        if animate {
            self.transitioning.store(true, Ordering::SeqCst);
            let flag = Arc::clone(&self.transitioning);
            self.debounce
                .schedule(TRANSITION, move || flag.store(false, Ordering::SeqCst));
        }
    }
}
