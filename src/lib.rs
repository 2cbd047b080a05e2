//! Dark/light theme preference resolution with OS detection and
//! best-effort persistence.
//!
//! The crate separates the pure resolution policy from its
//! side-effecting collaborators:
//!
//! - [`policy`]: pure functions over [`ColorMode`] for initial
//!   resolution, toggling, and the system-change gate
//! - [`Store`]: one-key best-effort persistence ([`MemoryStore`],
//!   [`FileStore`])
//! - [`Notifier`]: applies resolved state to a visible surface
//!   ([`TermNotifier`], [`NullNotifier`])
//! - [`ThemeController`]: synchronous event wiring between the three
//!
//! The resolution contract: a persisted choice always wins; without one,
//! the OS color-scheme signal decides, and later signal changes keep
//! applying until the user makes an explicit choice. Only explicit
//! actions write the store, and write failures never block the visible
//! change.
//!
//! # Example
//!
//! ```rust
//! use shade::{ColorMode, MemoryStore, NullNotifier, ThemeController};
//!
//! let mut controller =
//!     ThemeController::with_system(MemoryStore::new(), NullNotifier, ColorMode::Dark);
//! assert_eq!(controller.mode(), ColorMode::Dark);
//!
//! // The first explicit action persists; the system signal no longer wins.
//! controller.toggle();
//! assert_eq!(controller.mode(), ColorMode::Light);
//! assert_eq!(controller.system_changed(ColorMode::Dark), None);
//! ```

pub mod controller;
pub mod detect;
pub mod mode;
pub mod notify;
pub mod policy;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use controller::ThemeController;
pub use mode::{ColorMode, ParseColorModeError};
pub use notify::{Debounce, Notifier, NullNotifier, TermNotifier, TRANSITION};
pub use store::{FileStore, MemoryStore, Store, StoreError, PREFERENCE_KEY};
