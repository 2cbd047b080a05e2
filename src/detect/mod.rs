//! System color-scheme detection.
//!
//! This module provides:
//!
//! - [`system_color_mode`]: a point read of the OS preference
//! - [`set_system_detector`]: a process-wide override for tests and
//!   forced modes
//! - [`watch`]: change subscription built on polling

mod system;
mod watch;

pub use system::{set_system_detector, system_color_mode};
pub use watch::{watch, WatchHandle};
