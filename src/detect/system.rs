//! OS-level color-scheme signal.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use crate::mode::ColorMode;

type SystemDetector = fn() -> ColorMode;

static SYSTEM_DETECTOR: Lazy<Mutex<SystemDetector>> = Lazy::new(|| Mutex::new(os_detector));

/// Overrides the detector used to read the OS color-scheme preference.
///
/// This is useful for testing or when you want to force a specific mode.
pub fn set_system_detector(detector: SystemDetector) {
    let mut guard = SYSTEM_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Reads the ambient OS color-scheme preference.
pub fn system_color_mode() -> ColorMode {
    let detector = SYSTEM_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}
