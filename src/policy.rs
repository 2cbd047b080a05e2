//! Pure preference-resolution policy.
//!
//! Everything here is a function of its arguments: no storage, no OS
//! reads, no notification. The [`ThemeController`](crate::ThemeController)
//! owns the side effects and calls in.

use crate::mode::ColorMode;

/// Resolves the startup mode.
///
/// A persisted preference always wins; the system signal is the fallback
/// for users who have never made an explicit choice.
pub fn resolve_initial(persisted: Option<ColorMode>, system: ColorMode) -> ColorMode {
    persisted.unwrap_or(system)
}

/// Flips the current mode.
pub fn toggle(current: ColorMode) -> ColorMode {
    current.toggled()
}

/// Gates a late-arriving change of the OS preference.
///
/// Returns the mode to apply, or `None` when an explicit user choice has
/// been made. An explicit choice overrides the system signal for the
/// rest of the session and beyond.
pub fn on_system_change(new_system: ColorMode, has_explicit_choice: bool) -> Option<ColorMode> {
    if has_explicit_choice {
        None
    } else {
        Some(new_system)
    }
}

/// Encodes a mode for the persisted key.
///
/// The stored value is the "is dark" flag as a string, `"true"` or
/// `"false"`.
pub fn encode_preference(mode: ColorMode) -> &'static str {
    if mode.is_dark() {
        "true"
    } else {
        "false"
    }
}

/// Decodes a stored value.
///
/// Anything other than the two recognized flags reads as unset, so a
/// corrupted value falls back to the system signal instead of pinning the
/// theme.
pub fn decode_preference(raw: &str) -> Option<ColorMode> {
    match raw {
        "true" => Some(ColorMode::Dark),
        "false" => Some(ColorMode::Light),
        _ => None,
    }
}
