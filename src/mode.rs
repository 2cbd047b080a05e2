//! The theme state vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The user's preferred color mode.
///
/// This is the single unit of theme state: everything else in the crate
/// resolves, persists, or displays one of these two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Returns true for [`ColorMode::Dark`].
    pub fn is_dark(self) -> bool {
        matches!(self, ColorMode::Dark)
    }

    /// Returns the opposite mode.
    pub fn toggled(self) -> ColorMode {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// Maps the "is dark" flag used by the persisted wire format.
    pub fn from_dark_flag(dark: bool) -> ColorMode {
        if dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Light => write!(f, "light"),
            ColorMode::Dark => write!(f, "dark"),
        }
    }
}

/// Error returned when a mode name fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color mode '{0}', expected 'dark' or 'light'")]
pub struct ParseColorModeError(String);

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(ParseColorModeError(other.to_string())),
        }
    }
}
