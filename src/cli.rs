//! Command-line surface for inspecting and changing the preference.

use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::controller::ThemeController;
use crate::detect;
use crate::mode::ColorMode;
use crate::notify::{NullNotifier, TermNotifier};
use crate::store::{FileStore, Store, PREFERENCE_KEY};

/// Resolve, toggle, and persist the dark/light theme preference.
#[derive(Debug, Parser)]
#[command(name = "shade", version, about)]
pub struct Cli {
    /// Preference file location (defaults to the user config directory).
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the resolved mode and where it came from.
    Status,
    /// Flip the mode and persist the choice.
    Toggle,
    /// Persist an explicit mode.
    Set { mode: ColorMode },
    /// Forget the persisted choice and follow the OS signal again.
    Clear,
    /// Follow OS preference changes until interrupted.
    Watch {
        /// Poll period in milliseconds.
        #[arg(long, default_value_t = 2000)]
        interval: u64,
    },
}

/// Default preference file path under the user config directory.
pub fn default_store_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("no user config directory available")?;
    Ok(base.join("shade").join("preferences.json"))
}

/// Runs the CLI to completion.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let path = match cli.store {
        Some(path) => path,
        None => default_store_path()?,
    };
    let store = FileStore::open(&path);
    let system = detect::system_color_mode();

    match cli.command {
        Command::Status => status(store, system),
        Command::Toggle => {
            let mut controller = ThemeController::with_system(store, TermNotifier::stdout(), system);
            controller.toggle();
            Ok(())
        }
        Command::Set { mode } => {
            let mut controller = ThemeController::with_system(store, TermNotifier::stdout(), system);
            controller.set(mode);
            Ok(())
        }
        Command::Clear => {
            let mut controller = ThemeController::with_system(store, TermNotifier::stdout(), system);
            controller.clear_preference(system);
            Ok(())
        }
        Command::Watch { interval } => watch_loop(store, system, Duration::from_millis(interval)),
    }
}

fn status(store: FileStore, system: ColorMode) -> Result<()> {
    let path = store.path().to_path_buf();
    let stored = store.get(PREFERENCE_KEY);
    let controller = ThemeController::with_system(store, NullNotifier, system);

    let source = if controller.has_explicit_choice() {
        "explicit choice"
    } else {
        "system signal"
    };
    println!("{} ({})", TermNotifier::status_line(controller.mode()), source);
    println!("store: {}", path.display());
    if let Some(raw) = stored {
        println!("{} = {}", PREFERENCE_KEY, raw);
    }
    Ok(())
}

fn watch_loop(store: FileStore, system: ColorMode, interval: Duration) -> Result<()> {
    let mut controller = ThemeController::with_system(store, TermNotifier::stdout(), system);

    let (tx, rx) = mpsc::channel();
    let _handle = detect::watch(interval, move |mode| {
        let _ = tx.send(mode);
    });

    for mode in rx {
        if controller.system_changed(mode).is_none() {
            log::debug!("ignoring system change to {mode}: explicit choice is set");
        }
    }
    Ok(())
}
