//! End-to-end behavior of the controller over an in-memory store.

use std::io::ErrorKind;
use std::path::PathBuf;

use shade::{
    ColorMode, MemoryStore, Notifier, Store, StoreError, ThemeController, PREFERENCE_KEY,
};

#[derive(Default)]
struct RecordingNotifier {
    applied: Vec<(ColorMode, bool)>,
}

impl Notifier for RecordingNotifier {
    fn apply(&mut self, mode: ColorMode, animate: bool) {
        self.applied.push((mode, animate));
    }
}

/// Store whose writes always fail, as under a full or restricted backend.
struct QuotaExceededStore;

impl Store for QuotaExceededStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Io {
            path: PathBuf::from("/dev/full"),
            source: std::io::Error::new(ErrorKind::Other, "quota exceeded"),
        })
    }

    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Io {
            path: PathBuf::from("/dev/full"),
            source: std::io::Error::new(ErrorKind::Other, "quota exceeded"),
        })
    }
}

#[test]
fn unset_preference_follows_system_until_first_toggle() {
    let mut controller = ThemeController::with_system(
        MemoryStore::new(),
        RecordingNotifier::default(),
        ColorMode::Dark,
    );

    // System prefers dark, nothing stored: dark, and the store stays
    // unset until the user acts.
    assert_eq!(controller.mode(), ColorMode::Dark);
    assert!(!controller.has_explicit_choice());
    assert!(controller.store().get(PREFERENCE_KEY).is_none());

    // One toggle lands on light and stores the flag.
    assert_eq!(controller.toggle(), ColorMode::Light);
    assert_eq!(
        controller.store().get(PREFERENCE_KEY).as_deref(),
        Some("false")
    );

    // From here the system signal no longer applies.
    assert_eq!(controller.system_changed(ColorMode::Dark), None);
    assert_eq!(controller.mode(), ColorMode::Light);
}

#[test]
fn stored_choice_survives_a_restart() {
    let (store, _) = {
        let mut controller = ThemeController::with_system(
            MemoryStore::new(),
            RecordingNotifier::default(),
            ColorMode::Light,
        );
        controller.set(ColorMode::Dark);
        controller.into_parts()
    };

    // Same store, fresh controller, opposite system signal: the stored
    // choice wins.
    let controller =
        ThemeController::with_system(store, RecordingNotifier::default(), ColorMode::Light);
    assert_eq!(controller.mode(), ColorMode::Dark);
    assert!(controller.has_explicit_choice());
}

#[test]
fn system_changes_keep_applying_until_a_choice_is_made() {
    let mut controller = ThemeController::with_system(
        MemoryStore::new(),
        RecordingNotifier::default(),
        ColorMode::Light,
    );

    assert_eq!(
        controller.system_changed(ColorMode::Dark),
        Some(ColorMode::Dark)
    );
    assert_eq!(
        controller.system_changed(ColorMode::Light),
        Some(ColorMode::Light)
    );
    // Following the signal is not an explicit choice and stores nothing.
    assert!(!controller.has_explicit_choice());
    assert!(controller.store().get(PREFERENCE_KEY).is_none());
}

#[test]
fn persistence_failure_never_blocks_the_visible_change() {
    let mut controller = ThemeController::with_system(
        QuotaExceededStore,
        RecordingNotifier::default(),
        ColorMode::Light,
    );

    // The write fails inside, but the state and the notifier both moved.
    assert_eq!(controller.toggle(), ColorMode::Dark);
    assert_eq!(controller.mode(), ColorMode::Dark);
    assert_eq!(
        controller.notifier().applied,
        vec![(ColorMode::Light, false), (ColorMode::Dark, true)]
    );

    // The failed write still counts as an explicit choice in this
    // session.
    assert_eq!(controller.system_changed(ColorMode::Light), None);
}

#[test]
fn clearing_reopens_the_door_to_system_changes() {
    let mut controller = ThemeController::with_system(
        MemoryStore::new(),
        RecordingNotifier::default(),
        ColorMode::Dark,
    );

    controller.toggle();
    assert_eq!(controller.system_changed(ColorMode::Dark), None);

    controller.clear_preference(ColorMode::Dark);
    assert_eq!(controller.mode(), ColorMode::Dark);
    assert!(controller.store().get(PREFERENCE_KEY).is_none());
    assert_eq!(
        controller.system_changed(ColorMode::Light),
        Some(ColorMode::Light)
    );
}

#[test]
fn notifier_sees_startup_unanimated_and_changes_animated() {
    let mut controller = ThemeController::with_system(
        MemoryStore::new(),
        RecordingNotifier::default(),
        ColorMode::Light,
    );
    controller.toggle();
    controller.clear_preference(ColorMode::Light);

    assert_eq!(
        controller.notifier().applied,
        vec![
            (ColorMode::Light, false),
            (ColorMode::Dark, true),
            (ColorMode::Light, true),
        ]
    );
}
