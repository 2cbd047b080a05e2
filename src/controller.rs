//! Event wiring between the policy core and its collaborators.

use log::debug;

use crate::mode::ColorMode;
use crate::notify::Notifier;
use crate::policy;
use crate::store::{Store, PREFERENCE_KEY};

/// Owns the resolved theme state and drives the store and notifier.
///
/// All methods run synchronously on the caller's thread; the controller
/// holds no timers or locks of its own. Persistence failures are logged
/// and discarded; a full or restricted backend never blocks the visible
/// change.
///
/// # Example
///
/// ```rust
/// use shade::{ColorMode, MemoryStore, NullNotifier, ThemeController};
///
/// let mut controller =
///     ThemeController::with_system(MemoryStore::new(), NullNotifier, ColorMode::Dark);
/// assert_eq!(controller.mode(), ColorMode::Dark);
///
/// controller.toggle();
/// assert_eq!(controller.mode(), ColorMode::Light);
///
/// // The explicit choice outlives later system changes.
/// assert_eq!(controller.system_changed(ColorMode::Dark), None);
/// ```
pub struct ThemeController<S, N> {
    store: S,
    notifier: N,
    mode: ColorMode,
    explicit: bool,
}

impl<S: Store, N: Notifier> ThemeController<S, N> {
    /// Resolves the initial mode from the store and the live OS signal,
    /// then applies it without animation.
    pub fn start(store: S, notifier: N) -> Self {
        Self::with_system(store, notifier, crate::detect::system_color_mode())
    }

    /// Like [`ThemeController::start`], with the system signal supplied
    /// by the caller.
    ///
    /// Resolution never writes the store: an unset preference stays unset
    /// until the user acts, keeping "no choice yet" distinct from an
    /// explicit light choice.
    pub fn with_system(store: S, mut notifier: N, system: ColorMode) -> Self {
        let persisted = store
            .get(PREFERENCE_KEY)
            .as_deref()
            .and_then(policy::decode_preference);
        let mode = policy::resolve_initial(persisted, system);
        notifier.apply(mode, false);
        Self {
            store,
            notifier,
            mode,
            explicit: persisted.is_some(),
        }
    }

    /// Currently resolved mode.
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// True once the user has made an explicit choice, whether persisted
    /// earlier or made in this session.
    pub fn has_explicit_choice(&self) -> bool {
        self.explicit
    }

    /// Returns a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a reference to the notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Flips the mode as an explicit user action and persists the result.
    pub fn toggle(&mut self) -> ColorMode {
        let next = policy::toggle(self.mode);
        self.choose(next);
        next
    }

    /// Applies `mode` as an explicit user action and persists it.
    pub fn set(&mut self, mode: ColorMode) {
        self.choose(mode);
    }

    /// Feeds an OS preference change.
    ///
    /// Returns the newly applied mode, or `None` when an explicit choice
    /// keeps the change from taking effect. Accepted changes are never
    /// persisted.
    pub fn system_changed(&mut self, new_system: ColorMode) -> Option<ColorMode> {
        let accepted = policy::on_system_change(new_system, self.explicit)?;
        self.mode = accepted;
        self.notifier.apply(accepted, true);
        Some(accepted)
    }

    /// Forgets the persisted choice and re-resolves from `system`.
    pub fn clear_preference(&mut self, system: ColorMode) {
        if let Err(err) = self.store.remove(PREFERENCE_KEY) {
            debug!("discarding preference removal failure: {err}");
        }
        self.explicit = false;
        self.mode = policy::resolve_initial(None, system);
        self.notifier.apply(self.mode, true);
    }

    /// Releases the controller, returning its collaborators.
    pub fn into_parts(self) -> (S, N) {
        (self.store, self.notifier)
    }

    fn choose(&mut self, mode: ColorMode) {
        self.mode = mode;
        self.explicit = true;
        self.notifier.apply(mode, true);
        if let Err(err) = self
            .store
            .set(PREFERENCE_KEY, policy::encode_preference(mode))
        {
            debug!("discarding preference write failure: {err}");
        }
    }
}
