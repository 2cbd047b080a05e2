//! Property tests for the pure resolution policy.

use proptest::prelude::*;
use shade::{policy, ColorMode};

fn mode_strategy() -> impl Strategy<Value = ColorMode> {
    prop_oneof![Just(ColorMode::Light), Just(ColorMode::Dark)]
}

proptest! {
    #[test]
    fn double_toggle_is_identity(mode in mode_strategy()) {
        prop_assert_eq!(policy::toggle(policy::toggle(mode)), mode);
    }

    #[test]
    fn persisted_value_always_wins(persisted in mode_strategy(), system in mode_strategy()) {
        prop_assert_eq!(policy::resolve_initial(Some(persisted), system), persisted);
    }

    #[test]
    fn absent_preference_follows_system(system in mode_strategy()) {
        prop_assert_eq!(policy::resolve_initial(None, system), system);
    }

    #[test]
    fn explicit_choice_blocks_any_system_change(new_system in mode_strategy()) {
        prop_assert_eq!(policy::on_system_change(new_system, true), None);
    }

    #[test]
    fn open_door_admits_any_system_change(new_system in mode_strategy()) {
        prop_assert_eq!(policy::on_system_change(new_system, false), Some(new_system));
    }

    #[test]
    fn arbitrary_stored_strings_never_panic(raw in ".*") {
        let _ = policy::decode_preference(&raw);
    }
}
