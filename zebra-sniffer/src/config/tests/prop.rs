//! Randomised property tests for sniffer configuration.

use proptest::prelude::*;

use crate::config::*;

proptest! {
    /// Any valid integer string overrides the default delta.
    #[test]
    fn delta_override_round_trips(delta in any::<i64>()) {
        let _init_guard = crate::tests::init();

        let value = delta.to_string();
        prop_assert_eq!(Config::delta_from(|_| Some(value.clone())), delta);
    }

    /// Only the two accepted spellings enable the sniffer.
    #[test]
    fn arbitrary_flags_stay_disabled(value in "\\PC*") {
        let _init_guard = crate::tests::init();

        let enabled = Config::enable_from(|_| Some(value.clone()));
        prop_assert_eq!(enabled, value == "1" || value == "true");
    }
}
