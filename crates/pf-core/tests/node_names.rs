//! Property tests for node-name parsing.

use pf_core::{NodeName, Phase};
use proptest::prelude::*;

proptest! {
    #[test]
    fn dotted_names_keep_bus_and_terminal(bus in "[A-Za-z][A-Za-z0-9_]{0,12}", terminal in 1_u8..=9) {
        let raw = format!("{bus}.{terminal}");
        let parsed = NodeName::parse(&raw).unwrap();
        prop_assert_eq!(parsed.bus, bus);
        prop_assert_eq!(parsed.phase.number(), terminal);
    }

    #[test]
    fn bare_names_are_reference_phase(bus in "[A-Za-z][A-Za-z0-9_]{0,12}") {
        let parsed = NodeName::parse(&bus).unwrap();
        prop_assert_eq!(parsed.phase, Phase::REFERENCE);
        prop_assert_eq!(parsed.bus, bus);
    }
}
