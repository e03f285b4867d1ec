//! Property-based tests for the unit engine.
//!
//! Applies every unit system and checks that the published conversion
//! tables are closed and numerically stable for arbitrary values.

use foundry_units::prelude::*;
use foundry_units::RuleKind;
use proptest::prelude::*;

// ===========================================================================
// Helpers
// ===========================================================================

fn all_systems() -> Vec<UnitSystem> {
    UnitSystemType::ALL
        .iter()
        .map(|&system| UnitSystem::with_system(system).unwrap())
        .collect()
}

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

fn arb_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e6..1.0e6f64,
        -1.0..1.0f64,
        Just(0.0),
    ]
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Converting any registered unit to itself returns the input unchanged.
    #[test]
    fn identity_conversion_is_exact(value in arb_value()) {
        for units in all_systems() {
            for category in units.categories() {
                for unit in category.units() {
                    let outcome = category.convert_reported(unit.name(), unit.name(), value);
                    prop_assert!(!outcome.is_fallback(), "{} {}", category.title(), unit);
                    prop_assert_eq!(outcome.value, value);
                }
            }
        }
    }

    /// Every ratio rule has a reverse rule and the pair round-trips.
    #[test]
    fn ratio_rules_round_trip(value in arb_value()) {
        for units in all_systems() {
            for category in units.categories() {
                for rule in category.conversions() {
                    if !matches!(rule.kind(), RuleKind::Ratio { .. }) {
                        continue;
                    }
                    let there = rule.convert(value);
                    let back = category.try_convert(rule.to_unit(), rule.from_unit(), there);
                    prop_assert!(back.is_ok(), "no reverse for {}", rule.name());
                    prop_assert!(close(back.unwrap(), value), "{} drifted", rule.name());
                }
            }
        }
    }

    /// Every unit reaches the base unit and comes back, formulas included.
    #[test]
    fn base_round_trip(value in arb_value()) {
        for units in all_systems() {
            for category in units.categories() {
                for unit in category.units() {
                    let base = category.try_convert(unit.name(), category.base_units().name(), value);
                    prop_assert!(base.is_ok());
                    let back = category
                        .try_convert(category.base_units().name(), unit.name(), base.unwrap())
                        .unwrap();
                    prop_assert!(close(back, value), "{} via {}", unit, category.base_units());
                }
            }
        }
    }

    /// The rounded kg/lb constants stay within a fixed error bound.
    #[test]
    fn mass_precision_is_bounded(kg in 0.0..1.0e4f64) {
        let mks = UnitSystem::with_system(UnitSystemType::Mks).unwrap();
        let fps = UnitSystem::with_system(UnitSystemType::Fps).unwrap();

        let via_mks = mks.mass().unwrap().convert("kg", "lb", kg);
        let pounds = Mass::new(&mks, kg, "kg").as_units(&mks, "lb");
        prop_assert_eq!(via_mks, pounds);

        let in_fps = Mass::new(&fps, kg, "kg");
        prop_assert_eq!(in_fps.internal(), "lb");
        prop_assert!((in_fps.value() - via_mks).abs() <= 1e-9 * kg.max(1.0));
    }

    /// Serialized measured values come back with the same stored pair.
    #[test]
    fn measured_value_serde_round_trip(value in arb_value(), meters in prop::bool::ANY) {
        let unit = if meters { "m" } else { "in" };
        let length = Length::from_raw(value, unit);
        let json = serde_json::to_string(&length).unwrap();
        let back: Length = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, length);
    }
}
