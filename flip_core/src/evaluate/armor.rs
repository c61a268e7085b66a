//! Armour expected value

use super::reapply_increase;
use crate::config::FormulaConstants;
use crate::error::{FlipError, Result};
use crate::types::{ArmorStats, ItemKind};

/// Expected defence value of an armour piece
///
/// Uses both numbers when exactly two were extracted, otherwise the first
/// number with no increase. Body armours get `body_armor_bonus`, everything
/// else `other_armor_bonus`.
pub fn evaluate_armor(stats: &ArmorStats, kind: ItemKind, constants: &FormulaConstants) -> Result<f64> {
    let bonus = match kind {
        ItemKind::BodyArmor => constants.body_armor_bonus,
        _ => constants.other_armor_bonus,
    };

    let (base, increase) = match stats.values() {
        [base, increase] => (*base, *increase),
        [base, ..] => (*base, 0.0),
        [] => return Err(FlipError::MissingBaseValue),
    };

    Ok(reapply_increase(base, increase, bonus, constants.global_multiplier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn eval(values: &[f64], kind: ItemKind) -> f64 {
        evaluate_armor(&ArmorStats(values.to_vec()), kind, &FormulaConstants::default()).unwrap()
    }

    #[test]
    fn test_other_armor_with_increase() {
        // (150 / 1.2) * (1.2 + 0.2) * 1.2
        let v = eval(&[150.0, 0.20], ItemKind::OtherArmor);
        assert!((v - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_body_armor_without_increase() {
        // 100 * 1.4 * 1.2
        let v = eval(&[100.0], ItemKind::BodyArmor);
        assert!((v - 168.0).abs() < 1e-9);
    }

    #[test]
    fn test_extra_values_are_ignored() {
        // More than two numbers: only the first counts, with no increase
        let v = eval(&[100.0, 0.5, 7.0], ItemKind::OtherArmor);
        assert!((v - 144.0).abs() < 1e-9);
    }

    #[test]
    fn test_weapon_kind_uses_other_bonus() {
        let a = eval(&[100.0], ItemKind::Weapon);
        let b = eval(&[100.0], ItemKind::OtherArmor);
        assert!((a - b).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_is_missing_base() {
        let err = evaluate_armor(&ArmorStats::default(), ItemKind::BodyArmor, &FormulaConstants::default())
            .unwrap_err();
        assert!(matches!(err, FlipError::MissingBaseValue));
    }

    proptest! {
        #[test]
        fn single_value_means_zero_increase(base in 0.0f64..100_000.0, body in any::<bool>()) {
            let kind = if body { ItemKind::BodyArmor } else { ItemKind::OtherArmor };
            prop_assert_eq!(eval(&[base], kind), eval(&[base, 0.0], kind));
        }

        #[test]
        fn monotonic_in_base(a in 0.0f64..100_000.0, b in 0.0f64..100_000.0, inc in 0.0f64..5.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(eval(&[lo, inc], ItemKind::OtherArmor) <= eval(&[hi, inc], ItemKind::OtherArmor));
        }

        #[test]
        fn body_bonus_never_lower(base in 0.0f64..100_000.0, inc in 0.0f64..5.0) {
            prop_assert!(eval(&[base, inc], ItemKind::BodyArmor) >= eval(&[base, inc], ItemKind::OtherArmor));
        }
    }
}
