//! Expected-value formulas
//!
//! Both formulas share one shape: undo the increase already folded into the
//! displayed value, re-apply it together with an assumed extra bonus, then
//! scale by a flat multiplier for global increases that the pasted text
//! cannot show.
//!
//! `normalized = shown / (1 + increase) * (1 + increase + bonus) * global`

mod armor;
mod weapon;

pub use armor::evaluate_armor;
pub use weapon::{evaluate_weapon, WeaponDps};

/// Shared normalize-then-reapply step
pub fn reapply_increase(shown: f64, increase: f64, bonus: f64, global_multiplier: f64) -> f64 {
    (shown / (increase + 1.0)) * (increase + 1.0 + bonus) * global_multiplier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_increase_no_bonus() {
        let v = reapply_increase(100.0, 0.0, 0.0, 1.0);
        assert!((v - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_bonus_on_top_of_increase() {
        // 120 shown with 20% increase -> 100 base -> 100 * 1.6 * 1.2
        let v = reapply_increase(120.0, 0.2, 0.4, 1.2);
        assert!((v - 192.0).abs() < 1e-9);
    }
}
