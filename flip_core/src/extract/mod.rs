//! Numeric extraction from filtered lines

mod armor;
mod weapon;

pub use armor::extract_armor;
pub use weapon::extract_weapon;

fn has_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}
