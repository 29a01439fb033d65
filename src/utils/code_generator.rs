//! Random shortcode generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated shortcodes.
///
/// Sits inside the 5-20 range accepted by
/// [`crate::utils::validation::is_valid_shortcode`], so generated codes are
/// valid by construction.
pub const GENERATED_CODE_LENGTH: usize = 8;

/// Generates a random 8-character shortcode drawn uniformly from
/// `[A-Za-z0-9]`.
///
/// Not guaranteed globally unique by itself; uniqueness against the record
/// store is the shortening service's responsibility.
pub fn generate_shortcode() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_CODE_LENGTH)
        .map(char::from)
        .collect()
}
