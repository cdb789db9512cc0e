//! Domain logic for CNJ process numbers.
//!
//! The formatter, check-digit calculator, typed identifier and text
//! matcher all live here. Everything is pure and synchronous.

pub mod check_digits;
pub mod mask;
pub mod matcher;
pub mod number;
pub mod segment;

pub use check_digits::compute_check_digits;
pub use mask::{digits_only, format};
pub use matcher::CnjMatcher;
pub use number::{extract_cnj_info, is_valid_cnj, matches_cnj_shape, CnjInfo, CnjNumber};
pub use segment::{segment_name, Segmento, UNKNOWN_SEGMENT};

use regex::Regex;

/// Number of digits in a complete CNJ identifier.
pub const CNJ_DIGITS: usize = 20;

/// Trait for locating and normalizing identifiers in text.
pub trait PatternMatcher: Send + Sync {
    fn pattern(&self) -> &Regex;
    fn extract_all<'a>(&self, text: &'a str) -> Vec<&'a str>;
    fn normalize(&self, text: &str) -> Option<String>;
    fn generate_variants(&self, normalized: &str) -> Vec<String>;
}
