//! Finding CNJ numbers inside free text.
//!
//! Petitions, e-mails and court notices quote case numbers inline; this
//! matcher pulls them out so they can be checked or linked to a case.

use super::mask::digits_only;
use super::number::CnjNumber;
use super::PatternMatcher;
use once_cell::sync::Lazy;
use regex::Regex;

/// Scanner for punctuated CNJ numbers embedded in text.
#[derive(Debug, Clone)]
pub struct CnjMatcher;

impl CnjMatcher {
    /// Creates a new CNJ matcher.
    pub fn new() -> Self {
        Self
    }

    /// Unanchored CNJ shape. Context is checked by [`has_clean_edges`]
    /// since the regex crate has no lookarounds.
    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"[0-9]{7}-[0-9]{2}\.[0-9]{4}\.[0-9]\.[0-9]{2}\.[0-9]{4}")
                .expect("Valid CNJ search regex")
        });
        &PATTERN
    }

    /// Returns every CNJ-shaped token whose check digits are correct,
    /// in order of appearance.
    pub fn find_valid(&self, text: &str) -> Vec<CnjNumber> {
        self.extract_all(text)
            .into_iter()
            .filter_map(|candidate| CnjNumber::parse(candidate).ok())
            .collect()
    }
}

impl Default for CnjMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for CnjMatcher {
    fn pattern(&self) -> &Regex {
        Self::regex()
    }

    fn extract_all<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern()
            .find_iter(text)
            .filter(|m| has_clean_edges(text.as_bytes(), m.start(), m.end()))
            .map(|m| m.as_str())
            .collect()
    }

    fn normalize(&self, text: &str) -> Option<String> {
        // First valid number, not just the first shaped one
        self.find_valid(text)
            .into_iter()
            .next()
            .map(|number| number.digits().to_string())
    }

    fn generate_variants(&self, normalized: &str) -> Vec<String> {
        match CnjNumber::from_digits(normalized) {
            Ok(number) => vec![number.digits().to_string(), number.to_string()],
            Err(_) => vec![digits_only(normalized)],
        }
    }
}

/// A match must not continue a digit run, or a run joined by `.` or `-`,
/// on either side. Letters and other symbols may touch it (`Nº0001234-...`).
fn has_clean_edges(text: &[u8], start: usize, end: usize) -> bool {
    fn extends(next: Option<u8>, beyond: Option<u8>) -> bool {
        match next {
            Some(b) if b.is_ascii_digit() => true,
            Some(b'.') | Some(b'-') => beyond.is_some_and(|b| b.is_ascii_digit()),
            _ => false,
        }
    }

    let before = &text[..start];
    let after = &text[end..];
    !extends(before.last().copied(), before.iter().rev().nth(1).copied())
        && !extends(after.first().copied(), after.get(1).copied())
}
