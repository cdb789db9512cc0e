//! The CNJ identifier as a typed value.
//!
//! A CNJ number is 20 ASCII digits split into six fixed-width fields:
//!
//! | field      | width | meaning                               |
//! |------------|-------|---------------------------------------|
//! | sequencial | 7     | case sequence in the originating unit |
//! | digitos    | 2     | check digits                          |
//! | ano        | 4     | filing year                           |
//! | segmento   | 1     | judiciary segment                     |
//! | tribunal   | 2     | court within the segment              |
//! | origem     | 4     | originating unit                      |
//!
//! All slicing happens here, on a digit string whose length was checked
//! at construction.

use super::check_digits::compute_check_digits;
use super::mask::{digits_only, format};
use super::segment::{segment_name, Segmento};
use super::CNJ_DIGITS;
use crate::error::{CnjError, CnjResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

const SEQUENCIAL: Range<usize> = 0..7;
const DIGITOS: Range<usize> = 7..9;
const ANO: Range<usize> = 9..13;
const SEGMENTO: Range<usize> = 13..14;
const TRIBUNAL: Range<usize> = 14..16;
const ORIGEM: Range<usize> = 16..20;

/// Anchored shape of a punctuated CNJ number. ASCII classes only; `\d`
/// would also accept other Unicode digits.
pub(crate) fn shape_regex() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^[0-9]{7}-[0-9]{2}\.[0-9]{4}\.[0-9]\.[0-9]{2}\.[0-9]{4}$")
            .expect("Valid CNJ shape regex")
    });
    &PATTERN
}

/// Returns true iff `value` has the exact `NNNNNNN-DD.AAAA.J.TR.OOOO` shape.
///
/// Pure punctuation check; the check digits are not verified.
pub fn matches_cnj_shape(value: &str) -> bool {
    shape_regex().is_match(value)
}

/// Returns true iff `value` has CNJ shape and correct check digits.
pub fn is_valid_cnj(value: &str) -> bool {
    CnjNumber::parse(value).is_ok()
}

/// Decomposes a valid CNJ number into its fields, or `None` if invalid.
pub fn extract_cnj_info(value: &str) -> Option<CnjInfo> {
    CnjNumber::parse(value).ok().map(|number| number.info())
}

/// Field breakdown of a valid CNJ number, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CnjInfo {
    pub sequencial: String,
    pub digitos: String,
    pub ano: String,
    pub segmento: String,
    pub segmento_nome: String,
    pub tribunal: String,
    pub origem: String,
}

impl CnjInfo {
    /// Concatenates the fields back into the 20 raw digits.
    pub fn raw_digits(&self) -> String {
        [
            self.sequencial.as_str(),
            self.digitos.as_str(),
            self.ano.as_str(),
            self.segmento.as_str(),
            self.tribunal.as_str(),
            self.origem.as_str(),
        ]
        .concat()
    }
}

/// A CNJ number whose shape and check digits have been verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CnjNumber {
    digits: String,
}

impl CnjNumber {
    /// Parses a punctuated number, verifying shape and check digits.
    pub fn parse(value: &str) -> CnjResult<Self> {
        if value.trim().is_empty() {
            return Err(CnjError::Empty);
        }
        if !matches_cnj_shape(value) {
            return Err(CnjError::InvalidShape {
                value: value.to_string(),
            });
        }
        Self::verified(digits_only(value))
    }

    /// Builds a number from 20 raw digits; any punctuation is ignored.
    pub fn from_digits(raw: &str) -> CnjResult<Self> {
        let digits = digits_only(raw);
        if digits.is_empty() {
            return Err(CnjError::Empty);
        }
        if digits.len() != CNJ_DIGITS {
            return Err(CnjError::InvalidLength {
                expected: CNJ_DIGITS,
                found: digits.len(),
            });
        }
        Self::verified(digits)
    }

    /// Builds a new number from its five non-check fields, computing the
    /// check digits.
    pub fn from_parts(
        sequencial: &str,
        ano: &str,
        segmento: &str,
        tribunal: &str,
        origem: &str,
    ) -> CnjResult<Self> {
        check_field("sequencial", sequencial, SEQUENCIAL.len())?;
        check_field("ano", ano, ANO.len())?;
        check_field("segmento", segmento, SEGMENTO.len())?;
        check_field("tribunal", tribunal, TRIBUNAL.len())?;
        check_field("origem", origem, ORIGEM.len())?;

        let digitos = compute_check_digits(sequencial, ano, segmento, tribunal, origem);
        Ok(Self {
            digits: [sequencial, digitos.as_str(), ano, segmento, tribunal, origem].concat(),
        })
    }

    fn verified(digits: String) -> CnjResult<Self> {
        let number = Self { digits };
        let expected = number.expected_check_digits();
        if expected != number.digitos() {
            tracing::trace!(
                number = %number,
                expected = %expected,
                "check digit mismatch"
            );
            return Err(CnjError::CheckDigitMismatch {
                expected,
                found: number.digitos().to_string(),
            });
        }
        Ok(number)
    }

    fn expected_check_digits(&self) -> String {
        compute_check_digits(
            self.sequencial(),
            self.ano(),
            self.segmento(),
            self.tribunal(),
            self.origem(),
        )
    }

    pub fn sequencial(&self) -> &str {
        &self.digits[SEQUENCIAL]
    }

    pub fn digitos(&self) -> &str {
        &self.digits[DIGITOS]
    }

    pub fn ano(&self) -> &str {
        &self.digits[ANO]
    }

    pub fn segmento(&self) -> &str {
        &self.digits[SEGMENTO]
    }

    pub fn tribunal(&self) -> &str {
        &self.digits[TRIBUNAL]
    }

    pub fn origem(&self) -> &str {
        &self.digits[ORIGEM]
    }

    /// The judiciary segment, or `None` for code 0.
    pub fn segment(&self) -> Option<Segmento> {
        Segmento::from_field(self.segmento())
    }

    /// The 20 digits without punctuation.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn info(&self) -> CnjInfo {
        CnjInfo {
            sequencial: self.sequencial().to_string(),
            digitos: self.digitos().to_string(),
            ano: self.ano().to_string(),
            segmento: self.segmento().to_string(),
            segmento_nome: segment_name(self.segmento()).to_string(),
            tribunal: self.tribunal().to_string(),
            origem: self.origem().to_string(),
        }
    }
}

fn check_field(field: &'static str, value: &str, width: usize) -> CnjResult<()> {
    if value.len() != width || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CnjError::Field {
            field,
            reason: format!("expected {} digits, got '{}'", width, value),
        });
    }
    Ok(())
}

impl fmt::Display for CnjNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(&self.digits))
    }
}

impl FromStr for CnjNumber {
    type Err = CnjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "0001234-75.2025.8.26.0100";

    #[test]
    fn test_shape() {
        assert!(matches_cnj_shape("0001234-56.2025.8.26.0100"));
        assert!(!matches_cnj_shape("0001234-56.2025.08.26.0100"));
        assert!(!matches_cnj_shape(" 0001234-56.2025.8.26.0100"));
        assert!(!matches_cnj_shape("00012345620258260100"));
        // Arabic-Indic digits are not ASCII
        assert!(!matches_cnj_shape("٠٠٠١٢٣٤-56.2025.8.26.0100"));
    }

    #[test]
    fn test_valid_number() {
        assert!(is_valid_cnj(VALID));
        assert!(!is_valid_cnj("0001234-56.2025.8.26.0100"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(CnjNumber::parse("  "), Err(CnjError::Empty));
        assert!(matches!(
            CnjNumber::parse("1234-56.2025.8.26.0100"),
            Err(CnjError::InvalidShape { .. })
        ));
        assert_eq!(
            CnjNumber::parse("0001234-56.2025.8.26.0100"),
            Err(CnjError::CheckDigitMismatch {
                expected: "75".to_string(),
                found: "56".to_string(),
            })
        );
    }

    #[test]
    fn test_fields() {
        let number: CnjNumber = VALID.parse().unwrap();
        assert_eq!(number.sequencial(), "0001234");
        assert_eq!(number.digitos(), "75");
        assert_eq!(number.ano(), "2025");
        assert_eq!(number.segmento(), "8");
        assert_eq!(number.tribunal(), "26");
        assert_eq!(number.origem(), "0100");
        assert_eq!(number.segment(), Some(Segmento::JusticaEstadual));
        assert_eq!(number.to_string(), VALID);
    }

    #[test]
    fn test_from_digits() {
        let number = CnjNumber::from_digits("00012347520258260100").unwrap();
        assert_eq!(number.to_string(), VALID);
        assert_eq!(
            CnjNumber::from_digits("123"),
            Err(CnjError::InvalidLength {
                expected: 20,
                found: 3
            })
        );
    }

    #[test]
    fn test_from_parts() {
        let number = CnjNumber::from_parts("0001234", "2025", "8", "26", "0100").unwrap();
        assert_eq!(number.to_string(), VALID);

        let err = CnjNumber::from_parts("1234", "2025", "8", "26", "0100").unwrap_err();
        assert!(matches!(err, CnjError::Field { field: "sequencial", .. }));

        let err = CnjNumber::from_parts("0001234", "20a5", "8", "26", "0100").unwrap_err();
        assert!(matches!(err, CnjError::Field { field: "ano", .. }));
    }

    #[test]
    fn test_extract_info() {
        let info = extract_cnj_info(VALID).unwrap();
        assert_eq!(info.segmento_nome, "Justiça Estadual");
        assert_eq!(info.raw_digits(), "00012347520258260100");
        assert_eq!(extract_cnj_info("not-a-cnj-number"), None);
    }

    #[test]
    fn test_segment_zero_is_unknown() {
        let info = extract_cnj_info("0000000-98.0000.0.00.0000").unwrap();
        assert_eq!(info.segmento_nome, "Segmento desconhecido");
    }

    #[test]
    fn test_info_serializes_camel_case() {
        let json = serde_json::to_value(extract_cnj_info(VALID).unwrap()).unwrap();
        assert_eq!(json["segmentoNome"], "Justiça Estadual");
        assert_eq!(json["digitos"], "75");
    }
}
