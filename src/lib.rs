//! CNJ legal process-number handling.
//!
//! Brazilian court cases are identified by a 20-digit number defined by the
//! Conselho Nacional de Justiça, written as `NNNNNNN-DD.AAAA.J.TR.OOOO`.
//! This library masks, validates and decomposes those numbers, and accepts
//! free-form case references alongside them.
//!
//! # Features
//!
//! - **Input mask**: incremental punctuation while the user types
//! - **Check digits**: weighted mod-97 check-digit calculation
//! - **Validation**: shape and checksum checks with form-ready messages
//! - **Field extraction**: year, segment, court and origin of a number
//! - **Text scanning**: finding CNJ numbers quoted in free text
//!
//! # Architecture
//!
//! - [`domain`]: the CNJ number itself (mask, check digits, fields, matcher)
//! - [`validation`]: form-facing validation policy and results
//! - [`error`]: parse errors for the typed constructors
//!
//! None of the free functions fail: invalid input is reported through
//! `false`, `None` or a structured [`ProcessNumberValidation`].
//!
//! # Quick Start
//!
//! ```
//! use cnj::{format, validate_process_number, ProcessNumberKind};
//!
//! assert_eq!(format("00012347520258260100"), "0001234-75.2025.8.26.0100");
//!
//! let result = validate_process_number("0001234-75.2025.8.26.0100");
//! assert!(result.is_valid);
//! assert_eq!(result.kind, ProcessNumberKind::Cnj);
//! ```
//!
//! # Examples
//!
//! ## Field extraction
//!
//! ```
//! use cnj::extract_cnj_info;
//!
//! let info = extract_cnj_info("0001234-75.2025.8.26.0100").unwrap();
//! assert_eq!(info.ano, "2025");
//! assert_eq!(info.segmento_nome, "Justiça Estadual");
//! ```
//!
//! ## Scanning text
//!
//! ```
//! use cnj::domain::CnjMatcher;
//!
//! let matcher = CnjMatcher::new();
//! let found = matcher.find_valid("Ref.: autos nº 1234567-46.2023.5.02.0001");
//! assert_eq!(found.len(), 1);
//! ```

pub mod domain;
pub mod error;
pub mod validation;

pub use domain::{
    compute_check_digits, extract_cnj_info, format, is_valid_cnj, matches_cnj_shape, CnjInfo,
    CnjMatcher, CnjNumber, PatternMatcher, Segmento,
};
pub use error::{CnjError, CnjResult};
pub use validation::{
    validate_process_number, ProcessNumberKind, ProcessNumberValidation, ProcessNumberValidator,
    ValidationPolicy,
};
