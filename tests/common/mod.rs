//! Shared fixtures for integration tests.
//!
//! Check digits below were computed with the weighted mod-97 rule and are
//! cross-checked against `CnjNumber::from_parts` in `fixtures_are_consistent`.

#![allow(dead_code)]

/// Valid CNJ numbers with their expected segment names.
pub const VALID_NUMBERS: &[(&str, &str)] = &[
    ("0001234-75.2025.8.26.0100", "Justiça Estadual"),
    ("0000001-06.2024.4.03.0001", "Justiça Federal"),
    ("1234567-46.2023.5.02.0001", "Justiça do Trabalho"),
    ("0710802-54.2019.8.07.0001", "Justiça Estadual"),
    ("5001234-82.2021.1.00.0000", "Supremo Tribunal Federal"),
    ("0000000-98.0000.0.00.0000", "Segmento desconhecido"),
];

/// CNJ-shaped numbers whose check digits are wrong.
pub const BAD_CHECKSUM: &[&str] = &[
    "0001234-56.2025.8.26.0100",
    "0000001-60.2024.4.03.0001",
    "1234567-47.2023.5.02.0001",
];

/// Values that contain a hyphen and a period but not the CNJ shape.
pub const BAD_SHAPE: &[&str] = &[
    "1234-56.2025.8.26.0100",
    "0001234-56.2025.08.26.0100",
    "0001234-5.2025.8.26.0100",
    "Caso 12-34.56",
    "0001234-75.2025.8.26.0100.1",
];

/// Free-form references accepted by the permissive policy.
pub const FREE_FORM: &[&str] = &[
    "Processo Interno 42",
    "ADM/2024/001",
    "00012347520258260100",
    "caso-sem-ponto",
    "caso.sem.hifen",
];

/// Raw 20 digits of a valid number.
pub fn raw_digits(number: &str) -> String {
    number.chars().filter(|c| c.is_ascii_digit()).collect()
}
