//! Check-digit arithmetic for CNJ numbers.

/// Weights cycle 2..=9 from the leftmost digit.
const WEIGHTS: [u32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];

const MODULUS: u32 = 97;
const BASE: u32 = 98;

/// Computes the two check digits over the five non-check fields.
///
/// Fields are concatenated as `sequencial ano segmento tribunal origem`,
/// each digit is multiplied by its cycling weight, and the result is
/// `98 - (sum mod 97)`, zero padded to two characters. Non-digit
/// characters contribute nothing; shape is the caller's concern.
pub fn compute_check_digits(
    sequencial: &str,
    ano: &str,
    segmento: &str,
    tribunal: &str,
    origem: &str,
) -> String {
    let sum: u32 = [sequencial, ano, segmento, tribunal, origem]
        .iter()
        .flat_map(|field| field.chars())
        .filter_map(|c| c.to_digit(10))
        .zip(WEIGHTS.iter().cycle())
        .map(|(digit, weight)| digit * weight)
        .sum();

    format!("{:02}", BASE - sum % MODULUS)
}
