//! Judiciary segment codes (the `J` field of a CNJ number).

use std::fmt;

/// Name shown for a code outside the 1–9 table.
pub const UNKNOWN_SEGMENT: &str = "Segmento desconhecido";

/// Branch of the Brazilian judiciary identified by the one-digit `J` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segmento {
    SupremoTribunalFederal,
    ConselhoNacionalDeJustica,
    SuperiorTribunalDeJustica,
    JusticaFederal,
    JusticaDoTrabalho,
    JusticaEleitoral,
    JusticaMilitarDaUniao,
    JusticaEstadual,
    JusticaMilitarEstadual,
}

impl Segmento {
    pub const ALL: [Segmento; 9] = [
        Self::SupremoTribunalFederal,
        Self::ConselhoNacionalDeJustica,
        Self::SuperiorTribunalDeJustica,
        Self::JusticaFederal,
        Self::JusticaDoTrabalho,
        Self::JusticaEleitoral,
        Self::JusticaMilitarDaUniao,
        Self::JusticaEstadual,
        Self::JusticaMilitarEstadual,
    ];

    /// Looks up a segment by its numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=9 => Some(Self::ALL[usize::from(code - 1)]),
            _ => None,
        }
    }

    /// Looks up a segment by the single-character field as it appears in a number.
    pub fn from_field(field: &str) -> Option<Self> {
        let mut chars = field.chars();
        match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
            (Some(d), None) => Self::from_code(d as u8),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::SupremoTribunalFederal => 1,
            Self::ConselhoNacionalDeJustica => 2,
            Self::SuperiorTribunalDeJustica => 3,
            Self::JusticaFederal => 4,
            Self::JusticaDoTrabalho => 5,
            Self::JusticaEleitoral => 6,
            Self::JusticaMilitarDaUniao => 7,
            Self::JusticaEstadual => 8,
            Self::JusticaMilitarEstadual => 9,
        }
    }

    /// Human-readable Portuguese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::SupremoTribunalFederal => "Supremo Tribunal Federal",
            Self::ConselhoNacionalDeJustica => "Conselho Nacional de Justiça",
            Self::SuperiorTribunalDeJustica => "Superior Tribunal de Justiça",
            Self::JusticaFederal => "Justiça Federal",
            Self::JusticaDoTrabalho => "Justiça do Trabalho",
            Self::JusticaEleitoral => "Justiça Eleitoral",
            Self::JusticaMilitarDaUniao => "Justiça Militar da União",
            Self::JusticaEstadual => "Justiça Estadual",
            Self::JusticaMilitarEstadual => "Justiça Militar Estadual",
        }
    }
}

impl fmt::Display for Segmento {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves a segment field to its display name, falling back to
/// [`UNKNOWN_SEGMENT`].
pub fn segment_name(field: &str) -> &'static str {
    Segmento::from_field(field).map_or(UNKNOWN_SEGMENT, Segmento::name)
}
