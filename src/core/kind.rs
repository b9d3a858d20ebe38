//! # Pair Kind
//!
//! The five relationships two circles can have.

use serde::Serialize;

/// Classification of a circle pair
///
/// Exactly one label applies to any valid pair:
/// - `Identical`: same centers, same radii
/// - `Concentric`: same centers, different radii
/// - `DisjointInside`: different centers, one circle entirely inside the other
/// - `DisjointOutside`: partial overlap, each circle keeps area of its own
/// - `Nonoverlapping`: zero intersection area, tangency included
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PairKind {
    #[serde(rename = "Identical")]
    Identical,
    #[serde(rename = "Concentric")]
    Concentric,
    #[serde(rename = "Disjoint-inside")]
    DisjointInside,
    #[serde(rename = "Disjoint-outside")]
    DisjointOutside,
    #[serde(rename = "Nonoverlapping")]
    Nonoverlapping,
}

impl PairKind {
    /// Canonical label for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            PairKind::Identical => "Identical",
            PairKind::Concentric => "Concentric",
            PairKind::DisjointInside => "Disjoint-inside",
            PairKind::DisjointOutside => "Disjoint-outside",
            PairKind::Nonoverlapping => "Nonoverlapping",
        }
    }
}

impl std::fmt::Display for PairKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
