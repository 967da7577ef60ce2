use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, IntoStaticStr, VariantArray};

use crate::CubeError;

/// Sticker color.
///
/// Colors are listed in the order they appear on a solved cube built by
/// [`crate::CubeState::solved()`].
#[derive(
    Debug,
    Display,
    IntoStaticStr,
    EnumIter,
    EnumCount,
    VariantArray,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Color {
    /// Orange (`O`)
    #[strum(serialize = "O")]
    #[cfg_attr(feature = "serde", serde(rename = "O"))]
    Orange,
    /// Green (`G`)
    #[strum(serialize = "G")]
    #[cfg_attr(feature = "serde", serde(rename = "G"))]
    Green,
    /// Yellow (`Y`)
    #[strum(serialize = "Y")]
    #[cfg_attr(feature = "serde", serde(rename = "Y"))]
    Yellow,
    /// White (`W`)
    #[strum(serialize = "W")]
    #[cfg_attr(feature = "serde", serde(rename = "W"))]
    White,
    /// Red (`R`)
    #[strum(serialize = "R")]
    #[cfg_attr(feature = "serde", serde(rename = "R"))]
    Red,
    /// Blue (`B`)
    #[strum(serialize = "B")]
    #[cfg_attr(feature = "serde", serde(rename = "B"))]
    Blue,
}

impl Color {
    /// Parses a single-letter color symbol. Symbols are case-sensitive.
    pub fn from_symbol(s: &str) -> Result<Self, CubeError> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| CubeError::InvalidColor {
                index: None,
                symbol: s.to_owned(),
            })
    }

    /// Returns the single-letter symbol for the color as a string.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Returns the single-letter symbol for the color.
    pub fn symbol(self) -> char {
        char::from(self.as_str().as_bytes()[0])
    }
}

impl FromStr for Color {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}
