use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Color, CubeError};

/// Single sticker on the cube: a color and a label that travels with it.
///
/// The label is opaque to the engine. It is only read when rendering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Facelet<L> {
    color: Color,
    label: L,
}

impl<L> Facelet<L> {
    /// Constructs a facelet.
    pub fn new(color: Color, label: L) -> Self {
        Self { color, label }
    }

    /// Returns the color of the facelet.
    pub fn color(&self) -> Color {
        self.color
    }
    /// Returns the label of the facelet.
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Splits the facelet into its color and label.
    pub fn into_parts(self) -> (Color, L) {
        (self.color, self.label)
    }
}

impl<L> From<(Color, L)> for Facelet<L> {
    fn from((color, label): (Color, L)) -> Self {
        Self::new(color, label)
    }
}

impl<L: fmt::Display> fmt::Display for Facelet<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.color, self.label)
    }
}

/// Separator between color and label in a [`FaceletSpec`].
pub const SEPARATOR: char = ':';

/// Textual facelet entry of the form `<color>:<label>`, such as `O:22`.
///
/// Only the first `:` separates the color; the label may contain more.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceletSpec(pub Facelet<String>);

impl FromStr for FaceletSpec {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason| CubeError::InvalidEntry {
            index: None,
            entry: s.to_owned(),
            reason,
        };

        let (color, label) = s
            .split_once(SEPARATOR)
            .ok_or_else(|| malformed("missing `:` between color and label"))?;
        if color.is_empty() {
            return Err(malformed("missing color"));
        }
        if label.is_empty() {
            return Err(malformed("missing label"));
        }

        Ok(Self(Facelet::new(Color::from_symbol(color)?, label.to_owned())))
    }
}

impl fmt::Display for FaceletSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Parses a list of [`FaceletSpec`] entries separated by whitespace or commas.
///
/// Errors report the index of the offending entry.
pub fn parse_facelet_list(s: &str) -> Result<Vec<Facelet<String>>, CubeError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|entry| !entry.is_empty())
        .enumerate()
        .map(|(i, entry)| {
            entry
                .parse::<FaceletSpec>()
                .map(|spec| spec.0)
                .map_err(|e| e.at(i))
        })
        .collect()
}
