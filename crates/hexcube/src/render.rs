//! Text rendering of the unfolded layout.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{CubeError, CubeState, FACE_SIZE, Face, FaceId, Facelet};

/// Number of lines in a rendered cube.
pub const RENDERED_LINES: usize = 12;

/// Indentation before faces that are not part of the middle band.
const INDENT: &str = "           ";
/// Gap between faces in the middle band.
const GAP: &str = "   ";

/// What to print for each facelet.
#[derive(Debug, Display, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum RenderMode {
    /// Color symbol, such as `O`.
    #[default]
    Color,
    /// Label.
    Label,
}

impl FromStr for RenderMode {
    type Err = CubeError;

    /// Parses `color` or `label` (case-insensitive). The numeric forms `0`
    /// and `1` are also accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "color" | "colour" | "0" => Ok(Self::Color),
            "label" | "1" => Ok(Self::Label),
            _ => Err(CubeError::InvalidRenderMode(s.to_owned())),
        }
    }
}

impl RenderMode {
    fn cell<L: fmt::Display>(self, facelet: &Facelet<L>) -> String {
        match self {
            RenderMode::Color => facelet.color().to_string(),
            RenderMode::Label => facelet.label().to_string(),
        }
    }
}

/// Renders the cube as an unfolded layout of [`RENDERED_LINES`] lines, each
/// ending in a newline.
///
/// ```text
///            O O O
///            O O O
///            O O O
/// G G G   Y Y Y   W W W
/// G G G   Y Y Y   W W W
/// G G G   Y Y Y   W W W
///            R R R
///            R R R
///            R R R
///            B B B
///            B B B
///            B B B
/// ```
pub fn render<L: fmt::Display>(cube: &CubeState<L>, mode: RenderMode) -> String {
    let row = |id: FaceId, i: usize| face_row(cube.face(id), i, mode);

    let mut out = String::new();
    for i in 0..FACE_SIZE {
        out += &format!("{INDENT}{}\n", row(FaceId::Top, i));
    }
    for i in 0..FACE_SIZE {
        let left = row(FaceId::Left, i);
        let center = row(FaceId::Center, i);
        let right = row(FaceId::Right, i);
        out += &format!("{left}{GAP}{center}{GAP}{right}\n");
    }
    for id in [FaceId::Bottom, FaceId::TailEnd] {
        for i in 0..FACE_SIZE {
            out += &format!("{INDENT}{}\n", row(id, i));
        }
    }
    out
}

fn face_row<L: fmt::Display>(face: &Face<L>, i: usize, mode: RenderMode) -> String {
    face.rows()[i].iter().map(|f| mode.cell(f)).join(" ")
}
