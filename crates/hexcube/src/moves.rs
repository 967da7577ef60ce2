//! Move tokens such as `R`, `U2`, and `F'`.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, VariantArray};

use crate::{CubeError, FaceId};

/// Every valid move token, grouped by face letter in the order
/// clockwise, half turn, counterclockwise.
///
/// The number of quarter turns for a token at index `i` is `i % 3 + 1`.
pub const MOVE_TOKENS: [&str; 18] = [
    "F", "F2", "F'", "R", "R2", "R'", "U", "U2", "U'", "B", "B2", "B'", "L", "L2", "L'", "D",
    "D2", "D'",
];

/// Face letter of a move.
#[derive(Debug, Display, EnumIter, EnumCount, VariantArray, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum FaceLetter {
    /// Front; turns [`FaceId::Center`].
    F,
    /// Turns [`FaceId::Bottom`].
    R,
    /// Turns [`FaceId::Right`].
    U,
    /// Back; turns [`FaceId::TailEnd`].
    B,
    /// Turns [`FaceId::Top`].
    L,
    /// Turns [`FaceId::Left`].
    D,
}

impl FaceLetter {
    /// Returns the face whose own facelets are rotated by this move.
    pub fn turned_face(self) -> FaceId {
        match self {
            FaceLetter::F => FaceId::Center,
            FaceLetter::R => FaceId::Bottom,
            FaceLetter::U => FaceId::Right,
            FaceLetter::B => FaceId::TailEnd,
            FaceLetter::L => FaceId::Top,
            FaceLetter::D => FaceId::Left,
        }
    }
}

/// Amount to turn a face, measured in clockwise quarter turns.
#[derive(Debug, VariantArray, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[repr(u8)]
pub enum TurnAmount {
    /// Quarter turn clockwise (no suffix).
    Clockwise = 1,
    /// Half turn (`2` suffix).
    Half = 2,
    /// Quarter turn counterclockwise (`'` suffix), performed as three
    /// clockwise quarter turns.
    CounterClockwise = 3,
}

impl TurnAmount {
    /// Returns the number of clockwise quarter turns.
    pub fn units(self) -> u8 {
        self as u8
    }

    /// Returns the amount that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            TurnAmount::Clockwise => TurnAmount::CounterClockwise,
            TurnAmount::Half => TurnAmount::Half,
            TurnAmount::CounterClockwise => TurnAmount::Clockwise,
        }
    }

    fn from_units(units: usize) -> Option<Self> {
        match units {
            1 => Some(TurnAmount::Clockwise),
            2 => Some(TurnAmount::Half),
            3 => Some(TurnAmount::CounterClockwise),
            _ => None,
        }
    }
}

/// Face turn, such as `R` or `U2` or `F'`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Move {
    /// Face letter.
    pub face: FaceLetter,
    /// How far to turn the face.
    pub amount: TurnAmount,
}

impl Move {
    /// Constructs a move.
    pub fn new(face: FaceLetter, amount: TurnAmount) -> Self {
        Self { face, amount }
    }

    /// Returns the index of the move in [`MOVE_TOKENS`].
    pub fn token_index(self) -> usize {
        self.face as usize * 3 + self.amount.units() as usize - 1
    }

    /// Returns the move token, such as `"R2"`.
    pub fn token(self) -> &'static str {
        MOVE_TOKENS[self.token_index()]
    }

    /// Returns the number of clockwise quarter turns.
    pub fn units(self) -> u8 {
        self.amount.units()
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self::new(self.face, self.amount.inverse())
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CubeError::InvalidMove(s.to_owned());
        let index = MOVE_TOKENS
            .iter()
            .position(|&token| token == s)
            .ok_or_else(invalid)?;
        let face = *FaceLetter::VARIANTS.get(index / 3).ok_or_else(invalid)?;
        let amount = TurnAmount::from_units(index % 3 + 1).ok_or_else(invalid)?;
        Ok(Self { face, amount })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Parses a whitespace-separated sequence of move tokens.
///
/// The whole sequence is validated before anything is returned.
pub fn parse_sequence(s: &str) -> Result<Vec<Move>, CubeError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Returns the sequence that undoes `moves`: the inverse of each move, in
/// reverse order.
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|m| m.inverse()).collect()
}

/// Formats a move sequence with a single space between moves.
pub fn format_sequence(moves: &[Move]) -> String {
    moves.iter().join(" ")
}
