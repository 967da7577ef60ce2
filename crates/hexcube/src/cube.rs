use std::fmt;

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::VariantArray;

use crate::{
    Color, CubeError, FACE_CELLS, FACE_SIZE, FACELET_COUNT, Face, FaceId, Facelet, Move, RenderMode,
    parse_sequence, render,
};

/// Color and label of each facelet on a solved cube, in construction order.
///
/// Each block of nine facelets has a single color, in the order of
/// [`Color::VARIANTS`]. Labels count up from 1.
pub const SOLVED_LAYOUT: [(Color, u32); FACELET_COUNT] = {
    let mut layout = [(Color::Orange, 0); FACELET_COUNT];
    let mut i = 0;
    while i < FACELET_COUNT {
        layout[i] = (Color::VARIANTS[i / FACE_CELLS], i as u32 + 1);
        i += 1;
    }
    layout
};

/// State of a 3x3x3 cube whose facelets carry labels of type `L`.
///
/// Every move is a permutation of the 54 facelets: facelets are moved
/// around, never created or destroyed.
///
/// There is no internal synchronization; wrap the state in a lock to share it
/// between threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CubeState<L = u32> {
    pub(crate) top: Face<L>,
    pub(crate) left: Face<L>,
    pub(crate) center: Face<L>,
    pub(crate) right: Face<L>,
    pub(crate) bottom: Face<L>,
    pub(crate) tail_end: Face<L>,
}

impl CubeState<u32> {
    /// Returns a solved cube built from [`SOLVED_LAYOUT`].
    pub fn solved() -> Self {
        let face = |id: FaceId| {
            Face::from_fn(|row, col| {
                Facelet::from(SOLVED_LAYOUT[id as usize * FACE_CELLS + row * FACE_SIZE + col])
            })
        };
        Self {
            top: face(FaceId::Top),
            left: face(FaceId::Left),
            center: face(FaceId::Center),
            right: face(FaceId::Right),
            bottom: face(FaceId::Bottom),
            tail_end: face(FaceId::TailEnd),
        }
    }
}

impl Default for CubeState<u32> {
    fn default() -> Self {
        Self::solved()
    }
}

impl<L> CubeState<L> {
    /// Constructs a cube from exactly 54 facelets.
    ///
    /// The facelets fill the faces in the order of [`FaceId`], nine per face,
    /// and each face is filled row by row.
    pub fn new<F: Into<Facelet<L>>>(
        facelets: impl IntoIterator<Item = F>,
    ) -> Result<Self, CubeError> {
        let facelets: Vec<Facelet<L>> = facelets.into_iter().map(Into::into).collect();
        check_size(facelets.len())?;

        let mut facelets = facelets.into_iter();
        let mut next_face = || Face::try_from(facelets.by_ref().take(FACE_CELLS).collect_vec());
        let cube = Self {
            top: next_face()?,
            left: next_face()?,
            center: next_face()?,
            right: next_face()?,
            bottom: next_face()?,
            tail_end: next_face()?,
        };
        log::debug!("constructed cube with {FACELET_COUNT} facelets");
        Ok(cube)
    }

    /// Constructs a cube from exactly 54 `(color symbol, label)` pairs, such
    /// as `("O", 22)`.
    ///
    /// The number of entries is checked before any color symbol.
    pub fn from_symbols<'a>(
        entries: impl IntoIterator<Item = (&'a str, L)>,
    ) -> Result<Self, CubeError> {
        let entries: Vec<(&'a str, L)> = entries.into_iter().collect();
        check_size(entries.len())?;

        let facelets = entries
            .into_iter()
            .enumerate()
            .map(|(i, (symbol, label))| {
                let color = Color::from_symbol(symbol).map_err(|e| e.at(i))?;
                Ok(Facelet::new(color, label))
            })
            .collect::<Result<Vec<_>, CubeError>>()?;
        Self::new(facelets)
    }

    /// Returns a face.
    pub fn face(&self, id: FaceId) -> &Face<L> {
        match id {
            FaceId::Top => &self.top,
            FaceId::Left => &self.left,
            FaceId::Center => &self.center,
            FaceId::Right => &self.right,
            FaceId::Bottom => &self.bottom,
            FaceId::TailEnd => &self.tail_end,
        }
    }
    pub(crate) fn face_mut(&mut self, id: FaceId) -> &mut Face<L> {
        match id {
            FaceId::Top => &mut self.top,
            FaceId::Left => &mut self.left,
            FaceId::Center => &mut self.center,
            FaceId::Right => &mut self.right,
            FaceId::Bottom => &mut self.bottom,
            FaceId::TailEnd => &mut self.tail_end,
        }
    }

    /// Iterates over the faces in construction order.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &Face<L>)> {
        FaceId::VARIANTS.iter().map(|&id| (id, self.face(id)))
    }

    /// Iterates over all 54 facelets in construction order.
    ///
    /// Passing the facelets back into [`CubeState::new()`] reproduces the
    /// cube.
    pub fn facelets(&self) -> impl Iterator<Item = &Facelet<L>> {
        self.faces().flat_map(|(_, face)| face.iter())
    }

    /// Returns whether every face has a single color.
    pub fn is_solved(&self) -> bool {
        self.faces().all(|(_, face)| face.is_uniform())
    }

    /// Renders the unfolded layout. See [`render()`].
    pub fn render(&self, mode: RenderMode) -> String
    where
        L: fmt::Display,
    {
        render(self, mode)
    }
}

impl<L: Clone> CubeState<L> {
    /// Applies a move given as a token such as `"R"`, `"U2"`, or `"F'"`.
    ///
    /// The cube is not modified if the token is invalid.
    pub fn apply_move(&mut self, token: &str) -> Result<(), CubeError> {
        let m: Move = token.parse()?;
        self.apply(m);
        Ok(())
    }

    /// Applies a move.
    pub fn apply(&mut self, m: Move) {
        for _ in 0..m.units() {
            self.quarter_turn(m.face);
        }
        log::trace!("applied {m}");
    }

    /// Applies a sequence of moves in order.
    pub fn apply_sequence(&mut self, moves: impl IntoIterator<Item = Move>) {
        for m in moves {
            self.apply(m);
        }
    }

    /// Applies a whitespace-separated sequence of move tokens.
    ///
    /// The cube is not modified if any token is invalid.
    pub fn apply_notation(&mut self, notation: &str) -> Result<(), CubeError> {
        let moves = parse_sequence(notation)?;
        self.apply_sequence(moves);
        Ok(())
    }
}

impl<L: fmt::Display> fmt::Display for CubeState<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(self, RenderMode::Color))
    }
}

fn check_size(actual: usize) -> Result<(), CubeError> {
    if actual == FACELET_COUNT {
        Ok(())
    } else {
        Err(CubeError::InvalidSize {
            expected: FACELET_COUNT,
            actual,
        })
    }
}
