use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, VariantArray};

use crate::{CubeError, Facelet};

/// Number of rows or columns on a face.
pub const FACE_SIZE: usize = 3;
/// Number of facelets on a face.
pub const FACE_CELLS: usize = FACE_SIZE * FACE_SIZE;

/// Role of a face in the unfolded layout.
///
/// ```text
///         Top
/// Left  Center  Right
///        Bottom
///        TailEnd
/// ```
///
/// Faces are listed in the order they are filled during construction.
#[derive(Debug, Display, EnumIter, EnumCount, VariantArray, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FaceId {
    /// Face above the center in the layout.
    Top,
    /// Face left of the center.
    Left,
    /// Front face.
    Center,
    /// Face right of the center.
    Right,
    /// Face below the center.
    Bottom,
    /// Back face, below the bottom face in the layout.
    TailEnd,
}

/// Row or column of three facelets.
pub type Line<L> = [Facelet<L>; FACE_SIZE];

/// 3x3 grid of facelets, indexed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Face<L>([Line<L>; FACE_SIZE]);

impl<L> Face<L> {
    /// Constructs a face from its rows.
    pub fn from_rows(rows: [Line<L>; FACE_SIZE]) -> Self {
        Self(rows)
    }

    /// Constructs a face by calling `f(row, col)` for each facelet.
    pub(crate) fn from_fn(mut f: impl FnMut(usize, usize) -> Facelet<L>) -> Self {
        Self(std::array::from_fn(|row| std::array::from_fn(|col| f(row, col))))
    }

    /// Returns the facelet at `(row, col)`, or `None` if either is out of
    /// range.
    pub fn get(&self, row: usize, col: usize) -> Option<&Facelet<L>> {
        self.0.get(row)?.get(col)
    }

    /// Returns the center facelet.
    pub fn center(&self) -> &Facelet<L> {
        &self.0[1][1]
    }

    /// Returns the rows of the face, top to bottom.
    pub fn rows(&self) -> &[Line<L>; FACE_SIZE] {
        &self.0
    }

    /// Iterates over the facelets in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Facelet<L>> {
        self.into_iter()
    }

    /// Returns whether every facelet on the face has the same color.
    pub fn is_uniform(&self) -> bool {
        let color = self.center().color();
        self.iter().all(|f| f.color() == color)
    }

    /// Rotates the face's own facelets 90 degrees clockwise in place.
    ///
    /// Corners cycle `(0,0) -> (0,2) -> (2,2) -> (2,0)` and edges cycle
    /// `(0,1) -> (1,2) -> (2,1) -> (1,0)`. The center does not move.
    pub fn rotate_cw(&mut self) {
        let cells = self.0.as_flattened_mut();
        cycle4(cells, [0, 2, 8, 6]);
        cycle4(cells, [1, 5, 7, 3]);
    }

    /// Replaces row `i`, left to right.
    pub(crate) fn set_row(&mut self, i: usize, line: Line<L>) {
        self.0[i] = line;
    }
    /// Replaces column `i`, top to bottom.
    pub(crate) fn set_col(&mut self, i: usize, line: Line<L>) {
        for (row, facelet) in self.0.iter_mut().zip(line) {
            row[i] = facelet;
        }
    }
}

impl<L: Clone> Face<L> {
    /// Returns a copy of row `i`, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not less than [`FACE_SIZE`].
    pub fn row(&self, i: usize) -> Line<L> {
        self.0[i].clone()
    }
    /// Returns a copy of column `i`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not less than [`FACE_SIZE`].
    pub fn col(&self, i: usize) -> Line<L> {
        std::array::from_fn(|row| self.0[row][i].clone())
    }
}

impl<L> TryFrom<Vec<Facelet<L>>> for Face<L> {
    type Error = CubeError;

    /// Fills the face row-major from exactly nine facelets.
    fn try_from(facelets: Vec<Facelet<L>>) -> Result<Self, Self::Error> {
        let actual = facelets.len();
        let [a, b, c, d, e, f, g, h, i]: [Facelet<L>; FACE_CELLS] =
            facelets.try_into().map_err(|_| CubeError::InvalidSize {
                expected: FACE_CELLS,
                actual,
            })?;
        Ok(Self([[a, b, c], [d, e, f], [g, h, i]]))
    }
}

impl<L> Index<(usize, usize)> for Face<L> {
    type Output = Facelet<L>;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<'a, L> IntoIterator for &'a Face<L> {
    type Item = &'a Facelet<L>;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Line<L>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().flatten()
    }
}

/// Moves the contents of `cells[p0]` to `p1`, `p1` to `p2`, `p2` to `p3`, and
/// `p3` to `p0`.
fn cycle4<T>(cells: &mut [T], [p0, p1, p2, p3]: [usize; 4]) {
    cells.swap(p0, p1);
    cells.swap(p0, p2);
    cells.swap(p0, p3);
}

/// Returns a line in reverse order.
pub(crate) fn reversed<L>([a, b, c]: Line<L>) -> Line<L> {
    [c, b, a]
}
