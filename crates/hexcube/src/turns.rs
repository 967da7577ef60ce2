//! Quarter-turn permutations.
//!
//! Each quarter turn is a clockwise 90-degree rotation of one layer of the
//! cube, seen from outside the turned face. It cycles one row or column on
//! each of the four neighboring faces and then rotates the turned face's own
//! facelets with [`Face::rotate_cw()`].
//!
//! Rows and columns are read left to right and top to bottom in the
//! unfolded layout. A neighbor's line is reversed whenever the fold between
//! the two faces flips its direction.

use crate::face::reversed;
use crate::{CubeState, Face, FaceLetter};

impl<L: Clone> CubeState<L> {
    /// Applies a single clockwise quarter turn.
    pub(crate) fn quarter_turn(&mut self, face: FaceLetter) {
        match face {
            FaceLetter::F => self.turn_f(),
            FaceLetter::R => self.turn_r(),
            FaceLetter::U => self.turn_u(),
            FaceLetter::B => self.turn_b(),
            FaceLetter::L => self.turn_l(),
            FaceLetter::D => self.turn_d(),
        }
        self.face_mut(face.turned_face()).rotate_cw();
    }

    /// Turns the center face. Neighbors touch it along their inner edges.
    fn turn_f(&mut self) {
        let top = self.top.row(2);
        let left = self.left.col(2);
        let bottom = self.bottom.row(0);
        let right = self.right.col(0);

        self.top.set_row(2, reversed(left));
        self.left.set_col(2, bottom);
        self.bottom.set_row(0, reversed(right));
        self.right.set_col(0, top);
    }

    /// Turns the bottom face, cycling the last row of the middle band and the
    /// first row of the tail end.
    fn turn_r(&mut self) {
        let left = self.left.row(2);
        let center = self.center.row(2);
        let right = self.right.row(2);
        let tail_end = self.tail_end.row(0);

        self.center.set_row(2, left);
        self.right.set_row(2, center);
        self.tail_end.set_row(0, reversed(right));
        self.left.set_row(2, reversed(tail_end));
    }

    /// Turns the right face, cycling the last column of the vertical strip.
    fn turn_u(&mut self) {
        cycle_strip(
            [
                &mut self.top,
                &mut self.center,
                &mut self.bottom,
                &mut self.tail_end,
            ],
            2,
        );
    }

    /// Turns the tail end face. Neighbors touch it along their outer edges.
    fn turn_b(&mut self) {
        let top = self.top.row(0);
        let right = self.right.col(2);
        let bottom = self.bottom.row(2);
        let left = self.left.col(0);

        self.top.set_row(0, right);
        self.right.set_col(2, reversed(bottom));
        self.bottom.set_row(2, left);
        self.left.set_col(0, reversed(top));
    }

    /// Turns the top face, cycling the first row of the middle band and the
    /// last row of the tail end.
    fn turn_l(&mut self) {
        let left = self.left.row(0);
        let center = self.center.row(0);
        let right = self.right.row(0);
        let tail_end = self.tail_end.row(2);

        self.left.set_row(0, center);
        self.center.set_row(0, right);
        self.right.set_row(0, reversed(tail_end));
        self.tail_end.set_row(2, reversed(left));
    }

    /// Turns the left face, cycling the first column of the vertical strip.
    fn turn_d(&mut self) {
        cycle_strip(
            [
                &mut self.tail_end,
                &mut self.bottom,
                &mut self.center,
                &mut self.top,
            ],
            0,
        );
    }
}

/// Cycles column `col` along a strip of four faces, moving each face's column
/// onto the face before it: `strip[1]` onto `strip[0]`, and so on, with
/// `strip[0]` wrapping around onto `strip[3]`.
///
/// The strip must be in layout order so that columns line up without
/// reversal.
fn cycle_strip<L: Clone>(strip: [&mut Face<L>; 4], col: usize) {
    let [a, b, c, d] = strip;
    let first = a.col(col);
    a.set_col(col, b.col(col));
    b.set_col(col, c.col(col));
    c.set_col(col, d.col(col));
    d.set_col(col, first);
}
