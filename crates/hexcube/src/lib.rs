//! State engine for a 3x3x3 twisty puzzle whose facelets carry labels.
//!
//! A [`CubeState`] holds 54 [`Facelet`]s arranged on six 3x3 faces, laid out
//! as an unfolded net:
//!
//! ```text
//!         Top
//! Left  Center  Right
//!        Bottom
//!        TailEnd
//! ```
//!
//! Face turns such as `R`, `U2`, and `F'` permute the facelets. Each facelet
//! keeps its label as it moves, so the label layout records where every
//! sticker came from.
//!
//! ```
//! use hexcube::{CubeState, RenderMode};
//!
//! let mut cube = CubeState::solved();
//! cube.apply_notation("R U R' U'").unwrap();
//! assert!(!cube.is_solved());
//! print!("{}", cube.render(RenderMode::Label));
//! ```

mod color;
mod cube;
mod error;
mod face;
mod facelet;
pub mod moves;
mod render;
mod scramble;
mod turns;

pub use color::Color;
pub use cube::{CubeState, SOLVED_LAYOUT};
pub use error::CubeError;
pub use face::{FACE_CELLS, FACE_SIZE, Face, FaceId, Line};
pub use facelet::{Facelet, FaceletSpec, SEPARATOR, parse_facelet_list};
pub use moves::{
    FaceLetter, MOVE_TOKENS, Move, TurnAmount, format_sequence, invert_sequence, parse_sequence,
};
pub use render::{RENDERED_LINES, RenderMode, render};
pub use scramble::{DEFAULT_SCRAMBLE_LENGTH, ScrambleParams, ScrambledCube};

/// Number of faces on the cube.
pub const FACE_COUNT: usize = 6;
/// Total number of facelets on the cube.
pub const FACELET_COUNT: usize = FACE_COUNT * FACE_CELLS;

#[cfg(test)]
mod tests;
