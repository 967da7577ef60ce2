use itertools::Itertools;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::VariantArray;

use crate::{CubeState, FaceLetter, Move, TurnAmount};

/// Default number of moves in a scramble.
pub const DEFAULT_SCRAMBLE_LENGTH: u32 = 25;

/// Parameters to deterministically generate a move sequence to scramble a
/// cube.
///
/// **Changing the generator will break scramble compatibility.** The same
/// parameters always produce the same moves on every platform.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScrambleParams {
    /// Random seed.
    pub seed: u64,
    /// Number of moves.
    pub length: u32,
}

impl ScrambleParams {
    /// Generates new parameters with a random seed.
    pub fn new(length: u32) -> Self {
        Self {
            seed: rand::rng().random(),
            length,
        }
    }

    /// Returns the scramble sequence. No two consecutive moves turn the same
    /// face.
    pub fn moves(&self) -> Vec<Move> {
        let mut rng = ChaCha12Rng::seed_from_u64(self.seed);
        let mut moves: Vec<Move> = vec![];
        for _ in 0..self.length {
            let prev = moves.last().map(|m| m.face);
            let faces = FaceLetter::VARIANTS
                .iter()
                .filter(|&&face| Some(face) != prev)
                .collect_vec();
            let (Some(&&face), Some(&amount)) = (
                faces.choose(&mut rng),
                TurnAmount::VARIANTS.choose(&mut rng),
            ) else {
                break;
            };
            moves.push(Move::new(face, amount));
        }
        log::debug!("generated {}-move scramble from seed {}", moves.len(), self.seed);
        moves
    }
}

impl Default for ScrambleParams {
    fn default() -> Self {
        Self::new(DEFAULT_SCRAMBLE_LENGTH)
    }
}

/// Output of scrambling a cube.
#[derive(Debug, Clone)]
pub struct ScrambledCube {
    /// Parameters used to generate the scramble.
    pub params: ScrambleParams,
    /// Scramble moves applied.
    pub moves: Vec<Move>,
    /// State of the cube after scrambling.
    pub state: CubeState,
}

impl CubeState {
    /// Returns a solved cube scrambled according to `params`.
    pub fn scrambled(params: ScrambleParams) -> ScrambledCube {
        let moves = params.moves();
        let mut state = CubeState::solved();
        state.apply_sequence(moves.iter().copied());
        ScrambledCube {
            params,
            moves,
            state,
        }
    }
}
