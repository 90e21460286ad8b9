use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::player::{NoLegalMoves, Player};
use crate::game::Game;
use crate::game_repr::{Color, Move};

/// The naive computer opponent: picks uniformly at random from the capturing
/// moves when any exist, otherwise uniformly from the whole legal set.
pub struct CaptureFirstPlayer {
    rng: StdRng,
    name: String,
}

impl CaptureFirstPlayer {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Seeded constructor for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            name: "Computer".to_string(),
        }
    }
}

impl Default for CaptureFirstPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for CaptureFirstPlayer {
    fn choose_move(&mut self, game: &Game, color: Color) -> Result<Move, NoLegalMoves> {
        let legal = game.legal_moves_for_side(color);
        // A destination occupied at generation time is always an enemy piece;
        // own pieces already block generation.
        let captures: Vec<Move> = legal
            .iter()
            .copied()
            .filter(|m| game.board().piece_at(m.to).is_some())
            .collect();

        let pool = if captures.is_empty() { &legal } else { &captures };
        let mv = pool.choose(&mut self.rng).copied().ok_or(NoLegalMoves)?;
        debug!(
            "{} picked {} from {} legal moves ({} captures)",
            self.name,
            mv,
            legal.len(),
            captures.len()
        );
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
