//! Player trait for entities that can provide chess moves.
//!
//! A player is anything that can be asked for a move in the current
//! position: a move-selection policy, a scripted replay, in principle a
//! remote opponent. The trait only covers behavior: construction differs
//! per implementation (a policy wants an RNG, a replay wants a move list),
//! so there is no constructor method.

use std::fmt;

use crate::game::Game;
use crate::game_repr::{Color, Move};

/// Returned when a player is consulted in a position with no legal moves.
///
/// This is a precondition violation, not a game outcome: the controller
/// surfaces checkmate and stalemate before any player would be asked to
/// move, so a caller seeing this error has a turn-sequencing bug and should
/// treat it as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoLegalMoves;

impl fmt::Display for NoLegalMoves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no legal moves available for the side to move")
    }
}

impl std::error::Error for NoLegalMoves {}

pub trait Player {
    /// Select one move from the legal set for `color`.
    ///
    /// Only called while the game is in a non-terminal state with `color` to
    /// move; the returned move must be a member of
    /// `game.legal_moves_for_side(color)`.
    fn choose_move(&mut self, game: &Game, color: Color) -> Result<Move, NoLegalMoves>;

    /// Display name, for banners and logs.
    fn name(&self) -> &str {
        "Player"
    }
}
