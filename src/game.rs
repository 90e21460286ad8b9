//! Turn controller: owns the board, validates and applies moves, and
//! re-derives the game status after every turn.

use std::fmt;

use log::{debug, info};

use crate::game_repr::{Color, Move, Position, Square};

/// Game status, re-derived after every applied move rather than carried as
/// sticky state: `InProgress` and `Check` flow back and forth freely,
/// `Checkmate` and `Stalemate` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The named color is to move and its king is attacked, but it still has
    /// legal moves.
    Check(Color),
    /// The named color is to move, is in check and has no legal moves; its
    /// opponent won.
    Checkmate(Color),
    /// The side to move has no legal moves and is not in check.
    Stalemate,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate)
    }
}

/// Rejection reasons for a submitted move. Both are recoverable: the input
/// layer reports them and re-prompts, the board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The move is not in the legal set for the side to move.
    IllegalMove,
    /// A move was submitted after checkmate or stalemate.
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove => write!(f, "not a legal move"),
            GameError::GameOver => write!(f, "the game is already over"),
        }
    }
}

impl std::error::Error for GameError {}

/// A running game. Exclusive owner of its [`Position`]; every mutation goes
/// through [`Game::submit_move`] / [`Game::validate_and_apply`].
pub struct Game {
    position: Position,
    side_to_move: Color,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, White to move.
    pub fn new() -> Game {
        Game {
            position: Position::default(),
            side_to_move: Color::White,
            status: GameStatus::InProgress,
        }
    }

    /// Start from an arbitrary FEN piece placement. The status is derived
    /// immediately, so a placement where `side_to_move` is already mated is
    /// reported as such.
    pub fn from_fen(placement: &str, side_to_move: Color) -> Option<Game> {
        let mut game = Game {
            position: Position::from_fen(placement)?,
            side_to_move,
            status: GameStatus::InProgress,
        };
        game.status = game.derive_status(side_to_move);
        Some(game)
    }

    /// Read-only board view for rendering.
    pub fn board(&self) -> &Position {
        &self.position
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Destination squares of the legal moves for the piece on `sq`, for
    /// highlighting after a piece is selected. Empty for empty squares.
    pub fn legal_destinations_for(&self, sq: Square) -> Vec<Square> {
        self.position.legal_moves(sq).iter().map(|m| m.to).collect()
    }

    pub fn legal_moves_for_side(&self, color: Color) -> Vec<Move> {
        self.position.legal_moves_for_side(color)
    }

    /// The single mutation entry point for the input layer: two selected
    /// squares. Promotion is implied (auto-queen), so the pair fully
    /// determines the move. Returns the status after the move.
    pub fn submit_move(&mut self, from: Square, to: Square) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        if !self
            .position
            .piece_at(from)
            .is_some_and(|p| p.color == self.side_to_move)
        {
            return Err(GameError::IllegalMove);
        }
        // Look the move up in the generated set so it carries the right
        // promotion marker.
        let mv = self
            .position
            .legal_moves(from)
            .iter()
            .copied()
            .find(|m| m.to == to)
            .ok_or(GameError::IllegalMove)?;
        self.validate_and_apply(mv)?;
        Ok(self.status)
    }

    /// Validates `mv` against the legal set for the side to move, applies it,
    /// flips the turn and re-derives the status. A rejected move leaves the
    /// board untouched.
    pub fn validate_and_apply(&mut self, mv: Move) -> Result<(), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        // Membership in the legal set for the side to move, checked through
        // the origin piece: same set, no need to generate every other
        // piece's moves.
        if !self
            .position
            .piece_at(mv.from)
            .is_some_and(|p| p.color == self.side_to_move)
            || !self.position.legal_moves(mv.from).contains(&mv)
        {
            return Err(GameError::IllegalMove);
        }

        let capture = self.position.piece_at(mv.to).is_some();
        self.position.apply_move(mv);
        debug!(
            "{} plays {}{}",
            self.side_to_move,
            mv,
            if capture { " (capture)" } else { "" }
        );

        self.side_to_move = self.side_to_move.opposite();
        self.status = self.derive_status(self.side_to_move);
        match self.status {
            GameStatus::Checkmate(loser) => info!("checkmate, {} wins", loser.opposite()),
            GameStatus::Stalemate => info!("stalemate"),
            _ => {}
        }
        Ok(())
    }

    /// The status matrix from the side to move's perspective: no legal moves
    /// means checkmate when in check and stalemate otherwise; with legal
    /// moves remaining, being attacked is merely check.
    fn derive_status(&self, to_move: Color) -> GameStatus {
        let in_check = self.position.is_in_check(to_move);
        if self.position.has_legal_moves(to_move) {
            if in_check {
                GameStatus::Check(to_move)
            } else {
                GameStatus::InProgress
            }
        } else if in_check {
            GameStatus::Checkmate(to_move)
        } else {
            GameStatus::Stalemate
        }
    }
}
