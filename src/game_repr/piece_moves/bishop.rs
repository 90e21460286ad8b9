use super::super::{Color, MoveList, Position, Square};
use super::DIAGONALS;

impl Position {
    pub(crate) fn bishop_moves_into(&self, sq: Square, color: Color, moves: &mut MoveList) {
        self.sliding_moves_into(sq, color, &DIAGONALS, moves);
    }
}
