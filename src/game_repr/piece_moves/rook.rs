use super::super::{Color, MoveList, Position, Square};
use super::ORTHOGONALS;

impl Position {
    pub(crate) fn rook_moves_into(&self, sq: Square, color: Color, moves: &mut MoveList) {
        self.sliding_moves_into(sq, color, &ORTHOGONALS, moves);
    }
}
