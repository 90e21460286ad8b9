use super::super::{Color, MoveList, Position, Square};

impl Position {
    /// A queen moves like a bishop and a rook combined.
    pub(crate) fn queen_moves_into(&self, sq: Square, color: Color, moves: &mut MoveList) {
        self.bishop_moves_into(sq, color, moves);
        self.rook_moves_into(sq, color, moves);
    }
}
