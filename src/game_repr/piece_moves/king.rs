use super::super::{Color, Move, MoveList, Position, Square};
use super::KING_OFFSETS;

impl Position {
    /// The eight adjacent squares, empty or enemy-occupied. No castling in
    /// this rule set. Stepping into check is ruled out later by the same
    /// king-safety filter every piece goes through.
    pub(crate) fn king_moves_into(&self, sq: Square, color: Color, moves: &mut MoveList) {
        for (df, dr) in KING_OFFSETS {
            if let Some(target) = sq.offset(df, dr) {
                if self.piece_at(target).map_or(true, |p| p.color != color) {
                    moves.push(Move::new(sq, target));
                }
            }
        }
    }
}
