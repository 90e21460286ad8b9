use super::super::{Color, Move, MoveList, Position, Square};
use super::KNIGHT_OFFSETS;

impl Position {
    pub(crate) fn knight_moves_into(&self, sq: Square, color: Color, moves: &mut MoveList) {
        for (df, dr) in KNIGHT_OFFSETS {
            if let Some(target) = sq.offset(df, dr) {
                if self.piece_at(target).map_or(true, |p| p.color != color) {
                    moves.push(Move::new(sq, target));
                }
            }
        }
    }
}
