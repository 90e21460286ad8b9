use super::super::{Color, Kind, Move, MoveList, Position, Square};

/// Moves onto the promotion rank are marked for auto-queening; the
/// substitution itself happens on application.
fn push_pawn_move(from: Square, to: Square, promotion_rank: u8, moves: &mut MoveList) {
    if to.rank() == promotion_rank {
        moves.push(Move::promoting(from, to, Kind::Queen));
    } else {
        moves.push(Move::new(from, to));
    }
}

impl Position {
    pub(crate) fn pawn_moves_into(&self, sq: Square, color: Color, moves: &mut MoveList) {
        let dir = color.forward();
        let (start_rank, promotion_rank) = match color {
            Color::White => (1, 7),
            Color::Black => (6, 0),
        };

        // Forward one square, and two from the starting rank when both
        // intervening squares are empty.
        if let Some(one) = sq.offset(0, dir) {
            if self.piece_at(one).is_none() {
                push_pawn_move(sq, one, promotion_rank, moves);
                if sq.rank() == start_rank {
                    if let Some(two) = one.offset(0, dir) {
                        if self.piece_at(two).is_none() {
                            // A double advance can never reach the last rank.
                            moves.push(Move::new(sq, two));
                        }
                    }
                }
            }
        }

        // Diagonal captures, only onto enemy-occupied squares. A capture
        // landing on the last rank is both a capture and a promotion.
        for df in [-1, 1] {
            if let Some(target) = sq.offset(df, dir) {
                if self.piece_at(target).is_some_and(|p| p.color != color) {
                    push_pawn_move(sq, target, promotion_rank, moves);
                }
            }
        }
    }
}
