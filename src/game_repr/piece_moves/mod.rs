//! Pseudo-legal move generation, one module per piece kind. Each generator
//! appends into a caller-provided buffer and respects board edges, blocking
//! and capture rules; king safety is filtered afterwards in
//! [`super::Position::legal_moves`].

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;

/// Fixed offset and direction tables shared by the generators and the
/// attack scan.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

use super::{Color, Move, MoveList, Position, Square};

impl Position {
    /// Ray scan shared by the sliding pieces: walk each direction until the
    /// board edge, stop before an own piece, include an enemy piece as a
    /// capture and stop.
    pub(crate) fn sliding_moves_into(
        &self,
        sq: Square,
        color: Color,
        directions: &[(i8, i8)],
        moves: &mut MoveList,
    ) {
        for &(df, dr) in directions {
            let mut cur = sq;
            while let Some(next) = cur.offset(df, dr) {
                cur = next;
                match self.piece_at(cur) {
                    None => moves.push(Move::new(sq, cur)),
                    Some(piece) if piece.color != color => {
                        moves.push(Move::new(sq, cur));
                        break;
                    }
                    Some(_) => break,
                }
            }
        }
    }
}
