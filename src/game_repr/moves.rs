use std::fmt;

use smallvec::SmallVec;

use super::{Color, Kind, Piece, Square};

/// Buffer type for per-piece move generation. 32 inline slots covers any
/// single piece (a queen tops out at 27 destinations) without touching the
/// heap.
pub type MoveList = SmallVec<[Move; 32]>;

/// A candidate or applied move. Constructed by the move generator, consumed
/// by validation and application; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Set when a pawn reaches the last rank. Under the simplified rules the
    /// only value ever produced is `Kind::Queen`.
    pub promotion: Option<Kind>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    pub fn promoting(from: Square, to: Square, kind: Kind) -> Move {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }

    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", Piece::new(kind, Color::White).to_char())?;
        }
        Ok(())
    }
}
