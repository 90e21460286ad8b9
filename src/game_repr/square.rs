use std::fmt;

/// A board coordinate. Both `file` and `rank` are always in `0..8`; the only
/// way off the board is through [`Square::offset`], which reports the attempt
/// as `None` instead of ever producing an invalid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..8`.
    pub fn new(file: u8, rank: u8) -> Square {
        assert!(file < 8 && rank < 8, "square ({file}, {rank}) is off the board");
        Square { file, rank }
    }

    pub fn from_index(idx: usize) -> Square {
        assert!(idx < 64, "square index {idx} is off the board");
        Square {
            file: (idx % 8) as u8,
            rank: (idx / 8) as u8,
        }
    }

    /// Parse algebraic notation ("a1" through "h8").
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        Some(Square {
            file: file as u8 - b'a',
            rank: rank as u8 - b'1',
        })
    }

    /// Index into a rank-major 64-slot array (a1 = 0, h8 = 63).
    pub fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Step by a (file, rank) delta. Off-board results are swallowed here so
    /// ray scans can simply stop when the edge is reached.
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let file = self.file as i8 + df;
        let rank = self.rank as i8 + dr;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}
