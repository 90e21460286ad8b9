use super::*;

// ==================== HELPER FUNCTIONS ====================

pub fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap_or_else(|| panic!("bad square name {name:?}"))
}

pub fn place(pos: &mut Position, name: &str, kind: Kind, color: Color) {
    pos.place(sq(name), Some(Piece::new(kind, color)));
}

pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.from == sq(from) && m.to == sq(to))
}

/// Empty board with both kings parked out of the way. Move legality runs a
/// king-safety check against the mover's king, so every test position needs
/// one; tests that care about king placement overwrite these.
pub fn kings_only(white_king: &str, black_king: &str) -> Position {
    let mut pos = Position::empty();
    place(&mut pos, white_king, Kind::King, Color::White);
    place(&mut pos, black_king, Kind::King, Color::Black);
    pos
}

// ==================== TEST MODULES ====================

mod checkmate;
