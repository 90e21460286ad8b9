use super::*;

// ==================== CHECKMATE TESTS ====================

#[test]
fn test_fools_mate() {
    // The fastest mate in this rule set, two moves per side.
    let mut pos = Position::default();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        pos.apply_move(Move::new(sq(from), sq(to)));
    }

    assert!(pos.is_in_check(Color::White), "Qh4 checks along the h4-e1 diagonal");
    assert!(!pos.has_legal_moves(Color::White), "White has no reply");
    assert!(pos.is_checkmate(Color::White), "Should be checkmate (fool's mate)");
}

#[test]
fn test_scholars_mate() {
    let mut pos = Position::default();
    for (from, to) in [
        ("e2", "e4"),
        ("e7", "e5"),
        ("f1", "c4"),
        ("b8", "c6"),
        ("d1", "h5"),
        ("g8", "f6"),
        ("h5", "f7"), // Qxf7#, defended by the c4 bishop
    ] {
        pos.apply_move(Move::new(sq(from), sq(to)));
    }

    assert!(pos.is_checkmate(Color::Black), "Should be checkmate (scholar's mate)");
}

#[test]
fn test_back_rank_mate() {
    let mut pos = kings_only("g1", "g8");
    // Own pawns trap the king on the back rank.
    place(&mut pos, "f2", Kind::Pawn, Color::White);
    place(&mut pos, "g2", Kind::Pawn, Color::White);
    place(&mut pos, "h2", Kind::Pawn, Color::White);
    place(&mut pos, "a1", Kind::Rook, Color::Black);

    assert!(pos.is_in_check(Color::White), "King should be in check");
    assert!(pos.is_checkmate(Color::White), "Should be back rank mate");
}

#[test]
fn test_not_checkmate_when_check_can_be_blocked() {
    let mut pos = kings_only("e1", "h8");
    place(&mut pos, "f3", Kind::Bishop, Color::White);
    place(&mut pos, "e8", Kind::Rook, Color::Black);

    assert!(pos.is_in_check(Color::White), "King should be in check");
    assert!(!pos.is_checkmate(Color::White), "Not checkmate - the bishop can block on e2");
    assert!(pos.has_legal_moves(Color::White));
}

#[test]
fn test_not_checkmate_when_checker_can_be_captured() {
    let mut pos = kings_only("e1", "h8");
    place(&mut pos, "e4", Kind::Queen, Color::Black);
    place(&mut pos, "h4", Kind::Rook, Color::White);

    assert!(pos.is_in_check(Color::White), "King should be in check");
    assert!(!pos.is_checkmate(Color::White), "Not checkmate - the rook can capture on e4");
    assert!(
        has_move(&pos.legal_moves(sq("h4")), "h4", "e4"),
        "The capture itself must be in the rook's legal set"
    );
}

#[test]
fn test_smothered_corner_mate() {
    let mut pos = kings_only("h1", "a8");
    // King boxed in by its own pieces, knight delivers mate.
    place(&mut pos, "g1", Kind::Rook, Color::White);
    place(&mut pos, "g2", Kind::Pawn, Color::White);
    place(&mut pos, "h2", Kind::Pawn, Color::White);
    place(&mut pos, "f2", Kind::Knight, Color::Black);

    assert!(pos.is_in_check(Color::White), "Knight on f2 attacks h1");
    assert!(pos.is_checkmate(Color::White), "Smothered mate in the corner");
}
