//! A small chess game with a simplified rule set (no castling, no en
//! passant, no draw counters, and pawns always promote to a queen), played
//! against a naive capture-preferring computer opponent.
//!
//! [`game_repr`] holds the board representation and the rules engine,
//! [`game`] the turn controller that owns a running game, and [`agent`]
//! the move-selection policies.

pub mod agent;
pub mod game;
pub mod game_repr;
