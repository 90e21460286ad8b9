mod capture_first;
mod player;

pub use capture_first::CaptureFirstPlayer;
pub use player::{NoLegalMoves, Player};
