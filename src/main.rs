//! Terminal front end. All chess logic lives in the library; this binary
//! only maps typed squares to [`Game::submit_move`] calls and prints the
//! resulting board and status.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use woodpusher::agent::{CaptureFirstPlayer, Player};
use woodpusher::game::{Game, GameError, GameStatus};
use woodpusher::game_repr::{Color, Kind, Piece, Position, Square};

/// Play simplified chess against a naive computer opponent.
///
/// You play White. Type a square ("e2") to list where its piece can go, or
/// an origin-destination pair ("e2e4") to move. Pawns reaching the last rank
/// promote to a queen automatically.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// FEN piece placement to start from, instead of the standard position
    #[arg(long)]
    fen: Option<String>,

    /// Seed for the computer's move selection, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Draw pieces as FEN letters instead of Unicode glyphs
    #[arg(long)]
    ascii: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut game = match &args.fen {
        Some(placement) => Game::from_fen(placement, Color::White)
            .with_context(|| format!("unrecognized FEN placement {placement:?}"))?,
        None => Game::new(),
    };
    let mut computer = match args.seed {
        Some(seed) => CaptureFirstPlayer::with_seed(seed),
        None => CaptureFirstPlayer::new(),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print_board(game.board(), args.ascii);
    loop {
        match game.status() {
            GameStatus::Checkmate(loser) => {
                println!("Checkmate! {} wins", loser.opposite());
                break;
            }
            GameStatus::Stalemate => {
                println!("Stalemate");
                break;
            }
            GameStatus::Check(color) => println!("{color} is in check"),
            GameStatus::InProgress => {}
        }

        if game.side_to_move() == Color::Black {
            let mv = computer
                .choose_move(&game, Color::Black)
                .expect("player consulted with no legal moves");
            println!("{} plays {}", computer.name(), mv);
            game.submit_move(mv.from, mv.to)
                .expect("player returned an illegal move");
            print_board(game.board(), args.ascii);
            continue;
        }

        print!("your move> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let input = line.context("reading stdin")?.trim().to_lowercase();

        match input.as_str() {
            "" => {}
            "quit" | "exit" => break,
            _ if input.len() == 2 => match Square::from_algebraic(&input) {
                Some(sq) => {
                    let destinations = game.legal_destinations_for(sq);
                    if destinations.is_empty() {
                        println!("no moves from {sq}");
                    } else {
                        let listed: Vec<String> =
                            destinations.iter().map(|d| d.to_string()).collect();
                        println!("{sq} can go to: {}", listed.join(" "));
                    }
                }
                None => println!("squares look like e2; try again"),
            },
            _ if input.len() == 4 && input.is_ascii() => {
                let (from, to) = (
                    Square::from_algebraic(&input[..2]),
                    Square::from_algebraic(&input[2..]),
                );
                match (from, to) {
                    (Some(from), Some(to)) => match game.submit_move(from, to) {
                        Ok(_) => print_board(game.board(), args.ascii),
                        Err(err @ GameError::IllegalMove) => println!("{err}, try again"),
                        Err(err @ GameError::GameOver) => println!("{err}"),
                    },
                    _ => println!("moves look like e2e4; try again"),
                }
            }
            _ => println!("type a square (e2), a move (e2e4), or quit"),
        }
    }
    Ok(())
}

fn print_board(board: &Position, ascii: bool) {
    for rank in (0..8).rev() {
        print!("{}  ", rank + 1);
        for file in 0..8 {
            match board.piece_at(Square::new(file, rank)) {
                Some(piece) if ascii => print!("{} ", piece.to_char()),
                Some(piece) => print!("{} ", glyph(piece)),
                None => print!(". "),
            }
        }
        println!();
    }
    println!("   a b c d e f g h");
}

/// Unicode chess glyphs; `--ascii` falls back to FEN letters for terminals
/// without them.
fn glyph(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, Kind::King) => '♔',
        (Color::White, Kind::Queen) => '♕',
        (Color::White, Kind::Rook) => '♖',
        (Color::White, Kind::Bishop) => '♗',
        (Color::White, Kind::Knight) => '♘',
        (Color::White, Kind::Pawn) => '♙',
        (Color::Black, Kind::King) => '♚',
        (Color::Black, Kind::Queen) => '♛',
        (Color::Black, Kind::Rook) => '♜',
        (Color::Black, Kind::Bishop) => '♝',
        (Color::Black, Kind::Knight) => '♞',
        (Color::Black, Kind::Pawn) => '♟',
    }
}
