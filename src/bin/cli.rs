//! Minimal command-line harness: perft and a fixed-depth search on a FEN.
//!
//! UCI/xBoard protocol handling, argument parsing libraries, and time
//! management beyond a hard move-time cap are deliberately not implemented
//! here; this binary exists to exercise the library end to end.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use vantage::board::Board;
use vantage::moves::magic::loader::load_magic_tables;
use vantage::moves::perft::perft_divide;
use vantage::search::search::search;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let fen = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    let depth: u32 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(5);

    let tables = load_magic_tables();
    let mut board = match Board::from_str(fen) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("invalid FEN '{}': {}", fen, e);
            std::process::exit(1);
        }
    };

    println!("position: {}", board.to_fen());

    let nodes = perft_divide(&mut board, &tables, depth);
    println!("perft({}) = {}", depth, nodes);

    let (score, best_move) = search(&mut board, &tables, 8, Some(Duration::from_secs(2)));
    match best_move {
        Some(m) => println!("bestmove {} (score {})", m.to_uci(), score),
        None => println!("bestmove none (score {})", score),
    }
}
