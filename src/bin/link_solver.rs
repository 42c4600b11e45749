use clap::Parser;
use lianliankan_solver::engine::{Board, Position};
use lianliankan_solver::pathfinding::find_path;
use lianliankan_solver::solver::find_available_pair;
use lianliankan_solver::utils::board_from_text;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// First tile, as "x,y"
    #[clap(long, value_parser = parse_position, requires = "to")]
    from: Option<Position>,

    /// Second tile, as "x,y"
    #[clap(long, value_parser = parse_position, requires = "from")]
    to: Option<Position>,

    /// Path to the board file: one row per line, '.' empty, '#' obstacle,
    /// any other character a tile
    board_file: PathBuf,
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got \"{}\"", s))?;
    let x = x
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad x in \"{}\": {}", s, e))?;
    let y = y
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad y in \"{}\": {}", s, e))?;
    Ok(Position::new(x, y))
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
    board_from_text(&content).map_err(|e| format!("Invalid board format: {}", e))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let board = match read_board_file(&args.board_file) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Failed to read board from {}: {}", args.board_file.display(), e);
            return ExitCode::FAILURE;
        }
    };
    println!(
        "Loaded {}x{} board from {}\n",
        board.width(),
        board.height(),
        args.board_file.display()
    );
    println!("{}\n", board);

    let (first, second) = match (args.from, args.to) {
        (Some(first), Some(second)) => (first, second),
        _ => match find_available_pair(&board) {
            Some(pair) => pair,
            None => {
                println!("No pair can be cleared: the board is deadlocked.");
                return ExitCode::SUCCESS;
            }
        },
    };

    if board.contains(first) && board.contains(second) && board.get(first) != board.get(second) {
        println!("Note: {} and {} hold different tiles.", first, second);
    }

    match find_path(&board, first, second) {
        Ok(Some(path)) => {
            println!("Link from {} to {} ({} bends):", first, second, path.bends());
            let points: Vec<String> = path.points().iter().map(|p| p.to_string()).collect();
            println!("  {}\n", points.join(" -> "));
            println!("{}", board.to_string_with_path(Some(&path)));
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("No link with at most two bends between {} and {}.", first, second);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Invalid query: {}", e);
            ExitCode::FAILURE
        }
    }
}
