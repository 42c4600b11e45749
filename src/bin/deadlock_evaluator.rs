use clap::Parser;
use lianliankan_solver::engine::{BombOutcome, Game};
use lianliankan_solver::level::LevelConfig;

/// Reshuffles allowed per board before it is counted as stuck.
const MAX_SHUFFLES_PER_BOARD: u32 = 50;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Plays seeded boards with bombs only and reports deadlock rates", long_about = None)]
struct Args {
    /// Number of boards played per level
    #[clap(short, long, default_value_t = 20)]
    boards: u64,

    /// Highest level to evaluate, starting from level 1
    #[clap(short, long, default_value_t = 10)]
    levels: u32,

    /// Seed of the first board; later boards use consecutive seeds
    #[clap(short, long, default_value_t = 0)]
    seed: u64,
}

#[derive(Default)]
struct LevelStats {
    cleared: u64,
    stuck: u64,
    shuffles: u64,
    matches: u64,
}

/// Clears the board pair by pair, reshuffling whenever it deadlocks.
///
/// Returns `(cleared, shuffles, matches)`.
fn play_out(game: &mut Game) -> (bool, u32, u32) {
    let mut shuffles = 0;
    let mut matches = 0;
    while !game.is_level_cleared() {
        // One bomb per move keeps the evaluation independent of inventories.
        game.grant(0, 1);
        match game.use_bomb() {
            BombOutcome::Cleared { .. } => matches += 1,
            BombOutcome::Reshuffled => {
                shuffles += 1;
                if shuffles > MAX_SHUFFLES_PER_BOARD {
                    return (false, shuffles, matches);
                }
            }
            BombOutcome::LevelCleared => break,
            BombOutcome::NoneLeft => {
                eprintln!("Warning: bomb inventory empty right after a grant, stopping this board.");
                return (false, shuffles, matches);
            }
        }
    }
    (true, shuffles, matches)
}

fn main() {
    let args = Args::parse();

    println!(
        "Evaluating levels 1..={} with {} boards each (first seed {})...",
        args.levels, args.boards, args.seed
    );

    let mut all_stats = Vec::new();
    for level in 1..=args.levels {
        let config = LevelConfig::for_level(level);
        let mut stats = LevelStats::default();

        for board_idx in 0..args.boards {
            let seed = args.seed + board_idx;
            let mut game = Game::new(level, seed);
            let (cleared, shuffles, matches) = play_out(&mut game);

            if cleared {
                stats.cleared += 1;
            } else {
                stats.stuck += 1;
                eprintln!(
                    "Warning: level {} seed {} still deadlocked after {} shuffles. Board state:\n{}",
                    level,
                    seed,
                    shuffles,
                    game.board()
                );
            }
            stats.shuffles += u64::from(shuffles);
            stats.matches += u64::from(matches);
        }

        println!(
            "  Level {:<3} obstacles: {:<3} kinds: {:<3} cleared: {:<4} stuck: {:<4} shuffles: {}",
            level, config.obstacles(), config.kinds(), stats.cleared, stats.stuck, stats.shuffles
        );
        all_stats.push((level, stats));
    }

    println!("\n--- Evaluation Complete ---");
    println!("\n--- Average Shuffles Per Board ---");
    for (level, stats) in &all_stats {
        let played = stats.cleared + stats.stuck;
        if played == 0 {
            println!("Level {}: No boards played.", level);
            continue;
        }
        let avg_shuffles = stats.shuffles as f64 / played as f64;
        let avg_matches = stats.matches as f64 / played as f64;
        println!(
            "Level {:<3}: Average Shuffles = {:.2}, Average Matches = {:.1}",
            level, avg_shuffles, avg_matches
        );
    }
}
