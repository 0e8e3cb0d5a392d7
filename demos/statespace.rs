//! Command-line maze and 8-puzzle solver.
//!
//! Run: cargo run --bin statespace -- maze
//!      cargo run --bin statespace -- puzzle 1,2,3,4,6,9,7,5,8
//!      cargo run --bin statespace -- shuffle --steps 25 --seed 7

use clap::{ArgAction, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use statespace_demos::{logger, maze_report, puzzle_report, shuffled};
use statespace_search::{GRID_MAX_DIST, PUZZLE_MAX_DIST, PlotConfig, PuzzleState, SearchConfig};

#[derive(Parser)]
#[command(name = "statespace")]
#[command(about = "Shortest paths in grid mazes and the 8-puzzle by bounded BFS")]
struct Cli {
    /// Describe graphs in text instead of drawing them
    #[arg(long, global = true)]
    no_plot: bool,

    /// Skip the edge listing in text descriptions
    #[arg(long, global = true)]
    terse: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the bundled 7x6 maze
    Maze {
        /// Remove the edge that connects start and goal
        #[arg(long)]
        cut: bool,

        #[arg(short, long, default_value_t = GRID_MAX_DIST)]
        max_dist: usize,
    },
    /// Solve an 8-puzzle board, e.g. `1,2,3,4,6,9,7,5,8` (9 is the blank)
    Puzzle {
        #[arg(value_name = "START")]
        start: PuzzleState,

        #[arg(short, long, default_value_t = PuzzleState::solved())]
        goal: PuzzleState,

        #[arg(short, long, default_value_t = PUZZLE_MAX_DIST)]
        max_dist: usize,
    },
    /// Scramble the solved board with random moves, then solve it
    Shuffle {
        #[arg(short, long, default_value_t = 20)]
        steps: usize,

        /// Seed for a repeatable scramble
        #[arg(long)]
        seed: Option<u64>,

        #[arg(short, long, default_value_t = PUZZLE_MAX_DIST)]
        max_dist: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logger::init(logger::level_for(cli.quiet, cli.verbose));

    let plot = PlotConfig {
        plotting: !cli.no_plot,
        verbose: !cli.terse,
    };

    match cli.command {
        Command::Maze { cut, max_dist } => {
            let search = SearchConfig::grid().with_max_dist(max_dist);
            print!("{}", maze_report(cut, &search, plot)?);
        }
        Command::Puzzle {
            start,
            goal,
            max_dist,
        } => {
            let search = SearchConfig::puzzle().with_max_dist(max_dist);
            print!("{}", puzzle_report(&start, &goal, &search, plot)?);
        }
        Command::Shuffle {
            steps,
            seed,
            max_dist,
        } => {
            let start = match seed {
                Some(seed) => shuffled(&mut StdRng::seed_from_u64(seed), steps),
                None => shuffled(&mut rand::rng(), steps),
            };
            let search = SearchConfig::puzzle().with_max_dist(max_dist);
            print!(
                "{}",
                puzzle_report(&start, &PuzzleState::solved(), &search, plot)?
            );
        }
    }
    Ok(())
}
