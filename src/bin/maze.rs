use std::path::PathBuf;

use clap::Parser;
use owo_colors::OwoColorize;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use generic_search::astar;
use generic_search::bfs;
use generic_search::build;
use generic_search::dfs;
use generic_search::node_to_path;
use generic_search::problems::maze::Maze;
use generic_search::problems::maze::MazeLocation;
use generic_search::problems::maze::euclidean_distance;
use generic_search::problems::maze::manhattan_distance;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(version = build::PKG_VERSION, about, long_about = None)]
pub struct Args {
    /// Rows of the generated maze.
    #[arg(short, long, default_value_t = 10)]
    pub rows: usize,

    /// Columns of the generated maze.
    #[arg(short, long, default_value_t = 10)]
    pub cols: usize,

    /// Probability of a cell being blocked.
    #[arg(short, long, default_value_t = 0.2)]
    pub sparseness: f64,

    /// RNG seed; random when omitted.
    #[arg(long, env = "SEED")]
    pub seed: Option<u64>,

    /// Solve a maze loaded from a text file instead of generating one.
    #[arg(short, long)]
    pub map: Option<PathBuf>,
}

fn report(maze: &Maze, name: &str, path: Option<Vec<MazeLocation>>) {
    println!("{}", format!("{name} solution:").bold());
    match path {
        Some(path) => {
            println!("{}", maze.render(&path));
            println!("({} steps)\n", path.len() - 1);
        }
        None => println!("{}\n", "No solution found.".red()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let maze = match &args.map {
        Some(path) => Maze::try_from(std::fs::read_to_string(path)?.as_str())?,
        None => {
            let seed = args.seed.unwrap_or_else(rand::random);
            println!("Generating {}x{} maze with seed {seed}", args.rows, args.cols);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            Maze::generate(args.rows, args.cols, args.sparseness, &mut rng)
        }
    };

    println!("{maze}");

    report(
        &maze,
        "DFS",
        dfs(maze.start, |l| maze.goal_test(l), |l| maze.successors(l))
            .map(|s| node_to_path(&s)),
    );
    report(
        &maze,
        "BFS",
        bfs(maze.start, |l| maze.goal_test(l), |l| maze.successors(l))
            .map(|s| node_to_path(&s)),
    );
    report(
        &maze,
        "A* (Manhattan)",
        astar(
            maze.start,
            |l| maze.goal_test(l),
            |l| maze.successors(l),
            manhattan_distance(maze.goal),
        )
        .map(|s| node_to_path(&s)),
    );
    report(
        &maze,
        "A* (Euclidean)",
        astar(
            maze.start,
            |l| maze.goal_test(l),
            |l| maze.successors(l),
            euclidean_distance(maze.goal),
        )
        .map(|s| node_to_path(&s)),
    );

    Ok(())
}
