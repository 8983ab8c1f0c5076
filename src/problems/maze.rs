//! A 2-D maze over a grid of empty and blocked cells.

use derive_more::Display;
use smallvec::SmallVec;
use thiserror::Error;

use crate::float_cost::FloatCost;

const MAX_ELEMENTS_DISPLAYED: usize = 50;

/// A row/column position within a maze.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
#[display("({row},{col})")]
pub struct MazeLocation {
    pub row: usize,
    pub col: usize,
}

impl MazeLocation {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Integer cost of a maze path; every step costs one.
pub type MazeCost = u32;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum MazeCell {
    #[display("░")]
    Empty,
    #[display("█")]
    Blocked,
}

#[derive(Debug, Error)]
pub enum MazeCellParseError {
    #[error("Invalid character '{0}' found.")]
    InvalidCharacter(char),
}

impl std::convert::TryFrom<char> for MazeCell {
    type Error = MazeCellParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            ' ' | '.' | '░' => Ok(MazeCell::Empty),
            '#' | 'X' | '█' => Ok(MazeCell::Blocked),
            ch => Err(MazeCellParseError::InvalidCharacter(ch)),
        }
    }
}

#[derive(Debug, Error)]
pub enum MazeParseError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Invalid cell {e} found at ({row},{col})")]
    InvalidCell {
        e: MazeCellParseError,
        row: usize,
        col: usize,
    },
    #[error("Line {row} does not match the width of the first line")]
    RaggedLine { row: usize },
    #[error("No start cell ('S') found")]
    MissingStart,
    #[error("No goal cell ('G') found")]
    MissingGoal,
}

/// A rectangular maze with one start and one goal location.
///
/// Supplies the state space for the generic searches: locations are states,
/// [`Maze::successors`] yields the walkable 4-neighbours, and
/// [`Maze::goal_test`] checks for the goal location.
#[derive(Clone)]
pub struct Maze {
    grid: Vec<Vec<MazeCell>>,
    pub start: MazeLocation,
    pub goal: MazeLocation,
}

impl Maze {
    /// Builds a `rows`x`cols` maze where each cell is independently blocked
    /// with probability `sparseness`. Start and goal are pinned to opposite
    /// corners and kept clear; a path between them may still not exist.
    #[must_use]
    pub fn generate<R: rand::Rng>(rows: usize, cols: usize, sparseness: f64, rng: &mut R) -> Self {
        debug_assert!(rows > 0 && cols > 0);

        let mut grid = vec![vec![MazeCell::Empty; cols]; rows];
        for line in grid.iter_mut() {
            for cell in line.iter_mut() {
                if rng.random::<f64>() < sparseness {
                    *cell = MazeCell::Blocked;
                }
            }
        }

        let start = MazeLocation::new(0, 0);
        let goal = MazeLocation::new(rows - 1, cols - 1);
        grid[start.row][start.col] = MazeCell::Empty;
        grid[goal.row][goal.col] = MazeCell::Empty;

        log::debug!("generated {rows}x{cols} maze (sparseness {sparseness})");
        Maze { grid, start, goal }
    }

    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        if self.grid.is_empty() {
            return (0, 0);
        }
        (self.grid.len(), self.grid[0].len())
    }

    #[inline(always)]
    fn at(&self, location: &MazeLocation) -> MazeCell {
        self.grid[location.row][location.col]
    }

    #[inline(always)]
    #[must_use]
    pub fn goal_test(&self, location: &MazeLocation) -> bool {
        *location == self.goal
    }

    /// The walkable 4-neighbours of a location.
    ///
    /// In-bounds, non-blocked, in down/up/right/left order. The order only
    /// influences DFS/BFS tie-breaking, never correctness.
    #[must_use]
    pub fn successors(&self, location: &MazeLocation) -> SmallVec<[MazeLocation; 4]> {
        let (rows, cols) = self.dimensions();
        let (row, col) = (location.row, location.col);

        let mut locations = SmallVec::new();
        if row + 1 < rows {
            locations.push(MazeLocation::new(row + 1, col));
        }
        if row > 0 {
            locations.push(MazeLocation::new(row - 1, col));
        }
        if col + 1 < cols {
            locations.push(MazeLocation::new(row, col + 1));
        }
        if col > 0 {
            locations.push(MazeLocation::new(row, col - 1));
        }

        locations.retain(|l| self.at(l) != MazeCell::Blocked);
        locations
    }

    /// Renders the maze with `path` marked as `•`, the start as `S` and the
    /// goal as `G`.
    ///
    /// The grid itself is untouched; solutions from several searches can be
    /// rendered off the same maze.
    #[must_use]
    pub fn render(&self, path: &[MazeLocation]) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        for (row, line) in self.grid.iter().enumerate().take(MAX_ELEMENTS_DISPLAYED) {
            for (col, cell) in line.iter().enumerate().take(MAX_ELEMENTS_DISPLAYED) {
                let location = MazeLocation::new(row, col);
                if location == self.start {
                    let _ = write!(out, "S");
                } else if location == self.goal {
                    let _ = write!(out, "G");
                } else if path.contains(&location) {
                    let _ = write!(out, "•");
                } else {
                    let _ = write!(out, "{cell}");
                }
            }
            out.push('\n');
        }
        out
    }
}

impl std::fmt::Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.render(&[]))
    }
}

impl std::fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (rows, cols) = self.dimensions();
        write!(f, "Maze({rows}x{cols}, s:{}, g:{})", self.start, self.goal)
    }
}

impl std::convert::TryFrom<&str> for Maze {
    type Error = MazeParseError;

    /// Parses a maze from its text form: one line per row, `S` marks the
    /// start, `G` the goal, and the remaining characters parse as cells.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let lines: Vec<&str> = s.lines().collect();
        if lines.is_empty() || lines[0].is_empty() {
            return Err(MazeParseError::EmptyInput);
        }

        let mut grid = vec![];
        let mut start = None;
        let mut goal = None;

        let cols = lines[0].chars().count();
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(MazeParseError::RaggedLine { row });
            }
            let mut cells = vec![];
            for (col, ch) in line.chars().enumerate() {
                cells.push(match ch {
                    'S' => {
                        start = Some(MazeLocation::new(row, col));
                        MazeCell::Empty
                    }
                    'G' => {
                        goal = Some(MazeLocation::new(row, col));
                        MazeCell::Empty
                    }
                    ch => MazeCell::try_from(ch)
                        .map_err(|e| MazeParseError::InvalidCell { e, row, col })?,
                });
            }
            grid.push(cells);
        }

        let start = start.ok_or(MazeParseError::MissingStart)?;
        let goal = goal.ok_or(MazeParseError::MissingGoal)?;

        Ok(Maze { grid, start, goal })
    }
}

/// The straight-lines distance to `goal`, ignoring walls.
///
/// Admissible for unit-cost 4-directional movement.
pub fn manhattan_distance(goal: MazeLocation) -> impl Fn(&MazeLocation) -> MazeCost {
    move |location| {
        (location.row.abs_diff(goal.row) + location.col.abs_diff(goal.col)) as MazeCost
    }
}

/// The as-the-crow-flies distance to `goal`.
///
/// Also admissible; weaker than Manhattan for 4-directional movement.
pub fn euclidean_distance(goal: MazeLocation) -> impl Fn(&MazeLocation) -> FloatCost {
    move |location| {
        let delta_row = location.row.abs_diff(goal.row) as f64;
        let delta_col = location.col.abs_diff(goal.col) as f64;
        FloatCost::new((delta_row * delta_row + delta_col * delta_col).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;
    use crate::algorithms::astar::astar;
    use crate::algorithms::uninformed::bfs;
    use crate::algorithms::uninformed::dfs;
    use crate::search::node_to_path;

    const CORRIDOR: &str = indoc! {"
        S.#
        #.#
        #.G
    "};

    #[test]
    fn parses_start_goal_and_walls() {
        let maze = Maze::try_from(CORRIDOR).unwrap();
        assert_eq!(maze.dimensions(), (3, 3));
        assert_eq!(maze.start, MazeLocation::new(0, 0));
        assert_eq!(maze.goal, MazeLocation::new(2, 2));
        assert_eq!(maze.at(&MazeLocation::new(1, 0)), MazeCell::Blocked);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            Maze::try_from(""),
            Err(MazeParseError::EmptyInput)
        ));
        assert!(matches!(
            Maze::try_from("S.\n.q\n.G"),
            Err(MazeParseError::InvalidCell { row: 1, col: 1, .. })
        ));
        assert!(matches!(
            Maze::try_from("S..\n.G"),
            Err(MazeParseError::RaggedLine { row: 1 })
        ));
        assert!(matches!(
            Maze::try_from("..\n.G"),
            Err(MazeParseError::MissingStart)
        ));
        assert!(matches!(
            Maze::try_from("S.\n.."),
            Err(MazeParseError::MissingGoal)
        ));
    }

    #[test]
    fn successors_skip_walls_and_bounds() {
        let maze = Maze::try_from(CORRIDOR).unwrap();
        // Start's only open neighbour is (0,1).
        assert_eq!(
            maze.successors(&maze.start).as_slice(),
            &[MazeLocation::new(0, 1)],
        );
        // The corridor centre has both vertical neighbours.
        assert_eq!(
            maze.successors(&MazeLocation::new(1, 1)).as_slice(),
            &[MazeLocation::new(2, 1), MazeLocation::new(0, 1)],
        );
    }

    #[test]
    fn all_searches_solve_the_corridor() {
        let maze = Maze::try_from(CORRIDOR).unwrap();

        for solution in [
            dfs(maze.start, |l| maze.goal_test(l), |l| maze.successors(l)),
            bfs(maze.start, |l| maze.goal_test(l), |l| maze.successors(l)),
        ] {
            let path = node_to_path(&solution.unwrap());
            assert_eq!(path.len(), 5);
            assert_eq!(path[0], maze.start);
            assert_eq!(*path.last().unwrap(), maze.goal);
        }

        let solution = astar(
            maze.start,
            |l| maze.goal_test(l),
            |l| maze.successors(l),
            manhattan_distance(maze.goal),
        )
        .unwrap();
        assert_eq!(solution.cost(), 4);
    }

    #[test]
    fn walled_off_goal_is_unsolvable() {
        let maze = Maze::try_from(indoc! {"
            S..
            .##
            .#G
        "})
        .unwrap();

        assert!(dfs(maze.start, |l| maze.goal_test(l), |l| maze.successors(l)).is_none());
        assert!(bfs(maze.start, |l| maze.goal_test(l), |l| maze.successors(l)).is_none());
        assert!(
            astar(
                maze.start,
                |l| maze.goal_test(l),
                |l| maze.successors(l),
                manhattan_distance(maze.goal),
            )
            .is_none()
        );
    }

    #[test]
    fn generated_maze_keeps_endpoints_clear() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let maze = Maze::generate(10, 10, 0.9, &mut rng);

        assert_eq!(maze.dimensions(), (10, 10));
        assert_eq!(maze.at(&maze.start), MazeCell::Empty);
        assert_eq!(maze.at(&maze.goal), MazeCell::Empty);
    }

    #[test]
    fn heuristics_are_admissible_on_the_open_grid() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let maze = Maze::generate(8, 8, 0.0, &mut rng);

        let manhattan = manhattan_distance(maze.goal);
        let euclidean = euclidean_distance(maze.goal);
        // On an open grid the true remaining cost from any cell is the
        // Manhattan distance itself, and Euclidean never exceeds it.
        for row in 0..8 {
            for col in 0..8 {
                let l = MazeLocation::new(row, col);
                let truth = manhattan(&l);
                assert!(euclidean(&l) <= FloatCost::new(f64::from(truth)));
            }
        }
    }

    #[test]
    fn render_marks_only_the_path() {
        let maze = Maze::try_from(CORRIDOR).unwrap();
        let solution = bfs(maze.start, |l| maze.goal_test(l), |l| maze.successors(l)).unwrap();
        let rendered = maze.render(&node_to_path(&solution));

        assert_eq!(rendered.matches('•').count(), 3);
        assert_eq!(rendered.matches('S').count(), 1);
        assert_eq!(rendered.matches('G').count(), 1);
        // Rendering never mutates the maze itself.
        assert_eq!(maze.to_string().matches('•').count(), 0);
    }
}
