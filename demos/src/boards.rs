//! Board construction: built-in layouts and random barrier fields.

use pathlab_core::{Coord, Grid, Role};
use rand::{Rng, RngExt};

const WALL: &str = "
S....
.....
####.
.....
....E
";

const SPIRAL: &str = "
...........
.#########.
.#.......#.
.#.#####.#.
.#.#...#.#.
.#.#.E.#.#.
.#.###.#.#.
.#.....#.#.
.#######.#.
.........#.
S#.........
";

const ROOMS: &str = "
S.....#.....
......#.....
......#.....
......#.....
......#.....
.######.####
......#.....
......#.....
............
......#.....
......#.....
......#....E
";

/// Names accepted by [`builtin`].
pub const BUILTIN_NAMES: [&str; 3] = ["wall", "spiral", "rooms"];

/// Text of a built-in board.
pub fn builtin(name: &str) -> Option<&'static str> {
    match name {
        "wall" => Some(WALL),
        "spiral" => Some(SPIRAL),
        "rooms" => Some(ROOMS),
        _ => None,
    }
}

/// A `rows`×`rows` board with start in the top-left corner, end in the
/// bottom-right corner and each other cell a barrier with probability
/// `density`. Adjacency is computed before returning.
pub fn random_grid(rows: i32, width: i32, density: f64, rng: &mut impl Rng) -> Grid {
    let mut grid = Grid::new(rows, width);
    let density = density.clamp(0.0, 1.0);
    for r in 0..rows {
        for c in 0..rows {
            if rng.random_range(0.0..1.0) < density {
                let _ = grid.set_role(Coord::new(r, c), Role::Barrier);
            }
        }
    }
    if rows > 0 {
        let _ = grid.set_role(Coord::ZERO, Role::Start);
        let _ = grid.set_role(Coord::new(rows - 1, rows - 1), Role::End);
    }
    grid.recompute_neighbors();
    grid
}
