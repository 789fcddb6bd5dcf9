//! Property checks for the search engine against a BFS oracle.

use pathlab_core::{Coord, Grid, Role};
use quickcheck::{Arbitrary, Gen, quickcheck};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::{Never, Outcome, bfs_distance, manhattan, search};

fn noop(_: &Grid) {}

/// A small square board with random barriers and two free endpoints.
#[derive(Clone, Debug)]
struct Board {
    rows: i32,
    barriers: Vec<Coord>,
    start: Coord,
    end: Coord,
}

impl Board {
    fn grid(&self) -> Grid {
        let mut g = Grid::new(self.rows, self.rows * 10);
        for &b in &self.barriers {
            if b != self.start && b != self.end {
                g.set_role(b, Role::Barrier).unwrap();
            }
        }
        g.recompute_neighbors();
        g
    }
}

fn coord_in(g: &mut Gen, rows: i32) -> Coord {
    let r = u8::arbitrary(g) as i32 % rows;
    let c = u8::arbitrary(g) as i32 % rows;
    Coord::new(r, c)
}

impl Arbitrary for Board {
    fn arbitrary(g: &mut Gen) -> Board {
        let rows = u8::arbitrary(g) as i32 % 6 + 2;
        let density = u8::arbitrary(g) % 50;
        let mut barriers = Vec::new();
        for r in 0..rows {
            for c in 0..rows {
                if u8::arbitrary(g) % 100 < density {
                    barriers.push(Coord::new(r, c));
                }
            }
        }
        Board {
            rows,
            barriers,
            start: coord_in(g, rows),
            end: coord_in(g, rows),
        }
    }
}

/// Consecutive cells are orthogonally adjacent and none is a barrier.
fn is_walkable(grid: &Grid, coords: &[Coord]) -> bool {
    coords.windows(2).all(|w| manhattan(w[0], w[1]) == 1)
        && coords
            .iter()
            .all(|&c| grid.role(c).is_ok_and(|r| r != Role::Barrier))
}

#[test]
fn prop_unobstructed_path_is_manhattan() {
    fn prop(board: Board) -> bool {
        let open = Board {
            barriers: Vec::new(),
            ..board
        };
        let mut g = open.grid();
        match search(&mut g, open.start, open.end, noop, &Never) {
            Ok(Outcome::Succeeded(path)) => {
                path.len() as i32 == manhattan(open.start, open.end)
                    && path.start() == Some(open.start)
                    && path.end() == Some(open.end)
            }
            _ => false,
        }
    }
    quickcheck(prop as fn(_) -> _);
}

#[test]
fn prop_matches_bfs_oracle() {
    fn prop(board: Board) -> bool {
        let mut g = board.grid();
        let expected = bfs_distance(&g, board.start, board.end);
        let out = search(&mut g, board.start, board.end, noop, &Never).unwrap();
        match (expected, out) {
            (Some(d), Outcome::Succeeded(path)) => {
                path.len() as u32 == d && is_walkable(&g, path.coords())
            }
            (None, Outcome::Exhausted) => g.count(Role::Path) == 0,
            _ => false,
        }
    }
    quickcheck(prop as fn(_) -> _);
}

#[test]
fn prop_path_cells_are_exactly_the_interior() {
    fn prop(board: Board) -> bool {
        let mut g = board.grid();
        g.set_role(board.start, Role::Start).unwrap();
        if board.end != board.start {
            g.set_role(board.end, Role::End).unwrap();
        }
        match search(&mut g, board.start, board.end, noop, &Never).unwrap() {
            Outcome::Succeeded(path) => {
                let marked: Vec<Coord> = g
                    .iter()
                    .filter(|&(_, r)| r == Role::Path)
                    .map(|(c, _)| c)
                    .collect();
                let mut interior = path.interior().to_vec();
                interior.sort();
                marked == interior
            }
            _ => g.count(Role::Path) == 0,
        }
    }
    quickcheck(prop as fn(_) -> _);
}

#[test]
fn prop_enclosed_start_exhausts() {
    fn prop(board: Board) -> bool {
        let mut g = Grid::new(board.rows, board.rows * 10);
        for n in board.start.neighbors_4() {
            if g.contains(n) {
                g.set_role(n, Role::Barrier).unwrap();
            }
        }
        g.recompute_neighbors();
        if board.end == board.start || g.role(board.end) == Ok(Role::Barrier) {
            return true;
        }
        let out = search(&mut g, board.start, board.end, noop, &Never).unwrap();
        out == Outcome::Exhausted && g.count(Role::Path) == 0
    }
    quickcheck(prop as fn(_) -> _);
}

#[test]
fn prop_recompute_neighbors_idempotent() {
    fn prop(board: Board) -> bool {
        let mut g = board.grid();
        let first: Vec<Vec<Coord>> = g
            .iter()
            .map(|(c, _)| g.neighbors(c).unwrap().to_vec())
            .collect();
        g.recompute_neighbors();
        let second: Vec<Vec<Coord>> = g
            .iter()
            .map(|(c, _)| g.neighbors(c).unwrap().to_vec())
            .collect();
        first == second
    }
    quickcheck(prop as fn(_) -> _);
}

#[test]
fn seeded_five_by_five_grids_are_optimal() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let mut g = Grid::new(5, 50);
        for r in 0..5 {
            for c in 0..5 {
                if rng.random_range(0..100) < 35 {
                    g.set_role(Coord::new(r, c), Role::Barrier).unwrap();
                }
            }
        }
        let start = Coord::new(rng.random_range(0..5), rng.random_range(0..5));
        let end = Coord::new(rng.random_range(0..5), rng.random_range(0..5));
        g.reset_role(start).unwrap();
        g.reset_role(end).unwrap();
        g.recompute_neighbors();

        let expected = bfs_distance(&g, start, end);
        let out = search(&mut g, start, end, noop, &Never).unwrap();
        assert_eq!(
            out.path().map(|p| p.len() as u32),
            expected,
            "start {start} end {end}\n{g}"
        );
    }
}
