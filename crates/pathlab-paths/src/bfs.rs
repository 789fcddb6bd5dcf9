use std::collections::VecDeque;

use pathlab_core::{Coord, Grid};

/// Breadth-first step distance from `from` to `to` over the grid's cached
/// neighbour lists, or `None` if `to` cannot be reached.
///
/// Every step costs 1, so this is the exact shortest-path length an A*
/// search on the same grid must reproduce.
pub fn bfs_distance(grid: &Grid, from: Coord, to: Coord) -> Option<u32> {
    if !grid.contains(from) || !grid.contains(to) {
        return None;
    }
    let n = grid.rows() as usize;
    let idx = |c: Coord| c.row as usize * n + c.col as usize;

    let mut dist: Vec<Option<u32>> = vec![None; grid.len()];
    let mut queue: VecDeque<Coord> = VecDeque::new();
    dist[idx(from)] = Some(0);
    queue.push_back(from);

    while let Some(c) = queue.pop_front() {
        let d = dist[idx(c)].unwrap_or_default();
        if c == to {
            return Some(d);
        }
        for &nc in grid.neighbors(c).unwrap_or_default() {
            if !grid.contains(nc) {
                continue;
            }
            let slot = &mut dist[idx(nc)];
            if slot.is_none() {
                *slot = Some(d + 1);
                queue.push_back(nc);
            }
        }
    }
    None
}
