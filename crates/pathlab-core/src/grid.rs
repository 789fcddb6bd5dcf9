//! The [`Grid`] type — an N×N matrix of cells with roles and cached adjacency.
//!
//! Adjacency is not kept up to date automatically. Callers edit roles, then
//! call [`Grid::recompute_neighbors`] once before handing the grid to a
//! search. Until that call, [`Grid::neighbors_stale`] reports `true` whenever
//! a barrier was added or removed.

use std::fmt;

use crate::geom::Coord;
use crate::role::Role;

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors raised by grid mutation and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The coordinate lies outside `[0, rows)` on some axis.
    OutOfBounds { coord: Coord, rows: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, rows } => {
                write!(f, "coordinate {coord} is outside the {rows}x{rows} grid")
            }
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
struct Cell {
    role: Role,
    neighbors: Vec<Coord>,
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A square grid of cells, owned exclusively by its caller.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: i32,
    cell_size: i32,
    cells: Vec<Cell>,
    neighbors_stale: bool,
}

impl Grid {
    /// Create a `rows`×`rows` grid of empty cells spanning `total_width`
    /// logical pixels.
    ///
    /// A non-positive `rows` yields an empty grid in which every coordinate
    /// is out of bounds.
    pub fn new(rows: i32, total_width: i32) -> Self {
        let rows = rows.max(0);
        let n = rows as usize;
        let cell_size = if rows > 0 { total_width.max(0) / rows } else { 0 };
        Self {
            rows,
            cell_size,
            cells: vec![Cell::default(); n * n],
            neighbors_stale: true,
        }
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Side length of one cell in logical pixels.
    #[inline]
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && c.row < self.rows && c.col < self.rows
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some(c.row as usize * self.rows as usize + c.col as usize)
        } else {
            None
        }
    }

    #[inline]
    fn checked_index(&self, c: Coord) -> Result<usize, GridError> {
        self.index(c).ok_or(GridError::OutOfBounds {
            coord: c,
            rows: self.rows,
        })
    }

    #[inline]
    fn coord(&self, idx: usize) -> Coord {
        let n = self.rows as usize;
        Coord::new((idx / n) as i32, (idx % n) as i32)
    }

    /// The role of the cell at `c`.
    pub fn role(&self, c: Coord) -> Result<Role, GridError> {
        let i = self.checked_index(c)?;
        Ok(self.cells[i].role)
    }

    /// Overwrite the role of the cell at `c`.
    ///
    /// Adding or removing a barrier marks the neighbour lists stale.
    pub fn set_role(&mut self, c: Coord, role: Role) -> Result<(), GridError> {
        let i = self.checked_index(c)?;
        let old = self.cells[i].role;
        if old != role && (old == Role::Barrier || role == Role::Barrier) {
            self.neighbors_stale = true;
        }
        self.cells[i].role = role;
        Ok(())
    }

    /// Set the cell at `c` back to [`Role::Empty`].
    pub fn reset_role(&mut self, c: Coord) -> Result<(), GridError> {
        self.set_role(c, Role::Empty)
    }

    /// Apply a search mark to `c` if the cell currently allows it.
    ///
    /// Returns whether the role changed. Start, end, barrier and path cells
    /// are left untouched, as are coordinates outside the grid.
    pub fn paint(&mut self, c: Coord, mark: Role) -> bool {
        let Some(i) = self.index(c) else {
            return false;
        };
        let cell = &mut self.cells[i];
        if !cell.role.is_search_paintable() || cell.role == mark {
            return false;
        }
        cell.role = mark;
        true
    }

    /// Cached traversable neighbours of `c`, as of the last
    /// [`recompute_neighbors`](Grid::recompute_neighbors).
    pub fn neighbors(&self, c: Coord) -> Result<&[Coord], GridError> {
        let i = self.checked_index(c)?;
        Ok(&self.cells[i].neighbors)
    }

    /// Rebuild every cell's neighbour list from the current barrier layout.
    ///
    /// Directions are tried down, up, right, left; a direction is kept when
    /// it stays inside the grid and its target is not a barrier.
    pub fn recompute_neighbors(&mut self) {
        for i in 0..self.cells.len() {
            let c = self.coord(i);
            let mut buf = std::mem::take(&mut self.cells[i].neighbors);
            buf.clear();
            for n in c.neighbors_4() {
                let Some(ni) = self.index(n) else {
                    continue;
                };
                if self.cells[ni].role.is_traversable() {
                    buf.push(n);
                }
            }
            self.cells[i].neighbors = buf;
        }
        self.neighbors_stale = false;
        log::trace!("recomputed neighbours for {} cells", self.cells.len());
    }

    /// Whether a barrier changed since the last neighbour recomputation.
    #[inline]
    pub fn neighbors_stale(&self) -> bool {
        self.neighbors_stale
    }

    /// First cell (row-major) holding `role`.
    pub fn find(&self, role: Role) -> Option<Coord> {
        self.cells
            .iter()
            .position(|cell| cell.role == role)
            .map(|i| self.coord(i))
    }

    /// The start cell, if one is marked.
    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.find(Role::Start)
    }

    /// The end cell, if one is marked.
    #[inline]
    pub fn end(&self) -> Option<Coord> {
        self.find(Role::End)
    }

    /// Full reset: every role back to `Empty` and all adjacency dropped.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.role = Role::Empty;
            cell.neighbors.clear();
        }
        self.neighbors_stale = true;
    }

    /// Remove frontier, visited and path marks left by a previous search.
    ///
    /// Start, end and barriers stay in place, so adjacency is unaffected.
    pub fn clear_search_marks(&mut self) {
        for cell in &mut self.cells {
            if cell.role.is_search_mark() {
                cell.role = Role::Empty;
            }
        }
    }

    /// Map a logical pixel position to the cell under it.
    pub fn coord_at_pixel(&self, x: i32, y: i32) -> Option<Coord> {
        if x < 0 || y < 0 || self.cell_size <= 0 {
            return None;
        }
        let c = Coord::new(y / self.cell_size, x / self.cell_size);
        self.contains(c).then_some(c)
    }

    /// Row-major iterator over `(Coord, Role)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Role)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (self.coord(i), cell.role))
    }

    /// Number of cells currently holding `role`.
    pub fn count(&self, role: Role) -> usize {
        self.cells.iter().filter(|cell| cell.role == role).count()
    }
}
