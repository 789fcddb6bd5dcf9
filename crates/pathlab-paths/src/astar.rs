use std::fmt;

use pathlab_core::{Coord, Grid, Role};

use crate::distance::manhattan;
use crate::open::{OpenEntry, OpenSet};
use crate::path::{Outcome, Path};
use crate::traits::{Cancellation, StepObserver};

/// Sentinel meaning "no known cost yet" in the score tables.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Errors and status
// ---------------------------------------------------------------------------

/// Reasons a search refuses to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// No cell holds [`Role::Start`].
    MissingStart,
    /// No cell holds [`Role::End`].
    MissingEnd,
    /// An endpoint lies outside the grid.
    OutOfBounds(Coord),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => write!(f, "search needs a start cell"),
            Self::MissingEnd => write!(f, "search needs an end cell"),
            Self::OutOfBounds(c) => write!(f, "search endpoint {c} is outside the grid"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Where the search state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Succeeded,
    Exhausted,
    Cancelled,
}

impl Status {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Status::Running
    }
}

// ---------------------------------------------------------------------------
// Astar
// ---------------------------------------------------------------------------

/// One A* search over a [`Grid`], 4-connected with unit step costs and the
/// Manhattan heuristic.
///
/// The value owns all bookkeeping for the search (scores, predecessor links,
/// open set) and can be driven one expansion at a time with
/// [`step`](Astar::step) or to completion with [`run`](Astar::run). The grid
/// is only borrowed for each call; callers must not edit it between steps.
#[derive(Debug)]
pub struct Astar {
    rows: i32,
    start: Coord,
    end: Coord,
    g: Vec<i32>,
    f: Vec<i32>,
    came_from: Vec<Option<Coord>>,
    open: OpenSet,
    count: u64,
    expanded: Vec<Coord>,
    status: Status,
    path: Option<Path>,
    nbuf: Vec<Coord>,
}

impl Astar {
    /// Prepare a search from `start` to `end` on `grid`.
    ///
    /// Only `start` is in the open set afterwards. The grid's neighbour
    /// lists are used as-is; if they are stale a warning is logged.
    pub fn new(grid: &Grid, start: Coord, end: Coord) -> Result<Self, SearchError> {
        for c in [start, end] {
            if !grid.contains(c) {
                return Err(SearchError::OutOfBounds(c));
            }
        }
        if grid.neighbors_stale() {
            log::warn!("searching with stale neighbour lists; call recompute_neighbors first");
        }

        let len = grid.len();
        let mut astar = Self {
            rows: grid.rows(),
            start,
            end,
            g: vec![UNREACHABLE; len],
            f: vec![UNREACHABLE; len],
            came_from: vec![None; len],
            open: OpenSet::new(len),
            count: 0,
            expanded: Vec::new(),
            status: Status::Running,
            path: None,
            nbuf: Vec::with_capacity(4),
        };

        let si = astar.idx(start).ok_or(SearchError::OutOfBounds(start))?;
        astar.g[si] = 0;
        astar.f[si] = manhattan(start, end);
        astar.open.push(OpenEntry {
            f: astar.f[si],
            count: 0,
            idx: si,
            coord: start,
        });

        log::debug!("a* search {start} -> {end} on {rows}x{rows} grid", rows = astar.rows);
        Ok(astar)
    }

    // -----------------------------------------------------------------------
    // Driving the search
    // -----------------------------------------------------------------------

    /// Perform one outer iteration: pop the best pending cell and either
    /// finish (it is the end) or relax its neighbours.
    ///
    /// The observer is called once after the neighbours are processed, and
    /// once per cell marked [`Role::Path`] on success. Calling `step` after
    /// the search finished does nothing.
    pub fn step<O>(&mut self, grid: &mut Grid, observer: &mut O) -> Status
    where
        O: StepObserver + ?Sized,
    {
        if self.status.is_terminal() {
            return self.status;
        }

        let Some(entry) = self.open.pop() else {
            self.status = Status::Exhausted;
            log::debug!(
                "a* exhausted after {} expansions, no path",
                self.expanded.len()
            );
            return self.status;
        };

        let current = entry.coord;
        self.expanded.push(current);
        log::trace!("expand {current} f={} count={}", entry.f, entry.count);

        if current == self.end {
            self.reconstruct(grid, observer);
            self.status = Status::Succeeded;
            return self.status;
        }

        let current_g = self.g[entry.idx];
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        nbuf.extend_from_slice(grid.neighbors(current).unwrap_or_default());

        for &n in nbuf.iter() {
            let Some(ni) = self.idx(n) else {
                continue;
            };
            let tentative_g = current_g + 1;
            if tentative_g >= self.g[ni] {
                continue;
            }
            self.came_from[ni] = Some(current);
            self.g[ni] = tentative_g;
            self.f[ni] = tentative_g + manhattan(n, self.end);

            if !self.open.contains(ni) {
                self.count += 1;
                self.open.push(OpenEntry {
                    f: self.f[ni],
                    count: self.count,
                    idx: ni,
                    coord: n,
                });
                grid.paint(n, Role::Frontier);
            }
        }
        self.nbuf = nbuf;

        observer.on_step(grid);

        if current != self.start {
            grid.paint(current, Role::Visited);
        }
        self.status
    }

    /// Run until the search succeeds, exhausts the open set, or `cancel`
    /// fires. Cancellation is polled before every iteration.
    pub fn run<O, C>(&mut self, grid: &mut Grid, observer: &mut O, cancel: &C) -> Outcome
    where
        O: StepObserver + ?Sized,
        C: Cancellation + ?Sized,
    {
        while self.status == Status::Running {
            if !self.open.is_empty() && cancel.is_cancelled() {
                self.status = Status::Cancelled;
                log::debug!(
                    "a* cancelled after {} expansions",
                    self.expanded.len()
                );
                break;
            }
            self.step(grid, observer);
        }
        self.outcome().unwrap_or(Outcome::Cancelled)
    }

    /// Walk the predecessor links from the end back to the start, marking
    /// every cell in between as path.
    fn reconstruct<O>(&mut self, grid: &mut Grid, observer: &mut O)
    where
        O: StepObserver + ?Sized,
    {
        let mut coords = vec![self.end];
        let mut cur = self.end;
        while let Some(prev) = self.idx(cur).and_then(|i| self.came_from[i]) {
            if prev != self.start {
                grid.paint(prev, Role::Path);
                observer.on_step(grid);
            }
            coords.push(prev);
            cur = prev;
        }
        coords.reverse();
        let path = Path::new(coords);
        log::debug!(
            "a* found path of length {} after {} expansions",
            path.len(),
            self.expanded.len()
        );
        self.path = Some(path);
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The terminal outcome, or `None` while still running.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            Status::Running => None,
            Status::Succeeded => Some(Outcome::Succeeded(self.path.clone().unwrap_or_default())),
            Status::Exhausted => Some(Outcome::Exhausted),
            Status::Cancelled => Some(Outcome::Cancelled),
        }
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Coord {
        self.end
    }

    /// Best known cost from the start to `c`, if any.
    pub fn g_score(&self, c: Coord) -> Option<i32> {
        self.idx(c)
            .map(|i| self.g[i])
            .filter(|&g| g != UNREACHABLE)
    }

    /// `g + heuristic` for `c`, if `c` has been reached.
    pub fn f_score(&self, c: Coord) -> Option<i32> {
        self.idx(c)
            .map(|i| self.f[i])
            .filter(|&f| f != UNREACHABLE)
    }

    /// Best known predecessor of `c`. The start never has one.
    pub fn came_from(&self, c: Coord) -> Option<Coord> {
        self.idx(c).and_then(|i| self.came_from[i])
    }

    /// Cells in the order they were popped from the open set.
    #[inline]
    pub fn expanded(&self) -> &[Coord] {
        &self.expanded
    }

    /// Number of entries waiting in the open set.
    #[inline]
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Whether `c` is currently waiting in the open set.
    pub fn is_open(&self, c: Coord) -> bool {
        self.idx(c).is_some_and(|i| self.open.contains(i))
    }

    /// The reconstructed path once the search succeeded.
    #[inline]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    #[inline]
    fn idx(&self, c: Coord) -> Option<usize> {
        if c.row >= 0 && c.col >= 0 && c.row < self.rows && c.col < self.rows {
            Some(c.row as usize * self.rows as usize + c.col as usize)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Search for a shortest path from `start` to `end`.
///
/// `observer` sees the grid after every expansion and after every path mark;
/// `cancel` is polled before every expansion.
pub fn search<O, C>(
    grid: &mut Grid,
    start: Coord,
    end: Coord,
    mut observer: O,
    cancel: &C,
) -> Result<Outcome, SearchError>
where
    O: StepObserver,
    C: Cancellation + ?Sized,
{
    let mut astar = Astar::new(grid, start, end)?;
    Ok(astar.run(grid, &mut observer, cancel))
}

/// Like [`search`], taking the endpoints from the grid's start and end cells.
pub fn search_marked<O, C>(grid: &mut Grid, observer: O, cancel: &C) -> Result<Outcome, SearchError>
where
    O: StepObserver,
    C: Cancellation + ?Sized,
{
    let start = grid.start().ok_or(SearchError::MissingStart)?;
    let end = grid.end().ok_or(SearchError::MissingEnd)?;
    search(grid, start, end, observer, cancel)
}
