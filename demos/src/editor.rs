//! Board editing rules for the interactive mode.
//!
//! The first main click places the start, the second the end, every further
//! click a barrier. A secondary click clears a cell and forgets it if it was
//! the start or end.

use pathlab_core::{Coord, Grid, GridError, Role};
use pathlab_paths::{Cancellation, Outcome, SearchError, StepObserver, search};

/// A board plus the endpoints the user has placed on it.
#[derive(Debug, Clone)]
pub struct Editor {
    grid: Grid,
    start: Option<Coord>,
    end: Option<Coord>,
}

impl Editor {
    pub fn new(grid: Grid) -> Self {
        let start = grid.start();
        let end = grid.end();
        Self { grid, start, end }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    /// Place the next missing endpoint at `c`, or a barrier once both exist.
    pub fn place(&mut self, c: Coord) -> Result<(), GridError> {
        if self.start.is_none() && self.end != Some(c) {
            self.grid.set_role(c, Role::Start)?;
            self.start = Some(c);
        } else if self.end.is_none() && self.start != Some(c) {
            self.grid.set_role(c, Role::End)?;
            self.end = Some(c);
        } else if self.start != Some(c) && self.end != Some(c) {
            self.grid.set_role(c, Role::Barrier)?;
        }
        Ok(())
    }

    /// Clear the cell at `c`.
    pub fn erase(&mut self, c: Coord) -> Result<(), GridError> {
        self.grid.reset_role(c)?;
        if self.start == Some(c) {
            self.start = None;
        } else if self.end == Some(c) {
            self.end = None;
        }
        Ok(())
    }

    /// Wipe the whole board.
    pub fn clear(&mut self) {
        self.grid.reset();
        self.start = None;
        self.end = None;
    }

    /// Run a search between the placed endpoints.
    ///
    /// Marks from an earlier run are wiped and adjacency is rebuilt first,
    /// so the board can be edited and searched repeatedly.
    pub fn run<O, C>(&mut self, observer: O, cancel: &C) -> Result<Outcome, SearchError>
    where
        O: StepObserver,
        C: Cancellation + ?Sized,
    {
        let start = self.start.ok_or(SearchError::MissingStart)?;
        let end = self.end.ok_or(SearchError::MissingEnd)?;
        self.grid.clear_search_marks();
        self.grid.recompute_neighbors();
        search(&mut self.grid, start, end, observer, cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathlab_paths::Never;

    fn noop(_: &Grid) {}

    #[test]
    fn clicks_place_start_then_end_then_barriers() {
        let mut ed = Editor::new(Grid::new(4, 40));
        ed.place(Coord::new(0, 0)).unwrap();
        ed.place(Coord::new(3, 3)).unwrap();
        ed.place(Coord::new(1, 1)).unwrap();
        // Clicking an endpoint again leaves it alone.
        ed.place(Coord::new(0, 0)).unwrap();

        assert_eq!(ed.start(), Some(Coord::new(0, 0)));
        assert_eq!(ed.end(), Some(Coord::new(3, 3)));
        assert_eq!(ed.grid().role(Coord::new(1, 1)), Ok(Role::Barrier));
        assert_eq!(ed.grid().role(Coord::new(0, 0)), Ok(Role::Start));
    }

    #[test]
    fn erasing_start_frees_it() {
        let mut ed = Editor::new(Grid::new(4, 40));
        ed.place(Coord::new(0, 0)).unwrap();
        ed.place(Coord::new(3, 3)).unwrap();
        ed.erase(Coord::new(0, 0)).unwrap();
        assert_eq!(ed.start(), None);

        // Next click becomes the start again, not a barrier.
        ed.place(Coord::new(2, 2)).unwrap();
        assert_eq!(ed.start(), Some(Coord::new(2, 2)));
        assert_eq!(ed.grid().role(Coord::new(2, 2)), Ok(Role::Start));
    }

    #[test]
    fn out_of_bounds_click_is_an_error() {
        let mut ed = Editor::new(Grid::new(4, 40));
        assert!(ed.place(Coord::new(4, 0)).is_err());
        assert_eq!(ed.start(), None);
    }

    #[test]
    fn run_requires_both_endpoints() {
        let mut ed = Editor::new(Grid::new(4, 40));
        assert_eq!(ed.run(noop, &Never), Err(SearchError::MissingStart));
        ed.place(Coord::new(0, 0)).unwrap();
        assert_eq!(ed.run(noop, &Never), Err(SearchError::MissingEnd));
    }

    #[test]
    fn rerun_after_edit_uses_fresh_adjacency() {
        let mut ed = Editor::new(Grid::new(3, 30));
        ed.place(Coord::new(0, 0)).unwrap();
        ed.place(Coord::new(0, 2)).unwrap();
        let first = ed.run(noop, &Never).unwrap();
        assert_eq!(first.path().map(|p| p.len()), Some(2));

        ed.place(Coord::new(0, 1)).unwrap();
        let second = ed.run(noop, &Never).unwrap();
        assert_eq!(second.path().map(|p| p.len()), Some(4));
        assert_eq!(ed.grid().count(Role::Path), 3);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut ed = Editor::new(Grid::from_layout("S.\n.E", 20).unwrap());
        assert_eq!(ed.start(), Some(Coord::new(0, 0)));
        ed.clear();
        assert_eq!(ed.start(), None);
        assert_eq!(ed.end(), None);
        assert_eq!(ed.grid().count(Role::Empty), 4);
    }
}
