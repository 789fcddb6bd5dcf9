//! Terminal demo for pathlab: builds a board, then animates an A* search on
//! it with crossterm, lets the user paint a board with the mouse, or runs
//! headless and prints the result.

pub mod boards;
pub mod config;
pub mod editor;
pub mod term;

use std::fmt;
use std::io;
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use rand::SeedableRng;
use rand::rngs::StdRng;

use pathlab_core::{Coord, Grid, LayoutError};
use pathlab_paths::{Never, Outcome, SearchError, bfs_distance, search_marked};

use crate::config::{DemoConfig, Mode};
use crate::editor::Editor;
use crate::term::{CELL_COLUMNS, KeyCancel, Terminal, is_quit_key};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Anything that can stop the demo.
#[derive(Debug)]
pub enum DemoError {
    UnknownBoard(String),
    Layout(LayoutError),
    Search(SearchError),
    Io(io::Error),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBoard(name) => write!(
                f,
                "unknown board \u{201c}{name}\u{201d} (known: {})",
                boards::BUILTIN_NAMES.join(", ")
            ),
            Self::Layout(e) => write!(f, "bad board layout: {e}"),
            Self::Search(e) => write!(f, "cannot search: {e}"),
            Self::Io(e) => write!(f, "terminal error: {e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownBoard(_) => None,
            Self::Layout(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<LayoutError> for DemoError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

impl From<SearchError> for DemoError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<io::Error> for DemoError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Result of one search, for the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub outcome: Outcome,
    /// Observer calls seen during the search.
    pub steps: usize,
    /// BFS distance computed before the search, as a cross-check.
    pub shortest: Option<u32>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Succeeded(path) => {
                write!(f, "path found: {} steps", path.len())?;
                if let Some(d) = self.shortest {
                    write!(f, " (shortest possible {d})")?;
                }
                write!(f, ", {} updates", self.steps)
            }
            Outcome::Exhausted => write!(f, "no path, {} updates", self.steps),
            Outcome::Cancelled => write!(f, "cancelled after {} updates", self.steps),
        }
    }
}

// ---------------------------------------------------------------------------
// Board setup
// ---------------------------------------------------------------------------

/// Build the starting board described by `cfg`.
pub fn build_grid(cfg: &DemoConfig) -> Result<Grid, DemoError> {
    if let Some(name) = &cfg.maze {
        let text = boards::builtin(name).ok_or_else(|| DemoError::UnknownBoard(name.clone()))?;
        return Ok(Grid::from_layout(text, cfg.width)?);
    }
    let grid = match cfg.seed {
        Some(seed) => {
            boards::random_grid(cfg.rows, cfg.width, cfg.density, &mut StdRng::seed_from_u64(seed))
        }
        None => boards::random_grid(cfg.rows, cfg.width, cfg.density, &mut rand::rng()),
    };
    Ok(grid)
}

/// Board cell under a terminal position, going through the grid's own
/// pixel mapping.
pub fn cell_under(grid: &Grid, column: u16, row: u16) -> Option<Coord> {
    let cs = grid.cell_size();
    let x = (column / CELL_COLUMNS) as i32 * cs;
    let y = row as i32 * cs;
    grid.coord_at_pixel(x, y)
}

fn shortest(grid: &Grid) -> Option<u32> {
    let (start, end) = (grid.start()?, grid.end()?);
    bfs_distance(grid, start, end)
}

// ---------------------------------------------------------------------------
// Modes
// ---------------------------------------------------------------------------

/// Run the demo in the mode `cfg` asks for.
pub fn run(cfg: &DemoConfig) -> Result<(), DemoError> {
    match cfg.mode {
        Mode::Headless => {
            let (grid, summary) = headless(cfg)?;
            println!("{grid}");
            println!("{summary}");
        }
        Mode::Animate => {
            let summary = animate(cfg)?;
            println!("{summary}");
        }
        Mode::Interactive => interactive(cfg)?,
    }
    Ok(())
}

/// Search without touching the terminal.
pub fn headless(cfg: &DemoConfig) -> Result<(Grid, Summary), DemoError> {
    let mut grid = build_grid(cfg)?;
    let shortest = shortest(&grid);
    let mut steps = 0;
    let outcome = search_marked(&mut grid, |_: &Grid| steps += 1, &Never)?;
    log::info!("headless search finished: {outcome:?}");
    Ok((
        grid,
        Summary {
            outcome,
            steps,
            shortest,
        },
    ))
}

fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

/// Animate one search on a generated board.
pub fn animate(cfg: &DemoConfig) -> Result<Summary, DemoError> {
    let mut grid = build_grid(cfg)?;
    let shortest = shortest(&grid);
    let mut term = Terminal::enter(false)?;
    term.draw(&grid, "searching... (q to stop)")?;

    let cancel = KeyCancel::new();
    let mut steps = 0;
    let outcome = {
        let observer = |g: &Grid| {
            steps += 1;
            if let Err(e) = term.draw(g, "searching... (q to stop)") {
                log::warn!("redraw failed: {e}");
            }
            thread::sleep(cfg.delay);
        };
        search_marked(&mut grid, observer, &cancel)?
    };

    let summary = Summary {
        outcome,
        steps,
        shortest,
    };
    term.draw(&grid, &format!("{summary}. Press any key."))?;
    wait_for_key()?;
    Ok(summary)
}

const HELP: &str = "click: start/end/barrier  right-click: erase  space: search  c: clear  q: quit";

/// Paint a board with the mouse and search it as often as wanted.
pub fn interactive(cfg: &DemoConfig) -> Result<(), DemoError> {
    let grid = match &cfg.maze {
        Some(_) => build_grid(cfg)?,
        None => Grid::new(cfg.rows, cfg.width),
    };
    let mut editor = Editor::new(grid);
    let mut term = Terminal::enter(true)?;
    let mut status = HELP.to_string();

    loop {
        term.draw(editor.grid(), &status)?;
        match event::read()? {
            Event::Key(key) if is_quit_key(&key) => break,
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char(' ') => {
                    let cancel = KeyCancel::new();
                    let mut steps = 0;
                    let result = editor.run(
                        |g: &Grid| {
                            steps += 1;
                            if let Err(e) = term.draw(g, "searching... (q to stop)") {
                                log::warn!("redraw failed: {e}");
                            }
                            thread::sleep(cfg.delay);
                        },
                        &cancel,
                    );
                    status = match result {
                        Ok(outcome) => Summary {
                            outcome,
                            steps,
                            shortest: None,
                        }
                        .to_string(),
                        Err(e) => e.to_string(),
                    };
                }
                KeyCode::Char('c') => {
                    editor.clear();
                    status = HELP.to_string();
                }
                _ => {}
            },
            Event::Mouse(me) => {
                let Some(c) = cell_under(editor.grid(), me.column, me.row) else {
                    continue;
                };
                let edit = match me.kind {
                    MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                        editor.place(c)
                    }
                    MouseEventKind::Down(MouseButton::Right) | MouseEventKind::Drag(MouseButton::Right) => {
                        editor.erase(c)
                    }
                    _ => Ok(()),
                };
                if let Err(e) = edit {
                    log::warn!("ignoring click: {e}");
                }
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathlab_core::Role;

    #[test]
    fn headless_wall_board() {
        let cfg = DemoConfig {
            maze: Some("wall".into()),
            mode: Mode::Headless,
            ..DemoConfig::default()
        };
        let (grid, summary) = headless(&cfg).unwrap();
        assert_eq!(summary.shortest, Some(8));
        assert_eq!(summary.outcome.path().map(|p| p.len()), Some(8));
        // Twelve non-final expansions plus seven path marks.
        assert_eq!(summary.steps, 12 + 7);
        assert_eq!(grid.role(Coord::new(2, 4)), Ok(Role::Path));
        assert_eq!(
            summary.to_string(),
            "path found: 8 steps (shortest possible 8), 19 updates"
        );
    }

    #[test]
    fn seeded_boards_are_reproducible() {
        let cfg = DemoConfig {
            rows: 12,
            seed: Some(42),
            ..DemoConfig::default()
        };
        let a = build_grid(&cfg).unwrap();
        let b = build_grid(&cfg).unwrap();
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn unknown_board_is_reported() {
        let cfg = DemoConfig {
            maze: Some("labyrinth".into()),
            ..DemoConfig::default()
        };
        let err = build_grid(&cfg).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown board \u{201c}labyrinth\u{201d} (known: wall, spiral, rooms)"
        );
    }

    #[test]
    fn terminal_positions_map_to_cells() {
        let grid = Grid::new(20, 800);
        assert_eq!(cell_under(&grid, 0, 0), Some(Coord::new(0, 0)));
        assert_eq!(cell_under(&grid, 1, 0), Some(Coord::new(0, 0)));
        assert_eq!(cell_under(&grid, 5, 3), Some(Coord::new(3, 2)));
        assert_eq!(cell_under(&grid, 40, 0), None);
        assert_eq!(cell_under(&grid, 0, 20), None);
    }

    #[test]
    fn summary_wording() {
        let s = Summary {
            outcome: Outcome::Exhausted,
            steps: 4,
            shortest: None,
        };
        assert_eq!(s.to_string(), "no path, 4 updates");
        let s = Summary {
            outcome: Outcome::Cancelled,
            steps: 1,
            shortest: Some(3),
        };
        assert_eq!(s.to_string(), "cancelled after 1 updates");
    }
}
