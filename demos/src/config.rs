//! Demo configuration.

use std::time::Duration;

/// How the demo drives the search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Build a board, animate one search, wait for a key.
    #[default]
    Animate,
    /// Paint start/end/barriers with the mouse, run with space.
    Interactive,
    /// No terminal control at all: print the final board and a summary.
    Headless,
}

/// Configuration for a demo run.
#[derive(Clone, Debug)]
pub struct DemoConfig {
    /// Cells per side.
    pub rows: i32,
    /// Logical width of the board, used only for pixel mapping.
    pub width: i32,
    /// Probability that a random cell becomes a barrier.
    pub density: f64,
    /// RNG seed for random boards; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Name of a built-in board to use instead of a random one.
    pub maze: Option<String>,
    /// Pause after every step the observer sees.
    pub delay: Duration,
    pub mode: Mode,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            width: 800,
            density: 0.3,
            seed: None,
            maze: None,
            delay: Duration::from_millis(15),
            mode: Mode::default(),
        }
    }
}
