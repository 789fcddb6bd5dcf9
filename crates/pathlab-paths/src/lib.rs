//! A* search over pathlab grids.
//!
//! The engine is 4-connected with unit step costs and the Manhattan
//! heuristic. It paints its progress straight onto the [`Grid`] it searches
//! (frontier, visited, and finally path cells) and hands the grid to a
//! [`StepObserver`] after every expansion, so a caller can animate the
//! search without the engine knowing anything about rendering.
//!
//! - [`search`] / [`search_marked`] run a whole search.
//! - [`Astar`] exposes the state machine for step-by-step driving and for
//!   inspecting scores and predecessor links afterwards.
//! - [`bfs_distance`] gives the exact shortest distance, useful as an oracle.
//!
//! [`Grid`]: pathlab_core::Grid

mod astar;
mod bfs;
mod distance;
mod open;
mod path;
mod traits;

#[cfg(test)]
mod props;

pub use astar::{Astar, SearchError, Status, UNREACHABLE, search, search_marked};
pub use bfs::bfs_distance;
pub use distance::manhattan;
pub use path::{Outcome, Path};
pub use traits::{CancelFlag, CancelFn, Cancellation, Never, StepObserver};
