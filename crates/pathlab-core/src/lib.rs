//! **pathlab-core** — grid model for the pathlab A* visualiser.
//!
//! This crate holds everything a search needs to know about the board:
//! coordinates, the role carried by each cell, and the cached 4-way
//! adjacency derived from barrier placement. Searching itself lives in
//! `pathlab-paths`.

pub mod geom;
pub mod grid;
pub mod layout;
pub mod role;

pub use geom::Coord;
pub use grid::{Grid, GridError};
pub use layout::LayoutError;
pub use role::Role;
