//! Square text layouts for building grids by hand.
//!
//! Each line is one row and each character one cell, using the glyphs from
//! [`Role::glyph`]:
//!
//! ```text
//! S....
//! .....
//! ####.
//! .....
//! ....E
//! ```
//!
//! Leading/trailing blank lines and per-line indentation are ignored so
//! layouts can be written inline in indented source.

use std::fmt;

use crate::geom::Coord;
use crate::grid::Grid;
use crate::role::Role;

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A line's width differs from the number of rows.
    NotSquare { rows: usize, line: usize, width: usize },
    /// A character that is not a role glyph was found.
    InvalidGlyph { ch: char, coord: Coord },
    /// `S` or `E` appears more than once.
    DuplicateRole(Role),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare { rows, line, width } => write!(
                f,
                "layout is not square: line {line} has {width} cells, expected {rows}"
            ),
            Self::InvalidGlyph { ch, coord } => {
                write!(f, "layout contains invalid glyph \u{201c}{ch}\u{201d} at {coord}")
            }
            Self::DuplicateRole(role) => write!(f, "layout marks {role:?} more than once"),
        }
    }
}

impl std::error::Error for LayoutError {}

impl Grid {
    /// Build a grid from a text layout. Adjacency is computed before
    /// returning, so the grid is ready to search.
    pub fn from_layout(text: &str, total_width: i32) -> Result<Grid, LayoutError> {
        let lines: Vec<&str> = text.trim().lines().map(str::trim).collect();
        let rows = lines.len();

        let mut grid = Grid::new(rows as i32, total_width);
        let mut seen_start = false;
        let mut seen_end = false;

        for (r, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != rows {
                return Err(LayoutError::NotSquare {
                    rows,
                    line: r,
                    width,
                });
            }
            for (c, ch) in line.chars().enumerate() {
                let coord = Coord::new(r as i32, c as i32);
                let role = Role::from_glyph(ch).ok_or(LayoutError::InvalidGlyph { ch, coord })?;
                let seen = match role {
                    Role::Start => Some(&mut seen_start),
                    Role::End => Some(&mut seen_end),
                    _ => None,
                };
                if let Some(seen) = seen {
                    if *seen {
                        return Err(LayoutError::DuplicateRole(role));
                    }
                    *seen = true;
                }
                // Coordinates come from the square check above.
                let _ = grid.set_role(coord, role);
            }
        }

        grid.recompute_neighbors();
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.rows().max(0) as usize;
        for (i, (_, role)) in self.iter().enumerate() {
            write!(f, "{}", role.glyph())?;
            if (i + 1) % n == 0 && i + 1 < self.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALL: &str = "
        S....
        .....
        ####.
        .....
        ....E
    ";

    #[test]
    fn parse_roles_and_adjacency() {
        let g = Grid::from_layout(WALL, 500).unwrap();
        assert_eq!(g.rows(), 5);
        assert_eq!(g.cell_size(), 100);
        assert_eq!(g.start(), Some(Coord::new(0, 0)));
        assert_eq!(g.end(), Some(Coord::new(4, 4)));
        assert_eq!(g.count(Role::Barrier), 4);
        assert!(!g.neighbors_stale());
        // (1,0) cannot step down into the wall.
        assert_eq!(
            g.neighbors(Coord::new(1, 0)).unwrap(),
            &[Coord::new(0, 0), Coord::new(1, 1)]
        );
    }

    #[test]
    fn display_matches_layout() {
        let g = Grid::from_layout(WALL, 500).unwrap();
        assert_eq!(g.to_string(), "S....\n.....\n####.\n.....\n....E");
    }

    #[test]
    fn rejects_ragged_layout() {
        let err = Grid::from_layout("S..\n..\n..E", 30).unwrap_err();
        assert_eq!(
            err,
            LayoutError::NotSquare {
                rows: 3,
                line: 1,
                width: 2
            }
        );
    }

    #[test]
    fn rejects_unknown_glyph() {
        let err = Grid::from_layout("S.\n.?", 20).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidGlyph {
                ch: '?',
                coord: Coord::new(1, 1)
            }
        );
    }

    #[test]
    fn rejects_second_start() {
        let err = Grid::from_layout("S.\n.S", 20).unwrap_err();
        assert_eq!(err, LayoutError::DuplicateRole(Role::Start));
        assert_eq!(err.to_string(), "layout marks Start more than once");
    }

    #[test]
    fn empty_layout_gives_empty_grid() {
        let g = Grid::from_layout("", 100).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.to_string(), "");
    }
}
