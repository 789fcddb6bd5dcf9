//! The [`Role`] type — the single state tag every grid cell carries.

/// What a cell currently represents. Exactly one role holds at any time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    Empty,
    Barrier,
    Start,
    End,
    /// Discovered by the search and waiting in the open set.
    Frontier,
    /// Already expanded by the search.
    Visited,
    /// Part of the reconstructed shortest path.
    Path,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Role; 7] = [
        Role::Empty,
        Role::Barrier,
        Role::Start,
        Role::End,
        Role::Frontier,
        Role::Visited,
        Role::Path,
    ];

    /// Character used for this role in text layouts.
    pub const fn glyph(self) -> char {
        match self {
            Role::Empty => '.',
            Role::Barrier => '#',
            Role::Start => 'S',
            Role::End => 'E',
            Role::Frontier => 'o',
            Role::Visited => 'x',
            Role::Path => '*',
        }
    }

    /// Inverse of [`glyph`](Role::glyph).
    pub fn from_glyph(ch: char) -> Option<Role> {
        Self::ALL.into_iter().find(|r| r.glyph() == ch)
    }

    /// Whether adjacent cells may step onto this cell.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, Role::Barrier)
    }

    /// Whether the search may repaint this cell with its own marks.
    ///
    /// Caller-placed roles (barrier, start, end) are never overwritten.
    #[inline]
    pub const fn is_search_paintable(self) -> bool {
        matches!(self, Role::Empty | Role::Frontier | Role::Visited)
    }

    /// Whether this role was placed by the search rather than the caller.
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Role::Frontier | Role::Visited | Role::Path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_are_unique_and_invertible() {
        for r in Role::ALL {
            assert_eq!(Role::from_glyph(r.glyph()), Some(r));
        }
        assert_eq!(Role::from_glyph('?'), None);
    }

    #[test]
    fn only_barrier_blocks() {
        let blocked: Vec<Role> = Role::ALL.into_iter().filter(|r| !r.is_traversable()).collect();
        assert_eq!(blocked, vec![Role::Barrier]);
    }

    #[test]
    fn search_never_paints_caller_roles() {
        assert!(!Role::Start.is_search_paintable());
        assert!(!Role::End.is_search_paintable());
        assert!(!Role::Barrier.is_search_paintable());
        assert!(!Role::Path.is_search_paintable());
        assert!(Role::Frontier.is_search_paintable());
    }
}
