use pathlab_core::Coord;

/// A reconstructed path, from start to end inclusive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    coords: Vec<Coord>,
}

impl Path {
    pub(crate) fn new(coords: Vec<Coord>) -> Self {
        Self { coords }
    }

    /// All coordinates, start first.
    #[inline]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Number of steps (edges) along the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len().saturating_sub(1)
    }

    /// Whether the path takes no steps (start and end coincide).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.coords.first().copied()
    }

    #[inline]
    pub fn end(&self) -> Option<Coord> {
        self.coords.last().copied()
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.coords.contains(&c)
    }

    /// Cells strictly between start and end.
    pub fn interior(&self) -> &[Coord] {
        match self.coords.len() {
            0..=2 => &[],
            n => &self.coords[1..n - 1],
        }
    }
}

/// How a search finished.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The end cell was reached.
    Succeeded(Path),
    /// The open set ran dry: no path exists.
    Exhausted,
    /// The caller asked the search to stop.
    Cancelled,
}

impl Outcome {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded(_))
    }

    /// The path, if the search succeeded.
    #[inline]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Outcome::Succeeded(p) => Some(p),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_counts_edges() {
        let p = Path::new(vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]);
        assert_eq!(p.len(), 2);
        assert_eq!(p.start(), Some(Coord::new(0, 0)));
        assert_eq!(p.end(), Some(Coord::new(1, 1)));
        assert_eq!(p.interior(), &[Coord::new(0, 1)]);
    }

    #[test]
    fn single_node_path_is_empty() {
        let p = Path::new(vec![Coord::ZERO]);
        assert!(p.is_empty());
        assert!(p.interior().is_empty());
        assert!(p.contains(Coord::ZERO));
    }
}
