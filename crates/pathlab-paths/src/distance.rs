use pathlab_core::Coord;

/// Manhattan (L1) distance between two coordinates.
///
/// Admissible and consistent for 4-connected grids with unit step cost.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Coord::new(0, 0);
        let b = Coord::new(4, 3);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn neighbours_differ_by_one() {
        let c = Coord::new(2, 2);
        let goal = Coord::new(5, 0);
        for n in c.neighbors_4() {
            assert_eq!((manhattan(n, goal) - manhattan(c, goal)).abs(), 1);
        }
    }
}
