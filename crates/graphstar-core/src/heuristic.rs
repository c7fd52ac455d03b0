use crate::geom::Point;

/// Manhattan (L1) distance between two points.
///
/// Every connection cost is computed with this metric.
#[inline]
pub fn manhattan(a: Point, b: Point) -> f64 {
    let (dx, dy) = a.abs_delta(b);
    (dx + dy) as f64
}

/// "Diagonal" distance: `(|dx| + |dy|) * min(|dx|, |dy|)`.
///
/// This is not the octile metric (`max + (sqrt(2) - 1) * min`). Straight
/// moves score 0 and the value grows quadratically off-axis, so it is not
/// admissible; callers rely on this exact shape.
#[inline]
pub fn diagonal(a: Point, b: Point) -> f64 {
    let (dx, dy) = a.abs_delta(b);
    (dx + dy) as f64 * dx.min(dy) as f64
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let (dx, dy) = a.abs_delta(b);
    (dx as f64).hypot(dy as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_sums_axes() {
        assert_eq!(manhattan(Point::new(1, 1), Point::new(3, 3)), 4.0);
        assert_eq!(manhattan(Point::new(3, 7), Point::new(8, 7)), 5.0);
        assert_eq!(manhattan(Point::new(-2, 0), Point::new(2, -1)), 5.0);
    }

    #[test]
    fn diagonal_literal_formula() {
        // (2 + 3) * 2
        assert_eq!(diagonal(Point::new(0, 0), Point::new(2, 3)), 10.0);
        // Axis-aligned offsets have min == 0.
        assert_eq!(diagonal(Point::new(0, 0), Point::new(5, 0)), 0.0);
    }

    #[test]
    fn euclidean_straight_line() {
        assert_eq!(euclidean(Point::new(0, 0), Point::new(3, 4)), 5.0);
        let d = euclidean(Point::new(1, 1), Point::new(2, 2));
        assert!((d - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn extreme_positions_do_not_overflow() {
        let a = Point::new(i32::MIN, 0);
        let b = Point::new(i32::MAX, 0);
        assert_eq!(manhattan(a, b), 4_294_967_295.0);
        assert_eq!(euclidean(a, b), 4_294_967_295.0);
        assert_eq!(diagonal(a, b), 0.0);
        let c = Point::new(i32::MAX, i32::MAX);
        assert_eq!(diagonal(a, c), 6_442_450_942.0 * 2_147_483_647.0);
    }

    #[test]
    fn zero_for_identical_points() {
        let p = Point::new(4, 9);
        assert_eq!(manhattan(p, p), 0.0);
        assert_eq!(diagonal(p, p), 0.0);
        assert_eq!(euclidean(p, p), 0.0);
    }
}
