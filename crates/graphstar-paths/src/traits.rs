use graphstar_core::Point;

/// Estimates the remaining distance between two positions.
///
/// Any `Fn(Point, Point) -> f64` is a heuristic, so the distance functions
/// of `graphstar_core::heuristic` can be passed directly.
pub trait Heuristic {
    /// Estimated distance from `from` to `to`. Must not be negative.
    fn estimate(&self, from: Point, to: Point) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(Point, Point) -> f64,
{
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        self(from, to)
    }
}
