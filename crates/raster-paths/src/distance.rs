use raster_core::Point;

/// Chebyshev (L∞) distance between two points: the minimum number of
/// 8-directional moves from `a` to `b`.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
