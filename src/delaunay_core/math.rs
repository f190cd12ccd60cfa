use std::{error::Error, fmt::Display};

use crate::{CoordNum, Point2};

/// The error type used for inserting sites into a triangulation.
///
/// Errors during insertion can only originate from an invalid site position.
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Debug, Hash)]
pub enum InsertionError {
    /// A coordinate value was NaN or infinite.
    NAN,

    /// The site does not lie strictly inside the bounding triangle.
    ///
    /// Sites on (or within the on-edge tolerance of) a side of the bounding triangle are
    /// rejected as well. See [crate::TriangulationConfig::boundary_size].
    OutsideBoundary,
}

impl Display for InsertionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Debug>::fmt(self, f)
    }
}

impl Error for InsertionError {}

/// Checks if a coordinate value can be used as a site coordinate.
///
/// Returns [InsertionError::NAN] for NaN and for infinite values. Whether the resulting
/// position also lies within the bounding triangle is checked by
/// [crate::DelaunayTriangulation::insert].
pub fn validate_coordinate<S: CoordNum>(value: S) -> Result<(), InsertionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InsertionError::NAN)
    }
}

/// Twice the signed area of the triangle `(a, b, c)`.
///
/// The value is positive if the triangle is ordered counterclockwise and negative if `c`
/// lies strictly on the right side of the directed line `a -> b`.
///
/// The determinant is evaluated in plain floating point arithmetic; results close to
/// zero may carry the wrong sign.
#[inline]
pub fn orientation_determinant<S: CoordNum>(a: Point2<S>, b: Point2<S>, c: Point2<S>) -> S {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

/// Returns `true` if `point` lies strictly on the right side of the directed line
/// `from -> to`.
#[inline]
pub fn is_right_of<S: CoordNum>(point: Point2<S>, from: Point2<S>, to: Point2<S>) -> bool {
    orientation_determinant(from, to, point) < S::zero()
}

/// Returns `true` if `d` lies strictly inside the circle through `a`, `b` and `c`.
///
/// `a`, `b` and `c` must be ordered counterclockwise. The lifted 4x4 determinant is
/// expanded along the column of squared norms. No exact arithmetic is used: points that
/// are (almost) co-circular may be classified either way.
pub fn in_circle<S: CoordNum>(a: Point2<S>, b: Point2<S>, c: Point2<S>, d: Point2<S>) -> bool {
    let det = a.length2() * orientation_determinant(b, c, d)
        - b.length2() * orientation_determinant(a, c, d)
        + c.length2() * orientation_determinant(a, b, d)
        - d.length2() * orientation_determinant(a, b, c);
    det > S::zero()
}

/// Returns the circumcenter of a triangle.
///
/// The result is not finite if the triangle is degenerate (all points collinear).
pub fn circumcenter<S: CoordNum>(positions: [Point2<S>; 3]) -> Point2<S> {
    let [v0, v1, v2] = positions;
    let b = v1.sub(v0);
    let c = v2.sub(v0);

    let two = S::one() + S::one();
    let d = two * (b.x * c.y - b.y * c.x);
    let len_b = b.length2();
    let len_c = c.length2();

    let x = (c.y * len_b - b.y * len_c) / d;
    let y = (b.x * len_c - c.x * len_b) / d;
    Point2::new(x, y).add(v0)
}

/// Checks if `point` lies on the segment `from -> to`.
///
/// The point is written as `from + t * (to - from)` and `t` is solved for on both axes
/// separately. The point is considered to be on the segment if both solutions differ by
/// at most `epsilon` and both lie within `[0, 1]`. An axis along which the segment does
/// not extend must match exactly and does not constrain `t`.
///
/// Note that `epsilon` bounds the difference of the parameters, not a distance: the
/// tolerated offset from the segment grows with the segment's length.
pub fn is_on_segment<S: CoordNum>(
    point: Point2<S>,
    from: Point2<S>,
    to: Point2<S>,
    epsilon: S,
) -> bool {
    let zero = S::zero();
    let dir = to.sub(from);
    let offset = point.sub(from);
    let is_in_unit_range = |t: S| t >= zero && t <= S::one();

    match (dir.x == zero, dir.y == zero) {
        (true, true) => false,
        (true, false) => offset.x == zero && is_in_unit_range(offset.y / dir.y),
        (false, true) => offset.y == zero && is_in_unit_range(offset.x / dir.x),
        (false, false) => {
            let tx = offset.x / dir.x;
            let ty = offset.y / dir.y;
            (tx - ty).abs() <= epsilon && is_in_unit_range(tx) && is_in_unit_range(ty)
        }
    }
}

#[cfg(test)]
mod test {
    use super::{
        circumcenter, in_circle, is_on_segment, is_right_of, orientation_determinant,
        validate_coordinate, InsertionError,
    };
    use crate::Point2;
    use approx::assert_relative_eq;

    #[test]
    fn test_validate_coordinate() {
        assert_eq!(validate_coordinate(f64::NAN), Err(InsertionError::NAN));
        assert_eq!(validate_coordinate(f64::INFINITY), Err(InsertionError::NAN));
        assert_eq!(validate_coordinate(f32::NEG_INFINITY), Err(InsertionError::NAN));
        assert_eq!(validate_coordinate(0.0), Ok(()));
        assert_eq!(validate_coordinate(-1.0e300), Ok(()));
    }

    #[test]
    fn test_orientation() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(2.0, 0.0);
        assert_eq!(orientation_determinant(a, b, Point2::new(1.0, 1.0)), 2.0);
        assert_eq!(orientation_determinant(a, b, Point2::new(1.0, -1.0)), -2.0);
        assert_eq!(orientation_determinant(a, b, Point2::new(5.0, 0.0)), 0.0);

        assert!(is_right_of(Point2::new(1.0, -1.0), a, b));
        assert!(!is_right_of(Point2::new(1.0, 1.0), a, b));
        assert!(!is_right_of(Point2::new(-3.0, 0.0), a, b));
    }

    #[test]
    fn test_in_circle() {
        let (a1, a2, a3) = (3f64, 2f64, 1f64);
        let offset = Point2::new(0.5, 0.7);
        let on_circle = |angle: f64| Point2::new(angle.sin() * 2.0, angle.cos() * 2.0).add(offset);
        let (v1, v2, v3) = (on_circle(a1), on_circle(a2), on_circle(a3));
        assert!(orientation_determinant(v1, v2, v3) > 0.0);

        assert!(in_circle(v1, v2, v3, offset));
        let shrunk = Point2::new(
            (v1.x - offset.x) * 0.9 + offset.x,
            (v1.y - offset.y) * 0.9 + offset.y,
        );
        assert!(in_circle(v1, v2, v3, shrunk));
        let expanded = Point2::new(
            (v1.x - offset.x) * 1.1 + offset.x,
            (v1.y - offset.y) * 1.1 + offset.y,
        );
        assert!(!in_circle(v1, v2, v3, expanded));
        assert!(!in_circle(
            v1,
            v2,
            v3,
            Point2::new(2.0 + offset.x, 2.0 + offset.y)
        ));
    }

    #[test]
    fn test_in_circle_is_strict() {
        // The fourth corner of a square lies exactly on the circumcircle of the other three
        let a = Point2::new(100.0, 100.0);
        let b = Point2::new(200.0, 100.0);
        let c = Point2::new(200.0, 200.0);
        let d = Point2::new(100.0, 200.0);
        assert!(!in_circle(a, b, c, d));
        assert!(!in_circle(b, c, d, a));
    }

    #[test]
    fn test_circumcenter() {
        let center = circumcenter([
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 2.0),
        ]);
        assert_relative_eq!(center.x, 2.0);
        assert_relative_eq!(center.y, 1.0);

        let positions = [
            Point2::new(-3.5, 1.25),
            Point2::new(7.0, -2.0),
            Point2::new(1.5, 9.75),
        ];
        let center = circumcenter(positions);
        let radius = center.distance(positions[0]);
        assert_relative_eq!(center.distance(positions[1]), radius, epsilon = 1.0e-10);
        assert_relative_eq!(center.distance(positions[2]), radius, epsilon = 1.0e-10);
    }

    #[test]
    fn test_degenerate_circumcenter() {
        let center = circumcenter([
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        ]);
        assert!(!center.is_finite());
    }

    #[test]
    fn test_is_on_segment() {
        let eps = 0.001;
        let from = Point2::new(0.0, 0.0);
        let to = Point2::new(4.0, 2.0);
        assert!(is_on_segment(Point2::new(2.0, 1.0), from, to, eps));
        assert!(is_on_segment(from, from, to, eps));
        assert!(is_on_segment(to, from, to, eps));
        assert!(!is_on_segment(Point2::new(6.0, 3.0), from, to, eps));
        assert!(!is_on_segment(Point2::new(-2.0, -1.0), from, to, eps));
        assert!(!is_on_segment(Point2::new(2.0, 1.5), from, to, eps));
    }

    #[test]
    fn test_is_on_axis_aligned_segment() {
        let eps = 0.001;
        let from = Point2::new(0.0, 0.0);
        let horizontal = Point2::new(100.0, 0.0);
        assert!(is_on_segment(Point2::new(50.0, 0.0), from, horizontal, eps));
        assert!(!is_on_segment(Point2::new(50.0, 0.5), from, horizontal, eps));
        assert!(!is_on_segment(Point2::new(150.0, 0.0), from, horizontal, eps));

        let vertical = Point2::new(0.0, -10.0);
        assert!(is_on_segment(Point2::new(0.0, -3.0), from, vertical, eps));
        assert!(!is_on_segment(Point2::new(0.0, 3.0), from, vertical, eps));
        assert!(!is_on_segment(Point2::new(0.0, 0.0), from, from, eps));
    }

    #[test]
    fn test_tolerance_scales_with_segment_length() {
        // The tolerance applies to the parameter, so a long segment accepts points that
        // are noticeably off the line. This is a known precision boundary.
        let eps = 0.001;
        let from = Point2::new(0.0, 0.0);
        let to = Point2::new(999.0, 1000.0);
        let off_line = Point2::new(500.0, 500.0);
        assert!(orientation_determinant(from, to, off_line) != 0.0);
        assert!(is_on_segment(off_line, from, to, eps));
        assert!(!is_on_segment(off_line, from, to, 1.0e-9));
    }
}
