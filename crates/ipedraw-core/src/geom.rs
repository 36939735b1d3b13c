#![forbid(unsafe_code)]

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub type Unit = euclid::UnknownUnit;

/// Ipe page coordinates are integer valued; only derived radii are fractional.
pub type Point = euclid::Point2D<i32, Unit>;

pub fn point(x: i32, y: i32) -> Point {
    euclid::point2(x, y)
}

/// Euclidean distance between two integer points, evaluated in `f64`.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = f64::from(b.x) - f64::from(a.x);
    let dy = f64::from(b.y) - f64::from(a.y);
    (dx * dx + dy * dy).sqrt()
}

/// Integer midpoint, truncating toward zero like integer division does.
///
/// The sum is taken in `i64` so that large coordinates cannot overflow.
pub fn midpoint(a: Point, b: Point) -> Point {
    let mid = |p: i32, q: i32| ((i64::from(p) + i64::from(q)) / 2) as i32;
    point(mid(a.x, b.x), mid(a.y, b.y))
}

/// An ordered, non-empty list of points used by paths, splines and splinegons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct PointSequence(Vec<Point>);

impl PointSequence {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::geometry(
                "point sequence",
                "at least one point is required",
            ));
        }
        Ok(Self(points))
    }

    /// A two-point sequence, i.e. a straight segment.
    pub fn pair(from: Point, to: Point) -> Self {
        Self(vec![from, to])
    }

    /// Builds a sequence from parallel coordinate arrays.
    pub fn from_coords(xs: &[i32], ys: &[i32]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(Error::geometry(
                "point sequence",
                format!(
                    "{} x-coordinates but {} y-coordinates",
                    xs.len(),
                    ys.len()
                ),
            ));
        }
        Self::new(xs.iter().zip(ys).map(|(&x, &y)| point(x, y)).collect())
    }

    pub fn first(&self) -> Point {
        self.0[0]
    }

    /// Every point after the first, in input order.
    pub fn rest(&self) -> &[Point] {
        &self.0[1..]
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl TryFrom<Vec<Point>> for PointSequence {
    type Error = Error;

    fn try_from(points: Vec<Point>) -> Result<Self> {
        Self::new(points)
    }
}

impl TryFrom<&[Point]> for PointSequence {
    type Error = Error;

    fn try_from(points: &[Point]) -> Result<Self> {
        Self::new(points.to_vec())
    }
}

impl From<PointSequence> for Vec<Point> {
    fn from(seq: PointSequence) -> Self {
        seq.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_matches_pythagoras() {
        assert_eq!(distance(point(0, 0), point(3, 4)), 5.0);
        assert_eq!(distance(point(-1, -1), point(-1, -1)), 0.0);
    }

    #[test]
    fn midpoint_truncates_toward_zero() {
        assert_eq!(midpoint(point(0, 0), point(3, 3)), point(1, 1));
        assert_eq!(midpoint(point(0, 0), point(-3, -3)), point(-1, -1));
        assert_eq!(midpoint(point(i32::MAX, 0), point(i32::MAX, 2)), point(i32::MAX, 1));
    }

    #[test]
    fn point_sequence_rejects_empty_and_mismatched_input() {
        assert!(PointSequence::new(Vec::new()).is_err());
        let err = PointSequence::from_coords(&[1, 2], &[1]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid geometry (point sequence): 2 x-coordinates but 1 y-coordinates"
        );
    }

    #[test]
    fn point_sequence_splits_first_and_rest() {
        let seq = PointSequence::from_coords(&[1, 2, 3], &[4, 5, 6]).unwrap();
        assert_eq!(seq.first(), point(1, 4));
        assert_eq!(seq.rest(), &[point(2, 5), point(3, 6)]);
        assert_eq!(seq.len(), 3);
    }
}
