use std::mem;

use itertools::Itertools;
use log::{debug, trace};
use num_traits::Zero;
use tap::TapFallible;

use crate::{
    error::{GeometryError, Result},
    tolerance::Tolerance,
    vector::Vector,
};

use super::line::Line;

/// Outcome of [`Line::intersects`].
#[derive(Clone, Debug, PartialEq)]
pub struct LineIntersection {
    /// Point solved on whichever line held the `a` role in the final solve.
    pub point: Vector,
    pub intersects: bool,
}

/// Two coordinate axes spanning the plane the solve is projected onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct AxisPair {
    pub x: usize,
    pub y: usize,
}

impl Line {
    /// Intersects the infinite extensions of `a` and `b`.
    ///
    /// Parallel directions are reported as [`GeometryError::SameLine`] or
    /// [`GeometryError::ParallelLines`]. Otherwise the parameters are solved on
    /// the first axis pair where the projected directions are not parallel, and
    /// the two solved points are compared across every dimension.
    ///
    /// ```
    /// use nd_geometry::{Line, Vector};
    ///
    /// let a = Line::new(Vector::from([3.0, 0.0, 4.0]), Vector::from([5.0, -1.0, 7.0]));
    /// let b = Line::new(Vector::from([3.0, 3.0, 5.0]), Vector::from([5.0, 5.0, 9.0]));
    ///
    /// let crossing = Line::intersects(&a, &b).unwrap();
    /// assert!(crossing.intersects);
    /// assert!((crossing.point - Vector::from([1.0, 1.0, 1.0])).square_magnitude() < 1e-12);
    /// ```
    pub fn intersects(a: &Line, b: &Line) -> Result<LineIntersection> {
        Self::intersects_with(a, b, &Tolerance::default())
    }

    pub fn intersects_with(a: &Line, b: &Line, tolerance: &Tolerance) -> Result<LineIntersection> {
        ensure_not_parallel(a, b, tolerance)?;

        let mut point_a = &a.start_point;
        let mut point_b = &b.start_point;
        let mut direction_a = a.along();
        let mut direction_b = b.along();

        let dimension = a.dimension().max(b.dimension());
        let AxisPair { x, y } = find_axis_pair(&direction_a, &direction_b, dimension, tolerance)
            .tap_err(|err| debug!("{err}: {a:?} and {b:?}"))?;
        trace!("solving on axes {x} and {y}");

        if tolerance.is_near_zero(direction_b[x]) {
            debug!("b is vertical on axes {x} and {y}, swapping roles");
            mem::swap(&mut point_a, &mut point_b);
            mem::swap(&mut direction_a, &mut direction_b);
        }

        let delta = point_a - point_b;
        let t = (direction_b[y] * delta[x] - direction_b[x] * delta[y])
            / (direction_b[x] * direction_a[y] - direction_b[y] * direction_a[x]);
        let s = (delta[x] + direction_a[x] * t) / direction_b[x];
        trace!("t = {t}, s = {s}");

        let on_a = point_a + direction_a * t;
        let on_b = point_b + direction_b * s;

        Ok(LineIntersection {
            intersects: tolerance.is_coincident((&on_a - &on_b).square_magnitude()),
            point: on_a,
        })
    }
}

/// Fails when the directions of `a` and `b` are parallel, telling apart a shared
/// infinite line from two distinct ones. A zero-length line on either side is
/// always [`GeometryError::ParallelLines`].
pub(super) fn ensure_not_parallel(a: &Line, b: &Line, tolerance: &Tolerance) -> Result<()> {
    let direction_a = a.along();
    let direction_b = b.along();
    let direction_dot = direction_a.dot(&direction_b);
    let direction_delta = direction_dot.abs() - direction_a.magnitude() * direction_b.magnitude();

    if !tolerance.is_near_zero(direction_delta) {
        return Ok(());
    }

    // a zero-length line has no direction to share with the other one
    let degenerate = direction_a.is_zero() || direction_b.is_zero();
    let err = if !degenerate && a.passes_through(&b.start_point, tolerance) {
        GeometryError::SameLine
    } else {
        GeometryError::ParallelLines
    };
    debug!("{err}: {a:?} and {b:?}");
    Err(err)
}

/// First axis pair, in lexicographic order, on which the projected directions
/// are not parallel.
pub(crate) fn find_axis_pair(
    direction_a: &Vector,
    direction_b: &Vector,
    dimension: usize,
    tolerance: &Tolerance,
) -> Result<AxisPair> {
    (0..dimension)
        .tuple_combinations::<(usize, usize)>()
        .map(|(x, y)| AxisPair { x, y })
        .find(|&AxisPair { x, y }| {
            let cross = direction_a.on_axes(x, y).perp(&direction_b.on_axes(x, y));
            !tolerance.is_coincident(cross * cross)
        })
        .ok_or(GeometryError::DimensionSearchExhausted { dimension })
}
