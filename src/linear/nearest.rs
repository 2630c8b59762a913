use log::trace;

use crate::{error::Result, tolerance::Tolerance, vector::Vector};

use super::{intersection::ensure_not_parallel, line::Line};

/// Closest pair of points between two infinite lines.
#[derive(Clone, Debug, PartialEq)]
pub struct NearestApproach {
    pub nearest_to_a: Vector,
    pub nearest_to_b: Vector,
    /// The two points coincide, so the lines truly cross.
    pub intersect: bool,
}

impl Line {
    /// Least-squares nearest approach of `a` and `b`, valid for skew lines in
    /// any dimension.
    ///
    /// Parallel directions fail the same way as in [`Line::intersects`].
    pub fn nearest_point(a: &Line, b: &Line) -> Result<NearestApproach> {
        Self::nearest_point_with(a, b, &Tolerance::default())
    }

    pub fn nearest_point_with(
        a: &Line,
        b: &Line,
        tolerance: &Tolerance,
    ) -> Result<NearestApproach> {
        ensure_not_parallel(a, b, tolerance)?;

        let along_a = a.along();
        let along_b = b.along();
        let r = &a.start_point - &b.start_point;

        let ra = r.dot(&along_a);
        let rb = r.dot(&along_b);
        let ab = along_a.dot(&along_b);
        let aa = along_a.dot(&along_a);
        let bb = along_b.dot(&along_b);

        // Cramer's rule on [[aa, -ab], [ab, -bb]] * [t, s] = [-ra, -rb].
        // Solving both unknowns directly keeps perpendicular lines (ab == 0) finite.
        let denom = aa * bb - ab * ab;
        let t = (ab * rb - ra * bb) / denom;
        let s = (aa * rb - ra * ab) / denom;
        trace!("nearest approach at t = {t}, s = {s}");

        let nearest_to_a = &a.start_point + along_a * t;
        let nearest_to_b = &b.start_point + along_b * s;

        Ok(NearestApproach {
            intersect: tolerance.is_coincident((&nearest_to_a - &nearest_to_b).square_magnitude()),
            nearest_to_a,
            nearest_to_b,
        })
    }
}
