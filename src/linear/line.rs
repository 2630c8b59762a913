use core::fmt;

use crate::{tolerance::Tolerance, vector::Vector};

/// Directed segment between two points, parameterised as
/// `start_point + t * along()`.
///
/// Endpoints may have different dimensions; missing components read as zero.
/// A zero-length line is accepted as is.
#[derive(Clone, PartialEq)]
pub struct Line {
    pub start_point: Vector,
    pub end_point: Vector,
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.start_point, self.end_point)
    }
}

impl Line {
    pub fn new(start_point: Vector, end_point: Vector) -> Self {
        Self {
            start_point,
            end_point,
        }
    }

    /// Unit-length line from `point` towards `direction`.
    pub fn point_direction(point: Vector, direction: Vector) -> Self {
        Self::point_direction_scaled(point, direction, 1.0)
    }

    pub fn point_direction_scaled(point: Vector, direction: Vector, distance: f64) -> Self {
        let end_point = &point + direction.normalized() * distance;
        Self::new(point, end_point)
    }

    /// Planar line satisfying `a*x + b*y + c = 0`.
    ///
    /// With both `a` and `b` zero there is no such line and the endpoints are
    /// not finite.
    pub fn standard_form(a: f64, b: f64, c: f64) -> Self {
        if b == 0.0 {
            Self::new(Vector::from([-c / a, 0.0]), Vector::from([-c / a, 1.0]))
        } else if a == 0.0 {
            Self::new(Vector::from([0.0, -c / b]), Vector::from([1.0, -c / b]))
        } else {
            Self::new(Vector::from([0.0, -c / b]), Vector::from([1.0, (-c - a) / b]))
        }
    }

    pub fn along(&self) -> Vector {
        &self.end_point - &self.start_point
    }

    pub fn dimension(&self) -> usize {
        self.start_point
            .dimension()
            .max(self.end_point.dimension())
    }

    pub fn point_at(&self, t: f64) -> Vector {
        &self.start_point + self.along() * t
    }

    /// Closest point to `point` on the infinite line. Not clamped to the segment.
    pub fn nearest_to_point(&self, point: &Vector) -> Vector {
        &self.start_point + (point - &self.start_point).projection(&self.along())
    }

    /// Whether `point` lies on the segment between the two endpoints.
    pub fn contains_point(&self, point: &Vector) -> bool {
        self.contains_point_with(point, &Tolerance::default())
    }

    pub fn contains_point_with(&self, point: &Vector, tolerance: &Tolerance) -> bool {
        let along = self.along();
        let start_delta = point - &self.start_point;
        let end_delta = point - &self.end_point;

        start_delta.dot(&along) >= 0.0
            && end_delta.dot(&along) <= 0.0
            && tolerance.is_coincident(start_delta.rejection(&along).square_magnitude())
    }

    /// Whether `point` lies anywhere on the infinite extension of this line.
    pub(crate) fn passes_through(&self, point: &Vector, tolerance: &Tolerance) -> bool {
        let delta = point - &self.start_point;
        tolerance.is_coincident(delta.rejection(&self.along()).square_magnitude())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{tolerance::Tolerance, vector::Vector};

    use super::Line;

    #[test]
    fn along_and_dimension() {
        let line = Line::new(Vector::from([1.0, 1.0]), Vector::from([2.0, 3.0, 4.0]));
        assert_eq!(line.along(), Vector::from([1.0, 2.0, 4.0]));
        assert_eq!(line.dimension(), 3);
        assert_eq!(line.point_at(0.0), line.start_point);
        assert_eq!(line.point_at(1.0), line.end_point);
    }

    #[test]
    fn point_direction_is_unit_length() {
        let line =
            Line::point_direction(Vector::from([1.0, 2.0, 3.0]), Vector::from([0.0, 3.0, 4.0]));
        assert_abs_diff_eq!(line.along(), Vector::from([0.0, 0.6, 0.8]), epsilon = 1e-12);

        let line = Line::point_direction_scaled(Vector::from([1.0]), Vector::from([0.0, 2.0]), 5.0);
        assert_abs_diff_eq!(line.end_point, Vector::from([1.0, 5.0]), epsilon = 1e-12);
    }

    #[test]
    fn standard_form_branches() {
        let vertical = Line::standard_form(1.0, 0.0, -2.0);
        assert_eq!(vertical.start_point, Vector::from([2.0, 0.0]));
        assert_eq!(vertical.end_point, Vector::from([2.0, 1.0]));

        let horizontal = Line::standard_form(0.0, 2.0, -4.0);
        assert_eq!(horizontal.start_point, Vector::from([0.0, 2.0]));
        assert_eq!(horizontal.end_point, Vector::from([1.0, 2.0]));

        let (a, b, c) = (2.0, -1.0, 3.0);
        let slanted = Line::standard_form(a, b, c);
        for p in [&slanted.start_point, &slanted.end_point] {
            assert_abs_diff_eq!(a * p[0] + b * p[1] + c, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn nearest_to_point_is_not_clamped() {
        let line = Line::new(Vector::from([0.0, 0.0]), Vector::from([1.0, 0.0]));
        assert_abs_diff_eq!(
            line.nearest_to_point(&Vector::from([0.5, 3.0])),
            Vector::from([0.5, 0.0]),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            line.nearest_to_point(&Vector::from([-4.0, -1.0, 2.0])),
            Vector::from([-4.0, 0.0, 0.0]),
            epsilon = 1e-12
        );
    }

    #[test]
    fn contains_point_is_segment_containment() {
        let line = Line::new(Vector::from([1.0, 1.0, 1.0]), Vector::from([3.0, 5.0, 7.0]));
        assert!(line.contains_point(&Vector::from([2.0, 3.0, 4.0])));
        assert!(line.contains_point(&line.start_point));
        assert!(line.contains_point(&line.end_point));
        assert!(!line.contains_point(&Vector::from([4.0, 7.0, 10.0])));
        assert!(!line.contains_point(&Vector::from([0.0, -1.0, -2.0])));
        assert!(!line.contains_point(&Vector::from([2.0, 3.0, 4.1])));
    }

    #[test]
    fn looser_tolerance_accepts_nearby_points() {
        let line = Line::new(Vector::from([0.0, 0.0]), Vector::from([1.0, 0.0]));
        let near = Vector::from([0.5, 1e-4]);
        assert!(!line.contains_point(&near));
        assert!(line.contains_point_with(&near, &Tolerance::default().coincidence(1e-6)));
    }

    #[test]
    fn passes_through_ignores_segment_bounds() {
        let line = Line::new(Vector::from([0.0, 0.0]), Vector::from([1.0, 1.0]));
        let beyond = Vector::from([-3.0, -3.0]);
        assert!(!line.contains_point(&beyond));
        assert!(line.passes_through(&beyond, &Tolerance::default()));
        assert!(!line.passes_through(&Vector::from([1.0, 0.0]), &Tolerance::default()));
    }
}
