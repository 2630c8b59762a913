use crate::{linear::line::Line, tolerance::Tolerance, vector::Vector};

use super::relation::Relation;

#[derive(PartialEq, Debug)]
pub enum PointOnLine {
    /// Coincides with one of the endpoints.
    End,
    /// Strictly between the endpoints.
    On,
    Outside,
}

impl Relation<Vector> for Line {
    type Relate = PointOnLine;

    fn relate(&self, to: &Vector) -> Self::Relate {
        let tolerance = Tolerance::default();
        let at_end = |end: &Vector| tolerance.is_coincident((to - end).square_magnitude());

        if at_end(&self.start_point) || at_end(&self.end_point) {
            PointOnLine::End
        } else if self.contains_point_with(to, &tolerance) {
            PointOnLine::On
        } else {
            PointOnLine::Outside
        }
    }
}
