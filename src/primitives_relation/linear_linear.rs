use crate::{
    error::{GeometryError, Result},
    linear::{line::Line, nearest::NearestApproach},
    vector::Vector,
};

use super::relation::Relation;

#[derive(PartialEq, Debug)]
pub enum LineRelation {
    Crossing(Vector),
    Skew {
        nearest_to_a: Vector,
        nearest_to_b: Vector,
    },
    Parallel,
    Same,
}

/// Parallel and coincident pairs become variants; anything else a line query
/// can raise is passed through.
impl Relation<Line> for Line {
    type Relate = Result<LineRelation>;

    fn relate(&self, to: &Line) -> Self::Relate {
        match Line::nearest_point(self, to) {
            Ok(NearestApproach {
                nearest_to_a,
                intersect: true,
                ..
            }) => Ok(LineRelation::Crossing(nearest_to_a)),
            Ok(NearestApproach {
                nearest_to_a,
                nearest_to_b,
                ..
            }) => Ok(LineRelation::Skew {
                nearest_to_a,
                nearest_to_b,
            }),
            Err(GeometryError::SameLine) => Ok(LineRelation::Same),
            Err(GeometryError::ParallelLines) => Ok(LineRelation::Parallel),
            Err(err @ GeometryError::DimensionSearchExhausted { .. }) => Err(err),
            Err(err @ GeometryError::InvalidIndex(_)) => Err(err),
        }
    }
}
