//! N-dimensional vectors and lines.
//!
//! [`Vector`] is a zero-padded numeric tuple of any length. [`Line`] is a pair of
//! vectors and answers intersection and nearest-approach queries between lines
//! living in spaces of different dimension.

pub mod error;
pub mod linear;
pub mod primitives_relation;
pub mod tolerance;
pub mod vector;

pub use error::{GeometryError, Result};
pub use linear::{intersection::LineIntersection, line::Line, nearest::NearestApproach};
pub use primitives_relation::{
    linear_linear::LineRelation, linear_point::PointOnLine, relation::Relation,
};
pub use tolerance::{Tolerance, COINCIDENCE_EPS, DIRECTION_EPS};
pub use vector::Vector;
