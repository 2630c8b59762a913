use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeometryError>;

/// Degenerate conditions raised by vector and line queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Directions are parallel and the lines are distinct.
    #[error("lines are parallel")]
    ParallelLines,

    /// Directions are parallel and the lines coincide.
    #[error("lines are the same infinite line")]
    SameLine,

    /// No pair of coordinate axes separates the two directions.
    #[error("no non-degenerate axis pair among {dimension} dimensions")]
    DimensionSearchExhausted { dimension: usize },

    #[error("invalid component index {0}")]
    InvalidIndex(isize),
}
