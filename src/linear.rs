pub mod intersection;
pub mod line;
pub mod nearest;
