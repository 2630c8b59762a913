pub mod linear_linear;
pub mod linear_point;
pub mod relation;
