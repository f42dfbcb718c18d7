//! Linear algebra and input validation helpers.

mod matrix;

pub use matrix::{
    design_matrix, ensure_finite, ensure_same_length, normal_equations, solve_linear_system,
};
