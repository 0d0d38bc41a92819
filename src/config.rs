// Constants

// Tolerances
pub const GIMBAL_TOLERANCE: f64 = 1e-9; // Degenerate-branch detection in matrix -> Euler conversion
pub const ORTHONORMALITY_TOLERANCE: f64 = 1e-9; // Unit-norm and orthonormality checks
pub const CONVERSION_TOLERANCE: f64 = 1e-5; // Agreement between round-tripped representations
