// Orientation module: Euler-Bunge angles, quaternions, and orientation matrices
// This module provides crystal orientation representations, conversions, and uniform sampling

// ======================== MODULE DECLARATIONS ========================
pub mod orientation_angles;
pub mod orientation_conversions;
pub mod orientation_sampling;

// Test modules
mod _tests_orientation_conversions;

// ======================== ANGLE REPRESENTATION ========================
pub use orientation_angles::{
    EulerAngles, // struct - crystal orientation in Euler-Bunge angles (φ1, Φ, φ2), radians
    deg_to_rad,  // fn(degrees: f64) -> f64 - converts degrees to radians
    rad_to_deg,  // fn(radians: f64) -> f64 - converts radians to degrees
};

// EulerAngles impl methods:
//   new(phi1: f64, phi: f64, phi2: f64) -> Self                    - creates orientation from radians
//   from_degrees(phi1: f64, phi: f64, phi2: f64) -> Self           - creates orientation from degrees
//   to_degrees(&self) -> [f64; 3]                                  - returns [φ1, Φ, φ2] in degrees
//   to_vector(&self) -> Vector3<f64>                               - returns angles as nalgebra vector
//   from_vector(v: Vector3<f64>) -> Self                           - builds orientation from vector
//   abs_difference(&self, other: &EulerAngles) -> f64              - sum of absolute component differences

// ======================== REPRESENTATION CONVERSIONS ========================
pub use orientation_conversions::{
    euler_to_matrix, // fn(euler: &EulerAngles) -> Matrix3<f64> - closed-form Bunge orientation matrix
    euler_to_quat,   // fn(euler: &EulerAngles) -> Quaternion<f64> - closed-form unit quaternion
    matrix_to_euler, // fn(matrix: &Matrix3<f64>) -> EulerAngles - inverse conversion with gimbal handling
    quat_to_euler,   // fn(quat: &Quaternion<f64>) -> EulerAngles - inverse conversion with asin clamping
};

// ======================== UNIFORM ORIENTATION SAMPLING ========================
pub use orientation_sampling::{
    random_euler, // fn(rng: &mut impl Rng) -> EulerAngles - uniform orientation as Euler-Bunge angles
    random_quat,  // fn(rng: &mut impl Rng) -> Quaternion<f64> - uniform quaternion over the rotation group
};
