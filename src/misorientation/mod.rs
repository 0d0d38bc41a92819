// Misorientation module: Symmetry-reduced misorientation angles and inverse pairing
// This module relates pairs of crystal orientations under a crystal class

// ======================== MODULE DECLARATIONS ========================
pub mod misorientation_angles;
pub mod misorientation_pairing;
pub mod simplex;

// Test modules
mod _tests_misorientation_angles;

// ======================== MISORIENTATION ANGLES ========================
pub use misorientation_angles::{
    misorientation_angle,  // fn(e1: &EulerAngles, e2: &EulerAngles, class: SymmetryClass) -> f64 - minimal symmetry-reduced angle
    misorientation_angles, // fn(e1: &EulerAngles, e2: &EulerAngles, class: SymmetryClass) -> Vec<f64> - one angle per operator
};

// ======================== INVERSE PAIRING ========================
pub use misorientation_pairing::{
    Pairer,              // struct - best-effort search for an orientation at a prescribed misorientation
    generate_euler_pair, // fn(rng: &mut impl Rng, target: f64, class: SymmetryClass) -> (EulerAngles, EulerAngles)
};

// Pairer impl methods:
//   new(reference: EulerAngles, target: f64, class: SymmetryClass) -> Self - creates solver for a reference orientation
//   objective(&self, euler: &Vector3<f64>) -> f64                  - squared deviation from the target misorientation
//   solve(&self, rng: &mut impl Rng) -> EulerAngles                - runs the simplex search with bounded restarts

// ======================== DERIVATIVE-FREE MINIMIZER ========================
pub use simplex::{
    SimplexOptions, // struct - iteration budget and convergence thresholds
    SimplexResult,  // struct - best vertex, objective value, iterations, convergence flag
    minimize,       // fn(objective: impl FnMut(&Vector3<f64>) -> f64, start: Vector3<f64>, options: &SimplexOptions) -> SimplexResult
};
