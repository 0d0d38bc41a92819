// Symmetries module: Proper-rotation point group operators per crystal class
// This module provides the static symmetry operator tables used to reduce misorientations

// ======================== MODULE DECLARATIONS ========================
pub mod symmetry_classes;


// ======================== CRYSTAL CLASSES & OPERATOR TABLES ========================
pub use symmetry_classes::{
    SymmetryClass,     // enum - crystal classes with tabulated operators (Cubic, Hexagonal, Tetrahedral)
    symmetry_matrices, // fn(class: SymmetryClass) -> Vec<Matrix3<f64>> - proper-rotation operators of a class

    // === PER-CLASS OPERATOR TABLES ===
    cubic_symmetry_matrices,       // fn() -> Vec<Matrix3<f64>> - the 24 cubic proper rotations
    hexagonal_symmetry_matrices,   // fn() -> Vec<Matrix3<f64>> - the 12 hexagonal proper rotations
    tetrahedral_symmetry_matrices, // fn() -> Vec<Matrix3<f64>> - the 8 tetrahedral proper rotations
};

// SymmetryClass impl methods:
//   operator_count(&self) -> usize                                 - number of operators in the class
//   as_str(&self) -> &'static str                                  - lower-case name for log/CLI output
