use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

/// Crystal classes with tabulated proper-rotation symmetry operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymmetryClass {
    Cubic,
    Hexagonal,
    Tetrahedral,
}

impl SymmetryClass {
    /// Number of proper-rotation operators in the class.
    pub fn operator_count(&self) -> usize {
        match self {
            SymmetryClass::Cubic => 24,
            SymmetryClass::Hexagonal => 12,
            SymmetryClass::Tetrahedral => 8,
        }
    }

    /// Lower-case class name for log and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SymmetryClass::Cubic => "cubic",
            SymmetryClass::Hexagonal => "hexagonal",
            SymmetryClass::Tetrahedral => "tetrahedral",
        }
    }
}

/// Return the proper-rotation symmetry operators of a crystal class.
///
/// Every operator is orthonormal with determinant +1, the identity is the
/// first entry, and the set is closed under composition.
pub fn symmetry_matrices(class: SymmetryClass) -> Vec<Matrix3<f64>> {
    match class {
        SymmetryClass::Cubic => cubic_symmetry_matrices(),
        SymmetryClass::Hexagonal => hexagonal_symmetry_matrices(),
        SymmetryClass::Tetrahedral => tetrahedral_symmetry_matrices(),
    }
}

/// The 24 proper rotations of the cubic class.
pub fn cubic_symmetry_matrices() -> Vec<Matrix3<f64>> {
    vec![
        Matrix3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0),
        Matrix3::new(0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0),
        Matrix3::new(0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0),
        Matrix3::new(0.0, -1.0, 0.0, 0.0, 0.0, 1.0, -1.0, 0.0, 0.0),
        Matrix3::new(0.0, -1.0, 0.0, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0),
        Matrix3::new(0.0, 1.0, 0.0, 0.0, 0.0, -1.0, -1.0, 0.0, 0.0),
        Matrix3::new(0.0, 0.0, -1.0, 1.0, 0.0, 0.0, 0.0, -1.0, 0.0),
        Matrix3::new(0.0, 0.0, -1.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0),
        Matrix3::new(0.0, 0.0, 1.0, -1.0, 0.0, 0.0, 0.0, -1.0, 0.0),
        Matrix3::new(-1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0),
        Matrix3::new(-1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0),
        Matrix3::new(1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, -1.0),
        Matrix3::new(0.0, 0.0, -1.0, 0.0, -1.0, 0.0, -1.0, 0.0, 0.0),
        Matrix3::new(0.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, 0.0),
        Matrix3::new(0.0, 0.0, 1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 0.0),
        Matrix3::new(0.0, 0.0, -1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0),
        Matrix3::new(-1.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, -1.0, 0.0),
        Matrix3::new(1.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 1.0, 0.0),
        Matrix3::new(1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, 0.0),
        Matrix3::new(-1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0),
        Matrix3::new(0.0, -1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, -1.0),
        Matrix3::new(0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 1.0),
        Matrix3::new(0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, -1.0),
        Matrix3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0),
    ]
}

/// The 12 proper rotations of the hexagonal class.
pub fn hexagonal_symmetry_matrices() -> Vec<Matrix3<f64>> {
    let a = 3.0_f64.sqrt() / 2.0;
    vec![
        Matrix3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0),
        Matrix3::new(-0.5, a, 0.0, -a, -0.5, 0.0, 0.0, 0.0, 1.0),
        Matrix3::new(-0.5, -a, 0.0, a, -0.5, 0.0, 0.0, 0.0, 1.0),
        Matrix3::new(0.5, a, 0.0, -a, 0.5, 0.0, 0.0, 0.0, 1.0),
        Matrix3::new(-1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0),
        Matrix3::new(0.5, -a, 0.0, a, 0.5, 0.0, 0.0, 0.0, 1.0),
        Matrix3::new(-0.5, -a, 0.0, -a, 0.5, 0.0, 0.0, 0.0, -1.0),
        Matrix3::new(1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, -1.0),
        Matrix3::new(-0.5, a, 0.0, a, 0.5, 0.0, 0.0, 0.0, -1.0),
        Matrix3::new(0.5, a, 0.0, a, -0.5, 0.0, 0.0, 0.0, -1.0),
        Matrix3::new(-1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0),
        Matrix3::new(0.5, -a, 0.0, -a, -0.5, 0.0, 0.0, 0.0, -1.0),
    ]
}

/// The 8 proper rotations of the tetrahedral class.
pub fn tetrahedral_symmetry_matrices() -> Vec<Matrix3<f64>> {
    vec![
        Matrix3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0),
        Matrix3::new(-1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0),
        Matrix3::new(1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, -1.0),
        Matrix3::new(-1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0),
        Matrix3::new(0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 1.0),
        Matrix3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0),
        Matrix3::new(0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, -1.0),
        Matrix3::new(0.0, -1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, -1.0),
    ]
}
