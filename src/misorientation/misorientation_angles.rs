use nalgebra::Matrix3;

use crate::orientation::orientation_angles::EulerAngles;
use crate::orientation::orientation_conversions::euler_to_matrix;
use crate::symmetries::symmetry_classes::{symmetry_matrices, SymmetryClass};

/// Rotation angle of every symmetry-equivalent relative rotation between two
/// orientations; one entry per operator of the class, each in [0, π].
pub fn misorientation_angles(
    euler_1: &EulerAngles,
    euler_2: &EulerAngles,
    class: SymmetryClass,
) -> Vec<f64> {
    let om_1 = euler_to_matrix(euler_1);
    let om_2 = euler_to_matrix(euler_2);

    symmetry_matrices(class)
        .iter()
        .map(|sym| relative_rotation_angle(&(sym * om_1), &om_2))
        .collect()
}

/// The crystallographic misorientation between two orientations: the smallest
/// rotation angle over all symmetry-equivalent relative rotations.
///
/// Symmetry-equivalent lattice orientations are physically indistinguishable,
/// so only the minimum carries meaning. Always in [0, π].
pub fn misorientation_angle(
    euler_1: &EulerAngles,
    euler_2: &EulerAngles,
    class: SymmetryClass,
) -> f64 {
    misorientation_angles(euler_1, euler_2, class)
        .into_iter()
        .fold(f64::INFINITY, f64::min)
}

/// Angle of the rotation taking `from` onto `to`, both orthonormal.
fn relative_rotation_angle(from: &Matrix3<f64>, to: &Matrix3<f64>) -> f64 {
    // rotation matrices: the inverse is the transpose
    let relative = from.transpose() * to;
    // trace = 1 + 2 cos θ; rounding can push the cosine past ±1
    let cos_angle = ((relative.trace() - 1.0) / 2.0).clamp(-1.0, 1.0);
    cos_angle.acos()
}
