use nalgebra::{Matrix3, Quaternion};
use std::f64::consts::PI;

use crate::config::GIMBAL_TOLERANCE;
use crate::orientation::orientation_angles::EulerAngles;

/// Build the orientation matrix of a set of Euler-Bunge angles.
///
/// NaN or infinite inputs propagate into the result per IEEE-754.
pub fn euler_to_matrix(euler: &EulerAngles) -> Matrix3<f64> {
    let (s1, c1) = euler.phi1.sin_cos();
    let (s, c) = euler.phi.sin_cos();
    let (s2, c2) = euler.phi2.sin_cos();

    Matrix3::new(
        c1 * c2 - s1 * s2 * c,
        s1 * c2 + c1 * s2 * c,
        s2 * s,
        -c1 * s2 - s1 * c2 * c,
        -s1 * s2 + c1 * c2 * c,
        c2 * s,
        s1 * s,
        -c1 * s,
        c,
    )
}

/// Recover Euler-Bunge angles from an orientation matrix.
///
/// Returns φ1, φ2 ∈ [0, 2π) and Φ ∈ [0, π]. The two gimbal configurations
/// (Φ ≈ 0 and Φ ≈ π) leave only φ1 ± φ2 determined; φ2 is set to zero and
/// the combined rotation folded into φ1.
pub fn matrix_to_euler(matrix: &Matrix3<f64>) -> EulerAngles {
    // M[2][2] = cos Φ; rounding can push it past ±1
    let phi = matrix[(2, 2)].clamp(-1.0, 1.0).acos();

    let (mut phi1, mut phi2);
    if phi.abs() < GIMBAL_TOLERANCE {
        phi1 = (-matrix[(1, 0)]).atan2(matrix[(0, 0)]);
        phi2 = 0.0;
    } else if (PI - phi).abs() < GIMBAL_TOLERANCE {
        phi1 = matrix[(1, 0)].atan2(matrix[(0, 0)]);
        phi2 = 0.0;
    } else {
        phi1 = matrix[(2, 0)].atan2(-matrix[(2, 1)]);
        phi2 = matrix[(0, 2)].atan2(matrix[(1, 2)]);
    }

    if phi1 < 0.0 {
        phi1 += 2.0 * PI;
    }
    if phi2 < 0.0 {
        phi2 += 2.0 * PI;
    }

    EulerAngles::new(phi1, phi, phi2)
}

/// Convert a set of Euler-Bunge angles into a unit quaternion.
pub fn euler_to_quat(euler: &EulerAngles) -> Quaternion<f64> {
    let (sy, cy) = (euler.phi2 * 0.5).sin_cos();
    let (sp, cp) = (euler.phi * 0.5).sin_cos();
    let (sr, cr) = (euler.phi1 * 0.5).sin_cos();

    let x = sr * cp * cy - cr * sp * sy;
    let y = cr * sp * cy + sr * cp * sy;
    let z = cr * cp * sy - sr * sp * cy;
    let w = cr * cp * cy + sr * sp * sy;

    Quaternion::new(w, x, y, z)
}

/// Convert a unit quaternion into a set of Euler-Bunge angles.
pub fn quat_to_euler(quat: &Quaternion<f64>) -> EulerAngles {
    let (x, y, z, w) = (quat.i, quat.j, quat.k, quat.w);

    let phi1 = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));
    // the asin argument can overshoot ±1 by rounding for Φ near ±π/2
    let phi = (2.0 * (w * y - z * x)).clamp(-1.0, 1.0).asin();
    let phi2 = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));

    EulerAngles::new(phi1, phi, phi2)
}
