use nalgebra::Quaternion;
use rand::Rng;
use std::f64::consts::PI;

use crate::orientation::orientation_angles::EulerAngles;
use crate::orientation::orientation_conversions::quat_to_euler;

/// Draw a quaternion uniformly distributed over the rotation group.
///
/// Uses the subgroup-algorithm construction from three independent U(0,1)
/// draws. Sampling the Euler components independently instead would cluster
/// orientations toward the poles.
pub fn random_quat<R: Rng>(rng: &mut R) -> Quaternion<f64> {
    let u0: f64 = rng.gen();
    let u1: f64 = rng.gen();
    let u2: f64 = rng.gen();

    let x = (1.0 - u0).sqrt() * (2.0 * PI * u1).sin();
    let y = (1.0 - u0).sqrt() * (2.0 * PI * u1).cos();
    let z = u0.sqrt() * (2.0 * PI * u2).sin();
    let w = u0.sqrt() * (2.0 * PI * u2).cos();

    Quaternion::new(w, x, y, z)
}

/// Draw a set of Euler-Bunge angles uniformly distributed over the rotation
/// group, through the quaternion sampler.
pub fn random_euler<R: Rng>(rng: &mut R) -> EulerAngles {
    quat_to_euler(&random_quat(rng))
}
