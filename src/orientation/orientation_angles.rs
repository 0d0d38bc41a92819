use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A crystal orientation in Euler-Bunge angles (z-x'-z'' convention, radians).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    /// First rotation φ1 about the sample z-axis.
    pub phi1: f64,
    /// Second rotation Φ about the rotated x-axis.
    pub phi: f64,
    /// Third rotation φ2 about the twice-rotated z-axis.
    pub phi2: f64,
}

impl EulerAngles {
    /// Create an orientation from Bunge angles in radians.
    pub fn new(phi1: f64, phi: f64, phi2: f64) -> Self {
        Self { phi1, phi, phi2 }
    }

    /// Create an orientation from Bunge angles in degrees.
    pub fn from_degrees(phi1: f64, phi: f64, phi2: f64) -> Self {
        Self {
            phi1: deg_to_rad(phi1),
            phi: deg_to_rad(phi),
            phi2: deg_to_rad(phi2),
        }
    }

    /// Return the angles as a [φ1, Φ, φ2] triple in degrees.
    pub fn to_degrees(&self) -> [f64; 3] {
        [
            rad_to_deg(self.phi1),
            rad_to_deg(self.phi),
            rad_to_deg(self.phi2),
        ]
    }

    /// Return the angles as a nalgebra vector (radians).
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.phi1, self.phi, self.phi2)
    }

    /// Build an orientation from a [φ1, Φ, φ2] vector (radians).
    pub fn from_vector(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Sum of absolute per-component differences to another orientation.
    pub fn abs_difference(&self, other: &EulerAngles) -> f64 {
        (self.phi1 - other.phi1).abs()
            + (self.phi - other.phi).abs()
            + (self.phi2 - other.phi2).abs()
    }
}

/// Convert radians to degrees.
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Convert degrees to radians.
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}
