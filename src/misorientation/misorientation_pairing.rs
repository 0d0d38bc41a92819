use log::warn;
use nalgebra::Vector3;
use rand::Rng;
use std::f64::consts::PI;

use crate::misorientation::misorientation_angles::misorientation_angle;
use crate::misorientation::simplex::{minimize, SimplexOptions, SimplexResult};
use crate::orientation::orientation_angles::{rad_to_deg, EulerAngles};
use crate::orientation::orientation_sampling::random_euler;
use crate::symmetries::symmetry_classes::SymmetryClass;

/// Acceptance threshold on the achieved misorientation (a quarter degree).
const PAIRING_TOLERANCE: f64 = 0.25 * PI / 180.0;
/// Restart budget when a search stalls in a poor local minimum.
const MAX_RESTARTS: usize = 8;

/// Searches for an orientation at a prescribed misorientation from a
/// reference orientation.
///
/// The misorientation angle cannot be inverted in closed form, so the search
/// minimizes the squared deviation from the target with a derivative-free
/// simplex method. The result is best-effort: a local search may stall short
/// of the target, in which case the closest orientation found is returned.
/// Callers needing a hard guarantee must check the achieved angle and retry
/// with a different seed or budget.
#[derive(Debug, Clone, Copy)]
pub struct Pairer {
    reference: EulerAngles,
    target: f64,
    class: SymmetryClass,
}

impl Pairer {
    /// Create a solver for a reference orientation, target misorientation
    /// (radians) and crystal class.
    pub fn new(reference: EulerAngles, target: f64, class: SymmetryClass) -> Self {
        Self {
            reference,
            target,
            class,
        }
    }

    /// Squared deviation of a candidate orientation from the target
    /// misorientation.
    pub fn objective(&self, euler: &Vector3<f64>) -> f64 {
        let candidate = EulerAngles::from_vector(*euler);
        let achieved = misorientation_angle(&self.reference, &candidate, self.class);
        (self.target - achieved).powi(2)
    }

    /// Search for a pairing orientation.
    ///
    /// The first search always starts from (1, 1, 1) radians; if it stalls
    /// outside the acceptance threshold, a bounded number of restarts from
    /// orientations drawn off `rng` keeps the result deterministic per seed.
    pub fn solve<R: Rng>(&self, rng: &mut R) -> EulerAngles {
        let options = SimplexOptions::default();
        let mut best = self.search(Vector3::new(1.0, 1.0, 1.0), &options);

        let mut restarts = 0;
        while best.f.sqrt() > PAIRING_TOLERANCE && restarts < MAX_RESTARTS {
            let result = self.search(random_euler(rng).to_vector(), &options);
            if result.f < best.f {
                best = result;
            }
            restarts += 1;
        }

        if best.f.sqrt() > PAIRING_TOLERANCE {
            warn!(
                "pairing search stopped {:.3}° from the {:.2}° target after {} restarts",
                rad_to_deg(best.f.sqrt()),
                rad_to_deg(self.target),
                restarts
            );
        }

        EulerAngles::from_vector(best.x)
    }

    fn search(&self, start: Vector3<f64>, options: &SimplexOptions) -> SimplexResult {
        minimize(|euler| self.objective(euler), start, options)
    }
}

/// Generate a random pair of orientations separated by the target
/// misorientation (radians) under the given crystal class.
///
/// The first orientation is drawn uniformly; the second is solved for. See
/// [`Pairer`] for the best-effort contract.
pub fn generate_euler_pair<R: Rng>(
    rng: &mut R,
    target: f64,
    class: SymmetryClass,
) -> (EulerAngles, EulerAngles) {
    let euler_1 = random_euler(rng);
    let pairer = Pairer::new(euler_1, target, class);
    let euler_2 = pairer.solve(rng);
    (euler_1, euler_2)
}
