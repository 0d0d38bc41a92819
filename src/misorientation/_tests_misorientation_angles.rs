#[cfg(test)]
mod _tests_misorientation_angles {
    use super::super::misorientation_angles::*;
    use crate::config::CONVERSION_TOLERANCE;
    use crate::orientation::orientation_angles::{deg_to_rad, EulerAngles};
    use crate::orientation::orientation_conversions::{euler_to_matrix, matrix_to_euler};
    use crate::orientation::orientation_sampling::random_euler;
    use crate::symmetries::symmetry_classes::{symmetry_matrices, SymmetryClass};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::f64::consts::PI;

    const ALL_CLASSES: [SymmetryClass; 3] = [
        SymmetryClass::Cubic,
        SymmetryClass::Hexagonal,
        SymmetryClass::Tetrahedral,
    ];

    #[test]
    fn test_one_angle_per_operator() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let euler_1 = random_euler(&mut rng);
        let euler_2 = random_euler(&mut rng);
        for class in ALL_CLASSES {
            let angles = misorientation_angles(&euler_1, &euler_2, class);
            assert_eq!(angles.len(), class.operator_count());
        }
    }

    #[test]
    fn test_angles_stay_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(29);
        for class in ALL_CLASSES {
            for _ in 0..10 {
                let euler_1 = random_euler(&mut rng);
                let euler_2 = random_euler(&mut rng);
                let angle = misorientation_angle(&euler_1, &euler_2, class);
                assert!(
                    (0.0..=PI).contains(&angle),
                    "{} misorientation out of bounds: {}",
                    class.as_str(),
                    angle
                );
            }
        }
    }

    #[test]
    fn test_identical_orientations_have_zero_misorientation() {
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        for class in ALL_CLASSES {
            let euler = random_euler(&mut rng);
            assert!(misorientation_angle(&euler, &euler, class) < 1e-6);
        }
    }

    #[test]
    fn test_known_rotation_about_z() {
        // A 30° rotation about z is its own cubic disorientation
        let euler_1 = EulerAngles::new(0.0, 0.0, 0.0);
        let euler_2 = EulerAngles::new(deg_to_rad(30.0), 0.0, 0.0);
        let angle = misorientation_angle(&euler_1, &euler_2, SymmetryClass::Cubic);
        assert!((angle - deg_to_rad(30.0)).abs() < 1e-9);
    }

    #[test]
    fn test_invariant_under_symmetry_of_first_argument() {
        let mut rng = ChaCha8Rng::seed_from_u64(37);
        for class in ALL_CLASSES {
            let euler_1 = random_euler(&mut rng);
            let euler_2 = random_euler(&mut rng);
            let baseline = misorientation_angle(&euler_1, &euler_2, class);

            for sym in &symmetry_matrices(class) {
                let rotated = matrix_to_euler(&(sym * euler_to_matrix(&euler_1)));
                let angle = misorientation_angle(&rotated, &euler_2, class);
                assert!(
                    (angle - baseline).abs() < CONVERSION_TOLERANCE,
                    "{} operator changed the misorientation: {} vs {}",
                    class.as_str(),
                    angle,
                    baseline
                );
            }
        }
    }
}
