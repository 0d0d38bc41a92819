#[cfg(test)]
mod _tests_orientation_conversions {
    use super::super::orientation_angles::EulerAngles;
    use super::super::orientation_conversions::*;
    use super::super::orientation_sampling::random_euler;
    use crate::config::{CONVERSION_TOLERANCE, ORTHONORMALITY_TOLERANCE};
    use nalgebra::{Matrix3, Quaternion};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::f64::consts::{FRAC_PI_2, PI};

    // Helper to compare matrices entrywise
    fn assert_matrix_close(a: &Matrix3<f64>, b: &Matrix3<f64>, tol: f64) {
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (a[(i, j)] - b[(i, j)]).abs() < tol,
                    "matrices differ at ({}, {}): {} vs {}",
                    i,
                    j,
                    a[(i, j)],
                    b[(i, j)]
                );
            }
        }
    }

    // ==================== Round-Trip Properties ====================

    #[test]
    fn test_quaternion_round_trip() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..12 {
            let euler = random_euler(&mut rng);
            let recovered = quat_to_euler(&euler_to_quat(&euler));
            assert!(
                euler.abs_difference(&recovered) < CONVERSION_TOLERANCE,
                "round trip drifted: {:?} vs {:?}",
                euler,
                recovered
            );
        }
    }

    #[test]
    fn test_matrix_round_trip_idempotent() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..12 {
            let euler = random_euler(&mut rng);
            let once = matrix_to_euler(&euler_to_matrix(&euler));
            let twice = matrix_to_euler(&euler_to_matrix(&once));
            assert!(
                once.abs_difference(&twice) < CONVERSION_TOLERANCE,
                "second application moved the angles: {:?} vs {:?}",
                once,
                twice
            );
        }
    }

    #[test]
    fn test_matrix_round_trip_preserves_rotation() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        for _ in 0..12 {
            let euler = random_euler(&mut rng);
            let matrix = euler_to_matrix(&euler);
            let rebuilt = euler_to_matrix(&matrix_to_euler(&matrix));
            assert_matrix_close(&matrix, &rebuilt, 1e-9);
        }
    }

    #[test]
    fn test_matrix_to_euler_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        for _ in 0..50 {
            let euler = matrix_to_euler(&euler_to_matrix(&random_euler(&mut rng)));
            assert!((0.0..2.0 * PI).contains(&euler.phi1));
            assert!((0.0..=PI).contains(&euler.phi));
            assert!((0.0..2.0 * PI).contains(&euler.phi2));
        }
    }

    // ==================== Orthonormality ====================

    #[test]
    fn test_orientation_matrix_is_orthonormal() {
        let mut rng = ChaCha8Rng::seed_from_u64(19);
        for _ in 0..10 {
            let matrix = euler_to_matrix(&random_euler(&mut rng));
            assert_matrix_close(
                &(matrix.transpose() * matrix),
                &Matrix3::identity(),
                ORTHONORMALITY_TOLERANCE,
            );
            assert!((matrix.determinant() - 1.0).abs() < ORTHONORMALITY_TOLERANCE);
        }
    }

    #[test]
    fn test_quaternion_is_unit_norm() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        for _ in 0..10 {
            let quat = euler_to_quat(&random_euler(&mut rng));
            assert!((quat.norm() - 1.0).abs() < ORTHONORMALITY_TOLERANCE);
        }
    }

    // ==================== Gimbal Configurations ====================

    #[test]
    fn test_identity_matrix_maps_to_zero_angles() {
        let euler = matrix_to_euler(&Matrix3::identity());
        assert!(euler.phi1.abs() < 1e-12);
        assert!(euler.phi.abs() < 1e-12);
        assert!(euler.phi2.abs() < 1e-12);
    }

    #[test]
    fn test_gimbal_phi_zero_folds_into_phi1() {
        // With Φ = 0 only φ1 + φ2 is determined
        let euler = EulerAngles::new(0.7, 0.0, 0.5);
        let recovered = matrix_to_euler(&euler_to_matrix(&euler));
        assert!((recovered.phi1 - 1.2).abs() < 1e-12);
        assert!(recovered.phi.abs() < 1e-12);
        assert_eq!(recovered.phi2, 0.0);
    }

    #[test]
    fn test_gimbal_phi_pi_keeps_rotation() {
        let euler = EulerAngles::new(0.7, PI, 0.5);
        let matrix = euler_to_matrix(&euler);
        let recovered = matrix_to_euler(&matrix);
        assert!((recovered.phi - PI).abs() < 1e-9);
        assert_eq!(recovered.phi2, 0.0);
        // The folded angles must describe the same rotation
        assert_matrix_close(&matrix, &euler_to_matrix(&recovered), 1e-9);
    }

    // ==================== Clamping at the Trig Domain Edges ====================

    #[test]
    fn test_acos_argument_clamped() {
        // Rounding can leave M[2][2] marginally above 1
        let mut matrix = Matrix3::identity();
        matrix[(2, 2)] = 1.0 + 1e-12;
        let euler = matrix_to_euler(&matrix);
        assert!(euler.phi1.is_finite());
        assert!(euler.phi2.is_finite());
        assert_eq!(euler.phi, 0.0);
    }

    #[test]
    fn test_asin_argument_clamped() {
        // A marginally denormalized quaternion pushes the asin argument past 1
        let quat = euler_to_quat(&EulerAngles::new(0.3, FRAC_PI_2, 0.8));
        let scale = 1.0 + 1e-9;
        let inflated = Quaternion::new(
            quat.w * scale,
            quat.i * scale,
            quat.j * scale,
            quat.k * scale,
        );
        let euler = quat_to_euler(&inflated);
        assert!(euler.phi.is_finite());
        assert!((euler.phi - FRAC_PI_2).abs() < 1e-4);
    }
}
