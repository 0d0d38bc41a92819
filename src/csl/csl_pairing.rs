use rand::Rng;

use crate::csl::csl_table::{csl_entry, CslLookupError};
use crate::orientation::orientation_angles::EulerAngles;
use crate::orientation::orientation_conversions::{euler_to_matrix, matrix_to_euler};
use crate::orientation::orientation_sampling::random_euler;

/// Generate a pair of orientations related by the tabulated CSL rotation
/// offset for `label`.
///
/// The first orientation is caller-supplied or drawn uniformly off `rng`; the
/// second is exact matrix composition with the offset, no optimization
/// involved. Unknown labels fail with [`CslLookupError`].
pub fn csl_euler_angles<R: Rng>(
    rng: &mut R,
    label: &str,
    euler_1: Option<EulerAngles>,
) -> Result<(EulerAngles, EulerAngles), CslLookupError> {
    let entry = csl_entry(label)?;
    let euler_1 = euler_1.unwrap_or_else(|| random_euler(rng));

    let [phi1, phi, phi2] = entry.euler_offset_deg;
    let offset = euler_to_matrix(&EulerAngles::from_degrees(phi1, phi, phi2));
    let euler_2 = matrix_to_euler(&(offset * euler_to_matrix(&euler_1)));

    Ok((euler_1, euler_2))
}
