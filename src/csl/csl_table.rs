use serde::Serialize;
use thiserror::Error;

/// One coincidence site lattice relation: sigma label, reference
/// misorientation and the fixed rotation offset between the two lattices.
///
/// Values are tabulated from the cubic CSL literature
/// (<http://pajarito.materials.cmu.edu/lectures/L14-CSL_Theory_GBE-17Mar16.pdf>).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CslEntry {
    /// Sigma label, e.g. "3" or "13a".
    pub sigma: &'static str,
    /// Reference misorientation angle in degrees.
    pub misorientation_deg: f64,
    /// Euler-Bunge rotation offset in degrees.
    pub euler_offset_deg: [f64; 3],
}

/// Lookup failure for the CSL catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CslLookupError {
    #[error("unknown CSL sigma label '{label}'; valid labels are {valid}")]
    UnknownLabel { label: String, valid: String },
}

/// The tabulated CSL relations, keyed by sigma label.
///
/// 33a and 33b are deliberately absent: their tabulated values are
/// unresolved and awaiting domain-expert review.
pub const CSL_TABLE: [CslEntry; 26] = [
    CslEntry { sigma: "3", misorientation_deg: 60.00, euler_offset_deg: [45.0, 70.53, 45.0] },
    CslEntry { sigma: "5", misorientation_deg: 36.86, euler_offset_deg: [0.0, 90.0, 36.86] },
    CslEntry { sigma: "7", misorientation_deg: 38.21, euler_offset_deg: [26.56, 73.4, 63.44] },
    CslEntry { sigma: "9", misorientation_deg: 38.94, euler_offset_deg: [26.56, 83.62, 26.56] },
    CslEntry { sigma: "11", misorientation_deg: 50.47, euler_offset_deg: [33.68, 79.53, 33.68] },
    CslEntry { sigma: "13a", misorientation_deg: 22.62, euler_offset_deg: [0.0, 90.0, 22.62] },
    CslEntry { sigma: "13b", misorientation_deg: 27.79, euler_offset_deg: [18.43, 76.66, 71.57] },
    CslEntry { sigma: "15", misorientation_deg: 48.19, euler_offset_deg: [19.65, 82.33, 42.27] },
    CslEntry { sigma: "17a", misorientation_deg: 28.07, euler_offset_deg: [0.0, 90.0, 28.07] },
    CslEntry { sigma: "17b", misorientation_deg: 61.90, euler_offset_deg: [45.0, 86.63, 45.0] },
    CslEntry { sigma: "19a", misorientation_deg: 26.53, euler_offset_deg: [18.44, 89.68, 18.44] },
    CslEntry { sigma: "19b", misorientation_deg: 46.80, euler_offset_deg: [33.69, 71.59, 56.31] },
    CslEntry { sigma: "21a", misorientation_deg: 21.78, euler_offset_deg: [14.03, 79.02, 75.97] },
    CslEntry { sigma: "21b", misorientation_deg: 44.41, euler_offset_deg: [22.83, 79.02, 50.91] },
    CslEntry { sigma: "23", misorientation_deg: 40.45, euler_offset_deg: [15.25, 82.51, 52.13] },
    CslEntry { sigma: "25a", misorientation_deg: 16.26, euler_offset_deg: [0.0, 90.0, 16.26] },
    CslEntry { sigma: "25b", misorientation_deg: 51.68, euler_offset_deg: [36.87, 90.0, 53.13] },
    CslEntry { sigma: "27a", misorientation_deg: 31.59, euler_offset_deg: [21.8, 85.75, 21.8] },
    CslEntry { sigma: "27b", misorientation_deg: 35.43, euler_offset_deg: [15.07, 85.75, 31.33] },
    CslEntry { sigma: "29a", misorientation_deg: 43.60, euler_offset_deg: [0.0, 90.0, 43.6] },
    CslEntry { sigma: "29b", misorientation_deg: 46.40, euler_offset_deg: [33.69, 84.06, 56.31] },
    CslEntry { sigma: "31a", misorientation_deg: 17.90, euler_offset_deg: [11.31, 80.72, 78.69] },
    CslEntry { sigma: "31b", misorientation_deg: 52.20, euler_offset_deg: [27.41, 78.84, 43.66] },
    CslEntry { sigma: "33c", misorientation_deg: 59.00, euler_offset_deg: [38.66, 75.97, 38.66] },
    CslEntry { sigma: "35a", misorientation_deg: 34.00, euler_offset_deg: [16.86, 80.13, 60.46] },
    CslEntry { sigma: "35b", misorientation_deg: 43.20, euler_offset_deg: [30.96, 88.36, 59.04] },
];

/// Look up a CSL relation by its sigma label.
pub fn csl_entry(label: &str) -> Result<&'static CslEntry, CslLookupError> {
    CSL_TABLE
        .iter()
        .find(|entry| entry.sigma == label)
        .ok_or_else(|| CslLookupError::UnknownLabel {
            label: label.to_string(),
            valid: csl_labels().join(", "),
        })
}

/// All valid sigma labels, in table order.
pub fn csl_labels() -> Vec<&'static str> {
    CSL_TABLE.iter().map(|entry| entry.sigma).collect()
}
