// CSL module: Coincidence site lattice catalogue and exact pair generation
// This module provides the tabulated special grain-boundary relations used to seed twins

// ======================== MODULE DECLARATIONS ========================
pub mod csl_pairing;
pub mod csl_table;


// ======================== STATIC CATALOGUE ========================
pub use csl_table::{
    CslEntry,       // struct - sigma label, reference misorientation (deg), Euler rotation offset (deg)
    CslLookupError, // enum - lookup failure enumerating the valid labels
    CSL_TABLE,      // const - the 26 tabulated CSL relations
    csl_entry,      // fn(label: &str) -> Result<&'static CslEntry, CslLookupError> - lookup by sigma label
    csl_labels,     // fn() -> Vec<&'static str> - all valid sigma labels in table order
};

// ======================== EXACT PAIR GENERATION ========================
pub use csl_pairing::csl_euler_angles;
// fn(rng: &mut impl Rng, label: &str, euler_1: Option<EulerAngles>)
//     -> Result<(EulerAngles, EulerAngles), CslLookupError>
// - generates an orientation pair related by the tabulated offset (exact matrix composition)
