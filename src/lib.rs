//! Crystallographic orientation and misorientation library
//!
//! This library provides orientation representations (Euler-Bunge angles,
//! quaternions, orientation matrices), uniform orientation sampling,
//! symmetry-reduced misorientation calculations, and coincidence site lattice
//! pair generation for polycrystalline microstructure generation.

pub mod config;
pub mod csl;
pub mod misorientation;
pub mod orientation;
pub mod symmetries;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
