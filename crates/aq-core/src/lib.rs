//! aq-core: stable foundation for aquamix.
//!
//! Contains:
//! - units (uom volume type + constructors, mol/L aliases, constants)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{AqError, AqResult};
pub use numeric::*;
pub use units::*;
