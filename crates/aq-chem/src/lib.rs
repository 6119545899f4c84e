//! aq-chem: strong acid/base mixing chemistry for aquamix.
//!
//! Provides:
//! - Chemical species definitions (strong acids, strong bases, neutral solutes)
//! - Validated `Substance` values (species + molarity + volume)
//! - Mixture calculator: ion concentrations and pH for a two-substance mix
//! - Result classification (status message, display color category)
//! - Neutralization reaction equations (acid + base -> salt + water)
//!
//! # Model
//!
//! Every solute is assumed to fully dissociate (strong acid/base model), so a
//! substance's nominal molarity contributes directly to the proton or
//! hydroxide concentration after volume-weighted dilution across the combined
//! volume. There are no weak species, polyprotic species, buffers, or
//! activity corrections.
//!
//! # Example
//!
//! ```
//! use aq_chem::{Species, Substance, compute_mixture};
//! use aq_core::units::liters;
//!
//! let acid = Substance::new(Species::HCl, 0.1, liters(0.1)).unwrap();
//! let report = compute_mixture(&acid, &Substance::none());
//! assert!((report.ph - 1.0).abs() < 1e-5);
//! ```

pub mod catalog;
pub mod classify;
pub mod error;
pub mod mixture;
pub mod reaction;
pub mod species;
pub mod substance;

// Re-exports for ergonomics
pub use catalog::{SpeciesCatalogEntry, catalog, catalog_for_category, filter_catalog};
pub use classify::{ColorCategory, Severity, StatusReport, color_category, describe_status};
pub use error::{ChemError, ChemResult};
pub use mixture::{
    MixtureReport, compute_mixture, hydroxide_concentration, ph_from_concentrations,
    proton_concentration, total_volume,
};
pub use reaction::{ReactionOutcome, describe_reaction, format_formula};
pub use species::{Category, Species, classify_formula};
pub use substance::Substance;
