//! Validated substance values.

use crate::error::{ChemError, ChemResult};
use crate::species::{Category, Species};
use aq_core::units::{Molarity, Volume, liters, volume_l};

/// One solute in solution: species, molarity, volume, and the acid/base
/// character derived from the species.
///
/// Values are immutable once constructed; a calculation builds two fresh
/// substances, runs, and discards them. Nothing is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Substance {
    species: Species,
    molarity: Molarity,
    volume: Volume,
    category: Category,
}

impl Substance {
    /// Build a substance from species, molarity [mol/L], and volume.
    ///
    /// Fails with [`ChemError::InvalidQuantity`] when molarity or volume is
    /// negative or non-finite. The guard applies uniformly, sentinel
    /// included; [`Substance::none`] carries zeros so it always passes.
    pub fn new(species: Species, molarity: Molarity, volume: Volume) -> ChemResult<Substance> {
        let volume_liters = volume_l(volume);
        if !molarity.is_finite() || molarity < 0.0 {
            return Err(ChemError::InvalidQuantity {
                what: "molarity",
                value: molarity,
            });
        }
        if !volume_liters.is_finite() || volume_liters < 0.0 {
            return Err(ChemError::InvalidQuantity {
                what: "volume",
                value: volume_liters,
            });
        }

        Ok(Substance {
            species,
            molarity,
            volume,
            category: species.category(),
        })
    }

    /// The absent-substance sentinel: no species, zero molarity, zero volume.
    pub fn none() -> Substance {
        Substance {
            species: Species::NoSubstance,
            molarity: 0.0,
            volume: liters(0.0),
            category: Category::Neutral,
        }
    }

    /// Pure water of the given volume. Molarity is forced to zero; water is
    /// the molarity-free diluent.
    pub fn water(volume: Volume) -> ChemResult<Substance> {
        Substance::new(Species::Water, 0.0, volume)
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Molarity [mol/L].
    pub fn molarity(&self) -> Molarity {
        self.molarity
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Volume in liters.
    pub fn volume_liters(&self) -> f64 {
        volume_l(self.volume)
    }

    /// Moles of solute carried: molarity × volume.
    pub fn moles(&self) -> f64 {
        self.molarity * self.volume_liters()
    }

    pub fn is_acid(&self) -> bool {
        self.category == Category::Acid
    }

    pub fn is_base(&self) -> bool {
        self.category == Category::Base
    }

    /// Whether this slot actually holds a solution: not the sentinel, and
    /// carrying a nonzero volume.
    pub fn is_present(&self) -> bool {
        self.species != Species::NoSubstance && self.volume_liters() > 0.0
    }
}
