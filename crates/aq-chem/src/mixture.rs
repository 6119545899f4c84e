//! Mixture calculator: ion concentrations and pH for a two-substance mix.

use crate::substance::Substance;
use aq_core::Real;
use aq_core::units::{Concentration, Volume, volume_l};
use aq_core::units::constants::{PH_POH_SUM, WATER_AUTOIONIZATION_MOLAR};

/// Combined volume of both solutions. Zero is a valid result.
pub fn total_volume(a: &Substance, b: &Substance) -> Volume {
    a.volume() + b.volume()
}

/// Proton concentration [mol/L] after mixing.
///
/// Starts from the autoionization floor of pure water; each acid then adds
/// its molarity diluted across the combined volume. A zero combined volume
/// returns exactly the floor (division guard).
pub fn proton_concentration(a: &Substance, b: &Substance, total: Volume) -> Concentration {
    let total_liters = volume_l(total);
    let mut protons = WATER_AUTOIONIZATION_MOLAR;
    if total_liters == 0.0 {
        return protons;
    }

    if a.is_acid() {
        protons += a.moles() / total_liters;
    }
    if b.is_acid() {
        protons += b.moles() / total_liters;
    }
    protons
}

/// Hydroxide concentration [mol/L] after mixing. Mirror image of
/// [`proton_concentration`], fed by bases.
pub fn hydroxide_concentration(a: &Substance, b: &Substance, total: Volume) -> Concentration {
    let total_liters = volume_l(total);
    let mut hydroxide = WATER_AUTOIONIZATION_MOLAR;
    if total_liters == 0.0 {
        return hydroxide;
    }

    if a.is_base() {
        hydroxide += a.moles() / total_liters;
    }
    if b.is_base() {
        hydroxide += b.moles() / total_liters;
    }
    hydroxide
}

/// pH from the two ion concentrations.
///
/// The dominant ion sets the branch: excess protons give `-log10(net)`,
/// excess hydroxide gives `14 + log10(net)` (the pOH identity rearranged so
/// we never take a logarithm of a near-zero difference). A bit-exact zero
/// net is pH 7; conceptually-neutral inputs usually cancel imperfectly and
/// land vanishingly close to 7 through the signed branches instead, which is
/// accepted behavior.
pub fn ph_from_concentrations(protons: Concentration, hydroxide: Concentration) -> Real {
    let net = protons - hydroxide;
    if net > 0.0 {
        -net.log10()
    } else if net < 0.0 {
        PH_POH_SUM + (-net).log10()
    } else {
        7.0
    }
}

/// Everything the calculator derives for one mix.
#[derive(Debug, Clone, PartialEq)]
pub struct MixtureReport {
    /// Resulting pH.
    pub ph: Real,
    /// Proton concentration [mol/L].
    pub protons: Concentration,
    /// Hydroxide concentration [mol/L].
    pub hydroxide: Concentration,
    /// Combined volume.
    pub total_volume: Volume,
}

impl MixtureReport {
    /// Combined volume in liters.
    pub fn total_volume_liters(&self) -> f64 {
        volume_l(self.total_volume)
    }
}

/// Run the full calculation for two substances.
///
/// Total over valid substances; the stable entry point for callers that want
/// one report rather than the individual steps.
pub fn compute_mixture(a: &Substance, b: &Substance) -> MixtureReport {
    let total = total_volume(a, b);
    let protons = proton_concentration(a, b, total);
    let hydroxide = hydroxide_concentration(a, b, total);
    let ph = ph_from_concentrations(protons, hydroxide);

    MixtureReport {
        ph,
        protons,
        hydroxide,
        total_volume: total,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::species::Species;
    use aq_core::units::liters;
    use aq_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    fn arb_substance() -> impl Strategy<Value = Substance> {
        let species = prop::sample::select(Species::ALL.to_vec());
        (species, 0.0_f64..10.0, 0.0_f64..10.0).prop_map(|(species, molarity, volume)| {
            Substance::new(species, molarity, liters(volume)).expect("non-negative quantities")
        })
    }

    proptest! {
        #[test]
        fn mixing_is_symmetric((a, b) in (arb_substance(), arb_substance())) {
            let tol = Tolerances::default();

            let total_ab = total_volume(&a, &b);
            let total_ba = total_volume(&b, &a);
            prop_assert!(nearly_equal(volume_l(total_ab), volume_l(total_ba), tol));

            prop_assert!(nearly_equal(
                proton_concentration(&a, &b, total_ab),
                proton_concentration(&b, &a, total_ba),
                tol
            ));
            prop_assert!(nearly_equal(
                hydroxide_concentration(&a, &b, total_ab),
                hydroxide_concentration(&b, &a, total_ba),
                tol
            ));
        }

        #[test]
        fn concentrations_never_drop_below_the_floor((a, b) in (arb_substance(), arb_substance())) {
            let total = total_volume(&a, &b);
            prop_assert!(proton_concentration(&a, &b, total) >= WATER_AUTOIONIZATION_MOLAR);
            prop_assert!(hydroxide_concentration(&a, &b, total) >= WATER_AUTOIONIZATION_MOLAR);
        }
    }
}
