// aq-core/src/units.rs

use uom::si::f64::Volume as UomVolume;

/// Canonical volume type (SI, f64).
pub type Volume = UomVolume;

/// Molar concentration of a solute [mol/L].
///
/// Molarity is not part of uom's standard set in the liter-based form this
/// domain works in, so we use f64 with clear documentation.
pub type Molarity = f64;

/// Ion concentration in solution [mol/L].
///
/// Same representation note as [`Molarity`].
pub type Concentration = f64;

#[inline]
pub fn liters(v: f64) -> Volume {
    use uom::si::volume::liter;
    Volume::new::<liter>(v)
}

#[inline]
pub fn milliliters(v: f64) -> Volume {
    use uom::si::volume::milliliter;
    Volume::new::<milliliter>(v)
}

#[inline]
pub fn volume_l(v: Volume) -> f64 {
    use uom::si::volume::liter;
    v.get::<liter>()
}

pub mod constants {
    use super::Concentration;

    /// Ion contribution of pure water at 25 °C [mol/L], from the
    /// autoionization equilibrium (Kw = 1e-14).
    pub const WATER_AUTOIONIZATION_MOLAR: Concentration = 1e-7;

    /// pH + pOH at 25 °C.
    pub const PH_POH_SUM: f64 = 14.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let v = liters(0.1);
        assert!((volume_l(v) - 0.1).abs() < 1e-12);

        let ml = milliliters(100.0);
        assert!((volume_l(ml) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn autoionization_floor_is_neutral_water() {
        // -log10(1e-7) = 7, the pH of pure water.
        let ph = -constants::WATER_AUTOIONIZATION_MOLAR.log10();
        assert_eq!(ph, 7.0);
    }
}
