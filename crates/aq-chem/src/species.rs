//! Chemical species definitions.

/// Acid/base character of a species in solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Strong acid: fully dissociates, contributes protons.
    Acid,
    /// Strong base: fully dissociates, contributes hydroxide.
    Base,
    /// Neutral solute (or no solute at all): contributes neither.
    Neutral,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Acid => "acid",
            Category::Base => "base",
            Category::Neutral => "neutral",
        }
    }
}

/// Chemical species supported by the mixing calculator.
///
/// A fixed closed set: six strong acids, five strong bases, and the neutral
/// entries (water, two salts, and the "no substance" sentinel used when only
/// one solution is being considered).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Hydrochloric acid (HCl)
    HCl,
    /// Hydrobromic acid (HBr)
    HBr,
    /// Hydroiodic acid (HI)
    HI,
    /// Nitric acid (HNO₃)
    HNO3,
    /// Chloric acid (HClO₃)
    HClO3,
    /// Perchloric acid (HClO₄)
    HClO4,
    /// Lithium hydroxide (LiOH)
    LiOH,
    /// Sodium hydroxide (NaOH)
    NaOH,
    /// Potassium hydroxide (KOH)
    KOH,
    /// Rubidium hydroxide (RbOH)
    RbOH,
    /// Cesium hydroxide (CsOH)
    CsOH,
    /// Water (H₂O), the molarity-free diluent
    Water,
    /// Sodium chloride (NaCl)
    NaCl,
    /// Potassium chloride (KCl)
    KCl,
    /// Sentinel for an absent second solution
    NoSubstance,
}

impl Species {
    pub const ALL: [Species; 15] = [
        Species::HCl,
        Species::HBr,
        Species::HI,
        Species::HNO3,
        Species::HClO3,
        Species::HClO4,
        Species::LiOH,
        Species::NaOH,
        Species::KOH,
        Species::RbOH,
        Species::CsOH,
        Species::Water,
        Species::NaCl,
        Species::KCl,
        Species::NoSubstance,
    ];

    /// Canonical ASCII identifier.
    pub fn key(&self) -> &'static str {
        match self {
            Species::HCl => "HCl",
            Species::HBr => "HBr",
            Species::HI => "HI",
            Species::HNO3 => "HNO3",
            Species::HClO3 => "HClO3",
            Species::HClO4 => "HClO4",
            Species::LiOH => "LiOH",
            Species::NaOH => "NaOH",
            Species::KOH => "KOH",
            Species::RbOH => "RbOH",
            Species::CsOH => "CsOH",
            Species::Water => "H2O",
            Species::NaCl => "NaCl",
            Species::KCl => "KCl",
            Species::NoSubstance => "none",
        }
    }

    /// Display formula with Unicode subscripts.
    pub fn formula(&self) -> &'static str {
        match self {
            Species::HNO3 => "HNO\u{2083}",
            Species::HClO3 => "HClO\u{2083}",
            Species::HClO4 => "HClO\u{2084}",
            Species::Water => "H\u{2082}O",
            Species::NoSubstance => "(none)",
            other => other.key(),
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Species::HCl => "Hydrochloric Acid",
            Species::HBr => "Hydrobromic Acid",
            Species::HI => "Hydroiodic Acid",
            Species::HNO3 => "Nitric Acid",
            Species::HClO3 => "Chloric Acid",
            Species::HClO4 => "Perchloric Acid",
            Species::LiOH => "Lithium Hydroxide",
            Species::NaOH => "Sodium Hydroxide",
            Species::KOH => "Potassium Hydroxide",
            Species::RbOH => "Rubidium Hydroxide",
            Species::CsOH => "Cesium Hydroxide",
            Species::Water => "Water",
            Species::NaCl => "Sodium Chloride",
            Species::KCl => "Potassium Chloride",
            Species::NoSubstance => "No Substance",
        }
    }

    /// Acid/base character, fixed per species.
    pub fn category(&self) -> Category {
        match self {
            Species::HCl
            | Species::HBr
            | Species::HI
            | Species::HNO3
            | Species::HClO3
            | Species::HClO4 => Category::Acid,
            Species::LiOH | Species::NaOH | Species::KOH | Species::RbOH | Species::CsOH => {
                Category::Base
            }
            Species::Water | Species::NaCl | Species::KCl | Species::NoSubstance => {
                Category::Neutral
            }
        }
    }

    /// Anion left behind when this acid dissociates (salt-forming part).
    ///
    /// Returns `None` for anything that is not a supported acid.
    pub fn anion(&self) -> Option<&'static str> {
        match self {
            Species::HCl => Some("Cl"),
            Species::HBr => Some("Br"),
            Species::HI => Some("I"),
            Species::HNO3 => Some("NO3"),
            Species::HClO3 => Some("ClO3"),
            Species::HClO4 => Some("ClO4"),
            _ => None,
        }
    }

    /// Cation left behind when this base dissociates (salt-forming part).
    ///
    /// Returns `None` for anything that is not a supported base.
    pub fn cation(&self) -> Option<&'static str> {
        match self {
            Species::LiOH => Some("Li"),
            Species::NaOH => Some("Na"),
            Species::KOH => Some("K"),
            Species::RbOH => Some("Rb"),
            Species::CsOH => Some("Cs"),
            _ => None,
        }
    }
}

impl std::str::FromStr for Species {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "HCL" | "HYDROCHLORIC ACID" => Ok(Species::HCl),
            "HBR" | "HYDROBROMIC ACID" => Ok(Species::HBr),
            "HI" | "HYDROIODIC ACID" => Ok(Species::HI),
            "HNO3" | "HNO\u{2083}" | "NITRIC ACID" => Ok(Species::HNO3),
            "HCLO3" | "HCLO\u{2083}" | "CHLORIC ACID" => Ok(Species::HClO3),
            "HCLO4" | "HCLO\u{2084}" | "PERCHLORIC ACID" => Ok(Species::HClO4),
            "LIOH" | "LITHIUM HYDROXIDE" => Ok(Species::LiOH),
            "NAOH" | "SODIUM HYDROXIDE" => Ok(Species::NaOH),
            "KOH" | "POTASSIUM HYDROXIDE" => Ok(Species::KOH),
            "RBOH" | "RUBIDIUM HYDROXIDE" => Ok(Species::RbOH),
            "CSOH" | "CESIUM HYDROXIDE" => Ok(Species::CsOH),
            "H2O" | "H\u{2082}O" | "WATER" => Ok(Species::Water),
            "NACL" | "SODIUM CHLORIDE" => Ok(Species::NaCl),
            "KCL" | "POTASSIUM CHLORIDE" => Ok(Species::KCl),
            "NONE" | "NO SUBSTANCE" => Ok(Species::NoSubstance),
            _ => Err("unknown species"),
        }
    }
}

/// Classify an arbitrary formula string.
///
/// Unrecognized identities classify as neutral rather than failing; this is
/// the forgiving boundary for callers that only need the acid/base character.
pub fn classify_formula(formula: &str) -> Category {
    formula
        .parse::<Species>()
        .map(|s| s.category())
        .unwrap_or(Category::Neutral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_partition_the_set() {
        let acids = Species::ALL
            .iter()
            .filter(|s| s.category() == Category::Acid)
            .count();
        let bases = Species::ALL
            .iter()
            .filter(|s| s.category() == Category::Base)
            .count();
        let neutrals = Species::ALL
            .iter()
            .filter(|s| s.category() == Category::Neutral)
            .count();
        assert_eq!(acids, 6);
        assert_eq!(bases, 5);
        assert_eq!(neutrals, 4);
        assert_eq!(acids + bases + neutrals, Species::ALL.len());
    }

    #[test]
    fn parse_aliases_include_names_and_unicode() {
        assert_eq!("HCl".parse::<Species>().unwrap(), Species::HCl);
        assert_eq!("hno3".parse::<Species>().unwrap(), Species::HNO3);
        assert_eq!("HNO\u{2083}".parse::<Species>().unwrap(), Species::HNO3);
        assert_eq!(
            "sodium hydroxide".parse::<Species>().unwrap(),
            Species::NaOH
        );
        assert_eq!("water".parse::<Species>().unwrap(), Species::Water);
    }

    #[test]
    fn canonical_key_roundtrip() {
        for species in Species::ALL {
            let parsed = species
                .key()
                .parse::<Species>()
                .expect("canonical key should parse");
            assert_eq!(parsed, species);
        }
    }

    #[test]
    fn ion_maps_cover_exactly_the_acids_and_bases() {
        for species in Species::ALL {
            assert_eq!(species.anion().is_some(), species.category() == Category::Acid);
            assert_eq!(species.cation().is_some(), species.category() == Category::Base);
        }
    }

    #[test]
    fn unknown_formula_classifies_neutral() {
        assert_eq!(classify_formula("C6H12O6"), Category::Neutral);
        assert_eq!(classify_formula(""), Category::Neutral);
        assert_eq!(classify_formula("KOH"), Category::Base);
    }

    #[test]
    fn display_formulas_use_subscripts() {
        assert_eq!(Species::HNO3.formula(), "HNO\u{2083}");
        assert_eq!(Species::Water.formula(), "H\u{2082}O");
        assert_eq!(Species::HCl.formula(), "HCl");
    }
}
