use crate::species::{Category, Species};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesCatalogEntry {
    pub species: Species,
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
}

impl SpeciesCatalogEntry {
    pub fn category(&self) -> Category {
        self.species.category()
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.canonical_id.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }
}

const SPECIES_CATALOG: [SpeciesCatalogEntry; 15] = [
    SpeciesCatalogEntry {
        species: Species::HCl,
        canonical_id: "HCl",
        display_name: "Hydrochloric Acid",
        aliases: &["muriatic acid"],
    },
    SpeciesCatalogEntry {
        species: Species::HBr,
        canonical_id: "HBr",
        display_name: "Hydrobromic Acid",
        aliases: &[],
    },
    SpeciesCatalogEntry {
        species: Species::HI,
        canonical_id: "HI",
        display_name: "Hydroiodic Acid",
        aliases: &[],
    },
    SpeciesCatalogEntry {
        species: Species::HNO3,
        canonical_id: "HNO3",
        display_name: "Nitric Acid",
        aliases: &[],
    },
    SpeciesCatalogEntry {
        species: Species::HClO3,
        canonical_id: "HClO3",
        display_name: "Chloric Acid",
        aliases: &[],
    },
    SpeciesCatalogEntry {
        species: Species::HClO4,
        canonical_id: "HClO4",
        display_name: "Perchloric Acid",
        aliases: &[],
    },
    SpeciesCatalogEntry {
        species: Species::LiOH,
        canonical_id: "LiOH",
        display_name: "Lithium Hydroxide",
        aliases: &["lithia"],
    },
    SpeciesCatalogEntry {
        species: Species::NaOH,
        canonical_id: "NaOH",
        display_name: "Sodium Hydroxide",
        aliases: &["caustic soda", "lye"],
    },
    SpeciesCatalogEntry {
        species: Species::KOH,
        canonical_id: "KOH",
        display_name: "Potassium Hydroxide",
        aliases: &["caustic potash"],
    },
    SpeciesCatalogEntry {
        species: Species::RbOH,
        canonical_id: "RbOH",
        display_name: "Rubidium Hydroxide",
        aliases: &[],
    },
    SpeciesCatalogEntry {
        species: Species::CsOH,
        canonical_id: "CsOH",
        display_name: "Cesium Hydroxide",
        aliases: &[],
    },
    SpeciesCatalogEntry {
        species: Species::Water,
        canonical_id: "H2O",
        display_name: "Water",
        aliases: &["water (no molarity)"],
    },
    SpeciesCatalogEntry {
        species: Species::NaCl,
        canonical_id: "NaCl",
        display_name: "Sodium Chloride",
        aliases: &["table salt"],
    },
    SpeciesCatalogEntry {
        species: Species::KCl,
        canonical_id: "KCl",
        display_name: "Potassium Chloride",
        aliases: &[],
    },
    SpeciesCatalogEntry {
        species: Species::NoSubstance,
        canonical_id: "none",
        display_name: "No Substance",
        aliases: &["empty"],
    },
];

pub fn catalog() -> &'static [SpeciesCatalogEntry] {
    &SPECIES_CATALOG
}

/// Entries of one acid/base category, in catalog order.
///
/// This is the grouping a front end uses to build its selection lists
/// (strong acids, strong bases, neutrals).
pub fn catalog_for_category(category: Category) -> Vec<SpeciesCatalogEntry> {
    catalog()
        .iter()
        .copied()
        .filter(|entry| entry.category() == category)
        .collect()
}

pub fn filter_catalog(query: &str) -> Vec<SpeciesCatalogEntry> {
    catalog()
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}
