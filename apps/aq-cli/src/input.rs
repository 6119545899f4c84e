//! Mixture input parsing: positional specs and YAML files.

use std::path::Path;

use aq_chem::{ChemError, Species, Substance};
use aq_core::units::liters;
use serde::Deserialize;

use crate::error::{CliError, CliResult};

/// One substance as the user describes it: formula plus optional molarity
/// [mol/L] and volume [L], both defaulting to zero.
#[derive(Debug, Clone, Deserialize)]
pub struct SubstanceSpec {
    pub formula: String,
    #[serde(default)]
    pub molarity: f64,
    #[serde(default)]
    pub volume: f64,
}

impl SubstanceSpec {
    /// Parse a positional spec of the form `formula[:molarity[:volume]]`,
    /// e.g. `HCl:0.1:0.1` or `H2O::0.25`.
    pub fn parse(spec: &str) -> CliResult<SubstanceSpec> {
        let mut parts = spec.splitn(3, ':');
        let formula = match parts.next() {
            Some(f) if !f.trim().is_empty() => f.trim().to_string(),
            _ => {
                return Err(CliError::BadSpec {
                    spec: spec.to_string(),
                    reason: "missing formula".to_string(),
                });
            }
        };

        let parse_field = |field: Option<&str>, name: &str| -> CliResult<f64> {
            match field.map(str::trim) {
                None | Some("") => Ok(0.0),
                Some(text) => text.parse::<f64>().map_err(|_| CliError::BadSpec {
                    spec: spec.to_string(),
                    reason: format!("{name} '{text}' is not a number"),
                }),
            }
        };

        let molarity = parse_field(parts.next(), "molarity")?;
        let volume = parse_field(parts.next(), "volume")?;

        Ok(SubstanceSpec {
            formula,
            molarity,
            volume,
        })
    }

    /// Resolve to a validated substance. Water specs get their molarity
    /// forced to zero; water is the molarity-free diluent.
    pub fn to_substance(&self) -> CliResult<Substance> {
        let species = self
            .formula
            .parse::<Species>()
            .map_err(|_| ChemError::UnknownSpecies {
                formula: self.formula.clone(),
            })?;

        let substance = if species == Species::Water {
            Substance::water(liters(self.volume))?
        } else {
            Substance::new(species, self.molarity, liters(self.volume))?
        };
        Ok(substance)
    }
}

/// YAML mixture description: a first solution and an optional second.
#[derive(Debug, Clone, Deserialize)]
pub struct MixtureInput {
    pub first: SubstanceSpec,
    #[serde(default)]
    pub second: Option<SubstanceSpec>,
}

impl MixtureInput {
    pub fn load(path: &Path) -> CliResult<MixtureInput> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Resolve both slots; an absent second becomes the sentinel.
    pub fn to_substances(&self) -> CliResult<(Substance, Substance)> {
        let first = self.first.to_substance()?;
        let second = match &self.second {
            Some(spec) => spec.to_substance()?,
            None => Substance::none(),
        };
        Ok((first, second))
    }
}
