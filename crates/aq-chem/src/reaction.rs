//! Neutralization reaction equations.

use std::fmt;

use crate::species::Species;
use crate::substance::Substance;

/// Rewrite ASCII digits in a formula as Unicode subscripts ("NO3" -> "NO₃").
pub fn format_formula(formula: &str) -> String {
    formula
        .chars()
        .map(|c| match c {
            '0' => '\u{2080}',
            '1' => '\u{2081}',
            '2' => '\u{2082}',
            '3' => '\u{2083}',
            '4' => '\u{2084}',
            '5' => '\u{2085}',
            '6' => '\u{2086}',
            '7' => '\u{2087}',
            '8' => '\u{2088}',
            '9' => '\u{2089}',
            other => other,
        })
        .collect()
}

/// What chemically happens (or does not) when the two substances meet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionOutcome {
    /// Acid + base form a salt and water.
    Neutralization {
        acid: Species,
        base: Species,
        /// Salt formula with Unicode subscripts (cation then anion).
        salt: String,
    },
    /// Two solutions present, nothing reacts.
    InertMixture,
    /// At most one solution present.
    NoReaction,
}

impl fmt::Display for ReactionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReactionOutcome::Neutralization { acid, base, salt } => write!(
                f,
                "{} + {} \u{2192} {} + H\u{2082}O",
                acid.formula(),
                base.formula(),
                salt
            ),
            ReactionOutcome::InertMixture => write!(f, "Mixture, no chemical reaction"),
            ReactionOutcome::NoReaction => write!(f, "No chemical reaction"),
        }
    }
}

/// Determine the reaction between two substances.
///
/// A neutralization needs exactly one acid and one base, each with a known
/// counter-ion; the salt is the base's cation joined to the acid's anion with
/// no charge-balancing stoichiometry (every supported pairing is 1:1).
pub fn describe_reaction(a: &Substance, b: &Substance) -> ReactionOutcome {
    let acid = [a, b].into_iter().find(|s| s.is_acid());
    let base = [a, b].into_iter().find(|s| s.is_base());

    if let (Some(acid), Some(base)) = (acid, base)
        && let (Some(anion), Some(cation)) = (acid.species().anion(), base.species().cation())
    {
        return ReactionOutcome::Neutralization {
            acid: acid.species(),
            base: base.species(),
            salt: format_formula(&format!("{cation}{anion}")),
        };
    }

    if a.is_present() && b.is_present() {
        ReactionOutcome::InertMixture
    } else {
        ReactionOutcome::NoReaction
    }
}
