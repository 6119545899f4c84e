//! Result classification: status message and display color category.

use crate::substance::Substance;
use aq_core::{Real, round_decimals};

/// How loudly a status should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// Human-readable verdict for a computed pH.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub text: String,
    pub severity: Severity,
}

/// Band around pH 7 reported as neutral in status text.
const NEUTRAL_BAND: Real = 0.01;

/// Describe a computed pH, aware of which substances produced it.
///
/// Out-of-scale values warn: nothing physical mixes to pH above 14 or below 0
/// in this model without an implausibly concentrated input. Inside the scale
/// the wording distinguishes a genuine acid/base neutralization (where the
/// remainder is an excess) from a single non-reacting solution.
pub fn describe_status(ph: Real, a: &Substance, b: &Substance) -> StatusReport {
    if ph > 14.0 {
        return StatusReport {
            text: "Unusually high base concentration.".to_string(),
            severity: Severity::Warning,
        };
    }
    if ph < 0.0 {
        return StatusReport {
            text: "Unusually high acid concentration.".to_string(),
            severity: Severity::Warning,
        };
    }

    if (ph - 7.0).abs() <= NEUTRAL_BAND {
        return StatusReport {
            text: "Neutral solution.".to_string(),
            severity: Severity::Info,
        };
    }

    let neutralizing = a.is_present()
        && b.is_present()
        && ((a.is_acid() && b.is_base()) || (a.is_base() && b.is_acid()));
    let text = match (ph < 7.0, neutralizing) {
        (true, true) => "Excess acid after neutralization.",
        (true, false) => "Acidic solution.",
        (false, true) => "Excess base after neutralization.",
        (false, false) => "Basic solution.",
    };

    StatusReport {
        text: text.to_string(),
        severity: Severity::Info,
    }
}

/// Display color family for a pH value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCategory {
    Acid,
    Base,
    Neutral,
}

impl ColorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ColorCategory::Acid => "acid",
            ColorCategory::Base => "base",
            ColorCategory::Neutral => "neutral",
        }
    }
}

/// Color category for a pH, rounded to two decimals before comparison.
///
/// Rounding first keeps the category consistent with the displayed two-decimal
/// value: a computed 6.999999999 renders as "7.00" and must not color as acid.
pub fn color_category(ph: Real) -> ColorCategory {
    let shown = round_decimals(ph, 2);
    if shown < 7.0 {
        ColorCategory::Acid
    } else if shown > 7.0 {
        ColorCategory::Base
    } else {
        ColorCategory::Neutral
    }
}
