use crate::AqError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Round to `decimals` decimal places, agreeing bit for bit with how the
/// value renders under `{:.decimals$}` formatting.
///
/// Used where a value must be compared against a threshold exactly as it is
/// displayed (e.g. a pH shown with two decimals). Multiplying by a power of
/// ten and calling `round()` can disagree with the formatted text near
/// half-way points, so we round through the formatter itself.
pub fn round_decimals(v: Real, decimals: usize) -> Real {
    format!("{v:.decimals$}").parse().unwrap_or(v)
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, AqError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(AqError::NonFinite { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(7.0, 7.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(7.0, 7.0 + 1e-6, tol));
    }

    #[test]
    fn round_decimals_two_places() {
        assert_eq!(round_decimals(6.999_999_999, 2), 7.00);
        assert_eq!(round_decimals(7.004, 2), 7.00);
        assert_eq!(round_decimals(7.006, 2), 7.01);
        assert_eq!(round_decimals(-0.301, 2), -0.30);
    }

    #[test]
    fn round_decimals_matches_display() {
        // The literal 7.005 sits just below its decimal spelling in binary,
        // so it must land on whatever "{:.2}" prints for it.
        let shown: f64 = format!("{:.2}", 7.005_f64).parse().unwrap();
        assert_eq!(round_decimals(7.005, 2), shown);
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "molarity").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }
}
