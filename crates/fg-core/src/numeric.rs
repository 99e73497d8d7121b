//! Float helpers for capacities and flow values.

use crate::{FgError, FgResult};

/// Capacity and flow values.
pub type Real = f64;

/// Tolerances for comparing flow values summed over many rounds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
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

impl Tolerances {
    /// Equal within `abs`, or within `rel` of the larger magnitude.
    pub fn approx_eq(&self, a: Real, b: Real) -> bool {
        let gap = (a - b).abs();
        gap <= self.abs || gap <= self.rel * a.abs().max(b.abs())
    }

    /// Whether `value` is rounding noise left over from subtracting
    /// `scale`-sized quantities.
    pub fn is_negligible(&self, value: Real, scale: Real) -> bool {
        value.abs() <= self.abs.max(self.rel * scale.abs())
    }
}

/// Reject NaN and infinities, naming the quantity in the error.
pub fn ensure_finite(value: Real, what: &'static str) -> FgResult<Real> {
    if !value.is_finite() {
        return Err(FgError::NonFinite { what, value });
    }
    Ok(value)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn approx_eq_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(tol.approx_eq(a, b), tol.approx_eq(b, a));
        }
    }
}
