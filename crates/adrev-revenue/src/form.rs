//! Per-field checks for calculator input.
//!
//! These mirror the constraints a form places on each field before the
//! estimate is requested: traffic must be a non-negative number and every
//! geography share must sit in `[0, 100]`. They are independent of the
//! share-total rule enforced by [`crate::validate_shares`].

use adrev_types::{CalculationInput, Geo};

/// A single field failed its range check.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    /// Traffic is negative or not a finite number.
    #[error("Traffic amount must be a non-negative number, got {0}")]
    InvalidTraffic(f64),

    /// A geography share is outside `[0, 100]` or not a finite number.
    #[error(
        "{geo} percentage must be between 0 and 100, got {value}. \
         Please enter valid GEO percentages (0-100)."
    )]
    ShareOutOfRange {
        /// The offending geography.
        geo: Geo,
        /// The value entered.
        value: f64,
    },
}

/// Check every field of `input` against its allowed range.
///
/// Traffic is checked first, then shares in [`Geo::ALL`] order; the first
/// failure is returned.
///
/// # Errors
///
/// - [`FormError::InvalidTraffic`] if traffic is negative, NaN or infinite
/// - [`FormError::ShareOutOfRange`] if any share is outside `[0, 100]`
pub fn validate_fields(input: &CalculationInput) -> Result<(), FormError> {
    if !input.traffic.is_finite() || input.traffic < 0.0 {
        return Err(FormError::InvalidTraffic(input.traffic));
    }

    for (geo, value) in input.geo.iter() {
        if !(0.0..=100.0).contains(&value) {
            return Err(FormError::ShareOutOfRange { geo, value });
        }
    }

    Ok(())
}
