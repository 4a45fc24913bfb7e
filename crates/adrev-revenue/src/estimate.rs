//! Revenue calculation.
//!
//! ## Formula
//!
//! ```text
//! revenue = multiplier(banner) * sum_g(traffic * (share_g / 100) * rate_g)
//! ```
//!
//! The calculation is pure: identical input always yields an identical
//! estimate. Rounding to cents only happens when presenting the result.

use std::fmt;

use adrev_types::{BannerSize, CalculationInput, Geo, GeoShares, FULL_SHARE_PCT};
use serde::Serialize;

use crate::rates::{banner_multiplier, geo_rate};
use crate::{Result, RevenueError};

/// Revenue earned by one geography before the banner multiplier is applied.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GeoContribution {
    pub geo: Geo,
    /// Share of traffic, in percent.
    pub share_pct: f64,
    /// Rate applied to this geography.
    pub rate: f64,
    /// `traffic * share_pct / 100 * rate`.
    pub amount: f64,
}

/// A successful revenue estimate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RevenueEstimate {
    /// Unrounded revenue.
    pub amount: f64,
    pub banner: BannerSize,
    /// Multiplier applied for `banner`.
    pub multiplier: f64,
    /// Per-geography revenue, in [`Geo::ALL`] order.
    pub contributions: [GeoContribution; 5],
}

impl RevenueEstimate {
    /// Revenue rounded to two decimal places.
    pub fn rounded(&self) -> f64 {
        round_cents(self.amount)
    }

    /// Sum of the geography contributions before the banner multiplier.
    pub fn subtotal(&self) -> f64 {
        self.contributions
            .iter()
            .fold(0.0, |acc, contribution| acc + contribution.amount)
    }
}

impl fmt::Display for RevenueEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_usd(self.amount))
    }
}

/// Check that the geography shares add up to exactly 100.
///
/// Shares are summed in [`Geo::ALL`] order and compared without tolerance,
/// so fractional splits such as `33.3 / 33.3 / 33.4` must land on `100.0`
/// exactly after floating-point addition.
///
/// # Errors
///
/// - [`RevenueError::PercentageSumMismatch`] if the total is not 100
pub fn validate_shares(shares: &GeoShares) -> Result<()> {
    let total = shares.total();
    if total != FULL_SHARE_PCT {
        return Err(RevenueError::PercentageSumMismatch { total });
    }
    Ok(())
}

/// Estimate ad revenue for one input.
///
/// The share total is checked before the banner is resolved, so a bad total
/// is reported even when the banner is also unknown. Field ranges are not
/// re-checked here; see [`crate::form::validate_fields`].
///
/// # Errors
///
/// - [`RevenueError::PercentageSumMismatch`] if the shares do not total 100
/// - [`RevenueError::UnknownBannerSize`] if the banner is not in the rate table
///
/// # Examples
///
/// ```
/// use adrev_revenue::compute;
/// use adrev_types::{CalculationInput, GeoShares};
///
/// let shares = GeoShares::new(50.0, 20.0, 15.0, 10.0, 5.0);
/// let input = CalculationInput::new(1000.0, shares, "728x90");
/// let estimate = compute(&input).unwrap();
/// assert_eq!(estimate.to_string(), "$2055.00");
/// ```
pub fn compute(input: &CalculationInput) -> Result<RevenueEstimate> {
    if let Err(e) = validate_shares(&input.geo) {
        tracing::debug!(total = input.geo.total(), "geo shares rejected");
        return Err(e);
    }

    let banner = input.banner().ok_or_else(|| {
        tracing::debug!(banner = %input.banner_size, "unknown banner size");
        RevenueError::UnknownBannerSize(input.banner_size.clone())
    })?;
    let multiplier = banner_multiplier(banner);

    let contributions = Geo::ALL.map(|geo| {
        let share_pct = input.geo.get(geo);
        let rate = geo_rate(geo);
        GeoContribution {
            geo,
            share_pct,
            rate,
            amount: input.traffic * (share_pct / 100.0) * rate,
        }
    });

    let subtotal = contributions
        .iter()
        .fold(0.0, |acc, contribution| acc + contribution.amount);
    let amount = subtotal * multiplier;

    tracing::debug!(
        traffic = input.traffic,
        banner = banner.id(),
        multiplier,
        amount,
        "revenue estimated"
    );

    Ok(RevenueEstimate {
        amount,
        banner,
        multiplier,
        contributions,
    })
}

/// Bound on `value * 8` below which `value * 100` is computed exactly.
const EXACT_EIGHTHS_LIMIT: f64 = (1u64 << 48) as f64;

/// Render `value` with exactly two fractional digits.
///
/// The stored binary value is rounded to the nearest cent, not the decimal
/// literal it was written as, so `3.425` (stored just below the half cent)
/// gives `3.42`. Exact half-cent ties round away from zero: `0.125` gives
/// `0.13`. Only multiples of 1/8 can sit exactly on a half cent.
pub fn format_cents(value: f64) -> String {
    let magnitude = value.abs();
    let eighths = magnitude * 8.0;
    let is_tie =
        eighths < EXACT_EIGHTHS_LIMIT && eighths.fract() == 0.0 && eighths % 2.0 == 1.0;
    if !is_tie {
        return format!("{value:.2}");
    }

    let cents = (magnitude * 100.0).ceil() as u64;
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

/// Round to two decimal places, agreeing with [`format_cents`].
pub fn round_cents(value: f64) -> f64 {
    format_cents(value).parse().unwrap_or(value)
}

/// Format a dollar amount with two fractional digits, e.g. `$1712.50`.
pub fn format_usd(value: f64) -> String {
    format!("${}", format_cents(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_shares() -> GeoShares {
        GeoShares::new(50.0, 20.0, 15.0, 10.0, 5.0)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_medium_rectangle_example() {
        let input = CalculationInput::new(1000.0, form_shares(), "300x250");
        let estimate = compute(&input).expect("compute");
        assert_close(estimate.amount, 1712.50);
        assert_eq!(estimate.rounded(), 1712.50);
        assert_eq!(estimate.to_string(), "$1712.50");
        assert_eq!(estimate.banner, BannerSize::MediumRectangle);
    }

    #[test]
    fn test_leaderboard_example() {
        let input = CalculationInput::new(1000.0, form_shares(), "728x90");
        let estimate = compute(&input).expect("compute");
        assert_close(estimate.amount, 2055.00);
        assert_eq!(estimate.rounded(), 2055.00);
        assert_eq!(estimate.to_string(), "$2055.00");
    }

    #[test]
    fn test_every_banner_scales_subtotal() {
        for banner in BannerSize::ALL {
            let input = CalculationInput::new(1000.0, form_shares(), banner.id());
            let estimate = compute(&input).expect("compute");
            assert_close(estimate.subtotal(), 1712.50);
            assert_close(estimate.amount, 1712.50 * banner_multiplier(banner));
        }
    }

    #[test]
    fn test_contributions_breakdown() {
        let input = CalculationInput::new(1000.0, form_shares(), "300x250");
        let estimate = compute(&input).expect("compute");
        let amounts: Vec<f64> = estimate.contributions.iter().map(|c| c.amount).collect();
        let expected = [1000.0, 300.0, 262.5, 125.0, 25.0];
        for (actual, expected) in amounts.iter().zip(expected) {
            assert_close(*actual, expected);
        }
        assert_eq!(estimate.contributions[2].geo, Geo::Gb);
        assert_eq!(estimate.contributions[2].rate, 1.75);
        assert_eq!(estimate.contributions[2].share_pct, 15.0);
    }

    #[test]
    fn test_sum_101_rejected() {
        let input = CalculationInput::new(
            1000.0,
            GeoShares::new(50.0, 20.0, 15.0, 10.0, 6.0),
            "300x250",
        );
        assert_eq!(
            compute(&input),
            Err(RevenueError::PercentageSumMismatch { total: 101.0 })
        );
    }

    #[test]
    fn test_sum_99_rejected() {
        let input = CalculationInput::new(
            1000.0,
            GeoShares::new(50.0, 20.0, 15.0, 10.0, 4.0),
            "300x250",
        );
        assert!(matches!(
            compute(&input),
            Err(RevenueError::PercentageSumMismatch { .. })
        ));
    }

    #[test]
    fn test_sum_checked_before_banner() {
        let input = CalculationInput::new(1000.0, GeoShares::new(0.0, 0.0, 0.0, 0.0, 0.0), "nope");
        assert!(matches!(
            compute(&input),
            Err(RevenueError::PercentageSumMismatch { .. })
        ));
    }

    #[test]
    fn test_unknown_banner_rejected() {
        let input = CalculationInput::new(1000.0, form_shares(), "970x250");
        assert_eq!(
            compute(&input),
            Err(RevenueError::UnknownBannerSize("970x250".to_string()))
        );
    }

    #[test]
    fn test_no_tolerance_on_total() {
        let input = CalculationInput::new(
            1000.0,
            GeoShares::new(50.0, 20.0, 15.0, 10.0, 5.000001),
            "300x250",
        );
        assert!(compute(&input).is_err());
    }

    #[test]
    fn test_zero_traffic() {
        let input = CalculationInput::new(0.0, form_shares(), "320x50");
        let estimate = compute(&input).expect("compute");
        assert_eq!(estimate.amount, 0.0);
        assert_eq!(estimate.to_string(), "$0.00");
    }

    #[test]
    fn test_all_traffic_single_geo() {
        let input = CalculationInput::new(
            200.0,
            GeoShares::new(0.0, 0.0, 0.0, 100.0, 0.0),
            "160x600",
        );
        let estimate = compute(&input).expect("compute");
        // 200 * 1.25 * 0.9
        assert_close(estimate.amount, 225.0);
    }

    #[test]
    fn test_compute_idempotent() {
        let input = CalculationInput::new(
            12_345.0,
            GeoShares::new(40.0, 25.0, 20.0, 10.0, 5.0),
            "728x90",
        );
        let first = compute(&input).expect("first");
        let second = compute(&input).expect("second");
        assert_eq!(first, second);
    }

    #[test]
    fn test_round_and_format() {
        assert_eq!(round_cents(1712.499), 1712.50);
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(format_usd(0.125), "$0.13");
        assert_eq!(format_usd(-0.125), "$-0.13");
        assert_eq!(format_usd(0.375), "$0.38");
        assert_eq!(format_usd(2055.0000000000002), "$2055.00");
        assert_eq!(format_usd(1.5), "$1.50");
    }

    #[test]
    fn test_stored_value_below_half_cent_rounds_down() {
        // 2 * (0.5 * 2.00 + 0.2 * 1.50 + 0.15 * 1.75 + 0.1 * 1.25 + 0.05 * 0.50)
        // lands just below 3.425 in binary.
        let input = CalculationInput::new(2.0, GeoShares::default(), "300x250");
        let estimate = compute(&input).expect("compute");
        assert_eq!(estimate.to_string(), "$3.42");
        assert_eq!(estimate.rounded(), 3.42);
        assert_eq!(format_usd(3.425), "$3.42");
    }

    #[test]
    fn test_rounded_agrees_with_display() {
        for traffic in [0.0, 2.0, 7.0, 12.0, 999.9, 1000.0, 1234.5] {
            for banner in BannerSize::ALL {
                let input = CalculationInput::new(traffic, GeoShares::default(), banner.id());
                let estimate = compute(&input).expect("compute");
                assert_eq!(format_usd(estimate.rounded()), estimate.to_string());
            }
        }
    }

    #[test]
    fn test_estimate_serializes() {
        let input = CalculationInput::default();
        let estimate = compute(&input).expect("compute");
        let json = serde_json::to_value(&estimate).expect("serialize");
        assert_eq!(json["banner"], "300x250");
        assert_eq!(json["multiplier"], 1.0);
        assert_eq!(json["contributions"][0]["geo"], "US");
        assert_eq!(json["contributions"].as_array().map(Vec::len), Some(5));
    }
}
