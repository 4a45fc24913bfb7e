//! # adrev-revenue
//!
//! Ad revenue estimation.
//!
//! Traffic is split across geographies, each geography earns at its own
//! rate, and the total is scaled by a multiplier for the chosen banner size.
//!
//! ## Modules
//!
//! - [`rates`] - Fixed geography rates and banner multipliers
//! - [`estimate`] - Share validation and the revenue calculation
//! - [`form`] - Per-field range checks applied before calculating

pub mod estimate;
pub mod form;
pub mod rates;

pub use estimate::{
    compute, format_usd, round_cents, validate_shares, GeoContribution, RevenueEstimate,
};
pub use form::{validate_fields, FormError};

/// Error types for revenue estimation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RevenueError {
    /// Geography percentages do not add up to exactly 100.
    #[error("Total GEO percentage must equal 100%")]
    PercentageSumMismatch {
        /// The actual total.
        total: f64,
    },

    /// Banner identifier is not in the banner rate table.
    #[error("unknown banner size: {0:?}")]
    UnknownBannerSize(String),
}

/// Convenience result type for revenue operations.
pub type Result<T> = std::result::Result<T, RevenueError>;
