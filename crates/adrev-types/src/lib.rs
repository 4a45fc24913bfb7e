//! # adrev-types
//!
//! Shared value types for the ad revenue estimator.
//!
//! These are the shapes exchanged between a front end and the calculator;
//! they derive [`ts_rs::TS`] so matching TypeScript definitions can be
//! generated for the form.

pub mod banner;
pub mod geo;
pub mod input;

pub use banner::BannerSize;
pub use geo::{Geo, GeoShares};
pub use input::{CalculationInput, DEFAULT_TRAFFIC};

/// Percentage total the geography shares must add up to.
pub const FULL_SHARE_PCT: f64 = 100.0;
