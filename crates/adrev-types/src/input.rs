//! Calculator input as submitted by a caller.

use serde::{Deserialize, Serialize};

use crate::banner::BannerSize;
use crate::geo::GeoShares;

/// Default traffic volume pre-filled on the form.
pub const DEFAULT_TRAFFIC: f64 = 1000.0;

/// One calculation request.
///
/// `banner_size` is kept as the raw identifier the caller selected; it is
/// resolved against the banner rate table at calculation time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    /// Traffic volume (impressions or visits), `>= 0`.
    pub traffic: f64,
    /// Percentage split of `traffic` across geographies.
    pub geo: GeoShares,
    /// Banner dimension identifier, e.g. `"300x250"`.
    pub banner_size: String,
}

impl CalculationInput {
    pub fn new(traffic: f64, geo: GeoShares, banner_size: impl Into<String>) -> Self {
        Self {
            traffic,
            geo,
            banner_size: banner_size.into(),
        }
    }

    /// The typed banner, if the identifier is recognized.
    pub fn banner(&self) -> Option<BannerSize> {
        BannerSize::from_id(&self.banner_size)
    }
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self::new(
            DEFAULT_TRAFFIC,
            GeoShares::default(),
            BannerSize::default().id(),
        )
    }
}
