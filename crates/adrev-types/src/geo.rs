//! Geographies and per-geography traffic shares.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A traffic geography with its own ad rate.
///
/// The set is closed: traffic that does not come from one of the named
/// countries is attributed to [`Geo::Other`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ts_rs::TS,
)]
#[ts(export)]
pub enum Geo {
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "CA")]
    Ca,
    #[serde(rename = "GB")]
    Gb,
    #[serde(rename = "DE")]
    De,
    #[serde(rename = "Other")]
    Other,
}

impl Geo {
    /// Every geography, in summation order.
    pub const ALL: [Geo; 5] = [Geo::Us, Geo::Ca, Geo::Gb, Geo::De, Geo::Other];

    /// Short code as shown on the form ("US", "CA", "GB", "DE", "Other").
    pub const fn code(self) -> &'static str {
        match self {
            Geo::Us => "US",
            Geo::Ca => "CA",
            Geo::Gb => "GB",
            Geo::De => "DE",
            Geo::Other => "Other",
        }
    }
}

impl fmt::Display for Geo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Percentage of traffic attributed to each geography.
///
/// Each share is expected in `[0, 100]` and the five together must total
/// exactly 100 before an estimate is produced.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct GeoShares {
    #[serde(rename = "US")]
    pub us: f64,
    #[serde(rename = "CA")]
    pub ca: f64,
    #[serde(rename = "GB")]
    pub gb: f64,
    #[serde(rename = "DE")]
    pub de: f64,
    #[serde(rename = "Other")]
    pub other: f64,
}

impl GeoShares {
    pub const fn new(us: f64, ca: f64, gb: f64, de: f64, other: f64) -> Self {
        Self {
            us,
            ca,
            gb,
            de,
            other,
        }
    }

    /// Share for a single geography.
    pub const fn get(&self, geo: Geo) -> f64 {
        match geo {
            Geo::Us => self.us,
            Geo::Ca => self.ca,
            Geo::Gb => self.gb,
            Geo::De => self.de,
            Geo::Other => self.other,
        }
    }

    /// `(geo, share)` pairs in [`Geo::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Geo, f64)> + '_ {
        Geo::ALL.into_iter().map(move |geo| (geo, self.get(geo)))
    }

    /// Sum of all five shares, added in [`Geo::ALL`] order.
    pub fn total(&self) -> f64 {
        self.iter().fold(0.0, |acc, (_, pct)| acc + pct)
    }
}

impl Default for GeoShares {
    /// US=50, CA=20, GB=15, DE=10, Other=5.
    fn default() -> Self {
        Self::new(50.0, 20.0, 15.0, 10.0, 5.0)
    }
}
