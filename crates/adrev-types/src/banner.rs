//! IAB banner sizes offered by the calculator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A standard IAB ad-unit size.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    ts_rs::TS,
)]
#[ts(export)]
pub enum BannerSize {
    #[default]
    #[serde(rename = "300x250")]
    MediumRectangle,
    #[serde(rename = "728x90")]
    Leaderboard,
    #[serde(rename = "160x600")]
    WideSkyscraper,
    #[serde(rename = "320x50")]
    MobileBanner,
}

impl BannerSize {
    pub const ALL: [BannerSize; 4] = [
        BannerSize::MediumRectangle,
        BannerSize::Leaderboard,
        BannerSize::WideSkyscraper,
        BannerSize::MobileBanner,
    ];

    /// Dimension identifier, e.g. `"300x250"`.
    pub const fn id(self) -> &'static str {
        match self {
            BannerSize::MediumRectangle => "300x250",
            BannerSize::Leaderboard => "728x90",
            BannerSize::WideSkyscraper => "160x600",
            BannerSize::MobileBanner => "320x50",
        }
    }

    /// Human-readable IAB name.
    pub const fn label(self) -> &'static str {
        match self {
            BannerSize::MediumRectangle => "Medium Rectangle",
            BannerSize::Leaderboard => "Leaderboard",
            BannerSize::WideSkyscraper => "Wide Skyscraper",
            BannerSize::MobileBanner => "Mobile Banner",
        }
    }

    /// Look up a banner by its exact dimension identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.id() == id)
    }
}

impl fmt::Display for BannerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id(), self.label())
    }
}
