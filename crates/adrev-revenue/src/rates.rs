//! Fixed rate tables.
//!
//! Both tables are compile-time constants. Geography rates are in dollars
//! per unit of traffic; banner multipliers scale the summed geography
//! revenue.
//!
//! | Geo   | Rate |      | Banner  | Multiplier |
//! |-------|------|------|---------|------------|
//! | US    | 2.00 |      | 300x250 | 1.0        |
//! | CA    | 1.50 |      | 728x90  | 1.2        |
//! | GB    | 1.75 |      | 160x600 | 0.9        |
//! | DE    | 1.25 |      | 320x50  | 0.7        |
//! | Other | 0.50 |      |         |            |

use adrev_types::{BannerSize, Geo};

/// Revenue per unit of traffic for a geography.
pub const fn geo_rate(geo: Geo) -> f64 {
    match geo {
        Geo::Us => 2.00,
        Geo::Ca => 1.50,
        Geo::Gb => 1.75,
        Geo::De => 1.25,
        Geo::Other => 0.50,
    }
}

/// Revenue multiplier for a banner size.
pub const fn banner_multiplier(banner: BannerSize) -> f64 {
    match banner {
        BannerSize::MediumRectangle => 1.0,
        BannerSize::Leaderboard => 1.2,
        BannerSize::WideSkyscraper => 0.9,
        BannerSize::MobileBanner => 0.7,
    }
}

/// `(geo, rate)` for every geography.
pub fn geo_rates() -> impl Iterator<Item = (Geo, f64)> {
    Geo::ALL.into_iter().map(|geo| (geo, geo_rate(geo)))
}

/// `(banner, multiplier)` for every banner size.
pub fn banner_multipliers() -> impl Iterator<Item = (BannerSize, f64)> {
    BannerSize::ALL
        .into_iter()
        .map(|banner| (banner, banner_multiplier(banner)))
}
