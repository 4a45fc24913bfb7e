//! Rate table listings.

use adrev_revenue::rates::{banner_multipliers, geo_rates};

use super::Output;

/// List banner sizes with labels and multipliers.
pub fn banners() -> Output {
    let rows: Vec<_> = banner_multipliers()
        .map(|(banner, multiplier)| {
            serde_json::json!({
                "id": banner.id(),
                "label": banner.label(),
                "multiplier": multiplier,
            })
        })
        .collect();
    let text = banner_multipliers()
        .map(|(banner, multiplier)| {
            format!("{:<8} {:<17} x{multiplier:.1}", banner.id(), banner.label())
        })
        .collect::<Vec<_>>()
        .join("\n");

    Output {
        json: serde_json::json!(rows),
        text,
    }
}

/// List the revenue rate of every geography.
pub fn rates() -> Output {
    let rows: Vec<_> = geo_rates()
        .map(|(geo, rate)| serde_json::json!({ "geo": geo, "rate": rate }))
        .collect();
    let text = geo_rates()
        .map(|(geo, rate)| format!("{:<5} {rate:.2}", geo.code()))
        .collect::<Vec<_>>()
        .join("\n");

    Output {
        json: serde_json::json!(rows),
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banners_listing() {
        let output = banners();
        assert_eq!(output.json.as_array().map(Vec::len), Some(4));
        assert_eq!(output.json[1]["id"], "728x90");
        assert_eq!(output.json[1]["multiplier"], 1.2);
        assert!(output
            .text
            .lines()
            .any(|l| l.starts_with("160x600") && l.contains("x0.9")));
    }

    #[test]
    fn test_rates_listing() {
        let output = rates();
        assert_eq!(output.json[0]["geo"], "US");
        assert_eq!(output.json[4]["rate"], 0.5);
        assert_eq!(output.text.lines().next(), Some("US    2.00"));
    }
}
