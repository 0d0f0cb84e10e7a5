use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A mandi price quote, ₹ per quintal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MandiPrice {
    pub market: String,
    pub state: String,
    pub district: String,
    pub commodity: String,
    pub min_price: f64,
    pub max_price: f64,
    pub modal_price: f64,
    pub date: NaiveDate,
    /// Distance from the farm, km
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl MandiPrice {
    pub fn with_distance(mut self, distance_km: f64) -> Self {
        self.distance = Some(distance_km);
        self
    }

    pub fn price_spread(&self) -> f64 {
        self.max_price - self.min_price
    }
}

/// Market list filter; `None` or `"all"` leaves a field unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFilter {
    pub district: Option<String>,
    pub market: Option<String>,
    pub commodity: Option<String>,
}

impl PriceFilter {
    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.market = Some(market.into());
        self
    }

    pub fn with_commodity(mut self, commodity: impl Into<String>) -> Self {
        self.commodity = Some(commodity.into());
        self
    }

    pub fn matches(&self, price: &MandiPrice) -> bool {
        field_matches(self.district.as_deref(), &price.district)
            && field_matches(self.market.as_deref(), &price.market)
            && field_matches(self.commodity.as_deref(), &price.commodity)
    }
}

fn field_matches(wanted: Option<&str>, actual: &str) -> bool {
    match wanted {
        None => true,
        Some(w) if w.eq_ignore_ascii_case("all") => true,
        Some(w) => w.eq_ignore_ascii_case(actual),
    }
}

/// Distinct values available for each filter field, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub districts: Vec<String>,
    pub markets: Vec<String>,
    pub commodities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MandiPrice {
        MandiPrice {
            market: "APMC Mysore".into(),
            state: "Karnataka".into(),
            district: "Mysore".into(),
            commodity: "Rice".into(),
            min_price: 2100.0,
            max_price: 2500.0,
            modal_price: 2300.0,
            date: NaiveDate::from_ymd_opt(2024, 11, 2).unwrap(),
            distance: None,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(PriceFilter::default().matches(&sample()));
    }

    #[test]
    fn all_is_a_wildcard() {
        let filter = PriceFilter::default()
            .with_district("all")
            .with_commodity("ALL");
        assert!(filter.matches(&sample()));
    }

    #[test]
    fn filter_is_case_insensitive_exact_match() {
        assert!(PriceFilter::default()
            .with_market("apmc mysore")
            .matches(&sample()));
        assert!(!PriceFilter::default().with_market("APMC").matches(&sample()));
        assert!(!PriceFilter::default()
            .with_commodity("Wheat")
            .matches(&sample()));
    }

    #[test]
    fn mandi_price_json_shape() {
        let json = r#"{
            "market": "APMC Hubli", "state": "Karnataka", "district": "Dharwad",
            "commodity": "Onion", "minPrice": 1200, "maxPrice": 1800,
            "modalPrice": 1500, "date": "2024-11-02", "distance": 12
        }"#;
        let price: MandiPrice = serde_json::from_str(json).unwrap();
        assert_eq!(price.modal_price, 1500.0);
        assert_eq!(price.distance, Some(12.0));
        assert_eq!(price.price_spread(), 600.0);
    }
}
