use crate::models::{FilterOptions, MandiPrice, PriceFilter};
use std::collections::BTreeSet;

/// ₹ per quintal knocked off for every km of travel to the market
pub const DISTANCE_PENALTY_PER_KM: f64 = 10.0;

/// Modal price discounted by the distance to the market.
pub fn market_score(price: &MandiPrice) -> f64 {
    price.modal_price - price.distance.unwrap_or(0.0) * DISTANCE_PENALTY_PER_KM
}

/// Highest distance-discounted price; ties keep the earlier quote.
///
/// Returns `None` for an empty list.
pub fn select_best_market(prices: &[MandiPrice]) -> Option<&MandiPrice> {
    prices.iter().fold(None, |best, current| match best {
        Some(b) if market_score(current) <= market_score(b) => Some(b),
        _ => Some(current),
    })
}

pub fn best_market_recommendation(price: &MandiPrice) -> String {
    format!(
        "Best price for {}: ₹{:.0}/quintal at {}",
        price.commodity, price.modal_price, price.market
    )
}

/// Quotes matching `filter`, in input order.
pub fn filter_prices<'a>(prices: &'a [MandiPrice], filter: &PriceFilter) -> Vec<&'a MandiPrice> {
    prices.iter().filter(|p| filter.matches(p)).collect()
}

pub fn filter_options(prices: &[MandiPrice]) -> FilterOptions {
    let mut districts = BTreeSet::new();
    let mut markets = BTreeSet::new();
    let mut commodities = BTreeSet::new();

    for price in prices {
        districts.insert(price.district.clone());
        markets.insert(price.market.clone());
        commodities.insert(price.commodity.clone());
    }

    FilterOptions {
        districts: districts.into_iter().collect(),
        markets: markets.into_iter().collect(),
        commodities: commodities.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn quote(market: &str, district: &str, commodity: &str, modal: f64) -> MandiPrice {
        MandiPrice {
            market: market.into(),
            state: "Karnataka".into(),
            district: district.into(),
            commodity: commodity.into(),
            min_price: modal - 200.0,
            max_price: modal + 300.0,
            modal_price: modal,
            date: NaiveDate::from_ymd_opt(2024, 11, 2).unwrap(),
            distance: None,
        }
    }

    #[test]
    fn distance_discount_picks_nearer_market() {
        let prices = vec![
            quote("APMC Mysore", "Mysore", "Rice", 2000.0).with_distance(5.0),
            quote("APMC Belgaum", "Belgaum", "Rice", 2400.0).with_distance(50.0),
            quote("APMC Hubli", "Dharwad", "Rice", 2100.0).with_distance(10.0),
        ];
        let scores: Vec<f64> = prices.iter().map(market_score).collect();
        assert_eq!(scores, vec![1950.0, 1900.0, 2000.0]);

        let best = select_best_market(&prices).unwrap();
        assert_eq!(best.market, "APMC Hubli");
    }

    #[test]
    fn missing_distance_counts_as_zero() {
        let prices = vec![
            quote("APMC Mysore", "Mysore", "Rice", 2000.0).with_distance(1.0),
            quote("APMC Mandya", "Mandya", "Rice", 2000.0),
        ];
        assert_eq!(select_best_market(&prices).unwrap().market, "APMC Mandya");
    }

    #[test]
    fn ties_keep_first_quote() {
        let prices = vec![
            quote("APMC A", "Mysore", "Rice", 2000.0),
            quote("APMC B", "Mysore", "Rice", 2100.0).with_distance(10.0),
            quote("APMC C", "Mysore", "Rice", 2000.0),
        ];
        assert_eq!(select_best_market(&prices).unwrap().market, "APMC A");
    }

    #[test]
    fn repeated_calls_agree() {
        let prices = vec![
            quote("APMC Mysore", "Mysore", "Rice", 2000.0).with_distance(5.0),
            quote("APMC Belgaum", "Belgaum", "Rice", 2400.0).with_distance(50.0),
            quote("APMC Hubli", "Dharwad", "Rice", 2100.0).with_distance(10.0),
        ];
        let first = select_best_market(&prices).unwrap();
        let second = select_best_market(&prices).unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, &prices[2]));
    }

    #[test]
    fn empty_list_has_no_best_market() {
        assert!(select_best_market(&[]).is_none());
    }

    #[test]
    fn recommendation_text() {
        let price = quote("APMC Hubli", "Dharwad", "Onion", 1550.0);
        assert_eq!(
            best_market_recommendation(&price),
            "Best price for Onion: ₹1550/quintal at APMC Hubli"
        );
    }

    #[test]
    fn filtering_keeps_order() {
        let prices = vec![
            quote("APMC Mysore", "Mysore", "Rice", 2000.0),
            quote("APMC Hubli", "Dharwad", "Onion", 1500.0),
            quote("APMC Nanjangud", "Mysore", "Onion", 1450.0),
            quote("APMC Mysore", "Mysore", "Onion", 1480.0),
        ];

        let filter = PriceFilter::default().with_district("mysore").with_commodity("Onion");
        let matched: Vec<&str> = filter_prices(&prices, &filter)
            .iter()
            .map(|p| p.market.as_str())
            .collect();
        assert_eq!(matched, vec!["APMC Nanjangud", "APMC Mysore"]);

        let all = PriceFilter::default().with_market("all");
        assert_eq!(filter_prices(&prices, &all).len(), 4);
    }

    #[test]
    fn filter_options_are_sorted_and_unique() {
        let prices = vec![
            quote("APMC Mysore", "Mysore", "Rice", 2000.0),
            quote("APMC Hubli", "Dharwad", "Onion", 1500.0),
            quote("APMC Mysore", "Mysore", "Onion", 1480.0),
        ];
        let options = filter_options(&prices);
        assert_eq!(options.districts, vec!["Dharwad", "Mysore"]);
        assert_eq!(options.markets, vec!["APMC Hubli", "APMC Mysore"]);
        assert_eq!(options.commodities, vec!["Onion", "Rice"]);
    }
}
