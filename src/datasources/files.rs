use crate::error::{AgroPulseError, Result};
use crate::models::{Expense, MandiPrice};
use serde::de::DeserializeOwned;
use std::path::Path;

fn load_json_list<T: DeserializeOwned>(path: &Path, what: &str) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        AgroPulseError::DataSourceUnavailable(format!("Cannot read {} {:?}: {}", what, path, e))
    })?;

    let items: Vec<T> = serde_json::from_str(&content)?;
    tracing::debug!(count = items.len(), path = %path.display(), "Loaded {}", what);
    Ok(items)
}

/// Load a JSON array of mandi price quotes.
pub fn load_prices(path: &Path) -> Result<Vec<MandiPrice>> {
    let prices: Vec<MandiPrice> = load_json_list(path, "prices")?;

    if let Some(bad) = prices.iter().find(|p| p.min_price > p.max_price) {
        tracing::warn!(
            market = %bad.market,
            commodity = %bad.commodity,
            "Price quote has min above max"
        );
    }

    Ok(prices)
}

/// Load a JSON array of expenses; negative amounts are rejected.
pub fn load_expenses(path: &Path) -> Result<Vec<Expense>> {
    let expenses: Vec<Expense> = load_json_list(path, "expenses")?;

    if let Some(bad) = expenses.iter().find(|e| e.amount < 0.0) {
        return Err(AgroPulseError::InvalidData(format!(
            "Negative expense amount {} on {}",
            bad.amount, bad.date
        )));
    }

    Ok(expenses)
}
