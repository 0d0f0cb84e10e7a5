use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Seed,
    Fertilizer,
    Labor,
    Pesticide,
    Equipment,
    Other,
}

impl ExpenseCategory {
    pub fn all() -> &'static [ExpenseCategory] {
        &[
            ExpenseCategory::Seed,
            ExpenseCategory::Fertilizer,
            ExpenseCategory::Labor,
            ExpenseCategory::Pesticide,
            ExpenseCategory::Equipment,
            ExpenseCategory::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Seed => "Seeds",
            ExpenseCategory::Fertilizer => "Fertilizer",
            ExpenseCategory::Labor => "Labor",
            ExpenseCategory::Pesticide => "Pesticide",
            ExpenseCategory::Equipment => "Equipment",
            ExpenseCategory::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "seed" | "seeds" => Some(ExpenseCategory::Seed),
            "fertilizer" | "fertiliser" => Some(ExpenseCategory::Fertilizer),
            "labor" | "labour" => Some(ExpenseCategory::Labor),
            "pesticide" => Some(ExpenseCategory::Pesticide),
            "equipment" => Some(ExpenseCategory::Equipment),
            "other" => Some(ExpenseCategory::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single farm expense, ₹.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub category: ExpenseCategory,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(category: ExpenseCategory, amount: f64, date: NaiveDate) -> Self {
        Self {
            category,
            amount,
            description: String::new(),
            date,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitEstimate {
    pub total_expenses: f64,
    /// Quintals
    pub expected_yield: f64,
    pub expected_revenue: f64,
    pub profit_or_loss: f64,
    pub is_profitable: bool,
}
