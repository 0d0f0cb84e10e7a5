use crate::models::{Expense, ExpenseCategory, ProfitEstimate};

/// Expected profit for a season.
///
/// `expected_yield` is in quintals and `modal_price` in ₹ per quintal, so
/// revenue comes out in ₹ like the expenses.
pub fn estimate_profit(expenses: &[Expense], expected_yield: f64, modal_price: f64) -> ProfitEstimate {
    // Fold from +0.0; float `sum` of nothing is -0.0
    let total_expenses = expenses.iter().fold(0.0, |acc, e| acc + e.amount);
    let expected_revenue = expected_yield * modal_price;
    let profit_or_loss = expected_revenue - total_expenses;

    ProfitEstimate {
        total_expenses,
        expected_yield,
        expected_revenue,
        profit_or_loss,
        is_profitable: profit_or_loss > 0.0,
    }
}

/// Spend per category, in [`ExpenseCategory::all`] order, skipping empty ones.
pub fn expenses_by_category(expenses: &[Expense]) -> Vec<(ExpenseCategory, f64)> {
    ExpenseCategory::all()
        .iter()
        .filter_map(|category| {
            let mut matching = expenses.iter().filter(|e| e.category == *category).peekable();
            matching.peek()?;
            Some((*category, matching.map(|e| e.amount).sum::<f64>()))
        })
        .collect()
}
