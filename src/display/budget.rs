//! Budget plan views

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{BudgetCategory, Money};
use crate::services::BudgetComparison;

use super::format::{money, percentage};

#[derive(Tabled)]
struct PlanRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Allocated")]
    allocated: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Allocated")]
    allocated: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Left")]
    left: String,
    #[tabled(rename = "Used")]
    used: String,
}

pub fn format_budget_plan(plan: &[BudgetCategory], symbol: &str) -> String {
    if plan.is_empty() {
        return "No budget plan set. Use `fintrack budget set --allocate CATEGORY=AMOUNT`.".to_string();
    }

    let rows = plan.iter().map(|row| PlanRow {
        category: row.category.to_string(),
        allocated: money(row.amount, symbol),
        share: row.percentage.map(percentage).unwrap_or_default(),
    });

    let total: Money = plan.iter().map(|r| r.amount).sum();
    format!(
        "{}\nTotal allocated: {}\n",
        Table::new(rows).with(Style::psql()),
        money(total, symbol)
    )
}

pub fn format_budget_comparison(
    comparison: &[BudgetComparison],
    unplanned: Money,
    symbol: &str,
) -> String {
    if comparison.is_empty() {
        return "No budget plan set.".to_string();
    }

    let rows = comparison.iter().map(|c| ComparisonRow {
        category: c.category.to_string(),
        allocated: money(c.allocated, symbol),
        spent: money(c.spent, symbol),
        left: if c.is_over_budget() {
            format!("{} over", money(-c.remaining, symbol))
        } else {
            money(c.remaining, symbol)
        },
        used: percentage(c.percent_used()),
    });

    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push('\n');
    if unplanned.is_positive() {
        output.push_str(&format!(
            "Spent outside the plan: {}\n",
            money(unplanned, symbol)
        ));
    }
    output
}
