//! Income and expense tables

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{ExpenseCategory, ExpenseEntry, ExpenseSource, IncomeEntry, Money};
use crate::services::CategorySpending;

use super::format::{money, percentage, truncate};

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Share")]
    share: String,
}

pub fn format_income_list(entries: &[IncomeEntry], symbol: &str) -> String {
    if entries.is_empty() {
        return "No income recorded.".to_string();
    }

    let rows = entries.iter().map(|e| IncomeRow {
        id: e.id.to_string(),
        date: e.date.to_string(),
        source: e.category.clone().unwrap_or_default(),
        description: truncate(e.description.as_deref().unwrap_or(""), 40),
        amount: money(e.amount, symbol),
    });

    let total: Money = entries.iter().map(|e| e.amount).sum();
    format!(
        "{}\nTotal income: {}\n",
        Table::new(rows).with(Style::psql()),
        money(total, symbol)
    )
}

pub fn format_expense_list(expenses: &[ExpenseEntry], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        date: e.date.to_string(),
        category: e.category.to_string(),
        description: match e.source {
            ExpenseSource::Manual => truncate(&e.description, 40),
            _ => format!("{} (auto)", truncate(&e.description, 33)),
        },
        amount: money(e.amount, symbol),
    });

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    format!(
        "{}\nTotal: {}\n",
        Table::new(rows).with(Style::psql()),
        money(total, symbol)
    )
}

/// Every category with its color and what has been spent in it
pub fn format_category_list(spending: &[CategorySpending], symbol: &str) -> String {
    let rows = ExpenseCategory::all().iter().map(|category| {
        let spent = spending.iter().find(|s| &s.category == category);
        CategoryRow {
            name: category.to_string(),
            color: category.color().to_string(),
            spent: money(spent.map(|s| s.amount).unwrap_or_default(), symbol),
            share: spent.map(|s| percentage(s.share)).unwrap_or_default(),
        }
    });

    // Custom categories only appear once something was spent in them
    let custom = spending
        .iter()
        .filter(|s| matches!(s.category, ExpenseCategory::Custom(_)))
        .map(|s| CategoryRow {
            name: s.category.to_string(),
            color: s.color.to_string(),
            spent: money(s.amount, symbol),
            share: percentage(s.share),
        });

    Table::new(rows.chain(custom))
        .with(Style::psql())
        .to_string()
}
