//! Balance summary view

use crate::services::{BalanceSummary, CategorySpending};

use super::format::{money, money_colored, percentage, progress_bar, separator};

const WIDTH: usize = 44;

/// Render the dashboard. `color` enables terminal color hints.
pub fn format_summary(
    summary: &BalanceSummary,
    spending: &[CategorySpending],
    symbol: &str,
    color: bool,
) -> String {
    let mut output = String::new();
    let line = |label: &str, value: String| format!("  {:<24}{:>18}\n", label, value);

    output.push_str("Balance summary\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&line("Total income", money(summary.total_income, symbol)));
    output.push_str(&line("Total expenses", money(summary.total_expenses, symbol)));
    output.push_str(&line("  Everyday spending", money(summary.everyday_spending, symbol)));
    output.push_str(&line("  Loan payments", money(summary.loan_payments, symbol)));
    output.push_str(&line(
        "  Savings contributions",
        money(summary.savings_contributions, symbol),
    ));
    output.push_str(&separator(WIDTH));
    output.push('\n');
    let remaining = if color {
        money_colored(summary.remaining_balance, symbol)
    } else {
        money(summary.remaining_balance, symbol)
    };
    output.push_str(&line("Remaining balance", remaining));
    output.push('\n');
    output.push_str(&line("Outstanding debt", money(summary.outstanding_debt, symbol)));
    output.push_str(&line("Total saved", money(summary.total_saved, symbol)));

    if !spending.is_empty() {
        output.push_str("\nSpending by category\n");
        for row in spending {
            output.push_str(&format!(
                "  {:<16}{:>14}  {} {}\n",
                row.category.to_string(),
                money(row.amount, symbol),
                progress_bar(row.share, 10),
                percentage(row.share)
            ));
        }
    }

    if summary.is_overspent() {
        output.push_str("\nWarning: expenses exceed income.\n");
    }

    output
}
