//! Savings goal views

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::SavingGoal;
use crate::services::GoalContribution;

use super::format::{money, percentage, progress_bar};

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
}

pub fn format_goal_list(goals: &[SavingGoal], today: NaiveDate, symbol: &str) -> String {
    if goals.is_empty() {
        return "No savings goals found.".to_string();
    }

    let rows = goals.iter().map(|goal| GoalRow {
        title: goal.title.clone(),
        saved: money(goal.current_amount, symbol),
        target: money(goal.target_amount, symbol),
        progress: format!(
            "{} {}",
            progress_bar(goal.progress_percent(), 10),
            percentage(goal.progress_percent())
        ),
        deadline: match goal.deadline {
            Some(d) if goal.is_overdue(today) => format!("{} (overdue)", d),
            Some(d) => d.to_string(),
            None => String::new(),
        },
    });

    Table::new(rows).with(Style::psql()).to_string()
}

pub fn format_goal_details(goal: &SavingGoal, today: NaiveDate, symbol: &str) -> String {
    let mut output = format!("Savings goal: {}\n", goal.title);
    output.push_str(&format!("  ID:        {}\n", goal.id));
    output.push_str(&format!("  Target:    {}\n", money(goal.target_amount, symbol)));
    output.push_str(&format!("  Saved:     {}\n", money(goal.current_amount, symbol)));
    output.push_str(&format!("  Still to go: {}\n", money(goal.remaining(), symbol)));
    if let Some(deadline) = goal.deadline {
        let note = if goal.is_overdue(today) { " (overdue)" } else { "" };
        output.push_str(&format!("  Deadline:  {}{}\n", deadline, note));
    }
    output.push_str(&format!(
        "  Progress:  {} {}\n",
        progress_bar(goal.progress_percent(), 20),
        percentage(goal.progress_percent())
    ));
    if goal.is_complete() {
        output.push_str("  Status:    Complete\n");
    }
    output
}

pub fn format_contribution(result: &GoalContribution, symbol: &str) -> String {
    let goal = &result.goal;
    let mut line = format!(
        "Added {} to '{}' ({} of {}).",
        money(result.expense.amount, symbol),
        goal.title,
        money(goal.current_amount, symbol),
        money(goal.target_amount, symbol)
    );
    if result.completed {
        line.push_str(" Goal reached!");
    }
    line
}
