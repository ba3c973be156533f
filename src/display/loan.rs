//! Loan views

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Loan;
use crate::services::LoanPayment;

use super::format::{money, percentage, progress_bar};

#[derive(Tabled)]
struct LoanRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Monthly")]
    monthly: String,
    #[tabled(rename = "Next due")]
    next_due: String,
    #[tabled(rename = "Repaid")]
    repaid: String,
}

pub fn format_loan_list(loans: &[Loan], symbol: &str) -> String {
    if loans.is_empty() {
        return "No loans found.".to_string();
    }

    let rows = loans.iter().map(|loan| LoanRow {
        title: loan.title.clone(),
        remaining: money(loan.remaining_amount, symbol),
        monthly: money(loan.monthly_payment, symbol),
        next_due: if loan.is_paid_off() {
            "paid off".to_string()
        } else {
            loan.next_payment_date.to_string()
        },
        repaid: percentage(loan.progress_percent()),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

pub fn format_loan_details(loan: &Loan, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Loan: {}\n", loan.title));
    output.push_str(&format!("  ID:               {}\n", loan.id));
    output.push_str(&format!("  Total:            {}\n", money(loan.total_amount, symbol)));
    output.push_str(&format!("  Remaining:        {}\n", money(loan.remaining_amount, symbol)));
    output.push_str(&format!("  Monthly payment:  {}\n", money(loan.monthly_payment, symbol)));
    output.push_str(&format!("  Due day:          {}\n", loan.due_day));
    if loan.is_paid_off() {
        output.push_str("  Status:           Paid off\n");
    } else {
        output.push_str(&format!("  Next payment:     {}\n", loan.next_payment_date));
        output.push_str(&format!("  Installments left: {}\n", loan.installments_left()));
    }
    output.push_str(&format!(
        "  Progress:         {} {}\n",
        progress_bar(loan.progress_percent(), 20),
        percentage(loan.progress_percent())
    ));

    output
}

pub fn format_loan_payment(payment: &LoanPayment, symbol: &str) -> String {
    let loan = &payment.loan;
    if payment.paid_off {
        format!(
            "Paid {} towards '{}'. The loan is paid off.",
            money(payment.applied, symbol),
            loan.title
        )
    } else {
        format!(
            "Paid {} towards '{}'. Remaining: {}, next payment due {}.",
            money(payment.applied, symbol),
            loan.title,
            money(loan.remaining_amount, symbol),
            loan.next_payment_date
        )
    }
}
