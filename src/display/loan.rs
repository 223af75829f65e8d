//! Loan display formatting

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Loan;
use crate::services::loan::view;

use super::{format_date, format_percentage};

#[derive(Tabled)]
struct LoanRow {
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Person")]
    person: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Paid")]
    paid: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format loans as a table with statuses as of `today`
///
/// Due dates are written with `date_format`, a chrono `strftime` pattern.
pub fn format_loan_list(
    loans: &[Loan],
    today: NaiveDate,
    symbol: &str,
    date_format: &str,
) -> String {
    if loans.is_empty() {
        return "No loans found.".to_string();
    }

    let rows = loans.iter().map(|loan| {
        let view = view(loan, today);
        LoanRow {
            kind: loan.kind.to_string(),
            person: loan.person.clone(),
            amount: loan.amount().format_with_symbol(symbol),
            paid: view.total_paid.format_with_symbol(symbol),
            remaining: view.remaining.format_with_symbol(symbol),
            progress: format_percentage(view.progress_percent),
            due: loan
                .due_date()
                .map(|d| format_date(d, date_format))
                .unwrap_or_default(),
            status: view.status.to_string(),
        }
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LoanPayment, LoanType, Money};
    use crate::services::loan::{add_payment, open};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_loan_list() {
        let today = date(2024, 6, 1);
        let loan = open(LoanType::Given, "Sam", Money::from_units(200), date(2024, 1, 1), None);
        let loan = add_payment(&loan, LoanPayment::new(today, Money::from_units(50))).unwrap();

        let output = format_loan_list(&[loan], today, "$", "%Y-%m-%d");
        assert!(output.contains("Sam"));
        assert!(output.contains("partially_paid"));
        assert!(output.contains("$150.00"));
        assert!(output.contains("25%"));
    }

    #[test]
    fn test_due_date_uses_configured_format() {
        let loan = open(
            LoanType::Taken,
            "Ana",
            Money::from_units(80),
            date(2024, 1, 1),
            Some(date(2024, 3, 9)),
        );

        let output = format_loan_list(&[loan.clone()], date(2024, 2, 1), "€", "%d/%m/%Y");
        assert!(output.contains("09/03/2024"));
        assert!(!output.contains("2024-03-09"));
        assert!(output.contains("pending"));

        let later = format_loan_list(&[loan], date(2024, 4, 1), "€", "%d/%m/%Y");
        assert!(later.contains("overdue"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_loan_list(&[], date(2024, 1, 1), "$", "%Y-%m-%d"), "No loans found.");
    }
}
