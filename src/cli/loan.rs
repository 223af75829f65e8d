//! CLI command for loans

use clap::Args;

use super::SnapshotArgs;
use crate::config::Settings;
use crate::display::format_loan_list;
use crate::error::LedgerResult;
use crate::models::{Loan, LoanStatus};
use crate::services::loan::{derive_status, view, LoanView};

#[derive(Args, Debug)]
pub struct LoansArgs {
    #[command(flatten)]
    pub snapshot: SnapshotArgs,

    /// Only show loans that are not completed
    #[arg(long)]
    pub open: bool,

    /// Print loans with their derived status as JSON
    #[arg(long)]
    pub json: bool,
}

/// List loans with statuses derived as of the reference date
pub fn handle_loans_command(settings: &Settings, args: LoansArgs) -> LedgerResult<()> {
    let today = args.snapshot.today()?;
    let snapshot = args.snapshot.load()?;

    let loans: Vec<Loan> = snapshot
        .loans
        .into_iter()
        .filter(|loan| !args.open || derive_status(loan, today) != LoanStatus::Completed)
        .collect();

    if args.json {
        let views: Vec<LoanView<'_>> = loans.iter().map(|loan| view(loan, today)).collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    println!(
        "{}",
        format_loan_list(&loans, today, &settings.currency_symbol, &settings.date_format)
    );

    let overdue = loans
        .iter()
        .filter(|loan| derive_status(loan, today) == LoanStatus::Overdue)
        .count();
    if overdue > 0 {
        println!("\n{} overdue loan(s)", overdue);
    }

    Ok(())
}
