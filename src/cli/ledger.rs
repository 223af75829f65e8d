//! CLI commands for the ledger: build, project and breakdown

use clap::Args;
use std::io::Write;

use super::{build_from_args, parse_month, OutputFormat, SnapshotArgs};
use crate::config::Settings;
use crate::display::{format_breakdown, format_ledger, format_projections};
use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_ledger_csv, export_ledger_json, export_ledger_yaml};
use crate::models::{FutureTransaction, MonthKey, TransactionType};
use crate::services::{category_breakdown, items_for_month, ProjectionEngine};

#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub snapshot: SnapshotArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub snapshot: SnapshotArgs,

    /// Month to project (YYYY-MM)
    #[arg(short, long)]
    pub month: String,

    /// Last month of a range to project (YYYY-MM)
    #[arg(long)]
    pub to: Option<String>,
}

#[derive(Args, Debug)]
pub struct BreakdownArgs {
    #[command(flatten)]
    pub snapshot: SnapshotArgs,

    /// Month to break down (YYYY-MM); defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,

    /// Break down income instead of expenses
    #[arg(long)]
    pub income: bool,
}

/// Build the ledger and print or export it
pub fn handle_build_command(settings: &Settings, args: BuildArgs) -> LedgerResult<()> {
    let (_, budgets, _, _) = build_from_args(&args.snapshot, settings)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Table => {
            writeln!(out, "{}", format_ledger(&budgets, &settings.currency_symbol))?;
        }
        OutputFormat::Json => export_ledger_json(&budgets, &mut out)?,
        OutputFormat::Yaml => export_ledger_yaml(&budgets, &mut out)?,
        OutputFormat::Csv => export_ledger_csv(&budgets, &mut out)?,
    }

    Ok(())
}

/// Project one month or a range of months
pub fn handle_project_command(settings: &Settings, args: ProjectArgs) -> LedgerResult<()> {
    let from = parse_month(&args.month)?;
    let to = match &args.to {
        Some(s) => parse_month(s)?,
        None => from,
    };
    if to < from {
        return Err(LedgerError::Validation(format!(
            "Range end {} is before start {}",
            to, from
        )));
    }

    let (snapshot, budgets, _, today) = build_from_args(&args.snapshot, settings)?;
    let engine = ProjectionEngine::new(&snapshot.future_transactions, &budgets, today);
    let projections = engine.project_range(from, to);

    println!(
        "{}",
        format_projections(&projections, &budgets, &settings.currency_symbol)
    );

    if from == to {
        print_planned_items(&snapshot.future_transactions, from, settings);
    }

    Ok(())
}

fn print_planned_items(
    items: &[FutureTransaction],
    month: MonthKey,
    settings: &Settings,
) {
    let planned = items_for_month(items, month);
    if planned.is_empty() {
        return;
    }

    println!("\nPlanned in {}:", month);
    for item in planned {
        let sign = match item.kind {
            TransactionType::Income => "+",
            TransactionType::Expense => "-",
        };
        println!(
            "  {}{:>12}  {} ({})",
            sign,
            item.amount.format_with_symbol(&settings.currency_symbol),
            item.description,
            item.frequency
        );
    }
}

/// Show per-category totals for a month
pub fn handle_breakdown_command(settings: &Settings, args: BreakdownArgs) -> LedgerResult<()> {
    let today = args.snapshot.today()?;
    let snapshot = args.snapshot.load()?;
    let month = match &args.month {
        Some(s) => parse_month(s)?,
        None => MonthKey::from_date(today),
    };
    let kind = if args.income {
        TransactionType::Income
    } else {
        TransactionType::Expense
    };

    let totals = category_breakdown(&snapshot.transactions, month, kind, today);
    println!("{} by category: {}\n", kind, month);
    println!("{}", format_breakdown(&totals, &settings.currency_symbol));

    Ok(())
}
