use anyhow::Result;
use clap::{Parser, Subcommand};

use rollover_ledger::cli::{
    handle_breakdown_command, handle_build_command, handle_loans_command, handle_project_command,
    BreakdownArgs, BuildArgs, LoansArgs, ProjectArgs,
};
use rollover_ledger::config::{LedgerPaths, Settings};
use rollover_ledger::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Monthly budget ledger with balance rollover",
    long_about = "Rebuilds a month-by-month budget ledger from transactions, carrying \
                  each month's ending balance into the next. Projects future balances \
                  from recurring planned items and tracks personal loans."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the monthly ledger from a snapshot
    Build(BuildArgs),

    /// Project the balance of a future month
    #[command(alias = "proj")]
    Project(ProjectArgs),

    /// List loans with their derived status
    Loans(LoansArgs),

    /// Show income or expense totals by category
    Breakdown(BreakdownArgs),

    /// Write default settings to the configuration directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Build(args)) => handle_build_command(&settings, args)?,
        Some(Commands::Project(args)) => handle_project_command(&settings, args)?,
        Some(Commands::Loans(args)) => handle_loans_command(&settings, args)?,
        Some(Commands::Breakdown(args)) => handle_breakdown_command(&settings, args)?,
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("Already initialized at: {}", paths.base_dir().display());
            } else {
                settings.save(&paths)?;
                println!("Settings written to: {}", paths.settings_file().display());
            }
        }
        Some(Commands::Config) => {
            println!("Rollover Ledger Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Auto rollover:            {}", settings.rollover.auto_rollover);
            println!(
                "  Allow negative rollover:  {}",
                settings.rollover.allow_negative_rollover
            );
            println!("  Currency symbol:          {}", settings.currency_symbol);
            println!("  Date format:              {}", settings.date_format);
        }
        None => {
            println!("Rollover Ledger - monthly budgets with balance carry-over");
            println!();
            println!("Run 'ledger --help' for usage information.");
            println!("Run 'ledger build --file <snapshot>' to build a ledger.");
        }
    }

    Ok(())
}
