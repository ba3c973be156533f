use anyhow::Result;
use clap::{Parser, Subcommand};

use finance_tracker::cli::{
    handle_audit_command, handle_budget_command, handle_expense_command, handle_export_command,
    handle_goal_command, handle_income_command, handle_loan_command, handle_prefs_command,
    handle_profile_command, handle_summary_command,
};
use finance_tracker::config::{paths::FinancePaths, settings::Settings};
use finance_tracker::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker",
    long_about = "Track income, expenses, loans and savings goals from the command line. \
                  Expenses, loan payments and goal contributions are only accepted while \
                  the remaining balance (income minus expenses) covers them."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income commands
    #[command(subcommand)]
    Income(finance_tracker::cli::IncomeCommands),

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(finance_tracker::cli::ExpenseCommands),

    /// Loan commands
    #[command(subcommand)]
    Loan(finance_tracker::cli::LoanCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(finance_tracker::cli::GoalCommands),

    /// Budget plan commands
    #[command(subcommand)]
    Budget(finance_tracker::cli::BudgetCommands),

    /// Show the balance summary
    Summary,

    /// Profile commands
    #[command(subcommand)]
    Profile(finance_tracker::cli::ProfileCommands),

    /// Export data
    #[command(subcommand)]
    Export(finance_tracker::cli::ExportCommands),

    /// Show recent changes
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Change preferences
    #[command(subcommand)]
    Prefs(finance_tracker::cli::PrefsCommands),

    /// Create the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    finance_tracker::init_tracing();

    let cli = Cli::parse();

    let paths = FinancePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Income(cmd)) => handle_income_command(&storage, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Loan(cmd)) => handle_loan_command(&storage, &settings, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&storage, &settings, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Summary) => handle_summary_command(&storage, &mut settings)?,
        Some(Commands::Profile(cmd)) => handle_profile_command(&storage, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&storage, cmd)?,
        Some(Commands::Audit { limit }) => handle_audit_command(&storage, limit)?,
        Some(Commands::Prefs(cmd)) => handle_prefs_command(&paths, &mut settings, cmd)?,
        Some(Commands::Init) => {
            println!("Initializing fintrack at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  fintrack income add 50000 --source Salary");
            println!("  fintrack expense add 250 \"Lunch\" --category Food");
            println!("  fintrack summary");
        }
        Some(Commands::Config) => {
            println!("fintrack configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Ledger file:      {}", paths.ledger_file().display());
            println!("Avatars:          {}", paths.avatars_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Budget reminder: {}", settings.budget_reminder);
            if let Some(shown) = settings.budget_reminded_on {
                println!("  Reminder last shown: {}", shown);
            }
            if !settings.dismissed_notices.is_empty() {
                let dismissed: Vec<_> = settings.dismissed_notices.iter().cloned().collect();
                println!("  Dismissed:       {}", dismissed.join(", "));
            }
        }
        None => {
            println!("fintrack - personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
        }
    }

    Ok(())
}
