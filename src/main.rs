use anyhow::Result;
use clap::{Parser, Subcommand};

use kakeibo_plan::cli::{
    handle_allocations_command, handle_format_command, handle_plan_command,
    handle_progress_command, handle_recommend_command, handle_savings_command,
    handle_summary_command, FormatArgs, PlanArgs, ProgressArgs, RecommendArgs, SavingsArgs,
    SummaryArgs,
};
use kakeibo_plan::config::{paths::PlannerPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "kakeibo",
    version,
    about = "50/30/20 budget planning for a household ledger",
    long_about = "kakeibo turns a monthly income into a 50/30/20 budget plan, \
                  checks category spending against targets, and summarizes \
                  ledger snapshots exported from the app backend."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a budget plan from a monthly income
    Plan(PlanArgs),

    /// Show the recommended budget for one category
    Recommend(RecommendArgs),

    /// Show spending progress against a target
    Progress(ProgressArgs),

    /// Format an amount as currency
    Format(FormatArgs),

    /// List the allocation table in use
    Allocations,

    /// Summarize a ledger snapshot
    Summary(SummaryArgs),

    /// Evaluate a savings goal
    Savings(SavingsArgs),

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    kakeibo_plan::logging::init();

    let cli = Cli::parse();

    let paths = PlannerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Plan(args)) => handle_plan_command(&settings, args)?,
        Some(Commands::Recommend(args)) => handle_recommend_command(&settings, args)?,
        Some(Commands::Progress(args)) => handle_progress_command(&settings, args)?,
        Some(Commands::Format(args)) => handle_format_command(&settings, args)?,
        Some(Commands::Allocations) => handle_allocations_command(&settings)?,
        Some(Commands::Summary(args)) => handle_summary_command(&settings, args)?,
        Some(Commands::Savings(args)) => handle_savings_command(&settings, args)?,
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!(
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!("Wrote default settings to: {}", paths.settings_file().display());
            }
        }
        Some(Commands::Config) => {
            println!("kakeibo configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Target income: {}", settings.currency.format(settings.target_income));
            println!("  Salary day:    {}", settings.salary_day);
            println!(
                "  Currency:      {} ({}, {})",
                settings.currency.currency_code,
                settings.currency.locale,
                settings.currency.symbol
            );
            println!(
                "  Allocations:   {}",
                if settings.allocations.is_some() { "custom" } else { "built-in 50/30/20" }
            );
        }
        None => {
            println!("kakeibo - 50/30/20 budget planning");
            println!();
            println!("Run 'kakeibo --help' for usage information.");
            println!("Run 'kakeibo plan' to see a plan for your target income.");
        }
    }

    Ok(())
}
