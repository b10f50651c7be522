//! Progress and formatting CLI commands

use clap::Args;

use super::parse_money_arg;
use crate::config::settings::Settings;
use crate::error::PlannerResult;
use crate::services::{calculate_progress, progress_status};

#[derive(Args)]
pub struct ProgressArgs {
    /// Amount spent so far
    #[arg(allow_negative_numbers = true)]
    pub spent: String,

    /// Target amount for the category
    #[arg(allow_negative_numbers = true)]
    pub target: String,
}

#[derive(Args)]
pub struct FormatArgs {
    /// Amount in whole currency units
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
}

/// Handle the progress command
pub fn handle_progress_command(settings: &Settings, args: ProgressArgs) -> PlannerResult<()> {
    let spent = parse_money_arg("spent amount", &args.spent)?;
    let target = parse_money_arg("target amount", &args.target)?;

    let percentage = calculate_progress(spent, target);
    let status = progress_status(percentage);

    println!(
        "{} of {}: {}% ({})",
        settings.currency.format(spent),
        settings.currency.format(target),
        percentage,
        status
    );
    Ok(())
}

/// Handle the format command
pub fn handle_format_command(settings: &Settings, args: FormatArgs) -> PlannerResult<()> {
    let amount = parse_money_arg("amount", &args.amount)?;
    println!("{}", settings.currency.format(amount));
    Ok(())
}
