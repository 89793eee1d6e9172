//! Bedtime for every desired sleep amount at a fixed wake time.

use std::path::PathBuf;

use clap::Args;

use betterrest_core::error::Result;
use betterrest_core::{CoffeeIntake, WakeTime};

#[derive(Args)]
pub struct SweepArgs {
    /// Wake-up time (HH:MM, 24-hour)
    #[arg(long)]
    pub wake: Option<WakeTime>,
    /// Cups of coffee per day (1-20)
    #[arg(long)]
    pub coffee: Option<CoffeeIntake>,
    /// Model artifact to use instead of the configured one
    #[arg(long)]
    pub model: Option<PathBuf>,
}

pub fn run(args: SweepArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path.as_deref())?;
    let defaults = config.default_inputs();
    let wake = args.wake.unwrap_or(defaults.wake_time);
    let coffee = args.coffee.unwrap_or(defaults.coffee_intake);

    let calculator = super::calculator(&config, args.model);
    let rows = calculator.sweep(wake, coffee);

    println!("\nBedtimes for waking at {wake} with {coffee} of coffee\n");
    println!("{:>8}  {}", "Sleep", "Bedtime");
    println!("{}", "─".repeat(24));
    for (amount, estimate) in rows {
        println!("{:>6.2} h  {}", amount.hours(), estimate.message());
    }
    Ok(())
}
