//! One-shot bedtime estimate.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use betterrest_core::error::Result;
use betterrest_core::{BedtimeEstimate, BedtimeInputs, CoffeeIntake, SleepAmount, WakeTime};

#[derive(Args)]
pub struct EstimateArgs {
    /// Wake-up time (HH:MM, 24-hour)
    #[arg(long)]
    pub wake: Option<WakeTime>,
    /// Desired hours of sleep (4-12 in 0.25 steps)
    #[arg(long)]
    pub sleep: Option<SleepAmount>,
    /// Cups of coffee per day (1-20)
    #[arg(long)]
    pub coffee: Option<CoffeeIntake>,
    /// Model artifact to use instead of the configured one
    #[arg(long)]
    pub model: Option<PathBuf>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct EstimateOutput<'a> {
    inputs: &'a BedtimeInputs,
    #[serde(flatten)]
    estimate: &'a BedtimeEstimate,
}

pub fn run(args: EstimateArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path.as_deref())?;
    let defaults = config.default_inputs();
    let inputs = BedtimeInputs::new(
        args.wake.unwrap_or(defaults.wake_time),
        args.sleep.unwrap_or(defaults.sleep_amount),
        args.coffee.unwrap_or(defaults.coffee_intake),
    );

    let calculator = super::calculator(&config, args.model);
    let estimate = calculator.estimate(&inputs);

    if args.json {
        let output = EstimateOutput {
            inputs: &inputs,
            estimate: &estimate,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "Wake at {}, {} of sleep, {} of coffee",
            inputs.wake_time, inputs.sleep_amount, inputs.coffee_intake
        );
        println!("{}", estimate.title());
        println!("{}", estimate.message());
    }

    if !estimate.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
