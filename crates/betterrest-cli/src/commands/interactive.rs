//! Line-driven session: each command changes one input and reprints the bedtime.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Args;

use betterrest_core::error::Result;
use betterrest_core::{BedtimeEstimate, BedtimeSession, SessionCommand};

#[derive(Args)]
pub struct InteractiveArgs {
    /// Model artifact to use instead of the configured one
    #[arg(long)]
    pub model: Option<PathBuf>,
}

const HELP: &str = "\
Commands:
  wake HH:MM      set the wake-up time
  sleep HOURS     set the desired sleep (4-12, 0.25 steps)
  coffee CUPS     set daily coffee (1-20)
  + / -           one sleep step up or down
  show            print the current inputs
  help            this text
  quit            leave";

fn print_estimate(out: &mut impl Write, estimate: &BedtimeEstimate) -> io::Result<()> {
    writeln!(out, "{}", estimate.title())?;
    writeln!(out, "  {}", estimate.message())
}

pub fn run(args: InteractiveArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path.as_deref())?;
    let calculator = super::calculator(&config, args.model);
    let mut session = BedtimeSession::new(&calculator, config.default_inputs());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{HELP}\n")?;
    print_estimate(&mut out, session.refresh())?;

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "help" | "?" => writeln!(out, "{HELP}")?,
            "show" => {
                let inputs = session.inputs();
                writeln!(
                    out,
                    "wake {}, sleep {}, coffee {}",
                    inputs.wake_time, inputs.sleep_amount, inputs.coffee_intake
                )?;
            }
            _ => match line.parse::<SessionCommand>() {
                Ok(command) => print_estimate(&mut out, session.apply(command))?,
                Err(e) => writeln!(out, "  {e}")?,
            },
        }
        out.flush()?;
    }
    Ok(())
}
