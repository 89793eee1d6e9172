//! Model artifact inspection.

use std::path::PathBuf;

use clap::Subcommand;

use betterrest_core::error::Result;
use betterrest_core::model::shared;
use betterrest_core::{ModelArtifact, ModelSource};

#[derive(Subcommand)]
pub enum ModelAction {
    /// Show the artifact that estimates would use
    Show {
        /// Model artifact to show instead of the configured one
        #[arg(long)]
        model: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate an artifact file without installing it
    Check {
        /// Path to a JSON model artifact
        path: PathBuf,
    },
}

pub fn run(action: ModelAction, config_path: Option<PathBuf>) -> Result<()> {
    match action {
        ModelAction::Show { model, json } => {
            let config = super::load_config(config_path.as_deref())?;
            let source = super::model_source(&config, model);
            let loaded = shared::get_or_load(&source)?;
            let artifact = loaded.artifact();
            if json {
                println!("{}", serde_json::to_string_pretty(artifact)?);
            } else {
                print_artifact(&source, artifact);
            }
        }
        ModelAction::Check { path } => {
            let artifact = ModelArtifact::from_file(&path)?;
            println!("ok: {} {}", artifact.name, artifact.version);
        }
    }
    Ok(())
}

fn print_artifact(source: &ModelSource, artifact: &ModelArtifact) {
    let unit = serde_json::to_value(artifact.output_unit)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();
    println!("Source:     {source}");
    println!("Name:       {}", artifact.name);
    println!("Version:    {}", artifact.version);
    println!("Output:     {unit}");
    println!("Intercept:  {}", artifact.intercept);
    println!("Weights:");
    println!("  wake            {}", artifact.coefficients.wake);
    println!("  estimated_sleep {}", artifact.coefficients.estimated_sleep);
    println!("  coffee          {}", artifact.coefficients.coffee);
}
