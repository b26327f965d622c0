use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use archetype_classifier::input::{RangePolicy, load_sessions};
use archetype_classifier::logging;
use archetype_classifier::model::axes::RawScores;
use archetype_classifier::model::thresholds::ClassifierConfig;
use archetype_classifier::pipeline::stage4_classify::Classifier;
use archetype_classifier::pipeline::stage5_report::{
    ReportContext, classify_sessions, write_reports,
};
use archetype_classifier::report::json::{render_classification_json, render_profiles_json};
use archetype_classifier::report::text::{render_classification_text, render_profiles_text};

const TOOL_NAME: &str = "archetype-classifier";

#[derive(Debug, Parser)]
#[command(
    name = "archetype-classifier",
    about = "Score four-axis questionnaire totals into productivity archetypes",
    version
)]
struct Cli {
    /// JSON classifier config (confidence bands, balanced window)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify a single set of raw axis scores
    Classify {
        #[arg(long, allow_negative_numbers = true)]
        structure: i32,
        #[arg(long, allow_negative_numbers = true)]
        motivation: i32,
        #[arg(long, allow_negative_numbers = true)]
        cognitive: i32,
        #[arg(long, allow_negative_numbers = true)]
        task: i32,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify a file of sessions and write reports
    Run {
        /// JSON array or JSON-lines session file
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Reject sessions with raw scores outside 7..=35 instead of clamping
        #[arg(long)]
        strict: bool,
    },
    /// List the archetype profile table
    Profiles {
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    logging::init("info");
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref())?;
    let classifier = Classifier::new(config)?;

    match cli.command {
        Command::Classify {
            structure,
            motivation,
            cognitive,
            task,
            json,
        } => {
            let raw = RawScores::new(structure, motivation, cognitive, task);
            let out_of_range = raw.out_of_range_axes();
            if !out_of_range.is_empty() {
                tracing::warn!(axes = ?out_of_range, "raw scores outside 7..=35; clamping");
            }
            let result = classifier.classify(&raw);
            if json {
                println!("{}", render_classification_json(&result)?);
            } else {
                print!("{}", render_classification_text(&result));
            }
        }
        Command::Run { input, out, strict } => {
            let policy = if strict {
                RangePolicy::Reject
            } else {
                RangePolicy::Clamp
            };
            let sessions = load_sessions(&input, policy)?;
            let outcomes = classify_sessions(&classifier, sessions);
            let ctx = ReportContext {
                tool_name: TOOL_NAME.to_string(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                input_path: input.display().to_string(),
                range_policy: policy,
                config: classifier.config().clone(),
            };
            write_reports(&outcomes, &out, &ctx)?;
        }
        Command::Profiles { json } => {
            if json {
                println!("{}", render_profiles_json()?);
            } else {
                print!("{}", render_profiles_text());
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ClassifierConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let config = ClassifierConfig::load(path)?;
            tracing::info!(path = %path.display(), "loaded classifier config");
            Ok(config)
        }
        None => Ok(ClassifierConfig::default_v1()),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
