//! Command-line interface for record-forge
//!
//! # Usage Examples
//!
//! ```bash
//! # Default model: id, title, content, image
//! record-forge generate --volume 3 --seed 7
//!
//! # Model file, YAML output written to a file
//! record-forge generate --model blog.yaml --format yaml --output posts.yaml
//!
//! # Check a model without generating anything
//! record-forge check --field price=f:1-99.5 --field photo=p:640*480
//! ```
//!
//! ## Type Strings
//! - `i` / `i:1-100` - integer, inclusive range
//! - `f` / `f:0.5-9.5` - float, half-open range
//! - `t:5w` / `t:4-6w` / `t:3s` - words or sentences
//! - `p:400*300` - placeholder image URL

use anyhow::Context;
use clap::{Parser, Subcommand};
use record_forge::check::model_report;
use record_forge::{write_records, GenerateOpts, ModelOpts};
use std::fs::File;
use std::io;

#[derive(Parser)]
#[command(name = "record-forge")]
#[command(about = "Generate random records from compact field type declarations")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a batch of random records
    Generate {
        #[command(flatten)]
        opts: GenerateOpts,
    },
    /// Validate a model and print its fields with their setter names
    Check {
        #[command(flatten)]
        model: ModelOpts,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Logs go to stderr so generated records can be piped from stdout
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { opts } => run_generate(opts)?,
        Commands::Check { model } => {
            let resolved = model.resolve()?;
            print!("{}", model_report(&resolved.model));
        }
    }

    Ok(())
}

fn run_generate(opts: GenerateOpts) -> anyhow::Result<()> {
    let mut generator = opts.build_generator()?;
    let records = generator.fetch_all();

    match &opts.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {path:?}"))?;
            write_records(&records, opts.format, file)
                .with_context(|| format!("Failed to write records to {path:?}"))?;
        }
        None => {
            write_records(&records, opts.format, io::stdout().lock())
                .context("Failed to write records to stdout")?;
        }
    }

    Ok(())
}
