//! Model and generator configuration from CLI flags, environment and model files.
//!
//! Precedence, highest first: command-line flag, environment variable
//! (`RECORD_FORGE_VOLUME`, `RECORD_FORGE_SEED`), model file, built-in default.

use crate::output::OutputFormat;
use anyhow::Context;
use clap::Args;
use record_core::{Model, ModelFile};
use record_generator::{RecordGenerator, DEFAULT_VOLUME};
use std::path::PathBuf;

/// Where the model comes from.
#[derive(Args, Clone, Debug, Default)]
pub struct ModelOpts {
    /// Path to a model file (.yaml, .yml or .json)
    #[arg(long, short = 'm')]
    pub model: Option<PathBuf>,

    /// Inline field declaration, appended after model file fields (repeatable)
    #[arg(long = "field", value_name = "NAME=TYPE", value_parser = parse_field_decl)]
    pub fields: Vec<(String, String)>,
}

/// Arguments of the `generate` command.
#[derive(Args, Clone, Debug, Default)]
pub struct GenerateOpts {
    #[command(flatten)]
    pub model: ModelOpts,

    /// Number of records to generate [default: model file volume, then 20]
    #[arg(long, short = 'n', env = "RECORD_FORGE_VOLUME")]
    pub volume: Option<usize>,

    /// Random seed for reproducible output (same seed = same records)
    #[arg(long, env = "RECORD_FORGE_SEED")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Output file (stdout when omitted)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// A model with the settings that came along with it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedModel {
    pub model: Model,
    pub volume: Option<usize>,
    pub seed: Option<u64>,
}

/// Parse a `NAME=TYPE` declaration. The type string is validated later,
/// together with the rest of the model.
pub fn parse_field_decl(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, type_string)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), type_string.trim().to_string()))
        }
        _ => Err(format!("Invalid field declaration '{s}', expected NAME=TYPE")),
    }
}

impl ModelOpts {
    /// Load the model file (if any), append inline fields, and validate.
    ///
    /// With neither a file nor inline fields the default model is used.
    pub fn resolve(&self) -> anyhow::Result<ResolvedModel> {
        let file = match &self.model {
            Some(path) => Some(
                ModelFile::from_file(path)
                    .with_context(|| format!("Failed to load model from {path:?}"))?,
            ),
            None => None,
        };

        let inline = Model::parse(self.fields.iter().cloned())
            .context("Invalid inline field declaration")?;

        let resolved = match file {
            Some(file) => ResolvedModel {
                model: Model::from_specs(file.fields.into_iter().chain(inline))
                    .context("Inline fields clash with the model file")?,
                volume: file.volume,
                seed: file.seed,
            },
            None if inline.is_empty() => ResolvedModel {
                model: Model::default(),
                volume: None,
                seed: None,
            },
            None => ResolvedModel {
                model: inline,
                volume: None,
                seed: None,
            },
        };

        tracing::debug!(
            "Resolved model with fields {:?}",
            resolved.model.field_names()
        );
        Ok(resolved)
    }
}

impl GenerateOpts {
    /// Build a generator from the resolved model and settings.
    pub fn build_generator(&self) -> anyhow::Result<RecordGenerator> {
        let resolved = self.model.resolve()?;
        let volume = self
            .volume
            .or(resolved.volume)
            .unwrap_or(DEFAULT_VOLUME);

        let generator = match self.seed.or(resolved.seed) {
            Some(seed) => {
                tracing::info!("Generating {volume} records (seed={seed})");
                RecordGenerator::with_seed(resolved.model, volume, seed)
            }
            None => {
                tracing::info!("Generating {volume} records (unseeded)");
                RecordGenerator::new(resolved.model, volume)
            }
        };
        Ok(generator)
    }
}
