use std::{fs::File, io::Write, path::Path};

use clap::{Parser, Subcommand, ValueEnum};
use kdam::tqdm;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::TaxonomyCliError;
use crate::{
    config::TaxonomyConfig,
    normalize::{NormalizedPlace, PlaceInput},
    pritzker::MatchPolicy,
    Taxonomy,
};

/// Command line tool for normalizing place categories and tags from provider evidence
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TaxonomyApp {
    #[command(subcommand)]
    pub op: TaxonomyOperation,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ConfigFormat {
    Toml,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TaxonomyOperation {
    /// normalize a JSON array of place records into categories and tags
    Classify {
        #[arg(long, help = "path to JSON file with an array of place records")]
        input: String,
        #[arg(long, help = "output JSON path, stdout when omitted")]
        output: Option<String>,
        #[arg(long, help = "path to .toml or .json taxonomy configuration")]
        config: Option<String>,
    },
    /// map a legacy free-text category to a slug and tags
    Migrate {
        #[arg(long, help = "legacy category string")]
        legacy: String,
        #[arg(long, help = "path to .toml or .json taxonomy configuration")]
        config: Option<String>,
    },
    /// look up the Pritzker Prize year of an architect
    Pritzker {
        #[arg(long, help = "architect display name")]
        name: String,
        #[arg(long, help = "disable the substring fallback lookup")]
        strict: bool,
        #[arg(long, help = "path to .toml or .json taxonomy configuration")]
        config: Option<String>,
    },
    /// classify a CSV of heritage work labels
    WorkLabels {
        #[arg(long, help = "CSV file with a 'label' column")]
        input: String,
        #[arg(long, help = "output CSV path")]
        output: String,
        #[arg(long, help = "path to .toml or .json taxonomy configuration")]
        config: Option<String>,
    },
    /// print the effective taxonomy configuration
    DumpConfig {
        #[arg(long, value_enum, default_value_t = ConfigFormat::Toml)]
        format: ConfigFormat,
        #[arg(long, help = "path to .toml or .json taxonomy configuration")]
        config: Option<String>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WorkLabelRow {
    label: String,
}

#[derive(Debug, Clone, Serialize)]
struct WorkLabelOutputRow<'a> {
    label: &'a str,
    category: &'a str,
}

impl TaxonomyOperation {
    pub fn run(&self) -> Result<(), TaxonomyCliError> {
        match self {
            TaxonomyOperation::Classify {
                input,
                output,
                config,
            } => {
                let taxonomy = read_config(config)?.build()?;
                let places = read_places(input)?;
                let results = classify(&taxonomy, &places);
                let json = serde_json::to_string_pretty(&results)?;
                match output {
                    Some(path) => {
                        let mut file = File::create(path)?;
                        writeln!(file, "{json}")?;
                        eprintln!("wrote {} places to {path}", results.len());
                    }
                    None => println!("{json}"),
                }
                Ok(())
            }
            TaxonomyOperation::Migrate { legacy, config } => {
                let taxonomy = read_config(config)?.build()?;
                let result = taxonomy.migration().mapping_for(legacy);
                println!("{}", serde_json::to_string(&result)?);
                Ok(())
            }
            TaxonomyOperation::Pritzker {
                name,
                strict,
                config,
            } => {
                let taxonomy = read_config(config)?.build()?;
                let matcher = if *strict {
                    taxonomy.pritzker().with_policy(MatchPolicy {
                        fuzzy_fallback: false,
                    })
                } else {
                    taxonomy.pritzker().clone()
                };
                let year = matcher.year_for(name);
                println!("{}", serde_json::to_string(&year)?);
                Ok(())
            }
            TaxonomyOperation::WorkLabels {
                input,
                output,
                config,
            } => {
                let taxonomy = read_config(config)?.build()?;
                classify_work_labels(&taxonomy, Path::new(input), Path::new(output))
            }
            TaxonomyOperation::DumpConfig { format, config } => {
                let conf = read_config(config)?;
                let encoded = match format {
                    ConfigFormat::Toml => toml::to_string_pretty(&conf).map_err(|e| {
                        TaxonomyCliError::ConfigurationError(format!(
                            "failure encoding configuration as TOML: {e}"
                        ))
                    })?,
                    ConfigFormat::Json => serde_json::to_string_pretty(&conf)?,
                };
                println!("{encoded}");
                Ok(())
            }
        }
    }
}

/// built-in tables unless a configuration file is provided
fn read_config(config: &Option<String>) -> Result<TaxonomyConfig, TaxonomyCliError> {
    match config {
        None => Ok(TaxonomyConfig::default()),
        Some(f) => {
            log::info!("reading taxonomy configuration from {f}");
            let conf = TaxonomyConfig::try_from(f)?;
            Ok(conf)
        }
    }
}

fn read_places(input: &str) -> Result<Vec<PlaceInput>, TaxonomyCliError> {
    let contents = std::fs::read_to_string(input)?;
    serde_json::from_str(&contents).map_err(|e| {
        TaxonomyCliError::InputError(format!("{input} is not a JSON array of places: {e}"))
    })
}

/// places are independent, so they are normalized in parallel. each place is
/// normalized sequentially since its category decisions depend on each other.
fn classify(taxonomy: &Taxonomy, places: &[PlaceInput]) -> Vec<NormalizedPlace> {
    let normalizer = taxonomy.normalizer();
    places
        .par_iter()
        .map(|place| normalizer.normalize(place))
        .collect()
}

fn classify_work_labels(
    taxonomy: &Taxonomy,
    input: &Path,
    output: &Path,
) -> Result<(), TaxonomyCliError> {
    let mut reader = csv::Reader::from_path(input)?;
    let rows = reader
        .deserialize::<WorkLabelRow>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            TaxonomyCliError::InputError(format!(
                "{} must be a CSV with a 'label' column: {e}",
                input.display()
            ))
        })?;

    let classifier = taxonomy.work_labels();
    let categories = rows
        .par_iter()
        .map(|row| classifier.classify(&row.label))
        .collect::<Vec<_>>();

    let mut writer = csv::Writer::from_path(output)?;
    let write_iter = tqdm!(
        rows.iter().zip(categories.iter()),
        desc = "writing work labels",
        total = rows.len()
    );
    for (row, category) in write_iter {
        writer.serialize(WorkLabelOutputRow {
            label: &row.label,
            category: category.as_str(),
        })?;
    }
    writer.flush()?;
    eprintln!();
    log::info!("classified {} work labels", rows.len());
    Ok(())
}
