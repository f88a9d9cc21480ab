//! Subcommand implementations.

use std::io::Read;
use std::path::Path;

use laptop_valuer::adjust::Estimate;
use laptop_valuer::artifacts::load_schema;
use laptop_valuer::config::ValuerConfig;
use laptop_valuer::laptop::RawSpec;
use laptop_valuer::service::ValuationContext;
use serde::Deserialize;

use crate::error::{CliError, Result};

/// A spec document: one RawSpec or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum SpecDocument {
    One(Box<RawSpec>),
    Many(Vec<RawSpec>),
}

fn read_specs(path: &Path) -> Result<(Vec<RawSpec>, bool)> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        std::fs::read_to_string(path)
    }
    .map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document: SpecDocument =
        serde_json::from_str(&text).map_err(|e| CliError::InvalidSpec {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
    Ok(match document {
        SpecDocument::One(spec) => (vec![*spec], false),
        SpecDocument::Many(specs) => (specs, true),
    })
}

fn print_estimate(estimate: &Estimate) {
    println!("price: {:.2}", estimate.price);
    println!("  base price: {:.2}", estimate.base_price);
    for factor in &estimate.factors {
        println!("  {:<16} x{:.4}", factor.rule.name(), factor.multiplier);
    }
    println!("  {:<16} x{:.4}", "multiplier", estimate.multiplier);
}

/// `estimate`: price each spec in the file.
pub(crate) fn estimate(config: &ValuerConfig, spec: &Path, json: bool) -> Result<()> {
    let (specs, batch) = read_specs(spec)?;
    let context = ValuationContext::load(config)?;
    let estimates = context.estimate_batch(&specs)?;

    if json {
        let rendered = if batch {
            serde_json::to_string_pretty(&estimates)?
        } else {
            serde_json::to_string_pretty(&estimates[0])?
        };
        println!("{rendered}");
        return Ok(());
    }

    for (idx, estimate) in estimates.iter().enumerate() {
        if batch {
            println!("[{}]", idx + 1);
        }
        print_estimate(estimate);
    }
    Ok(())
}

/// `schema`: list the feature columns in model order.
pub(crate) fn schema(config: &ValuerConfig, json: bool) -> Result<()> {
    let schema = load_schema(&config.artifact_paths().schema)?;
    if json {
        println!("{}", serde_json::to_string_pretty(schema.columns())?);
        return Ok(());
    }
    for (idx, column) in schema.columns().iter().enumerate() {
        println!("{idx:>3}  {column}");
    }
    if let Some(codes) = schema.gpu_model_codes() {
        println!("gpu_model dictionary: {} labels", codes.len());
    }
    Ok(())
}
