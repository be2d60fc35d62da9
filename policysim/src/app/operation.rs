use super::PolicySimAppError;
use crate::{
    coefficient::AccessibilityFallbackPolicy,
    config::PolicySimConfiguration,
    kpi::Kpi,
    service::{Diagnostic, RestoreTarget},
    store::{encoding_ops, DatasetKind, StoreError, Table},
};
use clap::Subcommand;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum PolicySimOperation {
    /// print the resolved policy list as CSV, with durations in whole months
    Policies,
    /// print the resolved coefficient table
    Coefficients {
        /// print the derived parameter map, PAI weights and TCI parameters
        /// as JSON instead of the raw table
        #[arg(long, default_value_t = false)]
        structured: bool,
    },
    /// save a policy list file as the modified policy dataset
    SavePolicies {
        /// comma-separated policy list, UTF-8 or CP949
        #[arg(long)]
        input: String,
    },
    /// save a coefficient table file as the modified coefficient dataset
    SaveCoefficients {
        /// tab-separated coefficient table, UTF-8 or CP949
        #[arg(long)]
        input: String,
    },
    /// remove modified datasets so reads fall back to the originals
    Restore {
        #[arg(value_enum)]
        target: RestoreTarget,
    },
    /// list the known indicator codes and names
    Kpis,
}

impl PolicySimOperation {
    pub fn run(&self, conf: &PolicySimConfiguration) -> Result<(), PolicySimAppError> {
        match self {
            PolicySimOperation::Policies => {
                let service = conf.build_service()?;
                let loaded = service.get_policy_table()?;
                report(&loaded.diagnostics);
                write_table(&loaded.value, DatasetKind::Policy)
            }
            PolicySimOperation::Coefficients { structured } => {
                let service = conf.build_service()?;
                if *structured {
                    let loaded = service.get_structured_coefficients()?;
                    report(&loaded.diagnostics);
                    let json = serde_json::to_string_pretty(&loaded.value)
                        .map_err(|e| PolicySimAppError::OutputError(e.to_string()))?;
                    println!("{json}");
                    if service.structurer().fallback_policy
                        == AccessibilityFallbackPolicy::OverwriteKnown
                    {
                        log::info!(
                            "PAI weights for {} taken from the built-in fallback table",
                            AccessibilityFallbackPolicy::covered_categories().join(", ")
                        );
                    }
                    for (category, _) in loaded.value.transfer.categories.iter() {
                        let missing = loaded.value.transfer.missing_modes(category);
                        if !missing.is_empty() {
                            log::info!(
                                "TCI parameters for {category} incomplete for modes: {}",
                                missing.iter().join(", ")
                            );
                        }
                    }
                    Ok(())
                } else {
                    let loaded = service.get_coefficient_table_raw()?;
                    report(&loaded.diagnostics);
                    write_table(&loaded.value, DatasetKind::Coefficients)
                }
            }
            PolicySimOperation::SavePolicies { input } => {
                let table = read_input(input, DatasetKind::Policy)?;
                let mut service = conf.build_service()?;
                service.save_policy_table(&table)?;
                eprintln!("saved {} policy rows", table.len());
                Ok(())
            }
            PolicySimOperation::SaveCoefficients { input } => {
                let table = read_input(input, DatasetKind::Coefficients)?;
                let mut service = conf.build_service()?;
                service.save_coefficient_table(&table)?;
                eprintln!("saved {} coefficient rows", table.len());
                Ok(())
            }
            PolicySimOperation::Restore { target } => {
                let mut service = conf.build_service()?;
                let report = service.restore(*target);
                if report.is_failure() {
                    Err(PolicySimAppError::RestoreFailed(report.to_string()))
                } else {
                    eprintln!("{report}");
                    Ok(())
                }
            }
            PolicySimOperation::Kpis => {
                for kpi in Kpi::ALL {
                    println!("{}\t{}", kpi.code(), kpi.full_name());
                }
                Ok(())
            }
        }
    }
}

fn report(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics.iter() {
        eprintln!("{diagnostic}");
    }
}

fn write_table(table: &Table, dataset: DatasetKind) -> Result<(), PolicySimAppError> {
    table
        .write_to(std::io::stdout().lock(), dataset.delimiter())
        .map_err(|e| PolicySimAppError::OutputError(e.to_string()))
}

/// reads a user-supplied replacement file with the same decoding rules as
/// stored artifacts.
fn read_input(input: &str, dataset: DatasetKind) -> Result<Table, PolicySimAppError> {
    let text = encoding_ops::read_with_fallback(Path::new(input))?;
    let table = Table::from_text(&text, dataset.delimiter())
        .map_err(|source| StoreError::CsvFailure { dataset, source })?;
    Ok(table)
}
