use super::{PolicySimAppError, PolicySimOperation};
use crate::config::PolicySimConfiguration;
use clap::Parser;
use std::path::Path;

/// command line tool for inspecting, replacing and restoring the policy
/// simulation datasets
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct PolicySimApp {
    #[command(subcommand)]
    pub op: PolicySimOperation,
    /// TOML or JSON file with data directory and coefficient settings
    #[arg(long, global = true)]
    pub configuration_file: Option<String>,
}

impl PolicySimApp {
    pub fn configuration(&self) -> Result<PolicySimConfiguration, PolicySimAppError> {
        match &self.configuration_file {
            None => Ok(PolicySimConfiguration::default()),
            Some(f) => {
                log::info!("reading policysim configuration from {f}");
                Ok(PolicySimConfiguration::try_from(Path::new(f))?)
            }
        }
    }

    pub fn run(&self) -> Result<(), PolicySimAppError> {
        let conf = self.configuration()?;
        self.op.run(&conf)
    }
}
