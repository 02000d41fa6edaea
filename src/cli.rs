use crate::core::modes::DEFAULT_SCENARIO;
use crate::utils::{parse_usage, parse_usage_pair};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cloudcalc")]
#[command(version, about = "Estimate cloud infrastructure costs from usage")]
pub struct Cli {
    /// Use this config file instead of ~/.cloudcalc/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the currency symbol
    #[arg(long, global = true, value_name = "SYMBOL")]
    pub currency: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Initialize config file
    #[arg(long = "init")]
    pub init: bool,

    /// Print current configuration
    #[arg(long = "print")]
    pub print: bool,

    /// Check configuration
    #[arg(long = "check")]
    pub check: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List resources and their rates
    Catalog,

    /// Price a single resource
    Single {
        /// Resource id, e.g. vm
        resource: String,

        /// Usage in the resource's unit
        #[arg(value_parser = parse_usage, allow_negative_numbers = true)]
        usage: Decimal,
    },

    /// Price several resources and show their share of the total
    Multi {
        /// Items as RESOURCE=USAGE, e.g. vm=24 storage=500
        #[arg(required = true, value_name = "RESOURCE=USAGE", value_parser = parse_usage_pair)]
        items: Vec<(String, Decimal)>,
    },

    /// Compare resources under one usage scenario
    Compare {
        /// Scenario label shown in the report
        #[arg(long, default_value = DEFAULT_SCENARIO)]
        scenario: String,

        /// Items as RESOURCE=USAGE; at least two
        #[arg(required = true, value_name = "RESOURCE=USAGE", value_parser = parse_usage_pair)]
        items: Vec<(String, Decimal)>,
    },

    /// Show optimization tips for a resource
    Tips {
        /// Resource id, e.g. database
        resource: String,
    },

    /// Interactive session with calculation history
    Session,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
