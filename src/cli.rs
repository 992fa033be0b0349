use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::ApiStyle;

#[derive(Parser, Debug)]
#[command(name = "rfpmap")]
#[command(about = "Derive API style, checklist gaps and compliance hints from RFP text", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify an RFP and print findings with a draft API spec
    Analyze {
        /// Plain-text RFP file, or - for standard input
        path: PathBuf,

        /// Confirmed API style (defaults to the detected style)
        #[arg(long = "api-type", value_enum)]
        api_type: Option<ApiStyleArg>,

        /// Output format (defaults to [output] default_format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (skips .rfpmap.toml discovery)
        #[arg(short, long, env = "RFPMAP_CONFIG")]
        config: Option<PathBuf>,

        /// Carry missing topics and compliance flags into the draft spec
        #[arg(long)]
        annotate: bool,

        /// Include classification findings in the output (JSON format only)
        #[arg(long)]
        findings: bool,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// Write a .rfpmap.toml with the builtin rule table
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// List the effective classification rules
    Patterns {
        /// Configuration file (skips .rfpmap.toml discovery)
        #[arg(short, long, env = "RFPMAP_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ApiStyleArg {
    Rest,
    #[value(name = "graphql")]
    GraphQl,
    Grpc,
}

impl From<ApiStyleArg> for ApiStyle {
    fn from(arg: ApiStyleArg) -> Self {
        match arg {
            ApiStyleArg::Rest => ApiStyle::Rest,
            ApiStyleArg::GraphQl => ApiStyle::GraphQl,
            ApiStyleArg::Grpc => ApiStyle::Grpc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => crate::io::OutputFormat::Terminal,
            OutputFormat::Json => crate::io::OutputFormat::Json,
        }
    }
}
