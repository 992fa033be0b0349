use anyhow::Result;
use clap::Parser;
use rfpmap::cli::{Cli, Commands};
use rfpmap::commands::{self, AnalyzeConfig};
use rfpmap::formatting::{ColorMode, FormattingConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze {
            path,
            api_type,
            format,
            output,
            config,
            annotate,
            findings,
            plain,
        } => commands::handle_analyze(AnalyzeConfig {
            path,
            api_type: api_type.map(Into::into),
            format: format.map(Into::into),
            output,
            config,
            annotate,
            findings,
            formatting_config: create_formatting_config(plain),
        }),
        Commands::Init { force } => commands::init_config(force),
        Commands::Patterns { config } => commands::list_patterns(config.as_deref()),
    }
}

// Logs go to stderr so stdout stays clean for exported JSON
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("rfpmap={default_level},warn"))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::new(ColorMode::Never)
    } else {
        FormattingConfig::from_env()
    }
}
