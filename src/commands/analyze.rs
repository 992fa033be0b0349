use crate::config::{self, RfpmapConfig};
use crate::core::ApiStyle;
use crate::formatting::FormattingConfig;
use crate::io::{self, create_writer, AnalysisReport, OutputFormat};
use crate::session::Session;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub api_type: Option<ApiStyle>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub annotate: bool,
    pub findings: bool,
    pub formatting_config: FormattingConfig,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let settings = resolve_settings(config.config.as_deref())?;
    let classifier = settings
        .classifier()
        .context("Failed to compile classification rules")?;

    let text = io::read_rfp_text(&config.path)
        .with_context(|| format!("Failed to load RFP from {}", config.path.display()))?;
    if text.trim().is_empty() {
        tracing::warn!(
            "{} contains no text; every checklist topic will be reported missing",
            config.path.display()
        );
    }

    let mut session = Session::new(Arc::new(classifier), text);
    if let Some(style) = config.api_type {
        session.select_style(style);
    }

    let builder = settings
        .spec_builder()
        .with_findings(settings.annotate_findings() || config.annotate);
    let report = AnalysisReport::from_session(&session, &builder);

    let format = resolve_format(config.format, &settings);
    check_findings_format(format, config.findings)?;
    let formatting = config
        .formatting_config
        .with_config_override(settings.use_color());

    let writer = open_output(config.output.as_deref())?;
    create_writer(format, writer, formatting, config.findings).write_report(&report)?;

    if let Some(ref path) = config.output {
        tracing::info!("Wrote {:?} output to {}", format, path.display());
    }

    Ok(())
}

/// Explicit config files must load; otherwise fall back to discovery.
pub(crate) fn resolve_settings(path: Option<&Path>) -> Result<RfpmapConfig> {
    match path {
        Some(path) => Ok(config::load_config_from_path(path)?),
        None => Ok(config::load_config()),
    }
}

fn resolve_format(requested: Option<OutputFormat>, settings: &RfpmapConfig) -> OutputFormat {
    requested
        .or_else(|| match settings.default_format() {
            Some("json") => Some(OutputFormat::Json),
            Some("terminal") => Some(OutputFormat::Terminal),
            _ => None,
        })
        .unwrap_or(OutputFormat::Terminal)
}

/// Findings are only written as part of the JSON report.
fn check_findings_format(format: OutputFormat, findings: bool) -> Result<()> {
    if findings && format != OutputFormat::Json {
        anyhow::bail!("--findings only applies to JSON output; pass --format json");
    }
    Ok(())
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}
