use crate::builder::SpecBuilder;
use crate::core::{ApiStyle, ClassificationResult, DraftSpecification, Result};
use crate::formatting::{FormattingConfig, OutputFormatter};
use crate::session::Session;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Terminal,
    Json,
}

/// Findings and draft for one session, as written by the output writers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub selected_api_style: ApiStyle,
    pub classification: ClassificationResult,
    pub specification: DraftSpecification,
}

impl AnalysisReport {
    pub fn from_session(session: &Session, builder: &SpecBuilder) -> Self {
        Self {
            selected_api_style: session.selected_style(),
            classification: session.classification().clone(),
            specification: session.draft(builder),
        }
    }
}

/// Serialize a draft the way the exporter ships it: JSON, 2-space indent.
pub fn export_json(draft: &DraftSpecification) -> Result<String> {
    Ok(serde_json::to_string_pretty(draft)?)
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

/// Writes the draft specification, or the whole report when
/// `include_findings` is set.
pub struct JsonWriter<W: Write> {
    writer: W,
    include_findings: bool,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            include_findings: false,
        }
    }

    pub fn with_findings(mut self, include: bool) -> Self {
        self.include_findings = include;
        self
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = if self.include_findings {
            serde_json::to_string_pretty(report)?
        } else {
            export_json(&report.specification)?
        };
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: formatting.formatter(),
        }
    }

    fn write_section(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.formatter.header(title))?;
        Ok(())
    }

    fn write_api_style(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_section("API Type")?;
        let detected = report.classification.detected_api_style;
        let selected = report.selected_api_style;
        writeln!(self.writer, "  Auto-detected: {}", self.formatter.bold(detected.as_str()))?;
        if selected != detected {
            writeln!(
                self.writer,
                "  Selected:      {} {}",
                self.formatter.bold(selected.as_str()),
                self.formatter.info("(override)")
            )?;
        }
        Ok(())
    }

    fn write_checklist(&mut self, classification: &ClassificationResult) -> anyhow::Result<()> {
        self.write_section("Validation Checklist")?;
        let line = if classification.is_complete() {
            self.formatter.success("All key details seem present.")
        } else {
            self.formatter.warning(&format!(
                "Missing details in RFP: {}",
                classification.missing_topics.join(", ")
            ))
        };
        writeln!(self.writer, "  {line}")?;
        Ok(())
    }

    fn write_compliance(&mut self, classification: &ClassificationResult) -> anyhow::Result<()> {
        self.write_section("Compliance Hints")?;
        let line = if classification.has_compliance_flags() {
            self.formatter.error(&format!(
                "Potential compliance requirements: {}",
                classification.compliance_flags.join(", ")
            ))
        } else {
            self.formatter.info("No explicit GDPR/PII terms found.")
        };
        writeln!(self.writer, "  {line}")?;
        Ok(())
    }

    fn write_draft(&mut self, draft: &DraftSpecification) -> anyhow::Result<()> {
        self.write_section("Draft API Spec")?;
        writeln!(self.writer, "{}", export_json(draft)?)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("RFP Analysis"))?;
        self.write_api_style(report)?;
        self.write_checklist(&report.classification)?;
        self.write_compliance(&report.classification)?;
        self.write_draft(&report.specification)?;
        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    writer: Box<dyn Write>,
    formatting: FormattingConfig,
    include_findings: bool,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer).with_findings(include_findings)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}
