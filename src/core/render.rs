//! Renderer module
//!
//! Renders a command Report to different console formats: text, json, md

use colored::Colorize;
use serde::Serialize;
use std::io::Write;

use crate::flows::validate::ConservationReport;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// What a command has to tell the operator
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    /// Conservation check, when the command ran one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<ConservationReport>,

    /// Files written, relative to root
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validation(mut self, validation: ConservationReport) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn push_file(&mut self, path: impl Into<String>) {
        self.files.push(path.into());
    }

    /// Fold another command's report into this one
    pub fn merge(&mut self, other: Report) {
        if other.validation.is_some() {
            self.validation = other.validation;
        }
        self.files.extend(other.files);
    }
}

/// Renderer for reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string
    pub fn render(&self, report: &Report) -> String {
        match self.config.format {
            OutputFormat::Text => self.render_text(report),
            OutputFormat::Json => self.render_json(report),
            OutputFormat::Markdown => self.render_markdown(report),
        }
    }

    /// Render to a writer
    pub fn render_to<W: Write>(&self, report: &Report, mut writer: W) -> std::io::Result<()> {
        let output = self.render(report);
        writeln!(writer, "{}", output)
    }

    fn render_json(&self, report: &Report) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
        }
    }

    fn render_text(&self, report: &Report) -> String {
        let mut output = String::new();

        if let Some(validation) = &report.validation {
            output.push_str("=== Sankey Flow Validation ===\n");
            output.push_str(&format!(
                "{:<14}{:>10}{:>10}\n",
                "Category", "Inbound", "Outbound"
            ));
            for balance in &validation.categories {
                output.push_str(&format!(
                    "{:<14}{:>10}{:>10}\n",
                    balance.category, balance.inbound, balance.outbound
                ));
            }

            if validation.is_consistent() {
                output.push_str(&format!(
                    "{}\n",
                    "✅ Flow is consistent: input = output for all categories.".green()
                ));
            } else {
                output.push_str(&format!(
                    "{}\n",
                    "⚠️ Flow inconsistency detected: input ≠ output.".yellow()
                ));
                for balance in validation.unbalanced() {
                    output.push_str(&format!(
                        "   {}: {} in, {} out\n",
                        balance.category, balance.inbound, balance.outbound
                    ));
                }
            }
        }

        if !report.files.is_empty() {
            output.push_str(&format!("{}\n", "✅ Files generated successfully:".green()));
            for file in &report.files {
                output.push_str(&format!("- {}\n", file));
            }
        }

        output.trim_end().to_string()
    }

    fn render_markdown(&self, report: &Report) -> String {
        let mut output = String::new();

        if let Some(validation) = &report.validation {
            output.push_str("## Flow Validation\n\n");
            output.push_str("| Category | Inbound | Outbound | Balanced |\n");
            output.push_str("|---|---:|---:|:---:|\n");
            for balance in &validation.categories {
                output.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    balance.category,
                    balance.inbound,
                    balance.outbound,
                    if balance.is_balanced() { "yes" } else { "no" }
                ));
            }
            output.push('\n');
            if validation.is_consistent() {
                output.push_str("Flow is consistent: input = output for all categories.\n\n");
            } else {
                output.push_str(&format!(
                    "> ⚠️ Flow inconsistency detected: {} unit(s) lost to rounding\n\n",
                    validation.total_loss()
                ));
            }
        }

        if !report.files.is_empty() {
            output.push_str("## Files\n\n");
            for file in &report.files {
                output.push_str(&format!("- `{}`\n", file));
            }
            output.push('\n');
        }

        output
    }
}
