//! Dashboard module - Renders the exported tables as one HTML document
//!
//! Provides:
//! - palette: fixed node and table colors
//! - sankey: flow diagram layout and SVG drawing
//! - table: sales summary table with max-row highlight
//! - document: the page combining both panels

pub mod document;
pub mod palette;
pub mod sankey;
pub mod table;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::core::paths::{
    display_path, ensure_dir, flow_table_path, outputs_dir, summary_table_path,
};
use crate::core::render::Report;
use crate::core::table::{read_flows, read_summary};

/// Load both tables and write the dashboard.
///
/// `output` is resolved against `<root>/outputs` unless it is absolute.
pub fn render_tables(root: &Path, output: &Path) -> Result<Report> {
    let flow_path = flow_table_path(root);
    let flows = read_flows(&flow_path)
        .with_context(|| format!("Failed to load flow table: {:?}", flow_path))?;

    let summary_path = summary_table_path(root);
    let summary = read_summary(&summary_path)
        .with_context(|| format!("Failed to load sales summary: {:?}", summary_path))?;

    let html = document::render_dashboard(&flows, &summary);

    let target = outputs_dir(root).join(output);
    if let Some(parent) = target.parent() {
        ensure_dir(parent)?;
    }
    fs::write(&target, html)
        .with_context(|| format!("Failed to write dashboard: {:?}", target))?;

    info!(
        path = %target.display(),
        links = flows.len(),
        rows = summary.len(),
        "dashboard rendered"
    );

    let mut report = Report::new();
    report.push_file(display_path(&target, root));
    Ok(report)
}
