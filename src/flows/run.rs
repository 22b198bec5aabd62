//! Generate and validate commands

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::core::paths::{data_dir, display_path, ensure_dir, flow_table_path, summary_table_path};
use crate::core::render::Report;
use crate::core::table::{read_flows, write_flows, write_summary};
use crate::flows::generate::FlowGenerator;
use crate::flows::validate::validate_conservation;

/// Generate the dataset, export both tables and validate conservation.
///
/// The tables are written whatever the validation verdict is.
pub fn generate_tables(root: &Path, generator: &FlowGenerator) -> Result<Report> {
    let dataset = generator.generate();
    let validation = validate_conservation(&dataset.flows);

    ensure_dir(&data_dir(root))?;

    let flow_path = flow_table_path(root);
    write_flows(&flow_path, &dataset.flows)
        .with_context(|| format!("Failed to export flow table: {:?}", flow_path))?;

    let summary_path = summary_table_path(root);
    write_summary(&summary_path, &dataset.summary)
        .with_context(|| format!("Failed to export sales summary: {:?}", summary_path))?;

    info!(
        seed = generator.seed(),
        period = generator.period(),
        consistent = validation.is_consistent(),
        "tables exported"
    );

    let mut report = Report::new().with_validation(validation);
    report.push_file(display_path(&flow_path, root));
    report.push_file(display_path(&summary_path, root));
    Ok(report)
}

/// Re-run the conservation check against the exported flow table
pub fn validate_table(root: &Path) -> Result<Report> {
    let flow_path = flow_table_path(root);
    let flows = read_flows(&flow_path)
        .with_context(|| format!("Failed to load flow table: {:?}", flow_path))?;

    Ok(Report::new().with_validation(validate_conservation(&flows)))
}
