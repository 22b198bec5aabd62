//! Flow data model
//!
//! Every stage of the pipeline (generation, export, validation, rendering)
//! works on these two row types.

use serde::{Deserialize, Serialize};

/// Supplier node labels, in generation order
pub const SUPPLIERS: [&str; 3] = ["Supplier A", "Supplier B", "Supplier C"];

/// Category node labels, in generation order
pub const CATEGORIES: [&str; 3] = ["Electronics", "Clothing", "Food"];

/// Sales channel node labels, in generation order
pub const CHANNELS: [&str; 2] = ["Online", "Retail Store"];

/// Reporting period used when none is given
pub const DEFAULT_PERIOD: &str = "Q1-2025";

/// Seed used when none is given
pub const DEFAULT_SEED: u64 = 42;

/// A quantity moving from one named node to another within a period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub source: String,
    pub target: String,
    pub value: u64,
    pub period: String,
}

impl FlowEdge {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        value: u64,
        period: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            value,
            period: period.into(),
        }
    }
}

/// Total sales of one category through one channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesSummaryRow {
    #[serde(rename = "Channel")]
    pub channel: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Total Sales")]
    pub total_sales: u64,
    #[serde(rename = "Period")]
    pub period: String,
}

/// Output of one generator run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowDataset {
    pub flows: Vec<FlowEdge>,
    pub summary: Vec<SalesSummaryRow>,
}

/// Which of the three node universes a label belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Supplier,
    Category,
    Channel,
}

impl Stage {
    /// Classify a node label, `None` for labels outside the fixed universes
    pub fn of(label: &str) -> Option<Self> {
        if SUPPLIERS.contains(&label) {
            Some(Stage::Supplier)
        } else if CATEGORIES.contains(&label) {
            Some(Stage::Category)
        } else if CHANNELS.contains(&label) {
            Some(Stage::Channel)
        } else {
            None
        }
    }
}
