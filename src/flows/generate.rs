//! Flow generation - supplier → category → channel edges
//!
//! Volumes are drawn from an explicitly seeded RNG passed into each stage,
//! so a given seed always yields the same dataset.

use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use tracing::debug;

use crate::core::model::{
    FlowDataset, FlowEdge, CATEGORIES, CHANNELS, DEFAULT_PERIOD, DEFAULT_SEED, SUPPLIERS,
};
use crate::flows::summary::compute_sales_summary;

/// Share of a category's volume routed to each channel, in `CHANNELS` order
pub static PROPORTIONS: [(&str, [f64; 2]); 3] = [
    ("Electronics", [0.70, 0.30]),
    ("Clothing", [0.35, 0.65]),
    ("Food", [0.45, 0.55]),
];

/// Volume range for a supplier → category pair (upper bound exclusive)
pub fn volume_range(supplier: &str, category: &str) -> Range<u64> {
    match (supplier, category) {
        ("Supplier A", "Electronics") => 200..300,
        ("Supplier C", "Food") => 150..250,
        _ => 50..150,
    }
}

/// Channel shares for a category, `None` for categories outside the table
pub fn proportions_for(category: &str) -> Option<&'static [f64; 2]> {
    PROPORTIONS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, shares)| shares)
}

/// Draw one edge per (supplier, category) pair, supplier-major
pub fn generate_supplier_to_category_flows<R: Rng>(
    rng: &mut R,
    period: &str,
) -> Vec<FlowEdge> {
    let mut edges = Vec::with_capacity(SUPPLIERS.len() * CATEGORIES.len());

    for supplier in SUPPLIERS {
        for category in CATEGORIES {
            let volume = rng.gen_range(volume_range(supplier, category));
            edges.push(FlowEdge::new(supplier, category, volume, period));
        }
    }

    edges
}

/// Sum inbound volume per target label, in first-appearance order
pub fn compute_category_totals(edges: &[FlowEdge]) -> IndexMap<String, u64> {
    let mut totals: IndexMap<String, u64> = IndexMap::new();
    for edge in edges {
        let total = totals.entry(edge.target.clone()).or_insert(0);
        *total = total.saturating_add(edge.value);
    }
    totals
}

/// Split each category's total across channels, truncating each share.
///
/// Truncation can lose up to one unit per category; the loss is kept so the
/// conservation check can report it.
pub fn generate_category_to_channel_flows(
    totals: &IndexMap<String, u64>,
    period: &str,
) -> Vec<FlowEdge> {
    let mut edges = Vec::with_capacity(CATEGORIES.len() * CHANNELS.len());

    for category in CATEGORIES {
        let total = totals.get(category).copied().unwrap_or(0);
        let shares = proportions_for(category).copied().unwrap_or_default();

        for (channel, share) in CHANNELS.iter().zip(shares) {
            edges.push(FlowEdge::new(
                category,
                *channel,
                split_volume(total, share),
                period,
            ));
        }
    }

    edges
}

/// floor(total × share)
pub fn split_volume(total: u64, share: f64) -> u64 {
    (total as f64 * share).floor() as u64
}

/// Seeded generator for a complete dataset
#[derive(Debug, Clone)]
pub struct FlowGenerator {
    seed: u64,
    period: String,
}

impl Default for FlowGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED, DEFAULT_PERIOD)
    }
}

impl FlowGenerator {
    pub fn new(seed: u64, period: impl Into<String>) -> Self {
        Self {
            seed,
            period: period.into(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    /// Generate the full 15-edge flow table and its summary.
    ///
    /// The RNG is re-seeded on every call.
    pub fn generate(&self) -> FlowDataset {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.generate_with(&mut rng)
    }

    /// Generate using the caller's RNG state
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> FlowDataset {
        let mut flows = generate_supplier_to_category_flows(rng, &self.period);
        let totals = compute_category_totals(&flows);
        debug!(?totals, "category totals");

        flows.extend(generate_category_to_channel_flows(&totals, &self.period));
        let summary = compute_sales_summary(&flows, &self.period);

        debug!(
            seed = self.seed,
            flows = flows.len(),
            summary = summary.len(),
            "dataset generated"
        );
        FlowDataset { flows, summary }
    }
}
