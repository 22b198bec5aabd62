//! Sales summary - channel × category totals derived from the flow table

use indexmap::IndexMap;

use crate::core::model::{FlowEdge, SalesSummaryRow, CATEGORIES, CHANNELS};

/// Aggregate category → channel edges into one row per (channel, category).
///
/// Rows come out channel-major in declared label order; pairs without a
/// matching edge get a total of 0.
pub fn compute_sales_summary(edges: &[FlowEdge], period: &str) -> Vec<SalesSummaryRow> {
    let mut totals: IndexMap<(&str, &str), u64> = IndexMap::new();
    for channel in CHANNELS {
        for category in CATEGORIES {
            totals.insert((channel, category), 0);
        }
    }

    for edge in edges {
        if let Some(total) = totals.get_mut(&(edge.target.as_str(), edge.source.as_str())) {
            *total = total.saturating_add(edge.value);
        }
    }

    totals
        .into_iter()
        .map(|((channel, category), total_sales)| SalesSummaryRow {
            channel: channel.to_string(),
            category: category.to_string(),
            total_sales,
            period: period.to_string(),
        })
        .collect()
}
