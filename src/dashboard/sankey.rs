//! Sankey flow diagram
//!
//! Lays out the flow table as columns of nodes joined by bands whose width is
//! proportional to edge value, and draws it as inline SVG.

use indexmap::IndexSet;

use crate::core::model::FlowEdge;
use crate::dashboard::document::escape_html;
use crate::dashboard::palette::{node_color, TEXT_COLOR};

/// Node bar thickness
pub const NODE_THICKNESS: f64 = 20.0;

/// Vertical gap between nodes in one column
pub const NODE_PAD: f64 = 15.0;

const LABEL_GAP: f64 = 6.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SankeyNode {
    pub label: String,
    pub color: &'static str,
    pub column: usize,
    /// max(inbound, outbound)
    pub value: u64,
    pub x: f64,
    pub y: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SankeyLink {
    pub source: usize,
    pub target: usize,
    pub color: &'static str,
    pub hover: String,
    pub width: f64,
    /// Band center at the source node
    pub y0: f64,
    /// Band center at the target node
    pub y1: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SankeyDiagram {
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<SankeyNode>,
    pub links: Vec<SankeyLink>,
}

/// Ordered-unique labels: every source in row order, then every target
pub fn node_universe(flows: &[FlowEdge]) -> IndexSet<String> {
    flows
        .iter()
        .map(|e| e.source.clone())
        .chain(flows.iter().map(|e| e.target.clone()))
        .collect()
}

/// Hover text for one link
pub fn hover_label(edge: &FlowEdge) -> String {
    format!("{} → {}: {} units", edge.source, edge.target, edge.value)
}

/// Column of each node: longest path from a node with no inbound edge
fn node_columns(count: usize, edges: &[(usize, usize)]) -> Vec<usize> {
    let mut columns = vec![0usize; count];
    // At most `count` relaxation passes; a cycle simply stops deepening.
    for _ in 0..count {
        let mut changed = false;
        for &(source, target) in edges {
            if source != target && columns[target] < columns[source] + 1 {
                columns[target] = columns[source] + 1;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    columns
}

impl SankeyDiagram {
    /// Lay out the flow table inside a `width` × `height` box
    pub fn build(flows: &[FlowEdge], width: f64, height: f64) -> Self {
        let labels = node_universe(flows);
        let index = |label: &str| labels.get_index_of(label).unwrap_or_default();

        let pairs: Vec<(usize, usize)> = flows
            .iter()
            .map(|e| (index(e.source.as_str()), index(e.target.as_str())))
            .collect();
        let columns = node_columns(labels.len(), &pairs);

        let mut inbound = vec![0u64; labels.len()];
        let mut outbound = vec![0u64; labels.len()];
        for (edge, &(source, target)) in flows.iter().zip(&pairs) {
            outbound[source] = outbound[source].saturating_add(edge.value);
            inbound[target] = inbound[target].saturating_add(edge.value);
        }

        let mut nodes: Vec<SankeyNode> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| SankeyNode {
                label: label.clone(),
                color: node_color(label),
                column: columns[i],
                value: inbound[i].max(outbound[i]),
                x: 0.0,
                y: 0.0,
                height: 0.0,
            })
            .collect();

        let column_count = columns.iter().max().map_or(0, |max| max + 1);
        let scale = vertical_scale(&nodes, column_count, height);

        for column in 0..column_count {
            let x = if column_count > 1 {
                column as f64 * (width - NODE_THICKNESS) / (column_count - 1) as f64
            } else {
                0.0
            };

            let members: Vec<usize> = (0..nodes.len())
                .filter(|&i| nodes[i].column == column)
                .collect();
            let used: f64 = members
                .iter()
                .map(|&i| nodes[i].value as f64 * scale)
                .sum::<f64>()
                + NODE_PAD * members.len().saturating_sub(1) as f64;

            let mut y = ((height - used) / 2.0).max(0.0);
            for i in members {
                let node = &mut nodes[i];
                node.x = x;
                node.y = y;
                node.height = node.value as f64 * scale;
                y += node.height + NODE_PAD;
            }
        }

        let mut out_offset = vec![0.0f64; nodes.len()];
        let mut in_offset = vec![0.0f64; nodes.len()];
        let links = flows
            .iter()
            .zip(&pairs)
            .map(|(edge, &(source, target))| {
                let band = edge.value as f64 * scale;
                let y0 = nodes[source].y + out_offset[source] + band / 2.0;
                let y1 = nodes[target].y + in_offset[target] + band / 2.0;
                out_offset[source] += band;
                in_offset[target] += band;

                SankeyLink {
                    source,
                    target,
                    color: nodes[source].color,
                    hover: hover_label(edge),
                    width: band,
                    y0,
                    y1,
                }
            })
            .collect();

        Self {
            width,
            height,
            nodes,
            links,
        }
    }

    fn is_last_column(&self, node: &SankeyNode) -> bool {
        self.nodes.iter().all(|n| n.column <= node.column)
    }

    /// Render as a standalone `<svg>` element
    pub fn to_svg(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "<svg class=\"sankey\" xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {:.0} {:.0}\" preserveAspectRatio=\"xMidYMid meet\">\n",
            self.width, self.height
        ));

        output.push_str("<g class=\"links\" fill=\"none\" stroke-opacity=\"0.5\">\n");
        for link in &self.links {
            let x0 = self.nodes[link.source].x + NODE_THICKNESS;
            let x1 = self.nodes[link.target].x;
            let xm = (x0 + x1) / 2.0;
            output.push_str(&format!(
                "<path d=\"M{:.2},{:.2} C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}\" stroke=\"{}\" stroke-width=\"{:.2}\"><title>{}</title></path>\n",
                x0, link.y0, xm, link.y0, xm, link.y1, x1, link.y1,
                link.color,
                link.width,
                escape_html(&link.hover)
            ));
        }
        output.push_str("</g>\n");

        output.push_str("<g class=\"nodes\">\n");
        for node in &self.nodes {
            output.push_str(&format!(
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\" stroke=\"black\" stroke-width=\"0.5\"><title>{}: {} units</title></rect>\n",
                node.x,
                node.y,
                NODE_THICKNESS,
                node.height,
                node.color,
                escape_html(&node.label),
                node.value
            ));

            let (text_x, anchor) = if self.is_last_column(node) && node.column > 0 {
                (node.x - LABEL_GAP, "end")
            } else {
                (node.x + NODE_THICKNESS + LABEL_GAP, "start")
            };
            output.push_str(&format!(
                "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"{}\" dominant-baseline=\"middle\" fill=\"{}\" font-size=\"12\">{}</text>\n",
                text_x,
                node.y + node.height / 2.0,
                anchor,
                TEXT_COLOR,
                escape_html(&node.label)
            ));
        }
        output.push_str("</g>\n");

        output.push_str("</svg>");
        output
    }
}

/// Pixels per unit, limited by the most crowded column
fn vertical_scale(nodes: &[SankeyNode], column_count: usize, height: f64) -> f64 {
    (0..column_count)
        .filter_map(|column| {
            let members: Vec<&SankeyNode> = nodes.iter().filter(|n| n.column == column).collect();
            let total = members
                .iter()
                .map(|n| n.value)
                .fold(0, u64::saturating_add);
            if total == 0 {
                return None;
            }
            let room = height - NODE_PAD * members.len().saturating_sub(1) as f64;
            Some((room / total as f64).max(0.0))
        })
        .fold(None, |acc: Option<f64>, s| Some(acc.map_or(s, |a| a.min(s))))
        .unwrap_or(0.0)
}
