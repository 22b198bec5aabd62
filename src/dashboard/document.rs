//! Dashboard document - both panels stacked in one self-contained HTML page

use crate::core::model::{FlowEdge, SalesSummaryRow, DEFAULT_PERIOD};
use crate::core::period::display_period;
use crate::dashboard::palette::{TEXT_COLOR, TITLE_COLOR};
use crate::dashboard::sankey::SankeyDiagram;
use crate::dashboard::table;

/// Page height in pixels
pub const PAGE_HEIGHT: u32 = 850;

const DIAGRAM_WIDTH: f64 = 1140.0;
const DIAGRAM_HEIGHT: f64 = 420.0;

pub const FLOW_PANEL_TITLE: &str = "Supply Chain Flow";
pub const TABLE_PANEL_TITLE: &str = "Sales by Channel and Category";

/// Escape text for HTML element content and attribute values
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Period shown in the title: the first tagged row wins
fn dashboard_period(flows: &[FlowEdge], summary: &[SalesSummaryRow]) -> String {
    flows
        .iter()
        .map(|e| e.period.as_str())
        .chain(summary.iter().map(|r| r.period.as_str()))
        .find(|p| !p.is_empty())
        .map(display_period)
        .unwrap_or_else(|| display_period(DEFAULT_PERIOD))
}

/// Build the whole dashboard page
pub fn render_dashboard(flows: &[FlowEdge], summary: &[SalesSummaryRow]) -> String {
    let period = escape_html(&dashboard_period(flows, summary));
    let diagram = SankeyDiagram::build(flows, DIAGRAM_WIDTH, DIAGRAM_HEIGHT);

    let mut output = String::new();
    output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    output.push_str(&format!(
        "<title>Supply Chain Dashboard – {}</title>\n",
        period
    ));
    output.push_str("<style>\n");
    output.push_str(&format!(
        "body {{ margin: 0; background: #FFFFFF; font-family: Arial, sans-serif; color: {}; }}\n",
        TEXT_COLOR
    ));
    output.push_str(&format!(
        ".dashboard {{ min-height: {}px; padding: 30px; box-sizing: border-box; }}\n",
        PAGE_HEIGHT
    ));
    output.push_str(&format!(
        "h1 {{ font-size: 24px; color: {}; margin: 0 0 4px 0; }}\n",
        TITLE_COLOR
    ));
    output.push_str(".subtitle { font-size: 14px; margin: 0 0 24px 0; }\n");
    output.push_str("h2 { font-size: 16px; text-align: center; margin: 12px 0; }\n");
    output.push_str(".sankey { width: 100%; height: auto; }\n");
    output.push_str("table.summary { width: 100%; border-collapse: collapse; }\n");
    output.push_str("table.summary th, table.summary td { text-align: left; padding: 6px 8px; border: 1px solid #FFFFFF; }\n");
    output.push_str("</style>\n</head>\n<body>\n<div class=\"dashboard\">\n");

    output.push_str(&format!(
        "<h1>Supply Chain Dashboard – {}</h1>\n",
        period
    ));
    output.push_str(&format!(
        "<p class=\"subtitle\">This dashboard tracks product flow from suppliers to sales channels in {}.</p>\n",
        period
    ));

    output.push_str(&format!(
        "<section class=\"panel flow\">\n<h2>{}</h2>\n",
        FLOW_PANEL_TITLE
    ));
    output.push_str(&diagram.to_svg());
    output.push_str("\n</section>\n");

    output.push_str(&format!(
        "<section class=\"panel table\">\n<h2>{}</h2>\n",
        TABLE_PANEL_TITLE
    ));
    output.push_str(&table::to_html(summary));
    output.push_str("\n</section>\n");

    output.push_str("</div>\n</body>\n</html>\n");
    output
}
