//! Sales summary table panel

use crate::core::model::SalesSummaryRow;
use crate::dashboard::document::escape_html;
use crate::dashboard::palette::{CELL_FILL, HEADER_FILL, HIGHLIGHT_FILL, TEXT_COLOR};

pub const HEADERS: [&str; 4] = ["Channel", "Category", "Total Sales", "Period"];

/// Largest total over all rows
pub fn max_total(rows: &[SalesSummaryRow]) -> Option<u64> {
    rows.iter().map(|r| r.total_sales).max()
}

/// Per row: does it hold the maximum total (ties all count)
pub fn highlighted_rows(rows: &[SalesSummaryRow]) -> Vec<bool> {
    let max = max_total(rows);
    rows.iter().map(|r| Some(r.total_sales) == max).collect()
}

/// Render the summary as an HTML `<table>`
pub fn to_html(rows: &[SalesSummaryRow]) -> String {
    let mut output = String::new();
    output.push_str("<table class=\"summary\">\n<thead><tr>");
    for header in HEADERS {
        output.push_str(&format!(
            "<th style=\"background:{};color:white;font-size:12px\"><b>{}</b></th>",
            HEADER_FILL, header
        ));
    }
    output.push_str("</tr></thead>\n<tbody>\n");

    for (row, highlight) in rows.iter().zip(highlighted_rows(rows)) {
        let sales_fill = if highlight { HIGHLIGHT_FILL } else { CELL_FILL };
        output.push_str(if highlight {
            "<tr class=\"max\">"
        } else {
            "<tr>"
        });

        let cells = [
            (escape_html(&row.channel), CELL_FILL),
            (escape_html(&row.category), CELL_FILL),
            (row.total_sales.to_string(), sales_fill),
            (escape_html(&row.period), CELL_FILL),
        ];
        for (value, fill) in cells {
            output.push_str(&format!(
                "<td style=\"background:{};color:{};font-size:11px\">{}</td>",
                fill, TEXT_COLOR, value
            ));
        }
        output.push_str("</tr>\n");
    }

    output.push_str("</tbody>\n</table>");
    output
}
