//! Dashboard colors

/// Node color by label
pub const NODE_COLORS: [(&str, &str); 8] = [
    ("Supplier A", "#264653"),
    ("Supplier B", "#2A9D8F"),
    ("Supplier C", "#E76F51"),
    ("Electronics", "#F4A261"),
    ("Clothing", "#E9C46A"),
    ("Food", "#A8DADC"),
    ("Online", "#457B9D"),
    ("Retail Store", "#1D3557"),
];

/// Color for labels missing from `NODE_COLORS`
pub const FALLBACK_COLOR: &str = "#999999";

pub const HEADER_FILL: &str = "#264653";
pub const CELL_FILL: &str = "#F5F6F5";
pub const HIGHLIGHT_FILL: &str = "#FFE5D9";
pub const TEXT_COLOR: &str = "#333333";
pub const TITLE_COLOR: &str = "#1A1A1A";

/// Look up a node's color, falling back to gray
pub fn node_color(label: &str) -> &'static str {
    NODE_COLORS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_color() {
        assert_eq!(node_color("Supplier A"), "#264653");
        assert_eq!(node_color("Retail Store"), "#1D3557");
    }

    #[test]
    fn test_node_color_fallback() {
        assert_eq!(node_color("Warehouse"), FALLBACK_COLOR);
        assert_eq!(node_color("supplier a"), FALLBACK_COLOR);
    }
}
