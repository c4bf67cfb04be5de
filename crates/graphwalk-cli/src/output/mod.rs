//! Output formatting for CLI commands.

use comfy_table::{Cell, Color, ContentArrangement, Table};
use graphwalk_common::types::NodeId;
use serde::Serialize;

/// Output format selection.
#[derive(Clone, Copy)]
pub enum Format {
    Table,
    Json,
}

impl From<crate::OutputFormat> for Format {
    fn from(f: crate::OutputFormat) -> Self {
        match f {
            crate::OutputFormat::Table => Format::Table,
            crate::OutputFormat::Json => Format::Json,
        }
    }
}

/// Print data as pretty JSON.
pub fn print_json<T: Serialize>(data: &T, quiet: bool) -> anyhow::Result<()> {
    if !quiet {
        println!("{}", serde_json::to_string_pretty(data)?);
    }
    Ok(())
}

/// Create a styled table with consistent formatting.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);
    table
}

/// Add a header row to a table.
pub fn add_header(table: &mut Table, headers: &[&str]) {
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
}

/// Build a key-value table (for info displays).
pub fn key_value_table(items: &[(&str, String)]) -> Table {
    let mut table = create_table();
    add_header(&mut table, &["Property", "Value"]);
    for (key, value) in items {
        table.add_row(vec![Cell::new(key).fg(Color::Green), Cell::new(value)]);
    }
    table
}

/// Print a key-value table (respects quiet mode).
pub fn print_key_value_table(items: &[(&str, String)], quiet: bool) {
    if !quiet {
        println!("{}", key_value_table(items));
    }
}

/// Format a node sequence as `[0, 1, 4]`.
pub fn format_nodes(nodes: &[NodeId]) -> String {
    let parts: Vec<String> = nodes.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

/// Format an edge sequence as `[(0, 1), (0, 2)]`.
pub fn format_edges(edges: &[(NodeId, NodeId)]) -> String {
    let parts: Vec<String> = edges.iter().map(|(a, b)| format!("({a}, {b})")).collect();
    format!("[{}]", parts.join(", "))
}

/// Print a success message.
pub fn success(msg: &str, quiet: bool) {
    if !quiet {
        println!("✓ {msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_nodes() {
        assert_eq!(format_nodes(&[]), "[]");
        let nodes = [0, 1, 4].map(NodeId::new);
        assert_eq!(format_nodes(&nodes), "[0, 1, 4]");
    }

    #[test]
    fn test_format_edges() {
        let edges = [(NodeId::new(0), NodeId::new(1)), (NodeId::new(3), NodeId::new(4))];
        assert_eq!(format_edges(&edges), "[(0, 1), (3, 4)]");
    }

    #[test]
    fn test_key_value_table_contents() {
        let table = key_value_table(&[("Nodes", "6".to_string())]);
        let rendered = table.to_string();
        assert!(rendered.contains("Property"));
        assert!(rendered.contains("Nodes"));
        assert!(rendered.contains('6'));
    }
}
