//! HTML rendering of the address table

use addressmon_table::{NetworkAddress, TableRow, TableView};

const CELL_STYLE: &str = "padding: 0.5rem;";

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_head(table: &TableView) -> String {
    let cells: String = table
        .headers()
        .iter()
        .map(|h| format!(r#"<th style="padding: 0.5rem; text-align: left;">{}</th>"#, h))
        .collect();
    format!(
        r#"<thead><tr style="border-bottom: 2px solid #dee2e6;">{}</tr></thead>"#,
        cells
    )
}

fn render_network_address(address: &NetworkAddress) -> String {
    let text = escape_html(&address.to_string());
    match address.family {
        Some(family) => format!(r#"<span title="{}">{}</span>"#, family, text),
        None => text,
    }
}

fn render_row(row: &TableRow) -> String {
    let network_addresses = row
        .network_addresses
        .iter()
        .map(render_network_address)
        .collect::<Vec<_>>()
        .join(",<br>");

    format!(
        r#"<tr style="border-bottom: 1px solid #dee2e6;">
                    <td style="{cell} font-family: monospace; background-color: {bg};">{address}</td>
                    <td style="{cell}">{age}</td>
                    <td style="{cell}">{network_addresses}</td>
                    <td style="{cell}">{description}</td>
                </tr>"#,
        cell = CELL_STYLE,
        bg = row.status.background(),
        address = escape_html(&row.address),
        age = escape_html(row.age.as_deref().unwrap_or("")),
        network_addresses = network_addresses,
        description = escape_html(&row.description),
    )
}

/// Render the table element with head and body
pub fn render_table(table: &TableView) -> String {
    let rows: String = table.rows.iter().map(render_row).collect();
    format!(
        r#"<table id="addresses" style="border-collapse: collapse;">{}<tbody id="address-body">{}</tbody></table>"#,
        render_head(table),
        rows
    )
}

/// Render a complete page.
///
/// Without a table (no load has succeeded) the table element is left empty:
/// neither header nor body is built.
pub fn render_page(table: Option<&TableView>) -> String {
    let table_html = match table {
        Some(table) => render_table(table),
        None => r#"<table id="addresses" style="border-collapse: collapse;"></table>"#.to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Address Monitor</title>
</head>
<body style="font-family: system-ui, sans-serif; margin: 0 auto; padding: 1rem;">
    <h1>Address Monitor</h1>
    {table_html}
</body>
</html>"#,
        table_html = table_html,
    )
}
