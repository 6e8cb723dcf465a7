use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use serde::Serialize;

/// How a calculation result is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    TotalValue,
    Warning,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Warning => style(text).yellow(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Formats a monetary amount with the configured symbol prefix.
pub fn money(symbol: &str, value: f64) -> String {
    format!("{symbol}{value:.2}")
}

/// Right-aligned cell for a monetary amount. Non-finite amounts are shown in red.
pub fn money_cell(symbol: &str, value: f64) -> Cell {
    let cell = Cell::new(money(symbol, value)).set_alignment(CellAlignment::Right);
    if value.is_finite() {
        cell
    } else {
        cell.fg(Color::Red)
    }
}

/// Right-aligned plain value cell.
pub fn value_cell(text: impl ToString) -> Cell {
    Cell::new(text.to_string()).set_alignment(CellAlignment::Right)
}

/// Formats a cell with bold and green text
pub fn total_cell(text: &str) -> Cell {
    Cell::new(text)
        .add_attribute(Attribute::Bold)
        .fg(Color::Green)
        .set_alignment(CellAlignment::Right)
}

/// Builds the two-column `Field | Value` table used by every summary.
pub fn summary_table(rows: Vec<(&str, Cell)>) -> Table {
    let mut table = new_styled_table();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), value]);
    }
    table
}

/// Renders `result` in the requested format.
pub fn render<T: Serialize>(
    format: OutputFormat,
    result: &T,
    as_table: impl FnOnce(&T) -> String,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(as_table(result)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_money_formatting() {
        assert_eq!(money("€", 1520.0559), "€1520.06");
        assert_eq!(money("$", -475.0), "$-475.00");
        assert_eq!(money("€", f64::NAN), "€NaN");
        assert_eq!(money("€", f64::INFINITY), "€inf");
    }

    #[test]
    fn test_summary_table_lists_rows() {
        let table = summary_table(vec![
            ("Initial amount", money_cell("€", 10000.0)),
            ("Total years", value_cell(10)),
        ]);
        let rendered = table.to_string();

        assert!(rendered.contains("Field"));
        assert!(rendered.contains("Initial amount"));
        assert!(rendered.contains("€10000.00"));
        assert!(rendered.contains("Total years"));
    }

    #[test]
    fn test_render_json_ignores_table_renderer() -> anyhow::Result<()> {
        let value = json!({ "amount": 1.5 });
        let rendered = render(OutputFormat::Json, &value, |_| unreachable!())?;
        assert_eq!(rendered, "{\n  \"amount\": 1.5\n}");
        Ok(())
    }

    #[test]
    fn test_render_table_uses_renderer() -> anyhow::Result<()> {
        let rendered = render(OutputFormat::Table, &1, |v| format!("value {v}"))?;
        assert_eq!(rendered, "value 1");
        Ok(())
    }
}
