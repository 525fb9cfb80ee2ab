use crate::view::SummaryView;
use comfy_table::presets::{ASCII_FULL, ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use configuration::TableStyle;

/// Appended to the value of a flagged row so the mark survives plain-text export.
pub const FLAG_MARKER: &str = " (!)";

/// Builds a three-column table (label, value, unit) from the view.
///
/// Flagged values are painted red when the table is printed to a terminal.
pub fn render_table(view: &SummaryView, style: TableStyle) -> Table {
    let mut table = Table::new();
    table
        .load_preset(match style {
            TableStyle::Utf8 => UTF8_FULL,
            TableStyle::Ascii => ASCII_FULL,
            TableStyle::Markdown => ASCII_MARKDOWN,
        })
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            &view.labels.header_item,
            &view.labels.header_value,
            &view.labels.header_unit,
        ]);

    for row in &view.rows {
        let value = if row.flagged {
            Cell::new(format!("{}{}", row.value, FLAG_MARKER)).fg(Color::Red)
        } else {
            Cell::new(&row.value)
        };
        table.add_row(vec![Cell::new(&row.label), value, Cell::new(&row.unit)]);
    }

    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table
}
