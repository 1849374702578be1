use comfy_table::presets::NOTHING;
use comfy_table::{Cell, CellAlignment, Table};
use itertools::Itertools;
use log::debug;
use market_model::{DisclosureTable, Row, value_text};
use serde_json::Value;
use std::io::{self, Write};

pub const PREFERRED_COLUMNS: [&str; 5] = [
    "ReportDate",
    "Representative",
    "Ticker",
    "Transaction",
    "Amount",
];

const WATCH_COLUMN: &str = "Representative";
const WATCH_NAME: &str = "Pelosi";
const TOP_ROWS: usize = 5;
const WATCH_ROWS: usize = 3;

pub fn write_report<W: Write>(table: DisclosureTable, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\nActual Columns found: [{}]",
        table.columns().iter().map(|c| format!("'{}'", c)).join(", ")
    )?;

    let columns = table.select_columns(&PREFERRED_COLUMNS);
    let table = table.sorted_by_date_desc();
    debug!("write_report | selected: {:?} | rows: {}", columns, table.len());

    writeln!(out, "\nSuccess! Top {} Latest Trades:", TOP_ROWS)?;
    writeln!(out, "{}", render_rows(&columns, table.head(TOP_ROWS)))?;

    let watched = table.filter_contains(WATCH_COLUMN, WATCH_NAME);
    if watched.is_empty() {
        writeln!(out, "\nNo recent {} trades found.", WATCH_NAME)?;
    } else {
        writeln!(out, "\n{} Watch: Found {} trades!", WATCH_NAME, watched.len())?;
        writeln!(out, "{}", render_rows(&columns, watched.head(WATCH_ROWS)))?;
    }

    Ok(())
}

/// Borderless, right-aligned, no index column.
fn render_rows(columns: &[String], rows: &[Row]) -> String {
    if columns.is_empty() || rows.is_empty() {
        return "(empty table)".to_string();
    }

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(columns.iter().map(Cell::new));
    for row in rows {
        table.add_row(columns.iter().map(|column| Cell::new(cell_text(row, column))));
    }
    for column in table.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table.to_string()
}

fn cell_text(row: &Row, column: &str) -> String {
    match row.get(column) {
        None | Some(Value::Null) => "NaN".to_string(),
        Some(value) => value_text(value),
    }
}
