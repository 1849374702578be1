use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::debug;
use serde_json::{Map, Value};

use crate::value_text;

pub type Row = Map<String, Value>;

/// Columns that may carry the disclosure date, highest priority first.
pub const DATE_COLUMNS: [&str; 3] = ["ReportDate", "TransactionDate", "Filed"];

const REPRESENTATIVE: &str = "Representative";
const TICKER: &str = "Ticker";
const TRANSACTION: &str = "Transaction";
const AMOUNT: &str = "Amount";

#[derive(Debug, Clone, PartialEq)]
pub struct TradeRecord {
    pub report_date: Option<NaiveDateTime>,
    pub representative: Option<String>,
    pub ticker: Option<String>,
    pub transaction: Option<String>,
    pub amount: Option<String>,
}

impl TradeRecord {
    pub fn from_row(row: &Row, date_column: Option<&str>) -> TradeRecord {
        TradeRecord {
            report_date: date_column
                .and_then(|column| cell(row, column))
                .and_then(|text| parse_report_date(&text)),
            representative: cell(row, REPRESENTATIVE),
            ticker: cell(row, TICKER),
            transaction: cell(row, TRANSACTION),
            amount: cell(row, AMOUNT),
        }
    }
}

/// Rows of a disclosure listing together with the column names the API
/// actually returned. Nothing about the schema is assumed up front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisclosureTable {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl DisclosureTable {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        DisclosureTable { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// The first of [`DATE_COLUMNS`] present in this table.
    pub fn date_column(&self) -> Option<&'static str> {
        DATE_COLUMNS.into_iter().find(|c| self.has_column(c))
    }

    /// Keeps the preferred names that exist here, in preferred order.
    pub fn select_columns(&self, preferred: &[&str]) -> Vec<String> {
        preferred
            .iter()
            .filter(|c| self.has_column(c))
            .map(|c| c.to_string())
            .collect()
    }

    /// Newest first by the unified date. Rows without a usable date go last and
    /// ties keep their API order. Without any date column the order is untouched.
    pub fn sorted_by_date_desc(self) -> Self {
        let Some(date_column) = self.date_column() else {
            debug!("sorted_by_date_desc | no date column, keeping api order");
            return self;
        };
        debug!("sorted_by_date_desc | column: {}", date_column);

        let mut keyed: Vec<(Option<NaiveDateTime>, Row)> = self
            .rows
            .into_iter()
            .map(|row| {
                let date = TradeRecord::from_row(&row, Some(date_column)).report_date;
                (date, row)
            })
            .collect();
        keyed.sort_by(|a, b| b.0.cmp(&a.0));

        DisclosureTable {
            columns: self.columns,
            rows: keyed.into_iter().map(|(_, row)| row).collect(),
        }
    }

    /// Rows whose string cell in `column` contains `needle`, ignoring case.
    /// Missing and non-string cells never match.
    pub fn filter_contains(&self, column: &str, needle: &str) -> Self {
        let needle = needle.to_lowercase();
        let rows = self
            .rows
            .iter()
            .filter(|row| {
                row.get(column)
                    .and_then(Value::as_str)
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();

        DisclosureTable {
            columns: self.columns.clone(),
            rows,
        }
    }

    pub fn head(&self, n: usize) -> &[Row] {
        &self.rows[..n.min(self.rows.len())]
    }

    #[cfg(test)]
    pub fn records(&self) -> Vec<TradeRecord> {
        let date_column = self.date_column();
        self.rows
            .iter()
            .map(|row| TradeRecord::from_row(row, date_column))
            .collect()
    }
}

fn cell(row: &Row, column: &str) -> Option<String> {
    match row.get(column) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value_text(value)),
    }
}

/// Parses the date formats the disclosure API has been seen to use.
pub fn parse_report_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime);
        }
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|datetime| datetime.naive_utc())
}
