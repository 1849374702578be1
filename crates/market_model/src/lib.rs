mod disclosure;
mod quote;

use serde_json::Value;

pub use disclosure::{DATE_COLUMNS, DisclosureTable, Row, TradeRecord, parse_report_date};
pub use quote::PriceQuote;

/// Text of a JSON cell as it should be printed: strings verbatim, everything
/// else as its JSON form.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
