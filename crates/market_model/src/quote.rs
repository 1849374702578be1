use serde_json::Value;

use crate::value_text;

#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub symbol: String,
    /// Decimal text exactly as the exchange sent it.
    pub price: String,
}

impl PriceQuote {
    /// Reads a ticker payload. `None` unless it is an object with a `price` key.
    pub fn from_payload(payload: &Value, requested_symbol: &str) -> Option<PriceQuote> {
        let object = payload.as_object()?;
        let price = object.get("price")?;
        let symbol = object
            .get("symbol")
            .map(value_text)
            .unwrap_or_else(|| requested_symbol.to_string());

        Some(PriceQuote {
            symbol,
            price: value_text(price),
        })
    }

    pub fn to_line(&self, timestamp: i64) -> String {
        format!("{}\t{}\t{}", timestamp, self.symbol, self.price)
    }
}
