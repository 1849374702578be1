use http_support::status_detail;
use log::debug;
use market_model::PriceQuote;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use std::time::Duration;

use crate::error::BinanceError;

const BINANCE_BASE_API_URL: &str = "https://api.binance.com";
const TICKER_PRICE_PATH: &str = "/api/v3/ticker/price";
const CLIENT_USER_AGENT: &str = "binance-spot-price-fetcher/1.0";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct BinanceAPI {
    base_url: String,
    client: reqwest::blocking::Client,
    headers: HeaderMap,
}

impl BinanceAPI {
    pub fn new(timeout: Duration) -> Result<Self, BinanceError> {
        Self::with_base_url(BINANCE_BASE_API_URL, timeout)
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, BinanceError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(BinanceAPI {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            headers,
        })
    }

    /// One GET against the spot ticker endpoint. Never retried.
    pub fn fetch_price(&self, symbol: &str) -> Result<PriceQuote, BinanceError> {
        let symbol = symbol.to_uppercase();
        let url = format!("{}{}", self.base_url, TICKER_PRICE_PATH);

        debug!("fetch_price | url: {} | symbol: {}", url, symbol);

        let response = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(&[("symbol", symbol.as_str())])
            .send()?;

        let status = response.status();
        let body = response.text()?;

        debug!("fetch_price | status: {} | body: {}", status, body);

        parse_price_response(status, &body, &symbol)
    }
}

pub fn parse_price_response(
    status: StatusCode,
    body: &str,
    symbol: &str,
) -> Result<PriceQuote, BinanceError> {
    if !status.is_success() {
        // error bodies usually look like {"code":-1121,"msg":"Invalid symbol."}
        return Err(BinanceError::Http {
            status: status.as_u16(),
            detail: status_detail(status, body),
        });
    }

    let payload: Value = serde_json::from_str(body).map_err(|_| BinanceError::Parse)?;

    PriceQuote::from_payload(&payload, symbol)
        .ok_or_else(|| BinanceError::UnexpectedResponse(payload.to_string()))
}
