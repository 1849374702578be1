use http_support::status_detail;
use log::debug;
use market_model::{DisclosureTable, Row};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::error::QuiverError;

const QUIVER_BASE_API_URL: &str = "https://api.quiverquant.com";
const CONGRESS_TRADING_PATH: &str = "/beta/live/congresstrading";

pub struct QuiverAPI {
    base_url: String,
    client: reqwest::blocking::Client,
    headers: HeaderMap,
}

impl QuiverAPI {
    pub fn new(token: &str) -> Result<Self, QuiverError> {
        Self::with_base_url(QUIVER_BASE_API_URL, token)
    }

    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self, QuiverError> {
        // same `Token` scheme the official quiverquant python client sends
        let mut authorization = HeaderValue::from_str(&format!("Token {}", token))
            .map_err(|_| QuiverError::InvalidToken)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);

        Ok(QuiverAPI {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
            headers,
        })
    }

    /// Latest congressional trading disclosures, with whatever columns the API
    /// chose to return today.
    pub fn congress_trading(&self) -> Result<DisclosureTable, QuiverError> {
        let url = format!("{}{}", self.base_url, CONGRESS_TRADING_PATH);

        debug!("congress_trading | url: {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .send()?;

        let status = response.status();
        let body = response.text()?;

        debug!("congress_trading | status: {} | bytes: {}", status, body.len());

        if !status.is_success() {
            return Err(QuiverError::Status {
                status: status.as_u16(),
                detail: status_detail(status, &body),
            });
        }

        let table = parse_disclosures(&body)?;
        debug!("congress_trading | rows: {}", table.len());
        Ok(table)
    }
}

pub fn parse_disclosures(body: &str) -> Result<DisclosureTable, QuiverError> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|e| QuiverError::UnexpectedShape(format!("body is not JSON ({})", e)))?;

    let records = match payload {
        Value::Array(records) => records,
        other => {
            return Err(QuiverError::UnexpectedShape(format!(
                "expected an array of records, got {}",
                kind(&other)
            )));
        }
    };

    let mut rows: Vec<Row> = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match record {
            Value::Object(row) => rows.push(row),
            other => {
                return Err(QuiverError::UnexpectedShape(format!(
                    "record {} is {}, not an object",
                    index,
                    kind(&other)
                )));
            }
        }
    }

    Ok(DisclosureTable::from_rows(rows))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
