use dotenvy::dotenv;
use log::debug;
use market_model::DisclosureTable;
use quiver_api::{QuiverAPI, QuiverError};
use std::io::{self, Write};
use std::{env, process::ExitCode};

use error::ReportError;

mod error;
mod report;

const TOKEN_VAR: &str = "QUIVER_API_TOKEN";

#[derive(Debug)]
struct Config {
    token: String,
}

impl Config {
    fn new() -> Result<Config, ReportError> {
        dotenv().ok();
        Config::from_token(env::var(TOKEN_VAR).ok())
    }

    fn from_token(token: Option<String>) -> Result<Config, ReportError> {
        match token {
            Some(token) if !token.trim().is_empty() => Ok(Config {
                token: token.trim().to_string(),
            }),
            _ => Err(ReportError::MissingToken),
        }
    }
}

trait CongressTrading {
    fn congress_trading(&self) -> Result<DisclosureTable, QuiverError>;
}

impl CongressTrading for QuiverAPI {
    fn congress_trading(&self) -> Result<DisclosureTable, QuiverError> {
        QuiverAPI::congress_trading(self)
    }
}

fn run<S, C, W>(config: &Config, connect: C, out: &mut W) -> Result<(), ReportError>
where
    S: CongressTrading,
    C: FnOnce(&str) -> Result<S, QuiverError>,
    W: Write,
{
    writeln!(out, "Connecting to Quiver Quant API...")?;
    let api = connect(&config.token)?;

    writeln!(out, "Fetching Congress Trading Data...")?;
    let table = api.congress_trading()?;
    debug!("run | rows: {} | columns: {}", table.len(), table.columns().len());

    report::write_report(table, out)?;
    Ok(())
}

/// A missing token is only a warning; everything else fails the process.
fn finish<E: Write>(result: Result<(), ReportError>, err: &mut E) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(ReportError::MissingToken) => {
            debug!("finish | {} not set, request skipped", TOKEN_VAR);
            let _ = writeln!(err, "WARNING: {}", ReportError::MissingToken);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let _ = writeln!(err, "ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = Config::new().and_then(|config| run(&config, QuiverAPI::new, &mut out));
    finish(result, &mut io::stderr())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Fixed(DisclosureTable);

    impl CongressTrading for Fixed {
        fn congress_trading(&self) -> Result<DisclosureTable, QuiverError> {
            Ok(self.0.clone())
        }
    }

    fn fixture() -> DisclosureTable {
        let row = json!({"ReportDate": "2024-01-05", "Representative": "Nancy Pelosi", "Ticker": "NVDA"});
        DisclosureTable::from_rows(vec![row.as_object().unwrap().clone()])
    }

    #[test]
    fn config_from_token_fail_absent() {
        let result = Config::from_token(None);
        assert!(matches!(result, Err(ReportError::MissingToken)));
    }

    #[test]
    fn config_from_token_fail_blank() {
        let result = Config::from_token(Some("  ".to_string()));
        assert!(matches!(result, Err(ReportError::MissingToken)));
    }

    #[test]
    fn config_from_token_pass_trimmed() {
        let config = Config::from_token(Some(" abc123\n".to_string())).unwrap();
        assert_eq!(config.token, "abc123");
    }

    #[test]
    fn run_fail_missing_token_never_connects() {
        let mut connected = false;
        let mut out = Vec::new();

        let result = Config::from_token(None).and_then(|config| {
            run(
                &config,
                |_| {
                    connected = true;
                    Ok(Fixed(fixture()))
                },
                &mut out,
            )
        });

        assert!(!connected);
        assert!(out.is_empty());

        let mut err = Vec::new();
        assert_eq!(finish(result, &mut err), ExitCode::SUCCESS);
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "WARNING: Please set the QUIVER_API_TOKEN environment variable\n"
        );
    }

    #[test]
    fn run_pass_passes_token_and_reports() {
        let config = Config::from_token(Some("abc123".to_string())).unwrap();
        let mut seen = String::new();
        let mut out = Vec::new();

        run(
            &config,
            |token| {
                seen = token.to_string();
                Ok(Fixed(fixture()))
            },
            &mut out,
        )
        .unwrap();

        assert_eq!(seen, "abc123");
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Connecting to Quiver Quant API...\nFetching Congress Trading Data...\n"));
        assert!(output.contains("Pelosi Watch: Found 1 trades!"));
    }

    #[test]
    fn run_fail_transport_exits_with_error() {
        let config = Config::from_token(Some("abc123".to_string())).unwrap();
        let mut out = Vec::new();

        let result = run(
            &config,
            |_| -> Result<Fixed, QuiverError> {
                Err(QuiverError::Transport("connection refused".to_string()))
            },
            &mut out,
        );

        let output = String::from_utf8(out).unwrap();
        assert!(!output.contains("Fetching"));

        let mut err = Vec::new();
        assert_eq!(finish(result, &mut err), ExitCode::FAILURE);
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "ERROR: Network error: connection refused\n"
        );
    }

    #[test]
    fn finish_pass_success() {
        let mut err = Vec::new();
        assert_eq!(finish(Ok(()), &mut err), ExitCode::SUCCESS);
        assert!(err.is_empty());
    }
}
