use binance_api::{BinanceAPI, BinanceError};
use clap::Parser;
use log::debug;
use market_model::PriceQuote;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

mod utils;

/// Print the latest Binance spot price as `timestamp<TAB>symbol<TAB>price`.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Trading pair, case-insensitive.
    #[arg(default_value = utils::DEFAULT_SYMBOL)]
    symbol: String,

    /// Request timeout in seconds.
    #[arg(long, default_value = "10", value_parser = utils::parse_timeout)]
    timeout: Duration,
}

struct Config {
    symbol: String,
    timeout: Duration,
}

impl Config {
    fn new(args: Args) -> Config {
        Config {
            symbol: utils::normalize_symbol(&args.symbol),
            timeout: args.timeout,
        }
    }
}

fn run(config: &Config) -> Result<PriceQuote, BinanceError> {
    let api = BinanceAPI::new(config.timeout)?;
    api.fetch_price(&config.symbol)
}

/// Prints the outcome and picks the exit code.
fn finish<O: Write, E: Write>(
    result: Result<PriceQuote, BinanceError>,
    timestamp: i64,
    out: &mut O,
    err: &mut E,
) -> ExitCode {
    match result {
        Ok(quote) => match writeln!(out, "{}", quote.to_line(timestamp)) {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        },
        Err(e) => {
            let _ = writeln!(err, "ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };
    let config = Config::new(args);
    debug!("main | symbol: {} | timeout: {:?}", config.symbol, config.timeout);

    let result = run(&config);
    finish(
        result,
        chrono::Utc::now().timestamp(),
        &mut io::stdout(),
        &mut io::stderr(),
    )
}
