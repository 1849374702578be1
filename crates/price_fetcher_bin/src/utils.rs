use std::time::Duration;

pub const DEFAULT_SYMBOL: &str = "BTCUSDT";

pub fn normalize_symbol(symbol: &str) -> String {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return DEFAULT_SYMBOL.to_string();
    }
    symbol.to_uppercase()
}

pub fn parse_timeout(raw: &str) -> Result<Duration, String> {
    let seconds: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{}` is not a number of seconds", raw))?;
    if seconds <= 0.0 {
        return Err("timeout must be greater than zero".to_string());
    }
    Duration::try_from_secs_f64(seconds).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_symbol_pass_no_harm() {
        let result = normalize_symbol("BTCUSDT");
        assert_eq!(result, "BTCUSDT".to_string());
    }

    #[test]
    fn normalize_symbol_pass_to_uppercase() {
        let result = normalize_symbol("ethUsdt");
        assert_eq!(result, "ETHUSDT".to_string());
    }

    #[test]
    fn normalize_symbol_pass_trim() {
        let result = normalize_symbol("  solusdt\n");
        assert_eq!(result, "SOLUSDT".to_string());
    }

    #[test]
    fn normalize_symbol_pass_empty_is_default() {
        let result = normalize_symbol("   ");
        assert_eq!(result, DEFAULT_SYMBOL.to_string());
    }

    #[test]
    fn parse_timeout_pass_fractional() {
        let result = parse_timeout("2.5");
        assert_eq!(result, Ok(Duration::from_millis(2500)));
    }

    #[test]
    fn parse_timeout_fail_zero() {
        assert!(parse_timeout("0").is_err());
    }

    #[test]
    fn parse_timeout_fail_not_number() {
        assert!(parse_timeout("ten").is_err());
    }
}
