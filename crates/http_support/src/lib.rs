use reqwest::StatusCode;
use serde_json::Value;
use std::error::Error;

#[cfg(feature = "testing")]
pub mod testing;

/// Joins an error with its sources so the root cause (refused, timed out,
/// dns) is visible in one line. Causes already quoted by an outer message are
/// skipped.
pub fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Detail for a non-success response: the compact JSON error body when there
/// is one, otherwise the reason phrase.
pub fn status_detail(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => json.to_string(),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unknown status")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Layer {
        text: &'static str,
        source: Option<Box<Layer>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "{}", self.text)
        }
    }

    impl Error for Layer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            self.source.as_deref().map(|s| s as &(dyn Error + 'static))
        }
    }

    #[test]
    fn error_chain_pass_appends_causes() {
        let err = Layer {
            text: "error sending request",
            source: Some(Box::new(Layer {
                text: "connection refused",
                source: None,
            })),
        };
        assert_eq!(error_chain(&err), "error sending request: connection refused");
    }

    #[test]
    fn error_chain_pass_skips_repeated_cause() {
        let err = Layer {
            text: "client error (Connect): connection refused",
            source: Some(Box::new(Layer {
                text: "connection refused",
                source: None,
            })),
        };
        assert_eq!(error_chain(&err), "client error (Connect): connection refused");
    }

    #[test]
    fn status_detail_pass_json_body() {
        let detail = status_detail(StatusCode::BAD_REQUEST, r#"{"code":-1121,"msg":"Invalid symbol."}"#);
        assert_eq!(detail, r#"{"code":-1121,"msg":"Invalid symbol."}"#);
    }

    #[test]
    fn status_detail_pass_reason_fallback() {
        let detail = status_detail(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(detail, "Bad Gateway");
    }
}
