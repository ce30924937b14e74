use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UsageError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response{} is not valid JSON: {source}", status_suffix(.status))]
    Decode {
        status: StatusCode,
        source: serde_json::Error,
    },

    #[error("Response{} has no numeric data.usage: {source}", status_suffix(.status))]
    Shape {
        status: StatusCode,
        source: serde_json::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Empty for 2xx statuses.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn status_suffix(status: &StatusCode) -> String {
    if status.is_success() {
        String::new()
    } else {
        format!(" (HTTP {status})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("not json").unwrap_err()
    }

    #[test]
    fn test_decode_error_omits_success_status() {
        let err = UsageError::Decode {
            status: StatusCode::OK,
            source: json_error(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Response is not valid JSON"), "{msg}");
    }

    #[test]
    fn test_shape_error_names_failed_status() {
        let err = UsageError::Shape {
            status: StatusCode::UNAUTHORIZED,
            source: json_error(),
        };
        let msg = err.to_string();
        assert!(msg.contains("(HTTP 401 Unauthorized)"), "{msg}");
    }

    #[test]
    fn test_config_error_message() {
        let err = UsageError::Config("no API key".into());
        assert_eq!(err.to_string(), "Config error: no API key");
    }
}
