use thiserror::Error;

/// Everything that can stop a notification from being delivered.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("webhook URL must not be empty")]
    EmptyEndpoint,

    /// DNS, connection and timeout failures, as well as client build errors.
    #[error("network request failed: {}", source_chain(.0))]
    Transport(#[from] reqwest::Error),

    /// The webhook answered with something other than 200.
    #[error("HTTP error {status}: {body}")]
    Protocol { status: u16, body: String },

    #[error("failed to parse JSON response: {0}")]
    Format(#[from] serde_json::Error),

    /// The reply parsed but `errcode` was missing or non-zero.
    #[error("webhook API error: {errmsg}")]
    Remote { errcode: Option<i64>, errmsg: String },
}

pub type Result<T> = std::result::Result<T, NotifyError>;

/// `err` followed by each of its causes, colon-separated.
fn source_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_error_mentions_status_and_body() {
        let err = NotifyError::Protocol {
            status: 404,
            body: "not found".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("not found"));
    }

    #[derive(Debug, Error)]
    #[error("outer")]
    struct Outer(#[source] Inner);

    #[derive(Debug, Error)]
    #[error("Connection refused")]
    struct Inner;

    #[test]
    fn source_chain_includes_causes() {
        assert_eq!(source_chain(&Outer(Inner)), "outer: Connection refused");
        assert_eq!(source_chain(&Inner), "Connection refused");
    }

    #[test]
    fn remote_error_shows_errmsg() {
        let err = NotifyError::Remote {
            errcode: Some(93000),
            errmsg: "invalid webhook url".to_string(),
        };
        assert_eq!(err.to_string(), "webhook API error: invalid webhook url");
    }
}
