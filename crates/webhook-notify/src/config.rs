use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::NotifyError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_UNKNOWN_ERROR: &str = "unknown error";

/// How many characters of the webhook URL are shown in console banners.
const DISPLAY_PREFIX_CHARS: usize = 50;

/// Webhook URL. Opaque apart from being non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn new(url: impl Into<String>) -> Result<Self, NotifyError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(NotifyError::EmptyEndpoint);
        }
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading part of the URL for display; the key usually sits at the end.
    pub fn truncated(&self) -> String {
        let mut shown: String = self.0.chars().take(DISPLAY_PREFIX_CHARS).collect();
        if self.0.chars().count() > DISPLAY_PREFIX_CHARS {
            shown.push_str("...");
        }
        shown
    }
}

impl FromStr for Endpoint {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::new(s)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Hard limit for the whole request; hitting it is a failed delivery.
    pub timeout: Duration,
    /// Detail used when the webhook rejects a message without an `errmsg`.
    pub unknown_error: String,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            unknown_error: DEFAULT_UNKNOWN_ERROR.to_string(),
        }
    }
}

impl NotifierConfig {
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn empty_endpoint_rejected() {
        assert_matches!(Endpoint::new(""), Err(NotifyError::EmptyEndpoint));
        assert_matches!("   ".parse::<Endpoint>(), Err(NotifyError::EmptyEndpoint));
    }

    #[test]
    fn endpoint_kept_verbatim() {
        let ep: Endpoint = "not even a url".parse().unwrap();
        assert_eq!(ep.as_str(), "not even a url");
    }

    #[test]
    fn long_endpoint_truncated_for_display() {
        let url = format!(
            "https://qyapi.weixin.qq.com/cgi-bin/webhook/send?key={}",
            "k".repeat(40)
        );
        let ep = Endpoint::new(url).unwrap();
        let shown = ep.truncated();
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), 53);

        let short = Endpoint::new("http://localhost/hook").unwrap();
        assert_eq!(short.truncated(), "http://localhost/hook");
    }

    #[test]
    fn defaults() {
        let cfg = NotifierConfig::default();
        assert_eq!(cfg.timeout, Duration::from_secs(10));
        assert_eq!(cfg.unknown_error, "unknown error");
        assert_eq!(cfg.with_timeout_secs(3).timeout, Duration::from_secs(3));
    }
}
