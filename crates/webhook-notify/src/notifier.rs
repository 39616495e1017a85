use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::{Endpoint, NotifierConfig};
use crate::error::{NotifyError, Result};
use crate::message::NotificationRequest;

/// Result of a single delivery attempt as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationOutcome {
    pub delivered: bool,
    pub detail: String,
}

/// A reply the webhook accepted.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub status: u16,
    pub response: Value,
}

pub struct Notifier {
    client: Client,
    endpoint: Endpoint,
    config: NotifierConfig,
}

impl Notifier {
    pub fn new(endpoint: Endpoint, config: NotifierConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            config,
        })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Send `body` under `title` and report what happened. Never fails.
    pub async fn send(&self, title: Option<&str>, body: &str) -> NotificationOutcome {
        self.deliver(&NotificationRequest::new(title, body)).await
    }

    pub async fn send_summary(&self, file_path: &str, summary: &str) -> NotificationOutcome {
        self.deliver(&NotificationRequest::summary(file_path, summary)).await
    }

    pub async fn send_error(&self, file_path: &str, error: &str) -> NotificationOutcome {
        self.deliver(&NotificationRequest::error(file_path, error)).await
    }

    pub async fn deliver(&self, request: &NotificationRequest) -> NotificationOutcome {
        NotificationOutcome::from(self.dispatch(request).await)
    }

    /// POST one markdown message and check the reply's `errcode`.
    pub async fn dispatch(&self, request: &NotificationRequest) -> Result<Receipt> {
        let reply = self.post(request).await?;
        self.check(reply)
    }

    /// POST one markdown message and return the raw reply, whatever its status.
    pub async fn post(&self, request: &NotificationRequest) -> Result<Reply> {
        debug!(title = %request.title, "posting markdown notification");
        let response = self
            .client
            .post(self.endpoint.as_str())
            .json(&request.payload())
            .send()
            .await
            .inspect_err(|e| warn!(error = %e, "webhook request failed"))?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), "webhook replied");
        Ok(Reply { status, body })
    }

    /// Success means status 200 and a JSON body whose `errcode` is 0.
    pub fn check(&self, reply: Reply) -> Result<Receipt> {
        if reply.status != StatusCode::OK {
            warn!(status = reply.status.as_u16(), "webhook returned non-200 status");
            return Err(NotifyError::Protocol {
                status: reply.status.as_u16(),
                body: reply.body,
            });
        }

        let response: Value = serde_json::from_str(&reply.body)?;
        let errcode = response.get("errcode");
        // Accepts both `0` and `0.0`.
        if errcode.and_then(Value::as_f64) != Some(0.0) {
            let errcode = errcode.and_then(Value::as_i64);
            let errmsg = response
                .get("errmsg")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| self.config.unknown_error.clone());
            warn!(?errcode, %errmsg, "webhook rejected message");
            return Err(NotifyError::Remote { errcode, errmsg });
        }

        info!("notification delivered");
        Ok(Receipt {
            status: reply.status.as_u16(),
            response,
        })
    }
}

/// Status and body of a webhook reply before `errcode` is checked.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    /// The body as JSON, if it is JSON.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

impl From<Result<Receipt>> for NotificationOutcome {
    fn from(result: Result<Receipt>) -> Self {
        match result {
            Ok(_) => NotificationOutcome {
                delivered: true,
                detail: "message sent".to_string(),
            },
            Err(e) => NotificationOutcome {
                delivered: false,
                detail: e.to_string(),
            },
        }
    }
}
