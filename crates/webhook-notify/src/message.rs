//! Markdown rendering for outgoing notifications.
//!
//! Titles and bodies are inserted verbatim: any markdown they contain
//! (backticks, headers, fences) reaches the chat client as-is.

use serde::Serialize;

pub const DEFAULT_TITLE: &str = "Notification";
pub const SUMMARY_TITLE: &str = "🚨 Log Summary";
pub const ERROR_TITLE: &str = "🚨 Critical Error Alert";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
}

impl NotificationRequest {
    pub fn new(title: Option<&str>, body: impl Into<String>) -> Self {
        Self {
            title: title.unwrap_or(DEFAULT_TITLE).to_string(),
            body: body.into(),
        }
    }

    /// Log summary for `file_path`, stamped with the current local time.
    pub fn summary(file_path: &str, summary: &str) -> Self {
        Self::summary_at(file_path, summary, &now())
    }

    pub fn summary_at(file_path: &str, summary: &str, timestamp: &str) -> Self {
        Self::new(
            Some(SUMMARY_TITLE),
            report_body("🚨 Log Summary", file_path, timestamp, "📋 Summary", summary),
        )
    }

    /// Error alert for `file_path`, stamped with the current local time.
    pub fn error(file_path: &str, error: &str) -> Self {
        Self::error_at(file_path, error, &now())
    }

    pub fn error_at(file_path: &str, error: &str, timestamp: &str) -> Self {
        Self::new(
            Some(ERROR_TITLE),
            report_body(
                "🚨 Critical Error Alert",
                file_path,
                timestamp,
                "💥 Error details",
                error,
            ),
        )
    }

    /// Canned message used to check that a webhook is wired up.
    pub fn connectivity_test(date: &str) -> Self {
        let body = format!(
            "✅ **Webhook notification test succeeded!**\n\
             \n\
             **Checks:**\n\
             - 🤖 Robot status: OK\n\
             - 📡 Webhook connection: OK\n\
             - 💬 Message format: Markdown\n\
             \n\
             **Date:** {date}\n\
             \n\
             ---\n\
             *Sent by webhook-notify*"
        );
        Self::new(Some("🧪 Webhook Test Message"), body)
    }

    /// Markdown document sent as `markdown.content`.
    pub fn render(&self) -> String {
        format!("## {}\n\n{}", self.title, self.body)
    }

    pub fn payload(&self) -> MarkdownPayload {
        MarkdownPayload {
            msgtype: "markdown",
            markdown: MarkdownContent {
                content: self.render(),
            },
        }
    }
}

/// `{"msgtype":"markdown","markdown":{"content":...}}`
#[derive(Debug, Serialize)]
pub struct MarkdownPayload {
    msgtype: &'static str,
    markdown: MarkdownContent,
}

#[derive(Debug, Serialize)]
struct MarkdownContent {
    content: String,
}

fn report_body(heading: &str, file_path: &str, timestamp: &str, label: &str, text: &str) -> String {
    format!(
        "**{heading}**\n\
         \n\
         **📁 File:** `{file_path}`\n\
         **⏰ Time:** `{timestamp}`\n\
         \n\
         **{label}:**\n\
         ```\n\
         {text}\n\
         ```\n"
    )
}

pub fn now() -> String {
    jiff::Zoned::now().strftime(TIMESTAMP_FORMAT).to_string()
}

pub fn today() -> String {
    jiff::Zoned::now().strftime("%Y-%m-%d").to_string()
}
