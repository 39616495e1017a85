use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use owo_colors::{OwoColorize, Stream::Stdout};

use crate::config::{Endpoint, NotifierConfig, DEFAULT_TIMEOUT_SECS};
use crate::notifier::NotificationOutcome;

/// Options shared by both programs.
#[derive(Args, Debug)]
pub struct Common {
    /// Activate verbose logging on stderr (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,
}

impl Common {
    pub fn notifier_config(&self) -> NotifierConfig {
        NotifierConfig::default().with_timeout_secs(self.timeout)
    }
}

/// Send a markdown notification to a chat webhook
#[derive(Parser, Debug)]
#[command(name = "notify-send", author, version, about, long_about = None)]
pub struct SendCli {
    #[command(flatten)]
    pub common: Common,

    /// Webhook URL, e.g. https://qyapi.weixin.qq.com/cgi-bin/webhook/send?key=KEY
    pub webhook_url: Endpoint,

    #[command(subcommand)]
    pub message: MessageKind,
}

#[derive(Subcommand, Debug)]
pub enum MessageKind {
    /// Log summary for a file
    Summary {
        file_path: String,
        summary_text: String,
    },
    /// Critical error alert for a file
    Error {
        file_path: String,
        error_text: String,
    },
    /// Free-form message with a title
    Message {
        title: String,
        body_text: String,
    },
}

/// Send a canned test message to check a webhook
#[derive(Parser, Debug)]
#[command(name = "notify-test", author, version, about, long_about = None)]
pub struct TestCli {
    #[command(flatten)]
    pub common: Common,

    /// Webhook URL, e.g. https://qyapi.weixin.qq.com/cgi-bin/webhook/send?key=KEY
    pub webhook_url: Endpoint,
}

/// Parse `args`, printing usage to stdout on failure.
///
/// Help and version requests exit 0; every other parse error (missing or
/// extra arguments, unknown message type, empty URL) exits 1.
pub fn parse_from<P, I, T>(args: I) -> Result<P, ExitCode>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    P::try_parse_from(args).map_err(|err| {
        print!("{}", err.render());
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        }
    })
}

/// Print `✅ detail` or `❌ detail` and map the outcome to an exit code.
pub fn report(outcome: &NotificationOutcome) -> ExitCode {
    if outcome.delivered {
        let line = format!("✅ {}", outcome.detail);
        println!("{}", line.if_supports_color(Stdout, |t| t.green()));
        ExitCode::SUCCESS
    } else {
        let line = format!("❌ {}", outcome.detail);
        println!("{}", line.if_supports_color(Stdout, |t| t.red()));
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn summary_parses() {
        let cli: SendCli =
            parse_from(["notify-send", "http://hook", "summary", "app.log", "all good"]).unwrap();
        assert_eq!(cli.webhook_url.as_str(), "http://hook");
        assert_eq!(cli.common.timeout, 10);
        assert_matches!(
            cli.message,
            MessageKind::Summary { ref file_path, ref summary_text }
                if file_path == "app.log" && summary_text == "all good"
        );
    }

    #[test]
    fn message_with_flags() {
        let cli: SendCli = parse_from([
            "notify-send", "-vv", "--timeout", "3", "http://hook", "message", "Title", "Body",
        ])
        .unwrap();
        assert_eq!(cli.common.verbose, 2);
        assert_eq!(cli.common.notifier_config().timeout.as_secs(), 3);
        assert_matches!(cli.message, MessageKind::Message { .. });
    }

    #[test]
    fn wrong_arg_count_fails() {
        let too_few = ["notify-send", "http://hook", "summary", "app.log"];
        assert!(parse_from::<SendCli, _, _>(too_few).is_err());
        let too_many = ["notify-send", "http://hook", "error", "a", "b", "c"];
        assert!(parse_from::<SendCli, _, _>(too_many).is_err());
        assert!(parse_from::<SendCli, _, _>(["notify-send", "http://hook"]).is_err());
    }

    #[test]
    fn unknown_kind_fails() {
        let args = ["notify-send", "http://hook", "sms", "a", "b"];
        assert!(parse_from::<SendCli, _, _>(args).is_err());
    }

    #[test]
    fn empty_url_fails() {
        assert!(parse_from::<TestCli, _, _>(["notify-test", ""]).is_err());
    }

    #[test]
    fn help_is_reported_as_parse_stop() {
        assert!(parse_from::<TestCli, _, _>(["notify-test", "--help"]).is_err());
    }
}
