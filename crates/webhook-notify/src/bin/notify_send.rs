use std::process::ExitCode;

use anyhow::Context;
use tokio::runtime::Builder;

use webhook_notify::cli::{self, MessageKind, SendCli};
use webhook_notify::{logging, NotificationOutcome, Notifier};

fn main() -> ExitCode {
    let cli: SendCli = match cli::parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(code) => return code,
    };
    logging::init(cli.common.verbose);

    match run(cli) {
        Ok(outcome) => cli::report(&outcome),
        Err(e) => {
            println!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: SendCli) -> anyhow::Result<NotificationOutcome> {
    let rt = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Starting async runtime")?;
    let notifier = Notifier::new(cli.webhook_url, cli.common.notifier_config())
        .context("Building HTTP client")?;

    let outcome = rt.block_on(async {
        match &cli.message {
            MessageKind::Summary { file_path, summary_text } => {
                notifier.send_summary(file_path, summary_text).await
            }
            MessageKind::Error { file_path, error_text } => {
                notifier.send_error(file_path, error_text).await
            }
            MessageKind::Message { title, body_text } => {
                notifier.send(Some(title.as_str()), body_text).await
            }
        }
    });
    Ok(outcome)
}
