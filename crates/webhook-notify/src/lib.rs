//! Post markdown notifications to a chat webhook and check the `errcode` reply.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod message;
pub mod notifier;

pub use config::{Endpoint, NotifierConfig};
pub use error::NotifyError;
pub use message::NotificationRequest;
pub use notifier::{NotificationOutcome, Notifier, Receipt, Reply};
