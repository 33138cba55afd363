//! Mail notifier adapter that writes messages to the log.
//!
//! Stands in for an SMTP relay: every message becomes a structured `info`
//! event carrying the configured sender and recipient.

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{MailNotifier, MailNotifierError};

/// [`MailNotifier`] that logs instead of delivering.
#[derive(Debug, Clone)]
pub struct LoggingMailNotifier {
    to: String,
    from: String,
}

impl LoggingMailNotifier {
    /// Create a notifier for the given addresses.
    pub fn new(to: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            from: from.into(),
        }
    }
}

#[async_trait]
impl MailNotifier for LoggingMailNotifier {
    async fn send(&self, subject: &str, message: &str) -> Result<(), MailNotifierError> {
        info!(
            to = %self.to,
            from = %self.from,
            subject,
            message,
            "mail sent"
        );
        Ok(())
    }
}
