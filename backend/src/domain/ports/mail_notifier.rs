//! Port for outbound mail notifications.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by mail notifier adapters.
    pub enum MailNotifierError {
        /// The message could not be handed over for delivery.
        Delivery {
            /// Transport-specific failure detail.
            message: String,
        } => "mail delivery failed: {message}",
    }
}

/// Capability to send a notification mail.
///
/// Delivery is best effort; callers decide whether a failure matters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailNotifier: Send + Sync {
    /// Send `message` under `subject` to the configured recipient.
    async fn send(&self, subject: &str, message: &str) -> Result<(), MailNotifierError>;
}

/// Notifier that discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpMailNotifier;

#[async_trait]
impl MailNotifier for NoOpMailNotifier {
    async fn send(&self, _subject: &str, _message: &str) -> Result<(), MailNotifierError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_op_notifier_accepts_everything() {
        NoOpMailNotifier
            .send("subject", "message")
            .await
            .expect("no-op send succeeds");
    }
}
