use async_trait::async_trait;
use tracing::info;

use crate::core::usecases::ports::{EmailNotification, EmailSender};

/// Logs the notification that would have been sent and stops there.
///
/// The spec treats email delivery as an out-of-scope external collaborator;
/// a production deployment swaps this for a real provider adapter behind
/// the same port. Never fails — there is nothing to fail.
#[derive(Debug, Clone, Default)]
pub struct LoggingEmailSender;

#[async_trait]
impl EmailSender for LoggingEmailSender {
    async fn send(&self, notification: EmailNotification) {
        match notification {
            EmailNotification::Welcome { to, name } => {
                info!(target: "auth.email", %to, %name, kind = "welcome", "email notification");
            }
            EmailNotification::PasswordResetRequested { to, reset_url } => {
                info!(target: "auth.email", %to, %reset_url, kind = "password_reset_requested", "email notification");
            }
            EmailNotification::PasswordChanged { to } => {
                info!(target: "auth.email", %to, kind = "password_changed", "email notification");
            }
        }
    }
}
