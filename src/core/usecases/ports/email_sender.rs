use async_trait::async_trait;

/// Notification kinds the core fires without waiting on delivery (spec §1,
/// §5 — "fire-and-log send attempts without throwing").
#[derive(Debug, Clone)]
pub enum EmailNotification {
    Welcome { to: String, name: String },
    PasswordResetRequested { to: String, reset_url: String },
    PasswordChanged { to: String },
}

/// Contract for transactional email delivery. An external collaborator
/// (spec §1 Out of scope) — this crate ships only a logging default.
/// Callers must never let a send failure fail the surrounding flow.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, notification: EmailNotification);
}
