use axum::extract::{Form, State};
use axum::response::Response;

use crate::adapters::http::dto::ForgotPasswordRequest;
use crate::adapters::http::redirects::{project_redirect_failure, redirect_with_message};
use crate::adapters::http::state::AppState;
use crate::core::usecases::ports::EmailNotification;
use crate::core::usecases::{ForgotPassword, ForgotPasswordInput};

/// `POST /api/forgot-password` (spec §4.6, §8 scenario 4). Always 302s to
/// `/login?message=reset_sent` regardless of whether the email matched a
/// user — enumeration resistance is the whole point of this endpoint.
pub async fn forgot_password(State(state): State<AppState>, Form(body): Form<ForgotPasswordRequest>) -> Response {
    let use_case = ForgotPassword::new(state.store.clone(), state.minter.clone(), state.clock.clone(), state.session_policy);

    match use_case.execute(ForgotPasswordInput { email: body.email }).await {
        Ok(outcome) => {
            if let Some((user, token)) = outcome.issued {
                let origin = state.config.auth_origin();
                let base = body.redirect.as_deref().unwrap_or(&origin);
                let reset_url = format!("{base}/reset-password?token={}", token.plaintext);
                state
                    .email_sender
                    .send(EmailNotification::PasswordResetRequested { to: user.email, reset_url })
                    .await;
            }
            redirect_with_message("/login", "reset_sent")
        }
        Err(err) => project_redirect_failure("/login", err),
    }
}
