use axum::extract::{Form, State};
use axum::response::Response;

use crate::adapters::http::dto::ResetPasswordRequest;
use crate::adapters::http::redirects::{project_redirect_failure, redirect_with_message};
use crate::adapters::http::state::AppState;
use crate::core::usecases::ports::EmailNotification;
use crate::core::usecases::{ResetPassword, ResetPasswordInput};

/// `POST /api/reset-password` (spec §4.6). Success 302s to
/// `/login?message=password_changed`; any rejection 302s back to
/// `/reset-password?error=<code>` so the form can re-render with the token
/// still in hand.
pub async fn reset_password(State(state): State<AppState>, Form(body): Form<ResetPasswordRequest>) -> Response {
    let use_case = ResetPassword::new(
        state.store.clone(),
        state.hasher.clone(),
        state.minter.clone(),
        state.clock.clone(),
        state.credential_policy,
    );

    let input = ResetPasswordInput {
        token: body.token,
        new_password: body.new_password,
        confirm_password: body.confirm_password,
    };

    match use_case.execute(input).await {
        Ok(output) => {
            state.email_sender.send(EmailNotification::PasswordChanged { to: output.email }).await;
            redirect_with_message("/login", "password_changed")
        }
        Err(err) => project_redirect_failure("/reset-password", err),
    }
}
