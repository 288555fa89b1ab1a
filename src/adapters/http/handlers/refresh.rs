use axum::extract::{Query, State};
use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum_extra::extract::cookie::CookieJar;

use crate::adapters::http::cookies::{clear_refresh_cookie, refresh_cookie, REFRESH_COOKIE_NAME};
use crate::adapters::http::dto::RefreshQuery;
use crate::adapters::http::handlers::callback_redirect;
use crate::adapters::http::handlers::support::audience_or_default;
use crate::adapters::http::middleware::CorrelationId;
use crate::adapters::http::redirects::{project_redirect_failure, redirect_with_error_code};
use crate::adapters::http::state::AppState;
use crate::core::error::{CoreError, StateError};
use crate::core::usecases::ports::AuditEvent;
use crate::core::usecases::{RefreshSession, RefreshSessionInput};

/// `GET /api/refresh` (spec §4.4, §4.8, §8 scenario 3). A top-level
/// navigation, not XHR — the refresh cookie only travels that way when
/// third-party cookies are blocked. Any rejection clears the cookie and
/// bounces to `/login?error=session_expired`.
pub async fn refresh(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    jar: CookieJar,
    Query(query): Query<RefreshQuery>,
) -> Response {
    let validated = match state.redirect_validator.validate(&query.redirect).await {
        Ok(v) => v,
        Err(err) => return project_redirect_failure("/login", err),
    };

    let Some(presented) = jar.get(REFRESH_COOKIE_NAME).map(|c| c.value().to_string()) else {
        return session_expired(&state);
    };

    let tenant_id = validated.tenant_id.clone();
    let audience = audience_or_default(query.audience);

    let use_case = RefreshSession::new(state.store.clone(), state.minter.clone(), state.clock.clone(), state.session_policy);
    let input = RefreshSessionInput {
        presented_refresh_token: presented,
        tenant_id,
        redirect_origin: validated.origin.clone(),
        audience,
    };

    match use_case.execute(input).await {
        Ok(output) => {
            state.audit_sink.record(AuditEvent {
                correlation_id: correlation.0,
                kind: "refresh_rotate",
                ip: None,
                route: "/api/refresh".to_string(),
                user_agent: None,
                user_id: Some(output.user_id),
                status_code: Some(302),
                details: None,
            });

            let location = callback_redirect::build(&validated.origin, &output.auth_code.plaintext, &query.redirect);
            let cookie = refresh_cookie(
                &state.config,
                output.refresh_token.plaintext,
                state.session_policy.refresh_token_ttl_seconds(),
            );

            let mut response = (axum::http::StatusCode::FOUND, [(header::LOCATION, location)]).into_response();
            if let Ok(value) = HeaderValue::from_str(&cookie.to_string()) {
                response.headers_mut().insert(header::SET_COOKIE, value);
            }
            response
        }
        Err(CoreError::State(StateError::SessionExpired)) => session_expired(&state),
        Err(err) => project_redirect_failure("/login", err),
    }
}

fn session_expired(state: &AppState) -> Response {
    let mut response = redirect_with_error_code("/login", "session_expired");
    let cookie = clear_refresh_cookie(&state.config);
    if let Ok(value) = HeaderValue::from_str(&cookie.to_string()) {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    response
}
