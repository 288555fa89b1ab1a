use axum::extract::{Form, State};
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Extension;

use crate::adapters::http::cookies::refresh_cookie;
use crate::adapters::http::dto::LoginRequest;
use crate::adapters::http::handlers::callback_redirect;
use crate::adapters::http::handlers::support::{audience_or_default, client_ip, user_agent};
use crate::adapters::http::middleware::CorrelationId;
use crate::adapters::http::redirects::project_redirect_failure;
use crate::adapters::http::state::AppState;
use crate::core::usecases::ports::AuditEvent;
use crate::core::usecases::session_issuer::SessionIssuer;
use crate::core::usecases::{LoginInput, LoginUser};

/// `POST /api/login` (spec §4.6, §8 scenario 2). Mirrors `register`'s
/// redirect-first ordering and cookie/code issuance shape.
pub async fn login(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    headers: HeaderMap,
    Form(body): Form<LoginRequest>,
) -> Response {
    let validated = match state.redirect_validator.validate(&body.redirect).await {
        Ok(v) => v,
        Err(err) => return project_redirect_failure("/login", err),
    };

    let tenant_id = validated.tenant_id.clone();
    let audience = audience_or_default(body.audience.clone());
    let ip = client_ip(&headers);
    let agent = user_agent(&headers);

    let issuer = SessionIssuer::new(
        state.store.clone(),
        state.minter.clone(),
        state.clock.clone(),
        state.session_policy,
    );
    let use_case = LoginUser::new(state.store.clone(), state.hasher.clone(), issuer);

    let input = LoginInput {
        email: body.email,
        password: body.password,
        tenant_id,
        redirect_origin: validated.origin.clone(),
        audience,
        pkce_challenge: body.code_challenge,
        ip_address: ip.clone(),
        user_agent: agent.clone(),
    };

    match use_case.execute(input).await {
        Ok(output) => {
            state.audit_sink.record(AuditEvent {
                correlation_id: correlation.0,
                kind: "login",
                ip,
                route: "/api/login".to_string(),
                user_agent: agent,
                user_id: Some(output.user_id.clone()),
                status_code: Some(302),
                details: None,
            });

            let location = callback_redirect::build(
                &validated.origin,
                &output.session.auth_code.plaintext,
                &body.redirect,
            );
            let cookie = refresh_cookie(
                &state.config,
                output.session.refresh_token.plaintext,
                state.session_policy.refresh_token_ttl_seconds(),
            );

            let mut response = (axum::http::StatusCode::FOUND, [(header::LOCATION, location)]).into_response();
            if let Ok(value) = HeaderValue::from_str(&cookie.to_string()) {
                response.headers_mut().insert(header::SET_COOKIE, value);
            }
            response
        }
        Err(err) => project_redirect_failure("/login", err),
    }
}
