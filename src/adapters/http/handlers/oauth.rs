use std::str::FromStr;

use axum::extract::{Form, Path, Query, State};
use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Extension;

use crate::adapters::http::cookies::refresh_cookie;
use crate::adapters::http::dto::{AppleUserBlob, OAuthCallbackParams, OAuthInitiateQuery};
use crate::adapters::http::handlers::support::{client_ip, user_agent};
use crate::adapters::http::middleware::CorrelationId;
use crate::adapters::http::redirects::{project_redirect_failure, redirect_to, redirect_with_error_code};
use crate::adapters::http::state::AppState;
use crate::core::federation::ProviderName;
use crate::core::usecases::ports::AuditEvent;
use crate::core::usecases::session_issuer::SessionIssuer;
use crate::core::usecases::{OAuthCallback, OAuthCallbackInput, OAuthInitiate, OAuthInitiateInput};

/// `GET /oauth/<provider>` (spec §4.7 initiation). Credential presence is
/// checked before redirect validation spends a DNS/config lookup on a flow
/// that can never complete.
pub async fn initiate(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    Query(query): Query<OAuthInitiateQuery>,
) -> Response {
    let Ok(provider) = ProviderName::from_str(&provider) else {
        return redirect_with_error_code("/login", "oauth_failed");
    };

    if !state.federation.is_configured(provider) {
        return redirect_with_error_code("/login", "oauth_not_configured");
    }

    let validated = match state.redirect_validator.validate(&query.redirect).await {
        Ok(v) => v,
        Err(err) => return project_redirect_failure("/login", err),
    };
    let tenant_id = validated.tenant_id;

    let use_case = OAuthInitiate::new(state.store.clone(), state.minter.clone(), state.clock.clone(), state.session_policy);
    let input = OAuthInitiateInput { provider, tenant_id, redirect_url: query.redirect };

    match use_case.execute(input).await {
        Ok(output) => {
            match state.federation.authorize_url(provider, &output.state, &output.code_challenge, output.nonce.as_deref()) {
                Ok(url) => redirect_to(&url),
                Err(_) => redirect_with_error_code("/login", "oauth_failed"),
            }
        }
        Err(err) => project_redirect_failure("/login", err),
    }
}

/// `GET /oauth/<provider>/callback`.
pub async fn callback_get(
    state: State<AppState>,
    correlation: Extension<CorrelationId>,
    path: Path<String>,
    headers: axum::http::HeaderMap,
    Query(params): Query<OAuthCallbackParams>,
) -> Response {
    run_callback(state, correlation, path, headers, params).await
}

/// `POST /oauth/<provider>/callback` — Apple only, `response_mode=form_post`.
pub async fn callback_post(
    state: State<AppState>,
    correlation: Extension<CorrelationId>,
    path: Path<String>,
    headers: axum::http::HeaderMap,
    Form(params): Form<OAuthCallbackParams>,
) -> Response {
    run_callback(state, correlation, path, headers, params).await
}

async fn run_callback(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Path(provider): Path<String>,
    headers: axum::http::HeaderMap,
    params: OAuthCallbackParams,
) -> Response {
    let Ok(provider) = ProviderName::from_str(&provider) else {
        return redirect_with_error_code("/login", "oauth_failed");
    };

    if params.error.is_some() {
        return redirect_with_error_code("/login", "oauth_failed");
    }

    let (Some(code), Some(callback_state)) = (params.code, params.state) else {
        return redirect_with_error_code("/login", "oauth_failed");
    };

    let now = state.clock.now();
    let state_row = match state.store.find_federation_state(&callback_state).await {
        Ok(Some(row)) => row,
        Ok(None) => return redirect_with_error_code("/login", "oauth_failed"),
        Err(err) => return project_redirect_failure("/login", err),
    };

    let mut profile = match state
        .federation
        .exchange(provider, &code, &state_row.code_verifier, state_row.nonce.as_deref(), now.timestamp())
        .await
    {
        Ok(profile) => profile,
        Err(_) => return redirect_with_error_code("/login", "oauth_failed"),
    };

    if provider == ProviderName::Apple && profile.name.is_empty() {
        if let Some(blob) = params.user.as_deref().and_then(|raw| serde_json::from_str::<AppleUserBlob>(raw).ok()) {
            if let Some(name) = blob.name {
                let full = [name.first_name, name.last_name].into_iter().flatten().collect::<Vec<_>>().join(" ");
                if !full.is_empty() {
                    profile.name = full;
                }
            }
        }
    }

    let issuer = SessionIssuer::new(state.store.clone(), state.minter.clone(), state.clock.clone(), state.session_policy);
    let use_case = OAuthCallback::new(state.store.clone(), state.clock.clone(), issuer);

    let ip = client_ip(&headers);
    let agent = user_agent(&headers);
    let input = OAuthCallbackInput {
        state: callback_state,
        provider,
        profile,
        ip_address: ip.clone(),
        user_agent: agent.clone(),
    };

    match use_case.execute(input).await {
        Ok(output) => {
            state.audit_sink.record(AuditEvent {
                correlation_id: correlation.0,
                kind: "oauth_callback",
                ip,
                route: format!("/oauth/{provider}/callback"),
                user_agent: agent,
                user_id: None,
                status_code: Some(302),
                details: None,
            });

            let location = crate::adapters::http::handlers::callback_redirect::build(
                &derive_origin(&output.redirect_url),
                &output.session.auth_code.plaintext,
                &output.redirect_url,
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

fn derive_origin(url: &str) -> String {
    url::Url::parse(url)
        .map(|parsed| {
            let port_suffix = parsed.port().map(|port| format!(":{port}")).unwrap_or_default();
            format!("{}://{}{}", parsed.scheme(), parsed.host_str().unwrap_or_default(), port_suffix)
        })
        .unwrap_or_else(|_| url.to_string())
}
