use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};

use crate::adapters::http::dto::{MembershipDto, MembershipsResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::core::token::AccessTokenClaims;
use crate::core::usecases::ListMemberships;

/// `GET /api/memberships` (spec §4.8). Bearer verification already ran in
/// the `bearer_auth` middleware; this handler only needs the subject id it
/// left in the request extensions.
pub async fn memberships(State(state): State<AppState>, Extension(claims): Extension<AccessTokenClaims>) -> Response {
    let use_case = ListMemberships::new(state.store.clone());

    match use_case.execute(&claims.sub).await {
        Ok(views) => Json(MembershipsResponse {
            memberships: views
                .into_iter()
                .map(|m| MembershipDto {
                    tenant_id: m.tenant_id,
                    role: m.role.to_string(),
                    status: m.status.as_str().to_string(),
                })
                .collect(),
        })
        .into_response(),
        Err(err) => ApiError::from_bearer_lookup(err).into_response(),
    }
}
