//! HTTP-layer error projection.
//!
//! Most endpoints in this service report failure as a redirect with an
//! `?error=` code (spec §6, §7), not a JSON body — so unlike a typical REST
//! adapter, the bulk of the projection logic lives in
//! `super::redirects::project_redirect_failure`, not here. This module
//! covers the two endpoints that do answer with a JSON body.

pub mod api_error;
pub mod codes;

pub use api_error::{ApiError, ApiErrorBody};
pub use codes::{error_code, is_fail_closed};
