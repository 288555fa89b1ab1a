//! HTTP adapter — Axum-based transport layer for the sign-in service.
//!
//! It is responsible for:
//! - Accepting HTTP requests and mapping them onto core use cases
//! - Redirect-first validation ahead of any credential check
//! - Mapping `CoreError` onto the closed `?error=` code set or a JSON body
//! - Cookie, correlation-id, security-header, CORS, and rate-limit plumbing
//!
//! It is NOT responsible for:
//! - Credential verification, token minting, or state transitions
//!   (delegated to `core::usecases`)
//! - Persistence, crypto, or provider exchange (delegated to `adapters::*`)
//!
//! # Route structure
//!
//! - `/health`, `/.well-known/jwks.json` — no auth
//! - `/login`, `/register`, `/reset-password` — HTML pages
//! - `/api/*` — redirect-reporting endpoints, except `/api/token` and
//!   `/api/memberships` which answer JSON (the latter bearer-protected)
//! - `/oauth/*` — federation initiation and callback
//!
//! # Architecture layers
//!
//! - `dto`: request/response contracts
//! - `handlers`: one file per route group
//! - `middleware`: correlation, security headers, rate limiting, bearer auth
//! - `error`/`redirects`/`cookies`: response-projection helpers
//! - `state`: shared application state
//! - `router`: route assembly

pub mod cookies;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod redirects;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
