//! # lexguard-client - Remote Analysis Client
//!
//! Thin async transport to the LexGuard analysis service. No retries, no
//! de-duplication: every call maps to exactly one HTTP request.
//!
//! Depends on [`lexguard_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! - [`AnalysisService`] - Async trait the workflow controller is driven through
//! - [`HttpAnalysisClient`] - `reqwest` implementation against the HTTP API
//! - [`Credentials`] - Read-only bearer token injected into the client
//! - [`resolve_token()`] - Token lookup (explicit value, env var, token file)
//!
//! With the `test-helpers` feature, [`test_utils`] exposes an in-memory
//! `MockAnalysisService` that records calls and replays scripted replies.

pub mod credentials;
pub mod transport;
pub mod response;
pub mod service;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use credentials::{default_token_file, resolve_token, Credentials};
pub use transport::HttpAnalysisClient;
pub use service::{AnalysisService, LocalAnalysisService};
