//! LexGuard - terminal client for legal document risk analysis
//!
//! The binary wires configuration, credentials and the HTTP client into an
//! `Engine`, then runs either the TUI or the headless runner.

pub mod headless;

pub use headless::{run_headless, HeadlessOutcome, HeadlessRequest, Source};
