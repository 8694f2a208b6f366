//! lexguard-app - Workflow state and orchestration for LexGuard
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! analysis workflow: input acquisition and validation, the analysis state
//! machine, the editable document and risk presentation, save and export.
//! The [`Engine`] ties the update loop to an
//! [`AnalysisService`](lexguard_client::AnalysisService) and is shared by the
//! TUI and headless runners.

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod document;
pub mod editor;
pub mod engine;
pub mod engine_event;
pub mod export;
pub mod handler;
pub mod input_key;
pub mod intake;
pub mod message;
pub mod presenter;
pub mod process;
pub mod signals;
pub mod state;
pub mod workflow;

// Re-export primary types
pub use document::DocumentContext;
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use message::{Message, TextEdit};
pub use state::AppState;
pub use workflow::Workflow;
