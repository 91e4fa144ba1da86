//! HTTP API server for the recording UI
//!
//! This module provides a REST API for driving the journal pipeline:
//! - POST /journal/record/start - Start a new recording
//! - POST /journal/record/stop/:id - Stop, analyze, and persist
//! - GET /journal/:id/status - Query session status
//! - GET /journal/timeline - Chart-ready emotion series
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
