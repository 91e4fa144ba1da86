//! Recording session management
//!
//! This module provides the `RecordingSession` abstraction that manages:
//! - Microphone capture through an audio backend
//! - Chunk accumulation in arrival order
//! - Finalization into a single audio artifact
//! - Session statistics and state management

mod config;
mod session;
mod stats;

pub use config::SessionConfig;
pub use session::RecordingSession;
pub use stats::SessionStats;
