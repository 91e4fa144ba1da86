use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::AudioConfig;
use crate::journal::JournalStore;
use crate::session::RecordingSession;
use crate::transcript::TranscriptClient;

/// Shared application state for HTTP handlers
///
/// The clients are built once at startup and never mutated; sessions come
/// and go per recording.
#[derive(Clone)]
pub struct AppState {
    /// Active recording sessions (session_id → session)
    pub sessions: Arc<RwLock<HashMap<String, Arc<RecordingSession>>>>,

    /// Remote transcription/sentiment client
    pub transcript: Arc<TranscriptClient>,

    /// Journal backend client
    pub store: Arc<JournalStore>,

    /// Capture format for new sessions
    pub audio: AudioConfig,
}

impl AppState {
    pub fn new(
        transcript: Arc<TranscriptClient>,
        store: Arc<JournalStore>,
        audio: AudioConfig,
    ) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            transcript,
            store,
            audio,
        }
    }
}
