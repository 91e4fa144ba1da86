use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::EmotionalAnalysis;

/// One persisted journal entry
///
/// Written once per completed session, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub timestamp: DateTime<Utc>,
    pub analysis: EmotionalAnalysis,
    /// Storage reference of the raw recording
    pub audio_url: String,
    pub transcription: String,
    /// Owning user; absent when the session was unauthenticated
    pub user_id: Option<String>,
}
