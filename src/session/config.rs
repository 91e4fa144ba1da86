use serde::{Deserialize, Serialize};

use crate::audio::AudioBackendConfig;

/// Configuration for a recording session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier (e.g. "journal-7f9d...")
    pub session_id: String,

    /// Capture sample rate
    pub sample_rate: u32,

    /// Number of audio channels (1 = mono, 2 = stereo)
    pub channels: u16,

    /// Capture buffer size in milliseconds
    pub buffer_duration_ms: u64,
}

impl SessionConfig {
    pub fn backend_config(&self) -> AudioBackendConfig {
        AudioBackendConfig {
            sample_rate: self.sample_rate,
            channels: self.channels,
            buffer_duration_ms: self.buffer_duration_ms,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("journal-{}", uuid::Uuid::new_v4()),
            sample_rate: 16000,
            channels: 1,
            buffer_duration_ms: 100,
        }
    }
}
