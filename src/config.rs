use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub audio: AudioConfig,
    pub transcription: TranscriptionConfig,
    pub journal: JournalConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioConfig {
    pub sample_rate: u32,
    pub channels: u16,
    pub buffer_duration_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionConfig {
    /// Remote transcription/sentiment service, e.g. "https://api.assemblyai.com/v2"
    pub base_url: String,
    pub api_key: String,

    /// Seconds between job status checks
    pub poll_interval_secs: u64,

    /// Status checks before giving up (60 checks at 5s = 5 minute ceiling)
    pub poll_max_attempts: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JournalConfig {
    /// Hosted backend base URL (object storage, entries collection, auth)
    pub base_url: String,
    pub api_key: String,

    /// Bearer token of the signed-in user. Entries are stored without an
    /// owner when absent.
    pub access_token: Option<String>,

    /// Object storage bucket for raw recordings
    pub bucket: String,

    /// Entries collection name
    pub table: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            // Credentials arrive from the environment at process start,
            // e.g. VOICE_JOURNAL__TRANSCRIPTION__API_KEY
            .add_source(config::Environment::with_prefix("VOICE_JOURNAL").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
