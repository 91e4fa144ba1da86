pub mod analysis;
pub mod audio;
pub mod config;
pub mod http;
pub mod journal;
pub mod pipeline;
pub mod session;
pub mod transcript;

pub use analysis::{
    interpret, interpret_speaker_moods, reflection_prompts, timeline, EmotionalAnalysis,
    SpeakerMood, TimelineData,
};
pub use audio::{AudioArtifact, AudioBackend, AudioBackendConfig, AudioFrame, CaptureError};
pub use config::Config;
pub use http::{create_router, AppState};
pub use journal::{JournalEntry, JournalStore, JournalStoreError};
pub use pipeline::{JournalOutcome, PipelineError};
pub use session::{RecordingSession, SessionConfig, SessionStats};
pub use transcript::{TranscriptClient, TranscriptError, TranscriptOptions, TranscriptResult};
