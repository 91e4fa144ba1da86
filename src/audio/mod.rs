pub mod artifact;
pub mod backend;
pub mod microphone;

pub use artifact::{AudioArtifact, WAV_MIME};
pub use backend::{AudioBackend, AudioBackendConfig, AudioFrame, CaptureError};
pub use microphone::MicrophoneBackend;
