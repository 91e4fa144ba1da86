use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use super::config::SessionConfig;
use super::stats::SessionStats;
use crate::audio::{AudioArtifact, AudioBackend, AudioFrame, CaptureError, MicrophoneBackend};

/// A recording session: microphone capture plus an ordered chunk buffer.
///
/// Created on start, fed by incoming audio frames, finalized into a single
/// `AudioArtifact` on stop. The microphone lease is held by the backend
/// between `start()` and `stop()`.
pub struct RecordingSession {
    /// Session configuration
    config: SessionConfig,

    /// When the session was created
    started_at: chrono::DateTime<chrono::Utc>,

    /// Whether recording is currently active
    is_recording: Arc<AtomicBool>,

    /// Accumulated audio frames, in arrival order
    frames: Arc<Mutex<Vec<AudioFrame>>>,

    /// Capture backend while the device lease is held
    backend: Arc<Mutex<Option<Box<dyn AudioBackend>>>>,

    /// Handle for the frame accumulation task
    capture_task: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl RecordingSession {
    pub fn new(config: SessionConfig) -> Self {
        info!("Creating recording session: {}", config.session_id);

        Self {
            config,
            started_at: Utc::now(),
            is_recording: Arc::new(AtomicBool::new(false)),
            frames: Arc::new(Mutex::new(Vec::new())),
            backend: Arc::new(Mutex::new(None)),
            capture_task: Arc::new(Mutex::new(None)),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.config.session_id
    }

    /// Start recording from the default microphone
    pub async fn start(&self) -> Result<(), CaptureError> {
        let backend = MicrophoneBackend::new(self.config.backend_config());
        self.start_with_backend(Box::new(backend)).await
    }

    /// Start recording with a specific capture backend
    pub async fn start_with_backend(
        &self,
        mut backend: Box<dyn AudioBackend>,
    ) -> Result<(), CaptureError> {
        if self.is_recording.load(Ordering::SeqCst) {
            warn!("Recording already started");
            return Ok(());
        }

        info!("Starting recording session: {}", self.config.session_id);

        // The backend holds the device lease from here; a failed start
        // releases it before returning.
        let mut frame_rx = backend.start().await?;

        {
            let mut slot = self.backend.lock().await;
            *slot = Some(backend);
        }

        self.is_recording.store(true, Ordering::SeqCst);

        // Accumulate frames until the backend closes the channel on stop
        let frames = Arc::clone(&self.frames);
        let capture_task = tokio::spawn(async move {
            while let Some(frame) = frame_rx.recv().await {
                let mut frames = frames.lock().await;
                frames.push(frame);
            }
        });

        {
            let mut handle = self.capture_task.lock().await;
            *handle = Some(capture_task);
        }

        info!("Recording session started: {}", self.config.session_id);

        Ok(())
    }

    /// Stop recording and finalize the accumulated chunks into one artifact
    pub async fn stop(&self) -> Result<AudioArtifact, CaptureError> {
        if !self.is_recording.load(Ordering::SeqCst) {
            return Err(CaptureError::NoActiveRecording);
        }

        info!("Stopping recording session: {}", self.config.session_id);

        // Release the device lease first; this closes the frame channel so
        // the accumulation task drains and exits.
        {
            let mut slot = self.backend.lock().await;
            if let Some(mut backend) = slot.take() {
                if let Err(e) = backend.stop().await {
                    error!("Failed to stop capture backend: {}", e);
                }
            }
        }

        {
            let mut handle = self.capture_task.lock().await;
            if let Some(task) = handle.take() {
                if let Err(e) = task.await {
                    error!("Capture task panicked: {}", e);
                }
            }
        }

        self.is_recording.store(false, Ordering::SeqCst);

        let frames = {
            let mut frames = self.frames.lock().await;
            std::mem::take(&mut *frames)
        };

        let artifact =
            AudioArtifact::from_frames(&frames, self.config.sample_rate, self.config.channels)?;

        info!(
            "Recording session stopped: {} ({:.1}s, {} chunks, {} bytes)",
            self.config.session_id,
            artifact.duration_secs,
            frames.len(),
            artifact.data.len()
        );

        Ok(artifact)
    }

    /// Get current session statistics
    pub async fn stats(&self) -> SessionStats {
        let duration = Utc::now().signed_duration_since(self.started_at);

        let chunks_count = {
            let frames = self.frames.lock().await;
            frames.len()
        };

        SessionStats {
            is_recording: self.is_recording.load(Ordering::SeqCst),
            started_at: self.started_at,
            duration_secs: duration.num_milliseconds() as f64 / 1000.0,
            chunks_count,
        }
    }
}
