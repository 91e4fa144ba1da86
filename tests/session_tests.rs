// Integration tests for recording sessions and artifact finalization
//
// A scripted backend stands in for the microphone so sessions can run
// without audio hardware.

use std::fs;
use std::io::Cursor;

use anyhow::Result;
use tempfile::TempDir;
use tokio::sync::mpsc;
use voice_journal::audio::{AudioArtifact, AudioBackend, AudioFrame, CaptureError};
use voice_journal::session::{RecordingSession, SessionConfig};

/// Plays back a fixed frame sequence, then closes the channel
struct ScriptedBackend {
    frames: Vec<AudioFrame>,
    capturing: bool,
}

impl ScriptedBackend {
    fn new(frames: Vec<AudioFrame>) -> Self {
        Self {
            frames,
            capturing: false,
        }
    }
}

#[async_trait::async_trait]
impl AudioBackend for ScriptedBackend {
    async fn start(&mut self) -> Result<mpsc::Receiver<AudioFrame>, CaptureError> {
        let (tx, rx) = mpsc::channel(self.frames.len().max(1));
        for frame in self.frames.drain(..) {
            tx.send(frame).await.ok();
        }
        self.capturing = true;
        // Dropping tx here closes the channel once the frames drain
        Ok(rx)
    }

    async fn stop(&mut self) -> Result<(), CaptureError> {
        self.capturing = false;
        Ok(())
    }

    fn is_capturing(&self) -> bool {
        self.capturing
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn frame(samples: Vec<i16>, timestamp_ms: u64) -> AudioFrame {
    AudioFrame {
        samples,
        sample_rate: 16000,
        channels: 1,
        timestamp_ms,
    }
}

fn test_config() -> SessionConfig {
    SessionConfig {
        session_id: "test-session".to_string(),
        sample_rate: 16000,
        channels: 1,
        buffer_duration_ms: 100,
    }
}

#[tokio::test]
async fn test_stop_without_start_fails() {
    let session = RecordingSession::new(test_config());

    let err = session.stop().await.expect_err("stop while idle must fail");

    assert!(
        matches!(err, CaptureError::NoActiveRecording),
        "expected NoActiveRecording, got {:?}",
        err
    );
}

#[tokio::test]
async fn test_session_finalizes_frames_into_wav_artifact() -> Result<()> {
    let session = RecordingSession::new(test_config());

    let backend = ScriptedBackend::new(vec![
        frame(vec![1, 2, 3], 0),
        frame(vec![4, 5, 6], 100),
    ]);
    session.start_with_backend(Box::new(backend)).await?;

    let artifact = session.stop().await?;

    assert_eq!(artifact.mime_type, "audio/wav");
    assert_eq!(artifact.sample_rate, 16000);
    assert_eq!(artifact.channels, 1);

    // Decode the in-memory WAV and verify chunk concatenation order
    let reader = hound::WavReader::new(Cursor::new(artifact.data))?;
    let spec = reader.spec();
    assert_eq!(spec.sample_rate, 16000);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.bits_per_sample, 16);

    let samples: Vec<i16> = reader.into_samples::<i16>().collect::<Result<Vec<_>, _>>()?;
    assert_eq!(samples, vec![1, 2, 3, 4, 5, 6], "frames concatenate in arrival order");

    Ok(())
}

#[tokio::test]
async fn test_second_stop_fails() -> Result<()> {
    let session = RecordingSession::new(test_config());
    session
        .start_with_backend(Box::new(ScriptedBackend::new(vec![frame(vec![0; 160], 0)])))
        .await?;

    session.stop().await?;

    let err = session.stop().await.expect_err("session is already finalized");
    assert!(matches!(err, CaptureError::NoActiveRecording));

    Ok(())
}

#[tokio::test]
async fn test_stats_reflect_session_state() -> Result<()> {
    let session = RecordingSession::new(test_config());

    let stats = session.stats().await;
    assert!(!stats.is_recording);
    assert_eq!(stats.chunks_count, 0);

    session
        .start_with_backend(Box::new(ScriptedBackend::new(vec![
            frame(vec![0; 160], 0),
            frame(vec![0; 160], 10),
        ])))
        .await?;

    session.stop().await?;

    let stats = session.stats().await;
    assert!(!stats.is_recording, "stopped session is idle");

    Ok(())
}

#[test]
fn test_artifact_round_trip_through_disk() -> Result<()> {
    let frames = vec![frame(vec![100i16; 1600], 0), frame(vec![-100i16; 1600], 100)];
    let artifact = AudioArtifact::from_frames(&frames, 16000, 1)?;

    assert!((artifact.duration_secs - 0.2).abs() < 1e-9, "3200 samples at 16kHz mono");

    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("recording.wav");
    fs::write(&path, &artifact.data)?;

    let reader = hound::WavReader::open(&path)?;
    assert_eq!(reader.spec().sample_rate, 16000);
    assert_eq!(reader.len(), 3200, "all samples survive the round trip");

    Ok(())
}

#[test]
fn test_empty_recording_still_encodes() -> Result<()> {
    let artifact = AudioArtifact::from_frames(&[], 16000, 1)?;

    assert_eq!(artifact.duration_secs, 0.0);
    // A valid WAV header is still produced
    let reader = hound::WavReader::new(Cursor::new(artifact.data))?;
    assert_eq!(reader.len(), 0);

    Ok(())
}
