// Microphone capture via cpal
//
// cpal streams are not Send, so the stream lives on a dedicated capture
// thread that owns the device lease. The thread forwards frames into a
// tokio channel and drops the stream (releasing the device) when signalled.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use tokio::sync::{mpsc, oneshot};
use tracing::{info, warn};

use super::backend::{AudioBackend, AudioBackendConfig, AudioFrame, CaptureError};

/// Default-input-device capture backend
pub struct MicrophoneBackend {
    config: AudioBackendConfig,
    stop_flag: Arc<AtomicBool>,
    thread: Option<thread::JoinHandle<()>>,
    capturing: bool,
}

impl MicrophoneBackend {
    pub fn new(config: AudioBackendConfig) -> Self {
        Self {
            config,
            stop_flag: Arc::new(AtomicBool::new(false)),
            thread: None,
            capturing: false,
        }
    }
}

#[async_trait::async_trait]
impl AudioBackend for MicrophoneBackend {
    async fn start(&mut self) -> Result<mpsc::Receiver<AudioFrame>, CaptureError> {
        if self.capturing {
            return Err(CaptureError::DeviceUnavailable(
                "capture already running".to_string(),
            ));
        }

        info!(
            "Starting microphone capture ({}Hz, {} channels)",
            self.config.sample_rate, self.config.channels
        );

        let (frame_tx, frame_rx) = mpsc::channel(64);
        let (ready_tx, ready_rx) = oneshot::channel();
        let stop_flag = Arc::new(AtomicBool::new(false));
        self.stop_flag = Arc::clone(&stop_flag);

        let config = self.config.clone();
        let handle = thread::Builder::new()
            .name("mic-capture".to_string())
            .spawn(move || capture_thread(config, frame_tx, ready_tx, stop_flag))
            .map_err(|e| CaptureError::DeviceUnavailable(e.to_string()))?;
        self.thread = Some(handle);

        match ready_rx.await {
            Ok(Ok(())) => {
                self.capturing = true;
                info!("Microphone capture started");
                Ok(frame_rx)
            }
            Ok(Err(e)) => {
                self.join_thread().await;
                Err(e)
            }
            Err(_) => {
                self.join_thread().await;
                Err(CaptureError::DeviceUnavailable(
                    "capture thread exited during startup".to_string(),
                ))
            }
        }
    }

    async fn stop(&mut self) -> Result<(), CaptureError> {
        if !self.capturing {
            return Ok(());
        }

        info!("Stopping microphone capture");

        self.stop_flag.store(true, Ordering::SeqCst);
        self.join_thread().await;
        self.capturing = false;

        info!("Microphone capture stopped");

        Ok(())
    }

    fn is_capturing(&self) -> bool {
        self.capturing
    }

    fn name(&self) -> &str {
        "cpal microphone"
    }
}

impl MicrophoneBackend {
    async fn join_thread(&mut self) {
        if let Some(handle) = self.thread.take() {
            let _ = tokio::task::spawn_blocking(move || handle.join()).await;
        }
    }
}

impl Drop for MicrophoneBackend {
    fn drop(&mut self) {
        // The capture thread drops the stream (and the device lease) once it
        // sees the flag, even if stop() was never awaited.
        self.stop_flag.store(true, Ordering::SeqCst);
    }
}

fn capture_thread(
    config: AudioBackendConfig,
    frame_tx: mpsc::Sender<AudioFrame>,
    ready_tx: oneshot::Sender<Result<(), CaptureError>>,
    stop_flag: Arc<AtomicBool>,
) {
    match open_stream(&config, frame_tx) {
        Ok(stream) => {
            let _ = ready_tx.send(Ok(()));

            while !stop_flag.load(Ordering::SeqCst) {
                thread::sleep(Duration::from_millis(50));
            }

            // Dropping the stream releases the device lease
            drop(stream);
        }
        Err(e) => {
            let _ = ready_tx.send(Err(e));
        }
    }
}

fn open_stream(
    config: &AudioBackendConfig,
    frame_tx: mpsc::Sender<AudioFrame>,
) -> Result<cpal::Stream, CaptureError> {
    let host = cpal::default_host();
    let device = host.default_input_device().ok_or_else(|| {
        CaptureError::DeviceUnavailable("no default input device".to_string())
    })?;

    let device_config = device
        .default_input_config()
        .map_err(|e| capture_error(e.to_string()))?;

    info!(
        "Capturing from '{}' ({}Hz, {} channels, {:?})",
        device.name().unwrap_or_else(|_| "unknown".to_string()),
        device_config.sample_rate().0,
        device_config.channels(),
        device_config.sample_format(),
    );

    let buffer_frames =
        (device_config.sample_rate().0 as u64 * config.buffer_duration_ms / 1000) as u32;
    let stream_config = cpal::StreamConfig {
        channels: device_config.channels(),
        sample_rate: device_config.sample_rate(),
        buffer_size: cpal::BufferSize::Fixed(buffer_frames),
    };

    let stream = match device_config.sample_format() {
        cpal::SampleFormat::F32 => {
            build_input_stream::<f32>(&device, &stream_config, config, frame_tx)
        }
        cpal::SampleFormat::I16 => {
            build_input_stream::<i16>(&device, &stream_config, config, frame_tx)
        }
        cpal::SampleFormat::U16 => {
            build_input_stream::<u16>(&device, &stream_config, config, frame_tx)
        }
        other => Err(CaptureError::DeviceUnavailable(format!(
            "unsupported sample format {other:?}"
        ))),
    }?;

    stream.play().map_err(|e| capture_error(e.to_string()))?;

    Ok(stream)
}

fn build_input_stream<T>(
    device: &cpal::Device,
    stream_config: &cpal::StreamConfig,
    target: &AudioBackendConfig,
    frame_tx: mpsc::Sender<AudioFrame>,
) -> Result<cpal::Stream, CaptureError>
where
    T: cpal::SizedSample,
    f32: cpal::FromSample<T>,
{
    let native_rate = stream_config.sample_rate.0;
    let native_channels = stream_config.channels;
    let target_rate = target.sample_rate;
    let target_channels = target.channels;

    let mut sent_samples: u64 = 0;

    let stream = device
        .build_input_stream(
            stream_config,
            move |data: &[T], _: &cpal::InputCallbackInfo| {
                let samples: Vec<i16> = data
                    .iter()
                    .map(|&s| {
                        let sample_f32: f32 = cpal::Sample::from_sample(s);
                        (sample_f32 * i16::MAX as f32) as i16
                    })
                    .collect();

                let mut frame = process_frame(
                    AudioFrame {
                        samples,
                        sample_rate: native_rate,
                        channels: native_channels,
                        timestamp_ms: 0,
                    },
                    target_rate,
                    target_channels,
                );

                frame.timestamp_ms = sent_samples * 1000
                    / (frame.sample_rate as u64 * frame.channels.max(1) as u64);
                sent_samples += frame.samples.len() as u64;

                if frame_tx.try_send(frame).is_err() {
                    warn!("Dropping audio frame: session buffer full");
                }
            },
            move |err| {
                warn!("Microphone stream error: {}", err);
            },
            None,
        )
        .map_err(|e| capture_error(e.to_string()))?;

    Ok(stream)
}

/// Convert a captured frame toward the target format
fn process_frame(frame: AudioFrame, target_sample_rate: u32, target_channels: u16) -> AudioFrame {
    let mut processed = frame;

    if processed.sample_rate != target_sample_rate {
        processed = downsample_frame(processed, target_sample_rate);
    }

    if processed.channels != target_channels && target_channels == 1 {
        processed = stereo_to_mono(processed);
    }

    processed
}

/// Downsample audio frame by decimation
fn downsample_frame(frame: AudioFrame, target_rate: u32) -> AudioFrame {
    if frame.sample_rate == target_rate {
        return frame;
    }

    let ratio = frame.sample_rate / target_rate;
    if ratio <= 1 {
        return frame; // Can't upsample
    }

    // Decimate: take every Nth sample
    let downsampled: Vec<i16> = frame
        .samples
        .iter()
        .step_by(ratio as usize)
        .copied()
        .collect();

    AudioFrame {
        samples: downsampled,
        sample_rate: target_rate,
        channels: frame.channels,
        timestamp_ms: frame.timestamp_ms,
    }
}

/// Convert stereo to mono by summing channels
fn stereo_to_mono(frame: AudioFrame) -> AudioFrame {
    if frame.channels == 1 {
        return frame;
    }

    if frame.channels != 2 {
        return frame; // Only support stereo -> mono
    }

    let mut mono_samples = Vec::with_capacity(frame.samples.len() / 2);

    for chunk in frame.samples.chunks_exact(2) {
        let left = chunk[0] as i32;
        let right = chunk[1] as i32;
        let sum = left + right;
        let mono = sum.clamp(i16::MIN as i32, i16::MAX as i32) as i16;
        mono_samples.push(mono);
    }

    AudioFrame {
        samples: mono_samples,
        sample_rate: frame.sample_rate,
        channels: 1,
        timestamp_ms: frame.timestamp_ms,
    }
}

fn capture_error(message: String) -> CaptureError {
    let lower = message.to_lowercase();
    if lower.contains("permission") || lower.contains("denied") || lower.contains("not permitted") {
        CaptureError::PermissionDenied(message)
    } else {
        CaptureError::DeviceUnavailable(message)
    }
}
