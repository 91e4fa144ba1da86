use std::io::Cursor;

use super::backend::{AudioFrame, CaptureError};

pub const WAV_MIME: &str = "audio/wav";

/// A finished recording: one immutable WAV blob plus its MIME type.
///
/// Produced once per session by concatenating the accumulated frames in
/// arrival order.
#[derive(Debug, Clone)]
pub struct AudioArtifact {
    pub data: Vec<u8>,
    pub mime_type: &'static str,
    pub sample_rate: u32,
    pub channels: u16,
    pub duration_secs: f64,
}

impl AudioArtifact {
    /// Encode accumulated frames into a single in-memory WAV blob.
    ///
    /// `sample_rate` and `channels` describe the session's capture format;
    /// frames are expected to already be in that format.
    pub fn from_frames(
        frames: &[AudioFrame],
        sample_rate: u32,
        channels: u16,
    ) -> Result<Self, CaptureError> {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::new());
        let mut sample_count: usize = 0;

        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
            for frame in frames {
                for &sample in &frame.samples {
                    writer.write_sample(sample)?;
                }
                sample_count += frame.samples.len();
            }
            writer.finalize()?;
        }

        let duration_secs =
            sample_count as f64 / (sample_rate as f64 * channels.max(1) as f64);

        Ok(Self {
            data: cursor.into_inner(),
            mime_type: WAV_MIME,
            sample_rate,
            channels,
            duration_secs,
        })
    }

    /// File extension matching the MIME type
    pub fn extension(&self) -> &'static str {
        "wav"
    }
}
