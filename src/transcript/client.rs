use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};

use super::types::{
    JobStatus, SubmitResponse, TranscriptOptions, TranscriptRequest, TranscriptResult,
    UploadResponse,
};
use crate::audio::AudioArtifact;
use crate::config::TranscriptionConfig;

/// Remote transcription failures surfaced to the pipeline
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("audio upload failed: {0}")]
    Upload(String),

    #[error("analysis submission rejected: {0}")]
    Submission(String),

    #[error("remote processing failed: {0}")]
    RemoteProcessing(String),

    #[error("analysis timed out after {attempts} status checks")]
    Timeout { attempts: u32 },
}

/// Transport to the remote transcription service
///
/// The HTTP implementation is the production path; the trait seam keeps the
/// polling loop testable without a live endpoint.
#[async_trait::async_trait]
pub trait TranscriptApi: Send + Sync {
    /// Request a staging slot; returns the upload URL
    async fn create_upload(&self) -> Result<String, TranscriptError>;

    /// Transfer raw audio bytes to the staging slot
    async fn put_audio(&self, upload_url: &str, data: &[u8]) -> Result<(), TranscriptError>;

    /// Submit an analysis job; returns the job id
    async fn submit(
        &self,
        audio_url: &str,
        options: &TranscriptOptions,
    ) -> Result<String, TranscriptError>;

    /// Fetch the current job state
    async fn fetch(&self, job_id: &str) -> Result<TranscriptResult, TranscriptError>;
}

/// reqwest-backed transport
pub struct HttpTranscriptApi {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpTranscriptApi {
    pub fn new(base_url: String, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(format!("voice-journal/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }
}

#[async_trait::async_trait]
impl TranscriptApi for HttpTranscriptApi {
    async fn create_upload(&self) -> Result<String, TranscriptError> {
        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .header("Authorization", &self.api_key)
            .send()
            .await
            .map_err(|e| TranscriptError::Upload(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranscriptError::Upload(format!(
                "upload slot request returned HTTP {}",
                response.status()
            )));
        }

        let upload: UploadResponse = response
            .json()
            .await
            .map_err(|e| TranscriptError::Upload(e.to_string()))?;

        Ok(upload.upload_url)
    }

    async fn put_audio(&self, upload_url: &str, data: &[u8]) -> Result<(), TranscriptError> {
        let response = self
            .client
            .put(upload_url)
            .header("Content-Type", "application/octet-stream")
            .body(data.to_vec())
            .send()
            .await
            .map_err(|e| TranscriptError::Upload(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranscriptError::Upload(format!(
                "audio transfer returned HTTP {}",
                response.status()
            )));
        }

        Ok(())
    }

    async fn submit(
        &self,
        audio_url: &str,
        options: &TranscriptOptions,
    ) -> Result<String, TranscriptError> {
        let request = TranscriptRequest {
            audio_url: audio_url.to_string(),
            options: options.clone(),
        };

        let response = self
            .client
            .post(format!("{}/transcript", self.base_url))
            .header("Authorization", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TranscriptError::Submission(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranscriptError::Submission(format!(
                "job submission returned HTTP {}",
                response.status()
            )));
        }

        let submitted: SubmitResponse = response
            .json()
            .await
            .map_err(|e| TranscriptError::Submission(e.to_string()))?;

        Ok(submitted.id)
    }

    async fn fetch(&self, job_id: &str) -> Result<TranscriptResult, TranscriptError> {
        let response = self
            .client
            .get(format!("{}/transcript/{}", self.base_url, job_id))
            .header("Authorization", &self.api_key)
            .send()
            .await
            .map_err(|e| TranscriptError::RemoteProcessing(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranscriptError::RemoteProcessing(format!(
                "status check returned HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| TranscriptError::RemoteProcessing(e.to_string()))
    }
}

/// Client for the remote transcription/sentiment service
///
/// Upload, submit, and poll are awaited sequentially; there is never more
/// than one in-flight status check per job.
pub struct TranscriptClient {
    api: Box<dyn TranscriptApi>,
    poll_interval: Duration,
    max_attempts: u32,
}

impl TranscriptClient {
    pub fn new(config: &TranscriptionConfig) -> Result<Self> {
        let api = HttpTranscriptApi::new(config.base_url.clone(), config.api_key.clone())?;

        Ok(Self::with_api(
            Box::new(api),
            Duration::from_secs(config.poll_interval_secs),
            config.poll_max_attempts,
        ))
    }

    pub fn with_api(api: Box<dyn TranscriptApi>, poll_interval: Duration, max_attempts: u32) -> Self {
        Self {
            api,
            poll_interval,
            max_attempts,
        }
    }

    /// Transfer the artifact to the remote staging storage
    ///
    /// Returns the remote audio reference to submit jobs against.
    pub async fn upload(&self, artifact: &AudioArtifact) -> Result<String, TranscriptError> {
        info!("Uploading recording ({} bytes)", artifact.data.len());

        let upload_url = self.api.create_upload().await?;
        self.api.put_audio(&upload_url, &artifact.data).await?;

        info!("Recording staged at remote storage");

        Ok(upload_url)
    }

    /// Submit an analysis job for a staged recording
    pub async fn submit(
        &self,
        audio_url: &str,
        options: &TranscriptOptions,
    ) -> Result<String, TranscriptError> {
        let job_id = self.api.submit(audio_url, options).await?;

        info!("Submitted analysis job {}", job_id);

        Ok(job_id)
    }

    /// Poll a job until it completes, fails, or the attempt ceiling runs out
    pub async fn await_completion(&self, job_id: &str) -> Result<TranscriptResult, TranscriptError> {
        for attempt in 1..=self.max_attempts {
            let result = self.api.fetch(job_id).await?;

            match result.status {
                JobStatus::Completed => {
                    info!("Job {} completed after {} status checks", job_id, attempt);
                    return Ok(result);
                }
                JobStatus::Error => {
                    let message = result
                        .error
                        .unwrap_or_else(|| "remote reported an unspecified error".to_string());
                    return Err(TranscriptError::RemoteProcessing(message));
                }
                JobStatus::Queued | JobStatus::Processing => {
                    debug!(
                        "Job {} still {:?} (check {}/{})",
                        job_id, result.status, attempt, self.max_attempts
                    );
                    tokio::time::sleep(self.poll_interval).await;
                }
            }
        }

        Err(TranscriptError::Timeout {
            attempts: self.max_attempts,
        })
    }
}
