use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use super::entry::JournalEntry;
use crate::audio::AudioArtifact;
use crate::config::JournalConfig;

/// Persistence failures surfaced to the pipeline
#[derive(Debug, Error)]
pub enum JournalStoreError {
    #[error("audio storage rejected: {0}")]
    Storage(String),

    #[error("journal entry rejected: {0}")]
    Persistence(String),
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
}

/// Client for the hosted journal backend: object storage for raw
/// recordings, an entries collection, and auth introspection.
///
/// Constructed once at process start and shared by reference; holds no
/// mutable state.
pub struct JournalStore {
    client: Client,
    base_url: String,
    api_key: String,
    access_token: Option<String>,
    bucket: String,
    table: String,
}

impl JournalStore {
    pub fn new(config: &JournalConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(format!("voice-journal/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            access_token: config.access_token.clone(),
            bucket: config.bucket.clone(),
            table: config.table.clone(),
        })
    }

    fn bearer(&self) -> &str {
        self.access_token.as_deref().unwrap_or(&self.api_key)
    }

    /// Upload the raw recording under a time-derived unique key
    ///
    /// Returns the storage reference recorded on the journal entry.
    pub async fn store_audio(&self, artifact: &AudioArtifact) -> Result<String, JournalStoreError> {
        let key = format!(
            "voice-journal/{}.{}",
            Utc::now().timestamp_millis(),
            artifact.extension()
        );

        let response = self
            .client
            .post(format!(
                "{}/storage/v1/object/{}/{}",
                self.base_url, self.bucket, key
            ))
            .header("apikey", &self.api_key)
            .bearer_auth(self.bearer())
            .header("Content-Type", artifact.mime_type)
            .body(artifact.data.clone())
            .send()
            .await
            .map_err(|e| JournalStoreError::Storage(e.to_string()))?;

        if !response.status().is_success() {
            return Err(JournalStoreError::Storage(format!(
                "storage upload returned HTTP {}",
                response.status()
            )));
        }

        info!("Stored recording as {} ({} bytes)", key, artifact.data.len());

        Ok(key)
    }

    /// Resolve the currently authenticated user, if any
    ///
    /// Entries created without a resolved user are stored ownerless.
    pub async fn current_user(&self) -> Option<String> {
        let token = self.access_token.as_deref()?;

        let response = self
            .client
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.api_key)
            .bearer_auth(token)
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => {
                match response.json::<UserResponse>().await {
                    Ok(user) => Some(user.id),
                    Err(e) => {
                        warn!("Failed to decode auth response: {}", e);
                        None
                    }
                }
            }
            Ok(response) => {
                warn!("Auth introspection returned HTTP {}", response.status());
                None
            }
            Err(e) => {
                warn!("Auth introspection failed: {}", e);
                None
            }
        }
    }

    /// Insert one immutable journal entry
    pub async fn create_entry(&self, entry: &JournalEntry) -> Result<(), JournalStoreError> {
        let response = self
            .client
            .post(format!("{}/rest/v1/{}", self.base_url, self.table))
            .header("apikey", &self.api_key)
            .bearer_auth(self.bearer())
            .header("Prefer", "return=minimal")
            .json(&[entry])
            .send()
            .await
            .map_err(|e| JournalStoreError::Persistence(e.to_string()))?;

        if !response.status().is_success() {
            return Err(JournalStoreError::Persistence(format!(
                "entry insert returned HTTP {}",
                response.status()
            )));
        }

        info!("Journal entry saved (user: {:?})", entry.user_id);

        Ok(())
    }

    /// Fetch stored entries, oldest first
    pub async fn list_entries(&self, limit: usize) -> Result<Vec<JournalEntry>, JournalStoreError> {
        let limit = limit.to_string();
        let response = self
            .client
            .get(format!("{}/rest/v1/{}", self.base_url, self.table))
            .header("apikey", &self.api_key)
            .bearer_auth(self.bearer())
            .query(&[
                ("select", "*"),
                ("order", "timestamp.asc"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| JournalStoreError::Persistence(e.to_string()))?;

        if !response.status().is_success() {
            return Err(JournalStoreError::Persistence(format!(
                "entry query returned HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| JournalStoreError::Persistence(e.to_string()))
    }
}
