//! Per-recording orchestration: one finished artifact in, one analyzed and
//! persisted journal entry out.
//!
//! Every network step is awaited sequentially and every failure propagates
//! to the caller unretried.

use chrono::Utc;
use thiserror::Error;
use tracing::info;

use crate::analysis::{
    interpret, interpret_speaker_moods, reflection_prompts, EmotionalAnalysis, SpeakerMood,
};
use crate::audio::AudioArtifact;
use crate::journal::{JournalEntry, JournalStore, JournalStoreError};
use crate::transcript::{TranscriptClient, TranscriptError, TranscriptOptions};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Transcript(#[from] TranscriptError),

    #[error(transparent)]
    Store(#[from] JournalStoreError),
}

/// Everything produced by one completed recording
#[derive(Debug, Clone)]
pub struct JournalOutcome {
    pub analysis: EmotionalAnalysis,
    pub speaker_moods: Vec<SpeakerMood>,
    pub prompts: Vec<String>,
    pub entry: JournalEntry,
}

/// Analyze and persist one finished recording
///
/// The artifact is uploaded once; the emotion job and the speaker-mood job
/// are submitted against the same remote reference and awaited one after
/// the other.
pub async fn run(
    transcript: &TranscriptClient,
    store: &JournalStore,
    artifact: AudioArtifact,
) -> Result<JournalOutcome, PipelineError> {
    let audio_url = transcript.upload(&artifact).await?;

    let emotion_job = transcript
        .submit(&audio_url, &TranscriptOptions::emotion())
        .await?;
    let emotion_result = transcript.await_completion(&emotion_job).await?;

    let mood_job = transcript
        .submit(&audio_url, &TranscriptOptions::speaker_mood())
        .await?;
    let mood_result = transcript.await_completion(&mood_job).await?;

    let analysis = interpret(&emotion_result);
    let speaker_moods = interpret_speaker_moods(&mood_result);
    let prompts = reflection_prompts(&analysis);

    info!(
        "Analysis complete: sentiment={:?}, {} topics, {} prompts",
        analysis.sentiment,
        analysis.topics.len(),
        prompts.len()
    );

    let storage_ref = store.store_audio(&artifact).await?;
    let user_id = store.current_user().await;

    let entry = JournalEntry {
        timestamp: Utc::now(),
        analysis: analysis.clone(),
        audio_url: storage_ref,
        transcription: emotion_result.text.clone().unwrap_or_default(),
        user_id,
    };

    store.create_entry(&entry).await?;

    Ok(JournalOutcome {
        analysis,
        speaker_moods,
        prompts,
        entry,
    })
}
