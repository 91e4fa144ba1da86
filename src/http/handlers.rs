use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::state::AppState;
use crate::analysis::{timeline, EmotionalAnalysis, SpeakerMood};
use crate::audio::CaptureError;
use crate::pipeline::{self, PipelineError};
use crate::session::{RecordingSession, SessionConfig};
use crate::transcript::TranscriptError;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct StartRecordingRequest {
    /// Optional session ID (if not provided, generate UUID)
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StartRecordingResponse {
    pub session_id: String,
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct StopRecordingResponse {
    pub session_id: String,
    pub status: String,
    pub analysis: EmotionalAnalysis,
    pub speaker_moods: Vec<SpeakerMood>,
    pub prompts: Vec<String>,
    pub audio_url: String,
    pub transcription: String,
}

#[derive(Debug, Deserialize)]
pub struct TimelineQuery {
    /// Maximum number of entries to chart (default: 30)
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn capture_status(error: &CaptureError) -> StatusCode {
    match error {
        CaptureError::PermissionDenied(_) => StatusCode::FORBIDDEN,
        CaptureError::DeviceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        CaptureError::NoActiveRecording => StatusCode::CONFLICT,
        CaptureError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn pipeline_status(error: &PipelineError) -> StatusCode {
    match error {
        PipelineError::Transcript(TranscriptError::Timeout { .. }) => StatusCode::GATEWAY_TIMEOUT,
        PipelineError::Transcript(_) => StatusCode::BAD_GATEWAY,
        PipelineError::Store(_) => StatusCode::BAD_GATEWAY,
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /journal/record/start
/// Start a new recording session
pub async fn start_recording(
    State(state): State<AppState>,
    Json(req): Json<StartRecordingRequest>,
) -> impl IntoResponse {
    let session_id = req
        .session_id
        .unwrap_or_else(|| format!("journal-{}", uuid::Uuid::new_v4()));

    info!("Starting recording for session: {}", session_id);

    // Check if already recording
    {
        let sessions = state.sessions.read().await;
        if sessions.contains_key(&session_id) {
            return (
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    error: format!("Session {} is already recording", session_id),
                }),
            )
                .into_response();
        }
    }

    let config = SessionConfig {
        session_id: session_id.clone(),
        sample_rate: state.audio.sample_rate,
        channels: state.audio.channels,
        buffer_duration_ms: state.audio.buffer_duration_ms,
    };

    let session = Arc::new(RecordingSession::new(config));

    if let Err(e) = session.start().await {
        error!("Failed to start recording: {}", e);
        return (
            capture_status(&e),
            Json(ErrorResponse {
                error: format!("Failed to start recording: {}", e),
            }),
        )
            .into_response();
    }

    {
        let mut sessions = state.sessions.write().await;
        sessions.insert(session_id.clone(), session);
    }

    info!("Recording started for session: {}", session_id);

    (
        StatusCode::OK,
        Json(StartRecordingResponse {
            session_id: session_id.clone(),
            status: "recording".to_string(),
            message: format!("Recording started for session {}", session_id),
        }),
    )
        .into_response()
}

/// POST /journal/record/stop/:session_id
/// Stop recording, analyze the artifact, and persist the entry
pub async fn stop_recording(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    info!("Stopping recording for session: {}", session_id);

    let session = {
        let mut sessions = state.sessions.write().await;
        sessions.remove(&session_id)
    };

    let Some(session) = session else {
        error!("Session {} not found", session_id);
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Session {} not found", session_id),
            }),
        )
            .into_response();
    };

    let artifact = match session.stop().await {
        Ok(artifact) => artifact,
        Err(e) => {
            error!("Failed to stop recording: {}", e);
            return (
                capture_status(&e),
                Json(ErrorResponse {
                    error: format!("Failed to stop recording: {}", e),
                }),
            )
                .into_response();
        }
    };

    match pipeline::run(&state.transcript, &state.store, artifact).await {
        Ok(outcome) => {
            info!("Session {} analyzed and saved", session_id);
            (
                StatusCode::OK,
                Json(StopRecordingResponse {
                    session_id,
                    status: "analyzed".to_string(),
                    analysis: outcome.analysis,
                    speaker_moods: outcome.speaker_moods,
                    prompts: outcome.prompts,
                    audio_url: outcome.entry.audio_url,
                    transcription: outcome.entry.transcription,
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Analysis pipeline failed for session {}: {}", session_id, e);
            (
                pipeline_status(&e),
                Json(ErrorResponse {
                    error: format!("Analysis failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}

/// GET /journal/:session_id/status
/// Get status of a recording session
pub async fn get_session_status(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let sessions = state.sessions.read().await;

    match sessions.get(&session_id) {
        Some(session) => (StatusCode::OK, Json(session.stats().await)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Session {} not found", session_id),
            }),
        )
            .into_response(),
    }
}

/// GET /journal/timeline
/// Chart-ready emotion series from stored entries
pub async fn get_timeline(
    State(state): State<AppState>,
    Query(query): Query<TimelineQuery>,
) -> impl IntoResponse {
    let limit = query.limit.unwrap_or(30);

    match state.store.list_entries(limit).await {
        Ok(entries) => (StatusCode::OK, Json(timeline(&entries))).into_response(),
        Err(e) => {
            error!("Failed to load journal entries: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: format!("Failed to load journal entries: {}", e),
                }),
            )
                .into_response()
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
