use serde::{Deserialize, Serialize};

/// Recognized analysis options for a transcription job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptOptions {
    pub sentiment_analysis: bool,
    pub entity_detection: bool,
    pub speaker_labels: bool,
    pub auto_chapters: bool,
    pub iab_categories: bool,
}

impl TranscriptOptions {
    /// Option set for the emotional analysis job
    pub fn emotion() -> Self {
        Self {
            sentiment_analysis: true,
            entity_detection: true,
            speaker_labels: false,
            auto_chapters: true,
            iab_categories: true,
        }
    }

    /// Option set for the per-utterance speaker mood job
    pub fn speaker_mood() -> Self {
        Self {
            sentiment_analysis: true,
            entity_detection: false,
            speaker_labels: true,
            auto_chapters: false,
            iab_categories: false,
        }
    }
}

/// Body of a job submission
#[derive(Debug, Serialize)]
pub struct TranscriptRequest {
    pub audio_url: String,
    #[serde(flatten)]
    pub options: TranscriptOptions,
}

#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub upload_url: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitResponse {
    pub id: String,
}

/// Remote job lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Queued,
    Processing,
    Completed,
    Error,
}

/// Sentiment label attached to utterances and sentiment spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

/// One sentiment-analysis span
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: SentimentLabel,
    #[serde(default)]
    pub confidence: f32,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub start: u64,
    #[serde(default)]
    pub end: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IabCategory {
    pub label: String,
    #[serde(default)]
    pub relevance: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IabCategoriesResult {
    #[serde(default)]
    pub results: Vec<IabCategory>,
}

/// One detected utterance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utterance {
    #[serde(default)]
    pub speaker: String,
    /// Sentiment is only present when the job requested it
    #[serde(default)]
    pub sentiment: Option<SentimentLabel>,
    #[serde(default)]
    pub confidence: f32,
    /// Start offset in milliseconds into the recording
    #[serde(default)]
    pub start: u64,
    #[serde(default)]
    pub text: String,
}

/// Raw result of a transcription job
///
/// Optional sections are decoded defensively: a missing field is an empty
/// one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptResult {
    #[serde(default)]
    pub id: String,
    pub status: JobStatus,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub sentiment_analysis_results: Vec<SentimentResult>,
    #[serde(default)]
    pub iab_categories_result: IabCategoriesResult,
    #[serde(default)]
    pub utterances: Vec<Utterance>,
    #[serde(default)]
    pub error: Option<String>,
}
