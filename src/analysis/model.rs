use serde::{Deserialize, Serialize};

/// Overall sentiment of a recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Intensity of the five tracked emotions, each in [0, 1]
///
/// Accumulators are clamped independently; the sum across categories may
/// exceed 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub joy: f32,
    pub sadness: f32,
    pub anger: f32,
    pub fear: f32,
    pub surprise: f32,
}

impl EmotionScores {
    pub fn clamped(self) -> Self {
        Self {
            joy: self.joy.min(1.0),
            sadness: self.sadness.min(1.0),
            anger: self.anger.min(1.0),
            fear: self.fear.min(1.0),
            surprise: self.surprise.min(1.0),
        }
    }
}

/// Speaking tone profile, each axis in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneProfile {
    pub formal: f32,
    pub informal: f32,
    pub confident: f32,
    pub tentative: f32,
}

impl Default for ToneProfile {
    fn default() -> Self {
        Self {
            formal: 0.5,
            informal: 0.5,
            confident: 0.5,
            tentative: 0.5,
        }
    }
}

/// Interpreted emotional profile of one recording
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionalAnalysis {
    pub sentiment: Sentiment,
    pub emotions: EmotionScores,
    /// Up to 5 topic labels, ordered by relevance
    pub topics: Vec<String>,
    pub tone: ToneProfile,
}

/// Mood label for one utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Enthusiastic,
    Concerned,
    Neutral,
}

/// Per-utterance speaker mood
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerMood {
    pub speaker_id: String,
    pub mood: Mood,
    pub confidence: f32,
    /// Start offset in milliseconds into the recording
    pub timestamp_ms: u64,
}
