//! Maps raw remote results into the application's emotion/tone/topic model.
//!
//! Pure functions, no I/O. Missing sections of the remote result read as
//! empty and fall back to neutral defaults.

use super::model::{EmotionScores, EmotionalAnalysis, Mood, Sentiment, SpeakerMood, ToneProfile};
use crate::transcript::{SentimentLabel, SentimentResult, TranscriptResult};

/// Maximum number of topic labels carried into an analysis
const MAX_TOPICS: usize = 5;

/// Interpret a completed job result into an emotional analysis
pub fn interpret(result: &TranscriptResult) -> EmotionalAnalysis {
    EmotionalAnalysis {
        sentiment: overall_sentiment(&result.sentiment_analysis_results),
        emotions: emotion_scores(&result.sentiment_analysis_results),
        topics: topics(result),
        tone: tone_profile(&result.sentiment_analysis_results),
    }
}

/// Map each utterance of a completed job to a speaker mood
pub fn interpret_speaker_moods(result: &TranscriptResult) -> Vec<SpeakerMood> {
    result
        .utterances
        .iter()
        .map(|utterance| SpeakerMood {
            speaker_id: utterance.speaker.clone(),
            mood: match utterance.sentiment {
                Some(SentimentLabel::Positive) => Mood::Enthusiastic,
                Some(SentimentLabel::Negative) => Mood::Concerned,
                _ => Mood::Neutral,
            },
            confidence: utterance.confidence,
            timestamp_ms: utterance.start,
        })
        .collect()
}

/// Accumulate emotion intensities from the sentiment spans
///
/// POSITIVE feeds joy, NEGATIVE feeds sadness and anger, NEUTRAL feeds
/// surprise. Fear has no source in this rule table and stays at zero.
/// Each accumulator is clamped to 1.0; categories are not normalized
/// against each other.
fn emotion_scores(results: &[SentimentResult]) -> EmotionScores {
    let mut emotions = EmotionScores::default();

    for result in results {
        match result.sentiment {
            SentimentLabel::Positive => emotions.joy += 0.2,
            SentimentLabel::Negative => {
                emotions.sadness += 0.1;
                emotions.anger += 0.1;
            }
            SentimentLabel::Neutral => emotions.surprise += 0.1,
        }
    }

    emotions.clamped()
}

/// Take up to the first five category labels, preserving remote order
fn topics(result: &TranscriptResult) -> Vec<String> {
    result
        .iab_categories_result
        .results
        .iter()
        .take(MAX_TOPICS)
        .map(|category| category.label.clone())
        .collect()
}

/// Derive the tone profile from sentiment confidence
///
/// Confidence across spans is averaged into "confident"; "tentative" is its
/// complement. Formal/informal are not computed from data.
fn tone_profile(results: &[SentimentResult]) -> ToneProfile {
    let mut tone = ToneProfile::default();

    if results.is_empty() {
        return tone;
    }

    let confidence_sum: f32 = results.iter().map(|r| r.confidence.abs()).sum();
    let confident = (confidence_sum / results.len() as f32).clamp(0.0, 1.0);

    tone.confident = confident;
    tone.tentative = 1.0 - confident;

    tone
}

/// Majority sentiment across spans; ties keep the first label to reach the
/// maximum count. Empty input reads as neutral.
fn overall_sentiment(results: &[SentimentResult]) -> Sentiment {
    if results.is_empty() {
        return Sentiment::Neutral;
    }

    // Counts in first-encounter order
    let mut counts: Vec<(SentimentLabel, usize)> = Vec::new();
    for result in results {
        match counts.iter_mut().find(|(label, _)| *label == result.sentiment) {
            Some((_, count)) => *count += 1,
            None => counts.push((result.sentiment, 1)),
        }
    }

    let mut best: Option<(SentimentLabel, usize)> = None;
    for (label, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((label, count));
        }
    }

    match best {
        Some((SentimentLabel::Positive, _)) => Sentiment::Positive,
        Some((SentimentLabel::Negative, _)) => Sentiment::Negative,
        _ => Sentiment::Neutral,
    }
}
