// Unit tests for the result interpreter
//
// These tests verify the emotion accumulation rules, topic truncation,
// tone derivation, and the majority-sentiment reduction.

use voice_journal::analysis::{interpret, interpret_speaker_moods, Mood, Sentiment};
use voice_journal::transcript::{
    IabCategoriesResult, IabCategory, JobStatus, SentimentLabel, SentimentResult, TranscriptResult,
    Utterance,
};

fn completed_result() -> TranscriptResult {
    TranscriptResult {
        id: "job-1".to_string(),
        status: JobStatus::Completed,
        text: Some("test transcript".to_string()),
        sentiment_analysis_results: Vec::new(),
        iab_categories_result: IabCategoriesResult::default(),
        utterances: Vec::new(),
        error: None,
    }
}

fn span(sentiment: SentimentLabel, confidence: f32) -> SentimentResult {
    SentimentResult {
        sentiment,
        confidence,
        text: String::new(),
        start: 0,
        end: 0,
    }
}

#[test]
fn test_empty_result_yields_neutral_defaults() {
    let analysis = interpret(&completed_result());

    assert_eq!(analysis.sentiment, Sentiment::Neutral);
    assert_eq!(analysis.emotions.joy, 0.0);
    assert_eq!(analysis.emotions.sadness, 0.0);
    assert_eq!(analysis.emotions.anger, 0.0);
    assert_eq!(analysis.emotions.fear, 0.0);
    assert_eq!(analysis.emotions.surprise, 0.0);
    assert!(analysis.topics.is_empty());
    assert_eq!(analysis.tone.formal, 0.5);
    assert_eq!(analysis.tone.informal, 0.5);
    assert_eq!(analysis.tone.confident, 0.5);
    assert_eq!(analysis.tone.tentative, 0.5);
}

#[test]
fn test_majority_sentiment_and_emotion_accumulation() {
    let mut result = completed_result();
    result.sentiment_analysis_results = vec![
        span(SentimentLabel::Positive, 0.9),
        span(SentimentLabel::Positive, 0.8),
        span(SentimentLabel::Positive, 0.7),
        span(SentimentLabel::Negative, 0.6),
    ];

    let analysis = interpret(&result);

    assert_eq!(analysis.sentiment, Sentiment::Positive, "3 of 4 spans are positive");
    assert!(
        (analysis.emotions.joy - 0.6).abs() < 1e-5,
        "joy should be 3 * 0.2, got {}",
        analysis.emotions.joy
    );
    assert!((analysis.emotions.sadness - 0.1).abs() < 1e-5);
    assert!((analysis.emotions.anger - 0.1).abs() < 1e-5);
    assert_eq!(analysis.emotions.surprise, 0.0);
}

#[test]
fn test_emotion_accumulators_are_clamped() {
    let mut result = completed_result();
    // 10 positives would accumulate joy to 2.0 unclamped
    result.sentiment_analysis_results =
        (0..10).map(|_| span(SentimentLabel::Positive, 0.9)).collect();

    let analysis = interpret(&result);

    assert_eq!(analysis.emotions.joy, 1.0, "joy must clamp at 1.0");

    // Mixed batch: every accumulator stays in [0, 1]
    let mut result = completed_result();
    for _ in 0..15 {
        result.sentiment_analysis_results.push(span(SentimentLabel::Positive, 0.9));
        result.sentiment_analysis_results.push(span(SentimentLabel::Negative, 0.9));
        result.sentiment_analysis_results.push(span(SentimentLabel::Neutral, 0.9));
    }
    let analysis = interpret(&result);
    for value in [
        analysis.emotions.joy,
        analysis.emotions.sadness,
        analysis.emotions.anger,
        analysis.emotions.fear,
        analysis.emotions.surprise,
    ] {
        assert!((0.0..=1.0).contains(&value), "emotion out of range: {}", value);
    }
}

#[test]
fn test_fear_stays_at_zero() {
    let mut result = completed_result();
    result.sentiment_analysis_results = vec![
        span(SentimentLabel::Positive, 0.9),
        span(SentimentLabel::Negative, 0.9),
        span(SentimentLabel::Neutral, 0.9),
    ];

    let analysis = interpret(&result);

    assert_eq!(analysis.emotions.fear, 0.0, "no sentiment label feeds fear");
}

#[test]
fn test_topics_capped_at_five_in_order() {
    let mut result = completed_result();
    result.iab_categories_result = IabCategoriesResult {
        results: (0..12)
            .map(|i| IabCategory {
                label: format!("topic-{}", i),
                relevance: 1.0 - i as f32 * 0.05,
            })
            .collect(),
    };

    let analysis = interpret(&result);

    assert_eq!(analysis.topics.len(), 5, "12 categories in, 5 topics out");
    assert_eq!(analysis.topics[0], "topic-0");
    assert_eq!(analysis.topics[4], "topic-4");
}

#[test]
fn test_tone_follows_mean_confidence() {
    let mut result = completed_result();
    result.sentiment_analysis_results = vec![
        span(SentimentLabel::Positive, 0.8),
        span(SentimentLabel::Neutral, 0.6),
    ];

    let analysis = interpret(&result);

    assert!((analysis.tone.confident - 0.7).abs() < 1e-5);
    assert!((analysis.tone.tentative - 0.3).abs() < 1e-5);
    assert_eq!(analysis.tone.formal, 0.5, "formal is not derived from data");
    assert_eq!(analysis.tone.informal, 0.5, "informal is not derived from data");
}

#[test]
fn test_sentiment_tie_keeps_first_encountered() {
    let mut result = completed_result();
    result.sentiment_analysis_results = vec![
        span(SentimentLabel::Negative, 0.5),
        span(SentimentLabel::Positive, 0.5),
        span(SentimentLabel::Negative, 0.5),
        span(SentimentLabel::Positive, 0.5),
    ];

    let analysis = interpret(&result);

    assert_eq!(
        analysis.sentiment,
        Sentiment::Negative,
        "tie should keep the first label encountered"
    );
}

#[test]
fn test_speaker_moods_map_per_utterance() {
    let mut result = completed_result();
    result.utterances = vec![
        Utterance {
            speaker: "A".to_string(),
            sentiment: Some(SentimentLabel::Positive),
            confidence: 0.92,
            start: 1200,
            text: "great day".to_string(),
        },
        Utterance {
            speaker: "B".to_string(),
            sentiment: Some(SentimentLabel::Negative),
            confidence: 0.71,
            start: 5600,
            text: "rough meeting".to_string(),
        },
        Utterance {
            speaker: "A".to_string(),
            sentiment: None,
            confidence: 0.4,
            start: 9000,
            text: "anyway".to_string(),
        },
    ];

    let moods = interpret_speaker_moods(&result);

    assert_eq!(moods.len(), 3);
    assert_eq!(moods[0].speaker_id, "A");
    assert_eq!(moods[0].mood, Mood::Enthusiastic);
    assert_eq!(moods[0].timestamp_ms, 1200);
    assert_eq!(moods[1].mood, Mood::Concerned);
    assert!((moods[1].confidence - 0.71).abs() < 1e-6);
    assert_eq!(moods[2].mood, Mood::Neutral, "missing sentiment reads as neutral");
}

#[test]
fn test_speaker_moods_empty_without_utterances() {
    let moods = interpret_speaker_moods(&completed_result());
    assert!(moods.is_empty());
}
