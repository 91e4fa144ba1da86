// Tests for timeline shaping from stored journal entries

use chrono::{DateTime, Utc};
use voice_journal::analysis::{
    timeline, EmotionScores, EmotionalAnalysis, Sentiment, ToneProfile,
};
use voice_journal::journal::JournalEntry;

fn entry(timestamp: &str, joy: f32, sadness: f32) -> JournalEntry {
    JournalEntry {
        timestamp: timestamp.parse::<DateTime<Utc>>().unwrap(),
        analysis: EmotionalAnalysis {
            sentiment: Sentiment::Neutral,
            emotions: EmotionScores {
                joy,
                sadness,
                anger: 0.1,
                fear: 0.0,
                surprise: 0.2,
            },
            topics: Vec::new(),
            tone: ToneProfile::default(),
        },
        audio_url: "voice-journal/1700000000000.wav".to_string(),
        transcription: String::new(),
        user_id: None,
    }
}

#[test]
fn test_timeline_preserves_entry_order() {
    let entries = vec![
        entry("2026-08-01T09:00:00Z", 0.8, 0.2),
        entry("2026-08-02T09:00:00Z", 0.6, 0.3),
        entry("2026-08-03T09:00:00Z", 0.7, 0.2),
    ];

    let data = timeline(&entries);

    assert_eq!(data.timestamps.len(), 3);
    assert_eq!(data.emotions.joy, vec![0.8, 0.6, 0.7]);
    assert_eq!(data.emotions.sadness, vec![0.2, 0.3, 0.2]);
    assert_eq!(data.emotions.anger, vec![0.1, 0.1, 0.1]);
    assert_eq!(data.emotions.fear, vec![0.0, 0.0, 0.0]);
    assert_eq!(data.emotions.surprise, vec![0.2, 0.2, 0.2]);
    assert_eq!(data.timestamps[0], "2026-08-01T09:00:00Z".parse::<DateTime<Utc>>().unwrap());
}

#[test]
fn test_timeline_series_stay_parallel() {
    let entries: Vec<JournalEntry> = (0..7)
        .map(|i| entry(&format!("2026-08-0{}T20:00:00Z", i + 1), 0.1 * i as f32, 0.05))
        .collect();

    let data = timeline(&entries);

    for series in [
        &data.emotions.joy,
        &data.emotions.sadness,
        &data.emotions.anger,
        &data.emotions.fear,
        &data.emotions.surprise,
    ] {
        assert_eq!(series.len(), data.timestamps.len(), "series must stay parallel");
    }
}

#[test]
fn test_empty_journal_yields_empty_timeline() {
    let data = timeline(&[]);

    assert!(data.timestamps.is_empty());
    assert!(data.emotions.joy.is_empty());
    assert!(data.emotions.surprise.is_empty());
}
