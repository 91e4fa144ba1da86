// Wire-format tests for the remote transcription types
//
// The remote payload is decoded defensively: missing optional sections
// must read as empty rather than failing the decode.

use voice_journal::transcript::{JobStatus, SentimentLabel, TranscriptOptions, TranscriptResult};

#[test]
fn test_full_result_decodes() {
    let json = r#"{
        "id": "job-42",
        "status": "completed",
        "text": "today went well",
        "sentiment_analysis_results": [
            {"sentiment": "POSITIVE", "confidence": 0.91, "text": "today went well", "start": 0, "end": 1800}
        ],
        "iab_categories_result": {
            "results": [
                {"label": "Hobbies&Interests", "relevance": 0.77},
                {"label": "FamilyAndRelationships", "relevance": 0.41}
            ]
        },
        "utterances": [
            {"speaker": "A", "sentiment": "POSITIVE", "confidence": 0.88, "start": 0, "text": "today went well"}
        ],
        "error": null
    }"#;

    let result: TranscriptResult = serde_json::from_str(json).unwrap();

    assert_eq!(result.id, "job-42");
    assert_eq!(result.status, JobStatus::Completed);
    assert_eq!(result.text.as_deref(), Some("today went well"));
    assert_eq!(result.sentiment_analysis_results.len(), 1);
    assert_eq!(
        result.sentiment_analysis_results[0].sentiment,
        SentimentLabel::Positive
    );
    assert_eq!(result.iab_categories_result.results.len(), 2);
    assert_eq!(result.iab_categories_result.results[0].label, "Hobbies&Interests");
    assert_eq!(result.utterances.len(), 1);
    assert_eq!(result.utterances[0].speaker, "A");
}

#[test]
fn test_minimal_result_decodes_with_empty_sections() {
    // A queued job only reports id and status
    let json = r#"{"id": "job-42", "status": "queued"}"#;

    let result: TranscriptResult = serde_json::from_str(json).unwrap();

    assert_eq!(result.status, JobStatus::Queued);
    assert!(result.text.is_none());
    assert!(result.sentiment_analysis_results.is_empty());
    assert!(result.iab_categories_result.results.is_empty());
    assert!(result.utterances.is_empty());
    assert!(result.error.is_none());
}

#[test]
fn test_error_result_decodes() {
    let json = r#"{"id": "job-42", "status": "error", "error": "unsupported codec"}"#;

    let result: TranscriptResult = serde_json::from_str(json).unwrap();

    assert_eq!(result.status, JobStatus::Error);
    assert_eq!(result.error.as_deref(), Some("unsupported codec"));
}

#[test]
fn test_utterance_without_sentiment_decodes() {
    let json = r#"{
        "id": "job-42",
        "status": "completed",
        "utterances": [{"speaker": "B", "confidence": 0.5, "start": 300}]
    }"#;

    let result: TranscriptResult = serde_json::from_str(json).unwrap();

    assert_eq!(result.utterances.len(), 1);
    assert!(result.utterances[0].sentiment.is_none());
}

#[test]
fn test_option_sets_serialize_flat() {
    let options = TranscriptOptions::emotion();
    let json = serde_json::to_value(&options).unwrap();

    assert_eq!(json["sentiment_analysis"], true);
    assert_eq!(json["entity_detection"], true);
    assert_eq!(json["auto_chapters"], true);
    assert_eq!(json["iab_categories"], true);
    assert_eq!(json["speaker_labels"], false);

    let options = TranscriptOptions::speaker_mood();
    let json = serde_json::to_value(&options).unwrap();

    assert_eq!(json["speaker_labels"], true);
    assert_eq!(json["sentiment_analysis"], true);
    assert_eq!(json["iab_categories"], false);
}
