//! Shapes stored journal entries into chart-ready timeline series.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::journal::JournalEntry;

/// One value series per tracked emotion, parallel to the timestamps
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmotionSeries {
    pub joy: Vec<f32>,
    pub sadness: Vec<f32>,
    pub anger: Vec<f32>,
    pub fear: Vec<f32>,
    pub surprise: Vec<f32>,
}

/// Multi-series emotional timeline for the chart widget
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimelineData {
    pub timestamps: Vec<DateTime<Utc>>,
    pub emotions: EmotionSeries,
}

/// Fold entries into parallel timestamp and emotion series, preserving
/// entry order
pub fn timeline(entries: &[JournalEntry]) -> TimelineData {
    let mut data = TimelineData::default();

    for entry in entries {
        data.timestamps.push(entry.timestamp);
        data.emotions.joy.push(entry.analysis.emotions.joy);
        data.emotions.sadness.push(entry.analysis.emotions.sadness);
        data.emotions.anger.push(entry.analysis.emotions.anger);
        data.emotions.fear.push(entry.analysis.emotions.fear);
        data.emotions.surprise.push(entry.analysis.emotions.surprise);
    }

    data
}
