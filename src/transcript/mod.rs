//! Remote transcription/sentiment client
//!
//! One finished recording flows through three calls: `upload` stages the
//! audio, `submit` creates an analysis job, and `await_completion` polls the
//! job on a fixed interval until it reaches a terminal status or the attempt
//! ceiling runs out.

pub mod client;
pub mod types;

pub use client::{HttpTranscriptApi, TranscriptApi, TranscriptClient, TranscriptError};
pub use types::{
    IabCategoriesResult, IabCategory, JobStatus, SentimentLabel, SentimentResult,
    TranscriptOptions, TranscriptResult, Utterance,
};
