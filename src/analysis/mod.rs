//! Result interpretation, prompt generation, and timeline shaping
//!
//! Everything here is pure: raw remote results in, application model out.

mod interpret;
mod model;
mod prompts;
mod timeline;

pub use interpret::{interpret, interpret_speaker_moods};
pub use model::{EmotionScores, EmotionalAnalysis, Mood, Sentiment, SpeakerMood, ToneProfile};
pub use prompts::reflection_prompts;
pub use timeline::{timeline, EmotionSeries, TimelineData};
