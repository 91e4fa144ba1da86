//! Reflective journaling prompts derived from an emotional analysis.

use super::model::EmotionalAnalysis;

/// Generate reflection prompts from threshold rules
///
/// Each rule triggers independently; prompts come back in rule order. An
/// empty result means no rule matched.
pub fn reflection_prompts(analysis: &EmotionalAnalysis) -> Vec<String> {
    let mut prompts = Vec::new();

    if analysis.emotions.joy > 0.7 {
        prompts.push(
            "What specific moments brought you the most joy during this conversation?".to_string(),
        );
    }

    if analysis.emotions.sadness > 0.3 {
        prompts.push("What aspects of the discussion felt challenging or difficult?".to_string());
    }

    if analysis.tone.confident > 0.7 {
        prompts.push("What gave you confidence during this interaction?".to_string());
    }

    prompts
}
