// Emotion tagging - lexicon hit counting per utterance
//
// A deliberately simple stand-in for a sentiment model: the category with
// strictly more lexicon hits wins, anything else is neutral. Swappable
// behind the FeatureExtractor without touching pipeline control flow.

use serde::{Deserialize, Serialize};

/// Emotion tag attached to a transcript segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionTag {
    Positive,
    Negative,
    Neutral,
}

impl EmotionTag {
    pub fn name(&self) -> &'static str {
        match self {
            EmotionTag::Positive => "positive",
            EmotionTag::Negative => "negative",
            EmotionTag::Neutral => "neutral",
        }
    }
}

const POSITIVE_LEXICON: &[&str] = &[
    "amazing", "excellent", "exciting", "fantastic", "glad", "good", "great", "happy",
    "impressive", "love", "perfect", "pleased", "powerful", "promising", "succeeded", "success",
    "successful", "wonderful",
];

const NEGATIVE_LEXICON: &[&str] = &[
    "awful", "bad", "broken", "concern", "difficult", "disappointing", "fail", "failed",
    "failure", "hard", "hate", "issue", "poor", "problem", "sad", "terrible", "worse", "worst",
    "wrong",
];

/// Tag an utterance by counting lexicon matches on word boundaries
pub fn tag_emotion(text: &str) -> EmotionTag {
    let lowered = text.to_lowercase();
    let mut positive = 0usize;
    let mut negative = 0usize;
    for token in lowered.split(|c: char| !c.is_alphanumeric()) {
        if token.is_empty() {
            continue;
        }
        if POSITIVE_LEXICON.contains(&token) {
            positive += 1;
        } else if NEGATIVE_LEXICON.contains(&token) {
            negative += 1;
        }
    }

    if positive > negative {
        EmotionTag::Positive
    } else if negative > positive {
        EmotionTag::Negative
    } else {
        EmotionTag::Neutral
    }
}

#[cfg(test)]
#[path = "emotion_test.rs"]
mod tests;
