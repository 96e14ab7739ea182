// Feature extraction - per-utterance linguistic features
//
// Content utterances (finals the classifier did not match) become
// TranscriptSegments: the persisted unit all analytics and content
// generation are derived from.

mod emotion;
mod keywords;
mod pace;
mod topic;

pub use emotion::{tag_emotion, EmotionTag};
pub use keywords::extract_keywords;
pub use pace::{pace_band, words_per_minute, PaceBand};
pub use topic::TopicTracker;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::recognition::Utterance;

/// A persisted final utterance plus its extracted features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptSegment {
    pub id: Uuid,
    pub session_id: Uuid,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Slide the utterance was spoken on (1-indexed)
    pub slide: u32,
    pub confidence: f64,
    pub keywords: Vec<String>,
    pub emotion: EmotionTag,
    pub pace_wpm: f64,
    /// Coverage estimate for this slide's topic at the time (0-100)
    pub topic_completion: f64,
}

/// Configuration for the extractor
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub keywords_per_utterance: usize,
    pub pace_window_secs: f64,
    pub topic_target_chars: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        let pipeline = crate::config::PipelineConfig::default();
        Self {
            keywords_per_utterance: pipeline.keywords_per_utterance,
            pace_window_secs: pipeline.pace_window_secs,
            topic_target_chars: pipeline.topic_target_chars,
        }
    }
}

/// Computes features for content utterances. Holds the per-slide topic
/// accumulator, so one extractor serves exactly one session.
pub struct FeatureExtractor {
    config: ExtractorConfig,
    topic: TopicTracker,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl FeatureExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        let topic = TopicTracker::new(config.topic_target_chars);
        Self { config, topic }
    }

    /// Extract features for a final content utterance
    pub fn extract(&mut self, utterance: &Utterance, session_id: Uuid) -> TranscriptSegment {
        let keywords = extract_keywords(&utterance.text, self.config.keywords_per_utterance);
        let emotion = tag_emotion(&utterance.text);
        let pace_wpm = words_per_minute(utterance.word_count(), self.config.pace_window_secs);
        let topic_completion = self.topic.observe(utterance.slide_at_time, &utterance.text);

        TranscriptSegment {
            id: Uuid::new_v4(),
            session_id,
            text: utterance.text.clone(),
            timestamp: utterance.timestamp,
            slide: utterance.slide_at_time,
            confidence: utterance.confidence,
            keywords,
            emotion,
            pace_wpm,
            topic_completion,
        }
    }
}

#[cfg(test)]
#[path = "features_test.rs"]
mod tests;
