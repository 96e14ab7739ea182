// Analytics aggregator - pure recomputation over the transcript
//
// Metrics are never mutated incrementally: every call folds the ordered
// TranscriptSegment list from scratch, so a live dashboard and an
// after-the-fact report always agree given the same segments.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::config::{EngagementWeights, OPTIMAL_PACE_MAX_WPM, OPTIMAL_PACE_MIN_WPM};
use crate::events::EmotionHistogram;
use crate::features::TranscriptSegment;

/// Derived session metrics, recomputable at any time
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMetrics {
    /// Mean recognition confidence across segments
    pub average_confidence: f64,
    /// Mean speaking pace in words per minute
    pub average_pace: f64,
    /// Size of the cumulative deduplicated keyword set
    pub keyword_diversity: usize,
    /// Total words spoken across segments
    pub total_words: usize,
    pub segment_count: usize,
    pub emotion_histogram: EmotionHistogram,
    /// Composite 0-100 engagement score
    pub engagement_score: f64,
}

impl SessionMetrics {
    /// Compute metrics for a session's segments and accrued duration.
    /// Deterministic and side-effect free.
    pub fn compute(
        segments: &[TranscriptSegment],
        duration_secs: u64,
        weights: &EngagementWeights,
    ) -> Self {
        if segments.is_empty() {
            return Self::empty();
        }

        let count = segments.len() as f64;
        let average_confidence = segments.iter().map(|s| s.confidence).sum::<f64>() / count;
        let average_pace = segments.iter().map(|s| s.pace_wpm).sum::<f64>() / count;
        let total_words = segments
            .iter()
            .map(|s| s.text.split_whitespace().count())
            .sum();

        let keyword_set: BTreeSet<&str> = segments
            .iter()
            .flat_map(|s| s.keywords.iter().map(String::as_str))
            .collect();
        let keyword_diversity = keyword_set.len();

        let mut emotion_histogram = EmotionHistogram::default();
        for segment in segments {
            emotion_histogram.record(segment.emotion);
        }

        let engagement_score = engagement_score(
            average_confidence,
            keyword_diversity,
            average_pace,
            duration_secs,
            weights,
        );

        Self {
            average_confidence,
            average_pace,
            keyword_diversity,
            total_words,
            segment_count: segments.len(),
            emotion_histogram,
            engagement_score,
        }
    }

    fn empty() -> Self {
        Self {
            average_confidence: 0.0,
            average_pace: 0.0,
            keyword_diversity: 0,
            total_words: 0,
            segment_count: 0,
            emotion_histogram: EmotionHistogram::default(),
            engagement_score: 0.0,
        }
    }

    /// Every distinct keyword with its total occurrence count, ranked by
    /// frequency then alphabetically. Used for quiz and summary ranking.
    pub fn ranked_keywords(segments: &[TranscriptSegment]) -> Vec<(String, usize)> {
        let mut counts: std::collections::BTreeMap<&str, usize> = std::collections::BTreeMap::new();
        for segment in segments {
            for keyword in &segment.keywords {
                *counts.entry(keyword.as_str()).or_insert(0) += 1;
            }
        }
        let mut ranked: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(kw, count)| (kw.to_string(), count))
            .collect();
        // BTreeMap iteration already gives the alphabetical tie-break
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// The composite engagement score:
/// confidence term + capped keyword term + pace band term + capped duration term,
/// clamped to [0, 100]
fn engagement_score(
    average_confidence: f64,
    keyword_diversity: usize,
    average_pace: f64,
    duration_secs: u64,
    weights: &EngagementWeights,
) -> f64 {
    let confidence_term = average_confidence * weights.confidence_weight;
    let keyword_term = (keyword_diversity as f64 * weights.keyword_points).min(weights.keyword_cap);
    let pace_term = if (OPTIMAL_PACE_MIN_WPM..=OPTIMAL_PACE_MAX_WPM).contains(&average_pace) {
        weights.pace_in_band
    } else {
        weights.pace_out_of_band
    };
    let duration_term =
        (duration_secs as f64 / 60.0 * weights.duration_per_minute).min(weights.duration_cap);

    (confidence_term + keyword_term + pace_term + duration_term).clamp(0.0, 100.0)
}

#[cfg(test)]
#[path = "analytics_test.rs"]
mod tests;
