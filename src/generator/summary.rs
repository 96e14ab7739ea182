// Summary assembly - executive metrics, ranked keywords, recommendations

use serde::Serialize;
use uuid::Uuid;

use crate::analytics::SessionMetrics;
use crate::config::{EngagementWeights, OPTIMAL_PACE_MAX_WPM, OPTIMAL_PACE_MIN_WPM};
use crate::events::EmotionHistogram;
use crate::features::TranscriptSegment;
use crate::session::Session;

/// Executive metrics block at the top of a summary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveMetrics {
    pub duration_secs: u64,
    pub total_slides: u32,
    pub total_words: usize,
    pub engagement_score: f64,
    pub average_pace_wpm: f64,
    pub average_confidence: f64,
}

/// A generated session summary. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub id: Uuid,
    pub session_id: Uuid,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub metrics: ExecutiveMetrics,
    /// Keywords with occurrence counts, most frequent first
    pub ranked_keywords: Vec<(String, usize)>,
    pub emotion_histogram: EmotionHistogram,
    /// Bounded excerpt of the transcript, oldest first
    pub transcript_excerpt: String,
    /// Rule-based advice derived from threshold checks
    pub recommendations: Vec<String>,
}

/// Assemble a summary for an ended (or live) session
pub fn build_summary(
    session: &Session,
    segments: &[TranscriptSegment],
    weights: &EngagementWeights,
    excerpt_max_chars: usize,
) -> Summary {
    let metrics = SessionMetrics::compute(segments, session.duration_secs, weights);

    Summary {
        id: Uuid::new_v4(),
        session_id: session.id,
        generated_at: chrono::Utc::now(),
        metrics: ExecutiveMetrics {
            duration_secs: session.duration_secs,
            total_slides: session.total_slides,
            total_words: metrics.total_words,
            engagement_score: metrics.engagement_score,
            average_pace_wpm: metrics.average_pace,
            average_confidence: metrics.average_confidence,
        },
        ranked_keywords: SessionMetrics::ranked_keywords(segments),
        emotion_histogram: metrics.emotion_histogram,
        transcript_excerpt: excerpt(segments, excerpt_max_chars),
        recommendations: recommendations(&metrics, session.duration_secs),
    }
}

/// Concatenate segment texts, truncated on a character boundary
fn excerpt(segments: &[TranscriptSegment], max_chars: usize) -> String {
    let mut out = String::new();
    for segment in segments {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&segment.text);
        if out.chars().count() >= max_chars {
            break;
        }
    }
    if out.chars().count() > max_chars {
        let truncated: String = out.chars().take(max_chars).collect();
        return format!("{truncated}…");
    }
    out
}

/// Threshold checks against the computed metrics
fn recommendations(metrics: &SessionMetrics, duration_secs: u64) -> Vec<String> {
    let mut advice = Vec::new();

    if metrics.average_pace > 0.0 && metrics.average_pace < OPTIMAL_PACE_MIN_WPM {
        advice.push(format!(
            "Average pace was {:.0} WPM, below the {:.0}-{:.0} WPM optimal band. Try speaking a little faster.",
            metrics.average_pace, OPTIMAL_PACE_MIN_WPM, OPTIMAL_PACE_MAX_WPM
        ));
    }
    if metrics.average_pace > OPTIMAL_PACE_MAX_WPM {
        advice.push(format!(
            "Average pace was {:.0} WPM, above the {:.0}-{:.0} WPM optimal band. Try slowing down.",
            metrics.average_pace, OPTIMAL_PACE_MIN_WPM, OPTIMAL_PACE_MAX_WPM
        ));
    }
    if metrics.average_confidence > 0.0 && metrics.average_confidence < 0.7 {
        advice.push(
            "Recognition confidence was low. Enunciate clearly and check the microphone placement."
                .to_string(),
        );
    }
    if metrics.keyword_diversity < 5 && metrics.segment_count > 0 {
        advice.push(
            "Few distinct topics were detected. Consider covering the material in more depth."
                .to_string(),
        );
    }
    if metrics.emotion_histogram.negative > metrics.emotion_histogram.positive {
        advice.push(
            "The session skewed negative in tone. Balancing with positive framing can help engagement."
                .to_string(),
        );
    }
    if duration_secs < 120 && metrics.segment_count > 0 {
        advice.push("The session was very short. Longer sessions produce richer study material.".to_string());
    }

    advice
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod tests;
