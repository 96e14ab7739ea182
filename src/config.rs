// Pipeline configuration - every heuristic constant lives here
//
// The thresholds and weights below are tuning parameters, not invariants.
// Hosts override them by constructing a PipelineConfig and handing it to
// PresentationPipeline; Default gives the stock values.

use serde::{Deserialize, Serialize};

/// Minimum recognition confidence for a matched command to execute
pub const DEFAULT_EXECUTION_THRESHOLD: f64 = 0.7;

/// Analysis window used as the pace time base when no true elapsed delta exists
pub const DEFAULT_PACE_WINDOW_SECS: f64 = 10.0;

/// Optimal speaking pace band in words per minute (inclusive)
pub const OPTIMAL_PACE_MIN_WPM: f64 = 120.0;
pub const OPTIMAL_PACE_MAX_WPM: f64 = 180.0;

/// Auto-advance policy for content utterances
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoAdvanceConfig {
    /// Topic completion (0-100) above which an utterance qualifies
    pub completion_threshold: f64,
    /// Recognition confidence above which an utterance qualifies
    pub confidence_threshold: f64,
    /// Phrases that qualify an utterance regardless of completion
    pub transition_phrases: Vec<String>,
}

impl Default for AutoAdvanceConfig {
    fn default() -> Self {
        Self {
            completion_threshold: 80.0,
            confidence_threshold: 0.7,
            transition_phrases: vec![
                "next slide".to_string(),
                "moving on".to_string(),
                "in conclusion".to_string(),
                "let's continue".to_string(),
            ],
        }
    }
}

/// Weights for the composite engagement score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementWeights {
    /// Multiplier applied to average confidence (0-1)
    pub confidence_weight: f64,
    /// Points per distinct keyword
    pub keyword_points: f64,
    /// Cap on the keyword term
    pub keyword_cap: f64,
    /// Points awarded when average pace is inside the optimal band
    pub pace_in_band: f64,
    /// Points awarded otherwise
    pub pace_out_of_band: f64,
    /// Points per minute of session duration
    pub duration_per_minute: f64,
    /// Cap on the duration term
    pub duration_cap: f64,
}

impl Default for EngagementWeights {
    fn default() -> Self {
        Self {
            confidence_weight: 30.0,
            keyword_points: 5.0,
            keyword_cap: 30.0,
            pace_in_band: 25.0,
            pace_out_of_band: 15.0,
            duration_per_minute: 2.0,
            duration_cap: 15.0,
        }
    }
}

/// Quiz generation caps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Maximum multiple-choice questions per quiz
    pub max_mcq_questions: usize,
    /// Maximum theory questions per quiz
    pub max_theory_questions: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_mcq_questions: 10,
            max_theory_questions: 5,
        }
    }
}

/// Restart backoff for the recognition supervisor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackoffConfig {
    /// Initial delay before restarting a failed source
    pub base_ms: u64,
    /// Upper bound on the doubling delay
    pub cap_ms: u64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            base_ms: 250,
            cap_ms: 2000,
        }
    }
}

/// Top-level configuration for the presentation pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Minimum command confidence for execution
    pub execution_threshold: f64,
    /// Minimum normalized similarity for the classifier's fuzzy tier
    pub fuzzy_threshold: f64,
    /// Auto-advance policy
    pub auto_advance: AutoAdvanceConfig,
    /// Pace analysis window in seconds
    pub pace_window_secs: f64,
    /// Accumulated character count treated as a fully covered slide topic
    pub topic_target_chars: usize,
    /// Keywords retained per utterance
    pub keywords_per_utterance: usize,
    /// Engagement score weights
    pub engagement: EngagementWeights,
    /// Quiz caps
    pub quiz: QuizConfig,
    /// Upper bound on the summary's transcript excerpt, in characters
    pub excerpt_max_chars: usize,
    /// Supervisor restart backoff
    pub backoff: BackoffConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            execution_threshold: DEFAULT_EXECUTION_THRESHOLD,
            fuzzy_threshold: 0.85,
            auto_advance: AutoAdvanceConfig::default(),
            pace_window_secs: DEFAULT_PACE_WINDOW_SECS,
            topic_target_chars: 600,
            keywords_per_utterance: 5,
            engagement: EngagementWeights::default(),
            quiz: QuizConfig::default(),
            excerpt_max_chars: 1200,
            backoff: BackoffConfig::default(),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
