// Content generator - quizzes and summaries from accumulated session data
//
// Runs after the session has ended (or on demand against a snapshot), so
// it never contends with the live event path. Generation is additive:
// each call produces a new artifact and never edits a prior one.

mod quiz;
mod summary;

pub use quiz::{build_mcq_quiz, build_theory_quiz, QuestionKind, Quiz, QuizQuestion};
pub use summary::{build_summary, ExecutiveMetrics, Summary};

use rand::RngCore;
use uuid::Uuid;

use crate::config::PipelineConfig;
use crate::features::TranscriptSegment;
use crate::session::Session;

/// Errors reported by content generation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// The session has no transcript segments to work from. A quiz with
    /// zero keywords still succeeds (with fewer or no questions); an empty
    /// transcript does not.
    #[error("session {0} has no transcript content to generate from")]
    InsufficientContent(Uuid),
}

/// Generator over a single session's accumulated data
pub struct ContentGenerator {
    config: PipelineConfig,
}

impl ContentGenerator {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Generate a multiple-choice quiz. `seed` fixes the option shuffle;
    /// pass None for a fresh shuffle per run.
    pub fn generate_quiz(
        &self,
        session: &Session,
        segments: &[TranscriptSegment],
        seed: Option<u64>,
    ) -> Result<Quiz, GeneratorError> {
        if segments.is_empty() {
            return Err(GeneratorError::InsufficientContent(session.id));
        }
        let seed = seed.unwrap_or_else(|| rand::thread_rng().next_u64());
        let quiz = quiz::build_mcq_quiz(session.id, segments, &self.config.quiz, seed);
        crate::info!(
            "[generator] quiz {} for session {}: {} questions",
            quiz.id,
            session.id,
            quiz.total_questions
        );
        Ok(quiz)
    }

    /// Generate a theory quiz (open prompts with model answers)
    pub fn generate_theory_quiz(
        &self,
        session: &Session,
        segments: &[TranscriptSegment],
    ) -> Result<Quiz, GeneratorError> {
        if segments.is_empty() {
            return Err(GeneratorError::InsufficientContent(session.id));
        }
        Ok(quiz::build_theory_quiz(session.id, segments, &self.config.quiz))
    }

    /// Generate a structured summary document
    pub fn generate_summary(
        &self,
        session: &Session,
        segments: &[TranscriptSegment],
    ) -> Result<Summary, GeneratorError> {
        if segments.is_empty() {
            return Err(GeneratorError::InsufficientContent(session.id));
        }
        let summary = summary::build_summary(
            session,
            segments,
            &self.config.engagement,
            self.config.excerpt_max_chars,
        );
        crate::info!(
            "[generator] summary {} for session {} (engagement {:.0})",
            summary.id,
            session.id,
            summary.metrics.engagement_score
        );
        Ok(summary)
    }
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod tests;
