// Quiz assembly - multiple-choice and theory questions from session keywords

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use uuid::Uuid;

use crate::analytics::SessionMetrics;
use crate::config::QuizConfig;
use crate::features::TranscriptSegment;

/// Kind of quiz question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    Theory,
}

/// One quiz question
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub kind: QuestionKind,
    pub prompt: String,
    /// Exactly four options for multiple choice, empty for theory
    pub options: Vec<String>,
    /// Index into `options` for multiple choice, None for theory
    pub correct_index: Option<usize>,
    /// Model answer for theory questions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_answer: Option<String>,
    /// Keywords a grader should look for in a theory answer
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rubric_keywords: Vec<String>,
}

/// A generated quiz. Immutable once generated; regeneration creates a
/// new artifact with a fresh id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: Uuid,
    pub session_id: Uuid,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub questions: Vec<QuizQuestion>,
    pub total_questions: usize,
}

/// The correct-option statement for a keyword
pub fn correct_statement(keyword: &str) -> String {
    format!("{keyword} is a key concept discussed in this presentation")
}

fn distractors(keyword: &str) -> [String; 3] {
    [
        format!("{keyword} was mentioned only once, in passing"),
        format!("{keyword} is unrelated to this presentation's topic"),
        format!("{keyword} was not covered in this presentation"),
    ]
}

/// Build a multiple-choice quiz from the session's ranked keywords.
///
/// One question per keyword up to the configured cap, each with the
/// correct statement and three distractors, shuffled with the given rng
/// seed so a stored quiz can be reproduced exactly.
pub fn build_mcq_quiz(
    session_id: Uuid,
    segments: &[TranscriptSegment],
    config: &QuizConfig,
    seed: u64,
) -> Quiz {
    let ranked = SessionMetrics::ranked_keywords(segments);
    let mut rng = StdRng::seed_from_u64(seed);

    let questions: Vec<QuizQuestion> = ranked
        .iter()
        .take(config.max_mcq_questions)
        .map(|(keyword, _)| {
            let mut options = vec![correct_statement(keyword)];
            options.extend(distractors(keyword));
            options.shuffle(&mut rng);
            let correct_index = options
                .iter()
                .position(|o| *o == correct_statement(keyword))
                .expect("correct option present");
            QuizQuestion {
                kind: QuestionKind::MultipleChoice,
                prompt: format!("Which statement about \"{keyword}\" is accurate?"),
                options,
                correct_index: Some(correct_index),
                model_answer: None,
                rubric_keywords: Vec::new(),
            }
        })
        .collect();

    let total_questions = questions.len();
    Quiz {
        id: Uuid::new_v4(),
        session_id,
        generated_at: chrono::Utc::now(),
        questions,
        total_questions,
    }
}

/// Build a theory quiz: open-ended prompts with model answers taken from
/// the transcript and rubric keywords from co-occurring terms.
pub fn build_theory_quiz(
    session_id: Uuid,
    segments: &[TranscriptSegment],
    config: &QuizConfig,
) -> Quiz {
    let ranked = SessionMetrics::ranked_keywords(segments);

    let questions: Vec<QuizQuestion> = ranked
        .iter()
        .take(config.max_theory_questions)
        .map(|(keyword, _)| {
            // The first segment mentioning the keyword doubles as the model answer
            let source = segments
                .iter()
                .find(|s| s.keywords.iter().any(|k| k == keyword));
            let model_answer = source
                .map(|s| s.text.clone())
                .unwrap_or_else(|| correct_statement(keyword));
            let rubric_keywords = source
                .map(|s| {
                    s.keywords
                        .iter()
                        .filter(|k| *k != keyword)
                        .cloned()
                        .collect()
                })
                .unwrap_or_default();
            QuizQuestion {
                kind: QuestionKind::Theory,
                prompt: format!(
                    "Explain the role of \"{keyword}\" as presented in this session."
                ),
                options: Vec::new(),
                correct_index: None,
                model_answer: Some(model_answer),
                rubric_keywords,
            }
        })
        .collect();

    let total_questions = questions.len();
    Quiz {
        id: Uuid::new_v4(),
        session_id,
        generated_at: chrono::Utc::now(),
        questions,
        total_questions,
    }
}

#[cfg(test)]
#[path = "quiz_test.rs"]
mod tests;
