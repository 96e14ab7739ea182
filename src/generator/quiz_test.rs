use super::*;
use crate::features::EmotionTag;
use chrono::Utc;

fn segment_with_keywords(text: &str, keywords: &[&str]) -> TranscriptSegment {
    TranscriptSegment {
        id: Uuid::new_v4(),
        session_id: Uuid::nil(),
        text: text.to_string(),
        timestamp: Utc::now(),
        slide: 1,
        confidence: 0.9,
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        emotion: EmotionTag::Neutral,
        pace_wpm: 150.0,
        topic_completion: 50.0,
    }
}

#[test]
fn test_mcq_one_question_per_keyword_capped() {
    let session_id = Uuid::new_v4();
    let segments = vec![segment_with_keywords(
        "voice driven analysis",
        &["ai", "voice", "analysis"],
    )];
    let quiz = build_mcq_quiz(session_id, &segments, &QuizConfig::default(), 7);

    assert_eq!(quiz.session_id, session_id);
    assert_eq!(quiz.total_questions, 3);
    assert_eq!(quiz.questions.len(), 3);
}

#[test]
fn test_mcq_question_shape() {
    let segments = vec![segment_with_keywords("about tokenizers", &["tokenizers"])];
    let quiz = build_mcq_quiz(Uuid::new_v4(), &segments, &QuizConfig::default(), 7);
    let question = &quiz.questions[0];

    assert_eq!(question.kind, QuestionKind::MultipleChoice);
    assert_eq!(question.options.len(), 4);
    let correct = correct_statement("tokenizers");
    assert_eq!(
        question.options.iter().filter(|o| **o == correct).count(),
        1,
        "exactly one correct option"
    );
    assert_eq!(
        question.options[question.correct_index.unwrap()],
        correct,
        "correct_index points at the correct option"
    );
}

#[test]
fn test_mcq_cap_applies() {
    let keywords: Vec<String> = (0..15).map(|i| format!("concept{i:02}")).collect();
    let keyword_refs: Vec<&str> = keywords.iter().map(String::as_str).collect();
    let segments = vec![segment_with_keywords("many concepts", &keyword_refs)];
    let quiz = build_mcq_quiz(Uuid::new_v4(), &segments, &QuizConfig::default(), 7);
    assert_eq!(quiz.total_questions, 10);
}

#[test]
fn test_same_seed_reproduces_option_order() {
    let segments = vec![segment_with_keywords("repeat", &["alpha", "beta"])];
    let first = build_mcq_quiz(Uuid::new_v4(), &segments, &QuizConfig::default(), 42);
    let second = build_mcq_quiz(Uuid::new_v4(), &segments, &QuizConfig::default(), 42);
    for (a, b) in first.questions.iter().zip(second.questions.iter()) {
        assert_eq!(a.options, b.options);
        assert_eq!(a.correct_index, b.correct_index);
    }
    // New artifacts regardless of seed
    assert_ne!(first.id, second.id);
}

#[test]
fn test_zero_keywords_degrades_to_empty_quiz() {
    let segments = vec![segment_with_keywords("um uh so", &[])];
    let quiz = build_mcq_quiz(Uuid::new_v4(), &segments, &QuizConfig::default(), 7);
    assert_eq!(quiz.total_questions, 0);
    assert!(quiz.questions.is_empty());
}

#[test]
fn test_theory_quiz_has_model_answer_and_rubric() {
    let segments = vec![
        segment_with_keywords(
            "transformers rely on attention mechanisms",
            &["transformers", "attention", "mechanisms"],
        ),
        segment_with_keywords("attention again", &["attention"]),
    ];
    let quiz = build_theory_quiz(Uuid::new_v4(), &segments, &QuizConfig::default());

    // attention appears twice, so it ranks first
    let question = &quiz.questions[0];
    assert_eq!(question.kind, QuestionKind::Theory);
    assert!(question.prompt.contains("attention"));
    assert_eq!(
        question.model_answer.as_deref(),
        Some("transformers rely on attention mechanisms")
    );
    assert!(question
        .rubric_keywords
        .contains(&"transformers".to_string()));
    assert!(!question.rubric_keywords.contains(&"attention".to_string()));
    assert!(question.options.is_empty());
    assert!(question.correct_index.is_none());
}

#[test]
fn test_theory_cap_applies() {
    let keywords: Vec<String> = (0..9).map(|i| format!("topic{i}")).collect();
    let keyword_refs: Vec<&str> = keywords.iter().map(String::as_str).collect();
    let segments = vec![segment_with_keywords("many topics", &keyword_refs)];
    let quiz = build_theory_quiz(Uuid::new_v4(), &segments, &QuizConfig::default());
    assert_eq!(quiz.total_questions, 5);
}
