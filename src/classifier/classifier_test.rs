use super::*;
use crate::recognition::RecognitionResult;

fn utterance(text: &str, confidence: f64) -> Utterance {
    Utterance::from_result(RecognitionResult::final_now(text, confidence), 2)
}

fn expect_command(classification: Classification) -> Command {
    match classification {
        Classification::Command(command) => command,
        Classification::ContentSpeech(u) => {
            panic!("Expected command, got content speech: {:?}", u.text)
        }
    }
}

#[test]
fn test_navigation_phrases_match() {
    let classifier = CommandClassifier::new();
    let cases = [
        ("next slide", CommandIntent::NextSlide),
        ("next page please", CommandIntent::NextSlide),
        ("previous slide", CommandIntent::PreviousSlide),
        ("go back", CommandIntent::PreviousSlide),
        ("first slide", CommandIntent::FirstSlide),
        ("last slide", CommandIntent::LastSlide),
    ];
    for (text, expected) in cases {
        let command = expect_command(classifier.classify(&utterance(text, 0.9)));
        assert_eq!(command.intent, expected, "for input {:?}", text);
        assert!(!command.executed);
        assert_eq!(command.confidence, 0.9);
    }
}

#[test]
fn test_control_and_generation_phrases_match() {
    let classifier = CommandClassifier::new();
    let cases = [
        ("start presentation", CommandIntent::StartPresentation),
        ("end session", CommandIntent::StopPresentation),
        ("pause the presentation", CommandIntent::PausePresentation),
        ("resume presentation", CommandIntent::ResumePresentation),
        ("start recording", CommandIntent::StartRecording),
        ("stop recording", CommandIntent::StopRecording),
        ("generate a quiz", CommandIntent::GenerateQuiz),
        ("create summary", CommandIntent::CreateSummary),
        ("show notes", CommandIntent::ShowNotes),
    ];
    for (text, expected) in cases {
        let command = expect_command(classifier.classify(&utterance(text, 0.9)));
        assert_eq!(command.intent, expected, "for input {:?}", text);
    }
}

#[test]
fn test_matching_is_case_and_punctuation_insensitive() {
    let classifier = CommandClassifier::new();
    let command = expect_command(classifier.classify(&utterance("Next slide, please!", 0.9)));
    assert_eq!(command.intent, CommandIntent::NextSlide);
}

#[test]
fn test_goto_slide_with_digits_and_number_words() {
    let classifier = CommandClassifier::new();

    let command = expect_command(classifier.classify(&utterance("go to slide 7", 0.9)));
    assert_eq!(command.intent, CommandIntent::GotoSlide);
    assert_eq!(command.target_slide(), Some(7));

    let command = expect_command(classifier.classify(&utterance("jump to page three", 0.9)));
    assert_eq!(command.intent, CommandIntent::GotoSlide);
    assert_eq!(command.target_slide(), Some(3));
}

#[test]
fn test_fixed_phrases_win_over_goto_pattern() {
    // "go back" is a fixed phrase even though it starts like the goto pattern
    let classifier = CommandClassifier::new();
    let command = expect_command(classifier.classify(&utterance("go back", 0.9)));
    assert_eq!(command.intent, CommandIntent::PreviousSlide);
}

#[test]
fn test_navigation_outranks_control_on_shared_text() {
    // Contains both "next slide" and "stop recording"; navigation is
    // declared first and must win
    let classifier = CommandClassifier::new();
    let command = expect_command(
        classifier.classify(&utterance("next slide and stop recording", 0.9)),
    );
    assert_eq!(command.intent, CommandIntent::NextSlide);
}

#[test]
fn test_fuzzy_tier_catches_near_miss_recognition() {
    let classifier = CommandClassifier::new();
    let command = expect_command(classifier.classify(&utterance("nxt slide", 0.9)));
    assert_eq!(command.intent, CommandIntent::NextSlide);
}

#[test]
fn test_content_speech_passes_through() {
    let classifier = CommandClassifier::new();
    let spoken = "machine learning models need large datasets for training";
    match classifier.classify(&utterance(spoken, 0.85)) {
        Classification::ContentSpeech(u) => {
            assert_eq!(u.text, spoken);
            assert_eq!(u.slide_at_time, 2);
        }
        Classification::Command(c) => panic!("Expected content speech, got {:?}", c.intent),
    }
}

#[test]
fn test_empty_text_is_content_speech() {
    let classifier = CommandClassifier::new();
    assert!(matches!(
        classifier.classify(&utterance("   ", 0.9)),
        Classification::ContentSpeech(_)
    ));
}

#[test]
fn test_classification_is_pure() {
    let classifier = CommandClassifier::new();
    let u = utterance("go to slide 5", 0.75);
    let first = classifier.classify(&u);
    let second = classifier.classify(&u);
    assert_eq!(first, second);
}
