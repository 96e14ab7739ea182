use super::*;
use crate::classifier::{Classification, CommandClassifier};
use crate::events::tests::MockEventEmitter;
use crate::features::EmotionTag;
use crate::recognition::{RecognitionResult, Utterance};
use chrono::Utc;
use uuid::Uuid;

const PRESENTATION: &str = "deck-42";

fn router() -> (CommandRouter<MockEventEmitter>, Arc<MockEventEmitter>) {
    let emitter = Arc::new(MockEventEmitter::new());
    (CommandRouter::new(emitter.clone(), 0.7), emitter)
}

fn command(text: &str, confidence: f64) -> Command {
    let classifier = CommandClassifier::new();
    let utterance = Utterance::from_result(RecognitionResult::final_now(text, confidence), 1);
    match classifier.classify(&utterance) {
        Classification::Command(command) => command,
        Classification::ContentSpeech(_) => panic!("expected {:?} to classify as a command", text),
    }
}

fn segment(text: &str, confidence: f64, topic_completion: f64) -> TranscriptSegment {
    TranscriptSegment {
        id: Uuid::new_v4(),
        session_id: Uuid::new_v4(),
        text: text.to_string(),
        timestamp: Utc::now(),
        slide: 1,
        confidence,
        keywords: vec![],
        emotion: EmotionTag::Neutral,
        pace_wpm: 150.0,
        topic_completion,
    }
}

#[test]
fn test_rejects_command_below_threshold() {
    let (router, emitter) = router();
    let mut sessions = SessionManager::new();
    router.start_session(&mut sessions, PRESENTATION, 5);

    let result = router.route(command("next slide", 0.5), &mut sessions, PRESENTATION, 5);

    assert!(!result.executed);
    assert_eq!(sessions.current_slide(), Some(1));
    let rejected = emitter.rejected_events.lock().unwrap();
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].intent, "next_slide");
    assert_eq!(rejected[0].threshold, 0.7);
    assert!(emitter.executed_events.lock().unwrap().is_empty());
}

#[test]
fn test_navigation_requires_active_session() {
    let (router, emitter) = router();
    let mut sessions = SessionManager::new();

    let result = router.route(command("next slide", 0.9), &mut sessions, PRESENTATION, 5);

    assert!(!result.executed);
    assert!(emitter.actions.lock().unwrap().is_empty());
    assert!(emitter.executed_events.lock().unwrap().is_empty());
}

#[test]
fn test_navigation_clamps_at_deck_bounds() {
    let (router, emitter) = router();
    let mut sessions = SessionManager::new();
    router.start_session(&mut sessions, PRESENTATION, 3);

    // Backward from slide 1 stays on slide 1 but still executes
    let result = router.route(
        command("previous slide", 0.9),
        &mut sessions,
        PRESENTATION,
        3,
    );
    assert!(result.executed);
    assert_eq!(sessions.current_slide(), Some(1));

    router.route(command("last slide", 0.9), &mut sessions, PRESENTATION, 3);
    assert_eq!(sessions.current_slide(), Some(3));

    router.route(command("next slide", 0.9), &mut sessions, PRESENTATION, 3);
    assert_eq!(sessions.current_slide(), Some(3));

    router.route(command("first slide", 0.9), &mut sessions, PRESENTATION, 3);
    assert_eq!(sessions.current_slide(), Some(1));

    // Every navigation action carries the resulting slide
    let bus = emitter.actions.lock().unwrap();
    let last = bus.last().unwrap();
    assert_eq!(last.action, actions::FIRST_SLIDE);
    assert_eq!(last.params.as_ref().unwrap()["slide"], 1);
}

#[test]
fn test_goto_clamps_out_of_range_target() {
    let (router, _emitter) = router();
    let mut sessions = SessionManager::new();
    router.start_session(&mut sessions, PRESENTATION, 5);

    let result = router.route(
        command("go to slide 99", 0.9),
        &mut sessions,
        PRESENTATION,
        5,
    );
    assert!(result.executed);
    assert_eq!(sessions.current_slide(), Some(5));

    router.route(
        command("jump to slide three", 0.9),
        &mut sessions,
        PRESENTATION,
        5,
    );
    assert_eq!(sessions.current_slide(), Some(3));
}

#[test]
fn test_command_sequence_ends_on_expected_slide() {
    let (router, emitter) = router();
    let mut sessions = SessionManager::new();

    for text in [
        "start presentation",
        "next slide",
        "next slide",
        "go to slide 1",
        "end session",
    ] {
        let result = router.route(command(text, 0.9), &mut sessions, PRESENTATION, 5);
        assert!(result.executed, "{:?} should execute", text);
    }

    let session = sessions.current().unwrap();
    assert_eq!(session.state, SessionState::Ended);
    assert_eq!(session.current_slide, 1);
    assert!(session.end_time.is_some());

    assert_eq!(emitter.executed_events.lock().unwrap().len(), 5);
    let ended = emitter.ended_events.lock().unwrap();
    assert_eq!(ended.len(), 1);
    assert_eq!(ended[0].final_slide, 1);
}

#[test]
fn test_start_session_is_idempotent() {
    let (router, emitter) = router();
    let mut sessions = SessionManager::new();

    let first = router.start_session(&mut sessions, PRESENTATION, 5);
    sessions.set_slide(4);
    let second = router.start_session(&mut sessions, PRESENTATION, 5);

    assert_eq!(first.id, second.id);
    assert_eq!(second.current_slide, 4);
    assert_eq!(emitter.started_events.lock().unwrap().len(), 1);
}

#[test]
fn test_pause_and_resume_emit_state_events() {
    let (router, emitter) = router();
    let mut sessions = SessionManager::new();

    // Pause without a session is a no-op
    assert!(!router.pause_session(&mut sessions));

    router.start_session(&mut sessions, PRESENTATION, 5);
    assert!(router.pause_session(&mut sessions));
    assert_eq!(sessions.state(), SessionState::Paused);

    // Slides do not move while paused
    let result = router.route(command("next slide", 0.9), &mut sessions, PRESENTATION, 5);
    assert!(!result.executed);

    assert!(router.resume_session(&mut sessions));
    assert_eq!(sessions.state(), SessionState::Active);

    assert_eq!(emitter.paused_events.lock().unwrap().len(), 1);
    assert_eq!(emitter.resumed_events.lock().unwrap().len(), 1);
}

#[test]
fn test_generation_commands_leave_session_untouched() {
    let (router, emitter) = router();
    let mut sessions = SessionManager::new();
    router.start_session(&mut sessions, PRESENTATION, 5);
    sessions.set_slide(3);

    let result = router.route(command("generate quiz", 0.9), &mut sessions, PRESENTATION, 5);

    assert!(result.executed);
    assert_eq!(sessions.current_slide(), Some(3));
    assert_eq!(sessions.state(), SessionState::Active);
    let bus = emitter.actions.lock().unwrap();
    assert_eq!(bus.last().unwrap().action, actions::GENERATE_QUIZ);
}

#[test]
fn test_auto_advance_on_transition_phrase() {
    let (router, emitter) = router();
    let mut sessions = SessionManager::new();
    router.start_session(&mut sessions, PRESENTATION, 5);
    let policy = AutoAdvanceConfig::default();

    let advanced = router.auto_advance(
        &segment("And moving on to the deployment story", 0.6, 10.0),
        &policy,
        &mut sessions,
    );

    assert_eq!(advanced, Some(2));
    let events = emitter.auto_advance_events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].slide, 2);
    assert_eq!(events[0].reason, "transition-phrase");
}

#[test]
fn test_auto_advance_on_topic_completion() {
    let (router, emitter) = router();
    let mut sessions = SessionManager::new();
    router.start_session(&mut sessions, PRESENTATION, 5);
    let policy = AutoAdvanceConfig::default();

    let advanced = router.auto_advance(
        &segment("the model converges after ten epochs", 0.9, 92.0),
        &policy,
        &mut sessions,
    );

    assert_eq!(advanced, Some(2));
    let events = emitter.auto_advance_events.lock().unwrap();
    assert_eq!(events[0].reason, "topic-completion");
}

#[test]
fn test_auto_advance_at_most_one_slide() {
    let (router, emitter) = router();
    let mut sessions = SessionManager::new();
    router.start_session(&mut sessions, PRESENTATION, 5);
    let policy = AutoAdvanceConfig::default();

    // Both the phrase and the completion rule fire on the same utterance
    let advanced = router.auto_advance(
        &segment("in conclusion, this wraps the section", 0.95, 99.0),
        &policy,
        &mut sessions,
    );

    assert_eq!(advanced, Some(2));
    assert_eq!(sessions.current_slide(), Some(2));
    assert_eq!(emitter.auto_advance_events.lock().unwrap().len(), 1);
}

#[test]
fn test_auto_advance_skipped_below_thresholds() {
    let (router, emitter) = router();
    let mut sessions = SessionManager::new();
    router.start_session(&mut sessions, PRESENTATION, 5);
    let policy = AutoAdvanceConfig::default();

    // High completion but low confidence
    assert_eq!(
        router.auto_advance(&segment("some ordinary speech", 0.5, 95.0), &policy, &mut sessions),
        None
    );
    // High confidence but low completion
    assert_eq!(
        router.auto_advance(&segment("some ordinary speech", 0.95, 40.0), &policy, &mut sessions),
        None
    );
    assert!(emitter.auto_advance_events.lock().unwrap().is_empty());
}

#[test]
fn test_auto_advance_stops_at_last_slide() {
    let (router, emitter) = router();
    let mut sessions = SessionManager::new();
    router.start_session(&mut sessions, PRESENTATION, 2);
    let policy = AutoAdvanceConfig::default();

    assert_eq!(
        router.auto_advance(&segment("moving on", 0.9, 99.0), &policy, &mut sessions),
        Some(2)
    );
    assert_eq!(
        router.auto_advance(&segment("moving on", 0.9, 99.0), &policy, &mut sessions),
        None
    );
    assert_eq!(emitter.auto_advance_events.lock().unwrap().len(), 1);
}
