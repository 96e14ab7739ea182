use super::*;

fn started() -> SessionManager {
    let mut manager = SessionManager::new();
    manager.start("pres-1", 5);
    manager
}

#[test]
fn test_start_creates_active_session_on_slide_one() {
    let mut manager = SessionManager::new();
    assert_eq!(manager.state(), SessionState::Idle);

    let (session, created) = manager.start("pres-1", 5);
    assert!(created);
    assert_eq!(session.state, SessionState::Active);
    assert_eq!(session.current_slide, 1);
    assert_eq!(session.total_slides, 5);
    assert_eq!(session.duration_secs, 0);
    assert!(session.end_time.is_none());
}

#[test]
fn test_start_is_idempotent_while_open() {
    let mut manager = started();
    manager.set_slide(3);
    manager.tick(42);
    let original_id = manager.current().unwrap().id;

    let (session, created) = manager.start("pres-1", 5);
    assert!(!created);
    assert_eq!(session.id, original_id);
    assert_eq!(session.current_slide, 3);
    assert_eq!(session.duration_secs, 42);

    // Idempotence holds from Paused too
    manager.pause();
    let (_, created) = manager.start("pres-1", 5);
    assert!(!created);
    assert_eq!(manager.state(), SessionState::Paused);
}

#[test]
fn test_start_after_end_creates_new_session() {
    let mut manager = started();
    let first_id = manager.current().unwrap().id;
    manager.end();

    let (session, created) = manager.start("pres-1", 5);
    assert!(created);
    assert_ne!(session.id, first_id);
    assert_eq!(session.current_slide, 1);
}

#[test]
fn test_pause_resume_cycle() {
    let mut manager = started();
    assert!(manager.pause());
    assert_eq!(manager.state(), SessionState::Paused);
    assert!(manager.resume());
    assert_eq!(manager.state(), SessionState::Active);
}

#[test]
fn test_pause_resume_outside_their_states_are_noops() {
    let mut manager = SessionManager::new();
    assert!(!manager.pause());
    assert!(!manager.resume());

    let mut manager = started();
    // resume while Active is a no-op
    assert!(!manager.resume());
    // double pause
    assert!(manager.pause());
    assert!(!manager.pause());
    assert_eq!(manager.state(), SessionState::Paused);

    manager.end();
    assert!(!manager.pause());
    assert!(!manager.resume());
    assert_eq!(manager.state(), SessionState::Ended);
}

#[test]
fn test_end_fixes_end_time_and_final_slide() {
    let mut manager = started();
    manager.set_slide(4);
    assert!(manager.end());

    let session = manager.current().unwrap();
    assert_eq!(session.state, SessionState::Ended);
    assert_eq!(session.current_slide, 4);
    assert!(session.end_time.is_some());
    assert!(session.end_time.unwrap() >= session.start_time);

    // Ended is terminal
    assert!(!manager.end());
}

#[test]
fn test_end_works_from_paused() {
    let mut manager = started();
    manager.pause();
    assert!(manager.end());
    assert_eq!(manager.state(), SessionState::Ended);
}

#[test]
fn test_duration_accrues_only_while_active() {
    let mut manager = started();
    manager.tick(10);
    manager.pause();
    manager.tick(100);
    manager.resume();
    manager.tick(5);
    assert_eq!(manager.current().unwrap().duration_secs, 15);
}

#[test]
fn test_slide_navigation_is_clamped() {
    let mut manager = started();
    assert_eq!(manager.set_slide(3), Some(3));
    assert_eq!(manager.set_slide(99), Some(5));
    assert_eq!(manager.set_slide(0), Some(1));
    assert_eq!(manager.advance(-5), Some(1));
    assert_eq!(manager.advance(2), Some(3));
    assert_eq!(manager.last_slide(), Some(5));
    assert_eq!(manager.advance(1), Some(5));
}

#[test]
fn test_navigation_only_mutates_while_active() {
    let mut manager = started();
    manager.set_slide(2);
    manager.pause();
    assert_eq!(manager.set_slide(4), None);
    assert_eq!(manager.advance(1), None);
    assert_eq!(manager.current_slide(), Some(2));

    manager.resume();
    manager.end();
    assert_eq!(manager.advance(1), None);
    assert_eq!(manager.current_slide(), Some(2));
}

#[test]
fn test_zero_slide_deck_is_clamped_to_one() {
    let mut manager = SessionManager::new();
    let (session, _) = manager.start("pres-1", 0);
    assert_eq!(session.total_slides, 1);
    assert_eq!(session.current_slide, 1);
}
