// Session lifecycle state management
//
// Idle -> Active -> {Paused <-> Active} -> Ended (terminal). Expected UI
// races (double-click start, pause outside Active) are idempotent no-ops
// rather than errors: the shell may double-invoke any transition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session state enum representing the lifecycle of a presentation session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No open session
    Idle,
    /// Presenting; duration accrues, commands route, content is analyzed
    Active,
    /// Timer and restarts held; transcript state retained
    Paused,
    /// Terminal; content generation may run against the transcript
    Ended,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Idle
    }
}

/// One presentation session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub presentation_id: String,
    pub state: SessionState,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// 1-indexed, always within [1, total_slides]
    pub current_slide: u32,
    pub total_slides: u32,
    /// Accrued only while Active
    pub duration_secs: u64,
}

/// Manager for the session lifecycle. At most one open (Active/Paused)
/// session exists at a time; ending a session permits starting a new one.
#[derive(Debug, Default)]
pub struct SessionManager {
    session: Option<Session>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn state(&self) -> SessionState {
        self.session
            .as_ref()
            .map(|s| s.state)
            .unwrap_or(SessionState::Idle)
    }

    pub fn current_slide(&self) -> Option<u32> {
        self.session.as_ref().map(|s| s.current_slide)
    }

    /// Start a session: Idle (or after Ended) -> Active.
    ///
    /// Idempotent while a session is open: returns the existing session
    /// unchanged, preserving slide position and accrued duration.
    /// Returns the session and whether it was newly created.
    pub fn start(&mut self, presentation_id: &str, total_slides: u32) -> (&Session, bool) {
        let open = matches!(
            self.state(),
            SessionState::Active | SessionState::Paused
        );
        if open {
            crate::debug!("[session] start ignored, session already open");
            return (self.session.as_ref().expect("open session"), false);
        }

        let session = Session {
            id: Uuid::new_v4(),
            presentation_id: presentation_id.to_string(),
            state: SessionState::Active,
            start_time: Utc::now(),
            end_time: None,
            current_slide: 1,
            // A deck always has at least one slide
            total_slides: total_slides.max(1),
            duration_secs: 0,
        };
        crate::info!(
            "[session] started {} for presentation {}",
            session.id,
            presentation_id
        );
        self.session = Some(session);
        (self.session.as_ref().expect("just set"), true)
    }

    /// Active -> Paused. Ignored in any other state.
    pub fn pause(&mut self) -> bool {
        match self.session.as_mut() {
            Some(session) if session.state == SessionState::Active => {
                session.state = SessionState::Paused;
                true
            }
            _ => {
                crate::debug!("[session] pause ignored in state {:?}", self.state());
                false
            }
        }
    }

    /// Paused -> Active. Ignored in any other state.
    pub fn resume(&mut self) -> bool {
        match self.session.as_mut() {
            Some(session) if session.state == SessionState::Paused => {
                session.state = SessionState::Active;
                true
            }
            _ => {
                crate::debug!("[session] resume ignored in state {:?}", self.state());
                false
            }
        }
    }

    /// Any open state -> Ended (terminal). Fixes end_time and the final
    /// slide. Ignored when Idle or already Ended.
    pub fn end(&mut self) -> bool {
        match self.session.as_mut() {
            Some(session)
                if matches!(session.state, SessionState::Active | SessionState::Paused) =>
            {
                session.state = SessionState::Ended;
                session.end_time = Some(Utc::now());
                crate::info!(
                    "[session] ended {} on slide {} after {}s",
                    session.id,
                    session.current_slide,
                    session.duration_secs
                );
                true
            }
            _ => {
                crate::debug!("[session] end ignored in state {:?}", self.state());
                false
            }
        }
    }

    /// Accrue presentation time. Only counts while Active.
    pub fn tick(&mut self, seconds: u64) {
        if let Some(session) = self.session.as_mut() {
            if session.state == SessionState::Active {
                session.duration_secs += seconds;
            }
        }
    }

    /// Set the slide pointer, clamped to [1, total_slides].
    /// Navigation mutates only while Active; returns the resulting slide.
    pub fn set_slide(&mut self, slide: u32) -> Option<u32> {
        match self.session.as_mut() {
            Some(session) if session.state == SessionState::Active => {
                session.current_slide = slide.clamp(1, session.total_slides);
                Some(session.current_slide)
            }
            _ => None,
        }
    }

    /// Move the slide pointer by a signed delta, clamped. Active only.
    pub fn advance(&mut self, delta: i64) -> Option<u32> {
        let (current, total) = match self.session.as_ref() {
            Some(s) if s.state == SessionState::Active => (s.current_slide, s.total_slides),
            _ => return None,
        };
        let target = (current as i64 + delta).clamp(1, total as i64) as u32;
        self.set_slide(target)
    }

    /// Jump to the last slide. Active only.
    pub fn last_slide(&mut self) -> Option<u32> {
        let total = self.session.as_ref().map(|s| s.total_slides)?;
        self.set_slide(total)
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
