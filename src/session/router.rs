// Command router - executes classified commands against the session
//
// Classification is pure; this is where side effects live. Every executed
// command is reflected on the command bus so the slide viewer can follow,
// with the resulting slide number attached to navigation actions (clamping
// happens here, so the shell never has to re-derive bounds).

use std::sync::Arc;

use crate::classifier::{Command, CommandIntent, PARAM_SLIDE};
use crate::config::AutoAdvanceConfig;
use crate::events::{
    actions, current_timestamp, AutoAdvancePayload, CommandBusEmitter, CommandEventEmitter,
    CommandExecutedPayload, CommandRejectedPayload, SessionEndedPayload, SessionEventEmitter,
    SessionStartedPayload, SessionStatePayload, SlideActionPayload,
};
use crate::features::TranscriptSegment;
use crate::session::state::{Session, SessionManager, SessionState};

/// Router for classified commands and auto-advance decisions
pub struct CommandRouter<E> {
    emitter: Arc<E>,
    /// Minimum confidence for a matched command to execute
    execution_threshold: f64,
}

impl<E> CommandRouter<E>
where
    E: CommandBusEmitter + CommandEventEmitter + SessionEventEmitter,
{
    pub fn new(emitter: Arc<E>, execution_threshold: f64) -> Self {
        Self {
            emitter,
            execution_threshold,
        }
    }

    /// Open a session (idempotent) and announce it. Returns a snapshot.
    pub fn start_session(
        &self,
        sessions: &mut SessionManager,
        presentation_id: &str,
        total_slides: u32,
    ) -> Session {
        let (session, created) = sessions.start(presentation_id, total_slides);
        let snapshot = session.clone();
        if created {
            self.emitter.emit_session_started(SessionStartedPayload {
                session_id: snapshot.id,
                presentation_id: snapshot.presentation_id.clone(),
                timestamp: current_timestamp(),
            });
            self.emitter
                .emit_action(SlideActionPayload::new(actions::START_PRESENTATION));
        }
        snapshot
    }

    pub fn pause_session(&self, sessions: &mut SessionManager) -> bool {
        if !sessions.pause() {
            return false;
        }
        let session = sessions.current().expect("paused session");
        self.emitter.emit_session_paused(SessionStatePayload {
            session_id: session.id,
            state: SessionState::Paused,
            timestamp: current_timestamp(),
        });
        self.emitter
            .emit_action(SlideActionPayload::new(actions::PAUSE_PRESENTATION));
        true
    }

    pub fn resume_session(&self, sessions: &mut SessionManager) -> bool {
        if !sessions.resume() {
            return false;
        }
        let session = sessions.current().expect("resumed session");
        self.emitter.emit_session_resumed(SessionStatePayload {
            session_id: session.id,
            state: SessionState::Active,
            timestamp: current_timestamp(),
        });
        self.emitter
            .emit_action(SlideActionPayload::new(actions::RESUME_PRESENTATION));
        true
    }

    /// End the open session and announce it. Returns a snapshot of the
    /// ended session, or None if there was nothing to end.
    pub fn end_session(&self, sessions: &mut SessionManager) -> Option<Session> {
        if !sessions.end() {
            return None;
        }
        let snapshot = sessions.current().expect("ended session").clone();
        self.emitter.emit_session_ended(SessionEndedPayload {
            session_id: snapshot.id,
            final_slide: snapshot.current_slide,
            duration_secs: snapshot.duration_secs,
            timestamp: current_timestamp(),
        });
        self.emitter
            .emit_action(SlideActionPayload::new(actions::STOP_PRESENTATION));
        Some(snapshot)
    }

    /// Execute a classified command. Returns the command with `executed`
    /// reflecting whether its side effect ran.
    pub fn route(
        &self,
        mut command: Command,
        sessions: &mut SessionManager,
        presentation_id: &str,
        total_slides: u32,
    ) -> Command {
        if command.confidence < self.execution_threshold {
            crate::info!(
                "[router] rejected {} at confidence {:.2} (threshold {:.2})",
                command.intent,
                command.confidence,
                self.execution_threshold
            );
            self.emitter.emit_command_rejected(CommandRejectedPayload {
                raw_text: command.raw_text.clone(),
                intent: command.intent.name().to_string(),
                confidence: command.confidence,
                threshold: self.execution_threshold,
            });
            return command;
        }

        let executed = match command.intent {
            CommandIntent::NextSlide => self.navigate(sessions, command.intent, |s| s.advance(1)),
            CommandIntent::PreviousSlide => {
                self.navigate(sessions, command.intent, |s| s.advance(-1))
            }
            CommandIntent::FirstSlide => {
                self.navigate(sessions, command.intent, |s| s.set_slide(1))
            }
            CommandIntent::LastSlide => {
                self.navigate(sessions, command.intent, |s| s.last_slide())
            }
            CommandIntent::GotoSlide => match command.target_slide() {
                // Out-of-range requests are clamped, not rejected
                Some(n) => self.navigate(sessions, command.intent, |s| s.set_slide(n)),
                None => {
                    crate::warn!("[router] goto without a target slide: {:?}", command.raw_text);
                    false
                }
            },
            CommandIntent::StartPresentation => {
                self.start_session(sessions, presentation_id, total_slides);
                true
            }
            CommandIntent::StopPresentation => self.end_session(sessions).is_some(),
            CommandIntent::PausePresentation => self.pause_session(sessions),
            CommandIntent::ResumePresentation => self.resume_session(sessions),
            // Recording and generation are shell/pipeline concerns; the
            // session itself is untouched
            CommandIntent::StartRecording
            | CommandIntent::StopRecording
            | CommandIntent::GenerateQuiz
            | CommandIntent::CreateSummary
            | CommandIntent::ShowNotes => {
                self.emitter
                    .emit_action(SlideActionPayload::new(command.intent.action()));
                true
            }
        };

        command.executed = executed;
        if executed {
            self.emitter.emit_command_executed(CommandExecutedPayload {
                raw_text: command.raw_text.clone(),
                intent: command.intent.name().to_string(),
                confidence: command.confidence,
            });
        } else {
            crate::debug!(
                "[router] {} not executed in state {:?}",
                command.intent,
                sessions.state()
            );
        }
        command
    }

    /// Apply a slide mutation and mirror the result on the command bus.
    /// Navigation only takes effect while the session is Active.
    fn navigate(
        &self,
        sessions: &mut SessionManager,
        intent: CommandIntent,
        mutate: impl FnOnce(&mut SessionManager) -> Option<u32>,
    ) -> bool {
        match mutate(sessions) {
            Some(slide) => {
                self.emitter.emit_action(SlideActionPayload::with_params(
                    intent.action(),
                    serde_json::json!({ PARAM_SLIDE: slide }),
                ));
                true
            }
            None => false,
        }
    }

    /// Auto-advance decision for one content utterance's segment.
    ///
    /// Advances by exactly one slide when topic completion and confidence
    /// clear their thresholds, or when the utterance contains a transition
    /// phrase - never twice when both conditions hold. Returns the new
    /// slide when an advance happened.
    pub fn auto_advance(
        &self,
        segment: &TranscriptSegment,
        policy: &AutoAdvanceConfig,
        sessions: &mut SessionManager,
    ) -> Option<u32> {
        let text = segment.text.to_lowercase();
        let transition = policy
            .transition_phrases
            .iter()
            .any(|phrase| text.contains(phrase.as_str()));
        let completed = segment.topic_completion > policy.completion_threshold
            && segment.confidence > policy.confidence_threshold;
        if !transition && !completed {
            return None;
        }
        let reason = if transition {
            "transition-phrase"
        } else {
            "topic-completion"
        };

        let before = sessions.current_slide()?;
        // Single advance call: at most one slide per qualifying utterance
        let after = sessions.advance(1)?;
        if after == before {
            // Already on the last slide
            return None;
        }

        let session_id = sessions.current().expect("active session").id;
        crate::info!("[router] auto-advance to slide {} ({})", after, reason);
        self.emitter.emit_slide_auto_advanced(AutoAdvancePayload {
            session_id,
            slide: after,
            reason: reason.to_string(),
        });
        self.emitter.emit_action(SlideActionPayload::with_params(
            actions::NEXT_SLIDE,
            serde_json::json!({ PARAM_SLIDE: after }),
        ));
        Some(after)
    }
}

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;
