// Pipeline events for shell notification
// Defines event payloads and emission traits for testability

use serde::Serialize;
use uuid::Uuid;

use crate::features::EmotionTag;
use crate::session::SessionState;

/// Event names as constants for consistency
pub mod event_names {
    pub const SESSION_STARTED: &str = "session_started";
    pub const SESSION_PAUSED: &str = "session_paused";
    pub const SESSION_RESUMED: &str = "session_resumed";
    pub const SESSION_ENDED: &str = "session_ended";
    pub const SLIDE_AUTO_ADVANCED: &str = "slide_auto_advanced";
    pub const COMMAND_EXECUTED: &str = "command_executed";
    pub const COMMAND_REJECTED: &str = "command_rejected";
    pub const INTERIM_TRANSCRIPT: &str = "interim_transcript";
    pub const RECOGNITION_ERROR: &str = "recognition_error";
    pub const QUIZ_GENERATED: &str = "quiz_generated";
    pub const SUMMARY_GENERATED: &str = "summary_generated";
    pub const GENERATION_FAILED: &str = "generation_failed";
}

/// Actions emitted on the command bus for the slide viewer to interpret
pub mod actions {
    pub const NEXT_SLIDE: &str = "next-slide";
    pub const PREV_SLIDE: &str = "prev-slide";
    pub const FIRST_SLIDE: &str = "first-slide";
    pub const LAST_SLIDE: &str = "last-slide";
    pub const GOTO_SLIDE: &str = "goto-slide";
    pub const START_PRESENTATION: &str = "start-presentation";
    pub const STOP_PRESENTATION: &str = "stop-presentation";
    pub const PAUSE_PRESENTATION: &str = "pause-presentation";
    pub const RESUME_PRESENTATION: &str = "resume-presentation";
    pub const START_RECORDING: &str = "start-recording";
    pub const STOP_RECORDING: &str = "stop-recording";
    pub const GENERATE_QUIZ: &str = "generate-quiz";
    pub const GENERATE_SUMMARY: &str = "generate-summary";
    pub const SHOW_NOTES: &str = "show-notes";
}

/// A command bus action for the slide viewer
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SlideActionPayload {
    /// Action name, one of the `actions` constants
    pub action: String,
    /// Action parameters (e.g., target slide number for goto-slide)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl SlideActionPayload {
    pub fn new(action: &str) -> Self {
        Self {
            action: action.to_string(),
            params: None,
        }
    }

    pub fn with_params(action: &str, params: serde_json::Value) -> Self {
        Self {
            action: action.to_string(),
            params: Some(params),
        }
    }
}

/// Payload for session_started event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionStartedPayload {
    pub session_id: Uuid,
    pub presentation_id: String,
    /// ISO 8601 timestamp when the session started
    pub timestamp: String,
}

/// Payload for session_paused / session_resumed events
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatePayload {
    pub session_id: Uuid,
    pub state: SessionState,
    pub timestamp: String,
}

/// Payload for session_ended event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndedPayload {
    pub session_id: Uuid,
    /// Slide the presenter was on when the session ended
    pub final_slide: u32,
    pub duration_secs: u64,
    pub timestamp: String,
}

/// Payload for slide_auto_advanced event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AutoAdvancePayload {
    pub session_id: Uuid,
    pub slide: u32,
    /// What triggered the advance: "topic-completion" or "transition-phrase"
    pub reason: String,
}

/// Payload for command_executed event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommandExecutedPayload {
    /// The transcribed text that matched
    pub raw_text: String,
    /// Matched intent name (e.g., "next_slide")
    pub intent: String,
    /// Recognition confidence (0.0 - 1.0)
    pub confidence: f64,
}

/// Payload for command_rejected event (matched but below execution threshold)
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommandRejectedPayload {
    pub raw_text: String,
    pub intent: String,
    pub confidence: f64,
    /// Threshold the confidence fell short of
    pub threshold: f64,
}

/// Payload for interim_transcript event (live captions, never classified)
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InterimTranscriptPayload {
    pub text: String,
    pub confidence: f64,
}

/// Payload for recognition_error event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionErrorPayload {
    /// Error code: "unavailable" or "permission_denied"
    pub code: String,
    /// Descriptive error message
    pub message: String,
}

/// Payload for quiz_generated event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizGeneratedPayload {
    pub session_id: Uuid,
    pub quiz_id: Uuid,
    pub total_questions: usize,
}

/// Payload for summary_generated event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryGeneratedPayload {
    pub session_id: Uuid,
    pub summary_id: Uuid,
    pub engagement_score: f64,
}

/// Payload for generation_failed event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationFailedPayload {
    pub session_id: Uuid,
    /// What was requested: "quiz" or "summary"
    pub artifact: String,
    pub error: String,
}

/// Emotion histogram entry used in payloads and summaries
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmotionHistogram {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl EmotionHistogram {
    pub fn record(&mut self, tag: EmotionTag) {
        match tag {
            EmotionTag::Positive => self.positive += 1,
            EmotionTag::Negative => self.negative += 1,
            EmotionTag::Neutral => self.neutral += 1,
        }
    }
}

/// Trait for emitting session lifecycle events
/// Allows mocking in tests while using a real shell bridge in production
pub trait SessionEventEmitter: Send + Sync {
    fn emit_session_started(&self, payload: SessionStartedPayload);
    fn emit_session_paused(&self, payload: SessionStatePayload);
    fn emit_session_resumed(&self, payload: SessionStatePayload);
    fn emit_session_ended(&self, payload: SessionEndedPayload);
    fn emit_slide_auto_advanced(&self, payload: AutoAdvancePayload);
}

/// Trait for emitting command bus actions the slide viewer interprets
pub trait CommandBusEmitter: Send + Sync {
    fn emit_action(&self, payload: SlideActionPayload);
}

/// Trait for emitting per-command outcome events
pub trait CommandEventEmitter: Send + Sync {
    fn emit_command_executed(&self, payload: CommandExecutedPayload);
    fn emit_command_rejected(&self, payload: CommandRejectedPayload);
}

/// Trait for emitting recognition-level events
pub trait RecognitionEventEmitter: Send + Sync {
    fn emit_interim_transcript(&self, payload: InterimTranscriptPayload);
    fn emit_recognition_error(&self, payload: RecognitionErrorPayload);
}

/// Trait for emitting content generation results
pub trait GenerationEventEmitter: Send + Sync {
    fn emit_quiz_generated(&self, payload: QuizGeneratedPayload);
    fn emit_summary_generated(&self, payload: SummaryGeneratedPayload);
    fn emit_generation_failed(&self, payload: GenerationFailedPayload);
}

/// Get the current timestamp in ISO 8601 format
pub fn current_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
#[path = "events_test.rs"]
pub(crate) mod tests;
