// Recognition source abstraction
//
// The platform speech recognizer is process-wide singleton state with
// callback-driven delivery. Everything downstream works against the
// RecognitionSource trait instead, so a session owns an explicit handle
// and tests replay fixed event sequences through ScriptedSource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// One speech-recognition result as delivered by the source.
///
/// Interim results (`is_final == false`) may arrive zero or more times for a
/// continuous utterance, followed by exactly one final result. Finals arrive
/// in non-decreasing timestamp order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResult {
    pub text: String,
    pub is_final: bool,
    /// Recognizer confidence in [0, 1]
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

impl RecognitionResult {
    pub fn final_now(text: &str, confidence: f64) -> Self {
        Self {
            text: text.to_string(),
            is_final: true,
            confidence,
            timestamp: Utc::now(),
        }
    }

    pub fn interim_now(text: &str, confidence: f64) -> Self {
        Self {
            text: text.to_string(),
            is_final: false,
            confidence,
            timestamp: Utc::now(),
        }
    }
}

/// A recognition result stamped with the slide it was spoken on.
/// Immutable once created; only finals are retained for transcript history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    pub is_final: bool,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
    /// Slide the presenter was on when this was spoken (1-indexed)
    pub slide_at_time: u32,
}

impl Utterance {
    pub fn from_result(result: RecognitionResult, slide: u32) -> Self {
        Self {
            text: result.text,
            is_final: result.is_final,
            confidence: result.confidence,
            timestamp: result.timestamp,
            slide_at_time: slide,
        }
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Transient source failures that are recovered by restarting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransientErrorKind {
    /// Recognizer timed out waiting for speech
    NoSpeech,
    /// Network hiccup in a cloud-backed recognizer
    Network,
    /// Audio capture glitch
    Audio,
}

/// Events delivered by a recognition source over its event channel
#[derive(Debug, Clone, PartialEq)]
pub enum SourceEvent {
    Result(RecognitionResult),
    /// Recoverable failure; the supervisor restarts the source
    Transient(TransientErrorKind),
    /// The source ended on its own (platform recognizers stop spontaneously)
    Ended,
}

/// Terminal recognition failures. Surfaced once; the supervisor stays stopped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecognitionError {
    #[error("speech recognition is not available on this platform")]
    Unavailable,
    #[error("microphone access was denied")]
    PermissionDenied,
}

impl RecognitionError {
    /// Stable code for event payloads
    pub fn code(&self) -> &'static str {
        match self {
            RecognitionError::Unavailable => "unavailable",
            RecognitionError::PermissionDenied => "permission_denied",
        }
    }
}

/// A startable/stoppable recognition source.
///
/// `start` hands the source a sender for its event stream and returns
/// immediately; delivery happens from the source's own callback context.
/// Starting an unsupported or denied source fails with a terminal error.
pub trait RecognitionSource: Send {
    fn start(
        &mut self,
        sink: mpsc::UnboundedSender<SourceEvent>,
    ) -> Result<(), RecognitionError>;

    fn stop(&mut self);
}

/// Test double replaying fixed event batches, one batch per `start` call.
///
/// Once the batches are exhausted, further starts deliver nothing (the
/// supervisor sees a silent source). Used throughout the test suite and
/// useful to hosts for replaying captured sessions.
pub struct ScriptedSource {
    batches: std::collections::VecDeque<Vec<SourceEvent>>,
    /// Error to return from every `start` call, for fatal-path tests
    fail_with: Option<RecognitionError>,
    starts: usize,
    stops: usize,
}

impl ScriptedSource {
    pub fn new(batches: Vec<Vec<SourceEvent>>) -> Self {
        Self {
            batches: batches.into(),
            fail_with: None,
            starts: 0,
            stops: 0,
        }
    }

    /// A source whose every start fails with the given terminal error
    pub fn failing(error: RecognitionError) -> Self {
        Self {
            batches: std::collections::VecDeque::new(),
            fail_with: Some(error),
            starts: 0,
            stops: 0,
        }
    }

    pub fn start_count(&self) -> usize {
        self.starts
    }

    pub fn stop_count(&self) -> usize {
        self.stops
    }
}

impl RecognitionSource for ScriptedSource {
    fn start(
        &mut self,
        sink: mpsc::UnboundedSender<SourceEvent>,
    ) -> Result<(), RecognitionError> {
        self.starts += 1;
        if let Some(error) = &self.fail_with {
            return Err(error.clone());
        }
        if let Some(batch) = self.batches.pop_front() {
            for event in batch {
                // Receiver dropped means the supervisor is shutting down
                if sink.send(event).is_err() {
                    break;
                }
            }
        }
        Ok(())
    }

    fn stop(&mut self) {
        self.stops += 1;
    }
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
