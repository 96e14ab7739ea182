// Presentation pipeline - wires recognition events through classification,
// session routing, feature extraction, and persistence
//
// One pipeline serves one presentation. Events are processed one at a time
// by a single consumer, so everything here is plain `&mut self` state; the
// only concurrency is fire-and-forget persistence and deferred generation,
// which run against clones and never feed back into the live path.

use std::sync::Arc;

use crate::analytics::SessionMetrics;
use crate::classifier::{Classification, ClassifierConfig, CommandClassifier, CommandIntent};
use crate::config::PipelineConfig;
use crate::events::{
    CommandBusEmitter, CommandEventEmitter, GenerationEventEmitter, GenerationFailedPayload,
    InterimTranscriptPayload, QuizGeneratedPayload, RecognitionErrorPayload,
    RecognitionEventEmitter, SessionEventEmitter, SummaryGeneratedPayload,
};
use crate::features::{ExtractorConfig, FeatureExtractor, TranscriptSegment};
use crate::generator::{ContentGenerator, GeneratorError, Quiz};
use crate::recognition::{RecognitionSupervisor, SourceEvent, SupervisorEvent, Utterance};
use crate::session::{CommandRouter, Session, SessionManager, SessionState};
use crate::storage::{ArtifactStoreBackend, SegmentStoreBackend};

/// Artifact names used in generation_failed payloads
const ARTIFACT_QUIZ: &str = "quiz";
const ARTIFACT_SUMMARY: &str = "summary";

/// The assembled pipeline for one presentation.
///
/// The shell constructs one of these per deck, drives it with events from a
/// `RecognitionSupervisor` (or any `SourceEvent` stream), and calls the
/// lifecycle methods from its own controls. Slide position, transcript
/// history, and analytics all live here.
pub struct PresentationPipeline<E> {
    emitter: Arc<E>,
    segment_store: Arc<dyn SegmentStoreBackend>,
    artifact_store: Arc<dyn ArtifactStoreBackend>,
    config: PipelineConfig,
    classifier: CommandClassifier,
    router: CommandRouter<E>,
    sessions: SessionManager,
    extractor: FeatureExtractor,
    /// In-order transcript for the current session; the generation snapshot
    segments: Vec<TranscriptSegment>,
    /// Supervisor for the active recognition source, when the shell hands
    /// it over; lifecycle transitions gate its restarts
    supervisor: Option<RecognitionSupervisor>,
    presentation_id: String,
    total_slides: u32,
}

impl<E> PresentationPipeline<E>
where
    E: SessionEventEmitter
        + CommandBusEmitter
        + CommandEventEmitter
        + RecognitionEventEmitter
        + GenerationEventEmitter
        + 'static,
{
    pub fn new(
        emitter: Arc<E>,
        segment_store: Arc<dyn SegmentStoreBackend>,
        artifact_store: Arc<dyn ArtifactStoreBackend>,
        config: PipelineConfig,
        presentation_id: &str,
        total_slides: u32,
    ) -> Self {
        let classifier = CommandClassifier::with_config(ClassifierConfig {
            fuzzy_threshold: config.fuzzy_threshold,
        });
        let router = CommandRouter::new(emitter.clone(), config.execution_threshold);
        let extractor = FeatureExtractor::new(ExtractorConfig {
            keywords_per_utterance: config.keywords_per_utterance,
            pace_window_secs: config.pace_window_secs,
            topic_target_chars: config.topic_target_chars,
        });
        Self {
            emitter,
            segment_store,
            artifact_store,
            config,
            classifier,
            router,
            sessions: SessionManager::new(),
            extractor,
            segments: Vec::new(),
            supervisor: None,
            presentation_id: presentation_id.to_string(),
            total_slides,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.sessions.current()
    }

    pub fn state(&self) -> SessionState {
        self.sessions.state()
    }

    pub fn current_slide(&self) -> Option<u32> {
        self.sessions.current_slide()
    }

    /// Start a session from the shell's own control (not a voice command).
    /// Idempotent while a session is open.
    pub fn start(&mut self) -> Session {
        let was_open = matches!(
            self.sessions.state(),
            SessionState::Active | SessionState::Paused
        );
        let session =
            self.router
                .start_session(&mut self.sessions, &self.presentation_id, self.total_slides);
        if !was_open {
            self.reset_transcript();
        }
        session
    }

    /// Fresh session: topic accumulation and transcript start over. Every
    /// path that opens a new session funnels through this.
    fn reset_transcript(&mut self) {
        self.extractor = FeatureExtractor::new(ExtractorConfig {
            keywords_per_utterance: self.config.keywords_per_utterance,
            pace_window_secs: self.config.pace_window_secs,
            topic_target_chars: self.config.topic_target_chars,
        });
        self.segments.clear();
    }

    /// Hand over the recognition supervisor so pause/resume/end gate its
    /// restarts. A stopped supervisor is terminal; the shell supplies a
    /// fresh one per session.
    pub fn attach_supervisor(&mut self, supervisor: RecognitionSupervisor) {
        self.supervisor = Some(supervisor);
    }

    pub fn pause(&mut self) -> bool {
        if !self.router.pause_session(&mut self.sessions) {
            return false;
        }
        if let Some(supervisor) = &self.supervisor {
            supervisor.suspend();
        }
        true
    }

    pub fn resume(&mut self) -> bool {
        if !self.router.resume_session(&mut self.sessions) {
            return false;
        }
        if let Some(supervisor) = &self.supervisor {
            supervisor.resume();
        }
        true
    }

    /// End the session and kick off summary generation against the final
    /// transcript. Returns the ended session snapshot.
    pub fn end(&mut self) -> Option<Session> {
        let session = self.router.end_session(&mut self.sessions)?;
        if let Some(supervisor) = self.supervisor.take() {
            supervisor.stop();
        }
        self.spawn_summary(session.clone());
        Some(session)
    }

    /// Accrue presentation time; forwarded by the shell's clock.
    pub fn tick(&mut self, seconds: u64) {
        self.sessions.tick(seconds);
    }

    /// Process one supervised recognition event.
    pub fn handle_supervisor_event(&mut self, event: SupervisorEvent) {
        match event {
            SupervisorEvent::Result(result) => self.handle_event(SourceEvent::Result(result)),
            SupervisorEvent::Fatal(error) => {
                crate::error!("[pipeline] recognition failed: {}", error);
                self.emitter.emit_recognition_error(RecognitionErrorPayload {
                    code: error.code().to_string(),
                    message: error.to_string(),
                });
            }
        }
    }

    /// Process one raw source event. Interim results become captions and
    /// are never classified; finals flow through classify -> route/extract.
    pub fn handle_event(&mut self, event: SourceEvent) {
        match event {
            SourceEvent::Result(result) => {
                if !result.is_final {
                    self.emitter.emit_interim_transcript(InterimTranscriptPayload {
                        text: result.text,
                        confidence: result.confidence,
                    });
                    return;
                }
                let slide = self.sessions.current_slide().unwrap_or(1);
                let utterance = Utterance::from_result(result, slide);
                self.handle_final(utterance);
            }
            SourceEvent::Transient(kind) => {
                // Recovery is the supervisor's job; nothing to route
                crate::debug!("[pipeline] transient recognition error: {:?}", kind);
            }
            SourceEvent::Ended => {
                crate::debug!("[pipeline] recognition source ended");
            }
        }
    }

    fn handle_final(&mut self, utterance: Utterance) {
        match self.classifier.classify(&utterance) {
            Classification::Command(command) => {
                let was_open = matches!(
                    self.sessions.state(),
                    SessionState::Active | SessionState::Paused
                );
                let command = self.router.route(
                    command,
                    &mut self.sessions,
                    &self.presentation_id,
                    self.total_slides,
                );
                if !command.executed {
                    return;
                }
                match command.intent {
                    CommandIntent::StartPresentation => {
                        // Voice start opens sessions through route(); it
                        // must drop the previous transcript like start()
                        if !was_open {
                            self.reset_transcript();
                        }
                    }
                    CommandIntent::StopPresentation => {
                        // route() already ended the session; generation runs
                        // against the frozen snapshot
                        if let Some(supervisor) = self.supervisor.take() {
                            supervisor.stop();
                        }
                        let session = self.sessions.current().expect("ended session").clone();
                        self.spawn_summary(session);
                    }
                    CommandIntent::PausePresentation => {
                        if let Some(supervisor) = &self.supervisor {
                            supervisor.suspend();
                        }
                    }
                    CommandIntent::ResumePresentation => {
                        if let Some(supervisor) = &self.supervisor {
                            supervisor.resume();
                        }
                    }
                    CommandIntent::GenerateQuiz => {
                        let _ = self.generate_quiz(None);
                    }
                    CommandIntent::CreateSummary => {
                        if let Some(session) = self.sessions.current().cloned() {
                            self.spawn_summary(session);
                        }
                    }
                    _ => {}
                }
            }
            Classification::ContentSpeech(utterance) => {
                // Content only counts while presenting
                if self.sessions.state() != SessionState::Active {
                    return;
                }
                let session_id = self.sessions.current().expect("active session").id;
                let segment = self.extractor.extract(&utterance, session_id);
                self.segments.push(segment.clone());
                self.persist_segment(segment.clone());
                self.router
                    .auto_advance(&segment, &self.config.auto_advance, &mut self.sessions);
            }
        }
    }

    /// Live analytics over the transcript so far. Pure recompute.
    pub fn metrics(&self) -> SessionMetrics {
        let duration = self
            .sessions
            .current()
            .map(|s| s.duration_secs)
            .unwrap_or(0);
        SessionMetrics::compute(&self.segments, duration, &self.config.engagement)
    }

    /// Generate a quiz on demand from the transcript so far. Emits
    /// quiz_generated / generation_failed and persists the artifact.
    pub fn generate_quiz(&self, seed: Option<u64>) -> Result<Quiz, GeneratorError> {
        let Some(session) = self.sessions.current() else {
            crate::warn!("[pipeline] quiz requested without a session");
            return Err(GeneratorError::InsufficientContent(uuid::Uuid::nil()));
        };
        let generator = ContentGenerator::new(self.config.clone());
        match generator.generate_quiz(session, &self.segments, seed) {
            Ok(quiz) => {
                self.emitter.emit_quiz_generated(QuizGeneratedPayload {
                    session_id: quiz.session_id,
                    quiz_id: quiz.id,
                    total_questions: quiz.total_questions,
                });
                let store = Arc::clone(&self.artifact_store);
                let artifact = quiz.clone();
                spawn_detached(async move {
                    if let Err(err) = store.put_quiz(artifact).await {
                        crate::warn!("[pipeline] quiz persist failed: {}", err);
                    }
                });
                Ok(quiz)
            }
            Err(err) => {
                self.emitter.emit_generation_failed(GenerationFailedPayload {
                    session_id: session.id,
                    artifact: ARTIFACT_QUIZ.to_string(),
                    error: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Summary generation and persistence, detached from the event path.
    fn spawn_summary(&self, session: Session) {
        let segments = self.segments.clone();
        let generator = ContentGenerator::new(self.config.clone());
        let store = Arc::clone(&self.artifact_store);
        let emitter = Arc::clone(&self.emitter);
        spawn_detached(async move {
            match generator.generate_summary(&session, &segments) {
                Ok(summary) => {
                    emitter.emit_summary_generated(SummaryGeneratedPayload {
                        session_id: summary.session_id,
                        summary_id: summary.id,
                        engagement_score: summary.metrics.engagement_score,
                    });
                    if let Err(err) = store.put_summary(summary).await {
                        crate::warn!("[pipeline] summary persist failed: {}", err);
                    }
                }
                Err(err) => {
                    crate::warn!("[pipeline] summary generation failed: {}", err);
                    emitter.emit_generation_failed(GenerationFailedPayload {
                        session_id: session.id,
                        artifact: ARTIFACT_SUMMARY.to_string(),
                        error: err.to_string(),
                    });
                }
            }
        });
    }

    /// Fire-and-forget segment write. Failures are logged, never surfaced
    /// to the live path.
    fn persist_segment(&self, segment: TranscriptSegment) {
        let store = Arc::clone(&self.segment_store);
        spawn_detached(async move {
            if let Err(err) = store.append_segment(segment).await {
                crate::warn!("[pipeline] segment persist failed: {}", err);
            }
        });
    }
}

/// Run a detached task on the ambient runtime, or inline when the caller
/// is synchronous with no runtime available.
fn spawn_detached<F>(future: F)
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn(future);
        }
        Err(_) => crate::util::run_async(future),
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
