// orator - voice-driven presentation control and analytics pipeline
//
// The host shell (slide viewer) supplies a RecognitionSource and slide
// context, implements the emitter traits in `events`, and receives
// navigation actions and generated study material in return.

pub mod analytics;
pub mod classifier;
pub mod config;
pub mod events;
pub mod features;
pub mod generator;
pub mod pipeline;
pub mod recognition;
pub mod session;
pub mod storage;
mod util;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use classifier::{Classification, Command, CommandClassifier, CommandIntent};
pub use config::PipelineConfig;
pub use features::{EmotionTag, FeatureExtractor, TranscriptSegment};
pub use pipeline::PresentationPipeline;
pub use recognition::{
    RecognitionError, RecognitionResult, RecognitionSource, RecognitionSupervisor, SourceEvent,
    Utterance,
};
pub use session::{Session, SessionManager, SessionState};
