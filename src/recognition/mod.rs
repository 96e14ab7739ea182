// Recognition module - adapts a platform speech-recognition source into
// an ordered utterance event stream, supervised for automatic restarts.

mod source;
mod supervisor;

pub use source::{
    RecognitionError, RecognitionResult, RecognitionSource, ScriptedSource, SourceEvent,
    TransientErrorKind, Utterance,
};
pub use supervisor::{RecognitionSupervisor, SupervisorEvent, SupervisorMode};
