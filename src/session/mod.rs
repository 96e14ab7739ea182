// Session module - lifecycle state machine and command routing

mod router;
mod state;

pub use router::CommandRouter;
pub use state::{Session, SessionManager, SessionState};
