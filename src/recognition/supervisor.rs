// Recognition supervisor - restarts the source on transient failures
//
// The retry loop is bound to the session's Active/Paused lifetime: while
// Running it restarts a failed or ended source with doubling backoff,
// while Suspended it keeps the source but never restarts it, and Stopped
// tears everything down immediately. Terminal failures (unsupported
// platform, permission denial) are surfaced once and end supervision.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::source::{
    RecognitionError, RecognitionResult, RecognitionSource, SourceEvent,
};
use crate::config::BackoffConfig;

/// What the supervisor should currently be doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisorMode {
    /// Forward results and restart the source when it dies
    Running,
    /// Session is paused: keep the source but suppress restarts
    Suspended,
    /// Session ended: stop the source and exit
    Stopped,
}

/// Events the supervisor forwards to the pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum SupervisorEvent {
    Result(RecognitionResult),
    /// Terminal failure; surfaced once, supervision has ended
    Fatal(RecognitionError),
}

/// Handle to a running supervision task
pub struct RecognitionSupervisor {
    mode_tx: watch::Sender<SupervisorMode>,
    handle: Option<JoinHandle<()>>,
}

impl RecognitionSupervisor {
    /// Spawn supervision of `source` on the current tokio runtime.
    ///
    /// Returns the handle and the receiving end of the supervised event
    /// stream. The supervisor starts in Running mode.
    pub fn spawn<S: RecognitionSource + 'static>(
        source: S,
        config: BackoffConfig,
    ) -> (Self, mpsc::UnboundedReceiver<SupervisorEvent>) {
        let (out_tx, out_rx) = mpsc::unbounded_channel();
        let (mode_tx, mode_rx) = watch::channel(SupervisorMode::Running);
        let handle = tokio::spawn(run_loop(Box::new(source), out_tx, mode_rx, config));
        (
            Self {
                mode_tx,
                handle: Some(handle),
            },
            out_rx,
        )
    }

    /// Suppress restarts while the session is paused
    pub fn suspend(&self) {
        let _ = self.mode_tx.send(SupervisorMode::Suspended);
    }

    /// Re-enable restarts after a pause
    pub fn resume(&self) {
        let _ = self.mode_tx.send(SupervisorMode::Running);
    }

    /// Stop the source and end supervision. Idempotent.
    pub fn stop(&self) {
        let _ = self.mode_tx.send(SupervisorMode::Stopped);
    }

    /// Stop and wait for the supervision task to finish
    pub async fn shutdown(mut self) {
        self.stop();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for RecognitionSupervisor {
    fn drop(&mut self) {
        // Signal the task even if shutdown() was never awaited
        let _ = self.mode_tx.send(SupervisorMode::Stopped);
    }
}

async fn run_loop(
    mut source: Box<dyn RecognitionSource>,
    out: mpsc::UnboundedSender<SupervisorEvent>,
    mut mode: watch::Receiver<SupervisorMode>,
    config: BackoffConfig,
) {
    let base = Duration::from_millis(config.base_ms.max(1));
    let cap = Duration::from_millis(config.cap_ms.max(config.base_ms));
    let mut backoff = base;

    'supervise: loop {
        // Hold here until we are allowed to (re)start the source
        loop {
            let current = *mode.borrow();
            match current {
                SupervisorMode::Running => break,
                SupervisorMode::Stopped => {
                    source.stop();
                    return;
                }
                SupervisorMode::Suspended => {
                    if mode.changed().await.is_err() {
                        source.stop();
                        return;
                    }
                }
            }
        }

        let (tx, mut rx) = mpsc::unbounded_channel();
        if let Err(error) = source.start(tx) {
            crate::error!("[recognition] source failed to start: {}", error);
            let _ = out.send(SupervisorEvent::Fatal(error));
            return;
        }

        // Drain this incarnation of the source
        loop {
            tokio::select! {
                changed = mode.changed() => {
                    let stopped = changed.is_err()
                        || *mode.borrow() == SupervisorMode::Stopped;
                    if stopped {
                        source.stop();
                        return;
                    }
                    // Suspended: keep draining, restarts are gated above
                }
                event = rx.recv() => match event {
                    Some(SourceEvent::Result(result)) => {
                        // Source is healthy again
                        backoff = base;
                        if out.send(SupervisorEvent::Result(result)).is_err() {
                            source.stop();
                            return;
                        }
                    }
                    Some(SourceEvent::Transient(kind)) => {
                        crate::warn!(
                            "[recognition] transient error {:?}, restart in {:?}",
                            kind,
                            backoff
                        );
                        source.stop();
                        if !wait_backoff(&mut mode, backoff).await {
                            source.stop();
                            return;
                        }
                        backoff = (backoff * 2).min(cap);
                        continue 'supervise;
                    }
                    Some(SourceEvent::Ended) | None => {
                        crate::debug!("[recognition] source ended, restart in {:?}", backoff);
                        source.stop();
                        if !wait_backoff(&mut mode, backoff).await {
                            source.stop();
                            return;
                        }
                        backoff = (backoff * 2).min(cap);
                        continue 'supervise;
                    }
                },
            }
        }
    }
}

/// Sleep for `delay`, returning false early if supervision was stopped
async fn wait_backoff(mode: &mut watch::Receiver<SupervisorMode>, delay: Duration) -> bool {
    let sleep = tokio::time::sleep(delay);
    tokio::pin!(sleep);
    loop {
        tokio::select! {
            _ = &mut sleep => return true,
            changed = mode.changed() => {
                if changed.is_err() || *mode.borrow() == SupervisorMode::Stopped {
                    return false;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "supervisor_test.rs"]
mod tests;
