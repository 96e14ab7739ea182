//! Storage backend traits for transcript segments and generated artifacts.
//!
//! These traits define the persistence boundary. The pipeline treats every
//! write as fire-and-forget: failures are logged, the live event path is
//! never blocked on persistence success, and writes are independently
//! retryable without replaying the recognition stream.

use async_trait::async_trait;
use uuid::Uuid;

use crate::features::TranscriptSegment;
use crate::generator::{Quiz, Summary};

/// Errors from storage backends
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("write failed: {0}")]
    WriteFailed(String),
}

/// Backend trait for append-only transcript segment storage.
#[async_trait]
pub trait SegmentStoreBackend: Send + Sync {
    /// Append one segment. Segments for a session arrive in
    /// non-decreasing timestamp order.
    async fn append_segment(&self, segment: TranscriptSegment) -> Result<(), StoreError>;

    /// All segments recorded for a session, in insertion order.
    async fn segments_for_session(
        &self,
        session_id: Uuid,
    ) -> Result<Vec<TranscriptSegment>, StoreError>;
}

/// Backend trait for generated artifact storage.
#[async_trait]
pub trait ArtifactStoreBackend: Send + Sync {
    async fn put_quiz(&self, quiz: Quiz) -> Result<(), StoreError>;

    async fn put_summary(&self, summary: Summary) -> Result<(), StoreError>;
}
