// In-memory storage backend for tests and embedding hosts

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

use super::traits::{ArtifactStoreBackend, SegmentStoreBackend, StoreError};
use crate::features::TranscriptSegment;
use crate::generator::{Quiz, Summary};

/// Keeps everything in process memory. Cheap to clone-share via Arc;
/// suitable for tests and for hosts that persist elsewhere.
#[derive(Default)]
pub struct MemoryStore {
    segments: RwLock<HashMap<Uuid, Vec<TranscriptSegment>>>,
    quizzes: RwLock<Vec<Quiz>>,
    summaries: RwLock<Vec<Summary>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiz_count(&self) -> usize {
        self.quizzes.read().len()
    }

    pub fn summary_count(&self) -> usize {
        self.summaries.read().len()
    }

    pub fn quizzes(&self) -> Vec<Quiz> {
        self.quizzes.read().clone()
    }

    pub fn summaries(&self) -> Vec<Summary> {
        self.summaries.read().clone()
    }
}

#[async_trait]
impl SegmentStoreBackend for MemoryStore {
    async fn append_segment(&self, segment: TranscriptSegment) -> Result<(), StoreError> {
        self.segments
            .write()
            .entry(segment.session_id)
            .or_default()
            .push(segment);
        Ok(())
    }

    async fn segments_for_session(
        &self,
        session_id: Uuid,
    ) -> Result<Vec<TranscriptSegment>, StoreError> {
        Ok(self
            .segments
            .read()
            .get(&session_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl ArtifactStoreBackend for MemoryStore {
    async fn put_quiz(&self, quiz: Quiz) -> Result<(), StoreError> {
        self.quizzes.write().push(quiz);
        Ok(())
    }

    async fn put_summary(&self, summary: Summary) -> Result<(), StoreError> {
        self.summaries.write().push(summary);
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
