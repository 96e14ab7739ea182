// Storage module - persistence boundary for segments and artifacts

mod memory;
mod traits;

pub use memory::MemoryStore;
pub use traits::{ArtifactStoreBackend, SegmentStoreBackend, StoreError};
