//! Book identifier generation.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::BookId;

/// Produces fresh, unique, opaque book identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> BookId;
}

/// Time-ordered UUIDv7 identifiers. Lexicographic order follows creation
/// order to millisecond precision, which keeps `ORDER BY id` meaningful.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn next_id(&self) -> BookId {
        uuid::Uuid::now_v7().to_string()
    }
}

/// Zero-padded counter (`"0000000001"`, `"0000000002"`, ...) for tests that
/// need predictable ids.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> BookId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{n:010}")
    }
}
