//! In-memory dead-letter sink.

use crate::events::ports::{DeadLetter, DeadLetterError, DeadLetterSink};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::sync::{Arc, RwLock};
use tracing::warn;

/// Number of dead letters kept by [`InMemoryDeadLetterSink::new`].
pub const DEFAULT_DEAD_LETTER_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1024) {
    Some(capacity) => capacity,
    None => NonZeroUsize::MIN,
};

/// Keeps the most recent dead letters in insertion order. Clones share
/// storage.
///
/// Once `capacity` letters are held, recording another evicts the oldest.
#[derive(Debug, Clone)]
pub struct InMemoryDeadLetterSink {
    entries: Arc<RwLock<VecDeque<DeadLetter>>>,
    capacity: NonZeroUsize,
}

impl Default for InMemoryDeadLetterSink {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_DEAD_LETTER_CAPACITY)
    }
}

impl InMemoryDeadLetterSink {
    /// Creates an empty sink holding up to
    /// [`DEFAULT_DEAD_LETTER_CAPACITY`] letters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sink holding up to `capacity` letters.
    #[must_use]
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::new())),
            capacity,
        }
    }

    /// Returns a snapshot of the recorded dead letters.
    #[must_use]
    pub fn entries(&self) -> Vec<DeadLetter> {
        self.entries
            .read()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Removes and returns every recorded dead letter, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<DeadLetter> {
        self.entries
            .write()
            .map(|mut entries| entries.drain(..).collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl DeadLetterSink for InMemoryDeadLetterSink {
    async fn record(&self, letter: DeadLetter) -> Result<(), DeadLetterError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|err| DeadLetterError::new(std::io::Error::other(err.to_string())))?;
        if entries.len() >= self.capacity.get() {
            if let Some(evicted) = entries.pop_front() {
                warn!(subject = %evicted.subject, "dead-letter sink full; evicting oldest entry");
            }
        }
        entries.push_back(letter);
        Ok(())
    }
}
