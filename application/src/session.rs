//! Per-session generation state.
//!
//! A [`GenerationSession`] owns the mutable state of one user session: the
//! in-flight flag and the bounded history. Sessions share nothing, so any
//! number of them can live in one process.

use imagine_domain::{GenerationResult, HistoryCache, HistoryEntry};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// State of one user session.
#[derive(Debug, Default)]
pub struct GenerationSession {
    in_flight: AtomicBool,
    history: Mutex<HistoryCache>,
}

impl GenerationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a generation is currently dispatched for this session
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Claim the session for one generation.
    ///
    /// Returns `None` if another generation already holds it. The claim is
    /// released when the guard drops, including when the owning future is
    /// cancelled.
    pub(crate) fn try_begin(&self) -> Option<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard { session: self })
    }

    /// History entries, most recent first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.lock_history().list()
    }

    /// History entry at `index` in most-recent-first order.
    pub fn history_entry(&self, index: usize) -> Option<HistoryEntry> {
        self.lock_history().get(index).cloned()
    }

    pub fn history_len(&self) -> usize {
        self.lock_history().len()
    }

    /// The most recent successful result, if any.
    pub fn latest(&self) -> Option<GenerationResult> {
        self.lock_history()
            .latest()
            .map(|entry| entry.result().clone())
    }

    pub fn clear_history(&self) {
        self.lock_history().clear();
        debug!("Session history cleared");
    }

    /// Store a successful result.
    pub(crate) fn record(&self, result: GenerationResult) {
        if let Some(evicted) = self.lock_history().add(result) {
            debug!(
                "History full, evicted entry #{} ({})",
                evicted.sequence(),
                evicted.result().prompt
            );
        }
    }

    // The cache is only touched by short synchronous calls, so a poisoned
    // lock still holds a consistent value.
    fn lock_history(&self) -> MutexGuard<'_, HistoryCache> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Marks a session as busy for as long as it lives.
#[derive(Debug)]
pub(crate) struct InFlightGuard<'a> {
    session: &'a GenerationSession,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.session.in_flight.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imagine_domain::{GeneratedImage, GenerationRequest, ImageFormat, ModelId};

    fn result(prompt: &str) -> GenerationResult {
        let request = GenerationRequest::try_new(prompt, "None").unwrap();
        let composed = request.compose();
        GenerationResult::new(
            request,
            composed,
            GeneratedImage::new(vec![1], ImageFormat::Png, 1, 1),
            ModelId::default(),
        )
    }

    #[test]
    fn test_new_session_is_idle_and_empty() {
        let session = GenerationSession::new();
        assert!(!session.is_in_flight());
        assert_eq!(session.history_len(), 0);
        assert!(session.latest().is_none());
    }

    #[test]
    fn test_second_claim_is_rejected_until_release() {
        let session = GenerationSession::new();
        let guard = session.try_begin().unwrap();
        assert!(session.is_in_flight());
        assert!(session.try_begin().is_none());

        drop(guard);
        assert!(!session.is_in_flight());
        assert!(session.try_begin().is_some());
    }

    #[test]
    fn test_record_and_clear() {
        let session = GenerationSession::new();
        session.record(result("first"));
        session.record(result("second"));

        assert_eq!(session.history_len(), 2);
        assert_eq!(session.latest().unwrap().prompt, "second");
        assert_eq!(session.history_entry(1).unwrap().result().prompt, "first");

        session.clear_history();
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_sessions_are_independent() {
        let a = GenerationSession::new();
        let b = GenerationSession::new();
        let _guard = a.try_begin().unwrap();
        a.record(result("only in a"));

        assert!(!b.is_in_flight());
        assert!(b.try_begin().is_some());
        assert!(b.history().is_empty());
    }
}
