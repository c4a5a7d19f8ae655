use std::collections::HashSet;

use crate::types::Fingerprint;

/// Set of fingerprints already filed during this run.
///
/// Insert-only and scoped to one run; nothing is persisted and nothing is
/// ever removed. The run is single-threaded, so no synchronization is
/// needed.
#[derive(Debug, Default)]
pub struct SeenRegistry {
    seen: HashSet<Fingerprint>,
}

impl SeenRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this fingerprint has already been filed
    #[must_use]
    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.seen.contains(fingerprint)
    }

    /// Record a fingerprint as seen. Re-recording an existing value is a
    /// no-op.
    pub fn record(&mut self, fingerprint: Fingerprint) {
        self.seen.insert(fingerprint);
    }

    /// Number of distinct fingerprints recorded so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

// -- Tests --

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perceptual::AverageHash;
    use std::path::PathBuf;

    #[test]
    fn contains_after_record() {
        let mut registry = SeenRegistry::new();
        let fp = Fingerprint::Image(AverageHash(0xdead_beef));

        assert!(!registry.contains(&fp));
        registry.record(fp.clone());
        assert!(registry.contains(&fp));
    }

    #[test]
    fn re_recording_is_idempotent() {
        let mut registry = SeenRegistry::new();
        let fp = Fingerprint::Video(PathBuf::from("/input/clip.mp4"));

        registry.record(fp.clone());
        registry.record(fp.clone());
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&fp));
    }

    #[test]
    fn distinct_kinds_are_distinct_entries() {
        let mut registry = SeenRegistry::new();
        registry.record(Fingerprint::Image(AverageHash(1)));
        registry.record(Fingerprint::Video(PathBuf::from("a")));
        assert_eq!(registry.len(), 2);
    }
}
