//! Matrix configuration
//!
//! Controls when pending write-proxy cells are resolved.

/// When pending cells are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompactionPolicy {
    /// Resolve only before `size`/`rows`/`cols` or an explicit `compact()`
    #[default]
    Deferred,
    /// Also resolve before a write-proxy access once `threshold` cells are
    /// pending. A threshold of 0 resolves before every write-proxy access.
    Eager { threshold: usize },
}

/// Configuration for a [`Matrix`](crate::Matrix)
#[derive(Debug, Clone)]
pub struct MatrixConfig {
    /// Pending-cell resolution policy
    pub compaction: CompactionPolicy,
    /// Initial capacity of the pending set
    pub pending_capacity: usize,
}

impl MatrixConfig {
    /// Config that resolves pending cells before every write-proxy access
    pub fn eager() -> Self {
        Self::default().with_compaction(CompactionPolicy::Eager { threshold: 0 })
    }

    /// Set the compaction policy
    pub fn with_compaction(mut self, compaction: CompactionPolicy) -> Self {
        self.compaction = compaction;
        self
    }

    /// Set the initial pending set capacity
    pub fn with_pending_capacity(mut self, pending_capacity: usize) -> Self {
        self.pending_capacity = pending_capacity;
        self
    }

    /// Whether a write-proxy access should compact first
    pub fn should_compact(&self, pending: usize) -> bool {
        match self.compaction {
            CompactionPolicy::Deferred => false,
            CompactionPolicy::Eager { threshold } => pending >= threshold.max(1),
        }
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            compaction: CompactionPolicy::Deferred,
            pending_capacity: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_compact() {
        let deferred = MatrixConfig::default();
        assert!(!deferred.should_compact(0));
        assert!(!deferred.should_compact(1_000));

        let eager = MatrixConfig::eager();
        assert!(!eager.should_compact(0));
        assert!(eager.should_compact(1));

        let batched = MatrixConfig::default()
            .with_compaction(CompactionPolicy::Eager { threshold: 8 })
            .with_pending_capacity(64);
        assert!(!batched.should_compact(7));
        assert!(batched.should_compact(8));
        assert_eq!(batched.pending_capacity, 64);
    }
}
