//! Request counter shared by the services.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Counts service-level operations across every resource.
///
/// Clones share the same count.
#[derive(Debug, Clone, Default)]
pub struct RequestCounter {
    count: Arc<AtomicU64>,
}

impl RequestCounter {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count and returns the new value.
    pub fn increment(&self) -> u64 {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Returns the current count.
    pub fn get(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }

    /// Resets the count to zero.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_increment_and_get() {
        let counter = RequestCounter::new();
        assert_eq!(counter.get(), 0);
        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn test_reset() {
        let counter = RequestCounter::new();
        counter.increment();
        counter.reset();
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_clones_share_count() {
        let counter = RequestCounter::new();
        let other = counter.clone();
        other.increment();
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        let counter = RequestCounter::new();
        let threads = 8;
        let per_thread = 1_000;

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let counter = counter.clone();
                thread::spawn(move || {
                    for _ in 0..per_thread {
                        counter.increment();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counter.get(), threads * per_thread);
    }
}
