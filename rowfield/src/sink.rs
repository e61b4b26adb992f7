//! Observers for recovered conversion failures.

use parking_lot::Mutex;

use crate::target::TargetType;

/// A conversion that failed and was replaced by a default value.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionFailure {
    /// Field position.
    pub position: usize,
    /// Requested type.
    pub target: TargetType,
    /// Error message.
    pub error: String,
}

/// Notified every time the accessor recovers from a failed conversion.
pub trait FailureSink: Send + Sync {
    fn conversion_failed(&self, failure: &ConversionFailure);
}

/// Ignores failures.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl FailureSink for NoopSink {
    fn conversion_failed(&self, _failure: &ConversionFailure) {}
}

/// Keeps failures in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    failures: Mutex<Vec<ConversionFailure>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded failures, oldest first.
    pub fn failures(&self) -> Vec<ConversionFailure> {
        self.failures.lock().clone()
    }

    /// Take recorded failures, leaving the sink empty.
    pub fn drain(&self) -> Vec<ConversionFailure> {
        std::mem::take(&mut *self.failures.lock())
    }

    pub fn len(&self) -> usize {
        self.failures.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FailureSink for MemorySink {
    fn conversion_failed(&self, failure: &ConversionFailure) {
        self.failures.lock().push(failure.clone());
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::target::Kind;

    #[test]
    fn test_memory_sink() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        let failure = ConversionFailure {
            position: 2,
            target: TargetType::new(Kind::Integer),
            error: "not an integer".into(),
        };
        sink.conversion_failed(&failure);
        NoopSink.conversion_failed(&failure);

        assert_eq!(sink.failures(), vec![failure.clone()]);
        assert_eq!(sink.drain(), vec![failure]);
        assert!(sink.is_empty());
    }
}
