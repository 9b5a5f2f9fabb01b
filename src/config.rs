// src/config.rs

//! Configuration types for the interval gate

// dependencies
use crate::errors::IntervalGateError;

/// Default window between two permitted calls of the same pair: one minute.
pub const DEFAULT_INTERVAL_MS: u64 = 60_000;

/// How `find_record` matches a function id inside a call's record sequence.
///
/// `FirstRecordOnly` inspects only the first record and reports a miss as soon
/// as it does not match, even if a matching record sits further down the
/// sequence. A call group that alternates between several functions will then
/// see every function but the first one permitted on each call. It is kept for
/// callers that depend on that historical behavior; `FullScan` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupPolicy {
    FirstRecordOnly,
    #[default]
    FullScan,
}

/// Configuration for gate behavior
#[derive(Debug, Clone)]
pub struct IntervalGateConfig {
    pub(crate) default_interval_ms: u64,
    pub(crate) lookup_policy: LookupPolicy,
}

impl IntervalGateConfig {
    /// Create a new configuration with the given default interval and a full-scan lookup
    pub fn new(default_interval_ms: u64) -> Self {
        Self {
            default_interval_ms,
            lookup_policy: LookupPolicy::default(),
        }
    }

    /// Builder-style: set the interval used when a call supplies none
    pub fn interval(mut self, default_interval_ms: u64) -> Self {
        self.default_interval_ms = default_interval_ms;
        self
    }

    /// Builder-style: set the lookup policy
    pub fn lookup_policy(mut self, lookup_policy: LookupPolicy) -> Self {
        self.lookup_policy = lookup_policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), IntervalGateError> {
        if self.default_interval_ms == 0 {
            return Err(IntervalGateError::InvalidInterval);
        }
        Ok(())
    }
}

impl Default for IntervalGateConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_MS)
    }
}
