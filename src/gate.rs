// src/gate.rs

// interval-gate: permit a (call, function) pair at most once per time window.

// dependencies
use crate::clock::{Clock, SystemClock};
use crate::config::{IntervalGateConfig, LookupPolicy};
use crate::errors::IntervalGateError;
use crate::store::{self, CallRecord};
use dashmap::DashMap;
use tracing::{debug, trace, warn};

/// The main IntervalGate model.
/// Keys are call ids; each maps to the sequence of per-function records for that call.
/// C is the clock type, defaulting to SystemClock.
/// A decision for one call id runs while holding that key's `DashMap` entry guard,
/// so racing callers on the same pair cannot both be permitted within one window.
#[derive(Debug)]
pub struct IntervalGate<C = SystemClock>
where
    C: Clock,
{
    default_interval_ms: u64,
    lookup_policy: LookupPolicy,
    store: DashMap<String, Vec<CallRecord>>,
    clock: C,
}

impl IntervalGate<SystemClock> {
    /// Gate on the wall clock with a one-minute default interval and full-scan lookup.
    pub fn new() -> Self {
        Self::from_parts(IntervalGateConfig::default(), SystemClock)
    }
}

impl Default for IntervalGate<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

// methods for the IntervalGate type
impl<C> IntervalGate<C>
where
    C: Clock,
{
    fn from_parts(config: IntervalGateConfig, clock: C) -> Self {
        Self {
            default_interval_ms: config.default_interval_ms,
            lookup_policy: config.lookup_policy,
            store: DashMap::new(),
            clock,
        }
    }

    // method to create a new gate from a config object
    pub fn with_config(config: IntervalGateConfig, clock: C) -> Result<Self, IntervalGateError> {
        config.validate()?;
        Ok(Self::from_parts(config, clock))
    }

    // accessor method to return the interval used when a call supplies none
    pub fn default_interval_ms(&self) -> u64 {
        self.default_interval_ms
    }

    // accessor method to return the lookup policy
    pub fn lookup_policy(&self) -> LookupPolicy {
        self.lookup_policy
    }

    /// Returns the record for `function_id` under `call_id`, matched according
    /// to the configured [`LookupPolicy`].
    pub fn find_record(
        &self,
        call_id: &str,
        function_id: &str,
    ) -> Result<Option<CallRecord>, IntervalGateError> {
        validate_ids(call_id, function_id)?;
        Ok(self.store.get(call_id).and_then(|records| {
            store::find(records.value(), function_id, self.lookup_policy).cloned()
        }))
    }

    /// Inserts `record` under `call_id`, replacing any record with the same function id.
    pub fn record_call(&self, call_id: &str, record: CallRecord) -> Result<(), IntervalGateError> {
        validate_ids(call_id, &record.function_id)?;
        let mut records = self.store.entry(call_id.to_owned()).or_default();
        let function_id = record.function_id.clone();
        if store::upsert(records.value_mut(), record) {
            trace!(call_id, function_id = %function_id, "replaced call record");
        }
        Ok(())
    }

    /// Returns true and records the current time if more than `interval_ms`
    /// (or the configured default) has elapsed since the pair was last permitted.
    pub fn should_proceed(
        &self,
        call_id: &str,
        function_id: &str,
        interval_ms: Option<u64>,
    ) -> Result<bool, IntervalGateError> {
        self.check(call_id, function_id, interval_ms)
            .map(|decision| decision.allowed)
    }

    /// Same decision as [`should_proceed`](Self::should_proceed), with metadata.
    pub fn check(
        &self,
        call_id: &str,
        function_id: &str,
        interval_ms: Option<u64>,
    ) -> Result<GateDecision, IntervalGateError> {
        validate_ids(call_id, function_id)?;
        let interval_ms = interval_ms.unwrap_or(self.default_interval_ms);
        let now = self.clock.now().inspect_err(|err| {
            warn!(call_id, function_id, error = %err, "clock unavailable, gate not evaluated");
        })?;

        // the guard is held until the decision is recorded
        let mut records = self.store.entry(call_id.to_owned()).or_default();
        let previous = store::find(records.value(), function_id, self.lookup_policy)
            .map(|record| record.last_fetch)
            .filter(|&last_fetch| last_fetch != 0);

        if let Some(last_fetch) = previous {
            // a clock that moved backwards counts as no time elapsed
            let elapsed = now.saturating_sub(last_fetch);
            if elapsed <= interval_ms {
                let retry_after_ms = (interval_ms - elapsed).saturating_add(1);
                debug!(call_id, function_id, interval_ms, elapsed, "call denied");
                return Ok(GateDecision {
                    allowed: false,
                    retry_after_ms: Some(retry_after_ms),
                    last_fetch_ms: last_fetch,
                });
            }
        }

        if store::upsert(records.value_mut(), CallRecord::new(function_id, now)) {
            trace!(call_id, function_id, "replaced call record");
        }
        debug!(call_id, function_id, interval_ms, "call permitted");

        Ok(GateDecision {
            allowed: true,
            retry_after_ms: None,
            last_fetch_ms: now,
        })
    }

    /// Snapshot of the records held for `call_id`, in store order.
    pub fn records(&self, call_id: &str) -> Vec<CallRecord> {
        self.store
            .get(call_id)
            .map(|records| records.value().clone())
            .unwrap_or_default()
    }

    /// Number of distinct call ids seen so far.
    pub fn call_count(&self) -> usize {
        self.store.len()
    }
}

fn validate_ids(call_id: &str, function_id: &str) -> Result<(), IntervalGateError> {
    if call_id.is_empty() {
        warn!("rejected gate call with empty call_id");
        return Err(IntervalGateError::InvalidArgument("call_id"));
    }
    if function_id.is_empty() {
        warn!(call_id, "rejected gate call with empty function_id");
        return Err(IntervalGateError::InvalidArgument("function_id"));
    }
    Ok(())
}

/// Result of a gate decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDecision {
    /// Whether the call should proceed
    pub allowed: bool,
    /// Milliseconds until the pair would be permitted again (when denied)
    pub retry_after_ms: Option<u64>,
    /// Timestamp on record for the pair after this decision (milliseconds since epoch)
    pub last_fetch_ms: u64,
}
