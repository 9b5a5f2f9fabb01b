// src/store.rs

// per-call record sequences and the lookup / upsert rules applied to them

// dependencies
use crate::config::LookupPolicy;

/// The last time a function under a call was permitted to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    pub function_id: String,
    /// Milliseconds since the Unix epoch. Zero means "never".
    pub last_fetch: u64,
}

impl CallRecord {
    pub fn new(function_id: impl Into<String>, last_fetch: u64) -> Self {
        Self {
            function_id: function_id.into(),
            last_fetch,
        }
    }
}

// find the record for `function_id` in a call's sequence according to the policy
pub(crate) fn find<'a>(
    records: &'a [CallRecord],
    function_id: &str,
    policy: LookupPolicy,
) -> Option<&'a CallRecord> {
    match policy {
        LookupPolicy::FirstRecordOnly => records
            .first()
            .filter(|record| record.function_id == function_id),
        LookupPolicy::FullScan => records
            .iter()
            .find(|record| record.function_id == function_id),
    }
}

// replace any record with the same function id, then append the new one
// returns true if an existing record was replaced
pub(crate) fn upsert(records: &mut Vec<CallRecord>, record: CallRecord) -> bool {
    let before = records.len();
    records.retain(|existing| existing.function_id != record.function_id);
    let replaced = records.len() != before;
    records.push(record);
    replaced
}
