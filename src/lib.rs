// src/lib.rs

//! # Interval Gate
//!
//! An in-process gate that lets a `(call_id, function_id)` pair through at most
//! once per time window. Use it to suppress duplicate polling or fetches of the
//! same logical operation.
//!
//! ## Quick Example
//!
//! ```rust
//! use interval_gate::{IntervalGate, IntervalGateConfig, LookupPolicy, SystemClock};
//!
//! let config = IntervalGateConfig::new(60_000).lookup_policy(LookupPolicy::FullScan);
//! let gate = IntervalGate::with_config(config, SystemClock).unwrap();
//!
//! assert!(gate.should_proceed("order-1", "poll", None).unwrap());
//! assert!(!gate.should_proceed("order-1", "poll", None).unwrap());
//!
//! let decision = gate.check("order-1", "poll", None).unwrap();
//! if !decision.allowed {
//!     println!("Skipped - retry after {}ms", decision.retry_after_ms.unwrap_or(0));
//! }
//! ```

// private modules
mod clock;
mod config;
mod errors;
mod gate;
mod store;

// public API exports
pub use clock::{Clock, ClockError, SystemClock};
pub use config::{DEFAULT_INTERVAL_MS, IntervalGateConfig, LookupPolicy};
pub use errors::IntervalGateError;
pub use gate::{GateDecision, IntervalGate};
pub use store::CallRecord;
