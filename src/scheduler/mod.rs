//! Cron jobs for automated tasks.
//!
//! The only scheduled task is the mute expiry sweep. The scheduler owns the
//! cadence; the sweep itself only compares records against the "now" it is
//! handed, which keeps expiry logic testable without a clock.

pub mod mute_expiry;
