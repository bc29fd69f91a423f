//! Durable client-side storage contracts.

/// Raw-string preference store trait with no-op and in-memory stores.
pub mod prefs;
