//! Typed host-service contracts shared by the desktop runtime and browser adapters.
//!
//! This crate is the API-first boundary for the few platform services the desktop session
//! touches: durable preference flags and UI sound cues. Concrete browser adapters live in
//! `platform_host_web`; the in-memory and no-op implementations here back headless composition
//! and tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host service bundle injected into the desktop runtime.
pub mod host;
/// Window lifecycle sound cues and their players.
pub mod sound;
/// Preference flag storage contracts.
pub mod storage;

pub use host::{HostServices, HostStrategy};
pub use sound::{NoopSoundCuePlayer, RecordingSoundCuePlayer, SoundCue, SoundCuePlayer};
pub use storage::prefs::{MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture};
