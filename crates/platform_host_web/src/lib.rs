//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate wires `window.localStorage` preferences and Web Audio sound cues into the
//! [`platform_host::HostServices`] bundle. On non-wasm targets every adapter degrades to a
//! silent no-op so the workspace still builds and tests natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
/// Web Audio synthesized sound cues.
pub mod sound;
/// `localStorage`-backed preference flags.
pub mod storage;

pub use adapters::{
    build_host_services, host_strategy_name, prefs_store, selected_host_strategy,
    sound_cue_player, PrefsStoreAdapter, SoundCuePlayerAdapter,
};
pub use sound::WebSoundCuePlayer;
pub use storage::local_prefs::WebPrefsStore;
