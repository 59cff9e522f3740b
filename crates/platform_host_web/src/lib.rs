//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for preference storage, launch
//! primitives, and one-shot timers. On non-wasm targets every adapter degrades to an inert
//! fallback that reports an "unsupported" error instead of touching a browser API.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod launch;
pub mod storage;
pub mod timer;

pub use adapters::{
    build_host_services, host_strategy_name, launch_service, prefs_store, selected_host_strategy,
    timer_service,
};
pub use launch::WebLaunchService;
pub use storage::local_prefs::WebPrefsStore;
pub use timer::WebTimerService;

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn unsupported(api: &str) -> String {
    format!("{api} is only available in the browser/WASM runtime")
}
