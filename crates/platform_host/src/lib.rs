//! Typed host-domain contracts shared by the dock runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services: preference storage, launch
//! primitives, and one-shot timers. Concrete browser adapters live in `platform_host_web`; the
//! in-memory implementations here back tests and stub builds.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod launch;
pub mod storage;
pub mod timer;

pub use host::{HostServices, HostStrategy};
pub use launch::{LaunchRecord, LaunchService, NoopLaunchService, RecordingLaunchService};
pub use storage::prefs::{MemoryPrefsStore, NoopPrefsStore, PrefsStore};
pub use timer::{DeferredTask, ManualTimerService, NoopTimerService, TimerService};
