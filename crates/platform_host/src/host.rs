//! Shared host-bundle models for browser and stub runtime composition.

use std::rc::Rc;

use crate::{
    LaunchService, ManualTimerService, MemoryPrefsStore, PrefsStore, RecordingLaunchService,
    TimerService,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// In-memory composition with no platform side effects.
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

/// Runtime-selected host service bundle injected into the dock runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `dock_runtime`, which keeps the runtime decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Lightweight preference store.
    pub prefs: Rc<dyn PrefsStore>,
    /// Native-scheme and new-context launch primitives.
    pub launch: Rc<dyn LaunchService>,
    /// One-shot deferred task scheduling.
    pub timers: Rc<dyn TimerService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Assembles a bundle from concrete services.
    pub fn new(
        prefs: Rc<dyn PrefsStore>,
        launch: Rc<dyn LaunchService>,
        timers: Rc<dyn TimerService>,
        host_strategy: HostStrategy,
    ) -> Self {
        Self {
            prefs,
            launch,
            timers,
            host_strategy,
        }
    }

    /// Builds a stub bundle over in-memory fakes.
    ///
    /// The concrete handles are shared with the bundle so callers can seed and inspect them.
    pub fn in_memory(
        prefs: MemoryPrefsStore,
        launch: RecordingLaunchService,
        timers: ManualTimerService,
    ) -> Self {
        Self::new(
            Rc::new(prefs),
            Rc::new(launch),
            Rc::new(timers),
            HostStrategy::Stub,
        )
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_bundle_shares_fake_handles() {
        let prefs = MemoryPrefsStore::default();
        let launch = RecordingLaunchService::default();
        let timers = ManualTimerService::default();
        let services = HostServices::in_memory(prefs.clone(), launch.clone(), timers.clone());

        services.prefs.save_pref("k", "true").expect("save");
        services.launch.navigate_current("spotify://").expect("navigate");

        assert_eq!(prefs.raw("k").as_deref(), Some("true"));
        assert_eq!(launch.records().len(), 1);
        assert_eq!(services.host_strategy.as_str(), "stub");
    }
}
