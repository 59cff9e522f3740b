use std::rc::Rc;

use platform_host::{
    HostServices, HostStrategy, LaunchService, MemoryPrefsStore, NoopLaunchService,
    NoopTimerService, PrefsStore, TimerService,
};

use crate::{WebLaunchService, WebPrefsStore, WebTimerService};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Builds the preferences backend for the compile-time selected host strategy.
pub fn prefs_store() -> Rc<dyn PrefsStore> {
    match selected_host_strategy() {
        HostStrategy::Browser => Rc::new(WebPrefsStore),
        HostStrategy::Stub => Rc::new(MemoryPrefsStore::default()),
    }
}

/// Builds the launch backend for the compile-time selected host strategy.
pub fn launch_service() -> Rc<dyn LaunchService> {
    match selected_host_strategy() {
        HostStrategy::Browser => Rc::new(WebLaunchService),
        HostStrategy::Stub => Rc::new(NoopLaunchService),
    }
}

/// Builds the timer backend for the compile-time selected host strategy.
pub fn timer_service() -> Rc<dyn TimerService> {
    match selected_host_strategy() {
        HostStrategy::Browser => Rc::new(WebTimerService),
        HostStrategy::Stub => Rc::new(NoopTimerService),
    }
}

/// Assembles the full [`HostServices`] bundle handed to the dock runtime.
pub fn build_host_services() -> HostServices {
    HostServices::new(
        prefs_store(),
        launch_service(),
        timer_service(),
        selected_host_strategy(),
    )
}
