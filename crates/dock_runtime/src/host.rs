//! Host boundary for the dock runtime: effect execution against injected [`HostServices`].

use std::rc::Rc;

use leptos::logging;
use platform_host::{HostServices, LaunchService};

use crate::{
    catalog::AppDefinition,
    model::{DockSettings, DockState},
    persistence,
    reducer::DockEffect,
};

#[derive(Clone)]
/// Host services plus the dock settings that parameterize them.
pub struct DockHostContext {
    services: HostServices,
    settings: DockSettings,
}

impl DockHostContext {
    /// Creates a host context from injected services.
    pub fn new(services: HostServices, settings: DockSettings) -> Self {
        Self { services, settings }
    }

    /// Dock settings in effect.
    pub fn settings(&self) -> &DockSettings {
        &self.settings
    }

    /// Builds the startup state from `catalog` and stored preferences.
    pub fn load_state(&self, catalog: &[AppDefinition]) -> DockState {
        persistence::load_dock_state(self.services.prefs.as_ref(), catalog, &self.settings)
    }

    /// Executes one reducer-emitted effect. Failures are logged and never surfaced.
    pub fn run_dock_effect(&self, state: &DockState, effect: DockEffect) {
        match effect {
            DockEffect::PersistPreferences => {
                if let Err(err) = persistence::persist_dock_state(
                    self.services.prefs.as_ref(),
                    &self.settings.storage_key,
                    state,
                ) {
                    logging::warn!("persist dock preferences failed: {err}");
                }
            }
            DockEffect::NavigateCurrent(uri) => {
                if let Err(err) = self.services.launch.navigate_current(&uri) {
                    logging::warn!("scheme launch failed for `{uri}`: {err}");
                }
            }
            DockEffect::OpenNewContext(url) => {
                open_in_new_context(self.services.launch.as_ref(), &url);
            }
            DockEffect::ScheduleFallback { delay, url } => {
                let launch = Rc::clone(&self.services.launch);
                let scheduled = self.services.timers.set_timeout_once(
                    delay,
                    Box::new(move || open_in_new_context(launch.as_ref(), &url)),
                );
                if let Err(err) = scheduled {
                    logging::warn!("scheduling launch fallback failed: {err}");
                }
            }
        }
    }
}

fn open_in_new_context(launch: &dyn LaunchService, url: &str) {
    if let Err(err) = launch.open_new_context(url) {
        logging::warn!("open url failed for `{url}`: {err}");
    }
}
