pub mod catalog;
pub mod components;
pub mod effect_executor;
pub mod host;
pub mod launch;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod runtime_context;

pub use catalog::{app_catalog, app_definition, AppDefinition};
pub use components::{AppDock, DockSettingsPanel};
pub use host::DockHostContext;
pub use launch::{launch_uri, plan_launch, DeferredOpen, LaunchPlan};
pub use model::*;
pub use persistence::{
    decode_preferences, encode_preferences, load_dock_state, merge_preferences, persist_dock_state,
    read_preferences, PrefsError, StoredPreference,
};
pub use reducer::{reduce_dock, DockAction, DockEffect};
pub use runtime_context::{use_dock_runtime, DockProvider, DockRuntimeContext};
