//! Runtime provider and context wiring for the dock.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and boot
//! hydration. UI composition stays in [`crate::components`].

use leptos::*;
use platform_host::HostServices;

use crate::{
    catalog::app_catalog,
    effect_executor,
    host::DockHostContext,
    model::{DockSettings, DockState},
    reducer::{reduce_dock, DockAction, DockEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading dock state and dispatching [`DockAction`] values.
pub struct DockRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<DockHostContext>,
    /// Reactive merged dock list.
    pub state: RwSignal<DockState>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<DockEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DockAction>,
}

impl DockRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DockAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DockRuntimeContext`] to descendant components and boots persisted state.
pub fn DockProvider(
    /// Injected browser or stub host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Overrides the settings generated from `catalog.toml`.
    #[prop(optional)]
    settings: Option<DockSettings>,
    children: Children,
) -> impl IntoView {
    let host = store_value(DockHostContext::new(
        host_services,
        settings.unwrap_or_default(),
    ));
    let state = create_rw_signal(host.with_value(|host| host.load_state(app_catalog())));
    let effects = create_rw_signal(Vec::<DockEffect>::new());

    let dispatch = Callback::new(move |action: DockAction| {
        let mut dock = state.get_untracked();
        let previous = dock.clone();
        let new_effects = host.with_value(|host| reduce_dock(&mut dock, host.settings(), action));

        if dock != previous {
            state.set(dock);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = DockRuntimeContext {
        host,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);
    runtime.dispatch_action(DockAction::Hydrate);

    children().into_view()
}

/// Returns the current [`DockRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DockProvider`].
pub fn use_dock_runtime() -> DockRuntimeContext {
    use_context::<DockRuntimeContext>().expect("DockRuntimeContext not provided")
}
