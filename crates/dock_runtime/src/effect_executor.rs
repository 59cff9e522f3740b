//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::runtime_context::DockRuntimeContext;

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DockRuntimeContext) {
    // Clear the queue before draining so effects dispatched from inside the drain land in a fresh
    // batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            runtime.host.with_value(|host| {
                runtime
                    .state
                    .with_untracked(|state| host.run_dock_effect(state, effect));
            });
        }
    });
}
