//! Dock UI: the tile grid and the settings panel.

use leptos::*;

use crate::{
    model::{MergedEntry, MoveDirection},
    reducer::DockAction,
    runtime_context::use_dock_runtime,
};

fn tile_animation_delay(index: usize) -> String {
    format!("animation-delay: {:.2}s", index as f64 * 0.05)
}

#[component]
/// Grid of enabled tiles plus the settings toggle.
pub fn AppDock() -> impl IntoView {
    let runtime = use_dock_runtime();
    let settings_open = create_rw_signal(false);

    let visible_tiles = move || {
        runtime.state.with(|state| {
            state
                .visible()
                .copied()
                .enumerate()
                .collect::<Vec<(usize, MergedEntry)>>()
        })
    };

    view! {
        <div class="app-dock">
            <div class="app-dock-grid">
                <For
                    each=visible_tiles
                    key=|(index, entry)| (*index, entry.id())
                    let:tile
                >
                    <DockTile entry=tile.1 index=tile.0 />
                </For>
            </div>

            <button
                class="settings-btn"
                aria-label="Dock settings"
                aria-expanded=move || settings_open.get()
                on:click=move |_| settings_open.update(|open| *open = !*open)
            >
                "⚙"
            </button>

            <Show when=move || settings_open.get() fallback=|| ()>
                <DockSettingsPanel on_close=Callback::new(move |_| settings_open.set(false)) />
            </Show>
        </div>
    }
}

#[component]
fn DockTile(entry: MergedEntry, index: usize) -> impl IntoView {
    let runtime = use_dock_runtime();
    let app_id = entry.id();

    view! {
        <button
            class="app-button"
            style=tile_animation_delay(index)
            on:click=move |_| {
                runtime.dispatch_action(DockAction::Launch {
                    app_id: app_id.to_string(),
                })
            }
        >
            <img src=entry.app.icon alt=entry.app.name class="app-icon" loading="lazy" />
            <span class="app-name">{entry.app.name}</span>
        </button>
    }
}

#[component]
/// Every merged entry, enabled or not, with a visibility checkbox and reorder buttons.
pub fn DockSettingsPanel(
    /// Invoked when the panel's close button is pressed.
    on_close: Callback<()>,
) -> impl IntoView {
    let runtime = use_dock_runtime();
    let all_entries = move || runtime.state.with(|state| state.entries().to_vec());

    view! {
        <section class="settings-dialog" role="dialog" aria-labelledby="dock-settings-title">
            <header class="settings-header">
                <h2 id="dock-settings-title">"App settings"</h2>
                <button
                    class="settings-close"
                    aria-label="Close dock settings"
                    on:click=move |_| on_close.call(())
                >
                    "×"
                </button>
            </header>
            <div class="settings-list">
                <For each=all_entries key=|entry| entry.id() let:entry>
                    <DockSettingsRow entry=entry />
                </For>
            </div>
        </section>
    }
}

#[component]
fn DockSettingsRow(entry: MergedEntry) -> impl IntoView {
    let runtime = use_dock_runtime();
    let app_id = entry.id();
    let checkbox_id = format!("dock-setting-{app_id}");

    let enabled = move || {
        runtime
            .state
            .with(|state| state.entry(app_id).map(|entry| entry.enabled))
            .unwrap_or(false)
    };
    let is_first = move || runtime.state.with(|state| state.position(app_id) == Some(0));
    let is_last = move || {
        runtime
            .state
            .with(|state| state.position(app_id).map(|index| index + 1) == Some(state.len()))
    };
    let move_entry = move |direction: MoveDirection| {
        runtime.dispatch_action(DockAction::Move {
            app_id: app_id.to_string(),
            direction,
        });
    };

    view! {
        <div class="settings-item">
            <div class="settings-item-label">
                <input
                    type="checkbox"
                    id=checkbox_id.clone()
                    prop:checked=enabled
                    on:change=move |_| {
                        runtime.dispatch_action(DockAction::Toggle {
                            app_id: app_id.to_string(),
                        })
                    }
                />
                <img src=entry.app.icon alt=entry.app.name class="settings-item-icon" loading="lazy" />
                <label for=checkbox_id>{entry.app.name}</label>
            </div>
            <div class="settings-item-actions">
                <button
                    class="settings-move"
                    aria-label=format!("Move {} up", entry.app.name)
                    disabled=is_first
                    on:click=move |_| move_entry(MoveDirection::Up)
                >
                    "↑"
                </button>
                <button
                    class="settings-move"
                    aria-label=format!("Move {} down", entry.app.name)
                    disabled=is_last
                    on:click=move |_| move_entry(MoveDirection::Down)
                >
                    "↓"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_are_staggered_by_fifty_milliseconds() {
        assert_eq!(tile_animation_delay(0), "animation-delay: 0.00s");
        assert_eq!(tile_animation_delay(3), "animation-delay: 0.15s");
    }
}
