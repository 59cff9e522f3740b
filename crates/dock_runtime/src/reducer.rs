//! Reducer actions, side-effect intents, and transition logic for the dock runtime.

use std::time::Duration;

use crate::launch::{plan_launch, LaunchPlan};
use crate::model::{DockSettings, DockState, MoveDirection};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_dock`].
pub enum DockAction {
    /// State was just rebuilt from storage at startup.
    Hydrate,
    /// Flip the enabled flag of one app.
    Toggle {
        /// Target app id.
        app_id: String,
    },
    /// Swap one app with its neighbour.
    Move {
        /// Target app id.
        app_id: String,
        /// Which neighbour.
        direction: MoveDirection,
    },
    /// The user clicked a tile.
    Launch {
        /// Clicked app id.
        app_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_dock`] for the runtime to execute.
pub enum DockEffect {
    /// Replace the stored blob with the current list.
    PersistPreferences,
    /// Direct the current browsing context to a native launch URI.
    NavigateCurrent(String),
    /// Open a URL in a new browsing context now.
    OpenNewContext(String),
    /// Open a URL in a new browsing context after `delay`. Never cancelled.
    ScheduleFallback {
        /// Delay before opening.
        delay: Duration,
        /// URL to open.
        url: String,
    },
}

/// Applies a [`DockAction`] and collects resulting side effects.
///
/// Invalid targets (unknown ids, boundary moves) are silent no-ops and emit nothing.
pub fn reduce_dock(
    state: &mut DockState,
    settings: &DockSettings,
    action: DockAction,
) -> Vec<DockEffect> {
    let mut effects = Vec::new();
    match action {
        DockAction::Hydrate => effects.push(DockEffect::PersistPreferences),
        DockAction::Toggle { app_id } => {
            if state.toggle(&app_id) {
                effects.push(DockEffect::PersistPreferences);
            }
        }
        DockAction::Move { app_id, direction } => {
            if state.move_entry(&app_id, direction) {
                effects.push(DockEffect::PersistPreferences);
            }
        }
        DockAction::Launch { app_id } => {
            if let Some(entry) = state.entry(&app_id) {
                match plan_launch(&entry.app, settings.fallback_delay) {
                    LaunchPlan::Scheme { uri, fallback } => {
                        effects.push(DockEffect::NavigateCurrent(uri));
                        if let Some(fallback) = fallback {
                            effects.push(DockEffect::ScheduleFallback {
                                delay: fallback.delay,
                                url: fallback.url,
                            });
                        }
                    }
                    LaunchPlan::Direct { url } => effects.push(DockEffect::OpenNewContext(url)),
                    LaunchPlan::Inert => {}
                }
            }
        }
    }
    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::AppDefinition;

    const CATALOG: [AppDefinition; 4] = [
        AppDefinition::web("telegram", "Telegram", "https://web.telegram.org").with_scheme("tg"),
        AppDefinition::web("rutube", "RuTube", "https://rutube.ru"),
        AppDefinition {
            fallback_url: None,
            ..AppDefinition::web("inert", "Inert", "")
        },
        AppDefinition::web("spotify", "Spotify", "https://open.spotify.com")
            .with_scheme("spotify")
            .enabled_by_default(false),
    ];

    fn toggle(id: &str) -> DockAction {
        DockAction::Toggle {
            app_id: id.to_string(),
        }
    }

    fn launch(id: &str) -> DockAction {
        DockAction::Launch {
            app_id: id.to_string(),
        }
    }

    #[test]
    fn toggle_persists_only_when_something_changed() {
        let mut state = DockState::from_catalog(&CATALOG);
        let settings = DockSettings::default();

        assert_eq!(
            reduce_dock(&mut state, &settings, toggle("rutube")),
            vec![DockEffect::PersistPreferences]
        );
        assert!(reduce_dock(&mut state, &settings, toggle("missing")).is_empty());
    }

    #[test]
    fn boundary_move_emits_nothing() {
        let mut state = DockState::from_catalog(&CATALOG);
        let settings = DockSettings::default();
        let before = state.clone();

        let effects = reduce_dock(
            &mut state,
            &settings,
            DockAction::Move {
                app_id: "telegram".to_string(),
                direction: MoveDirection::Up,
            },
        );
        assert!(effects.is_empty());
        assert_eq!(state, before);

        let effects = reduce_dock(
            &mut state,
            &settings,
            DockAction::Move {
                app_id: "telegram".to_string(),
                direction: MoveDirection::Down,
            },
        );
        assert_eq!(effects, vec![DockEffect::PersistPreferences]);
        assert_eq!(state.position("telegram"), Some(1));
    }

    #[test]
    fn hydrate_rewrites_storage() {
        let mut state = DockState::from_catalog(&CATALOG);
        assert_eq!(
            reduce_dock(&mut state, &DockSettings::default(), DockAction::Hydrate),
            vec![DockEffect::PersistPreferences]
        );
    }

    #[test]
    fn scheme_launch_navigates_then_schedules_one_fallback() {
        let mut state = DockState::from_catalog(&CATALOG);
        let settings = DockSettings {
            fallback_delay: Duration::from_millis(250),
            ..DockSettings::default()
        };
        assert_eq!(
            reduce_dock(&mut state, &settings, launch("telegram")),
            vec![
                DockEffect::NavigateCurrent("tg://".to_string()),
                DockEffect::ScheduleFallback {
                    delay: Duration::from_millis(250),
                    url: "https://web.telegram.org".to_string(),
                },
            ]
        );
    }

    #[test]
    fn web_only_launch_opens_immediately() {
        let mut state = DockState::from_catalog(&CATALOG);
        assert_eq!(
            reduce_dock(&mut state, &DockSettings::default(), launch("rutube")),
            vec![DockEffect::OpenNewContext("https://rutube.ru".to_string())]
        );
    }

    #[test]
    fn inert_and_unknown_launches_do_nothing() {
        let mut state = DockState::from_catalog(&CATALOG);
        let settings = DockSettings::default();
        assert!(reduce_dock(&mut state, &settings, launch("inert")).is_empty());
        assert!(reduce_dock(&mut state, &settings, launch("missing")).is_empty());
    }

    #[test]
    fn launch_does_not_mutate_state() {
        let mut state = DockState::from_catalog(&CATALOG);
        let before = state.clone();
        reduce_dock(&mut state, &DockSettings::default(), launch("spotify"));
        assert_eq!(state, before);
    }
}
