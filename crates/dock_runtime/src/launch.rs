//! Click-to-launch resolution: native scheme first, web fallback second.
//!
//! A scheme navigation gives no success signal, so when a fallback URL exists it is scheduled
//! unconditionally and never cancelled. A native handler that did take the navigation may still
//! see a fallback tab open afterwards.

use std::time::Duration;

use crate::catalog::AppDefinition;

#[derive(Debug, Clone, PartialEq, Eq)]
/// What a single click on a tile does.
pub enum LaunchPlan {
    /// Navigate the current context to `uri`; optionally open `fallback` later in a new context.
    Scheme {
        /// Native launch URI.
        uri: String,
        /// Deferred web fallback, if the app has one.
        fallback: Option<DeferredOpen>,
    },
    /// Open `url` in a new context right away.
    Direct {
        /// Web URL.
        url: String,
    },
    /// Neither scheme nor fallback: the click does nothing.
    Inert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A one-shot new-context open scheduled after `delay`.
pub struct DeferredOpen {
    /// Delay before opening.
    pub delay: Duration,
    /// URL to open.
    pub url: String,
}

/// Builds `<scheme>://<path>`, or `<scheme>://` when the path is absent or empty.
pub fn launch_uri(scheme: &str, path: Option<&str>) -> String {
    match path.filter(|path| !path.is_empty()) {
        Some(path) => format!("{scheme}://{path}"),
        None => format!("{scheme}://"),
    }
}

/// Resolves a click on `app` into a [`LaunchPlan`].
pub fn plan_launch(app: &AppDefinition, fallback_delay: Duration) -> LaunchPlan {
    let scheme = app.scheme.filter(|scheme| !scheme.is_empty());
    let fallback_url = app.fallback_url.filter(|url| !url.is_empty());

    match (scheme, fallback_url) {
        (Some(scheme), fallback_url) => LaunchPlan::Scheme {
            uri: launch_uri(scheme, app.path),
            fallback: fallback_url.map(|url| DeferredOpen {
                delay: fallback_delay,
                url: url.to_string(),
            }),
        },
        (None, Some(url)) => LaunchPlan::Direct {
            url: url.to_string(),
        },
        (None, None) => LaunchPlan::Inert,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const DELAY: Duration = Duration::from_millis(700);

    #[test]
    fn empty_path_yields_bare_authority() {
        assert_eq!(launch_uri("spotify", Some("")), "spotify://");
        assert_eq!(launch_uri("spotify", None), "spotify://");
    }

    #[test]
    fn non_empty_path_is_appended_after_slashes() {
        assert_eq!(launch_uri("music", Some("album/1")), "music://album/1");
    }

    #[test]
    fn scheme_with_fallback_defers_the_web_open() {
        let telegram =
            AppDefinition::web("telegram", "Telegram", "https://web.telegram.org").with_scheme("tg");
        assert_eq!(
            plan_launch(&telegram, DELAY),
            LaunchPlan::Scheme {
                uri: "tg://".to_string(),
                fallback: Some(DeferredOpen {
                    delay: DELAY,
                    url: "https://web.telegram.org".to_string(),
                }),
            }
        );
    }

    #[test]
    fn scheme_without_fallback_only_navigates() {
        let app = AppDefinition {
            fallback_url: None,
            ..AppDefinition::web("native", "Native", "").with_scheme("native")
        };
        assert_eq!(
            plan_launch(&app, DELAY),
            LaunchPlan::Scheme {
                uri: "native://".to_string(),
                fallback: None,
            }
        );
    }

    #[test]
    fn no_scheme_opens_fallback_directly() {
        let rutube = AppDefinition::web("rutube", "RuTube", "https://rutube.ru");
        assert_eq!(
            plan_launch(&rutube, DELAY),
            LaunchPlan::Direct {
                url: "https://rutube.ru".to_string(),
            }
        );
    }

    #[test]
    fn empty_scheme_and_url_make_an_inert_tile() {
        let app = AppDefinition {
            scheme: Some(""),
            ..AppDefinition::web("blank", "Blank", "")
        };
        assert_eq!(plan_launch(&app, DELAY), LaunchPlan::Inert);
    }

    #[test]
    fn scheme_path_from_definition_is_used() {
        let app = AppDefinition {
            path: Some("album/1"),
            ..AppDefinition::web("apple-music", "Apple Music", "https://music.apple.com")
                .with_scheme("music")
        };
        let LaunchPlan::Scheme { uri, .. } = plan_launch(&app, DELAY) else {
            panic!("expected scheme launch");
        };
        assert_eq!(uri, "music://album/1");
    }
}
