//! Compiled-in catalog of launchable applications.
//!
//! The catalog is generated at build time from `catalog.toml` and is the only source of truth
//! for which app ids exist.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One launchable application known to the dock.
pub struct AppDefinition {
    /// Stable key; the only field used to match stored preferences across catalog versions.
    pub id: &'static str,
    /// Display label.
    pub name: &'static str,
    /// Icon asset path.
    pub icon: &'static str,
    /// Custom URI scheme token for the native handler. `None` means web-only.
    pub scheme: Option<&'static str>,
    /// Scheme-relative path appended after `//` when building the launch URI.
    pub path: Option<&'static str>,
    /// Web URL opened when no native handler responds, or when there is no scheme.
    pub fallback_url: Option<&'static str>,
    /// Android package id of the native app. Informational only.
    pub package: Option<&'static str>,
    /// Android activity class hint. Informational only.
    pub activity_class: Option<&'static str>,
    /// Whether the tile is visible out of the box.
    pub default_enabled: bool,
}

impl AppDefinition {
    /// Builds a web-only definition, enabled by default.
    pub const fn web(id: &'static str, name: &'static str, fallback_url: &'static str) -> Self {
        Self {
            id,
            name,
            icon: "",
            scheme: None,
            path: None,
            fallback_url: Some(fallback_url),
            package: None,
            activity_class: None,
            default_enabled: true,
        }
    }

    /// Returns a copy with `scheme` set.
    pub const fn with_scheme(mut self, scheme: &'static str) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Returns a copy with `default_enabled` set.
    pub const fn enabled_by_default(mut self, enabled: bool) -> Self {
        self.default_enabled = enabled;
        self
    }
}

include!(concat!(env!("OUT_DIR"), "/dock_catalog_generated.rs"));

/// Returns the shipped catalog in its authoritative order.
pub fn app_catalog() -> &'static [AppDefinition] {
    &CATALOG
}

/// Finds a catalog definition by id.
pub fn app_definition(id: &str) -> Option<&'static AppDefinition> {
    app_catalog().iter().find(|app| app.id == id)
}
