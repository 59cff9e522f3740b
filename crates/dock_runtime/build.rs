use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

const CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize)]
struct DockTable {
    storage_key: String,
    fallback_delay_ms: u64,
    #[serde(default)]
    restore_stored_order: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct AppEntry {
    id: String,
    name: String,
    icon: String,
    #[serde(default)]
    scheme: Option<String>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    fallback_url: Option<String>,
    #[serde(default)]
    package: Option<String>,
    #[serde(default)]
    activity_class: Option<String>,
    #[serde(default = "default_show_on_launch")]
    show_on_launch: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    schema_version: u32,
    dock: DockTable,
    apps: Vec<AppEntry>,
}

fn default_show_on_launch() -> bool {
    true
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn validate(path: &std::path::Path, catalog: &CatalogFile) {
    if catalog.schema_version != CATALOG_SCHEMA_VERSION {
        panic!(
            "catalog schema mismatch in {}: expected {CATALOG_SCHEMA_VERSION} found {}",
            path.display(),
            catalog.schema_version
        );
    }
    if catalog.dock.storage_key.trim().is_empty() {
        panic!("empty dock.storage_key in {}", path.display());
    }

    let mut seen = HashSet::new();
    for app in &catalog.apps {
        if app.id.trim().is_empty() {
            panic!("catalog entry with empty id in {}", path.display());
        }
        if !seen.insert(app.id.as_str()) {
            panic!("duplicate catalog id `{}` in {}", app.id, path.display());
        }
        if app.name.trim().is_empty() {
            panic!("catalog entry `{}` has an empty name", app.id);
        }
        if let Some(scheme) = app.scheme.as_deref() {
            if scheme.contains(':') || scheme.contains('/') {
                panic!(
                    "catalog entry `{}` scheme `{scheme}` must be a bare scheme token",
                    app.id
                );
            }
        }
    }
}

fn render(catalog: CatalogFile) -> String {
    let mut out = String::new();
    out.push_str("// @generated by build.rs from catalog.toml\n\n");
    let _ = writeln!(
        out,
        "pub(crate) const DEFAULT_STORAGE_KEY: &str = {:?};",
        catalog.dock.storage_key
    );
    let _ = writeln!(
        out,
        "pub(crate) const DEFAULT_FALLBACK_DELAY_MS: u64 = {};",
        catalog.dock.fallback_delay_ms
    );
    let _ = writeln!(
        out,
        "pub(crate) const DEFAULT_RESTORE_STORED_ORDER: bool = {};\n",
        catalog.dock.restore_stored_order
    );
    let _ = writeln!(
        out,
        "pub(crate) static CATALOG: [AppDefinition; {}] = [",
        catalog.apps.len()
    );
    for app in catalog.apps {
        let _ = writeln!(
            out,
            "    AppDefinition {{ id: {:?}, name: {:?}, icon: {:?}, scheme: {:?}, path: {:?}, \
             fallback_url: {:?}, package: {:?}, activity_class: {:?}, default_enabled: {} }},",
            app.id,
            app.name,
            app.icon,
            non_empty(app.scheme),
            non_empty(app.path),
            non_empty(app.fallback_url),
            non_empty(app.package),
            non_empty(app.activity_class),
            app.show_on_launch,
        );
    }
    out.push_str("];\n");
    out
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: CatalogFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&path, &catalog);

    let generated = render(catalog);
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("dock_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
