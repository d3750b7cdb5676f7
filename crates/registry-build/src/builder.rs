//! Offline registry builder
//!
//! Resolves every manifest item ahead of deployment and writes the results
//! as static JSON files: one `{name}.json` per item plus an `index.json`
//! listing every item. Unlike the request-time resolver, a single item's
//! failure is logged and skipped so one bad entry cannot block the rest.

use registry_core::config::BuildConfig;
use registry_core::{Manifest, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Aggregate index written next to the component files
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexDocument {
    /// Registry name
    pub name: String,
    /// Registry description
    pub description: String,
    /// Registry version
    pub version: String,
    /// Every manifest item, including ones whose build failed
    pub components: Vec<IndexEntry>,
}

/// One component entry in the index
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Component name
    pub name: String,
    /// Category tag
    #[serde(rename = "type")]
    pub kind: String,
    /// URL the component file is served from
    pub url: String,
}

/// Outcome of a build run
#[derive(Debug)]
pub struct BuildSummary {
    /// Number of component files written
    pub written: usize,
    /// Number of items that failed to resolve
    pub failed: usize,
    /// Path of the generated index document
    pub index_path: PathBuf,
}

/// `meta.source` / index URL for a built component
fn component_url(base_url: &str, name: &str) -> String {
    format!("{}/r/{name}.json", base_url.trim_end_matches('/'))
}

/// Resolve every manifest item and write the static registry output
///
/// Items are processed sequentially. A failing item is logged with its name
/// and skipped; it still appears in `index.json`. The run only fails when
/// the output directory or the index cannot be written.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created or an output
/// file cannot be written.
pub async fn build_registry(
    project_root: &Path,
    manifest: &Manifest,
    build: &BuildConfig,
) -> Result<BuildSummary> {
    let out_dir = build.out_dir.join("r");
    tokio::fs::create_dir_all(&out_dir).await?;

    let mut written = 0usize;
    let mut failed = 0usize;

    for item in &manifest.items {
        let source = component_url(&build.base_url, &item.name);

        match registry_core::resolve(project_root, manifest, item, source).await {
            Ok(resolved) => {
                let out_path = out_dir.join(format!("{}.json", item.name));
                let payload = serde_json::to_vec_pretty(&resolved)?;
                tokio::fs::write(&out_path, payload).await?;

                info!(component = %item.name, path = %out_path.display(), "Built component");
                written += 1;
            }
            Err(e) => {
                error!(component = %item.name, error = %e, "Failed to build component");
                failed += 1;
            }
        }
    }

    // The index lists every manifest item, failed ones included.
    let index = IndexDocument {
        name: manifest.name.clone(),
        description: manifest.description.clone(),
        version: manifest.version.clone(),
        components: manifest
            .items
            .iter()
            .map(|item| IndexEntry {
                name: item.name.clone(),
                kind: item.kind.clone(),
                url: component_url(&build.base_url, &item.name),
            })
            .collect(),
    };

    let index_path = out_dir.join("index.json");
    let payload = serde_json::to_vec_pretty(&index)?;
    tokio::fs::write(&index_path, payload).await?;

    info!(
        written,
        failed,
        index = %index_path.display(),
        "Registry build finished"
    );

    Ok(BuildSummary {
        written,
        failed,
        index_path,
    })
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_component_url_shape() {
        assert_eq!(
            component_url("https://registry.example.com", "dashboard"),
            "https://registry.example.com/r/dashboard.json"
        );
    }

    #[test]
    fn test_component_url_strips_trailing_slash() {
        assert_eq!(
            component_url("https://registry.example.com/", "dashboard"),
            "https://registry.example.com/r/dashboard.json"
        );
    }

    #[test]
    fn test_index_entry_wire_names() {
        let entry = IndexEntry {
            name: "dashboard".to_string(),
            kind: "registry:block".to_string(),
            url: "https://x/r/dashboard.json".to_string(),
        };

        let wire = serde_json::to_value(&entry).expect("serialize index entry");
        assert_eq!(wire["type"], "registry:block");
        assert!(wire.get("kind").is_none());
    }
}
