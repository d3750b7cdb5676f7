//! Component resolution
//!
//! Turns a manifest item into its wire payload: the referenced source files
//! are read concurrently from disk and assembled together with the item's
//! metadata. Both the HTTP server and the offline builder go through this
//! module, so the two delivery paths always produce the same shape.

use crate::manifest::{Manifest, RegistryItem, TailwindSection};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::task::JoinSet;
use tracing::debug;

/// A file descriptor with its actual text contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedFile {
    /// Logical file name
    pub name: String,

    /// UTF-8 file contents
    pub content: String,
}

/// Component metadata carried alongside the files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentMeta {
    /// Human-readable component description
    pub description: String,

    /// URL the component was (or will be) served from
    pub source: String,
}

/// Fully resolved component, serialized verbatim onto the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedComponent {
    /// Component name
    pub name: String,

    /// Category tag
    #[serde(rename = "type")]
    pub kind: String,

    /// Resolved files, in manifest descriptor order
    pub files: Vec<ResolvedFile>,

    /// Runtime package dependencies
    pub dependencies: Vec<String>,

    /// Development package dependencies
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: Vec<String>,

    /// Registry-internal dependencies, always empty
    #[serde(rename = "registryDependencies")]
    pub registry_dependencies: Vec<String>,

    /// Tailwind passthrough from the manifest
    pub tailwind: TailwindSection,

    /// CSS variables, always an empty object
    #[serde(rename = "cssVars")]
    pub css_vars: serde_json::Value,

    /// Component metadata
    pub meta: ComponentMeta,
}

/// Resolve a manifest item into its wire payload
///
/// File reads fan out concurrently, one task per descriptor. The first read
/// failure aborts the remaining tasks and fails the whole resolution; a
/// partially filled `files` array is never produced.
///
/// # Errors
///
/// Returns [`crate::Error::FileRead`] when any referenced file cannot be
/// read as UTF-8 text.
pub async fn resolve(
    project_root: &Path,
    manifest: &Manifest,
    item: &RegistryItem,
    source: String,
) -> crate::Result<ResolvedComponent> {
    let mut reads = JoinSet::new();

    for (index, descriptor) in item.files.iter().enumerate() {
        let logical_name = descriptor.name.clone();
        // Manifest paths are trusted; joined without containment checks.
        let path = project_root.join(&descriptor.content);

        reads.spawn(async move {
            let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
                crate::Error::FileRead {
                    file: logical_name.clone(),
                    message: e.to_string(),
                }
            })?;

            Ok::<_, crate::Error>((
                index,
                ResolvedFile {
                    name: logical_name,
                    content,
                },
            ))
        });
    }

    // Fan-in, restoring descriptor order regardless of completion order.
    let mut slots: Vec<Option<ResolvedFile>> = item.files.iter().map(|_| None).collect();

    while let Some(joined) = reads.join_next().await {
        match joined {
            Ok(Ok((index, file))) => {
                if let Some(slot) = slots.get_mut(index) {
                    *slot = Some(file);
                }
            }
            Ok(Err(err)) => {
                reads.abort_all();
                return Err(err);
            }
            Err(join_err) => {
                reads.abort_all();
                return Err(crate::Error::Other(format!(
                    "file read task failed: {join_err}"
                )));
            }
        }
    }

    let files = slots
        .into_iter()
        .map(|slot| {
            slot.ok_or_else(|| crate::Error::Other("file read task vanished".to_string()))
        })
        .collect::<crate::Result<Vec<_>>>()?;

    debug!(
        component = %item.name,
        files = files.len(),
        "Resolved component"
    );

    Ok(ResolvedComponent {
        name: item.name.clone(),
        kind: item.kind.clone(),
        files,
        dependencies: item.dependencies.clone(),
        dev_dependencies: item.dev_dependencies.clone(),
        registry_dependencies: Vec::new(),
        tailwind: TailwindSection {
            config: manifest.tailwind_config(),
        },
        css_vars: serde_json::Value::Object(serde_json::Map::new()),
        meta: ComponentMeta {
            description: item.description_or_default(),
            source,
        },
    })
}
