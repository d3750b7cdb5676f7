//! Registry manifest schema and loader
//!
//! The manifest is a single JSON document listing every known component and
//! the source files that make it up. It is deserialized and validated once at
//! startup and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level manifest document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Registry name
    pub name: String,

    /// Human-readable registry description
    #[serde(default)]
    pub description: String,

    /// Registry version string
    pub version: String,

    /// Optional tailwind passthrough section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tailwind: Option<TailwindSection>,

    /// Registry items keyed by their unique `name`
    pub items: Vec<RegistryItem>,
}

/// Tailwind passthrough carried verbatim into resolved components
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TailwindSection {
    /// Opaque tailwind config object
    #[serde(default = "empty_object")]
    pub config: serde_json::Value,
}

/// A single registry item (component, block, page...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryItem {
    /// Unique item name, used for lookup
    pub name: String,

    /// Category tag (e.g. `registry:block`)
    #[serde(rename = "type")]
    pub kind: String,

    /// Optional item description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Ordered source file descriptors
    pub files: Vec<FileDescriptor>,

    /// Runtime package dependencies
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Development package dependencies
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: Vec<String>,
}

/// Locates one source file of a registry item
///
/// `content` is a filesystem path relative to the project root, not the file
/// contents. Manifest paths are trusted input: they are joined to the project
/// root without containment checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Logical file name in the resolved output
    pub name: String,

    /// Relative path locating the real bytes
    pub content: String,
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Manifest {
    /// Load and validate a manifest document from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// fails structural validation.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let manifest: Self = serde_json::from_str(&raw)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check structural invariants of the manifest
    ///
    /// # Errors
    ///
    /// Returns an error on empty or duplicate item names, or items without
    /// files.
    pub fn validate(&self) -> crate::Result<()> {
        if self.name.is_empty() {
            return Err(crate::Error::InvalidManifest {
                item: "manifest".to_string(),
                message: "registry name is empty".to_string(),
            });
        }

        let mut seen = std::collections::HashSet::new();
        for item in &self.items {
            if item.name.is_empty() {
                return Err(crate::Error::InvalidManifest {
                    item: "<unnamed>".to_string(),
                    message: "item name is empty".to_string(),
                });
            }

            if !seen.insert(item.name.as_str()) {
                return Err(crate::Error::InvalidManifest {
                    item: item.name.clone(),
                    message: "duplicate item name".to_string(),
                });
            }

            if item.files.is_empty() {
                return Err(crate::Error::InvalidManifest {
                    item: item.name.clone(),
                    message: "item lists no files".to_string(),
                });
            }

            for file in &item.files {
                if file.name.is_empty() || file.content.is_empty() {
                    return Err(crate::Error::InvalidManifest {
                        item: item.name.clone(),
                        message: "file descriptor has empty name or content path".to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Look up an item by exact name match
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&RegistryItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Tailwind config object, defaulting to `{}` when absent
    #[must_use]
    pub fn tailwind_config(&self) -> serde_json::Value {
        self.tailwind
            .as_ref()
            .map_or_else(empty_object, |t| t.config.clone())
    }
}

impl RegistryItem {
    /// Description used for `meta.description`, derived from the item name
    /// when the manifest does not carry one
    #[must_use]
    pub fn description_or_default(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| format!("{} registry item", self.name))
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_manifest_json() -> &'static str {
        r#"{
            "name": "acme-ui",
            "description": "Acme UI component registry",
            "version": "1.0.0",
            "tailwind": { "config": { "darkMode": "class" } },
            "items": [
                {
                    "name": "dashboard",
                    "type": "registry:block",
                    "description": "Admin dashboard page",
                    "files": [
                        { "name": "page.tsx", "content": "app/dashboard/page.tsx" },
                        { "name": "chart.tsx", "content": "components/chart.tsx" }
                    ],
                    "dependencies": ["recharts"],
                    "devDependencies": ["@types/node"]
                },
                {
                    "name": "settings",
                    "type": "registry:page",
                    "files": [
                        { "name": "page.tsx", "content": "app/settings/page.tsx" }
                    ]
                }
            ]
        }"#
    }

    fn sample_manifest() -> Manifest {
        serde_json::from_str(sample_manifest_json()).expect("parse sample manifest")
    }

    #[test]
    fn test_manifest_deserializes_wire_names() {
        let manifest = sample_manifest();

        assert_eq!(manifest.name, "acme-ui");
        assert_eq!(manifest.version, "1.0.0");
        assert_eq!(manifest.items.len(), 2);

        let dashboard = &manifest.items[0];
        assert_eq!(dashboard.kind, "registry:block");
        assert_eq!(dashboard.files.len(), 2);
        assert_eq!(dashboard.files[0].content, "app/dashboard/page.tsx");
        assert_eq!(dashboard.dependencies, vec!["recharts"]);
        assert_eq!(dashboard.dev_dependencies, vec!["@types/node"]);
    }

    #[test]
    fn test_optional_fields_default_empty() {
        let manifest = sample_manifest();
        let settings = &manifest.items[1];

        assert!(settings.description.is_none());
        assert!(settings.dependencies.is_empty());
        assert!(settings.dev_dependencies.is_empty());
    }

    #[test]
    fn test_find_exact_match_only() {
        let manifest = sample_manifest();

        assert!(manifest.find("dashboard").is_some());
        assert!(manifest.find("Dashboard").is_none());
        assert!(manifest.find("dash").is_none());
        assert!(manifest.find("").is_none());
    }

    #[test]
    fn test_tailwind_config_passthrough() {
        let manifest = sample_manifest();
        let config = manifest.tailwind_config();

        assert_eq!(config["darkMode"], "class");
    }

    #[test]
    fn test_tailwind_config_defaults_to_empty_object() {
        let mut manifest = sample_manifest();
        manifest.tailwind = None;

        assert_eq!(
            manifest.tailwind_config(),
            serde_json::json!({}),
        );
    }

    #[test]
    fn test_description_fallback() {
        let manifest = sample_manifest();

        assert_eq!(
            manifest.items[0].description_or_default(),
            "Admin dashboard page"
        );
        assert_eq!(
            manifest.items[1].description_or_default(),
            "settings registry item"
        );
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample_manifest().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_names() {
        let mut manifest = sample_manifest();
        let dup = manifest.items[0].clone();
        manifest.items.push(dup);

        let err = manifest.validate().unwrap_err();
        assert!(format!("{err}").contains("duplicate item name"));
    }

    #[test]
    fn test_validate_rejects_empty_file_list() {
        let mut manifest = sample_manifest();
        manifest.items[1].files.clear();

        let err = manifest.validate().unwrap_err();
        assert!(format!("{err}").contains("no files"));
    }

    #[test]
    fn test_validate_rejects_empty_item_name() {
        let mut manifest = sample_manifest();
        manifest.items[0].name = String::new();

        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_content_path() {
        let mut manifest = sample_manifest();
        manifest.items[0].files[0].content = String::new();

        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = NamedTempFile::new().expect("create temp manifest");
        file.write_all(sample_manifest_json().as_bytes())
            .expect("write manifest");

        let manifest = Manifest::load(file.path()).expect("load manifest");
        assert_eq!(manifest.items.len(), 2);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut file = NamedTempFile::new().expect("create temp manifest");
        file.write_all(b"{ not json").expect("write manifest");

        let result = Manifest::load(file.path());
        assert!(matches!(result, Err(crate::Error::Serialization(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = Manifest::load(Path::new("/nonexistent/registry.json"));
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
