//! Application state management

use registry_core::{Config, Manifest, context_error, context_error::Result};
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state
///
/// The manifest is loaded and validated once at startup and injected here;
/// handlers never touch module-level state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Validated registry manifest
    pub manifest: Arc<Manifest>,
    /// Project root that manifest file paths resolve against
    pub project_root: PathBuf,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("project_root", &self.project_root)
            .field("items", &self.manifest.items.len())
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create new application state
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest fails validation.
    pub fn new(config: Config, manifest: Manifest) -> Result<Self> {
        manifest.validate()?;

        let project_root = config.registry.project_root.clone();

        Ok(Self {
            config,
            manifest: Arc::new(manifest),
            project_root,
        })
    }

    /// Base URL with any trailing slash removed
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.config.registry.base_url.trim_end_matches('/')
    }

    /// `meta.source` value for a component served by this process
    #[must_use]
    pub fn source_url(&self, component: &str) -> String {
        format!("{}/api/r/{component}", self.base_url())
    }

    /// Check that the application is properly configured
    ///
    /// # Errors
    ///
    /// Returns an error if the project root does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.project_root.exists() {
            return Err(context_error!(
                "Project root does not exist: {}",
                self.project_root.display()
            ));
        }

        Ok(())
    }
}
