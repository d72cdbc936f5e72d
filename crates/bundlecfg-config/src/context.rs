//! Explicit environment for one generation run.
//!
//! Everything that would otherwise be read from process state (working
//! directory, `NODE_ENV`, the manifest) is captured here once and passed
//! down, so normalization and the variant builders stay pure.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::manifest::Manifest;

/// Runtime mode derived from `NODE_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeMode {
    Development,
    /// Any value other than `development`, including unset
    #[default]
    Production,
}

impl RuntimeMode {
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            Some("development") => RuntimeMode::Development,
            _ => RuntimeMode::Production,
        }
    }

    pub fn is_development(self) -> bool {
        self == RuntimeMode::Development
    }
}

#[derive(Debug, Clone)]
pub struct BuildContext {
    project_dir: PathBuf,
    mode: RuntimeMode,
    manifest: Manifest,
}

impl BuildContext {
    pub fn new(project_dir: impl Into<PathBuf>, manifest: Manifest) -> Self {
        Self {
            project_dir: project_dir.into(),
            mode: RuntimeMode::default(),
            manifest,
        }
    }

    /// Read `package.json` from `project_dir`.
    pub fn load(project_dir: impl Into<PathBuf>) -> Result<Self> {
        let project_dir = project_dir.into();
        let manifest = Manifest::load(&project_dir)?;
        Ok(Self::new(project_dir, manifest))
    }

    pub fn with_mode(mut self, mode: RuntimeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn mode(&self) -> RuntimeMode {
        self.mode
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Resolve a project-relative path.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        let relative = relative.as_ref();
        if relative.is_absolute() {
            relative.to_path_buf()
        } else {
            self.project_dir.join(relative)
        }
    }
}
