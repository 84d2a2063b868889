//! Destination paths and installed-state detection

use crate::registry::manifest::{Component, ComponentFile};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::task::JoinSet;

/// Directory (relative to the project root) holding per-module UI files
const MODULE_UI_DIR: [&str; 3] = ["src", "modules", "ui"];

/// Where a component's files are placed inside the project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// `src/modules/ui/<type>/<placementDir>/`
    Module,
    /// `src/<type>/`, used for global components
    Root,
}

impl Placement {
    /// Placement rule shared by every command: global components at the root, the rest per module
    pub fn for_component(name: &str, global: &[&str]) -> Self {
        if global.contains(&name) {
            Placement::Root
        } else {
            Placement::Module
        }
    }
}

/// Maps component files to paths below a project root
#[derive(Debug, Clone)]
pub struct PathLayout {
    root: PathBuf,
}

impl PathLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory a file is written into. Depends only on the file's type and placement dir.
    pub fn component_dir(&self, file: &ComponentFile, placement: Placement) -> PathBuf {
        match placement {
            Placement::Module => MODULE_UI_DIR
                .iter()
                .fold(self.root.clone(), |acc, segment| acc.join(segment))
                .join(file.file_type.as_str())
                .join(&file.placement_dir),
            Placement::Root => self.root.join("src").join(file.file_type.as_str()),
        }
    }

    /// Full destination path of a file
    pub fn file_path(&self, file: &ComponentFile, placement: Placement) -> PathBuf {
        self.component_dir(file, placement).join(&file.name)
    }
}

/// A registry file found on disk
#[derive(Debug, Clone)]
pub struct InstalledFile {
    pub file: ComponentFile,
    pub local_path: PathBuf,
}

/// A component with at least one of its files present locally
#[derive(Debug, Clone)]
pub struct InstalledComponent {
    pub name: String,
    pub component: String,
    /// Only the files that exist on disk, in declaration order
    pub files: Vec<InstalledFile>,
}

/// Check which of a component's files exist at the given placement
pub async fn locate_component(
    component: &Component,
    layout: &PathLayout,
    placement: Placement,
) -> Option<InstalledComponent> {
    let mut files = Vec::new();
    for file in &component.files {
        let local_path = layout.file_path(file, placement);
        if fs::try_exists(&local_path).await.unwrap_or(false) {
            files.push(InstalledFile {
                file: file.clone(),
                local_path,
            });
        }
    }

    if files.is_empty() {
        return None;
    }

    Some(InstalledComponent {
        name: component.name.clone(),
        component: component.component.clone(),
        files,
    })
}

/// Find every available component that is installed in the project.
///
/// Each component is looked up at its [`Placement::for_component`] location.
/// Components are checked concurrently; the result keeps manifest order.
pub async fn locate_installed(
    available: &[Component],
    layout: &PathLayout,
    global: &[&str],
) -> Result<Vec<InstalledComponent>> {
    let mut tasks = JoinSet::new();
    for (idx, component) in available.iter().enumerate() {
        let placement = Placement::for_component(&component.name, global);
        let component = component.clone();
        let layout = layout.clone();
        tasks.spawn(async move {
            let installed = locate_component(&component, &layout, placement).await;
            (idx, installed)
        });
    }

    let mut found = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        let (idx, installed) = joined.context("Installed-state check panicked")?;
        if let Some(installed) = installed {
            found.push((idx, installed));
        }
    }

    found.sort_by_key(|(idx, _)| *idx);
    Ok(found.into_iter().map(|(_, installed)| installed).collect())
}
