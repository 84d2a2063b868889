//! Writing component files into the project with alias rewriting

use super::locator::{PathLayout, Placement};
use crate::registry::manifest::Component;
use crate::runtime::PackageManager;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;

/// Import path registry sources use for the shared utils module
pub const CANONICAL_UTILS_ALIAS: &str = "@/lib/utils";

/// Import prefix registry sources use for sibling components
pub const CANONICAL_COMPONENTS_ALIAS: &str = "@/components/ui/";

/// Ordered literal substitutions applied to file content before it is written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasRewrites {
    rules: Vec<(String, String)>,
}

impl AliasRewrites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrites from the canonical registry aliases to the project's aliases
    pub fn from_aliases(utils: &str, components: &str) -> Self {
        Self::new()
            .with_rule(CANONICAL_UTILS_ALIAS, utils)
            .with_rule(CANONICAL_COMPONENTS_ALIAS, components)
    }

    /// Append a rule. Rules with an empty pattern are ignored.
    pub fn with_rule(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        let from = from.into();
        if !from.is_empty() {
            self.rules.push((from, to.into()));
        }
        self
    }

    pub fn rules(&self) -> &[(String, String)] {
        &self.rules
    }

    /// Apply every rule in order, replacing all occurrences
    pub fn apply(&self, content: &str) -> String {
        self.rules
            .iter()
            .fold(content.to_string(), |acc, (from, to)| acc.replace(from.as_str(), to))
    }

    /// Number of replacements `apply` performs on `content`
    pub fn count_occurrences(&self, content: &str) -> usize {
        let mut current = content.to_string();
        let mut count = 0;
        for (from, to) in &self.rules {
            count += current.matches(from.as_str()).count();
            current = current.replace(from.as_str(), to);
        }
        count
    }
}

/// What happened while installing one component
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    /// Files written, in declaration order
    pub written: Vec<PathBuf>,
    /// Files left untouched because they already existed
    pub skipped: Vec<PathBuf>,
    /// Directories created along the way
    pub created_dirs: Vec<PathBuf>,
    /// External packages handed to the package manager
    pub dependencies: Vec<String>,
}

/// Write a component's files below `layout`.
///
/// Existing files are skipped unless `overwrite` is set; skipping is per file,
/// so a component can end up partially updated. Nothing is written when any
/// file name or placement dir is absolute or contains `..`.
pub async fn write_component_files(
    component: &Component,
    layout: &PathLayout,
    placement: Placement,
    rewrites: &AliasRewrites,
    overwrite: bool,
) -> Result<InstallReport> {
    if let Some(path) = component.files.iter().find_map(|file| file.unsafe_path()) {
        anyhow::bail!(
            "Refusing to install {}: {:?} would be written outside the project",
            component.name,
            path
        );
    }

    let mut report = InstallReport::default();
    for file in &component.files {
        let file_dir = layout.component_dir(file, placement);
        if !fs::try_exists(&file_dir).await.unwrap_or(false) {
            fs::create_dir_all(&file_dir)
                .await
                .with_context(|| format!("Failed to create directory: {}", file_dir.display()))?;
            report.created_dirs.push(file_dir.clone());
        }

        let target_path = file_dir.join(&file.name);
        if !overwrite && fs::try_exists(&target_path).await.unwrap_or(false) {
            report.skipped.push(target_path);
            continue;
        }

        let content = rewrites.apply(&file.content);
        fs::write(&target_path, content)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;
        report.written.push(target_path);
    }

    Ok(report)
}

/// Write a component's files, then add its external dependencies in one batch
pub async fn install_component(
    component: &Component,
    layout: &PathLayout,
    placement: Placement,
    rewrites: &AliasRewrites,
    overwrite: bool,
    package_manager: PackageManager,
) -> Result<InstallReport> {
    let mut report =
        write_component_files(component, layout, placement, rewrites, overwrite).await?;

    if !component.dependencies.is_empty() {
        package_manager
            .add(&component.dependencies, layout.root())
            .await
            .with_context(|| format!("Failed to install dependencies of {}", component.name))?;
        report.dependencies = component.dependencies.clone();
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::manifest::{ComponentFile, FileType};

    fn button() -> Component {
        Component {
            component: "button".to_string(),
            name: "AppButton".to_string(),
            dependencies: Vec::new(),
            internal_dependencies: Vec::new(),
            files: vec![
                ComponentFile {
                    name: "AppButton.vue".to_string(),
                    dir: String::new(),
                    content: concat!(
                        "import { cn } from '@/lib/utils'\n",
                        "import Loader from '@/components/ui/AppLoader.vue'\n",
                    )
                    .to_string(),
                    placement_dir: "app/buttons".to_string(),
                    file_type: FileType::Components,
                },
                ComponentFile {
                    name: "appButtonVariants.ts".to_string(),
                    dir: String::new(),
                    content: "export const variants = {}\n".to_string(),
                    placement_dir: "app/buttons".to_string(),
                    file_type: FileType::Components,
                },
            ],
        }
    }

    fn rewrites() -> AliasRewrites {
        AliasRewrites::from_aliases("@/utils/cn", "@/modules/ui/components/")
    }

    #[test]
    fn test_rewrite_without_tokens_is_identity() {
        let content = "const a = 1\n";
        assert_eq!(rewrites().apply(content), content);
        assert_eq!(rewrites().count_occurrences(content), 0);
    }

    #[test]
    fn test_rewrite_replaces_every_occurrence() {
        let content = "'@/lib/utils' '@/lib/utils' '@/components/ui/A.vue'";
        assert_eq!(rewrites().count_occurrences(content), 3);
        assert_eq!(
            rewrites().apply(content),
            "'@/utils/cn' '@/utils/cn' '@/modules/ui/components/A.vue'"
        );
    }

    #[test]
    fn test_empty_pattern_is_ignored() {
        let rewrites = AliasRewrites::new().with_rule("", "x");
        assert!(rewrites.rules().is_empty());
        assert_eq!(rewrites.apply("abc"), "abc");
    }

    #[tokio::test]
    async fn test_write_creates_dirs_and_rewrites() {
        let dir = tempfile::tempdir().unwrap();
        let layout = PathLayout::new(dir.path());

        let report =
            write_component_files(&button(), &layout, Placement::Module, &rewrites(), false)
                .await
                .unwrap();

        assert_eq!(report.written.len(), 2);
        assert!(report.skipped.is_empty());
        assert_eq!(report.created_dirs.len(), 1);

        let written = std::fs::read_to_string(&report.written[0]).unwrap();
        assert!(written.contains("'@/utils/cn'"));
        assert!(written.contains("'@/modules/ui/components/AppLoader.vue'"));
        assert!(report.written[0]
            .ends_with("src/modules/ui/components/app/buttons/AppButton.vue"));
    }

    #[tokio::test]
    async fn test_existing_file_skipped_without_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let layout = PathLayout::new(dir.path());
        let component = button();

        let existing = layout.file_path(&component.files[0], Placement::Module);
        std::fs::create_dir_all(existing.parent().unwrap()).unwrap();
        std::fs::write(&existing, "local edits").unwrap();

        let report =
            write_component_files(&component, &layout, Placement::Module, &rewrites(), false)
                .await
                .unwrap();

        assert_eq!(report.skipped, vec![existing.clone()]);
        assert_eq!(report.written.len(), 1);
        assert_eq!(std::fs::read_to_string(&existing).unwrap(), "local edits");
    }

    #[tokio::test]
    async fn test_existing_file_replaced_with_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let layout = PathLayout::new(dir.path());
        let component = button();

        let existing = layout.file_path(&component.files[0], Placement::Module);
        std::fs::create_dir_all(existing.parent().unwrap()).unwrap();
        std::fs::write(&existing, "local edits").unwrap();

        let report =
            write_component_files(&component, &layout, Placement::Module, &rewrites(), true)
                .await
                .unwrap();

        assert!(report.skipped.is_empty());
        assert_eq!(
            std::fs::read_to_string(&existing).unwrap(),
            rewrites().apply(&component.files[0].content)
        );
    }

    #[tokio::test]
    async fn test_root_placement() {
        let dir = tempfile::tempdir().unwrap();
        let layout = PathLayout::new(dir.path());

        let rewrites = AliasRewrites::new();
        let report = write_component_files(&button(), &layout, Placement::Root, &rewrites, false)
            .await
            .unwrap();

        assert!(dir.path().join("src/components/AppButton.vue").exists());
        assert_eq!(report.created_dirs, vec![dir.path().join("src").join("components")]);
    }

    #[tokio::test]
    async fn test_install_component_without_dependencies_skips_package_manager() {
        let dir = tempfile::tempdir().unwrap();
        let layout = PathLayout::new(dir.path());

        let report = install_component(
            &button(),
            &layout,
            Placement::Module,
            &rewrites(),
            false,
            PackageManager::Npm,
        )
        .await
        .unwrap();

        assert_eq!(report.written.len(), 2);
        assert!(report.dependencies.is_empty());
    }

    #[tokio::test]
    async fn test_escaping_paths_are_refused_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("project");
        std::fs::create_dir_all(&project).unwrap();
        let layout = PathLayout::new(&project);

        let mut component = button();
        component.files[1].placement_dir = "../../../../escape".to_string();

        let result =
            write_component_files(&component, &layout, Placement::Module, &rewrites(), false).await;
        assert!(result.is_err());
        assert!(!project.join("src").exists());
        assert!(!dir.path().join("escape").exists());

        let mut component = button();
        component.files[0].name = "../../../../../../evil.vue".to_string();
        let result =
            write_component_files(&component, &layout, Placement::Root, &rewrites(), false).await;
        assert!(result.is_err());
        assert!(!dir.path().join("evil.vue").exists());
        assert!(!project.join("src").exists());
    }
}
