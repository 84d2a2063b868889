//! Shared cliclack prompts and steps used by the init/add/diff commands

use crate::config::ProjectConfig;
use crate::install::{
    install_component, AliasRewrites, InstalledComponent, PathLayout, Placement, Resolution,
};
use crate::product::ProductConfig;
use crate::registry::{Component, RegistryClient};
use crate::runtime::PackageManager;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project root (defaults to the current directory)
    pub cwd: Option<PathBuf>,

    /// Local registry directory to use instead of the remote registry
    pub registry_dir: Option<PathBuf>,
}

/// Print an error through the leveled logger
pub fn report_error(err: &anyhow::Error) {
    let _ = cliclack::log::error(format!("{:#}", err));
}

pub(crate) fn project_root(args: &ProjectArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().context("Failed to read current directory")?;
    let root = match &args.cwd {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !root.is_dir() {
        anyhow::bail!("Project directory does not exist: {}", root.display());
    }
    Ok(root)
}

pub(crate) fn setup_registry<C: ProductConfig>(
    config: &C,
    registry_dir: &Option<PathBuf>,
) -> Result<RegistryClient> {
    let client = match registry_dir {
        Some(path) => {
            cliclack::log::info(format!("Using local registry from {}", path.display()))?;
            RegistryClient::from_local(path.clone(), config.user_agent())?
        }
        None => RegistryClient::from_config(config)?,
    };
    Ok(client)
}

pub(crate) async fn fetch_components(client: &RegistryClient) -> Result<Vec<Component>> {
    let spinner = cliclack::spinner();
    spinner.start("Fetching components...");

    match client.fetch_available_components().await {
        Ok(components) => {
            spinner.stop(format!("Found {} components", components.len()));
            Ok(components)
        }
        Err(e) => {
            spinner.stop("Failed to fetch components");
            Err(e.into())
        }
    }
}

pub(crate) fn load_project_config<C: ProductConfig>(
    config: &C,
    layout: &PathLayout,
) -> Result<ProjectConfig> {
    let path = layout.root().join(config.config_file_name());
    if !path.exists() {
        cliclack::log::remark(format!(
            "No {} found, using default aliases",
            config.config_file_name()
        ))?;
    }
    Ok(ProjectConfig::load_or_default(&path)?)
}

pub(crate) fn warn_unresolved(resolution: &Resolution) -> Result<()> {
    for missing in &resolution.unresolved {
        cliclack::log::warning(format!(
            "{} depends on {}, which is not in the registry. Skipping.",
            missing.component, missing.dependency
        ))?;
    }
    Ok(())
}

/// Install components in order, one spinner per component
pub(crate) async fn install_all(
    components: &[Component],
    layout: &PathLayout,
    placement_for: impl Fn(&Component) -> Placement,
    rewrites: &AliasRewrites,
    overwrite: bool,
    package_manager: PackageManager,
) -> Result<()> {
    for component in components {
        let spinner = cliclack::spinner();
        spinner.start(format!("{}...", component.name));

        let result = install_component(
            component,
            layout,
            placement_for(component),
            rewrites,
            overwrite,
            package_manager,
        )
        .await;

        let report = match result {
            Ok(report) => report,
            Err(e) => {
                spinner.stop(format!("{} failed", component.name));
                return Err(e);
            }
        };
        spinner.stop(&component.name);

        for dir in &report.created_dirs {
            cliclack::log::info(format!("Created {}", dir.display()))?;
        }
        for skipped in &report.skipped {
            let file_name = skipped
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| skipped.display().to_string());
            cliclack::log::warning(format!(
                "{} already exists. Skipping. Use --overwrite to overwrite existing files",
                file_name
            ))?;
        }
        if !report.dependencies.is_empty() {
            cliclack::log::success(format!(
                "Installed {} dependencies.\n{}",
                report.dependencies.len(),
                report.dependencies.join(", ")
            ))?;
        }
    }
    Ok(())
}

/// Multi-select among non-global components
pub(crate) fn prompt_for_components(
    available: &[Component],
    global: &[&str],
) -> Result<Vec<Component>> {
    let choices: Vec<&Component> = available
        .iter()
        .filter(|c| !global.contains(&c.name.as_str()))
        .collect();

    if choices.is_empty() {
        return Ok(Vec::new());
    }

    let mut multi = cliclack::multiselect("Which component(s) would you like to add?");
    for (idx, component) in choices.iter().enumerate() {
        multi = multi.item(idx, &component.name, &component.component);
    }

    let selected: Vec<usize> = multi.required(false).interact()?;

    Ok(selected
        .into_iter()
        .filter_map(|idx| choices.get(idx).map(|c| (*c).clone()))
        .collect())
}

/// Select one installed component, returning its name
pub(crate) fn prompt_for_installed(installed: &[InstalledComponent]) -> Result<String> {
    let mut select = cliclack::select("Which component would you like to check?");
    for (idx, component) in installed.iter().enumerate() {
        select = select.item(idx, &component.name, "");
    }

    let selected_idx: usize = select.interact()?;
    installed
        .get(selected_idx)
        .map(|c| c.name.clone())
        .ok_or_else(|| anyhow::anyhow!("No component selected"))
}
