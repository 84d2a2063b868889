//! `add`: install components and their internal dependencies

use super::prompts::{self, ProjectArgs};
use crate::error::CommandError;
use crate::install::{resolve, select_components, PathLayout, Placement};
use crate::product::ProductConfig;
use crate::runtime::PackageManager;
use anyhow::Result;

/// Arguments for the add command
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    /// Component names or short identifiers; `all` or `*` selects everything
    pub components: Vec<String>,

    /// Replace files that already exist
    pub overwrite: bool,

    pub project: ProjectArgs,
}

pub async fn run_add<C: ProductConfig>(config: &C, args: AddArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    let root = prompts::project_root(&args.project)?;
    let layout = PathLayout::new(&root);
    let project_config = prompts::load_project_config(config, &layout)?;

    let client = prompts::setup_registry(config, &args.project.registry_dir)?;
    let available = prompts::fetch_components(&client).await?;
    if available.is_empty() {
        return Err(CommandError::NoComponentsAvailable.into());
    }

    let selection = select_components(&available, &args.components, config.global_components());
    for name in &selection.unmatched {
        cliclack::log::warning(format!("Component {} not found in the registry.", name))?;
    }

    let selected = if selection.components.is_empty() {
        prompts::prompt_for_components(&available, config.global_components())?
    } else {
        selection.components
    };

    if selected.is_empty() {
        cliclack::log::warning("No components selected. Exiting.")?;
        cliclack::outro("Nothing to do.")?;
        return Ok(());
    }

    let resolution = resolve(&selected, &available, &[]);
    prompts::warn_unresolved(&resolution)?;

    prompts::install_all(
        &resolution.components,
        &layout,
        |component| Placement::for_component(&component.name, config.global_components()),
        &project_config.alias_rewrites(),
        args.overwrite,
        PackageManager::detect(&root),
    )
    .await?;

    cliclack::outro(format!("Added {} component(s).", resolution.components.len()))?;
    Ok(())
}
