//! `init`: configure a project and install the global components

use super::prompts::{self, ProjectArgs};
use crate::config::{resolve_alias, ProjectConfig, GLOBALS_CSS, TAILWIND_CONFIG};
use crate::install::{resolve, PathLayout, Placement};
use crate::product::ProductConfig;
use crate::registry::Component;
use crate::runtime::PackageManager;
use anyhow::{Context, Result};
use tokio::fs;

/// Default location of the global stylesheet, relative to the project root
const DEFAULT_STYLES_DIR: &str = "src/assets/styles";

/// Arguments for the init command
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Skip the confirmation prompt
    pub yes: bool,

    pub project: ProjectArgs,
}

pub async fn run_init<C: ProductConfig>(config: &C, args: InitArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    cliclack::log::warning(
        "This command assumes a Vue project with TypeScript and Tailwind CSS.",
    )?;

    if !args.yes {
        let proceed: bool = cliclack::confirm(
            "Running this command will install dependencies and overwrite your existing \
             tailwind.config.js / globals.css. Proceed?",
        )
        .initial_value(true)
        .interact()?;

        if !proceed {
            cliclack::outro("Init cancelled.")?;
            return Ok(());
        }
    }

    let root = prompts::project_root(&args.project)?;
    let layout = PathLayout::new(&root);
    let package_manager = PackageManager::detect(&root);

    // Step 1: Project dependencies
    let project_dependencies: Vec<String> = config
        .project_dependencies()
        .iter()
        .map(|d| d.to_string())
        .collect();
    if !project_dependencies.is_empty() {
        let spinner = cliclack::spinner();
        spinner.start("Installing dependencies...");
        package_manager.add(&project_dependencies, &root).await?;
        spinner.stop(format!("Installed dependencies with {}", package_manager));
    }

    // Step 2: Project config
    let config_path = root.join(config.config_file_name());
    let project_config = if config_path.exists() {
        ProjectConfig::load(&config_path)?
    } else {
        let project_config = ProjectConfig::default();
        project_config.save(&config_path)?;
        cliclack::log::success(format!("Wrote {}", config_path.display()))?;
        project_config
    };

    // Step 3: Styles and tailwind config
    let styles_dir = project_config
        .aliases
        .styles
        .as_deref()
        .map(|alias| resolve_alias(alias, &root))
        .unwrap_or_else(|| root.join(DEFAULT_STYLES_DIR));
    fs::create_dir_all(&styles_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", styles_dir.display()))?;

    let spinner = cliclack::spinner();
    spinner.start("Adding styles with CSS variables...");
    let styles_path = styles_dir.join("globals.css");
    fs::write(&styles_path, GLOBALS_CSS)
        .await
        .with_context(|| format!("Failed to write file: {}", styles_path.display()))?;
    spinner.stop(format!("Wrote {}", styles_path.display()));

    let tailwind_dir = project_config
        .aliases
        .config
        .as_deref()
        .map(|alias| resolve_alias(alias, &root))
        .unwrap_or_else(|| root.clone());
    fs::create_dir_all(&tailwind_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", tailwind_dir.display()))?;

    let spinner = cliclack::spinner();
    spinner.start("Updating tailwind.config.js...");
    let tailwind_path = tailwind_dir.join("tailwind.config.js");
    fs::write(&tailwind_path, TAILWIND_CONFIG)
        .await
        .with_context(|| format!("Failed to write file: {}", tailwind_path.display()))?;
    spinner.stop(format!("Wrote {}", tailwind_path.display()));

    // Step 4: Global components and their dependencies
    let client = prompts::setup_registry(config, &args.project.registry_dir)?;
    let available = prompts::fetch_components(&client).await?;

    let globals: Vec<Component> = available
        .iter()
        .filter(|c| config.is_global(&c.name))
        .cloned()
        .collect();
    let resolution = resolve(&globals, &available, &[]);
    prompts::warn_unresolved(&resolution)?;

    prompts::install_all(
        &resolution.components,
        &layout,
        |component| Placement::for_component(&component.name, config.global_components()),
        &project_config.alias_rewrites(),
        false,
        package_manager,
    )
    .await?;

    cliclack::outro("Project initialized.")?;
    Ok(())
}
