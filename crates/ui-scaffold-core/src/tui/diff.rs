//! `diff`: show local drift of an installed component from the registry

use super::prompts::{self, ProjectArgs};
use crate::diff::{diff_component, render_changes};
use crate::error::CommandError;
use crate::install::{locate_installed, PathLayout};
use crate::product::ProductConfig;
use anyhow::Result;
use colored::Colorize;

/// Arguments for the diff command
#[derive(Debug, Clone, Default)]
pub struct DiffArgs {
    /// Component to check; prompts among installed components when absent
    pub component: Option<String>,

    pub project: ProjectArgs,
}

pub async fn run_diff<C: ProductConfig>(config: &C, args: DiffArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    let root = prompts::project_root(&args.project)?;
    let layout = PathLayout::new(&root);
    let project_config = prompts::load_project_config(config, &layout)?;

    let client = prompts::setup_registry(config, &args.project.registry_dir)?;
    let available = prompts::fetch_components(&client).await?;
    let installed = locate_installed(&available, &layout, config.global_components()).await?;

    let name = match args.component {
        Some(name) => name,
        None if installed.is_empty() => {
            cliclack::log::info("No installed components found.")?;
            cliclack::outro("Nothing to check.")?;
            return Ok(());
        }
        None => prompts::prompt_for_installed(&installed)?,
    };

    let component = installed
        .iter()
        .find(|c| c.name == name)
        .or_else(|| {
            installed.iter().find(|c| {
                c.name.eq_ignore_ascii_case(&name) || c.component.eq_ignore_ascii_case(&name)
            })
        })
        .ok_or_else(|| CommandError::ComponentNotFound(name.clone()))?;

    let diffs = diff_component(component, &project_config.alias_rewrites()).await?;
    if diffs.is_empty() {
        cliclack::log::info(format!("No updates found for {}.", name))?;
        cliclack::outro("Up to date.")?;
        return Ok(());
    }

    for file_diff in &diffs {
        cliclack::log::info(format!("- {}", file_diff.path.display().to_string().cyan()))?;
        print!("{}", render_changes(&file_diff.changes));
        println!();
    }

    cliclack::outro(format!("{} file(s) differ from the registry.", diffs.len()))?;
    Ok(())
}
