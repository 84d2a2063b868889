//! wisemen-ui CLI - Add wisemen-ui components to your project

use anyhow::Result;
use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use ui_scaffold_core::tui::{AddArgs, DiffArgs, InitArgs, ProjectArgs};
use ui_scaffold_core::ProductConfig;

/// wisemen-ui product configuration
#[derive(Clone)]
pub struct WisemenUiConfig;

impl ProductConfig for WisemenUiConfig {
    fn name(&self) -> &'static str {
        "wisemen-ui"
    }

    fn display_name(&self) -> &'static str {
        "wisemen-ui"
    }

    fn default_registry_url(&self) -> &'static str {
        "https://wisemen-components.netlify.app/"
    }

    fn registry_url_env(&self) -> &'static str {
        "COMPONENTS_BASE_URL"
    }

    fn global_components(&self) -> &'static [&'static str] {
        &["Transitions", "Icons"]
    }

    fn cli_description(&self) -> &'static str {
        "Add wisemen-ui components to your project"
    }
}

#[derive(Parser, Debug)]
#[command(name = "wisemen-ui")]
#[command(about = "Add wisemen-ui components to your project")]
#[command(version, disable_version_flag = true)]
pub struct Args {
    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure your Vue project
    Init(CliInitArgs),
    /// Add components to your project
    Add(CliAddArgs),
    /// Check for updates against the registry
    Diff(CliDiffArgs),
}

#[derive(ClapArgs, Debug)]
pub struct CliProjectArgs {
    /// Project root (defaults to the current directory)
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Local directory to use as the registry instead of fetching from remote (for development use)
    #[arg(long = "registry-dir")]
    pub registry_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct CliInitArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    #[command(flatten)]
    pub project: CliProjectArgs,
}

#[derive(Parser, Debug)]
pub struct CliAddArgs {
    /// Components to add (`all` or `*` for every component)
    pub components: Vec<String>,

    /// Overwrite existing files
    #[arg(short, long)]
    pub overwrite: bool,

    #[command(flatten)]
    pub project: CliProjectArgs,
}

#[derive(Parser, Debug)]
pub struct CliDiffArgs {
    /// The component name
    pub component: Option<String>,

    #[command(flatten)]
    pub project: CliProjectArgs,
}

impl From<CliProjectArgs> for ProjectArgs {
    fn from(args: CliProjectArgs) -> Self {
        ProjectArgs {
            cwd: args.cwd,
            registry_dir: args.registry_dir,
        }
    }
}

impl From<CliInitArgs> for InitArgs {
    fn from(args: CliInitArgs) -> Self {
        InitArgs {
            yes: args.yes,
            project: args.project.into(),
        }
    }
}

impl From<CliAddArgs> for AddArgs {
    fn from(args: CliAddArgs) -> Self {
        AddArgs {
            components: args.components,
            overwrite: args.overwrite,
            project: args.project.into(),
        }
    }
}

impl From<CliDiffArgs> for DiffArgs {
    fn from(args: CliDiffArgs) -> Self {
        DiffArgs {
            component: args.component,
            project: args.project.into(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = WisemenUiConfig;

    let result = match args.command {
        Command::Init(init_args) => ui_scaffold_core::run_init(&config, init_args.into()).await,
        Command::Add(add_args) => ui_scaffold_core::run_add(&config, add_args.into()).await,
        Command::Diff(diff_args) => ui_scaffold_core::run_diff(&config, diff_args.into()).await,
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        ui_scaffold_core::tui::report_error(&err);
        std::process::exit(1);
    }

    Ok(())
}
