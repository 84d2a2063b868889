//! UI Scaffold Core - Shared library for installing UI components from a registry
//!
//! This library copies component source files from a remote registry into a
//! consumer project, rewriting import aliases, installing external packages
//! and pulling in every component a selection depends on.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Registry fetch, dependency resolution, path layout,
//!   file materialization and line diffing. None of these print anything.
//! - **Layer 2: Product Configuration** - `ProductConfig` trait describing one CLI binary
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based commands (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based `init`/`add`/`diff` commands
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use ui_scaffold_core::{install, registry::RegistryClient};
//!
//! let client = RegistryClient::from_config(&MyConfig)?;
//! let available = client.fetch_available_components().await?;
//! let resolution = install::resolve(&selected, &available, &[]);
//! for component in &resolution.components {
//!     let placement = Placement::for_component(&component.name, MyConfig.global_components());
//!     install::write_component_files(component, &layout, placement, &rewrites, false).await?;
//! }
//! ```

pub mod config;
pub mod diff;
pub mod error;
pub mod install;
pub mod product;
pub mod registry;
pub mod runtime;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{CommandError, ConfigError, PackageManagerError, RegistryError};
pub use install::{
    install_component, locate_installed, resolve, write_component_files, AliasRewrites,
    InstallReport, PathLayout, Placement, Resolution,
};
pub use product::ProductConfig;
pub use registry::{Component, ComponentFile, FileType, RegistryClient, RegistrySource};
pub use runtime::PackageManager;

#[cfg(feature = "tui")]
pub use tui::{run_add, run_diff, run_init};
