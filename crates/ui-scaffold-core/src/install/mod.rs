//! Computing and materializing the installation set
//!
//! This module provides:
//! - Internal dependency resolution (selection -> full install set)
//! - Destination path layout and installed-state detection
//! - File materialization with alias rewriting and overwrite policy

pub mod locator;
pub mod materializer;
pub mod resolver;

pub use locator::{
    locate_component, locate_installed, InstalledComponent, InstalledFile, PathLayout, Placement,
};
pub use materializer::{
    install_component, write_component_files, AliasRewrites, InstallReport,
    CANONICAL_COMPONENTS_ALIAS, CANONICAL_UTILS_ALIAS,
};
pub use resolver::{resolve, select_components, Resolution, Selection, UnresolvedDependency};
