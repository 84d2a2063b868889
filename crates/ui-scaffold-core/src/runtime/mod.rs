//! External tooling used during installation
//!
//! This module provides:
//! - Package manager detection from project lock files
//! - Batch installation of a component's external dependencies

pub mod package_manager;

pub use package_manager::PackageManager;
