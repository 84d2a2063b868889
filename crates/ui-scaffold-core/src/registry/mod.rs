//! Component registry access
//!
//! This module provides:
//! - Manifest types (Component, ComponentFile, FileType)
//! - Manifest fetching from remote URLs or local directories

pub mod fetcher;
pub mod manifest;

pub use fetcher::{RegistryClient, RegistrySource};
pub use manifest::{find_component, parse_manifest, Component, ComponentFile, FileType};
