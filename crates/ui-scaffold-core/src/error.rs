//! Error types surfaced by the registry, config and command layers

use std::path::PathBuf;
use url::Url;

/// Failure to obtain a usable component manifest
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Invalid registry URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid proxy URL: {url}")]
    InvalidProxy {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch components from {url}")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch components from {url}: HTTP {status}")]
    Status {
        url: Url,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid component manifest from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure to read or write the project config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize config")]
    Serialize(#[from] serde_json::Error),
}

/// Failure of a package-manager subprocess
#[derive(Debug, thiserror::Error)]
pub enum PackageManagerError {
    #[error("Failed to run `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed with exit code {code}:\n{stderr}")]
    Failed {
        command: String,
        code: i32,
        stderr: String,
    },
}

/// User-facing command outcomes that end the invocation
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("The component {0} does not exist.")]
    ComponentNotFound(String),

    #[error("No components available in the registry.")]
    NoComponentsAvailable,
}
