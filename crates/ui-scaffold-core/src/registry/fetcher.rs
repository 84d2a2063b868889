//! Component manifest fetching from the remote registry or a local directory
//!
//! The manifest is fetched fresh on every call; there is no cache and no retry.
//! A single failed request or schema violation aborts the command.

use super::manifest::{parse_manifest, Component};
use crate::error::RegistryError;
use crate::product::ProductConfig;
use std::path::PathBuf;
use tokio::fs;
use url::Url;

/// Manifest location relative to the registry base
const MANIFEST_SEGMENTS: [&str; 2] = ["api", "components.json"];

/// Registry source - either remote URL or local directory
#[derive(Debug, Clone)]
pub enum RegistrySource {
    Remote(Url),
    Local(PathBuf),
}

impl RegistrySource {
    /// Create a remote registry source from a product config, honouring the URL override
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self, RegistryError> {
        let url_str = std::env::var(config.registry_url_env())
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| config.default_registry_url().to_string());
        let url = Url::parse(&url_str).map_err(|_| RegistryError::InvalidUrl(url_str.clone()))?;
        Ok(Self::Remote(url))
    }

    /// Create a local registry source from a path
    pub fn local(path: PathBuf) -> Self {
        Self::Local(path)
    }
}

/// Registry client - retrieves the list of installable components
pub struct RegistryClient {
    source: RegistrySource,
    client: reqwest::Client,
}

impl RegistryClient {
    /// Create a new client with a custom user agent and optional proxy.
    ///
    /// Without a proxy, requests go out directly and system proxy settings are ignored.
    pub fn new(
        source: RegistrySource,
        user_agent: &str,
        proxy: Option<&str>,
    ) -> Result<Self, RegistryError> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(proxy_url) = proxy {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|source| {
                RegistryError::InvalidProxy {
                    url: proxy_url.to_string(),
                    source,
                }
            })?;
            builder = builder.proxy(proxy);
        } else {
            builder = builder.no_proxy();
        }

        Ok(Self {
            source,
            client: builder.build().unwrap_or_else(|_| reqwest::Client::new()),
        })
    }

    /// Create a client from a product config (registry URL and proxy from the environment)
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self, RegistryError> {
        let source = RegistrySource::from_config(config)?;
        let proxy = std::env::var(config.proxy_env())
            .ok()
            .filter(|value| !value.trim().is_empty());
        Self::new(source, config.user_agent(), proxy.as_deref())
    }

    /// Create a client for a local registry directory
    pub fn from_local(path: PathBuf, user_agent: &str) -> Result<Self, RegistryError> {
        Self::new(RegistrySource::local(path), user_agent, None)
    }

    /// Build the manifest URL by appending path segments, preserving query parameters
    fn manifest_url(base: &Url) -> Result<Url, RegistryError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| RegistryError::InvalidUrl(base.to_string()))?
            .pop_if_empty()
            .extend(MANIFEST_SEGMENTS);
        Ok(url)
    }

    /// Fetch and validate the full list of available components
    pub async fn fetch_available_components(&self) -> Result<Vec<Component>, RegistryError> {
        match &self.source {
            RegistrySource::Remote(base_url) => {
                let url = Self::manifest_url(base_url)?;
                let response = self.client.get(url.clone()).send().await.map_err(|source| {
                    RegistryError::Request {
                        url: url.clone(),
                        source,
                    }
                })?;

                if !response.status().is_success() {
                    return Err(RegistryError::Status {
                        url,
                        status: response.status(),
                    });
                }

                let content = response.text().await.map_err(|source| RegistryError::Request {
                    url: url.clone(),
                    source,
                })?;
                parse_manifest(&content).map_err(|source| RegistryError::Parse {
                    origin: url.to_string(),
                    source,
                })
            }
            RegistrySource::Local(path) => {
                let manifest_path = MANIFEST_SEGMENTS
                    .iter()
                    .fold(path.clone(), |acc, segment| acc.join(segment));
                let content = fs::read_to_string(&manifest_path).await.map_err(|source| {
                    RegistryError::Io {
                        path: manifest_path.clone(),
                        source,
                    }
                })?;
                parse_manifest(&content).map_err(|source| RegistryError::Parse {
                    origin: manifest_path.display().to_string(),
                    source,
                })
            }
        }
    }

    /// Get the registry source
    pub fn source(&self) -> &RegistrySource {
        &self.source
    }
}
