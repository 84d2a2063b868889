//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a product binary implements to configure
//! which registry it installs from and how components land in a project.

/// Configuration trait for different CLI products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - Registry source URL and its environment overrides
/// - The set of global components installed by `init`
/// - Packages every project needs
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, user agent)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Default base URL of the component registry
    fn default_registry_url(&self) -> &'static str;

    /// Environment variable name for overriding the registry URL
    fn registry_url_env(&self) -> &'static str;

    /// Environment variable holding an HTTP(S) proxy for registry requests
    fn proxy_env(&self) -> &'static str {
        "https_proxy"
    }

    /// Components installed by `init` at the project root and hidden from the
    /// `add` selection prompt
    fn global_components(&self) -> &'static [&'static str];

    /// Packages installed into the project by `init`
    fn project_dependencies(&self) -> &'static [&'static str] {
        &[]
    }

    /// Name of the project config file written by `init`
    fn config_file_name(&self) -> &'static str {
        "components.json"
    }

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }

    /// Whether a component name belongs to the global set
    fn is_global(&self, component_name: &str) -> bool {
        self.global_components().contains(&component_name)
    }
}
