//! Project config file (`components.json`) read by `add`/`diff` and written by `init`

use crate::error::ConfigError;
use crate::install::AliasRewrites;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SCHEMA: &str = "https://wisemen-components.netlify.app/schema.json";
pub const DEFAULT_STYLE: &str = "default";

/// Import aliases of the consuming project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Aliases {
    pub utils: String,
    pub components: String,
    pub composables: String,
    pub transitions: String,
    pub icons: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
}

impl Default for Aliases {
    fn default() -> Self {
        Self {
            utils: "@/modules/ui/utils/utils".to_string(),
            components: "@/modules/ui/components/".to_string(),
            composables: "@/modules/ui/composables/".to_string(),
            transitions: "@/modules/ui/transitions/".to_string(),
            icons: "@/modules/ui/icons/".to_string(),
            styles: None,
            config: None,
            types: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub style: String,
    pub aliases: Aliases,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            schema: DEFAULT_SCHEMA.to_string(),
            style: DEFAULT_STYLE.to_string(),
            aliases: Aliases::default(),
        }
    }
}

impl ProjectConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content + "\n").map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Rewrites from the registry's canonical aliases to this project's aliases
    pub fn alias_rewrites(&self) -> AliasRewrites {
        let mut components = self.aliases.components.clone();
        if !components.ends_with('/') {
            components.push('/');
        }
        AliasRewrites::from_aliases(&self.aliases.utils, &components)
    }
}

/// Resolve an import alias to a path below `project_root`.
///
/// `@/` and `~/` point at `<root>/src/`; anything else is taken relative to the root.
pub fn resolve_alias(alias: &str, project_root: &Path) -> PathBuf {
    let src_relative = alias
        .strip_prefix("@/")
        .or_else(|| alias.strip_prefix("~/"));

    match src_relative {
        Some(rest) => project_root.join("src").join(rest),
        None => project_root.join(alias.trim_start_matches("./")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("components.json");

        let mut config = ProjectConfig::default();
        config.aliases.styles = Some("@/assets/styles".to_string());
        config.save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"$schema\""));
        assert!(!content.contains("\"types\""));

        let loaded = ProjectConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("components.json");
        std::fs::write(&path, r#"{ "aliases": { "utils": "@/lib/cn" } }"#).unwrap();

        let config = ProjectConfig::load(&path).unwrap();
        assert_eq!(config.style, DEFAULT_STYLE);
        assert_eq!(config.aliases.utils, "@/lib/cn");
        assert_eq!(config.aliases.components, Aliases::default().components);
    }

    #[test]
    fn test_load_missing_and_invalid() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("components.json");

        assert!(matches!(ProjectConfig::load(&path), Err(ConfigError::NotFound(_))));
        assert_eq!(ProjectConfig::load_or_default(&path).unwrap(), ProjectConfig::default());

        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(ProjectConfig::load_or_default(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_alias_rewrites_normalise_component_prefix() {
        let mut config = ProjectConfig::default();
        config.aliases.components = "@/ui".to_string();
        config.aliases.utils = "@/lib/cn".to_string();

        let rewrites = config.alias_rewrites();
        assert_eq!(
            rewrites.apply("'@/lib/utils' '@/components/ui/Button.vue'"),
            "'@/lib/cn' '@/ui/Button.vue'"
        );
    }

    #[test]
    fn test_resolve_alias() {
        let root = Path::new("/project");
        assert_eq!(resolve_alias("@/assets/styles", root), PathBuf::from("/project/src/assets/styles"));
        assert_eq!(resolve_alias("~/types", root), PathBuf::from("/project/src/types"));
        assert_eq!(resolve_alias("./config", root), PathBuf::from("/project/config"));
    }
}
