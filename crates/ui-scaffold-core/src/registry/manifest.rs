//! Component manifest types and parsing

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component as PathComponent, Path};

/// Classification of a component file, used to pick its destination directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Components,
    Composables,
    Utils,
    Icons,
    Transitions,
}

impl FileType {
    /// Directory segment for this file type
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Components => "components",
            FileType::Composables => "composables",
            FileType::Utils => "utils",
            FileType::Icons => "icons",
            FileType::Transitions => "transitions",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One file belonging to a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentFile {
    /// Base name of the file at its destination
    pub name: String,

    /// Directory of the file inside the registry source tree
    pub dir: String,

    /// Full source text
    pub content: String,

    /// Subdirectory below the file type directory
    pub placement_dir: String,

    #[serde(rename = "type")]
    pub file_type: FileType,
}

impl ComponentFile {
    /// The first of `name` or `placement_dir` that could resolve outside its
    /// type directory (absolute, or containing `..`), if any
    pub fn unsafe_path(&self) -> Option<&str> {
        let mut name = Path::new(&self.name).components();
        if !matches!((name.next(), name.next()), (Some(PathComponent::Normal(_)), None)) {
            return Some(&self.name);
        }

        let stays_below = Path::new(&self.placement_dir)
            .components()
            .all(|c| matches!(c, PathComponent::Normal(_) | PathComponent::CurDir));
        if !stays_below {
            return Some(&self.placement_dir);
        }
        None
    }
}

/// A named installable unit from the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Short identifier, accepted as an alias for `name`
    pub component: String,

    /// Unique human-facing identifier
    pub name: String,

    /// External packages the component needs
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Other components (by name) the component needs
    #[serde(default)]
    pub internal_dependencies: Vec<String>,

    /// Files in write order
    pub files: Vec<ComponentFile>,
}

impl Component {
    /// Whether `query` names this component by name or short identifier
    pub fn matches(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query) || self.component.eq_ignore_ascii_case(query)
    }
}

/// Parse a manifest body (a JSON array of components).
///
/// File names and placement dirs that would escape the project are rejected.
pub fn parse_manifest(content: &str) -> Result<Vec<Component>, serde_json::Error> {
    let components: Vec<Component> = serde_json::from_str(content)?;
    for component in &components {
        if let Some(path) = component.files.iter().find_map(ComponentFile::unsafe_path) {
            return Err(serde::de::Error::custom(format!(
                "component {} has an unsafe file path: {:?}",
                component.name, path
            )));
        }
    }
    Ok(components)
}

/// Find a component by name or short identifier, preferring an exact name match
pub fn find_component<'a>(components: &'a [Component], query: &str) -> Option<&'a Component> {
    components
        .iter()
        .find(|c| c.name == query)
        .or_else(|| components.iter().find(|c| c.matches(query)))
}
