//! Line-level comparison of installed files against the registry

use crate::install::{AliasRewrites, InstalledComponent};
use anyhow::{Context, Result};
use colored::Colorize;
use similar::TextDiff;
use std::path::PathBuf;
use tokio::fs;

/// Kind of a diff segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeTag {
    Unchanged,
    Added,
    Removed,
}

/// A contiguous run of lines sharing one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub tag: ChangeTag,
    pub value: String,
}

/// Differences for one installed file
#[derive(Debug, Clone)]
pub struct FileDiff {
    pub file: String,
    pub path: PathBuf,
    pub changes: Vec<Change>,
}

/// Compare registry content against local content line by line.
///
/// Lines present only locally are `Added`, lines present only in the registry
/// are `Removed`.
pub fn diff_lines(registry: &str, local: &str) -> Vec<Change> {
    let diff = TextDiff::from_lines(registry, local);
    let mut changes: Vec<Change> = Vec::new();

    for change in diff.iter_all_changes() {
        let tag = match change.tag() {
            similar::ChangeTag::Equal => ChangeTag::Unchanged,
            similar::ChangeTag::Insert => ChangeTag::Added,
            similar::ChangeTag::Delete => ChangeTag::Removed,
        };
        match changes.last_mut() {
            Some(last) if last.tag == tag => last.value.push_str(change.value()),
            _ => changes.push(Change {
                tag,
                value: change.value().to_string(),
            }),
        }
    }

    changes
}

/// A single segment means both sides are identical
pub fn is_changed(changes: &[Change]) -> bool {
    changes.len() > 1
}

/// Diff every installed file of a component against its (rewritten) registry content.
///
/// Files removed from disk since they were located are skipped. Only files
/// with differences are returned.
pub async fn diff_component(
    component: &InstalledComponent,
    rewrites: &AliasRewrites,
) -> Result<Vec<FileDiff>> {
    let mut diffs = Vec::new();

    for installed in &component.files {
        if !fs::try_exists(&installed.local_path).await.unwrap_or(false) {
            continue;
        }

        let local = fs::read_to_string(&installed.local_path)
            .await
            .with_context(|| format!("Failed to read {}", installed.local_path.display()))?;
        let registry = rewrites.apply(&installed.file.content);

        let changes = diff_lines(&registry, &local);
        if is_changed(&changes) {
            diffs.push(FileDiff {
                file: installed.file.name.clone(),
                path: installed.local_path.clone(),
                changes,
            });
        }
    }

    Ok(diffs)
}

/// Render segments for the terminal: added in green, removed in red
pub fn render_changes(changes: &[Change]) -> String {
    changes
        .iter()
        .map(|change| match change.tag {
            ChangeTag::Added => change.value.green().to_string(),
            ChangeTag::Removed => change.value.red().to_string(),
            ChangeTag::Unchanged => change.value.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::install::{InstalledFile, PathLayout, Placement};
    use crate::registry::manifest::{ComponentFile, FileType};

    #[test]
    fn test_identical_content_is_single_segment() {
        let changes = diff_lines("a\nb\n", "a\nb\n");
        assert_eq!(
            changes,
            vec![Change {
                tag: ChangeTag::Unchanged,
                value: "a\nb\n".to_string(),
            }]
        );
        assert!(!is_changed(&changes));
    }

    #[test]
    fn test_detects_insertion() {
        let changes = diff_lines("a\nb\n", "a\nb\nc\n");
        assert_eq!(
            changes,
            vec![
                Change {
                    tag: ChangeTag::Unchanged,
                    value: "a\nb\n".to_string(),
                },
                Change {
                    tag: ChangeTag::Added,
                    value: "c\n".to_string(),
                },
            ]
        );
        assert!(is_changed(&changes));
    }

    #[test]
    fn test_detects_replacement() {
        let changes = diff_lines("a\nb\nc\n", "a\nx\nc\n");
        let tags: Vec<_> = changes.iter().map(|c| c.tag).collect();
        assert_eq!(
            tags,
            vec![
                ChangeTag::Unchanged,
                ChangeTag::Removed,
                ChangeTag::Added,
                ChangeTag::Unchanged,
            ]
        );
        assert_eq!(changes[1].value, "b\n");
        assert_eq!(changes[2].value, "x\n");
    }

    #[test]
    fn test_render_keeps_text() {
        colored::control::set_override(false);
        let rendered = render_changes(&diff_lines("a\n", "a\nb\n"));
        assert_eq!(rendered, "a\nb\n");
    }

    #[tokio::test]
    async fn test_diff_component_reports_only_changed_files() {
        let dir = tempfile::tempdir().unwrap();
        let layout = PathLayout::new(dir.path());
        let rewrites = AliasRewrites::from_aliases("@/utils", "@/ui/");

        let same = ComponentFile {
            name: "Same.vue".to_string(),
            dir: String::new(),
            content: "import x from '@/lib/utils'\n".to_string(),
            placement_dir: "same".to_string(),
            file_type: FileType::Components,
        };
        let edited = ComponentFile {
            name: "Edited.vue".to_string(),
            content: "line\n".to_string(),
            ..same.clone()
        };

        let mut files = Vec::new();
        for (file, local) in [(&same, "import x from '@/utils'\n"), (&edited, "line\nmine\n")] {
            let local_path = layout.file_path(file, Placement::Module);
            std::fs::create_dir_all(local_path.parent().unwrap()).unwrap();
            std::fs::write(&local_path, local).unwrap();
            files.push(InstalledFile {
                file: file.clone(),
                local_path,
            });
        }

        let component = InstalledComponent {
            name: "Pair".to_string(),
            component: "pair".to_string(),
            files,
        };

        let diffs = diff_component(&component, &rewrites).await.unwrap();
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].file, "Edited.vue");
        assert_eq!(diffs[0].changes[1].value, "mine\n");
    }
}
