//! Package manager detection and dependency installation

use crate::error::PackageManagerError;
use std::fmt;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Supported JavaScript package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

/// Lock files in order of precedence
const LOCK_FILES: &[(&str, PackageManager)] = &[
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("bun.lockb", PackageManager::Bun),
    ("bun.lock", PackageManager::Bun),
];

impl PackageManager {
    /// Detect the package manager from lock files in the project root, defaulting to npm
    pub fn detect(project_root: &Path) -> Self {
        LOCK_FILES
            .iter()
            .find(|(lock_file, _)| project_root.join(lock_file).exists())
            .map(|(_, manager)| *manager)
            .unwrap_or(PackageManager::Npm)
    }

    /// Executable name
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// Arguments that add `dependencies` to the project in one call
    pub fn add_args(&self, dependencies: &[String]) -> Vec<String> {
        let verb = match self {
            PackageManager::Npm => "install",
            _ => "add",
        };
        std::iter::once(verb.to_string())
            .chain(dependencies.iter().cloned())
            .collect()
    }

    /// Install `dependencies` in `cwd`. Does nothing for an empty list.
    pub async fn add(
        &self,
        dependencies: &[String],
        cwd: &Path,
    ) -> Result<(), PackageManagerError> {
        if dependencies.is_empty() {
            return Ok(());
        }

        run(self.command(), &self.add_args(dependencies), cwd).await
    }
}

/// Run `program` to completion in `cwd`, mapping a non-zero exit to [`PackageManagerError::Failed`]
async fn run(program: &str, args: &[String], cwd: &Path) -> Result<(), PackageManagerError> {
    let command = std::iter::once(program.to_string())
        .chain(args.iter().cloned())
        .collect::<Vec<_>>()
        .join(" ");

    let output = TokioCommand::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|source| PackageManagerError::Spawn {
            command: command.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(PackageManagerError::Failed {
            command,
            code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_from_lock_files() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Npm);

        std::fs::write(dir.path().join("yarn.lock"), "").unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Yarn);

        std::fs::write(dir.path().join("pnpm-lock.yaml"), "").unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Pnpm);
    }

    #[test]
    fn test_add_args() {
        let deps = vec!["radix-vue".to_string(), "clsx".to_string()];
        assert_eq!(PackageManager::Npm.add_args(&deps), vec!["install", "radix-vue", "clsx"]);
        assert_eq!(PackageManager::Pnpm.add_args(&deps), vec!["add", "radix-vue", "clsx"]);
        assert_eq!(PackageManager::Bun.add_args(&deps), vec!["add", "radix-vue", "clsx"]);
    }

    #[tokio::test]
    async fn test_add_with_no_dependencies_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PackageManager::Npm.add(&[], dir.path()).await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_is_failed() {
        let dir = tempfile::tempdir().unwrap();
        let args = vec!["-c".to_string(), "echo 'no such package' >&2; exit 3".to_string()];

        match run("sh", &args, dir.path()).await {
            Err(PackageManagerError::Failed { code, stderr, command }) => {
                assert_eq!(code, 3);
                assert_eq!(stderr, "no such package");
                assert!(command.starts_with("sh -c"));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_zero_exit_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let args = vec!["-c".to_string(), "exit 0".to_string()];
        assert!(run("sh", &args, dir.path()).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let deps = vec!["clsx".to_string()];
        let result = run("ui-scaffold-no-such-tool", &deps, dir.path()).await;
        assert!(matches!(result, Err(PackageManagerError::Spawn { .. })));
    }
}
