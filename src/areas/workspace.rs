use crate::artifacts::core::debug_log;
use crate::artifacts::diff::error::DiffError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 3] = [".git", ".", ".."];

/// A directory tree on one side of a comparison.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every regular file below the root, relative to it and sorted by path.
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        if !self.path.is_dir() {
            anyhow::bail!("The specified path is not a directory: {:?}", self.path);
        }

        let mut files = WalkDir::new(&self.path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| self.check_if_not_ignored_file_path(entry.path()))
            .collect::<Vec<_>>();
        files.sort();

        debug_log!("Listed {} files under {}", files.len(), self.path.display());

        Ok(files)
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| {
            if let std::path::Component::Normal(name) = component {
                let name_str = name.to_string_lossy();
                IGNORED_PATHS.contains(&name_str.as_ref())
            } else {
                false
            }
        })
    }

    fn check_if_not_ignored_file_path(&self, path: &Path) -> Option<PathBuf> {
        let relative = path.strip_prefix(self.path.as_ref()).ok()?;

        if path.is_file() && !Self::is_ignored(relative) {
            Some(relative.to_path_buf())
        } else {
            None
        }
    }

    pub fn contains(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &Path) -> Result<Vec<u8>, DiffError> {
        let full_path = self.path.join(file_path);

        std::fs::read(&full_path).map_err(|source| DiffError::Io {
            path: full_path,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::{FileWriteStr, PathChild};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn workspace_dir() -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp dir");
        dir.child("1.txt").write_str("one").expect("write 1.txt");
        dir.child("a/2.txt")
            .write_str("two")
            .expect("write a/2.txt");
        dir.child("a/b/3.txt")
            .write_str("three")
            .expect("write a/b/3.txt");
        dir.child(".git/HEAD")
            .write_str("ref: refs/heads/main")
            .expect("write .git/HEAD");
        dir
    }

    #[rstest]
    fn lists_files_sorted_and_skips_git_dir(workspace_dir: TempDir) -> anyhow::Result<()> {
        let workspace = Workspace::new(workspace_dir.path().into());

        assert_eq!(
            workspace.list_files()?,
            vec![
                PathBuf::from("1.txt"),
                PathBuf::from("a/2.txt"),
                PathBuf::from("a/b/3.txt"),
            ]
        );

        Ok(())
    }

    #[rstest]
    fn reads_raw_bytes(workspace_dir: TempDir) -> anyhow::Result<()> {
        let workspace = Workspace::new(workspace_dir.path().into());

        assert_eq!(workspace.read_file(Path::new("a/2.txt"))?, b"two".to_vec());
        assert!(workspace.contains(Path::new("a/b/3.txt")));
        assert!(!workspace.contains(Path::new("missing.txt")));

        Ok(())
    }

    #[rstest]
    fn missing_file_is_an_io_error(workspace_dir: TempDir) {
        let workspace = Workspace::new(workspace_dir.path().into());

        let result = workspace.read_file(Path::new("missing.txt"));

        assert!(matches!(result, Err(DiffError::Io { .. })));
    }
}
