use crate::areas::workspace::Workspace;
use crate::artifacts::diff::error::DiffError;
use crate::artifacts::diff::line_diff::split_lines;
use std::path::{Path, PathBuf};

const NULL_PATH: &str = "/dev/null";

/// One side of a comparison: a path and the text found there.
///
/// A side that does not exist is represented with empty text, so a missing
/// file compares like an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffTarget {
    pub(crate) file: PathBuf,
    pub(crate) exists: bool,
    pub(crate) text: String,
}

impl DiffTarget {
    pub fn from_text(file: &Path, text: impl Into<String>) -> Self {
        Self {
            file: file.to_path_buf(),
            exists: true,
            text: text.into(),
        }
    }

    pub fn from_bytes(file: &Path, bytes: Vec<u8>) -> Result<Self, DiffError> {
        let text = String::from_utf8(bytes).map_err(|source| DiffError::InvalidInput {
            path: file.to_path_buf(),
            source,
        })?;

        Ok(Self::from_text(file, text))
    }

    pub fn from_file(file: &Path, workspace: &Workspace) -> Result<Self, DiffError> {
        if !workspace.contains(file) {
            return Ok(Self::from_nothing(file));
        }

        let bytes = workspace.read_file(file)?;
        Self::from_bytes(file, bytes)
    }

    pub fn from_path(file: &Path) -> Result<Self, DiffError> {
        if !file.is_file() {
            return Ok(Self::from_nothing(file));
        }

        let bytes = std::fs::read(file).map_err(|source| DiffError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        Self::from_bytes(file, bytes)
    }

    pub fn from_nothing(file: &Path) -> Self {
        Self {
            file: file.to_path_buf(),
            exists: false,
            text: String::new(),
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn diff_path(&self) -> PathBuf {
        if self.exists {
            self.file.clone()
        } else {
            Path::new(NULL_PATH).to_path_buf()
        }
    }

    pub fn line_count(&self) -> usize {
        split_lines(&self.text).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::{FileWriteBin, FileWriteStr, PathChild};
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_utf8_is_rejected() {
        let result = DiffTarget::from_bytes(Path::new("blob.bin"), vec![0x66, 0x6f, 0xff]);

        match result {
            Err(DiffError::InvalidInput { path, .. }) => {
                assert_eq!(path, PathBuf::from("blob.bin"))
            }
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn absent_side_is_empty_text() {
        let target = DiffTarget::from_nothing(Path::new("gone.txt"));

        assert!(!target.exists());
        assert_eq!(target.text(), "");
        assert_eq!(target.line_count(), 1);
        assert_eq!(target.diff_path(), PathBuf::from("/dev/null"));
    }

    #[test]
    fn reads_from_workspace() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        dir.child("notes.txt").write_str("a\nb\n")?;
        dir.child("raw.bin").write_binary(&[0xc3, 0x28])?;
        let workspace = Workspace::new(dir.path().into());

        let target = DiffTarget::from_file(Path::new("notes.txt"), &workspace)?;
        assert!(target.exists());
        assert_eq!(target.text(), "a\nb\n");
        assert_eq!(target.line_count(), 3);
        assert_eq!(target.diff_path(), PathBuf::from("notes.txt"));

        let missing = DiffTarget::from_file(Path::new("missing.txt"), &workspace)?;
        assert!(!missing.exists());

        let binary = DiffTarget::from_file(Path::new("raw.bin"), &workspace);
        assert!(matches!(binary, Err(DiffError::InvalidInput { .. })));

        Ok(())
    }
}
