use crate::areas::workspace::Workspace;
use crate::artifacts::diff::diff_target::DiffTarget;
use std::path::Path;

/// What the two command-line paths turned out to be.
#[derive(Debug)]
pub enum Comparison {
    Files { old: DiffTarget, new: DiffTarget },
    Trees { old: Workspace, new: Workspace },
}

impl Comparison {
    pub fn resolve(old: &Path, new: &Path) -> anyhow::Result<Self> {
        match (old.is_dir(), new.is_dir()) {
            (true, true) => Ok(Comparison::Trees {
                old: Workspace::new(old.canonicalize()?.into_boxed_path()),
                new: Workspace::new(new.canonicalize()?.into_boxed_path()),
            }),
            (true, false) | (false, true) => {
                let (dir, other) = if old.is_dir() { (old, new) } else { (new, old) };
                if other.exists() {
                    anyhow::bail!(
                        "Cannot compare directory {} with file {}",
                        dir.display(),
                        other.display()
                    );
                }
                anyhow::bail!("The specified path does not exist: {:?}", other);
            }
            (false, false) => {
                if !old.exists() && !new.exists() {
                    anyhow::bail!("Neither {} nor {} exists", old.display(), new.display());
                }

                Ok(Comparison::Files {
                    old: DiffTarget::from_path(old)?,
                    new: DiffTarget::from_path(new)?,
                })
            }
        }
    }
}
