use crate::areas::workspace::Workspace;
use crate::artifacts::core::debug_log;
use bitflags::bitflags;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct DiffFilter: u32 {
        const ADDED = 0b0001;
        const DELETED = 0b0010;
        const MODIFIED = 0b0100;
    }
}

impl DiffFilter {
    pub fn try_parse(s: &str) -> Option<Self> {
        let mut filter = Self::empty();

        for c in s.chars() {
            match c {
                'A' => filter |= Self::ADDED,
                'D' => filter |= Self::DELETED,
                'M' => filter |= Self::MODIFIED,
                _ => return None,
            }
        }

        Some(filter)
    }
}

impl Default for DiffFilter {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeChangeType {
    Added,
    Deleted,
    Modified,
}

impl TreeChangeType {
    pub fn from_presence(in_old: bool, in_new: bool, same_content: bool) -> Option<Self> {
        match (in_old, in_new) {
            (false, true) => Some(TreeChangeType::Added),
            (true, false) => Some(TreeChangeType::Deleted),
            (true, true) if !same_content => Some(TreeChangeType::Modified),
            _ => None,
        }
    }

    pub fn matches_filter(&self, filter: DiffFilter) -> bool {
        match self {
            TreeChangeType::Added => filter.contains(DiffFilter::ADDED),
            TreeChangeType::Deleted => filter.contains(DiffFilter::DELETED),
            TreeChangeType::Modified => filter.contains(DiffFilter::MODIFIED),
        }
    }

    pub fn status_char(&self) -> char {
        match self {
            TreeChangeType::Added => 'A',
            TreeChangeType::Deleted => 'D',
            TreeChangeType::Modified => 'M',
        }
    }
}

pub type ChangeSet = BTreeMap<PathBuf, TreeChangeType>;

/// Pairs the files of two directory trees by relative path.
#[derive(Debug)]
pub struct TreeDiff<'w> {
    old: &'w Workspace,
    new: &'w Workspace,
    change_set: ChangeSet,
}

impl<'w> TreeDiff<'w> {
    pub fn new(old: &'w Workspace, new: &'w Workspace) -> Self {
        TreeDiff {
            old,
            new,
            change_set: BTreeMap::new(),
        }
    }

    pub fn old(&self) -> &Workspace {
        self.old
    }

    pub fn new_side(&self) -> &Workspace {
        self.new
    }

    pub fn changes(&self) -> &ChangeSet {
        &self.change_set
    }

    pub fn compare(&mut self, filter: DiffFilter) -> anyhow::Result<()> {
        let old_files = self.old.list_files()?;
        let new_files = self.new.list_files()?;

        let all_files = old_files
            .iter()
            .chain(new_files.iter())
            .cloned()
            .collect::<BTreeSet<_>>();

        for file in all_files {
            let in_old = old_files.binary_search(&file).is_ok();
            let in_new = new_files.binary_search(&file).is_ok();
            let same_content = in_old && in_new && self.same_content(&file)?;

            let Some(change) = TreeChangeType::from_presence(in_old, in_new, same_content) else {
                continue;
            };

            debug_log!("{} {}", change.status_char(), file.display());

            if change.matches_filter(filter) {
                self.change_set.insert(file, change);
            }
        }

        Ok(())
    }

    fn same_content(&self, file: &Path) -> anyhow::Result<bool> {
        Ok(self.old.read_file(file)? == self.new.read_file(file)?)
    }
}
