use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

pub fn write_bytes(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(path, bytes)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", path, e));
}

/// Random prose, one sentence of filler words per line.
pub fn generate_lines(lines_count: usize) -> String {
    use fake::{Fake, faker::lorem::en::Words};

    (0..lines_count)
        .map(|_| Words(3..6).fake::<Vec<String>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}
