use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;

/// The UE5 C++ source tree locations derived from a project root:
/// `<root>/Source/<name>` with its `Public` and `Private` subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    project_root: PathBuf,
    source_root: PathBuf,
    public_dir: PathBuf,
    private_dir: PathBuf,
}

impl SourceLayout {
    pub fn new(project_root: impl Into<PathBuf>, project_name: &str) -> Self {
        let project_root = project_root.into();
        let source_root = project_root.join("Source").join(project_name);
        let public_dir = source_root.join("Public");
        let private_dir = source_root.join("Private");
        Self {
            project_root,
            source_root,
            public_dir,
            private_dir,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    pub fn private_dir(&self) -> &Path {
        &self.private_dir
    }

    /// Create the source tree if absent (never deletes anything) and return
    /// the directories ensured, in creation order.
    pub fn ensure(&self) -> Result<Vec<PathBuf>, ScaffoldError> {
        let dirs = [&self.source_root, &self.public_dir, &self.private_dir];
        for dir in dirs {
            fs::create_dir_all(dir).map_err(|e| ScaffoldError::io(dir.clone(), e))?;
        }
        Ok(dirs.into_iter().cloned().collect())
    }
}
