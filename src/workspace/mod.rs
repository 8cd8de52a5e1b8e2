//! Workspace collaborators: the project root, its file listing, and document
//! text. [`FsWorkspace`] is the on-disk implementation; hosts with their own
//! document model (unsaved buffers, virtual files) substitute theirs.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::errors::WorkspaceError;
use crate::index::{Document, FileRef};

/// The index's view of the host project.
#[async_trait]
pub trait Workspace: Send + Sync {
    /// Current project root, stripped from paths during reference
    /// computation.
    fn project_root(&self) -> &Path;

    /// The complete current project file list. Staleness within one scan is
    /// tolerated.
    async fn project_files(&self) -> Vec<FileRef>;

    /// Current text of `file`, including unsaved edits where the host keeps
    /// them. Fails for unreadable or non-text files.
    async fn document(&self, file: &FileRef) -> Result<Document, WorkspaceError>;
}

/// Directory-backed workspace. Discovery honors `.gitignore`/`.ignore`
/// (global git excludes stay off for determinism) unless `no_ignore` is set,
/// and the listing is sorted so scan order is stable.
pub struct FsWorkspace {
    root: PathBuf,
    no_ignore: bool,
}

impl FsWorkspace {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self::with_options(root, false)
    }

    pub fn with_options(root: impl AsRef<Path>, no_ignore: bool) -> Self {
        Self { root: root.as_ref().to_path_buf(), no_ignore }
    }
}

#[async_trait]
impl Workspace for FsWorkspace {
    fn project_root(&self) -> &Path {
        &self.root
    }

    async fn project_files(&self) -> Vec<FileRef> {
        let mut walker = ignore::WalkBuilder::new(&self.root);
        walker
            .follow_links(false)
            .git_ignore(!self.no_ignore)
            .git_global(false)
            .git_exclude(false)
            .ignore(!self.no_ignore)
            .parents(true);
        // Root-level ignore files also apply outside a git checkout.
        let matcher = if self.no_ignore {
            None
        } else {
            let mut builder = ignore::gitignore::GitignoreBuilder::new(&self.root);
            for name in [".gitignore", ".ignore"] {
                let path = self.root.join(name);
                if path.exists() {
                    let _ = builder.add(path);
                }
            }
            builder.build().ok()
        };

        let mut out = Vec::new();
        for entry in walker.build().flatten() {
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            if let Some(m) = &matcher {
                if m.matched(entry.path(), false).is_ignore() {
                    continue;
                }
            }
            out.push(FileRef::new(entry.path()));
        }
        out.sort_by(|a, b| a.path.cmp(&b.path));
        log::debug!("enumerated {} files under {}", out.len(), self.root.display());
        out
    }

    async fn document(&self, file: &FileRef) -> Result<Document, WorkspaceError> {
        let bytes = tokio::fs::read(&file.path).await?;
        let text = String::from_utf8(bytes)
            .map_err(|_| WorkspaceError::NonText { file: file.path.clone() })?;
        Ok(Document { file: file.clone(), text })
    }
}
