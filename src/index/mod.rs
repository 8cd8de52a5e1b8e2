//! Relationship index: which project files does a document textually
//! reference?
//!
//! The index keys three maps by source path: the cached related lists, the
//! loaded flags, and the pending-scan registry. Scans run as background tasks
//! over the project file list in bounded batches, and concurrent requests for
//! the same document attach to the one scan already in flight.
use std::collections::{HashMap, HashSet};
use std::path::{PathBuf, MAIN_SEPARATOR};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::workspace::Workspace;

pub mod matcher;
pub mod resolver;
pub mod scheduler;

pub use scheduler::BatchConfig;

/// Target-file extensions eligible to be related. Binary and unsupported text
/// formats are excluded to avoid false positives and wasted scans.
pub const FILE_TYPES_ALLOWED: [&str; 4] = [".css", ".js", ".less", ".svg"];

/// A project file, identified by its full path as the enumerator reports it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileRef {
    pub path: PathBuf,
}

impl FileRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// A file together with its current text, as the workspace provides it. The
/// text may include unsaved edits and is read-only to the index.
#[derive(Debug, Clone)]
pub struct Document {
    pub file: FileRef,
    pub text: String,
}

#[derive(Default)]
struct IndexState {
    related: HashMap<PathBuf, Vec<FileRef>>,
    loaded: HashSet<PathBuf>,
    pending: HashMap<PathBuf, watch::Receiver<bool>>,
}

/// Per-project index of textual file relationships.
///
/// Cloning is cheap and shares the underlying state. Construct one per
/// project; the host's event dispatch drives the `on_*` hooks, and
/// [`RelationshipIndex::on_project_root_changed`] resets everything when the
/// root moves. Scans are spawned onto the ambient tokio runtime, so the
/// scanning methods and hooks must be called from within one.
#[derive(Clone)]
pub struct RelationshipIndex {
    workspace: Arc<dyn Workspace>,
    config: BatchConfig,
    state: Arc<Mutex<IndexState>>,
}

impl RelationshipIndex {
    pub fn new(workspace: Arc<dyn Workspace>) -> Self {
        Self::with_config(workspace, BatchConfig::default())
    }

    pub fn with_config(workspace: Arc<dyn Workspace>, config: BatchConfig) -> Self {
        Self { workspace, config, state: Arc::new(Mutex::new(IndexState::default())) }
    }

    /// Cached related list for `file`, or `None` while no scan has completed
    /// for it. No side effects.
    #[must_use]
    pub fn get_related_files(&self, file: &FileRef) -> Option<Vec<FileRef>> {
        self.lock_state().related.get(&file.path).cloned()
    }

    /// True once a scan for this path has finished, including one that found
    /// nothing or could not read the document.
    #[must_use]
    pub fn has_loaded(&self, file: &FileRef) -> bool {
        self.lock_state().loaded.contains(&file.path)
    }

    /// Scan `file` for references to other project files, or attach to the
    /// scan already in flight for it. Resolves once the scan completes and
    /// never fails; unreadable documents complete with an empty list.
    pub async fn find_related_files(&self, file: &FileRef) -> Vec<FileRef> {
        let mut rx = self.ensure_scan(file);
        let _ = rx.wait_for(|done| *done).await;
        self.get_related_files(file).unwrap_or_default()
    }

    /// Host hook: a file was added to the working set; warm its entry in the
    /// background.
    pub fn on_working_set_file_added(&self, file: &FileRef) {
        let _ = self.ensure_scan(file);
    }

    /// Host hook: batch form of [`Self::on_working_set_file_added`].
    pub fn on_working_set_files_added(&self, files: &[FileRef]) {
        for file in files {
            let _ = self.ensure_scan(file);
        }
    }

    /// Host hook: the document was saved. Drops the path's cached state and
    /// re-triggers a background scan against the saved text.
    pub fn on_document_saved(&self, file: &FileRef) {
        {
            let mut state = self.lock_state();
            state.related.remove(&file.path);
            state.loaded.remove(&file.path);
            state.pending.remove(&file.path);
        }
        let _ = self.ensure_scan(file);
    }

    /// Host hook: the project root changed. Every cached path is meaningless
    /// under the new root, so all three maps reset. No re-scan is triggered.
    pub fn on_project_root_changed(&self) {
        let mut state = self.lock_state();
        state.related.clear();
        state.loaded.clear();
        state.pending.clear();
    }

    fn lock_state(&self) -> MutexGuard<'_, IndexState> {
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    // Register a pending scan for the path unless one already exists, and
    // spawn the background task that performs it. The receiver flips to true
    // when the scan has completed and its results are visible.
    fn ensure_scan(&self, file: &FileRef) -> watch::Receiver<bool> {
        let mut state = self.lock_state();
        if let Some(rx) = state.pending.get(&file.path) {
            return rx.clone();
        }
        let (tx, rx) = watch::channel(false);
        state.pending.insert(file.path.clone(), rx.clone());
        drop(state);

        let index = self.clone();
        let doc = file.clone();
        tokio::spawn(async move {
            let related = index.scan(&doc).await;
            {
                let mut state = index.lock_state();
                state.related.insert(doc.path.clone(), related);
                state.loaded.insert(doc.path.clone());
            }
            let _ = tx.send(true);
        });
        rx
    }

    async fn scan(&self, doc: &FileRef) -> Vec<FileRef> {
        let document = match self.workspace.document(doc).await {
            Ok(document) => document,
            Err(err) => {
                // Most likely a binary or otherwise unreadable file. Complete
                // with no relationships so callers still observe the load.
                log::debug!("skipping scan of {}: {err}", doc.path.display());
                return Vec::new();
            }
        };

        let root = self.workspace.project_root().to_string_lossy().into_owned();
        let doc_path = doc.path.to_string_lossy().into_owned();
        let doc_ext = resolver::file_extension(&doc_path).map(str::to_owned);
        let files = self.workspace.project_files().await;
        log::debug!("scanning {} against {} project files", doc.path.display(), files.len());

        let mut related = Vec::new();
        scheduler::for_each_in_batches(&files, self.config, |candidate| {
            if candidate.path == doc.path {
                return;
            }
            let candidate_path = candidate.path.to_string_lossy();
            let reference = resolver::relative_reference_with_separator(
                &root,
                &candidate_path,
                &doc_path,
                MAIN_SEPARATOR,
            );
            let Some(ext) = resolver::file_extension(&candidate_path) else {
                return;
            };
            if !FILE_TYPES_ALLOWED.contains(&ext) {
                return;
            }
            if matcher::document_references(&document.text, &reference) {
                related.push(candidate.clone());
            } else if doc_ext.as_deref() == Some(".js") {
                // JS documents may refer to modules by extensionless
                // string literal, relative to the project root.
                let rel = resolver::root_relative(&root, &candidate_path, MAIN_SEPARATOR);
                let module = rel.strip_suffix(ext).unwrap_or(rel).replace('\\', "/");
                if matcher::document_references_module(&document.text, &module) {
                    related.push(candidate.clone());
                }
            }
        })
        .await;
        related
    }
}
