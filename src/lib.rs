//! related-files — textual related-file inference for project documents
//!
//! Scan a document's text for path-like references to other files in the same
//! project and keep the results in a per-project index.
//!
//! # Features
//! - Relative-reference computation between project files (`index::resolver`)
//! - Per-document relationship scans, cached and run as batched background tasks
//! - Shared in-flight scans: concurrent requests for one document attach to the
//!   same pending computation
//! - File discovery with `.gitignore`/`.ignore` support (deterministic; global
//!   excludes off)
//!
//! # Quickstart (Library)
//! ```no_run
//! use std::sync::Arc;
//! use related_files::index::{FileRef, RelationshipIndex};
//! use related_files::workspace::FsWorkspace;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let workspace = Arc::new(FsWorkspace::new("."));
//! let index = RelationshipIndex::new(workspace);
//! let related = index.find_related_files(&FileRef::new("./index.html")).await;
//! for file in &related {
//!     println!("{}", file.path.display());
//! }
//! # }
//! ```
//!
//! # Quickstart (CLI)
//! ```text
//! related-files scan --path . --file index.html --format text
//! related-files relative --path . --from pages/about.html --to styles/site.css
//! ```
//!
//! # Ignore Behavior
//! Pass `--no-ignore` in the CLI (or `FsWorkspace::with_options`) to include
//! files matched by ignore rules.
pub mod app;
pub mod cli;
pub mod errors;
pub mod index;
pub mod utils;
pub mod workspace;
