use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, Commands};
use crate::index::{resolver, BatchConfig, FileRef, RelationshipIndex};
use crate::utils::{config, project_root, table};
use crate::workspace::FsWorkspace;

/// Run the CLI logic in-process.
///
/// Returns an exit code (0 = success).
pub async fn run_cli(cli: Cli) -> i32 {
    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let bin_name = env!("CARGO_PKG_NAME");
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
            0
        }
        Commands::Scan { path, file, config: config_path, no_ignore, batch_size, yield_ms, format } => {
            let root = project_root::effective_path_opt(Some(Path::new(&path)));
            let cfg = match config_path.as_ref() {
                Some(p) => config::load_config_at(Path::new(p)),
                None => config::load_config_near(&root),
            }
            .unwrap_or_default();

            let scan_cfg = cfg.scan.clone().unwrap_or_default();
            let defaults = BatchConfig::default();
            let batch = BatchConfig {
                batch_size: batch_size.or(scan_cfg.batch_size).unwrap_or(defaults.batch_size),
                yield_delay: yield_ms
                    .or(scan_cfg.yield_ms)
                    .map_or(defaults.yield_delay, Duration::from_millis),
            };
            let fmt = if config_path.is_some() {
                cfg.query
                    .as_ref()
                    .and_then(|q| q.default_format.clone())
                    .unwrap_or(format)
            } else {
                format
            };

            let doc = FileRef::new(resolve_input_path(&root, &file));
            let workspace = Arc::new(FsWorkspace::with_options(&root, no_ignore));
            let index = RelationshipIndex::with_config(workspace, batch);
            let related = index.find_related_files(&doc).await;

            if fmt == "json" {
                let out: Vec<String> =
                    related.iter().map(|f| display_path(&root, &f.path)).collect();
                match serde_json::to_string_pretty(&out) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("JSON encode error: {e}");
                        return 1;
                    }
                }
            } else if related.is_empty() {
                println!("<no related files>");
            } else {
                let rows: Vec<Vec<String>> = related
                    .iter()
                    .enumerate()
                    .map(|(i, f)| {
                        let reference = resolver::relative_reference(&root, &f.path, &doc.path);
                        vec![format!("{}", i + 1), display_path(&root, &f.path), reference]
                    })
                    .collect();
                println!("{}", table::render(&["#", "Path", "Reference"], &rows));
            }
            0
        }
        Commands::Relative { path, from, to } => {
            let root = project_root::effective_path_opt(Some(Path::new(&path)));
            let from = resolve_input_path(&root, &from);
            let to = resolve_input_path(&root, &to);
            println!("{}", resolver::relative_reference(&root, &to, &from));
            0
        }
    }
}

fn resolve_input_path(root: &Path, raw: &str) -> PathBuf {
    let p = Path::new(raw);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}

fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
