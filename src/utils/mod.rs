pub mod config {
    use serde::Deserialize;
    use std::fs;
    use std::path::{Path, PathBuf};

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct ScanSettings {
        pub batch_size: Option<usize>,
        pub yield_ms: Option<u64>,
    }

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct QueryConfig {
        pub default_format: Option<String>, // "text" | "json"
    }

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct Config {
        pub root: Option<String>,
        pub scan: Option<ScanSettings>,
        pub query: Option<QueryConfig>,
    }

    fn default_config_path(root: &Path) -> PathBuf {
        root.join("related-files.toml")
    }

    #[must_use]
    pub fn load_config_at(path: &Path) -> Option<Config> {
        let data = fs::read_to_string(path).ok()?;
        toml::from_str::<Config>(&data).ok()
    }

    #[must_use]
    pub fn load_config_near(root: &Path) -> Option<Config> {
        let path = default_config_path(root);
        if path.exists() {
            load_config_at(&path)
        } else {
            None
        }
    }
}

pub mod table {
    // Render a simple ASCII table given headers and rows.
    #[must_use]
    pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
        let cols = headers.len();
        let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
        for row in rows {
            for (c, w) in widths.iter_mut().enumerate().take(cols) {
                *w = (*w).max(row.get(c).map_or(0, String::len));
            }
        }

        let sep = {
            let mut s = String::from("+");
            for w in &widths {
                s.push_str(&"-".repeat(w + 2));
                s.push('+');
            }
            s
        };
        let line = |cells: &[String]| {
            let mut s = String::from("|");
            for (i, cell) in cells.iter().enumerate() {
                s.push(' ');
                s.push_str(cell);
                s.push_str(&" ".repeat(widths[i].saturating_sub(cell.len())));
                s.push(' ');
                s.push('|');
            }
            s
        };

        let mut out = String::new();
        out.push_str(&sep);
        out.push('\n');
        let header_cells: Vec<String> = headers.iter().map(|h| (*h).to_string()).collect();
        out.push_str(&line(&header_cells));
        out.push('\n');
        out.push_str(&sep);
        out.push('\n');
        for row in rows {
            let mut cells = Vec::with_capacity(cols);
            for i in 0..cols {
                cells.push(row.get(i).cloned().unwrap_or_default());
            }
            out.push_str(&line(&cells));
            out.push('\n');
        }
        out.push_str(&sep);
        out
    }
}

pub mod project_root {
    use std::env;
    use std::path::{Path, PathBuf};

    /// Detect the project root by walking ancestors looking for a `.git`
    /// directory or a `related-files.toml`.
    #[must_use]
    pub fn detect(start: Option<&Path>) -> PathBuf {
        let mut cur = start
            .map(Path::to_path_buf)
            .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
        loop {
            if cur.join(".git").is_dir() || cur.join("related-files.toml").exists() {
                return cur;
            }
            if let Some(parent) = cur.parent() {
                cur = parent.to_path_buf();
            } else {
                // Fallback to current_dir when nothing found
                return env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            }
        }
    }

    /// `None` or `"."` resolve to the detected project root; any other path
    /// is returned as-is.
    #[must_use]
    pub fn effective_path_opt(p: Option<&Path>) -> PathBuf {
        match p {
            None => detect(None),
            Some(path) if path == Path::new(".") => detect(None),
            Some(path) => path.to_path_buf(),
        }
    }
}
