//! Relative-reference computation between project files.
//!
//! References are expressed the way browsers resolve them: plain segments
//! descend from the base file's folder, `../` ascends. The functions here are
//! pure string walks over separator-delimited paths and assume both inputs lie
//! under the project root; anything else is a caller contract violation.

use std::path::{Path, MAIN_SEPARATOR};

/// Compute the reference string that `base`'s folder would use to point at
/// `target`, with both paths interpreted relative to `root`.
///
/// Shared leading folders are consumed pairwise; once the paths diverge, one
/// `../` is prepended per base folder left to ascend. Backslash separators in
/// the target remainder are normalized to `/` at the point backtracking
/// begins, so the result matches URI-style references. Files sharing a folder
/// resolve to the bare target filename, and the degenerate `target == base`
/// case returns the bare filename as well.
#[must_use]
pub fn relative_reference(root: &Path, target: &Path, base: &Path) -> String {
    relative_reference_with_separator(
        &root.to_string_lossy(),
        &target.to_string_lossy(),
        &base.to_string_lossy(),
        MAIN_SEPARATOR,
    )
}

/// Separator-parameterized form of [`relative_reference`], keeping the
/// backslash convention testable on hosts where it is not native.
#[must_use]
pub fn relative_reference_with_separator(
    root: &str,
    target: &str,
    base: &str,
    sep: char,
) -> String {
    let mut target_rel = root_relative(root, target, sep).to_string();
    let mut base_rel = root_relative(root, base, sep).to_string();
    let mut backtracking = false;

    loop {
        let Some(base_len) = leading_segment_len(&base_rel, sep) else {
            // Only the base filename is left; the accumulated remainder is
            // the reference.
            return target_rel;
        };
        if !backtracking {
            if let Some(target_len) = leading_segment_len(&target_rel, sep) {
                if target_rel[..target_len] == base_rel[..base_len] {
                    target_rel.drain(..=target_len);
                    base_rel.drain(..=base_len);
                    continue;
                }
            }
            backtracking = true;
            if sep == '\\' {
                target_rel = target_rel.replace('\\', "/");
            }
        }
        target_rel.insert_str(0, "../");
        base_rel.drain(..=base_len);
    }
}

/// Strip the project-root prefix (and one leading separator) from `path`.
#[must_use]
pub fn root_relative<'a>(root: &str, path: &'a str, sep: char) -> &'a str {
    let stripped = path.strip_prefix(root).unwrap_or(path);
    stripped.strip_prefix(sep).unwrap_or(stripped)
}

/// Extension of `path` from the last dot (inclusive). A dot at position 0
/// still starts an extension; only a path with no dot at all has `None`.
#[must_use]
pub fn file_extension(path: &str) -> Option<&str> {
    path.rfind('.').map(|pos| &path[pos..])
}

// Length of the first segment when a separator follows it; `None` when the
// remainder is a bare filename.
fn leading_segment_len(path: &str, sep: char) -> Option<usize> {
    match path.find(sep) {
        Some(pos) if pos > 0 => Some(pos),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn sibling_files_resolve_to_bare_filename() {
        let root = PathBuf::from("/proj");
        let got = relative_reference(&root, &root.join("css/a.css"), &root.join("css/b.css"));
        assert_eq!(got, "a.css");
    }

    #[test]
    fn descends_from_the_project_root() {
        let root = PathBuf::from("/proj");
        let got =
            relative_reference(&root, &root.join("css/deep/a.css"), &root.join("index.html"));
        assert_eq!(got, "css/deep/a.css");
    }

    #[test]
    fn backtracks_once_per_remaining_base_folder() {
        let root = PathBuf::from("/proj");
        let got = relative_reference(&root, &root.join("top.css"), &root.join("a/b/page.html"));
        assert_eq!(got, "../../top.css");
    }

    #[test]
    fn diverging_branches_combine_ascent_and_descent() {
        let root = PathBuf::from("/proj");
        let got = relative_reference(
            &root,
            &root.join("styles/site.css"),
            &root.join("pages/sub/page.html"),
        );
        assert_eq!(got, "../../styles/site.css");
    }

    #[test]
    fn self_reference_returns_bare_filename() {
        let root = PathBuf::from("/proj");
        let file = root.join("x/y.css");
        assert_eq!(relative_reference(&root, &file, &file), "y.css");
    }

    #[test]
    fn backslash_paths_normalize_only_when_backtracking() {
        // Descend-only keeps the native separator in the remainder.
        let got = relative_reference_with_separator(
            "C:\\proj",
            "C:\\proj\\a\\b\\x.css",
            "C:\\proj\\a\\y.html",
            '\\',
        );
        assert_eq!(got, "b\\x.css");
        // Backtracking switches the remainder to forward slashes.
        let got = relative_reference_with_separator(
            "C:\\proj",
            "C:\\proj\\css\\x.css",
            "C:\\proj\\pages\\y.html",
            '\\',
        );
        assert_eq!(got, "../css/x.css");
    }

    #[test]
    fn root_prefix_strips_with_or_without_trailing_separator() {
        assert_eq!(root_relative("/proj", "/proj/css/a.css", '/'), "css/a.css");
        assert_eq!(root_relative("/proj/", "/proj/css/a.css", '/'), "css/a.css");
    }

    #[test]
    fn extension_starts_at_the_last_dot_including_position_zero() {
        assert_eq!(file_extension("a/b/style.min.css"), Some(".css"));
        assert_eq!(file_extension(".gitignore"), Some(".gitignore"));
        assert_eq!(file_extension("Makefile"), None);
    }
}
