//! The relationship test: does a document's text mention a candidate
//! reference string?

use regex::RegexBuilder;

/// True when `reference` occurs in `text`, compared case-insensitively with
/// every regex metacharacter in the reference escaped.
#[must_use]
pub fn document_references(text: &str, reference: &str) -> bool {
    search(text, &regex::escape(reference))
}

/// Module-style variant for extensionless string-literal references: the
/// root-relative path must appear inside double quotes, with an optional
/// leading `./` as in `require("./b")`.
#[must_use]
pub fn document_references_module(text: &str, module_path: &str) -> bool {
    search(text, &format!("\"(\\./)?{}\"", regex::escape(module_path)))
}

fn search(text: &str, pattern: &str) -> bool {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(re) => re.is_match(text),
        Err(err) => {
            log::warn!("unusable reference pattern {pattern:?}: {err}");
            false
        }
    }
}
