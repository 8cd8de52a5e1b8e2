use proptest::prelude::*;
use related_files::index::resolver::relative_reference_with_separator;

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}"
}

proptest! {
    // Files sharing a folder always resolve to the bare target filename.
    #[test]
    fn siblings_resolve_to_bare_filename(
        dirs in prop::collection::vec(segment(), 0..4),
        a in segment(),
        b in segment(),
    ) {
        let folder = if dirs.is_empty() { String::new() } else { format!("{}/", dirs.join("/")) };
        let target = format!("/proj/{folder}{a}.css");
        let base = format!("/proj/{folder}{b}.html");
        let got = relative_reference_with_separator("/proj", &target, &base, '/');
        prop_assert_eq!(got, format!("{a}.css"));
    }

    // A root-level target referenced from a nested base ascends once per
    // base folder.
    #[test]
    fn ascent_count_matches_base_depth(
        base_dirs in prop::collection::vec(segment(), 1..4),
        name in segment(),
    ) {
        let target = format!("/proj/{name}.css");
        let base = format!("/proj/{}/page.html", base_dirs.join("/"));
        let got = relative_reference_with_separator("/proj", &target, &base, '/');
        prop_assert_eq!(got.matches("../").count(), base_dirs.len());
        let expected_suffix = format!("{name}.css");
        prop_assert!(got.ends_with(&expected_suffix));
    }

    // A nested target referenced from a root-level base keeps its full
    // root-relative path with no ascent.
    #[test]
    fn descent_keeps_root_relative_remainder(
        target_dirs in prop::collection::vec(segment(), 1..4),
        name in segment(),
    ) {
        let target = format!("/proj/{}/{name}.css", target_dirs.join("/"));
        let got = relative_reference_with_separator("/proj", &target, "/proj/index.html", '/');
        prop_assert_eq!(got, format!("{}/{name}.css", target_dirs.join("/")));
    }

    // The result never leaks an absolute prefix.
    #[test]
    fn result_never_starts_with_a_separator(
        target_dirs in prop::collection::vec(segment(), 0..3),
        base_dirs in prop::collection::vec(segment(), 0..3),
        a in segment(),
        b in segment(),
    ) {
        let target = format!("/proj/{}{a}.css", join_folder(&target_dirs));
        let base = format!("/proj/{}{b}.html", join_folder(&base_dirs));
        let got = relative_reference_with_separator("/proj", &target, &base, '/');
        prop_assert!(!got.starts_with('/'));
        prop_assert!(!got.is_empty());
    }
}

fn join_folder(dirs: &[String]) -> String {
    if dirs.is_empty() {
        String::new()
    } else {
        format!("{}/", dirs.join("/"))
    }
}
