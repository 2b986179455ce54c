//! Virtual path handling.
//!
//! A virtual path is a plain string that uses `/` as its separator. Paths are
//! compared without regard to case, but they are otherwise taken exactly as
//! given: there is no trimming of leading or trailing slashes, no collapsing
//! of repeated slashes, and no processing of `.` or `..` components. The only
//! canonicalization performed is turning backslashes into forward slashes.

use std::borrow::Cow;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a literal double backslash, or a single one. Replacing each match
/// with `/` is the same as first collapsing every `\\` pair into `\` and then
/// turning every remaining `\` into `/`.
static BACKSLASH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\\\\?"#)
        .unwrap()
});

/// Canonicalizes a path string into virtual path form.
///
/// Every literal double backslash becomes a single backslash, and then every
/// backslash becomes `/`. Nothing else is touched. If the path contains no
/// backslashes, no copying takes place.
///
/// ```
/// # use overlay_vfs::normalize;
/// assert_eq!(normalize(r"Textures\\Sky\Night.dds"), "Textures/Sky/Night.dds");
/// assert_eq!(normalize("/already//fine/"), "/already//fine/");
/// ```
pub fn normalize(path: &str) -> Cow<'_, str> {
    BACKSLASH_PATTERN.replace_all(path, "/")
}

/// Returns the comparison key for an already-normalized path. Two paths name
/// the same file or folder iff their keys are equal.
pub fn key(path: &str) -> String {
    path.to_lowercase()
}

/// Returns the immediate parent folder of a normalized path, including its
/// trailing `/`. Returns `None` for a path with no `/` in it, i.e. one that
/// lives directly in the root.
pub fn parent_folder(path: &str) -> Option<&str> {
    path.rfind('/').map(|i| &path[..=i])
}

/// Appends a `/` to the path unless it already ends with one.
pub fn with_trailing_slash(path: &str) -> Cow<'_, str> {
    if path.ends_with('/') {
        Cow::Borrowed(path)
    }
    else {
        Cow::Owned(format!("{}/", path))
    }
}

/// Returns true if the path denotes the root of the namespace.
pub fn is_root(path: &str) -> bool {
    path.is_empty() || path == "/"
}

#[cfg(test)]
mod test {
    use super::*;
    #[test] fn normalize_backslashes() {
        const PAIRS_TO_CHECK: &[(&str, &str)] = &[
            (r"foo\bar", "foo/bar"),
            (r"foo\\bar", "foo/bar"),
            (r"foo\\\bar", "foo//bar"),
            (r"foo\\\\bar", "foo//bar"),
            (r"mixed\path/with\\both", "mixed/path/with/both"),
            (r"\leading", "/leading"),
            (r"trailing\", "trailing/"),
            ("", ""),
        ];
        for (big, small) in PAIRS_TO_CHECK.iter() {
            assert_eq!(normalize(big), *small, "normalizing {:?}", big);
        }
    }
    #[test] fn normalize_leaves_everything_else_alone() {
        const UNTOUCHED: &[&str] = &[
            "foo//bar",
            "/abs/path/",
            "./dots/../stay",
            "MiXeD/CaSe.TXT",
        ];
        for path in UNTOUCHED {
            match normalize(path) {
                Cow::Borrowed(x) => assert_eq!(x, *path),
                Cow::Owned(x) => panic!("{:?} was copied into {:?}", path, x),
            }
        }
    }
    #[test] fn keys_fold_case() {
        assert_eq!(key("Folder/File.TXT"), key("folder/file.txt"));
        assert_ne!(key("folder/file.txt"), key("folder/file.txt2"));
    }
    #[test] fn parents() {
        assert_eq!(parent_folder("a/b/c.txt"), Some("a/b/"));
        assert_eq!(parent_folder("a/c.txt"), Some("a/"));
        assert_eq!(parent_folder("c.txt"), None);
        assert_eq!(parent_folder("/c.txt"), Some("/"));
    }
    #[test] fn trailing_slashes() {
        assert_eq!(with_trailing_slash("a"), "a/");
        assert_eq!(with_trailing_slash("a/"), "a/");
        assert_eq!(with_trailing_slash(""), "/");
        assert!(is_root(""));
        assert!(is_root("/"));
        assert!(!is_root("a/"));
    }
}
