//! Validation helpers for configuration values.

use std::path::{Component, Path};

use miette::SourceSpan;

/// Find the span of a `key = ...` assignment in the TOML source.
///
/// When `section` is given, the search starts at the `[section]` header so
/// that keys repeated across sections resolve to the right one.
pub(crate) fn find_key_span(src: &str, section: Option<&str>, key: &str) -> Option<SourceSpan> {
    let offset = section
        .and_then(|s| src.find(&format!("[{}]", s)))
        .unwrap_or(0);
    let haystack = &src[offset..];

    for pattern in [format!("{} =", key), format!("{}=", key)] {
        if let Some(pos) = haystack.find(&pattern) {
            return Some(SourceSpan::from((offset + pos, key.len())));
        }
    }

    None
}

/// Find the span of a quoted string value in the TOML source.
pub(crate) fn find_string_span(src: &str, value: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    src.find(&quoted)
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}

/// Validate a PHP namespace such as `App\Http\Controllers`.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_namespace(namespace: &str) -> Option<&'static str> {
    if namespace.is_empty() {
        return Some("namespace cannot be empty");
    }

    if namespace.starts_with('\\') || namespace.ends_with('\\') {
        return Some("namespace cannot start or end with a backslash");
    }

    for segment in namespace.split('\\') {
        if segment.is_empty() {
            return Some("namespace contains an empty segment");
        }

        let mut chars = segment.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return Some("each segment must start with a letter or underscore"),
        }

        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Some("segments may only contain letters, numbers, and underscores");
        }
    }

    None
}

/// Validate that a configured directory stays inside the project root.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_relative_path(path: &Path) -> Option<&'static str> {
    if path.as_os_str().is_empty() {
        return Some("path cannot be empty");
    }

    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => return Some("path cannot leave the project root"),
            Component::RootDir | Component::Prefix(_) => {
                return Some("path must be relative to the project root");
            }
        }
    }

    None
}
