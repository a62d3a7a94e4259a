//! Dotted-path lookup into nested JSON objects.

use serde_json::Value;

/// A lookup path: either dot-separated (`"meta.code.name"`) or already split.
#[derive(Debug, Clone, Copy)]
pub enum NotatePath<'a> {
    Dotted(&'a str),
    Segments(&'a [&'a str]),
    Owned(&'a [String]),
}

impl<'a> From<&'a str> for NotatePath<'a> {
    fn from(path: &'a str) -> Self {
        NotatePath::Dotted(path)
    }
}

impl<'a> From<&'a String> for NotatePath<'a> {
    fn from(path: &'a String) -> Self {
        NotatePath::Dotted(path)
    }
}

impl<'a, 'b: 'a> From<&'a [&'b str]> for NotatePath<'a> {
    fn from(segments: &'a [&'b str]) -> Self {
        NotatePath::Segments(segments)
    }
}

impl<'a> From<&'a [String]> for NotatePath<'a> {
    fn from(segments: &'a [String]) -> Self {
        NotatePath::Owned(segments)
    }
}

impl<'a> NotatePath<'a> {
    fn segments(self) -> Vec<&'a str> {
        match self {
            NotatePath::Dotted(path) => path.split('.').collect(),
            NotatePath::Segments(segments) => segments.to_vec(),
            NotatePath::Owned(segments) => segments.iter().map(String::as_str).collect(),
        }
    }
}

/// Resolve `path` inside `root`.
///
/// Returns `None` when `root` is not an object, when the path is empty or
/// starts with an empty segment, or when any segment is missing. A present
/// `null` leaf is returned as `Some(Value::Null)`.
pub fn notate<'v, 'p>(root: &'v Value, path: impl Into<NotatePath<'p>>) -> Option<&'v Value> {
    let segments = path.into().segments();
    if segments.first().map_or(true, |first| first.is_empty()) {
        return None;
    }

    let mut current = root;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}
