//! Split representation of a canonical URL path.

use url::Url;

/// A URL path split on `/`, empty segments preserved.
///
/// Built from the serialized (still percent-encoded) path, so an encoded
/// `%2F` stays inside its segment. A leading `/` yields an empty first
/// element: `/maps/search/1,2` becomes `["", "maps", "search", "1,2"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegments<'a> {
    segments: Vec<&'a str>,
}

impl<'a> PathSegments<'a> {
    pub fn from_path(path: &'a str) -> Self {
        Self {
            segments: path.split('/').collect(),
        }
    }

    pub fn from_url(url: &'a Url) -> Self {
        Self::from_path(url.path())
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.segments.get(index).copied()
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.segments
    }
}
