use whoami_core::AttributeSource;

use axum::http::HeaderMap;

/// Request headers viewed as asserted attributes.
///
/// Header names compare case-insensitively; for repeated headers the first
/// value wins. Values that are not valid UTF-8 are treated as absent.
pub struct HeaderSource<'a> {
    headers: &'a HeaderMap,
}

impl<'a> HeaderSource<'a> {
    pub fn new(headers: &'a HeaderMap) -> Self {
        Self { headers }
    }
}

impl AttributeSource for HeaderSource<'_> {
    fn get(&self, name: &str) -> Option<&str> {
        let value = self.headers.get(name)?;
        std::str::from_utf8(value.as_bytes()).ok()
    }
}
