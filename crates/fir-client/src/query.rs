//! Query-string construction.
//!
//! Unset parameters are omitted entirely; set ones are percent-encoded in
//! insertion order.

#[derive(Debug, Default, Clone)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value` when `value` is present and non-empty.
    #[must_use]
    pub fn opt(mut self, key: &'static str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.is_empty() {
                self.pairs.push((key, value));
            }
        }
        self
    }

    /// Join `path` and the encoded query (`path` alone when empty).
    #[must_use]
    pub fn apply(&self, path: &str) -> String {
        if self.pairs.is_empty() {
            return path.to_string();
        }
        let encoded = self
            .pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{path}?{encoded}")
    }
}
