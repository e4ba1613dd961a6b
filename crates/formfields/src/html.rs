use std::fmt;

/// A trusted HTML fragment.
///
/// Renderers must emit the contents without escaping. No sanitization is
/// performed; the fragment comes from author-controlled annotations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Html(String);

impl Html {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self(fragment.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for Html {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Html {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Html {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Html;

    #[test]
    fn renders_verbatim() {
        let html = Html::from("<small>Something <b>super</b> secret!</small>");
        assert_eq!(html.to_string(), "<small>Something <b>super</b> secret!</small>");
        assert!(!html.is_empty());
        assert!(Html::default().is_empty());
    }
}
