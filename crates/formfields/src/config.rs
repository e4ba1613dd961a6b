/// Input type used when an annotation does not supply `type`.
pub const DEFAULT_INPUT_TYPE: &str = "text";

/// Separator placed between ancestor names in a field's path.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Maximum combined depth of nested records and indirection layers.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Settings for flattening a record into form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    pub default_input_type: String,
    pub separator: String,
    pub max_depth: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_input_type: DEFAULT_INPUT_TYPE.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl FormConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.default_input_type = input_type.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub(crate) fn join_path(&self, path: &[&str], name: &str) -> String {
        path.iter()
            .copied()
            .chain(std::iter::once(name))
            .collect::<Vec<_>>()
            .join(&self.separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FormConfig::default();
        assert_eq!(config.default_input_type, "text");
        assert_eq!(config.separator, ".");
        assert_eq!(config.max_depth, 64);
    }

    #[test]
    fn join_path_uses_separator() {
        let config = FormConfig::new();
        assert_eq!(config.join_path(&[], "Name"), "Name");
        assert_eq!(config.join_path(&["User", "Address"], "City"), "User.Address.City");

        let config = config.with_separator("__");
        assert_eq!(config.join_path(&["Address"], "City"), "Address__City");
    }
}
