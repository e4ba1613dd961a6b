use thiserror::Error;

/// Errors raised while flattening a value into form fields.
///
/// Both variants indicate a bug in the calling code rather than bad user
/// input. Malformed annotations are never reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The value, after peeling indirection, is not a record.
    #[error("invalid value of type `{type_name}`; only structs are supported")]
    NotARecord { type_name: &'static str },

    /// Nesting or indirection exceeded the configured limit, usually because
    /// a record refers to itself through an `Option` or `Box`.
    #[error("maximum form depth of {depth} exceeded; is the record type self-referential?")]
    DepthExceeded { depth: usize },
}

impl FormError {
    pub fn not_a_record(type_name: &'static str) -> Self {
        Self::NotARecord { type_name }
    }

    pub fn depth_exceeded(depth: usize) -> Self {
        Self::DepthExceeded { depth }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::FormError;

    #[test]
    fn messages() {
        assert_eq!(
            FormError::not_a_record("i32").to_string(),
            "invalid value of type `i32`; only structs are supported"
        );
        assert!(FormError::depth_exceeded(64).to_string().contains("64"));
    }
}
