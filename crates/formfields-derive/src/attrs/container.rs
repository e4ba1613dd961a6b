//! Container-level (struct/enum) attribute definitions.

use super::types::RenameStrategy;

/// Struct- or enum-level form attributes.
///
/// Parsed from `#[form(...)]` on the container.
#[derive(Debug, Default)]
pub struct ContainerAttrs {
    /// Rename strategy for all declared field or variant names.
    pub rename_all: RenameStrategy,
}
