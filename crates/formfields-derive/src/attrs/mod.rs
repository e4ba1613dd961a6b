//! Attribute parsing for the form derive macros.
//!
//! - `types` - Enum definitions for attribute values
//! - `container` - Struct/enum-level attribute definitions
//! - `field` - Field- and variant-level attribute definitions
//! - `parse` - Parsing entry points using `parse_nested_meta`

mod container;
mod field;
mod parse;
mod types;

pub use container::ContainerAttrs;
#[allow(unused_imports)]
pub use field::{FieldAttrs, VariantAttrs};
pub use parse::{parse_container_attrs, parse_field_attrs, parse_variant_attrs};
#[allow(unused_imports)]
pub use types::RenameStrategy;
