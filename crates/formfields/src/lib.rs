//! Turn annotated structs into ordered HTML form field descriptors.
//!
//! ```
//! use formfields::{Field, Form, flatten};
//!
//! #[derive(Default, Form)]
//! pub struct Signup {
//!     #[form("label=Full Name;id=name")]
//!     pub name: String,
//!     #[form("type=password;footer=<small>Keep it secret!</small>")]
//!     pub password: String,
//!     pub address: Address,
//! }
//!
//! #[derive(Default, Form)]
//! pub struct Address {
//!     #[form("name=street")]
//!     pub street1: String,
//!     pub city: String,
//! }
//!
//! let fields: Vec<Field> = flatten(&Signup::default()).unwrap();
//! let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
//! assert_eq!(names, ["name", "password", "street", "address.city"]);
//! assert_eq!(fields[0].label, "Full Name");
//! ```
//!
//! Field names default to the declared Rust field names, joined with `.` for
//! nested records. Annotations use the `key=value;key=value` grammar
//! described in [`annotation`]; a lone `-` removes the field.

extern crate self as formfields;

pub mod annotation;
pub mod config;
pub mod error;
pub mod field;
pub mod flatten;
pub mod html;
pub mod normalize;
pub mod reflect;
pub mod value;

pub use annotation::Annotation;
pub use config::FormConfig;
pub use error::{FormError, Result};
pub use field::Field;
pub use flatten::{FormExt, fields, flatten, flatten_with_config};
pub use html::Html;
pub use normalize::{Resolved, resolve, with_record};
pub use reflect::{AsReflect, Component, Record, Reflect, Reflected, ZeroFn, zero_of};
pub use value::Value;

// Re-export derive macros so users only need to depend on `formfields`
pub use formfields_derive::{Form, FormValue};
