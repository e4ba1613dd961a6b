//! Peeling indirection down to a concrete value.
//!
//! `Some`, `Box`, `Rc`, `Arc` and references are unwrapped layer by layer. A
//! `None` is replaced by the `Default` value of its target type, so a missing
//! record still yields its full field skeleton.

use crate::error::{FormError, Result};
use crate::reflect::{Record, Reflect, Reflected};
use crate::value::Value;

/// The concrete value found beneath any indirection layers.
#[derive(Debug)]
pub enum Resolved<R> {
    /// A record was found and handed to the callback, which produced `R`.
    Record(R),
    /// A scalar, with the name of its concrete type.
    Leaf(Value, &'static str),
}

/// Peels `value` and hands the record underneath to `f`.
///
/// Fails with [`FormError::NotARecord`] when a scalar is found instead, and
/// with [`FormError::DepthExceeded`] when more than `max_depth` layers have
/// to be peeled.
pub fn with_record<R>(
    value: &dyn Reflect,
    max_depth: usize,
    f: impl FnOnce(&dyn Record) -> R,
) -> Result<R> {
    match resolve(value, 0, max_depth, f)? {
        Resolved::Record(out) => Ok(out),
        Resolved::Leaf(_, type_name) => Err(FormError::not_a_record(type_name)),
    }
}

/// Peels `value`, starting the layer count at `depth`.
///
/// Records are handed to `f`; scalars are returned as-is. Zero values
/// fabricated for `None` layers live only for the duration of the call.
pub fn resolve<R>(
    value: &dyn Reflect,
    depth: usize,
    max_depth: usize,
    f: impl FnOnce(&dyn Record) -> R,
) -> Result<Resolved<R>> {
    if depth > max_depth {
        return Err(FormError::depth_exceeded(max_depth));
    }

    match value.reflect() {
        Reflected::Record(record) => Ok(Resolved::Record(f(record))),
        Reflected::Leaf(leaf) => Ok(Resolved::Leaf(leaf, value.type_name())),
        Reflected::Deref(inner) => resolve(inner, depth + 1, max_depth, f),
        Reflected::Null(zero) => {
            let zeroed = zero();
            resolve(&*zeroed, depth + 1, max_depth, f)
        }
    }
}
