//! Runtime view of record-shaped values.
//!
//! [`Reflect`] is the inspection hook the flattener walks. Records implement
//! it through `#[derive(Form)]`, which also provides the [`Record`]
//! component listing. Scalars report themselves as leaves, and pointer-like
//! wrappers report an indirection layer to peel.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::value::Value;

/// Fabricates a zero-valued instance of an indirection's target type.
pub type ZeroFn = fn() -> Box<dyn Reflect>;

/// The shape of a value, one indirection layer at a time.
pub enum Reflected<'a> {
    /// A scalar value that becomes a single form field.
    Leaf(Value),
    /// A record with named components.
    Record(&'a dyn Record),
    /// A non-null indirection layer.
    Deref(&'a dyn Reflect),
    /// A null indirection layer; the target type is still known.
    Null(ZeroFn),
}

impl std::fmt::Debug for Reflected<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reflected::Leaf(value) => f.debug_tuple("Leaf").field(value).finish(),
            Reflected::Record(_) => f.write_str("Record(..)"),
            Reflected::Deref(_) => f.write_str("Deref(..)"),
            Reflected::Null(_) => f.write_str("Null(..)"),
        }
    }
}

/// Inspection hook implemented by every type that can appear in a form.
pub trait Reflect {
    fn reflect(&self) -> Reflected<'_>;

    /// Name of the concrete type, used in error messages.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A record-shaped value: a fixed, ordered set of named components.
pub trait Record {
    /// All declared components in declaration order, visible or not.
    fn components(&self) -> Vec<Component<'_>>;
}

/// One declared component of a record.
#[derive(Clone, Copy)]
pub struct Component<'a> {
    /// Declared field name.
    pub name: &'static str,
    /// Raw annotation string, empty when absent.
    pub annotation: &'static str,
    /// Whether the component's own components are inlined into the parent.
    pub embedded: bool,
    /// Whether the component is accessible outside its defining module.
    pub visible: bool,
    pub value: &'a dyn Reflect,
}

impl<'a> Component<'a> {
    pub fn new(name: &'static str, value: &'a dyn Reflect) -> Self {
        Self {
            name,
            annotation: "",
            embedded: false,
            visible: true,
            value,
        }
    }

    pub fn with_annotation(mut self, annotation: &'static str) -> Self {
        self.annotation = annotation;
        self
    }

    pub fn embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

impl std::fmt::Debug for Component<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.name)
            .field("annotation", &self.annotation)
            .field("embedded", &self.embedded)
            .field("visible", &self.visible)
            .field("type", &self.value.type_name())
            .finish()
    }
}

/// [`ZeroFn`] for `T`, using its `Default` value as the zero instance.
pub fn zero_of<T: Reflect + Default + 'static>() -> Box<dyn Reflect> {
    Box::new(T::default())
}

macro_rules! reflect_copy_leaf {
    ($($ty:ty),*) => {
        $(
            impl Reflect for $ty {
                fn reflect(&self) -> Reflected<'_> {
                    Reflected::Leaf(Value::from(*self))
                }
            }
        )*
    };
}

reflect_copy_leaf!(
    bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64
);

impl Reflect for String {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Leaf(Value::String(self.clone()))
    }
}

impl Reflect for &str {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Leaf(Value::from(*self))
    }
}

impl Reflect for Cow<'_, str> {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Leaf(Value::from(self.as_ref()))
    }
}

impl<T: Reflect + Default + 'static> Reflect for Option<T> {
    fn reflect(&self) -> Reflected<'_> {
        match self {
            Some(inner) => Reflected::Deref(inner),
            None => Reflected::Null(zero_of::<T>),
        }
    }
}

/// Upcast to `&dyn Reflect`, including for `dyn Reflect` itself.
pub trait AsReflect {
    fn as_reflect(&self) -> &dyn Reflect;
}

impl<T: Reflect> AsReflect for T {
    fn as_reflect(&self) -> &dyn Reflect {
        self
    }
}

impl<'a> AsReflect for dyn Reflect + 'a {
    fn as_reflect(&self) -> &dyn Reflect {
        self
    }
}

impl<'a> AsReflect for dyn Reflect + Send + Sync + 'a {
    fn as_reflect(&self) -> &dyn Reflect {
        self
    }
}

impl<T: AsReflect + ?Sized> Reflect for Box<T> {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Deref((**self).as_reflect())
    }
}

impl<T: AsReflect + ?Sized> Reflect for Rc<T> {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Deref((**self).as_reflect())
    }
}

impl<T: AsReflect + ?Sized> Reflect for Arc<T> {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Deref((**self).as_reflect())
    }
}

impl<T: AsReflect + ?Sized> Reflect for &T {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Deref((**self).as_reflect())
    }
}

impl<T: AsReflect + ?Sized> Reflect for &mut T {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Deref((**self).as_reflect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_are_leaves() {
        assert!(matches!(5u16.reflect(), Reflected::Leaf(Value::UInt(5))));
        assert!(matches!("x".reflect(), Reflected::Leaf(Value::String(ref s)) if s == "x"));
        assert!(matches!(true.reflect(), Reflected::Leaf(Value::Bool(true))));
    }

    #[test]
    fn option_reports_null_with_zero_target() {
        let missing: Option<String> = None;
        match missing.reflect() {
            Reflected::Null(zero) => {
                let target = zero();
                assert!(matches!((*target).reflect(), Reflected::Leaf(Value::String(ref s)) if s.is_empty()));
            }
            other => panic!("expected null, got {other:?}"),
        }

        let present = Some(3i32);
        assert!(matches!(present.reflect(), Reflected::Deref(_)));
    }

    #[test]
    fn boxed_trait_objects_deref() {
        let boxed: Box<dyn Reflect> = Box::new(1.5f64);
        match boxed.reflect() {
            Reflected::Deref(inner) => {
                assert!(matches!(inner.reflect(), Reflected::Leaf(Value::Float(_))));
                assert_eq!(inner.type_name(), "f64");
            }
            other => panic!("expected deref, got {other:?}"),
        }
    }
}
