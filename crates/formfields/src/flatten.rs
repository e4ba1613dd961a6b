//! Flattening records into an ordered list of [`Field`]s.
//!
//! The walk is depth-first in declaration order. Named nested records extend
//! the dotted path and emit nothing themselves; `#[form(inline)]` records
//! contribute their fields at the current level, where a shallower field of
//! the same name shadows them. Only leaves produce fields.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::annotation::Annotation;
use crate::config::FormConfig;
use crate::error::{FormError, Result};
use crate::field::Field;
use crate::normalize::{Resolved, resolve};
use crate::reflect::{AsReflect, Component, Record, Reflect};
use crate::value::Value;

/// Flattens `value` into form fields using the default configuration.
///
/// `value` may be a record or any indirection to one, including `None` of a
/// known record type, which produces the fields of its `Default` value.
pub fn flatten<T: AsReflect + ?Sized>(value: &T) -> Result<Vec<Field>> {
    flatten_with_config(value, &FormConfig::default())
}

/// Flattens `value` into form fields.
pub fn flatten_with_config<T: AsReflect + ?Sized>(
    value: &T,
    config: &FormConfig,
) -> Result<Vec<Field>> {
    let mut flattener = Flattener::new(config);
    flattener.walk(value.as_reflect())?;
    Ok(flattener.fields)
}

/// Flattens `value`, panicking if it is not a record.
///
/// Passing a non-record is a programming error, so it is reported loudly
/// instead of as an empty form.
pub fn fields<T: AsReflect + ?Sized>(value: &T) -> Vec<Field> {
    match flatten(value) {
        Ok(fields) => fields,
        Err(err) => panic!("{err}"),
    }
}

/// Method-call access to [`flatten`] and [`fields`].
pub trait FormExt {
    fn to_fields(&self) -> Vec<Field>;
    fn try_to_fields(&self) -> Result<Vec<Field>>;
}

impl<T: AsReflect + ?Sized> FormExt for T {
    fn to_fields(&self) -> Vec<Field> {
        fields(self)
    }

    fn try_to_fields(&self) -> Result<Vec<Field>> {
        flatten(self)
    }
}

/// Index paths, relative to the enclosing named record, of the components
/// that survive promotion of inlined fields.
type Promoted = HashSet<Vec<usize>>;

struct Slot {
    index: Vec<usize>,
    shadowed: bool,
}

struct Flattener<'c> {
    config: &'c FormConfig,
    fields: Vec<Field>,
}

impl<'c> Flattener<'c> {
    fn new(config: &'c FormConfig) -> Self {
        Self {
            config,
            fields: Vec::new(),
        }
    }

    fn walk(&mut self, value: &dyn Reflect) -> Result<()> {
        let max_depth = self.config.max_depth;
        match resolve(value, 0, max_depth, |record| self.walk_record(record, &[], 0))? {
            Resolved::Record(result) => result,
            Resolved::Leaf(_, type_name) => Err(FormError::not_a_record(type_name)),
        }
    }

    fn walk_record(
        &mut self,
        record: &dyn Record,
        path: &[&'static str],
        depth: usize,
    ) -> Result<()> {
        let max_depth = self.config.max_depth;
        if depth > max_depth {
            return Err(FormError::depth_exceeded(max_depth));
        }
        trace!(depth, path = %path.join(self.config.separator.as_str()), "walking record");

        let promoted = self.promoted(record, depth)?;
        self.walk_components(record, path, &promoted, &mut Vec::new(), depth)
    }

    /// Resolves name collisions between a record's own components and the
    /// components promoted from its inlined records.
    ///
    /// A name declared at a shallower inlining level hides deeper ones, and
    /// a name declared more than once at its shallowest level hides all of
    /// them.
    fn promoted(&self, record: &dyn Record, depth: usize) -> Result<Promoted> {
        let mut slots = Vec::new();
        let mut by_name = HashMap::new();
        self.collect_slots(record, &mut Vec::new(), &mut by_name, &mut slots, depth)?;
        Ok(slots
            .into_iter()
            .filter(|slot| !slot.shadowed)
            .map(|slot| slot.index)
            .collect())
    }

    fn collect_slots(
        &self,
        record: &dyn Record,
        index: &mut Vec<usize>,
        by_name: &mut HashMap<&'static str, usize>,
        slots: &mut Vec<Slot>,
        depth: usize,
    ) -> Result<()> {
        for (position, component) in record.components().into_iter().enumerate() {
            index.push(position);

            let add = match by_name.get(component.name) {
                None => true,
                Some(&existing) => {
                    let existing = &mut slots[existing];
                    match index.len().cmp(&existing.index.len()) {
                        Ordering::Equal => {
                            existing.shadowed = true;
                            false
                        }
                        Ordering::Less => {
                            existing.shadowed = true;
                            true
                        }
                        Ordering::Greater => false,
                    }
                }
            };
            if add {
                by_name.insert(component.name, slots.len());
                slots.push(Slot {
                    index: index.clone(),
                    shadowed: false,
                });
            }

            if component.embedded {
                let resolved = resolve(component.value, depth + 1, self.config.max_depth, |nested| {
                    self.collect_slots(nested, index, by_name, slots, depth + 1)
                })?;
                if let Resolved::Record(result) = resolved {
                    result?;
                }
            }

            index.pop();
        }

        Ok(())
    }

    fn walk_components(
        &mut self,
        record: &dyn Record,
        path: &[&'static str],
        promoted: &Promoted,
        index: &mut Vec<usize>,
        depth: usize,
    ) -> Result<()> {
        for (position, component) in record.components().into_iter().enumerate() {
            index.push(position);
            let result = self.walk_component(component, path, promoted, index, depth);
            index.pop();
            result?;
        }

        Ok(())
    }

    fn walk_component(
        &mut self,
        component: Component<'_>,
        path: &[&'static str],
        promoted: &Promoted,
        index: &mut Vec<usize>,
        depth: usize,
    ) -> Result<()> {
        let max_depth = self.config.max_depth;
        let shadowed = !promoted.contains(index.as_slice());

        // Inlined records stay reachable even when the embedding field is
        // private or its own name is shadowed.
        if component.embedded {
            let resolved = resolve(component.value, depth + 1, max_depth, |nested| {
                self.walk_components(nested, path, promoted, index, depth + 1)
            })?;
            return match resolved {
                Resolved::Record(result) => result,
                Resolved::Leaf(value, _) => {
                    if shadowed {
                        debug!(field = component.name, "skipping shadowed field");
                    } else {
                        self.emit(&component, path, value);
                    }
                    Ok(())
                }
            };
        }

        if !component.visible {
            debug!(field = component.name, "skipping non-visible field");
            return Ok(());
        }
        if shadowed {
            debug!(field = component.name, "skipping shadowed field");
            return Ok(());
        }

        let child_path: Vec<&'static str> = path.iter().copied().chain([component.name]).collect();
        let resolved = resolve(component.value, depth + 1, max_depth, |nested| {
            self.walk_record(nested, &child_path, depth + 1)
        })?;

        match resolved {
            Resolved::Record(result) => result,
            Resolved::Leaf(value, _) => {
                self.emit(&component, path, value);
                Ok(())
            }
        }
    }

    fn emit(&mut self, component: &Component<'_>, path: &[&'static str], value: Value) {
        if !component.visible {
            debug!(field = component.name, "skipping non-visible field");
            return;
        }

        let annotation = Annotation::parse(component.annotation);
        if annotation.is_ignored() {
            debug!(field = component.name, "skipping ignored field");
            return;
        }

        let field = Field::new(path, component.name, value, self.config).with_annotation(&annotation);
        trace!(name = %field.name, input_type = %field.input_type, "emitting field");
        self.fields.push(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::Html;
    use crate::reflect::Reflected;

    #[derive(Default)]
    struct Address {
        street1: String,
    }

    impl Reflect for Address {
        fn reflect(&self) -> Reflected<'_> {
            Reflected::Record(self)
        }
    }

    impl Record for Address {
        fn components(&self) -> Vec<Component<'_>> {
            vec![Component::new("Street1", &self.street1).with_annotation("name=street")]
        }
    }

    #[derive(Default)]
    struct Contact {
        name: String,
        password: String,
        secret: String,
        hidden: String,
        address: Option<Address>,
    }

    impl Reflect for Contact {
        fn reflect(&self) -> Reflected<'_> {
            Reflected::Record(self)
        }
    }

    impl Record for Contact {
        fn components(&self) -> Vec<Component<'_>> {
            vec![
                Component::new("Name", &self.name).with_annotation("label=Full Name;id=name"),
                Component::new("Password", &self.password)
                    .with_annotation("type=password;footer=Something super secret!"),
                Component::new("Secret", &self.secret).with_annotation("-"),
                Component::new("hidden", &self.hidden).visible(false),
                Component::new("Address", &self.address),
            ]
        }
    }

    #[test]
    fn hand_written_records_flatten_in_order() {
        let contact = Contact {
            name: "Michael Scott".into(),
            address: Some(Address {
                street1: "123 Test St".into(),
            }),
            ..Contact::default()
        };

        let fields = flatten(&contact).unwrap();
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Name", "Password", "street"]);

        assert_eq!(fields[0].label, "Full Name");
        assert_eq!(fields[0].placeholder, "Full Name");
        assert_eq!(fields[0].id, "name");
        assert_eq!(fields[0].value, Value::from("Michael Scott"));
        assert_eq!(fields[1].input_type, "password");
        assert_eq!(fields[1].footer, Html::from("Something super secret!"));
        assert_eq!(fields[2].label, "Street1");
        assert_eq!(fields[2].value, Value::from("123 Test St"));
    }

    #[test]
    fn missing_nested_record_uses_zero_value() {
        let fields = flatten(&Contact::default()).unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[2].value, Value::from(""));
    }

    #[test]
    fn non_records_fail() {
        assert_eq!(flatten(&7u32), Err(FormError::not_a_record("u32")));
        assert!(7u32.try_to_fields().is_err());
    }

    #[test]
    fn string_slices_are_leaves_not_records() {
        let text = "just a string";
        assert_eq!(flatten(&text), Err(FormError::not_a_record("&str")));
        assert_eq!(flatten(&&text), Err(FormError::not_a_record("&str")));
        assert!(FormExt::try_to_fields(&text).is_err());
    }

    #[test]
    #[should_panic(expected = "only structs are supported")]
    fn fields_panics_on_non_records() {
        fields(&"just a string");
    }

    #[test]
    fn config_controls_separator_and_input_type() {
        #[derive(Default)]
        struct Point {
            x: i32,
        }

        impl Reflect for Point {
            fn reflect(&self) -> Reflected<'_> {
                Reflected::Record(self)
            }
        }

        impl Record for Point {
            fn components(&self) -> Vec<Component<'_>> {
                vec![Component::new("X", &self.x)]
            }
        }

        #[derive(Default)]
        struct Shape {
            origin: Box<Point>,
        }

        impl Reflect for Shape {
            fn reflect(&self) -> Reflected<'_> {
                Reflected::Record(self)
            }
        }

        impl Record for Shape {
            fn components(&self) -> Vec<Component<'_>> {
                vec![Component::new("Origin", &self.origin)]
            }
        }

        let config = FormConfig::default()
            .with_separator("_")
            .with_default_input_type("number");
        let fields = flatten_with_config(&Shape::default(), &config).unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "Origin_X");
        assert_eq!(fields[0].input_type, "number");
        assert_eq!(fields[0].value, Value::Int(0));
    }
}
