use crate::annotation::Annotation;
use crate::config::FormConfig;
use crate::html::Html;
use crate::value::Value;

/// Describes a single form input.
///
/// This is what templates consume: everything needed to render a label, an
/// `<input>` and an optional trailing footer for one leaf field.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Field {
    /// Dotted path of the field, or the `name` annotation verbatim.
    pub name: String,
    pub label: String,
    pub placeholder: String,
    /// HTML input type, `"text"` unless overridden.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub input_type: String,
    pub id: String,
    pub class: String,
    pub read_only: bool,
    /// Comma-separated `options` tokens, in declaration order.
    pub options: Vec<String>,
    pub footer: Html,
    pub value: Value,
}

impl Field {
    /// Builds the default descriptor for a leaf declared as `name` below
    /// `path`.
    pub fn new(path: &[&str], name: &str, value: Value, config: &FormConfig) -> Self {
        Self {
            name: config.join_path(path, name),
            label: name.to_string(),
            placeholder: name.to_string(),
            input_type: config.default_input_type.clone(),
            value,
            ..Self::default()
        }
    }

    /// Applies annotation overrides on top of the current attributes.
    ///
    /// `label` also sets the placeholder, so `placeholder` is applied after
    /// it and wins when both are present. Unknown keys are ignored.
    pub fn apply(&mut self, annotation: &Annotation) {
        if let Some(name) = annotation.get("name") {
            self.name = name.to_string();
        }
        if let Some(label) = annotation.get("label") {
            self.label = label.to_string();
            self.placeholder = label.to_string();
        }
        if let Some(placeholder) = annotation.get("placeholder") {
            self.placeholder = placeholder.to_string();
        }
        if let Some(input_type) = annotation.get("type") {
            self.input_type = input_type.to_string();
        }
        if let Some(id) = annotation.get("id") {
            self.id = id.to_string();
        }
        if let Some(footer) = annotation.get("footer") {
            self.footer = Html::new(footer);
        }
        if let Some(class) = annotation.get("class") {
            self.class = class.to_string();
        }
        if let Some(read_only) = annotation.get("readonly") {
            self.read_only = read_only == "true";
        }
        if let Some(options) = annotation.get("options") {
            self.options = split_options(options);
        }
    }

    pub fn with_annotation(mut self, annotation: &Annotation) -> Self {
        self.apply(annotation);
        self
    }

    pub fn has_option(&self, token: &str) -> bool {
        self.options.iter().any(|option| option == token)
    }
}

fn split_options(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(name: &str) -> Field {
        Field::new(&[], name, Value::from(""), &FormConfig::default())
    }

    #[test]
    fn defaults_come_from_declared_name() {
        let field = Field::new(&["Address"], "Street1", Value::from("123 Test St"), &FormConfig::default());
        assert_eq!(field.name, "Address.Street1");
        assert_eq!(field.label, "Street1");
        assert_eq!(field.placeholder, "Street1");
        assert_eq!(field.input_type, "text");
        assert_eq!(field.id, "");
        assert_eq!(field.class, "");
        assert!(!field.read_only);
        assert!(field.options.is_empty());
        assert!(field.footer.is_empty());
        assert_eq!(field.value, Value::from("123 Test St"));
    }

    #[test]
    fn label_also_sets_placeholder() {
        let field = base("Name").with_annotation(&Annotation::parse("label=Full Name"));
        assert_eq!(field.label, "Full Name");
        assert_eq!(field.placeholder, "Full Name");
    }

    #[test]
    fn placeholder_wins_over_label_regardless_of_order() {
        let field = base("Name").with_annotation(&Annotation::parse("placeholder=Jane Doe;label=Full Name"));
        assert_eq!(field.label, "Full Name");
        assert_eq!(field.placeholder, "Jane Doe");
    }

    #[test]
    fn name_override_drops_path() {
        let mut field = Field::new(&["Address"], "Street1", Value::Null, &FormConfig::default());
        field.apply(&Annotation::parse("name=street"));
        assert_eq!(field.name, "street");
        assert_eq!(field.label, "Street1");
    }

    #[test]
    fn remaining_keys() {
        let field = base("Password").with_annotation(&Annotation::parse(
            "type=password;id=pw;class=wide;footer=<em>secret</em>;bogus=1",
        ));
        assert_eq!(field.input_type, "password");
        assert_eq!(field.id, "pw");
        assert_eq!(field.class, "wide");
        assert_eq!(field.footer, Html::from("<em>secret</em>"));
    }

    #[test]
    fn options_keep_order_and_tokens() {
        let field = base("Name").with_annotation(&Annotation::parse("options=readonly,required"));
        assert_eq!(field.options, vec!["readonly".to_string(), "required".to_string()]);
        assert!(field.has_option("required"));
        assert!(!field.read_only);

        let field = base("Name").with_annotation(&Annotation::parse("options="));
        assert!(field.options.is_empty());
    }

    #[test]
    fn readonly_flag_is_independent_of_options() {
        let field = base("Name").with_annotation(&Annotation::parse("readonly=true"));
        assert!(field.read_only);
        assert!(field.options.is_empty());

        let field = base("Name").with_annotation(&Annotation::parse("readonly=yes"));
        assert!(!field.read_only);
    }
}
