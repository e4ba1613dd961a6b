//! Enum types for form attribute configuration.

/// Rename strategy for declared field and variant names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenameStrategy {
    #[default]
    None,
    KebabCase,
    SnakeCase,
    PascalCase,
    CamelCase,
    Lowercase,
    Uppercase,
}

impl RenameStrategy {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "kebab-case" => Some(RenameStrategy::KebabCase),
            "snake_case" => Some(RenameStrategy::SnakeCase),
            "PascalCase" => Some(RenameStrategy::PascalCase),
            "camelCase" => Some(RenameStrategy::CamelCase),
            "lowercase" => Some(RenameStrategy::Lowercase),
            "UPPERCASE" => Some(RenameStrategy::Uppercase),
            "none" => Some(RenameStrategy::None),
            _ => None,
        }
    }

    pub fn apply(&self, name: &str) -> String {
        match self {
            RenameStrategy::None => name.to_string(),
            RenameStrategy::KebabCase => to_kebab_case(name),
            RenameStrategy::SnakeCase => to_snake_case(name),
            RenameStrategy::PascalCase => to_pascal_case(name),
            RenameStrategy::CamelCase => to_camel_case(name),
            RenameStrategy::Lowercase => name.to_lowercase(),
            RenameStrategy::Uppercase => name.to_uppercase(),
        }
    }
}

fn to_kebab_case(s: &str) -> String {
    to_snake_case(s).replace('_', "-")
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_lower = false;

    for c in s.chars() {
        if c == '-' {
            result.push('_');
            prev_lower = false;
        } else if c.is_ascii_uppercase() {
            if prev_lower {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else {
            result.push(c);
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }

    result
}

fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut upper_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' {
            upper_next = true;
        } else if upper_next {
            result.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::RenameStrategy;

    #[test]
    fn field_names() {
        assert_eq!(RenameStrategy::PascalCase.apply("street1"), "Street1");
        assert_eq!(RenameStrategy::PascalCase.apply("first_name"), "FirstName");
        assert_eq!(RenameStrategy::CamelCase.apply("first_name"), "firstName");
        assert_eq!(RenameStrategy::KebabCase.apply("first_name"), "first-name");
        assert_eq!(RenameStrategy::Uppercase.apply("zip"), "ZIP");
        assert_eq!(RenameStrategy::None.apply("zip_code"), "zip_code");
    }

    #[test]
    fn variant_names() {
        assert_eq!(RenameStrategy::SnakeCase.apply("SuperAdmin"), "super_admin");
        assert_eq!(RenameStrategy::KebabCase.apply("SuperAdmin"), "super-admin");
        assert_eq!(RenameStrategy::Lowercase.apply("SuperAdmin"), "superadmin");
        assert_eq!(RenameStrategy::CamelCase.apply("SuperAdmin"), "superAdmin");
    }

    #[test]
    fn parses_known_strategies() {
        assert_eq!(RenameStrategy::parse("PascalCase"), Some(RenameStrategy::PascalCase));
        assert_eq!(RenameStrategy::parse("none"), Some(RenameStrategy::None));
        assert_eq!(RenameStrategy::parse("Title Case"), None);
    }
}
