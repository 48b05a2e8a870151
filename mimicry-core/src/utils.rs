//! Shared string casing helpers.

/// Capitalize the first character (e.g., "widget" -> "Widget").
pub fn to_title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character (e.g., "Widget" -> "widget").
pub fn to_camel(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_title() {
        assert_eq!(to_title("widget"), "Widget");
        assert_eq!(to_title("Widget"), "Widget");
        assert_eq!(to_title("w"), "W");
        assert_eq!(to_title(""), "");
    }

    #[test]
    fn test_to_camel() {
        assert_eq!(to_camel("Widget"), "widget");
        assert_eq!(to_camel("MainComponent"), "mainComponent");
        assert_eq!(to_camel(""), "");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("run_and_return"), "RunAndReturn");
        assert_eq!(to_pascal_case(""), "");
    }
}
