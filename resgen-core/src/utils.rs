//! Shared string helpers for code generation.

/// Convert a string to PascalCase (e.g., "string_array" -> "StringArray")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to UPPER_SNAKE_CASE (e.g., "drawable0" -> "DRAWABLE0")
pub fn to_upper_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_uppercase());
    }
    result.replace('-', "_")
}

/// Check whether a name is lower snake case (`icon_home`, `ic_24dp`).
pub fn is_snake_case(s: &str) -> bool {
    !s.is_empty()
        && !s.contains("__")
        && s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
