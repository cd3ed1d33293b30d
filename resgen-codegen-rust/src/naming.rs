//! Rust-specific naming conventions.

use resgen_codegen::language::NamingConvention;
use resgen_core::{ResourceType, to_upper_snake_case};

fn escape_rust_reserved(name: &str) -> String {
    format!("r#{}", name)
}

fn container_to_module(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    container_to_module,
    container_to_constant: to_upper_snake_case,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
        "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe",
        "use", "where", "while", "abstract", "become", "box", "do", "final", "macro", "override",
        "priv", "try", "typeof", "unsized", "virtual", "yield",
    ],
    escape_reserved: escape_rust_reserved,
};

/// Runtime descriptor type for a resource type.
pub fn descriptor_type(kind: ResourceType) -> &'static str {
    match kind {
        ResourceType::Drawable => "DrawableResource",
        ResourceType::String => "StringResource",
        ResourceType::Plurals => "PluralStringResource",
        ResourceType::Array => "StringArrayResource",
        ResourceType::Font => "FontResource",
    }
}

/// Namespace type holding the accessors of one resource type, e.g. `ResDrawable`.
pub fn namespace_type(kind: ResourceType) -> String {
    format!("Res{}", kind.type_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_names() {
        assert_eq!(RUST_NAMING.accessor_name("icon_0"), "icon_0");
        assert_eq!(RUST_NAMING.accessor_name("type"), "r#type");
        assert_eq!(RUST_NAMING.accessor_name("async"), "r#async");
        assert_eq!(RUST_NAMING.accessor_name("Type"), "Type");
    }

    #[test]
    fn test_container_names() {
        assert_eq!(RUST_NAMING.module_name("Drawable12"), "drawable12");
        assert_eq!(RUST_NAMING.constant_name("Drawable12"), "DRAWABLE12");
        assert_eq!(RUST_NAMING.module_name("Plurals0"), "plurals0");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(namespace_type(ResourceType::Array), "ResArray");
        assert_eq!(descriptor_type(ResourceType::Array), "StringArrayResource");
        assert_eq!(descriptor_type(ResourceType::Plurals), "PluralStringResource");
    }
}
