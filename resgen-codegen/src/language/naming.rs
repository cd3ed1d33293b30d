//! Naming conventions for generated identifiers.

/// Identifier rules of a target language.
///
/// Accessor names are resource keys used verbatim; the only transformation
/// allowed is escaping a key that collides with a reserved word.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Turn a shard container name into a file/module name (e.g. "Drawable0" -> "drawable0")
    pub container_to_module: fn(&str) -> String,
    /// Turn a shard container name into a constant name (e.g. "Drawable0" -> "DRAWABLE0")
    pub container_to_constant: fn(&str) -> String,
    /// Reserved words of the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g. "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// The identifier for a resource key, escaped if necessary.
    pub fn accessor_name(&self, key: &str) -> String {
        if self.is_reserved(key) {
            (self.escape_reserved)(key)
        } else {
            key.to_string()
        }
    }

    pub fn module_name(&self, container: &str) -> String {
        (self.container_to_module)(container)
    }

    pub fn constant_name(&self, container: &str) -> String {
        (self.container_to_constant)(container)
    }
}
