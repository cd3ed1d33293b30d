//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the manifest source, filename, and the current path through the
/// manifest so nested checks can report where they failed.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "resources.toml");
/// ctx.push("drawable").validate_resource_name("icon_home")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["drawable"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "resource in 'drawable'" or just "resource" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Validate a resource name.
    ///
    /// Resource names become accessor names verbatim. Ordinary keywords are
    /// allowed since the generator emits them as raw identifiers; path
    /// keywords cannot be escaped and are rejected.
    pub fn validate_resource_name(&self, name: &str) -> Result<()> {
        let span = find_value_span(self.src(), "name", name);

        if is_path_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for("resource"),
                span,
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for("resource"),
                reason,
                span,
            ));
        }

        Ok(())
    }

    /// Validate the generated module name. No keyword is accepted here.
    pub fn validate_module_name(&self, name: &str) -> Result<()> {
        let span = find_value_span(self.src(), "module", name);

        if is_rust_keyword(name) {
            return Err(self
                .source
                .reserved_keyword_error(name, self.context_for("module"), span));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for("module"),
                reason,
                span,
            ));
        }

        Ok(())
    }

    /// Validate the runtime crate path, e.g. `resources` or `crate::res_runtime`.
    pub fn validate_runtime_path(&self, path: &str) -> Result<()> {
        let span = find_value_span(self.src(), "runtime", path);

        if let Some(reason) = validate_path(path) {
            return Err(self.source.invalid_identifier_error(
                path,
                self.context_for("runtime path"),
                reason,
                span,
            ));
        }

        Ok(())
    }
}

/// Rust reserved keywords that cannot be used as plain identifiers
/// Source: https://doc.rust-lang.org/reference/keywords.html
pub(crate) const RUST_KEYWORDS: &[&str] = &[
    // Strict keywords
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
    // Reserved keywords
    "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try", "typeof",
    "unsized", "virtual", "yield",
];

/// Keywords that are not accepted even as raw identifiers.
pub(crate) const PATH_KEYWORDS: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Check if a name is a Rust reserved keyword
pub(crate) fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Check if a name cannot be written even with the `r#` prefix
pub(crate) fn is_path_keyword(name: &str) -> bool {
    PATH_KEYWORDS.contains(&name)
}

/// Find the span of a string value in the TOML source.
///
/// Searches for `key = "value"`, `key="value"` and the single-quoted forms.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    let patterns = [
        format!("{} = \"{}\"", key, value),
        format!("{}=\"{}\"", key, value),
        format!("{} = '{}'", key, value),
        format!("{}='{}'", key, value),
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            // value starts right after the opening quote
            let start = pos + pattern.len() - value.len() - 1;
            return Some(SourceSpan::from((start, value.len())));
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Validate that a name is a plain ASCII Rust identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if name == "_" {
        return Some("'_' is not a valid identifier");
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

/// Validate a `::`-separated crate path.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_path(path: &str) -> Option<&'static str> {
    if path.is_empty() {
        return Some("path cannot be empty");
    }

    let mut prev: Option<&str> = None;
    for segment in path.split("::") {
        if let Some(reason) = validate_identifier(segment) {
            return Some(reason);
        }

        let leading = match prev {
            None => matches!(segment, "crate" | "self" | "super"),
            Some(p) => segment == "super" && matches!(p, "self" | "super"),
        };
        if is_rust_keyword(segment) && !leading {
            return Some("path segment is a Rust reserved keyword");
        }
        prev = Some(segment);
    }

    None
}
