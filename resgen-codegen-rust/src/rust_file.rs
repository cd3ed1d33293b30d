//! Structured Rust file generation.
//!
//! A [`RustFile`] is a list of import groups followed by body items, each
//! separated by a blank line.

use resgen_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A Rust use statement.
#[derive(Debug, Clone)]
pub struct Use {
    module: String,
    symbols: Vec<String>,
}

impl Use {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbols: Vec::new(),
        }
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    pub fn symbols(mut self, symbols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.symbols.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Symbols are sorted so the output is stable under rustfmt.
    fn format(&self) -> String {
        let mut symbols = self.symbols.clone();
        symbols.sort();
        match symbols.as_slice() {
            [] => format!("use {};", self.module),
            [symbol] => format!("use {}::{};", self.module, symbol),
            symbols => format!("use {}::{{{}}};", self.module, symbols.join(", ")),
        }
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.format())]
    }
}

/// A structured representation of a Rust file.
///
/// # Example
///
/// ```
/// use resgen_codegen_rust::{RawCode, RustFile, Use};
///
/// let code = RustFile::new()
///     .use_group([Use::new("std::collections").symbol("HashMap")])
///     .add(RawCode::new("mod drawable0;"))
///     .render();
/// assert_eq!(code, "use std::collections::HashMap;\n\nmod drawable0;\n");
/// ```
#[derive(Default)]
pub struct RustFile {
    use_groups: Vec<Vec<Use>>,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group of use statements, separated from other groups by a blank line.
    ///
    /// Empty groups are skipped.
    pub fn use_group(mut self, uses: impl IntoIterator<Item = Use>) -> Self {
        let group: Vec<Use> = uses.into_iter().collect();
        if !group.is_empty() {
            self.use_groups.push(group);
        }
        self
    }

    /// Add a body element.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file with 4-space indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::Rust)
    }

    /// Render the file below a header comment.
    pub fn render_with_header(&self, header: &str) -> String {
        let content = self.render();
        if content.is_empty() {
            format!("{}\n", header)
        } else {
            format!("{}\n\n{}", header, content)
        }
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        let sections = self
            .use_groups
            .iter()
            .map(|group| {
                group
                    .iter()
                    .flat_map(|u| u.to_fragments())
                    .collect::<Vec<_>>()
            })
            .chain(self.body.iter().cloned());

        for (i, fragments) in sections.enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            builder.emit(&CodeFragment::Sequence(fragments));
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.use_groups.is_empty() && self.body.is_empty()
    }
}

/// Raw code, one fragment line per source line.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(
            lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| CodeFragment::Line(line.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        let file = RustFile::new().use_group([]);
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
        assert_eq!(file.render_with_header("// header"), "// header\n");
    }

    #[test]
    fn test_use_formats() {
        assert_eq!(Use::new("std::fmt").format(), "use std::fmt;");
        assert_eq!(
            Use::new("resources").symbol("FontResource").format(),
            "use resources::FontResource;"
        );
        assert_eq!(
            Use::new("resources")
                .symbols(["DrawableResource", "ResourceItem"])
                .format(),
            "use resources::{DrawableResource, ResourceItem};"
        );
    }

    #[test]
    fn test_groups_and_body_separated() {
        let code = RustFile::new()
            .use_group([Use::new("std::collections").symbol("HashMap")])
            .use_group([Use::new("super").symbol("ResFont")])
            .add(RawCode::lines(["mod font0;", "mod font1;"]))
            .add(CodeFragment::braced("struct Font0 {", vec![]))
            .render_with_header("// header");

        assert_eq!(
            code,
            "// header\n\nuse std::collections::HashMap;\n\nuse super::ResFont;\n\nmod font0;\nmod font1;\n\nstruct Font0 {\n}\n"
        );
    }
}
