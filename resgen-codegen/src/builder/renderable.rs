//! Renderable trait and CodeFragment for decoupled code generation.

/// A fragment of generated code.
///
/// Fragments sit between the typed file models and the final string, so
/// pieces can be built independently and composed later.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
    /// A `///` doc comment.
    Doc(String),
    /// A `//` line comment.
    Comment(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    /// A block closed by `}`.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some("}".to_string()),
        }
    }

    /// A block with a custom closing line (e.g. `};` or `});`).
    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: &str) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some(close.to_string()),
        }
    }

    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }

    pub fn doc(s: impl Into<String>) -> Self {
        Self::Doc(s.into())
    }

    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }
}

/// Types that render to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braced_block() {
        let block = CodeFragment::braced("impl Foo {", vec![CodeFragment::line("fn bar() {}")]);
        match block {
            CodeFragment::Block { header, body, close } => {
                assert_eq!(header, "impl Foo {");
                assert_eq!(body.len(), 1);
                assert_eq!(close.as_deref(), Some("}"));
            }
            _ => panic!("Expected Block variant"),
        }
    }
}
