//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    /// Four spaces, as rustfmt writes it.
    #[default]
    Rust,
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// The string written for one indent level.
    pub fn as_str(&self) -> &'static str {
        const SPACES: &str = "        ";
        match self {
            Self::Rust => &SPACES[..4],
            Self::Spaces(width) => &SPACES[..usize::from(*width).min(SPACES.len())],
            Self::Tab => "\t",
        }
    }
}
