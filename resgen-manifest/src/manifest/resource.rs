use resgen_core::ResourceType;
use serde::Deserialize;

/// A `[[resource]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceDecl {
    /// Resource type (`drawable`, `string`, `plurals`, `array`, `font`)
    #[serde(rename = "type")]
    pub kind: ResourceType,

    /// Resource name, used verbatim as the accessor name
    pub name: String,

    /// Concrete forms of the resource
    #[serde(default)]
    pub variants: Vec<VariantDecl>,
}

impl ResourceDecl {
    /// Location string used in diagnostics, e.g. `resource.drawable.icon_0`.
    pub fn location(&self) -> String {
        format!("resource.{}.{}", self.kind, self.name)
    }
}

/// One variant of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariantDecl {
    /// Qualifiers such as `en`, `xxhdpi`, `dark`
    #[serde(default)]
    pub qualifiers: Vec<String>,

    /// Path relative to the resources root
    pub path: String,
}
