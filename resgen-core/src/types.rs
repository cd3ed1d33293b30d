//! Core type definitions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Kind of a resource, used to group resources into accessor namespaces.
///
/// Declaration order is the order in which resource types are planned and
/// emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ResourceType {
    Drawable,
    String,
    Plurals,
    Array,
    Font,
}

impl ResourceType {
    /// Every resource type in planning order.
    pub const ALL: [ResourceType; 5] = [
        ResourceType::Drawable,
        ResourceType::String,
        ResourceType::Plurals,
        ResourceType::Array,
        ResourceType::Font,
    ];

    /// The lowercase tag used in logical ids (`"drawable:icon_0"`) and as the
    /// accessor namespace.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Drawable => "drawable",
            ResourceType::String => "string",
            ResourceType::Plurals => "plurals",
            ResourceType::Array => "array",
            ResourceType::Font => "font",
        }
    }

    /// PascalCase prefix for shard container names (`Drawable0`).
    pub fn type_name(&self) -> &'static str {
        match self {
            ResourceType::Drawable => "Drawable",
            ResourceType::String => "String",
            ResourceType::Plurals => "Plurals",
            ResourceType::Array => "Array",
            ResourceType::Font => "Font",
        }
    }

    /// Keyed resources also carry their bare key, since the runtime looks the
    /// value up inside a values file rather than loading the path directly.
    pub fn is_keyed(&self) -> bool {
        matches!(
            self,
            ResourceType::String | ResourceType::Plurals | ResourceType::Array
        )
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drawable" => Ok(ResourceType::Drawable),
            "string" => Ok(ResourceType::String),
            "plurals" => Ok(ResourceType::Plurals),
            "array" | "string-array" => Ok(ResourceType::Array),
            "font" => Ok(ResourceType::Font),
            other => Err(format!(
                "unknown resource type '{}' (expected one of: drawable, string, plurals, array, font)",
                other
            )),
        }
    }
}

impl TryFrom<String> for ResourceType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ResourceType> for String {
    fn from(ty: ResourceType) -> Self {
        ty.as_str().to_string()
    }
}
