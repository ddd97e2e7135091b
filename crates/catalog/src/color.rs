use serde::{Deserialize, Serialize};

use doorline_core::ValueObject;

/// Pricing role of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    White,
    Other,
}

/// A color option offered for a door.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub name: String,
    #[serde(default)]
    pub hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Explicit pricing role. When absent the role is inferred from `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ColorRole>,
}

impl Color {
    /// Color identified by name only.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: String::new(),
            image: None,
            role: None,
        }
    }

    pub fn with_role(mut self, role: ColorRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Resolve the pricing role.
    ///
    /// An explicit `role` wins. Otherwise the color is white iff its name,
    /// lower-cased, contains `"white"`; an empty name is never white.
    pub fn role(&self) -> ColorRole {
        if let Some(role) = self.role {
            return role;
        }
        if self.name.to_lowercase().contains("white") {
            ColorRole::White
        } else {
            ColorRole::Other
        }
    }

    pub fn is_white(&self) -> bool {
        self.role() == ColorRole::White
    }
}

impl ValueObject for Color {}
