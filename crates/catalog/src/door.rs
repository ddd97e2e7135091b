use serde::{Deserialize, Serialize};

use doorline_core::{DomainError, DomainResult, Entity};

use crate::color::Color;
use crate::series::Series;

/// Door surface finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoorCover {
    StrongFlex,
    Emalex,
    Emal,
}

/// Available leaf dimensions in millimetres.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorSizes {
    #[serde(default)]
    pub height: Vec<u32>,
    #[serde(default)]
    pub width: Vec<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetItemUnit {
    #[serde(rename = "шт")]
    Piece,
    #[serde(rename = "комплект")]
    Kit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetItemCategory {
    #[serde(rename = "коробка")]
    Frame,
    #[serde(rename = "наличник")]
    Casing,
    #[serde(rename = "добор")]
    Extension,
    #[serde(rename = "плинтус")]
    Plinth,
    #[serde(rename = "фурнитура")]
    Hardware,
}

/// One component of the full door kit (frame, trim, hardware).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorSetItem {
    pub name: String,
    pub unit: SetItemUnit,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<SetItemCategory>,
}

/// A catalog door.
///
/// Only `price`, `series` and `colors` matter to pricing; the rest is carried
/// through for the catalog pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Door {
    pub id: String,
    pub cover: DoorCover,
    pub series: Series,
    #[serde(default)]
    pub model: String,
    pub name: String,
    #[serde(default)]
    pub material: String,
    /// Base price in whole currency units.
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sizes: DoorSizes,
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub set: Vec<DoorSetItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Door {
    /// Minimal door used for pricing-only call sites.
    pub fn priced(id: impl Into<String>, series: impl Into<Series>, price: u64) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            cover: DoorCover::StrongFlex,
            series: series.into(),
            model: String::new(),
            material: String::new(),
            price,
            thickness: None,
            tags: Vec::new(),
            sizes: DoorSizes::default(),
            colors: Vec::new(),
            images: Vec::new(),
            set: Vec::new(),
            description: None,
        }
    }

    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    /// Look up one of this door's colors by exact name.
    pub fn color(&self, name: &str) -> Option<&Color> {
        self.colors.iter().find(|c| c.name == name)
    }

    /// Check the record-level invariants the catalog relies on.
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.trim().is_empty() {
            return Err(DomainError::validation("door id cannot be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "door {}: name cannot be empty",
                self.id
            )));
        }
        Ok(())
    }
}

impl Entity for Door {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
