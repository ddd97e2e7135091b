//! Pricing configuration.
//!
//! The configuration is built once at startup (either the shipped table from
//! [`PricingConfig::default`] or a JSON document) and is read-only afterwards.
//! Multipliers are validated on the way in, so a constructed config always
//! holds finite, non-negative values.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use doorline_catalog::Series;
use doorline_core::{DomainError, Multiplier, ValueObject};

/// Set multiplier applied to series missing from the set table.
pub const FALLBACK_SET_MULTIPLIER: Multiplier = Multiplier::constant(1.8);

/// Errors raised while loading a pricing configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read pricing config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Also covers invalid multipliers, which are rejected while parsing.
    #[error("malformed pricing config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Color multiplier buckets of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorMultiplier {
    pub white: Multiplier,
    pub default: Multiplier,
}

impl ColorMultiplier {
    pub const NEUTRAL: ColorMultiplier = ColorMultiplier {
        white: Multiplier::NEUTRAL,
        default: Multiplier::NEUTRAL,
    };

    pub fn new(white: f64, default: f64) -> Result<Self, DomainError> {
        Ok(Self {
            white: Multiplier::try_from(white)?,
            default: Multiplier::try_from(default)?,
        })
    }
}

impl ValueObject for ColorMultiplier {}

/// Per-series pricing rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesRule {
    pub color_multiplier: ColorMultiplier,
}

impl SeriesRule {
    pub fn new(color_multiplier: ColorMultiplier) -> Self {
        Self { color_multiplier }
    }
}

impl ValueObject for SeriesRule {}

/// Series -> multiplier table used to derive a full-set price from a unit price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetMultipliers(HashMap<Series, Multiplier>);

static SHIPPED_SET_MULTIPLIERS: LazyLock<SetMultipliers> = LazyLock::new(|| {
    SetMultipliers(HashMap::from([
        (Series::Innova, Multiplier::constant(1.5)),
        (Series::Emalex, Multiplier::constant(2.0)),
        (Series::Invisible, Multiplier::constant(2.0)),
        (Series::Urban, Multiplier::constant(1.7)),
        (Series::Linea, Multiplier::constant(1.85)),
        (Series::Skinel, Multiplier::constant(2.0)),
    ]))
});

impl SetMultipliers {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table used when neither the caller nor the config
    /// supplies one.
    pub fn shipped() -> &'static SetMultipliers {
        &SHIPPED_SET_MULTIPLIERS
    }

    pub fn with(mut self, series: Series, multiplier: Multiplier) -> Self {
        self.0.insert(series, multiplier);
        self
    }

    /// Multiplier configured for `series`, if any.
    pub fn lookup(&self, series: &Series) -> Option<Multiplier> {
        self.0.get(series).copied()
    }

    /// Multiplier for `series`, falling back to [`FALLBACK_SET_MULTIPLIER`].
    pub fn get(&self, series: &Series) -> Multiplier {
        self.lookup(series).unwrap_or(FALLBACK_SET_MULTIPLIER)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Series, Multiplier)> {
        self.0.iter().map(|(s, m)| (s, *m))
    }
}

impl FromIterator<(Series, Multiplier)> for SetMultipliers {
    fn from_iter<I: IntoIterator<Item = (Series, Multiplier)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Process-wide pricing rules.
///
/// JSON shape:
///
/// ```json
/// {
///   "globalMultiplier": 1.04,
///   "series": { "innova": { "colorMultiplier": { "white": 1, "default": 1.2 } } },
///   "setMultipliers": { "innova": 1.5 }
/// }
/// ```
///
/// `globalMultiplier` defaults to 1, `series` and `setMultipliers` may be
/// omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    #[serde(default)]
    global_multiplier: Multiplier,
    #[serde(default, rename = "series")]
    series_rules: HashMap<Series, SeriesRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    set_multipliers: Option<SetMultipliers>,
}

impl PricingConfig {
    /// A config that adjusts nothing: global multiplier 1, no series rules.
    pub fn neutral() -> Self {
        Self {
            global_multiplier: Multiplier::NEUTRAL,
            series_rules: HashMap::new(),
            set_multipliers: None,
        }
    }

    pub fn with_global_multiplier(mut self, multiplier: Multiplier) -> Self {
        self.global_multiplier = multiplier;
        self
    }

    pub fn with_series_rule(mut self, series: Series, rule: SeriesRule) -> Self {
        self.series_rules.insert(series, rule);
        self
    }

    pub fn with_set_multipliers(mut self, table: SetMultipliers) -> Self {
        self.set_multipliers = Some(table);
        self
    }

    pub fn global_multiplier(&self) -> Multiplier {
        self.global_multiplier
    }

    pub fn series_rule(&self, series: &Series) -> Option<&SeriesRule> {
        self.series_rules.get(series)
    }

    pub fn series_rules(&self) -> impl Iterator<Item = (&Series, &SeriesRule)> {
        self.series_rules.iter()
    }

    /// The configured set table, if the document supplied one.
    pub fn set_multipliers(&self) -> Option<&SetMultipliers> {
        self.set_multipliers.as_ref()
    }

    /// Parse a configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: PricingConfig = serde_json::from_str(json)?;

        for series in config.series_rules.keys().filter(|s| !s.is_known()) {
            tracing::warn!(%series, "pricing rule targets a series outside the known set");
        }

        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            global_multiplier = %config.global_multiplier,
            series_rules = config.series_rules.len(),
            "pricing config loaded"
        );
        Ok(config)
    }
}

impl Default for PricingConfig {
    /// The shipped storefront rules: no global markup, +20% on non-white
    /// Innova colors, every other series neutral.
    fn default() -> Self {
        let neutral = SeriesRule::new(ColorMultiplier::NEUTRAL);
        Self::neutral()
            .with_series_rule(
                Series::Innova,
                SeriesRule::new(ColorMultiplier {
                    white: Multiplier::NEUTRAL,
                    default: Multiplier::constant(1.2),
                }),
            )
            .with_series_rule(Series::Emalex, neutral)
            .with_series_rule(Series::Urban, neutral)
            .with_series_rule(Series::Linea, neutral)
            .with_series_rule(Series::Invisible, neutral)
            .with_series_rule(Series::Skinel, neutral)
    }
}
