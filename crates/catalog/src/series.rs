use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Product series (a named product line sharing one pricing rule).
///
/// The known set is closed, but catalog data may carry identifiers outside
/// it; those are preserved as [`Series::Unknown`] instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Series {
    Innova,
    Emalex,
    Invisible,
    Urban,
    Linea,
    Skinel,
    Unknown(String),
}

impl Series {
    /// Every series in the closed set, in catalog order.
    pub const KNOWN: [Series; 6] = [
        Series::Innova,
        Series::Emalex,
        Series::Invisible,
        Series::Urban,
        Series::Linea,
        Series::Skinel,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Series::Innova => "innova",
            Series::Emalex => "emalex",
            Series::Invisible => "invisible",
            Series::Urban => "urban",
            Series::Linea => "linea",
            Series::Skinel => "skinel",
            Series::Unknown(id) => id,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Series::Unknown(_))
    }
}

impl FromStr for Series {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "innova" => Series::Innova,
            "emalex" => Series::Emalex,
            "invisible" => Series::Invisible,
            "urban" => Series::Urban,
            "linea" => Series::Linea,
            "skinel" => Series::Skinel,
            other => Series::Unknown(other.to_string()),
        })
    }
}

impl From<String> for Series {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(series) => series,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for Series {
    fn from(value: &str) -> Self {
        Series::from(value.to_string())
    }
}

impl From<Series> for String {
    fn from(value: Series) -> Self {
        match value {
            Series::Unknown(id) => id,
            known => known.as_str().to_string(),
        }
    }
}

impl core::fmt::Display for Series {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_identifiers() {
        for series in Series::KNOWN {
            assert_eq!(Series::from(series.as_str()), series);
            assert!(series.is_known());
        }
    }

    #[test]
    fn keeps_unknown_identifiers() {
        let series = Series::from("unknown-series");
        assert_eq!(series, Series::Unknown("unknown-series".to_string()));
        assert!(!series.is_known());
        assert_eq!(series.to_string(), "unknown-series");
    }

    #[test]
    fn identifiers_are_case_sensitive() {
        assert!(!Series::from("Innova").is_known());
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Series::Urban).unwrap();
        assert_eq!(json, "\"urban\"");
        let back: Series = serde_json::from_str("\"linea\"").unwrap();
        assert_eq!(back, Series::Linea);
    }
}
