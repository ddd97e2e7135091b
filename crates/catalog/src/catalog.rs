use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use doorline_core::{DomainError, DomainResult, Entity};

use crate::door::Door;

/// Errors raised while loading catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// The static, pre-loaded door catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    doors: Vec<Door>,
}

impl Catalog {
    /// Build a catalog, validating every record and id uniqueness.
    pub fn new(doors: Vec<Door>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        for door in &doors {
            door.validate()?;
            if !seen.insert(door.id().as_str()) {
                return Err(DomainError::invariant(format!(
                    "duplicate door id: {}",
                    door.id
                )));
            }
        }
        Ok(Self { doors })
    }

    /// Parse a JSON array of doors.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let doors: Vec<Door> = serde_json::from_str(json)?;
        let catalog = Self::new(doors)?;

        let unknown = catalog
            .doors
            .iter()
            .filter(|d| !d.series.is_known())
            .count();
        if unknown > 0 {
            tracing::warn!(unknown, "catalog contains doors outside the known series set");
        }

        Ok(catalog)
    }

    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), doors = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn len(&self) -> usize {
        self.doors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doors.is_empty()
    }

    pub fn find(&self, id: &str) -> DomainResult<&Door> {
        self.doors
            .iter()
            .find(|d| d.id() == id)
            .ok_or_else(|| DomainError::not_found(format!("door {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Series;
    use std::io::Write;

    const CATALOG_JSON: &str = r##"[
        { "id": "innova-01", "cover": "strong-flex", "series": "innova", "name": "Innova 01", "price": 10000 },
        { "id": "urban-02", "cover": "emal", "series": "urban", "name": "Urban 02", "price": 15000 }
    ]"##;

    #[test]
    fn parses_array_of_doors() {
        let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("urban-02").unwrap().series, Series::Urban);
    }

    #[test]
    fn missing_door_is_not_found() {
        let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        match catalog.find("linea-09").unwrap_err() {
            DomainError::NotFound(msg) => assert!(msg.contains("linea-09")),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let doors = vec![
            Door::priced("a", Series::Innova, 1),
            Door::priced("a", Series::Urban, 2),
        ];
        match Catalog::new(doors).unwrap_err() {
            DomainError::InvariantViolation(msg) if msg.contains("duplicate") => {}
            other => panic!("Expected duplicate id violation, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG_JSON.as_bytes()).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.doors()[0].id, "innova-01");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Catalog::load("/definitely/not/here.json").unwrap_err();
        match err {
            CatalogError::Io { path, .. } => assert!(path.ends_with("here.json")),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
