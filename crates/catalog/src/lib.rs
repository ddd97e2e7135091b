//! Catalog domain module.
//!
//! Read-only catalog records (doors, their series, colors and kit items) as
//! supplied by the static catalog data source. Pricing reads these; nothing
//! here mutates them after load.

pub mod catalog;
pub mod color;
pub mod door;
pub mod series;

pub use catalog::{Catalog, CatalogError};
pub use color::{Color, ColorRole};
pub use door::{Door, DoorCover, DoorSetItem, DoorSizes, SetItemCategory, SetItemUnit};
pub use series::Series;
