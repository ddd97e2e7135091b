//! Entity trait: identity that survives attribute changes.

/// Entity marker + minimal interface.
///
/// Catalog records (doors) are entities: two doors with the same id are the
/// same catalog item even if their price or colors differ between loads.
pub trait Entity {
    /// Identifier type.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
