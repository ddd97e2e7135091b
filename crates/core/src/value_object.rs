//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. Two colors with the same name and hex
//! are the same color; two series rules with the same multipliers are
//! interchangeable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**.
///
/// - **Value Object**: `Color { name: "White Oak", hex: "#f2efe6" }`
/// - **Entity**: `Door { id: "innova-01", .. }` (see [`crate::Entity`])
///
/// Because they never change after construction, value objects are safe to
/// share across threads without synchronization.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct ColorMultiplier {
///     white: f64,
///     default: f64,
/// }
///
/// impl ValueObject for ColorMultiplier {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
