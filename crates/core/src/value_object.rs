//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values
/// (`Money`, a Burger's dietary flag triple). To "modify" one, produce a new
/// value; state transitions over value objects are plain functions
/// `old -> new`.
pub trait ValueObject: Copy + PartialEq + core::fmt::Debug {}
