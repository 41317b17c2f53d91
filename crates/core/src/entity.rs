//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Stores index entities by this id; two entities with the same id are the same
/// record even when their other fields differ.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
