//! Identity of catalog and basket records.

/// A record addressed by a stable identifier (a product id for every
/// storefront record).
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// First entity in `items` whose id equals `id`.
pub fn find_by_id<'a, E: Entity>(items: &'a [E], id: &E::Id) -> Option<&'a E> {
    items.iter().find(|e| e.id() == id)
}

/// Mutable counterpart of [`find_by_id`].
pub fn find_by_id_mut<'a, E: Entity>(items: &'a mut [E], id: &E::Id) -> Option<&'a mut E> {
    items.iter_mut().find(|e| e.id() == id)
}

/// Id of the first entity that repeats an earlier id, if any.
pub fn first_duplicate<E: Entity>(items: &[E]) -> Option<E::Id> {
    let mut seen = std::collections::HashSet::with_capacity(items.len());
    items.iter().map(Entity::id).find(|id| !seen.insert(*id)).cloned()
}
