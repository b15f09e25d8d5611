//! Entities: records with a stable identity, looked up by id.

/// A record identified by a typed id that survives edits.
pub trait Entity {
    type Id: Copy + Eq + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// Find an entity by id in an ordered collection.
pub fn find_by_id<'a, E: Entity>(items: &'a [E], id: &E::Id) -> Option<&'a E> {
    items.iter().find(|e| e.id() == id)
}

/// Mutable variant of [`find_by_id`].
pub fn find_by_id_mut<'a, E: Entity>(items: &'a mut [E], id: &E::Id) -> Option<&'a mut E> {
    items.iter_mut().find(|e| e.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SupplierId;

    struct Named {
        id: SupplierId,
        name: &'static str,
    }

    impl Entity for Named {
        type Id = SupplierId;

        fn id(&self) -> &SupplierId {
            &self.id
        }
    }

    #[test]
    fn finds_by_id_and_allows_edits() {
        let a = SupplierId::new();
        let b = SupplierId::new();
        let mut items = vec![Named { id: a, name: "a" }, Named { id: b, name: "b" }];

        assert_eq!(find_by_id(&items, &b).map(|n| n.name), Some("b"));
        assert!(find_by_id(&items, &SupplierId::new()).is_none());

        find_by_id_mut(&mut items, &a).unwrap().name = "renamed";
        assert_eq!(items[0].name, "renamed");
    }
}
