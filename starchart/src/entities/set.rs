//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! [`EntitySet`], the insertion-ordered, nickname-indexed container every collection on
//! [`crate::registry::Registry`] returns.

use rayon::prelude::*;

use std::collections::HashMap;

use crate::entities::Entity;

/// An insertion-ordered, nickname-indexed collection of entities of a single concrete type.
///
/// Semantically immutable: every operation (`filter`, `union`) returns a new `EntitySet`
/// rather than mutating `self`. Construction from a stream of entities resolves nickname
/// collisions by keeping the last one seen and logging a warning, matching
/// [`CollisionOnNickname`](crate::error::StarchartError::CollisionOnNickname)'s "last write
/// wins" rule.
#[derive(Clone, Debug)]
pub struct EntitySet<T> {
    order: Vec<String>,
    by_nickname: HashMap<String, T>,
}

impl<T> Default for EntitySet<T> {
    fn default() -> Self {
        Self { order: Vec::new(), by_nickname: HashMap::new() }
    }
}

impl<T: Entity> FromIterator<T> for EntitySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = EntitySet::default();
        for entity in iter {
            set.insert(entity);
        }
        set
    }
}

impl<T: Entity> EntitySet<T> {
    /// Inserts `entity`, overwriting (and logging) any earlier entity with the same nickname.
    pub fn insert(&mut self, entity: T) {
        let nickname = entity.nickname().to_owned();
        if self.by_nickname.contains_key(&nickname) {
            log::warn!("nickname {nickname:?} is used by more than one entity of this type; the earlier definition is discarded");
        } else {
            self.order.push(nickname.clone());
        }
        self.by_nickname.insert(nickname, entity);
    }
}

impl<T> EntitySet<T> {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Looks up an entity by nickname. Case-sensitive: nicknames are lowercased on ingestion
    /// by every builder in [`crate::registry`], so callers should do the same when the
    /// nickname comes from user input rather than another entity's field.
    pub fn get(&self, nickname: &str) -> Option<&T> {
        self.by_nickname.get(nickname)
    }

    /// Iterates in insertion (i.e. file) order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().map(move |nickname| &self.by_nickname[nickname])
    }
}

impl<T: Entity + Clone + Send + Sync> EntitySet<T> {
    /// Returns a new set containing only the entities matching `predicate`, preserving order.
    ///
    /// Filtering runs over [`rayon`]'s global pool: install trees with thousands of solar
    /// objects make this worth parallelizing, and `rayon`'s `filter` preserves the source
    /// order of the items it keeps, so the result needs no re-sort.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Sync,
    {
        let kept: Vec<T> = self
            .order
            .par_iter()
            .map(|nickname| &self.by_nickname[nickname])
            .filter(|entity| predicate(entity))
            .cloned()
            .collect();
        kept.into_iter().collect()
    }

    /// Returns a new set with `other`'s entries layered on top of `self`'s: nicknames present
    /// in both keep `other`'s value, and `other`'s order is preserved for entries not already
    /// in `self`. `union(empty)` is the identity and `union` is associative, since both
    /// properties fall straight out of "later values win, insertion order otherwise
    /// preserved" applied twice.
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for nickname in &other.order {
            let entity = other.by_nickname[nickname].clone();
            if !result.by_nickname.contains_key(nickname) {
                result.order.push(nickname.clone());
            }
            result.by_nickname.insert(nickname.clone(), entity);
        }
        result
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Dummy {
        nickname: String,
        value: i64,
    }

    impl Entity for Dummy {
        fn nickname(&self) -> &str {
            &self.nickname
        }
    }

    fn dummy(nickname: &str, value: i64) -> Dummy {
        Dummy { nickname: nickname.to_owned(), value }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let set: EntitySet<Dummy> = vec![dummy("c", 1), dummy("a", 2), dummy("b", 3)].into_iter().collect();
        let nicknames: Vec<_> = set.iter().map(Entity::nickname).collect();
        assert_eq!(nicknames, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_collision_keeps_last_write() {
        let set: EntitySet<Dummy> = vec![dummy("a", 1), dummy("a", 2)].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("a").unwrap().value, 2);
    }

    #[test]
    fn test_filter_preserves_order() {
        let set: EntitySet<Dummy> = vec![dummy("a", 1), dummy("b", 2), dummy("c", 3)].into_iter().collect();
        let evens = set.filter(|d| d.value % 2 == 0);
        let nicknames: Vec<_> = evens.iter().map(Entity::nickname).collect();
        assert_eq!(nicknames, vec!["b"]);
    }

    #[test]
    fn test_union_right_hand_overrides_and_is_identity_with_empty() {
        let left: EntitySet<Dummy> = vec![dummy("a", 1), dummy("b", 2)].into_iter().collect();
        let right: EntitySet<Dummy> = vec![dummy("b", 20), dummy("c", 3)].into_iter().collect();

        let merged = left.union(&right);
        let nicknames: Vec<_> = merged.iter().map(Entity::nickname).collect();
        assert_eq!(nicknames, vec!["a", "b", "c"]);
        assert_eq!(merged.get("b").unwrap().value, 20);

        let empty = EntitySet::default();
        let identity = left.union(&empty);
        assert_eq!(identity.iter().map(Entity::nickname).collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_union_is_associative() {
        let a: EntitySet<Dummy> = vec![dummy("x", 1)].into_iter().collect();
        let b: EntitySet<Dummy> = vec![dummy("x", 2), dummy("y", 1)].into_iter().collect();
        let c: EntitySet<Dummy> = vec![dummy("y", 2), dummy("z", 1)].into_iter().collect();

        let left_assoc = a.union(&b).union(&c);
        let right_assoc = a.union(&b.union(&c));

        let to_pairs = |set: &EntitySet<Dummy>| set.iter().map(|d| (d.nickname.clone(), d.value)).collect::<Vec<_>>();
        assert_eq!(to_pairs(&left_assoc), to_pairs(&right_assoc));
    }
}
