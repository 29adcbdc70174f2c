//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! The typed entity hierarchy and the [`EntitySet`] container that holds it.
//!
//! Nothing in here reads a file; [`crate::registry::Registry`] is the only thing that
//! constructs these types, from the [`crate::section::Section`] stream produced by
//! [`crate::unify`]. What lives here is the *shape* of the data: one struct per concrete
//! entity kind, plus the nickname-indexed, insertion-ordered collection every accessor on
//! [`Registry`](crate::registry::Registry) returns.
//!
//! The game's entity hierarchy has two awkward corners for an ownership-tracked language:
//! multiple inheritance (a planetary base is both a base and a planet) and cyclic
//! back-references (a solar object points back at the system that contains it). Both are
//! resolved the same way, in the spirit of composition over inheritance: every
//! cross-reference is stored as the referenced entity's *nickname*, a plain `String`, and
//! resolved on demand against a [`Registry`](crate::registry::Registry) passed in at the call
//! site. A dangling nickname is never an error here -- it resolves to `None`, exactly as
//! [`CollisionOnNickname`](crate::error::StarchartError) and friends are reported at build time
//! rather than propagated as decode failures.

pub mod base;
pub mod faction;
pub mod good;
pub mod set;
pub mod solar;
pub mod system;

pub use base::Base;
pub use faction::Faction;
pub use good::{Commodity, Equipment, Good, Ship};
pub use set::EntitySet;
pub use solar::{BaseSolar, Jump, Object, Planet, PlanetaryBase, SolarContents, Star, TradeLaneRing, Zone};
pub use system::System;

/// A resource id, as referenced by `ids_name` / `ids_info` fields and resolved against
/// [`crate::formats::respak::ResourceModule`].
pub type ResourceId = u32;

/// A 3-component vector, used for solar object positions (`pos`) and planet spin axes
/// (`spin`). Kept as a plain tuple rather than a dedicated type: nothing in this crate does
/// vector math on it, it is only ever stored and handed back to the caller.
pub type Vec3 = (f32, f32, f32);

/// Implemented by every concrete entity type. The one thing every entity has in common is the
/// nickname that identifies it within its own type's [`EntitySet`].
pub trait Entity {
    fn nickname(&self) -> &str;
}

/// Implemented by entities that carry a localized name and/or infocard resource id.
pub trait HasResourceStrings: Entity {
    fn ids_name(&self) -> Option<ResourceId>;
    fn ids_info(&self) -> Option<ResourceId>;
}

/// Parses a `"a,b"` token as used by `Jump.goto`, returning the two comma-separated parts.
pub(crate) fn split_pair(value: &str) -> Option<(String, String)> {
    let (a, b) = value.split_once(',')?;
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() {
        None
    } else {
        Some((a.to_owned(), b.to_owned()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_split_pair() {
        assert_eq!(split_pair("li01, li01_01_base"), Some(("li01".to_owned(), "li01_01_base".to_owned())));
        assert_eq!(split_pair("li01"), None);
        assert_eq!(split_pair(""), None);
    }
}
