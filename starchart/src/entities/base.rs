//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! [`Base`], a station that can be docked and traded at.
//!
//! A `Base` is distinct from its in-system [`crate::entities::BaseSolar`] representation: the
//! `Base` comes from `DATA/universe/universe.ini`'s `[Base]` blocks (name, system, market
//! tables), while the `BaseSolar` comes from the system file's `[Object]` blocks (position,
//! archetype, faction ownership). Most bases have exactly one of each, cross-referenced by
//! nickname; [`crate::registry::Registry::base_solar`] is the join.

use getset::Getters;

use crate::entities::{Entity, HasResourceStrings, ResourceId};

/// A dockable station, as defined in `DATA/universe/universe.ini`.
#[derive(Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct Base {
    nickname: String,
    #[getset(skip)]
    ids_name: Option<ResourceId>,
    #[getset(skip)]
    ids_info: Option<ResourceId>,
    /// Nickname of the owning [`crate::entities::System`]. May dangle in a malformed mod;
    /// resolve through [`crate::registry::Registry::systems`].
    system: String,
}

impl Base {
    pub fn new(nickname: impl Into<String>, system: impl Into<String>, ids_name: Option<ResourceId>, ids_info: Option<ResourceId>) -> Self {
        Self { nickname: nickname.into(), ids_name, ids_info, system: system.into() }
    }
}

impl Entity for Base {
    fn nickname(&self) -> &str {
        &self.nickname
    }
}

impl HasResourceStrings for Base {
    fn ids_name(&self) -> Option<ResourceId> {
        self.ids_name
    }

    fn ids_info(&self) -> Option<ResourceId> {
        self.ids_info
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_base_nickname_and_system() {
        let base = Base::new("li01_01_base", "li01", Some(1), None);
        assert_eq!(base.nickname(), "li01_01_base");
        assert_eq!(base.system(), "li01");
        assert_eq!(base.ids_info(), None);
    }
}
