//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! [`Faction`], with its pairwise reputation matrix and dockability rules, as parsed from
//! `DATA/missions/faction_prop.ini`.

use getset::Getters;

use std::collections::HashMap;

use crate::entities::{Entity, HasResourceStrings, ResourceId};

/// An in-game faction/house.
#[derive(Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct Faction {
    nickname: String,
    #[getset(skip)]
    ids_name: Option<ResourceId>,
    #[getset(skip)]
    ids_info: Option<ResourceId>,
    /// Reputation this faction holds towards every other faction it has an opinion about,
    /// keyed by the other faction's nickname. Missing entries mean "no opinion recorded",
    /// not zero.
    reputation: HashMap<String, f64>,
    /// Nicknames of the factions allowed to dock at bases owned by this one. An empty list
    /// does not necessarily mean "nobody may dock"; it means the source file declared no
    /// explicit rule, and callers should fall back to whatever default policy they apply.
    dockable_by: Vec<String>,
}

impl Faction {
    pub fn new(
        nickname: impl Into<String>,
        ids_name: Option<ResourceId>,
        ids_info: Option<ResourceId>,
        reputation: HashMap<String, f64>,
        dockable_by: Vec<String>,
    ) -> Self {
        Self { nickname: nickname.into(), ids_name, ids_info, reputation, dockable_by }
    }

    /// The reputation this faction holds towards `other`, if any was recorded.
    pub fn reputation_towards(&self, other: &str) -> Option<f64> {
        self.reputation.get(other).copied()
    }

    pub fn allows_docking_by(&self, faction_nickname: &str) -> bool {
        self.dockable_by.iter().any(|nickname| nickname == faction_nickname)
    }
}

impl Entity for Faction {
    fn nickname(&self) -> &str {
        &self.nickname
    }
}

impl HasResourceStrings for Faction {
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
    fn test_reputation_towards_missing_is_none() {
        let mut reputation = HashMap::new();
        reputation.insert("li_n_grp".to_owned(), 0.5);
        let faction = Faction::new("fc_n_grp", None, None, reputation, vec!["li_n_grp".to_owned()]);

        assert_eq!(faction.reputation_towards("li_n_grp"), Some(0.5));
        assert_eq!(faction.reputation_towards("fc_lr_grp"), None);
        assert!(faction.allows_docking_by("li_n_grp"));
        assert!(!faction.allows_docking_by("br_n_grp"));
    }
}
