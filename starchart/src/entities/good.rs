//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! `Good`, the abstract parent of [`Ship`], [`Commodity`] and [`Equipment`].
//!
//! The source hierarchy marks `Good` abstract (nothing is *just* a good); here that is
//! expressed the way the design note in [`crate::entities`] recommends for the rest of the
//! tree too: one [`GoodCore`] struct holding the shared fields, embedded by value in each
//! concrete kind and reached through [`Deref`](std::ops::Deref) so `ship.price()` reads the
//! same as `commodity.price()`. [`Good`] itself is the enum [`crate::registry::Registry::goods`]
//! returns, unifying the three concrete kinds into the one `EntitySet` the abstract
//! collection promises.

use getset::Getters;

use std::ops::Deref;

use crate::entities::{Entity, HasResourceStrings, ResourceId};

/// Fields shared by every concrete good.
#[derive(Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct GoodCore {
    nickname: String,
    #[getset(skip)]
    ids_name: Option<ResourceId>,
    #[getset(skip)]
    ids_info: Option<ResourceId>,
    price: i64,
    /// Whether multiple units of this good combine into a single cargo-hold slot.
    combinable: bool,
    volume: f64,
}

impl Entity for GoodCore {
    fn nickname(&self) -> &str {
        &self.nickname
    }
}

impl HasResourceStrings for GoodCore {
    fn ids_name(&self) -> Option<ResourceId> {
        self.ids_name
    }

    fn ids_info(&self) -> Option<ResourceId> {
        self.ids_info
    }
}

/// A flyable ship hull.
#[derive(Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct Ship {
    core: GoodCore,
    hold_size: i64,
    nanobot_limit: i64,
    shield_battery_limit: i64,
    hit_points: f64,
}

impl Deref for Ship {
    type Target = GoodCore;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

impl Entity for Ship {
    fn nickname(&self) -> &str {
        self.core.nickname()
    }
}

/// A tradable, non-equippable commodity (ore, food, weapons cargo, ...).
#[derive(Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct Commodity {
    core: GoodCore,
}

impl Deref for Commodity {
    type Target = GoodCore;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

impl Entity for Commodity {
    fn nickname(&self) -> &str {
        self.core.nickname()
    }
}

/// An equippable good: guns, shields, engines, and the rest of `DATA/equipment/*.ini`.
#[derive(Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct Equipment {
    core: GoodCore,
    /// The `[Equipment]` archetype's class field (`gun`, `shield_generator`, `engine`, ...),
    /// kept as data rather than a closed enum since mods routinely add new classes.
    equipment_class: String,
}

impl Deref for Equipment {
    type Target = GoodCore;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

impl Entity for Equipment {
    fn nickname(&self) -> &str {
        self.core.nickname()
    }
}

impl Ship {
    pub fn new(core: GoodCore, hold_size: i64, nanobot_limit: i64, shield_battery_limit: i64, hit_points: f64) -> Self {
        Self { core, hold_size, nanobot_limit, shield_battery_limit, hit_points }
    }
}

impl Commodity {
    pub fn new(core: GoodCore) -> Self {
        Self { core }
    }
}

impl Equipment {
    pub fn new(core: GoodCore, equipment_class: impl Into<String>) -> Self {
        Self { core, equipment_class: equipment_class.into() }
    }
}

impl GoodCore {
    pub fn new(nickname: impl Into<String>, ids_name: Option<ResourceId>, ids_info: Option<ResourceId>, price: i64, combinable: bool, volume: f64) -> Self {
        Self { nickname: nickname.into(), ids_name, ids_info, price, combinable, volume }
    }
}

/// The `Good†` abstract collection: any of [`Ship`], [`Commodity`] or [`Equipment`], unified
/// so [`crate::registry::Registry::goods`] can return one homogeneous `EntitySet` the way the
/// source hierarchy's `Good† → Ship, Commodity, Equipment` promises.
#[derive(Clone, Debug)]
pub enum Good {
    Ship(Ship),
    Commodity(Commodity),
    Equipment(Equipment),
}

impl Deref for Good {
    type Target = GoodCore;

    fn deref(&self) -> &Self::Target {
        match self {
            Good::Ship(ship) => &ship.core,
            Good::Commodity(commodity) => &commodity.core,
            Good::Equipment(equipment) => &equipment.core,
        }
    }
}

impl Entity for Good {
    fn nickname(&self) -> &str {
        self.deref().nickname()
    }
}

impl Good {
    pub fn as_ship(&self) -> Option<&Ship> {
        match self {
            Good::Ship(ship) => Some(ship),
            _ => None,
        }
    }

    pub fn as_commodity(&self) -> Option<&Commodity> {
        match self {
            Good::Commodity(commodity) => Some(commodity),
            _ => None,
        }
    }

    pub fn as_equipment(&self) -> Option<&Equipment> {
        match self {
            Good::Equipment(equipment) => Some(equipment),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_good_enum_derefs_to_shared_core() {
        let core = GoodCore::new("li01_food", Some(1), None, 12, true, 1.0);
        let good = Good::Commodity(Commodity::new(core));
        assert_eq!(good.nickname(), "li01_food");
        assert_eq!(good.price(), &12i64);
        assert!(good.as_commodity().is_some());
        assert!(good.as_ship().is_none());
    }
}
