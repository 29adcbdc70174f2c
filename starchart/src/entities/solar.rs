//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! The `Solar` family: everything that can sit inside a system's `[Object]`/`[Zone]` blocks.
//!
//! `Solar` itself is abstract in the source hierarchy (every concrete kind below carries its
//! fields, nothing constructs a bare `Solar`). `Object` further splits into the handful of
//! concrete kinds a `Registry` actually classifies by archetype; `Zone` sits beside `Object`
//! as its own sibling rather than under it. `PlanetaryBase` is the one place the hierarchy
//! needs real multiple inheritance (it is both a base and a planet); rather than fight the
//! borrow checker for that, it's represented as one struct owning both a [`BaseSolar`] and a
//! [`Planet`] payload and implementing both capability traits, per the composition-over-
//! inheritance note in [`crate::entities`].

use getset::Getters;

use crate::entities::{Entity, EntitySet, ResourceId, Vec3};

/// Implemented by every concrete solar kind: the fields common to `Object` and `Zone` alike.
pub trait IsSolar: Entity {
    /// Nickname of the [`crate::entities::System`] this solar belongs to.
    fn system(&self) -> &str;
    fn position(&self) -> Vec3;
}

/// Implemented by the two kinds that behave like a dockable base: [`BaseSolar`] and
/// [`PlanetaryBase`].
pub trait IsBase: IsSolar {
    /// Nickname of the [`crate::entities::Base`] this solar is the in-system representation of.
    fn base(&self) -> Option<&str>;
    /// Nickname of the [`crate::entities::Faction`] that owns this base, if any.
    fn reputation(&self) -> Option<&str>;
}

/// Implemented by the two kinds with a spin axis: [`Planet`] and [`PlanetaryBase`].
pub trait IsPlanet: IsSolar {
    fn spin(&self) -> Vec3;
}

macro_rules! impl_entity_and_is_solar {
    ($ty:ty) => {
        impl Entity for $ty {
            fn nickname(&self) -> &str {
                &self.nickname
            }
        }

        impl IsSolar for $ty {
            fn system(&self) -> &str {
                &self.system
            }

            fn position(&self) -> Vec3 {
                self.position
            }
        }
    };
}

/// The fallback solar kind: a recognized `[Object]` section whose `archetype` did not match
/// any of the known classes below. Kept rather than discarded so `System::contents` stays
/// complete even against mods that add archetypes this crate doesn't know about yet.
#[derive(Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct Object {
    nickname: String,
    ids_name: Option<ResourceId>,
    ids_info: Option<ResourceId>,
    system: String,
    archetype: String,
    position: Vec3,
}

impl_entity_and_is_solar!(Object);

/// A `[Object]` promoted to a dockable base, i.e. one whose `archetype` matched one of the
/// station/base archetypes.
#[derive(Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct BaseSolar {
    nickname: String,
    ids_name: Option<ResourceId>,
    ids_info: Option<ResourceId>,
    system: String,
    archetype: String,
    position: Vec3,
    base: Option<String>,
    reputation: Option<String>,
}

impl_entity_and_is_solar!(BaseSolar);

impl IsBase for BaseSolar {
    fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    fn reputation(&self) -> Option<&str> {
        self.reputation.as_deref()
    }
}

/// A jump point or jump hole: `goto` names the destination system and object.
#[derive(Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct Jump {
    nickname: String,
    ids_name: Option<ResourceId>,
    ids_info: Option<ResourceId>,
    system: String,
    archetype: String,
    position: Vec3,
    goto_system: String,
    goto_object: String,
}

impl_entity_and_is_solar!(Jump);

/// One ring in a trade lane. `prev_ring`/`next_ring` link the chain; see
/// [`SolarContents::lanes`] for how a whole system's rings are grouped into maximal chains.
#[derive(Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct TradeLaneRing {
    nickname: String,
    ids_name: Option<ResourceId>,
    ids_info: Option<ResourceId>,
    system: String,
    archetype: String,
    position: Vec3,
    prev_ring: Option<String>,
    next_ring: Option<String>,
}

impl_entity_and_is_solar!(TradeLaneRing);

/// A spheroid whose classifying field was `star` rather than `spin`.
#[derive(Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct Star {
    nickname: String,
    ids_name: Option<ResourceId>,
    ids_info: Option<ResourceId>,
    system: String,
    archetype: String,
    position: Vec3,
    /// The star archetype's own identifier field (e.g. the star class/colour key), kept as a
    /// plain string since nothing in this crate interprets it further.
    star: String,
}

impl_entity_and_is_solar!(Star);

/// A spheroid whose classifying field was `spin`, and whose owning base (if any) was not a
/// planet -- i.e. every planet that is *not* promoted to a [`PlanetaryBase`].
#[derive(Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct Planet {
    nickname: String,
    ids_name: Option<ResourceId>,
    ids_info: Option<ResourceId>,
    system: String,
    archetype: String,
    position: Vec3,
    spin: Vec3,
}

impl_entity_and_is_solar!(Planet);

impl IsPlanet for Planet {
    fn spin(&self) -> Vec3 {
        self.spin
    }
}

/// A [`BaseSolar`] whose backing `Object` is a [`Planet`]: the one place this hierarchy needs
/// genuine multiple inheritance. Represented as one record carrying both capabilities rather
/// than two structs glued together, so a single [`EntitySet<PlanetaryBase>`] entry answers
/// both "is this a base" and "is this a planet" queries without indirection.
#[derive(Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct PlanetaryBase {
    nickname: String,
    ids_name: Option<ResourceId>,
    ids_info: Option<ResourceId>,
    system: String,
    archetype: String,
    position: Vec3,
    base: Option<String>,
    reputation: Option<String>,
    spin: Vec3,
}

impl_entity_and_is_solar!(PlanetaryBase);

impl IsBase for PlanetaryBase {
    fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    fn reputation(&self) -> Option<&str> {
        self.reputation.as_deref()
    }
}

impl IsPlanet for PlanetaryBase {
    fn spin(&self) -> Vec3 {
        self.spin
    }
}

/// A `[Zone]` section: a region of space, not itself an `Object`, but still addressed by
/// nickname within its owning system.
#[derive(Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct Zone {
    nickname: String,
    ids_name: Option<ResourceId>,
    ids_info: Option<ResourceId>,
    system: String,
    position: Vec3,
}

impl Entity for Zone {
    fn nickname(&self) -> &str {
        &self.nickname
    }
}

impl IsSolar for Zone {
    fn system(&self) -> &str {
        &self.system
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}

/// One doubly-linked chain of [`TradeLaneRing`]s within a single system, in `prev_ring ->
/// next_ring` order.
pub type Lane = Vec<TradeLaneRing>;

/// Builder fields collected while classifying one `[Object]` or `[Zone]` section, before it
/// is split into its final concrete type. Lives here (rather than in `registry`) because it
/// is the one place that needs to see every concrete solar field at once.
#[derive(Clone, Debug, Default)]
pub struct SolarBuilder {
    pub nickname: String,
    pub ids_name: Option<ResourceId>,
    pub ids_info: Option<ResourceId>,
    pub system: String,
    pub archetype: String,
    pub position: Vec3,
    pub base: Option<String>,
    pub reputation: Option<String>,
    pub goto: Option<(String, String)>,
    pub prev_ring: Option<String>,
    pub next_ring: Option<String>,
    pub star: Option<String>,
    pub spin: Option<Vec3>,
    pub is_tradelane_ring: bool,
}

/// All the solar objects and zones belonging to a single system, split into the typed
/// collections the public API exposes. `planets` holds only planets *not* promoted to
/// [`PlanetaryBase`]; a base whose backing object is a planet appears in `planetary_bases`
/// only, never in both.
#[derive(Clone, Debug, Default)]
pub struct SolarContents {
    order: Vec<String>,
    base_solars: EntitySet<BaseSolar>,
    jumps: EntitySet<Jump>,
    trade_lane_rings: EntitySet<TradeLaneRing>,
    stars: EntitySet<Star>,
    planets: EntitySet<Planet>,
    planetary_bases: EntitySet<PlanetaryBase>,
    objects: EntitySet<Object>,
    zones: EntitySet<Zone>,
}

impl SolarContents {
    pub fn base_solars(&self) -> &EntitySet<BaseSolar> {
        &self.base_solars
    }

    pub fn jumps(&self) -> &EntitySet<Jump> {
        &self.jumps
    }

    pub fn trade_lane_rings(&self) -> &EntitySet<TradeLaneRing> {
        &self.trade_lane_rings
    }

    pub fn stars(&self) -> &EntitySet<Star> {
        &self.stars
    }

    pub fn planets(&self) -> &EntitySet<Planet> {
        &self.planets
    }

    pub fn planetary_bases(&self) -> &EntitySet<PlanetaryBase> {
        &self.planetary_bases
    }

    pub fn objects(&self) -> &EntitySet<Object> {
        &self.objects
    }

    pub fn zones(&self) -> &EntitySet<Zone> {
        &self.zones
    }

    /// Every nickname in this system, across every kind, in file order. Used to check the
    /// invariant that a jump belonging to `S` appears in `S.contents()`.
    pub fn contents(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// The trade-lane chains reconstructed from this system's rings: every ring with a null
    /// `prev_ring` starts a lane, walked forward via `next_ring` until a null or a ring
    /// already visited (a cycle, logged and broken rather than looped forever).
    pub fn lanes(&self) -> Vec<Lane> {
        let mut visited = std::collections::HashSet::new();
        let mut lanes = Vec::new();

        let starts = self.trade_lane_rings.iter().filter(|ring| ring.prev_ring().is_none());
        for start in starts {
            lanes.push(self.walk_lane(start, &mut visited));
        }

        // Any ring never reached from a null-prev start is part of a pure cycle; start one
        // lane per such leftover ring so every ring still belongs to exactly one lane list.
        for ring in self.trade_lane_rings.iter() {
            if !visited.contains(ring.nickname()) {
                lanes.push(self.walk_lane(ring, &mut visited));
            }
        }

        lanes
    }

    fn walk_lane<'a>(&'a self, start: &'a TradeLaneRing, visited: &mut std::collections::HashSet<String>) -> Lane {
        let mut lane = Vec::new();
        let mut current = Some(start);
        while let Some(ring) = current {
            if !visited.insert(ring.nickname().to_owned()) {
                log::warn!("trade lane cycle detected at ring {:?}; breaking the chain", ring.nickname());
                break;
            }
            lane.push(ring.clone());
            current = ring.next_ring().as_deref().and_then(|next| self.trade_lane_rings.get(next));
        }
        lane
    }

    /// Appends one classified solar builder to the appropriate typed collection. Internal to
    /// [`crate::registry`], which drives classification from the raw section stream.
    pub(crate) fn push(&mut self, builder: SolarBuilder, is_zone: bool) {
        self.order.push(builder.nickname.clone());

        if is_zone {
            self.zones.insert(Zone {
                nickname: builder.nickname,
                ids_name: builder.ids_name,
                ids_info: builder.ids_info,
                system: builder.system,
                position: builder.position,
            });
            return;
        }

        let is_planet = builder.spin.is_some();
        let is_base = builder.base.is_some() || builder.reputation.is_some();

        if let Some((goto_system, goto_object)) = builder.goto.clone() {
            self.jumps.insert(Jump {
                nickname: builder.nickname,
                ids_name: builder.ids_name,
                ids_info: builder.ids_info,
                system: builder.system,
                archetype: builder.archetype,
                position: builder.position,
                goto_system,
                goto_object,
            });
        } else if builder.is_tradelane_ring {
            self.trade_lane_rings.insert(TradeLaneRing {
                nickname: builder.nickname,
                ids_name: builder.ids_name,
                ids_info: builder.ids_info,
                system: builder.system,
                archetype: builder.archetype,
                position: builder.position,
                prev_ring: builder.prev_ring,
                next_ring: builder.next_ring,
            });
        } else if is_planet && is_base {
            self.planetary_bases.insert(PlanetaryBase {
                nickname: builder.nickname,
                ids_name: builder.ids_name,
                ids_info: builder.ids_info,
                system: builder.system,
                archetype: builder.archetype,
                position: builder.position,
                base: builder.base,
                reputation: builder.reputation,
                spin: builder.spin.unwrap_or_default(),
            });
        } else if is_planet {
            self.planets.insert(Planet {
                nickname: builder.nickname,
                ids_name: builder.ids_name,
                ids_info: builder.ids_info,
                system: builder.system,
                archetype: builder.archetype,
                position: builder.position,
                spin: builder.spin.unwrap_or_default(),
            });
        } else if let Some(star) = builder.star.clone() {
            self.stars.insert(Star {
                nickname: builder.nickname,
                ids_name: builder.ids_name,
                ids_info: builder.ids_info,
                system: builder.system,
                archetype: builder.archetype,
                position: builder.position,
                star,
            });
        } else if is_base {
            self.base_solars.insert(BaseSolar {
                nickname: builder.nickname,
                ids_name: builder.ids_name,
                ids_info: builder.ids_info,
                system: builder.system,
                archetype: builder.archetype,
                position: builder.position,
                base: builder.base,
                reputation: builder.reputation,
            });
        } else {
            self.objects.insert(Object {
                nickname: builder.nickname,
                ids_name: builder.ids_name,
                ids_info: builder.ids_info,
                system: builder.system,
                archetype: builder.archetype,
                position: builder.position,
            });
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ring(nickname: &str, prev: Option<&str>, next: Option<&str>) -> TradeLaneRing {
        TradeLaneRing {
            nickname: nickname.to_owned(),
            ids_name: None,
            ids_info: None,
            system: "li01".to_owned(),
            archetype: "tradelane_ring".to_owned(),
            position: (0.0, 0.0, 0.0),
            prev_ring: prev.map(str::to_owned),
            next_ring: next.map(str::to_owned),
        }
    }

    #[test]
    fn test_lanes_reconstructs_a_single_chain() {
        let mut contents = SolarContents::default();
        contents.trade_lane_rings.insert(ring("r1", None, Some("r2")));
        contents.trade_lane_rings.insert(ring("r2", Some("r1"), None));

        let lanes = contents.lanes();
        assert_eq!(lanes.len(), 1);
        let nicknames: Vec<_> = lanes[0].iter().map(|r| r.nickname().to_owned()).collect();
        assert_eq!(nicknames, vec!["r1", "r2"]);
    }

    #[test]
    fn test_lanes_breaks_cycles_without_looping_forever() {
        let mut contents = SolarContents::default();
        contents.trade_lane_rings.insert(ring("a", Some("b"), Some("b")));
        contents.trade_lane_rings.insert(ring("b", Some("a"), Some("a")));

        let lanes = contents.lanes();
        let total: usize = lanes.iter().map(Vec::len).sum();
        assert_eq!(total, 2);
    }
}
