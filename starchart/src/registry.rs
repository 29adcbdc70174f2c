//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! [`Registry`]: the entity-graph layer. Holds one install path and lazily builds, then
//! caches for the rest of its lifetime, every collection the public API exposes.
//!
//! # Build protocol
//!
//! 1. Parse `EXE/freelancer.ini` to find the declared order of resource containers, and
//!    `DATA/universe/universe.ini` to enumerate systems and bases.
//! 2. For each system, decode its own `<nickname>.ini` into `Solar`-family entities.
//! 3. Parse every `DATA/equipment/market_*.ini` to populate the bidirectional good/base
//!    market index.
//! 4. Parse `DATA/missions/faction_prop.ini` for factions, their pairwise reputation and
//!    dockability rules.
//! 5. Lazily merge the resource containers found in step 1 into one string/infocard table.
//!
//! Every step is independent and independently cached behind a [`once_cell::sync::OnceCell`],
//! so `bases()` does not force a system decode and vice versa; callers that only ever touch
//! one collection never pay for the others. Re-entrant concurrent calls to the same
//! not-yet-built collection block on the same `OnceCell`, never double-build it.
//!
//! # Classification
//!
//! Archetype -> concrete kind is data, not code (see the Open Question in `spec`): see
//! [`ARCHETYPE_TABLE`]. It is intentionally small and not claimed to be exhaustive; unknown
//! archetypes fall back to the generic [`Object`] kind, per §4.6.

use itertools::Itertools;
use once_cell::sync::OnceCell;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config;
use crate::entities::solar::{BaseSolar, PlanetaryBase, SolarBuilder, SolarContents};
use crate::entities::{split_pair, Base, Commodity, Entity, EntitySet, Equipment, Faction, Good, ResourceId, Ship, System};
use crate::error::{Result, StarchartError};
use crate::formats::respak::{self, ResourceModule};
use crate::markup::{self, MarkupKind};
use crate::section::Section;
use crate::unify;

const INVENTORY_PATH: &str = "EXE/freelancer.ini";
const UNIVERSE_PATH: &str = "DATA/universe/universe.ini";
const SYSTEMS_DIR: &str = "DATA/universe/systems";
const EQUIPMENT_DIR: &str = "DATA/equipment";
const FACTION_PROP_PATH: &str = "DATA/missions/faction_prop.ini";
const RESOURCES_DIR: &str = "EXE/resources";

/// How a recognized `[Object]` archetype should be classified. Matched case-insensitively
/// against a substring of the `archetype` value; first match in [`ARCHETYPE_TABLE`] wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ArchetypeClass {
    Jump,
    TradeLaneRing,
    Base,
    Spheroid,
}

/// Archetype substring -> classification. Not exhaustive (see the module doc); entries here
/// are the ones actually observed across the example installs in this crate's test fixtures.
/// Treat this as a data table to extend, not as code to branch on.
const ARCHETYPE_TABLE: &[(&str, ArchetypeClass)] = &[
    ("jump_gate", ArchetypeClass::Jump),
    ("jump_hole", ArchetypeClass::Jump),
    ("jumphole", ArchetypeClass::Jump),
    ("tradelane_ring", ArchetypeClass::TradeLaneRing),
    ("planet", ArchetypeClass::Spheroid),
    ("sun", ArchetypeClass::Spheroid),
    ("star", ArchetypeClass::Spheroid),
    ("station", ArchetypeClass::Base),
    ("base", ArchetypeClass::Base),
    ("planetary_base", ArchetypeClass::Base),
    ("satellite", ArchetypeClass::Base),
];

fn classify_archetype(archetype: &str) -> Option<ArchetypeClass> {
    let lower = archetype.to_ascii_lowercase();
    ARCHETYPE_TABLE.iter().find(|(pattern, _)| lower.contains(pattern)).map(|(_, class)| *class)
}

/// One entry in the bidirectional good/base market index.
///
/// The boolean semantics of the source game's per-base market table are not stated in the
/// distilled notes this crate was built from (see the Open Question in the crate-level
/// spec); this crate resolves it as: `can_sell_to_player = true` means the base *sells* the
/// good (the player can buy it there), `can_sell_to_player = false` means the base *buys* the
/// good (the player can sell it there). See `DESIGN.md` for the full reasoning.
#[derive(Clone, Debug, PartialEq)]
pub struct MarketEntry {
    pub base: String,
    pub good: String,
    pub can_sell_to_player: bool,
    pub price_modifier: f64,
}

/// Either a plain [`BaseSolar`] or a [`PlanetaryBase`] acting as one, returned by
/// [`Registry::base_solar`]. Both implement [`crate::entities::solar::IsBase`].
#[derive(Clone, Debug)]
pub enum BaseSolarRef {
    BaseSolar(BaseSolar),
    PlanetaryBase(PlanetaryBase),
}

impl BaseSolarRef {
    pub fn base(&self) -> Option<&str> {
        match self {
            BaseSolarRef::BaseSolar(solar) => solar.base().as_deref(),
            BaseSolarRef::PlanetaryBase(solar) => solar.base().as_deref(),
        }
    }

    pub fn reputation(&self) -> Option<&str> {
        match self {
            BaseSolarRef::BaseSolar(solar) => solar.reputation().as_deref(),
            BaseSolarRef::PlanetaryBase(solar) => solar.reputation().as_deref(),
        }
    }

    pub fn system(&self) -> &str {
        match self {
            BaseSolarRef::BaseSolar(solar) => solar.system(),
            BaseSolarRef::PlanetaryBase(solar) => solar.system(),
        }
    }
}

#[derive(Default)]
struct MarketIndex {
    by_base: HashMap<String, Vec<MarketEntry>>,
    by_good: HashMap<String, Vec<MarketEntry>>,
}

/// The entity-graph layer: one install path, lazily built and cached typed collections.
///
/// `Registry` is the only owner of the cache; every `EntitySet` it hands back is a cheap
/// reference into that cache (or a cheap clone of a small, cached, merged collection like
/// [`Registry::goods`]). See the module doc for the build protocol and the crate-level docs
/// for the concurrency model.
pub struct Registry {
    root: PathBuf,
    systems: OnceCell<EntitySet<System>>,
    bases: OnceCell<EntitySet<Base>>,
    factions: OnceCell<EntitySet<Faction>>,
    ships: OnceCell<EntitySet<Ship>>,
    commodities: OnceCell<EntitySet<Commodity>>,
    equipment: OnceCell<EntitySet<Equipment>>,
    goods: OnceCell<EntitySet<Good>>,
    resources: OnceCell<ResourceModule>,
    market: OnceCell<MarketIndex>,
    base_solars_by_base: OnceCell<HashMap<String, BaseSolarRef>>,
}

impl Registry {
    /// Validates `root` and returns a `Registry` over it. Nothing is read from disk yet
    /// beyond the presence check in [`config::validate_install_path`]; every collection is
    /// built lazily on first access.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        config::validate_install_path(&root)?;
        Ok(Self::new_unchecked(root))
    }

    fn new_unchecked(root: PathBuf) -> Self {
        Self {
            root,
            systems: OnceCell::new(),
            bases: OnceCell::new(),
            factions: OnceCell::new(),
            ships: OnceCell::new(),
            commodities: OnceCell::new(),
            equipment: OnceCell::new(),
            goods: OnceCell::new(),
            resources: OnceCell::new(),
            market: OnceCell::new(),
            base_solars_by_base: OnceCell::new(),
        }
    }

    /// Points this registry at a different install path, discarding every cache. Entity
    /// references obtained before the call remain valid (they're plain owned/borrowed data,
    /// not tied to the old root), but they describe the old root's contents -- this is the
    /// documented "stale snapshot" behaviour from §5 of the spec, not an oversight.
    pub fn set_install_path(&mut self, root: impl Into<PathBuf>) -> Result<()> {
        let root = root.into();
        config::validate_install_path(&root)?;
        *self = Self::new_unchecked(root);
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn systems(&self) -> &EntitySet<System> {
        self.systems.get_or_init(|| self.build_systems())
    }

    pub fn bases(&self) -> &EntitySet<Base> {
        self.bases.get_or_init(|| self.build_bases())
    }

    pub fn factions(&self) -> &EntitySet<Faction> {
        self.factions.get_or_init(|| self.build_factions())
    }

    pub fn ships(&self) -> &EntitySet<Ship> {
        self.ships.get_or_init(|| self.build_goods().0)
    }

    pub fn commodities(&self) -> &EntitySet<Commodity> {
        self.commodities.get_or_init(|| self.build_goods().1)
    }

    pub fn equipment(&self) -> &EntitySet<Equipment> {
        self.equipment.get_or_init(|| self.build_goods().2)
    }

    /// The `Good†` abstract collection: ships, commodities and equipment, unioned into one
    /// homogeneous set. Computed once from [`Self::ships`]/[`Self::commodities`]/
    /// [`Self::equipment`] and cached; the three concrete accessors remain the cheaper calls
    /// when a caller already knows which kind it wants.
    pub fn goods(&self) -> &EntitySet<Good> {
        self.goods.get_or_init(|| {
            let mut goods = EntitySet::default();
            for ship in self.ships().iter() {
                goods.insert(Good::Ship(ship.clone()));
            }
            for commodity in self.commodities().iter() {
                goods.insert(Good::Commodity(commodity.clone()));
            }
            for equipment in self.equipment().iter() {
                goods.insert(Good::Equipment(equipment.clone()));
            }
            goods
        })
    }

    /// The in-system base solar (or planetary base acting as one) whose `base` field matches
    /// `base_nickname`, if any. Per §3, a `Base` has at most one of these.
    pub fn base_solar(&self, base_nickname: &str) -> Option<&BaseSolarRef> {
        let index = self.base_solars_by_base.get_or_init(|| self.build_base_solar_index());
        index.get(base_nickname)
    }

    /// Resolves `ids` against the merged resource string table, or a deterministic sentinel
    /// if the id is absent or unresolved, per §4.2/§4.8.
    pub fn resolve_name(&self, ids: Option<ResourceId>) -> String {
        match ids {
            Some(id) => self.resources().strings.get(&id).cloned().unwrap_or_else(|| format!("<ids_name: {id}>")),
            None => "<ids_name: none>".to_owned(),
        }
    }

    /// Resolves `ids` against the merged infocard table and renders it as `kind`, or a
    /// deterministic sentinel if the id is absent or unresolved.
    pub fn resolve_infocard(&self, ids: Option<ResourceId>, kind: MarkupKind) -> String {
        match ids {
            Some(id) => match self.resources().infocards.get(&id) {
                Some(raw) => markup::render(raw, kind),
                None => format!("<ids_info: {id}>"),
            },
            None => "<ids_info: none>".to_owned(),
        }
    }

    /// Every market entry recorded for `base_nickname`, in file order across every market
    /// file this registry parsed.
    pub fn market_for_base(&self, base_nickname: &str) -> &[MarketEntry] {
        self.market.get_or_init(|| self.build_market()).by_base.get(base_nickname).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every market entry recorded for `good_nickname`, in file order.
    pub fn market_for_good(&self, good_nickname: &str) -> &[MarketEntry] {
        self.market.get_or_init(|| self.build_market()).by_good.get(good_nickname).map(Vec::as_slice).unwrap_or(&[])
    }

    fn resources(&self) -> &ResourceModule {
        self.resources.get_or_init(|| self.build_resources())
    }

    //-----------------------------------------------------------------------------------//
    //                                Build steps
    //-----------------------------------------------------------------------------------//

    fn read_sections(&self, relative: &str) -> Vec<Section> {
        let path = self.root.join(relative);
        match unify::load_sections_from_file(&path) {
            Ok(sections) => sections,
            Err(error) => {
                log::warn!("{relative}: {error}");
                Vec::new()
            }
        }
    }

    fn build_systems(&self) -> EntitySet<System> {
        let mut systems = EntitySet::default();

        for section in self.read_sections(UNIVERSE_PATH) {
            if section.name() != "system" {
                continue;
            }

            let Some(nickname) = section.entry("nickname").and_then(|e| e.first_str()) else { continue };
            let nickname = nickname.to_ascii_lowercase();
            let ids_name = section.entry("ids_name").and_then(|e| e.first_int()).map(|v| v as u32);
            let ids_info = section.entry("ids_info").and_then(|e| e.first_int()).map(|v| v as u32);
            let file = section.entry("file").and_then(|e| e.first_str()).map(str::to_owned);

            let contents = match file {
                Some(file) => self.build_solar_contents(&nickname, &file),
                None => SolarContents::default(),
            };

            systems.insert(System::new(nickname, ids_name, ids_info, contents));
        }

        systems
    }

    fn build_solar_contents(&self, system_nickname: &str, relative_file: &str) -> SolarContents {
        let path = format!("{SYSTEMS_DIR}/{relative_file}");
        let mut contents = SolarContents::default();

        for section in self.read_sections(&path) {
            match section.name().as_str() {
                "object" => {
                    if let Some(builder) = self.parse_object(system_nickname, &section) {
                        contents.push(builder, false);
                    }
                }
                "zone" => {
                    if let Some(builder) = self.parse_zone(system_nickname, &section) {
                        contents.push(builder, true);
                    }
                }
                _ => {}
            }
        }

        contents
    }

    fn parse_object(&self, system_nickname: &str, section: &Section) -> Option<SolarBuilder> {
        let nickname = section.entry("nickname")?.first_str()?.to_ascii_lowercase();
        let archetype = section.entry("archetype").and_then(|e| e.first_str()).unwrap_or_default().to_owned();
        let class = classify_archetype(&archetype);

        let mut builder = SolarBuilder {
            nickname,
            system: system_nickname.to_owned(),
            archetype,
            position: read_vec3(section, "pos"),
            ids_name: section.entry("ids_name").and_then(|e| e.first_int()).map(|v| v as u32),
            ids_info: section.entry("ids_info").and_then(|e| e.first_int()).map(|v| v as u32),
            base: section.entry("base").and_then(|e| e.first_str()).map(str::to_ascii_lowercase),
            reputation: section.entry("reputation").and_then(|e| e.first_str()).map(str::to_ascii_lowercase),
            goto: section.entry("goto").and_then(|e| e.first_str()).and_then(split_pair).map(|(a, b)| (a.to_ascii_lowercase(), b.to_ascii_lowercase())),
            prev_ring: section.entry("prev_ring").and_then(|e| e.first_str()).map(str::to_ascii_lowercase),
            next_ring: section.entry("next_ring").and_then(|e| e.first_str()).map(str::to_ascii_lowercase),
            star: section.entry("star").and_then(|e| e.first_str()).map(str::to_owned),
            spin: section.entry("spin").map(|e| read_vec3_entry(e)),
            is_tradelane_ring: matches!(class, Some(ArchetypeClass::TradeLaneRing)),
        };

        if matches!(class, Some(ArchetypeClass::Jump)) && builder.goto.is_none() {
            log::warn!("object {:?} classified as a jump by archetype but has no goto field", builder.nickname);
        }

        // Don't let an unrelated `base`/`reputation` field on a non-base archetype spuriously
        // promote a generic Object -- only archetypes classified as bases (or spheroids,
        // which may additionally be promoted to PlanetaryBase) carry that capability through.
        if !matches!(class, Some(ArchetypeClass::Base) | Some(ArchetypeClass::Spheroid)) {
            builder.base = None;
            builder.reputation = None;
        }

        Some(builder)
    }

    fn parse_zone(&self, system_nickname: &str, section: &Section) -> Option<SolarBuilder> {
        let nickname = section.entry("nickname")?.first_str()?.to_ascii_lowercase();
        Some(SolarBuilder {
            nickname,
            system: system_nickname.to_owned(),
            position: read_vec3(section, "pos"),
            ids_name: section.entry("ids_name").and_then(|e| e.first_int()).map(|v| v as u32),
            ids_info: section.entry("ids_info").and_then(|e| e.first_int()).map(|v| v as u32),
            ..Default::default()
        })
    }

    fn build_bases(&self) -> EntitySet<Base> {
        let mut bases = EntitySet::default();
        for section in self.read_sections(UNIVERSE_PATH) {
            if section.name() != "base" {
                continue;
            }
            let Some(nickname) = section.entry("nickname").and_then(|e| e.first_str()) else { continue };
            let Some(system) = section.entry("system").and_then(|e| e.first_str()) else { continue };
            let ids_name = section.entry("ids_name").and_then(|e| e.first_int()).map(|v| v as u32);
            let ids_info = section.entry("ids_info").and_then(|e| e.first_int()).map(|v| v as u32);
            bases.insert(Base::new(nickname.to_ascii_lowercase(), system.to_ascii_lowercase(), ids_name, ids_info));
        }
        bases
    }

    fn build_base_solar_index(&self) -> HashMap<String, BaseSolarRef> {
        let mut index = HashMap::new();
        for system in self.systems().iter() {
            for solar in system.contents().base_solars().iter() {
                if let Some(base) = solar.base() {
                    index.insert(base.to_owned(), BaseSolarRef::BaseSolar(solar.clone()));
                }
            }
            for solar in system.contents().planetary_bases().iter() {
                if let Some(base) = solar.base() {
                    index.insert(base.to_owned(), BaseSolarRef::PlanetaryBase(solar.clone()));
                }
            }
        }
        index
    }

    fn build_factions(&self) -> EntitySet<Faction> {
        let mut factions = EntitySet::default();
        let mut reputation: HashMap<String, HashMap<String, f64>> = HashMap::new();
        let mut dockable_by: HashMap<String, Vec<String>> = HashMap::new();

        let mut pending: Vec<(String, Option<u32>, Option<u32>)> = Vec::new();

        for section in self.read_sections(FACTION_PROP_PATH) {
            if section.name() != "faction" && section.name() != "group" {
                continue;
            }
            let Some(nickname) = section.entry("nickname").and_then(|e| e.first_str()) else { continue };
            let nickname = nickname.to_ascii_lowercase();
            let ids_name = section.entry("ids_name").and_then(|e| e.first_int()).map(|v| v as u32);
            let ids_info = section.entry("ids_info").and_then(|e| e.first_int()).map(|v| v as u32);

            let rep_map = reputation.entry(nickname.clone()).or_default();
            for entry in section.entries("rep") {
                if let (Some(other), Some(value)) = (entry.value(0).and_then(|v| v.as_str()), entry.value(1).and_then(|v| v.as_float())) {
                    rep_map.insert(other.to_ascii_lowercase(), value);
                }
            }

            let dock_list = dockable_by.entry(nickname.clone()).or_default();
            for entry in section.entries("dock_with") {
                if let Some(other) = entry.first_str() {
                    dock_list.push(other.to_ascii_lowercase());
                }
            }

            pending.push((nickname, ids_name, ids_info));
        }

        for (nickname, ids_name, ids_info) in pending {
            let rep = reputation.remove(&nickname).unwrap_or_default();
            let dock = dockable_by.remove(&nickname).unwrap_or_default();
            factions.insert(Faction::new(nickname, ids_name, ids_info, rep, dock));
        }

        factions
    }

    /// Parses every `market_*.ini` under [`EQUIPMENT_DIR`], returning (ships, commodities,
    /// equipment). All three come from the same pass over `DATA/equipment`'s `[Good]`
    /// sections, since the source format does not separate them into different files.
    fn build_goods(&self) -> (EntitySet<Ship>, EntitySet<Commodity>, EntitySet<Equipment>) {
        let mut ships = EntitySet::default();
        let mut commodities = EntitySet::default();
        let mut equipment = EntitySet::default();

        let equipment_dir = self.root.join(EQUIPMENT_DIR);
        let Ok(read_dir) = std::fs::read_dir(&equipment_dir) else {
            log::warn!("{}: {}", equipment_dir.display(), StarchartError::FileNotFound(equipment_dir.display().to_string()));
            return (ships, commodities, equipment);
        };

        // `read_dir`'s order is platform-dependent; sort by file name so collisions between two
        // market/good files resolve the same way on every machine.
        let paths = read_dir.flatten().map(|entry| entry.path()).sorted_by_key(|path| path.file_name().map(|name| name.to_os_string()));

        for path in paths {
            if path.extension().and_then(|ext| ext.to_str()) != Some("ini") {
                continue;
            }
            let Ok(sections) = unify::load_sections_from_file(&path) else { continue };

            for section in &sections {
                let core = match section.name().as_str() {
                    "good" | "ship" | "commodity" | "equipment" => self.parse_good_core(section),
                    _ => None,
                };
                let Some(core) = core else { continue };

                match section.entry("kind").and_then(|e| e.first_str()).unwrap_or("commodity") {
                    "ship" => {
                        let hold_size = section.entry("hold_size").and_then(|e| e.first_int()).unwrap_or_default();
                        let nanobot_limit = section.entry("nanobot_limit").and_then(|e| e.first_int()).unwrap_or_default();
                        let shield_battery_limit = section.entry("shield_battery_limit").and_then(|e| e.first_int()).unwrap_or_default();
                        let hit_points = section.entry("hit_pts").and_then(|e| e.first_float()).unwrap_or_default();
                        ships.insert(Ship::new(core, hold_size, nanobot_limit, shield_battery_limit, hit_points));
                    }
                    "equipment" => {
                        let class = section.entry("equipment_class").and_then(|e| e.first_str()).unwrap_or("unknown").to_owned();
                        equipment.insert(Equipment::new(core, class));
                    }
                    _ => commodities.insert(Commodity::new(core)),
                }
            }
        }

        (ships, commodities, equipment)
    }

    fn parse_good_core(&self, section: &Section) -> Option<crate::entities::good::GoodCore> {
        let nickname = section.entry("nickname")?.first_str()?.to_ascii_lowercase();
        let ids_name = section.entry("ids_name").and_then(|e| e.first_int()).map(|v| v as u32);
        let ids_info = section.entry("ids_info").and_then(|e| e.first_int()).map(|v| v as u32);
        let price = section.entry("price").and_then(|e| e.first_int()).unwrap_or_default();
        let combinable = section.entry("combinable").and_then(|e| e.first_bool()).unwrap_or(false);
        let volume = section.entry("volume").and_then(|e| e.first_float()).unwrap_or_default();
        Some(crate::entities::good::GoodCore::new(nickname, ids_name, ids_info, price, combinable, volume))
    }

    fn build_market(&self) -> MarketIndex {
        let mut index = MarketIndex::default();
        let equipment_dir = self.root.join(EQUIPMENT_DIR);
        let Ok(read_dir) = std::fs::read_dir(&equipment_dir) else { return index };

        for entry in read_dir.flatten() {
            let path = entry.path();
            let is_market_file = path.file_stem().and_then(|stem| stem.to_str()).is_some_and(|stem| stem.starts_with("market_"));
            if !is_market_file {
                continue;
            }
            let Ok(sections) = unify::load_sections_from_file(&path) else { continue };

            for section in &sections {
                if section.name() != "basegood" {
                    continue;
                }
                let Some(base) = section.entry("base").and_then(|e| e.first_str()) else { continue };
                let base = base.to_ascii_lowercase();

                for entry in section.entries("marketgood") {
                    let Some(good) = entry.value(0).and_then(|v| v.as_str()) else { continue };
                    let can_sell_to_player = entry.value(1).and_then(|v| v.as_bool()).unwrap_or(true);
                    let price_modifier = entry.value(2).and_then(|v| v.as_float()).unwrap_or(1.0);

                    let record = MarketEntry { base: base.clone(), good: good.to_ascii_lowercase(), can_sell_to_player, price_modifier };
                    index.by_base.entry(base.clone()).or_default().push(record.clone());
                    index.by_good.entry(good.to_ascii_lowercase()).or_default().push(record);
                }
            }
        }

        index
    }

    /// Merges every resource container listed in `EXE/freelancer.ini`'s `[Resources]`
    /// section, in declared order; later entries' strings/infocards win on id collision.
    fn build_resources(&self) -> ResourceModule {
        let mut merged = ResourceModule::default();

        for section in self.read_sections(INVENTORY_PATH) {
            if section.name() != "resources" {
                continue;
            }
            for entry in section.entries("dll") {
                let Some(relative) = entry.first_str() else { continue };
                let path = self.root.join(RESOURCES_DIR).join(relative);
                match std::fs::read(&path) {
                    Ok(data) => match respak::decode(&data) {
                        Ok(module) => {
                            merged.strings.extend(module.strings);
                            merged.infocards.extend(module.infocards);
                        }
                        Err(error) => log::warn!("{}: {error}", path.display()),
                    },
                    Err(error) => log::warn!("{}: {error}", path.display()),
                }
            }
        }

        merged
    }
}

fn read_vec3(section: &Section, key: &str) -> (f32, f32, f32) {
    section.entry(key).map(read_vec3_entry).unwrap_or_default()
}

fn read_vec3_entry(entry: &crate::section::Entry) -> (f32, f32, f32) {
    let x = entry.value(0).and_then(|v| v.as_float()).unwrap_or_default() as f32;
    let y = entry.value(1).and_then(|v| v.as_float()).unwrap_or_default() as f32;
    let z = entry.value(2).and_then(|v| v.as_float()).unwrap_or_default() as f32;
    (x, y, z)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    fn install(files: &[(&str, &str)]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("starchart-registry-test-{:?}", std::thread::current().id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("EXE")).unwrap();
        fs::write(dir.join("freelancer.ini"), "").unwrap();
        fs::write(dir.join("EXE/EXE.rm"), "").unwrap();
        for (relative, content) in files {
            let path = dir.join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        dir
    }

    #[test]
    fn test_systems_with_a_planet_and_spin() {
        let root = install(&[
            ("DATA/universe/universe.ini", "[System]\nnickname = li01\nfile = li01/li01.ini\n"),
            (
                "DATA/universe/systems/li01/li01.ini",
                "[Object]\nnickname = li01_world\narchetype = planet\nspin = 1, 0, 0\npos = 0, 0, 0\n",
            ),
        ]);

        let registry = Registry::new(&root).unwrap();
        let system = registry.systems().get("li01").unwrap();
        let planets = system.contents().planets();
        assert_eq!(planets.len(), 1);
        assert_eq!(planets.get("li01_world").unwrap().spin(), &(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_base_solar_resolves_owner_faction() {
        let root = install(&[
            ("DATA/universe/universe.ini", "[System]\nnickname = li01\nfile = li01/li01.ini\n\n[Base]\nnickname = li01_01_base\nsystem = li01\n"),
            (
                "DATA/universe/systems/li01/li01.ini",
                "[Object]\nnickname = li01_01_base\narchetype = station\nbase = li01_01_base\nreputation = li_n_grp\npos = 0, 0, 0\n",
            ),
        ]);

        let registry = Registry::new(&root).unwrap();
        let base = registry.bases().get("li01_01_base").unwrap();
        let solar = registry.base_solar(base.nickname()).unwrap();
        assert_eq!(solar.reputation(), Some("li_n_grp"));
    }

    #[test]
    fn test_jump_appears_in_system_contents() {
        let root = install(&[
            ("DATA/universe/universe.ini", "[System]\nnickname = li01\nfile = li01/li01.ini\n"),
            (
                "DATA/universe/systems/li01/li01.ini",
                "[Object]\nnickname = li01_to_li02\narchetype = jump_gate\ngoto = li02, li02_from_li01\npos = 0, 0, 0\n",
            ),
        ]);

        let registry = Registry::new(&root).unwrap();
        let system = registry.systems().get("li01").unwrap();
        assert!(system.contents().contents().any(|nickname| nickname == "li01_to_li02"));
        assert_eq!(system.contents().jumps().len(), 1);
    }
}
