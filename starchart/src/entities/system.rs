//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! [`System`], a star system and the solar objects/zones it contains.

use getset::Getters;

use crate::entities::solar::SolarContents;
use crate::entities::{Entity, HasResourceStrings, ResourceId};

/// A star system, as declared in `DATA/universe/universe.ini` and detailed in its own
/// `DATA/universe/systems/<nickname>/<nickname>.ini`.
#[derive(Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct System {
    nickname: String,
    #[getset(skip)]
    ids_name: Option<ResourceId>,
    #[getset(skip)]
    ids_info: Option<ResourceId>,
    #[getset(skip)]
    contents: SolarContents,
}

impl System {
    pub fn new(nickname: impl Into<String>, ids_name: Option<ResourceId>, ids_info: Option<ResourceId>, contents: SolarContents) -> Self {
        Self { nickname: nickname.into(), ids_name, ids_info, contents }
    }

    /// Every solar object and zone this system contains, split into its typed collections.
    pub fn contents(&self) -> &SolarContents {
        &self.contents
    }
}

impl Entity for System {
    fn nickname(&self) -> &str {
        &self.nickname
    }
}

impl HasResourceStrings for System {
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
    fn test_system_contents_defaults_empty() {
        let system = System::new("li01", None, None, SolarContents::default());
        assert_eq!(system.contents().contents().count(), 0);
    }
}
