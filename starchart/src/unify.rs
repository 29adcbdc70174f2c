//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! The single entry point everything above this module uses to read a config file.
//!
//! [`crate::registry::Registry`] never has to know whether `DATA/universe/universe.ini` is
//! actually textual or a compiled BINI blob -- both decoders converge on the same
//! [`crate::section::Section`] stream, and [`load_sections`] picks the right one by sniffing
//! the first four bytes.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::formats::{bini, ini};
use crate::section::Section;

/// Decodes `data` into its [`Section`] stream, dispatching on the leading magic bytes.
///
/// A caller that already knows the format (e.g. a test feeding raw BINI bytes) can call
/// [`bini::decode`] or [`ini::decode`] directly; this function exists for the common case of
/// "I have some bytes from the install tree and don't know or care which dialect they're in".
pub fn load_sections(data: &[u8]) -> Result<Vec<Section>> {
    if bini::is_bini(data) {
        bini::decode(data)
    } else {
        ini::decode(data)
    }
}

/// Reads `path` fully into memory and decodes it via [`load_sections`].
pub fn load_sections_from_file(path: &Path) -> Result<Vec<Section>> {
    let data = fs::read(path)?;
    load_sections(&data)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_load_sections_dispatches_on_magic() {
        let textual = b"[Good]\nprice = 42\n";
        let sections = load_sections(textual).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name(), "good");
    }
}
