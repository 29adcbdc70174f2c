//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

use super::respak::{decode, is_resource_container, RESOURCE_TYPE_INFOCARD, RESOURCE_TYPE_STRING};

const RSRC_VIRTUAL_ADDRESS: u32 = 0x1000;
const RSRC_FILE_OFFSET: u32 = 0x100;

/// Tiny byte-buffer builder so the resource-directory tree below can reference the offsets of
/// pieces it hasn't built yet, by reserving space and patching it in once the child exists.
struct Buf(Vec<u8>);

impl Buf {
    fn new() -> Self { Self(Vec::new()) }
    fn pos(&self) -> u32 { self.0.len() as u32 }
    fn u16(&mut self, value: u16) -> &mut Self { self.0.extend_from_slice(&value.to_le_bytes()); self }
    fn u32(&mut self, value: u32) -> &mut Self { self.0.extend_from_slice(&value.to_le_bytes()); self }
    fn bytes(&mut self, value: &[u8]) -> &mut Self { self.0.extend_from_slice(value); self }
    fn patch_u32(&mut self, pos: u32, value: u32) {
        self.0[pos as usize..pos as usize + 4].copy_from_slice(&value.to_le_bytes());
    }
}

fn utf16le(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(|unit| unit.to_le_bytes()).collect()
}

/// Directory entry count + entries header, returns the position of each entry's `offset_to_data`
/// field so the caller can patch it once the child it points to has been appended.
fn write_directory_header(buf: &mut Buf, entries: &[u32]) -> Vec<u32> {
    buf.u32(0).u32(0).u16(0).u16(0); // characteristics, timestamp, major/minor version
    buf.u16(0); // named entries
    buf.u16(entries.len() as u16); // id entries

    let mut offset_field_positions = Vec::new();
    for &id in entries {
        buf.u32(id);
        offset_field_positions.push(buf.pos());
        buf.u32(0); // placeholder, patched by caller
    }
    offset_field_positions
}

/// Builds a minimal PE resource container with one string bundle (`id=2`, slot 3 = "New York")
/// and one infocard (`name=42`), the two scenarios the decoder is tested against.
fn sample_resource_container() -> Vec<u8> {
    let mut header = Buf::new();
    header.bytes(b"MZ");
    while header.pos() < 0x3C {
        header.bytes(&[0]);
    }
    header.u32(0x40); // e_lfanew

    while header.pos() < 0x40 {
        header.bytes(&[0]);
    }

    header.bytes(b"PE\0\0");
    header.u16(0); // machine
    header.u16(1); // number of sections
    header.u32(0); // timestamp
    header.u32(0); // symbol table pointer
    header.u32(0); // number of symbols
    header.u16(0); // size of optional header
    header.u16(0); // characteristics

    // Section header for .rsrc.
    header.bytes(b".rsrc\0\0\0");
    header.u32(0); // virtual size, unused by the decoder
    header.u32(RSRC_VIRTUAL_ADDRESS);
    header.u32(0); // size of raw data, unused by the decoder
    header.u32(RSRC_FILE_OFFSET);
    header.u32(0).u32(0).u16(0).u16(0); // relocations/linenumbers + counts
    header.u32(0); // characteristics

    while header.pos() < RSRC_FILE_OFFSET {
        header.bytes(&[0]);
    }

    // --- .rsrc section contents, all offsets below are relative to RSRC_FILE_OFFSET. ---
    let mut rsrc = Buf::new();

    let type_dir_offsets = write_directory_header(&mut rsrc, &[RESOURCE_TYPE_STRING, RESOURCE_TYPE_INFOCARD]);

    let string_name_dir_pos = rsrc.pos();
    rsrc.patch_u32(type_dir_offsets[0], string_name_dir_pos | 0x8000_0000);
    let string_name_offsets = write_directory_header(&mut rsrc, &[2]); // bundle id 2

    let infocard_name_dir_pos = rsrc.pos();
    rsrc.patch_u32(type_dir_offsets[1], infocard_name_dir_pos | 0x8000_0000);
    let infocard_name_offsets = write_directory_header(&mut rsrc, &[42]); // infocard id 42

    let string_lang_dir_pos = rsrc.pos();
    rsrc.patch_u32(string_name_offsets[0], string_lang_dir_pos | 0x8000_0000);
    let string_lang_offsets = write_directory_header(&mut rsrc, &[0x409]);

    let infocard_lang_dir_pos = rsrc.pos();
    rsrc.patch_u32(infocard_name_offsets[0], infocard_lang_dir_pos | 0x8000_0000);
    let infocard_lang_offsets = write_directory_header(&mut rsrc, &[0x409]);

    let string_data_entry_pos = rsrc.pos();
    rsrc.patch_u32(string_lang_offsets[0], string_data_entry_pos); // leaf, no high bit
    rsrc.u32(0).u32(0).u32(0).u32(0); // rva, size, codepage, reserved -- patched below

    let infocard_data_entry_pos = rsrc.pos();
    rsrc.patch_u32(infocard_lang_offsets[0], infocard_data_entry_pos);
    rsrc.u32(0).u32(0).u32(0).u32(0);

    // String bundle: 16 slots, only index 3 populated with "New York".
    let string_bundle_pos = rsrc.pos();
    for index in 0..16u16 {
        if index == 3 {
            let encoded = utf16le("New York");
            rsrc.u16((encoded.len() / 2) as u16).bytes(&encoded);
        } else {
            rsrc.u16(0);
        }
    }
    let string_bundle_len = rsrc.pos() - string_bundle_pos;
    rsrc.patch_u32(string_data_entry_pos, RSRC_VIRTUAL_ADDRESS + string_bundle_pos);
    rsrc.patch_u32(string_data_entry_pos + 4, string_bundle_len);

    let infocard_pos = rsrc.pos();
    let infocard_bytes = utf16le("<TRA data=\"0,0,0\">hi</TRA>");
    rsrc.bytes(&infocard_bytes);
    rsrc.patch_u32(infocard_data_entry_pos, RSRC_VIRTUAL_ADDRESS + infocard_pos);
    rsrc.patch_u32(infocard_data_entry_pos + 4, infocard_bytes.len() as u32);

    let mut data = header.0;
    data.extend_from_slice(&rsrc.0);
    data
}

#[test]
fn test_is_resource_container_detects_dos_magic() {
    assert!(is_resource_container(&sample_resource_container()));
    assert!(!is_resource_container(b"BINI"));
}

#[test]
fn test_string_table_bundle_id_reconstruction_scenario() {
    let module = decode(&sample_resource_container()).unwrap();
    // bundle id=2, slot index=3 -> (2-1)*16+3 == 19.
    assert_eq!(module.strings.get(&19).map(String::as_str), Some("New York"));
    assert_eq!(module.strings.len(), 1);
}

#[test]
fn test_infocard_uses_raw_resource_name_as_id() {
    let module = decode(&sample_resource_container()).unwrap();
    assert_eq!(module.infocards.get(&42).map(String::as_str), Some("<TRA data=\"0,0,0\">hi</TRA>"));
}

#[test]
fn test_decode_rejects_missing_dos_magic() {
    assert!(decode(b"not a PE file at all").is_err());
}
