//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Decoder for the resource container format: just enough of the Portable Executable layout
//! to reach `.rsrc` and pull string tables and infocards out of its three-level resource
//! directory (Type -> Name -> Language).
//!
//! # Navigation
//!
//! DOS stub (`MZ` magic, PE header offset at `0x3C`) -> `PE\0\0` signature -> COFF header ->
//! optional header (skipped; we never need the data directories, since we find `.rsrc` by
//! walking section names instead) -> section headers -> `.rsrc`.
//!
//! Inside `.rsrc`, directory/name offsets are relative to the section's start and are used
//! directly as `pointer_to_raw_data + offset`. Leaf `IMAGE_RESOURCE_DATA_ENTRY::OffsetToData`
//! is the exception: it's a real RVA relative to the image base, so it has to be translated
//! through `virtual_address` first. Getting that distinction wrong silently reads garbage
//! instead of erroring, so the two paths are kept in separate functions below.
//!
//! # Resource types
//!
//! - [`RESOURCE_TYPE_STRING`] (the standard Win32 `RT_STRING`): bundles of 16 length-prefixed
//!   UTF-16 strings. A bundle's resource Name entry is the *bundle id*; the id of string `i`
//!   inside bundle `n` is `(n - 1) * 16 + i`.
//! - [`RESOURCE_TYPE_INFOCARD`]: a custom type, adjacent to `RT_RCDATA` in the type
//!   enumeration, whose leaf payload is one UTF-16 markup blob per resource. Here the resource
//!   Name entry *is* the id directly; there is no bundle math.

use encoding_rs::UTF_16LE;

use std::collections::HashMap;
use std::io::{Cursor, Seek, SeekFrom};

use crate::binary::reader::ReadBytes;
use crate::error::{Result, StarchartError};

/// `RT_STRING`, the standard Win32 string-table resource type.
pub const RESOURCE_TYPE_STRING: u32 = 6;

/// The game's custom rich-text ("infocard") resource type.
pub const RESOURCE_TYPE_INFOCARD: u32 = 9;

const DOS_MAGIC: &[u8; 2] = b"MZ";
const PE_SIGNATURE: &[u8; 4] = b"PE\0\0";
const PE_OFFSET_POINTER: u64 = 0x3C;
const RSRC_SECTION_NAME: &[u8; 8] = b".rsrc\0\0\0";
const RESOURCE_DIRECTORY_HEADER_SIZE: u64 = 16;
const HIGH_BIT: u32 = 0x8000_0000;

/// The two tables extracted from a resource container: localized strings and infocards,
/// both keyed by [resource id](crate::GLOSSARY) and already UTF-16 decoded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceModule {
    pub strings: HashMap<u32, String>,
    pub infocards: HashMap<u32, String>,
}

/// Returns whether `data` begins with the DOS `MZ` magic.
pub fn is_resource_container(data: &[u8]) -> bool {
    data.len() >= DOS_MAGIC.len() && &data[..DOS_MAGIC.len()] == DOS_MAGIC
}

/// Decodes a resource container, extracting its string table and infocard resources.
pub fn decode(data: &[u8]) -> Result<ResourceModule> {
    let mut cursor = Cursor::new(data);

    if cursor.read_slice(2, false)? != DOS_MAGIC {
        return Err(StarchartError::MalformedResourceContainer("missing DOS MZ magic".to_owned()));
    }

    cursor.seek(SeekFrom::Start(PE_OFFSET_POINTER))?;
    let pe_offset = cursor.read_u32()? as u64;

    cursor.seek(SeekFrom::Start(pe_offset))?;
    if cursor.read_slice(4, false)? != PE_SIGNATURE {
        return Err(StarchartError::MalformedResourceContainer("missing PE signature".to_owned()));
    }

    let _machine = cursor.read_u16()?;
    let number_of_sections = cursor.read_u16()?;
    let _timestamp = cursor.read_u32()?;
    let _symbol_table_ptr = cursor.read_u32()?;
    let _number_of_symbols = cursor.read_u32()?;
    let size_of_optional_header = cursor.read_u16()?;
    let _characteristics = cursor.read_u16()?;

    let section_table_offset = cursor.stream_position()? + size_of_optional_header as u64;
    cursor.seek(SeekFrom::Start(section_table_offset))?;

    let mut rsrc = None;
    for _ in 0..number_of_sections {
        let name = cursor.read_slice(8, false)?;
        let _virtual_size = cursor.read_u32()?;
        let virtual_address = cursor.read_u32()?;
        let _size_of_raw_data = cursor.read_u32()?;
        let pointer_to_raw_data = cursor.read_u32()?;
        cursor.seek(SeekFrom::Current(16))?; // relocations, linenumbers, their counts

        if name == RSRC_SECTION_NAME {
            rsrc = Some(RsrcSection { virtual_address, pointer_to_raw_data });
            break;
        }
    }

    let rsrc = rsrc.ok_or_else(|| StarchartError::MalformedResourceContainer("no .rsrc section".to_owned()))?;

    let mut module = ResourceModule::default();
    for (type_id, type_offset) in read_directory(&mut cursor, &rsrc, 0)? {
        let ResourceDirId::Id(type_id) = type_id else { continue };
        if type_id != RESOURCE_TYPE_STRING && type_id != RESOURCE_TYPE_INFOCARD {
            continue;
        }

        for (name_id, name_offset) in read_directory(&mut cursor, &rsrc, type_offset)? {
            let ResourceDirId::Id(name_id) = name_id else { continue };

            for (_lang_id, lang_offset) in read_directory(&mut cursor, &rsrc, name_offset)? {
                let (rva, size) = read_data_entry(&mut cursor, &rsrc, lang_offset)?;
                let file_offset = rsrc.rva_to_file_offset(rva)?;
                let bytes = read_bytes_at(&mut cursor, file_offset, size as usize)?;

                if type_id == RESOURCE_TYPE_STRING {
                    decode_string_bundle(&bytes, name_id, &mut module.strings);
                } else {
                    module.infocards.insert(name_id, UTF_16LE.decode(&bytes).0.to_string());
                }
            }
        }
    }

    Ok(module)
}

struct RsrcSection {
    virtual_address: u32,
    pointer_to_raw_data: u32,
}

impl RsrcSection {
    fn rva_to_file_offset(&self, rva: u32) -> Result<u64> {
        let delta = (rva as u64).checked_sub(self.virtual_address as u64)
            .ok_or_else(|| StarchartError::MalformedResourceContainer(format!("data entry RVA {rva:#x} precedes .rsrc's virtual address {:#x}", self.virtual_address)))?;
        Ok(self.pointer_to_raw_data as u64 + delta)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum ResourceDirId {
    Id(u32),
    #[allow(dead_code)]
    Name(String),
}

/// Reads one level of the resource directory at `rsrc.pointer_to_raw_data + dir_offset`,
/// returning each entry's id and the (still section-relative) offset to its child.
fn read_directory<R: ReadBytes + Seek>(cursor: &mut R, rsrc: &RsrcSection, dir_offset: u32) -> Result<Vec<(ResourceDirId, u32)>> {
    let base = rsrc.pointer_to_raw_data as u64 + dir_offset as u64;
    cursor.seek(SeekFrom::Start(base + 12))?;

    let named_count = cursor.read_u16()?;
    let id_count = cursor.read_u16()?;
    let total = named_count as u64 + id_count as u64;

    cursor.seek(SeekFrom::Start(base + RESOURCE_DIRECTORY_HEADER_SIZE))?;

    let mut entries = Vec::with_capacity(total as usize);
    for _ in 0..total {
        let name_or_id = cursor.read_u32()?;
        let offset_to_data = cursor.read_u32()?;

        let id = if name_or_id & HIGH_BIT != 0 {
            let name_offset = rsrc.pointer_to_raw_data as u64 + (name_or_id & !HIGH_BIT) as u64;
            ResourceDirId::Name(read_directory_string(cursor, name_offset)?)
        } else {
            ResourceDirId::Id(name_or_id)
        };

        entries.push((id, offset_to_data & !HIGH_BIT));
    }

    Ok(entries)
}

fn read_directory_string<R: ReadBytes + Seek>(cursor: &mut R, offset: u64) -> Result<String> {
    let return_to = cursor.stream_position()?;
    cursor.seek(SeekFrom::Start(offset))?;
    let length = cursor.read_u16()?;
    let value = cursor.read_string_u16(length as usize * 2)?;
    cursor.seek(SeekFrom::Start(return_to))?;
    Ok(value)
}

fn read_data_entry<R: ReadBytes + Seek>(cursor: &mut R, rsrc: &RsrcSection, entry_offset: u32) -> Result<(u32, u32)> {
    let base = rsrc.pointer_to_raw_data as u64 + entry_offset as u64;
    cursor.seek(SeekFrom::Start(base))?;
    let rva = cursor.read_u32()?;
    let size = cursor.read_u32()?;
    Ok((rva, size))
}

fn read_bytes_at<R: ReadBytes + Seek>(cursor: &mut R, offset: u64, size: usize) -> Result<Vec<u8>> {
    cursor.seek(SeekFrom::Start(offset))?;
    cursor.read_slice(size, false)
}

/// Splits a string-table bundle's raw bytes into its 16 length-prefixed UTF-16 slots and
/// inserts the non-empty ones into `out`, reconstructing ids via `(bundle_id - 1) * 16 + index`.
fn decode_string_bundle(bytes: &[u8], bundle_id: u32, out: &mut HashMap<u32, String>) {
    let mut cursor = Cursor::new(bytes);
    for index in 0..16u32 {
        let Ok(length) = cursor.read_u16() else { break };
        let byte_len = length as usize * 2;
        let Ok(slot) = cursor.read_slice(byte_len, false) else { break };

        if length == 0 {
            continue;
        }

        let id = bundle_id.saturating_sub(1) * 16 + index;
        out.insert(id, UTF_16LE.decode(&slot).0.to_string());
    }
}
