//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Decoder for the BINI binary config format.
//!
//! # Layout
//!
//! | Field | Bytes | Notes |
//! | ----- | ----- | ----- |
//! | magic | 4 | ASCII `BINI` |
//! | version | 4 | `u32`, little-endian; not validated beyond being readable |
//! | string pool offset | 4 | `u32`, absolute offset into the file where the string pool starts |
//! | sections | variable | runs from offset 12 up to the string pool offset |
//! | string pool | variable | 00-terminated ASCII strings, referenced by offset from its start |
//!
//! A section is a `name_offset: u16` (into the string pool) followed by an `entry_count: u16`
//! and that many entries. An entry is a `name_offset: u16` followed by a `value_count: u8` and
//! that many values. A value is one type byte (`1` = int, `2` = float, `3` = string reference)
//! followed by 4 bytes of little-endian payload -- a reference is a `u32` offset into the
//! string pool, not the string pool bytes themselves.

use std::io::{Cursor, Seek, SeekFrom};

use crate::binary::reader::ReadBytes;
use crate::error::{Result, StarchartError};
use crate::section::{Entry, Section, TypedValue};

const MAGIC: &[u8; 4] = b"BINI";

const VALUE_TYPE_INT: u8 = 1;
const VALUE_TYPE_FLOAT: u8 = 2;
const VALUE_TYPE_STRINGREF: u8 = 3;

/// Returns whether `data` begins with the BINI magic. Used by the unifier in [`crate::unify`]
/// to decide whether to hand a file to this decoder or to [`crate::formats::ini`].
pub fn is_bini(data: &[u8]) -> bool {
    data.len() >= MAGIC.len() && &data[..MAGIC.len()] == MAGIC
}

/// Decodes a full BINI file into its stream of [`Section`]s.
pub fn decode(data: &[u8]) -> Result<Vec<Section>> {
    let mut cursor = Cursor::new(data);

    let magic = cursor.read_slice(4, false)?;
    if magic != MAGIC {
        return Err(StarchartError::MalformedBinary("missing BINI magic".to_owned()));
    }

    let _version = cursor.read_u32()?;
    let string_pool_offset = cursor.read_u32()? as u64;

    if string_pool_offset > data.len() as u64 {
        return Err(StarchartError::MalformedBinary("string pool offset past end of file".to_owned()));
    }

    let mut sections = Vec::new();
    while cursor.stream_position()? < string_pool_offset {
        let name_offset = cursor.read_u16()?;
        let entry_count = cursor.read_u16()?;

        let name = read_pool_string(&mut cursor, string_pool_offset, name_offset as u32)?;
        let mut entries = Vec::with_capacity(entry_count as usize);

        for _ in 0..entry_count {
            let entry_name_offset = cursor.read_u16()?;
            let value_count = cursor.read_u8()?;
            let entry_name = read_pool_string(&mut cursor, string_pool_offset, entry_name_offset as u32)?;

            let mut values = Vec::with_capacity(value_count as usize);
            for _ in 0..value_count {
                let kind = cursor.read_u8()?;
                match kind {
                    VALUE_TYPE_INT => values.push(TypedValue::Int(cursor.read_i32()? as i64)),
                    VALUE_TYPE_FLOAT => values.push(TypedValue::Float(cursor.read_f32()? as f64)),
                    VALUE_TYPE_STRINGREF => {
                        let string_offset = cursor.read_u32()?;
                        let value = read_pool_string(&mut cursor, string_pool_offset, string_offset)?;
                        values.push(TypedValue::String(value));
                    }
                    other => return Err(StarchartError::MalformedBinary(format!("unknown value type byte {other:#x}"))),
                }
            }

            entries.push(Entry::new(entry_name, values));
        }

        sections.push(Section::new(name, entries));
    }

    Ok(sections)
}

/// Reads a 00-terminated string at `string_pool_offset + name_offset`, then restores the
/// cursor to wherever it was before the call so the sequential section/entry walk can continue.
fn read_pool_string<R: ReadBytes + Seek>(cursor: &mut R, string_pool_offset: u64, name_offset: u32) -> Result<String> {
    let return_to = cursor.stream_position()?;
    cursor.seek(SeekFrom::Start(string_pool_offset + name_offset as u64))?;
    let value = cursor.read_string_u8_0terminated()?;
    cursor.seek(SeekFrom::Start(return_to))?;
    Ok(value)
}
