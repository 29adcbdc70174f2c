//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

use super::bini::{decode, is_bini};
use crate::section::TypedValue;

/// Hand-builds a minimal BINI file with one `[Good]` section and a single `price = 42` entry,
/// the scenario the format is exercised against throughout this crate's tests.
fn sample_bini() -> Vec<u8> {
    // String pool: "Good\0price\0"
    let pool = b"Good\0price\0";
    let good_offset: u16 = 0;
    let price_offset: u16 = 5;

    let mut data = Vec::new();
    data.extend_from_slice(b"BINI");
    data.extend_from_slice(&1u32.to_le_bytes()); // version

    // header is 12 bytes, sections start right after.
    let header_len = 12u32;
    let section_len = 2 + 2 + (2 + 1 + 1 + 4); // name_offset + entry_count + one entry
    let string_pool_offset = header_len + section_len as u32;
    data.extend_from_slice(&string_pool_offset.to_le_bytes());

    data.extend_from_slice(&good_offset.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // entry_count

    data.extend_from_slice(&price_offset.to_le_bytes());
    data.extend_from_slice(&1u8.to_le_bytes()); // value_count
    data.push(1); // type: int
    data.extend_from_slice(&42i32.to_le_bytes());

    data.extend_from_slice(pool);
    data
}

#[test]
fn test_is_bini_detects_magic() {
    assert!(is_bini(&sample_bini()));
    assert!(!is_bini(b"[Good]\nprice = 42\n"));
    assert!(!is_bini(b"BI"));
}

#[test]
fn test_decode_good_price_scenario() {
    let sections = decode(&sample_bini()).unwrap();
    assert_eq!(sections.len(), 1);

    let section = &sections[0];
    assert_eq!(section.name(), "good");

    let entry = section.entry("price").unwrap();
    assert_eq!(entry.first_int(), Some(42));
    assert!(matches!(entry.value(0), Some(TypedValue::Int(42))));
}

#[test]
fn test_decode_rejects_bad_magic() {
    let mut data = sample_bini();
    data[0] = b'X';
    assert!(decode(&data).is_err());
}

#[test]
fn test_decode_rejects_string_pool_offset_past_eof() {
    let mut data = sample_bini();
    let len = data.len() as u32;
    data[8..12].copy_from_slice(&(len + 1000).to_le_bytes());
    assert!(decode(&data).is_err());
}
