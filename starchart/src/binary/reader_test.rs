//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Tests for the [`ReadBytes`] trait.
//!
//! [`ReadBytes`]: super::reader::ReadBytes

use std::io::Cursor;

use super::reader::ReadBytes;

#[test]
fn test_len_and_is_empty() {
    let mut cursor = Cursor::new(vec![1, 2, 3]);
    assert_eq!(cursor.len().unwrap(), 3);
    assert!(!cursor.is_empty().unwrap());
    assert!(Cursor::new(Vec::<u8>::new()).is_empty().unwrap());
}

#[test]
fn test_read_bool() {
    let mut cursor = Cursor::new(vec![0u8, 1, 2]);
    assert!(!cursor.read_bool().unwrap());
    assert!(cursor.read_bool().unwrap());
    assert!(cursor.read_bool().is_err());
}

#[test]
fn test_read_integers_little_endian() {
    let mut cursor = Cursor::new(vec![0x2A, 0x00, 0x00, 0x00]);
    assert_eq!(cursor.read_u32().unwrap(), 42);

    let mut cursor = Cursor::new(vec![0xD6, 0xFF, 0xFF, 0xFF]);
    assert_eq!(cursor.read_i32().unwrap(), -42);
}

#[test]
fn test_read_string_u8_0terminated() {
    let mut cursor = Cursor::new(b"li01\0trailing".to_vec());
    assert_eq!(cursor.read_string_u8_0terminated().unwrap(), "li01");
    assert_eq!(cursor.read_string_u8(9).unwrap(), "trailing");
}

#[test]
fn test_read_string_u8_0terminated_missing_terminator_errors() {
    let mut cursor = Cursor::new(b"no terminator here".to_vec());
    assert!(cursor.read_string_u8_0terminated().is_err());
}

#[test]
fn test_read_string_u8_0padded() {
    let mut cursor = Cursor::new(vec![b'h', b'i', 0, 0, 0]);
    assert_eq!(cursor.read_string_u8_0padded(5).unwrap(), "hi");
}

#[test]
fn test_read_sized_string_u16_roundtrip() {
    let mut data = vec![4u8, 0];
    for ch in "Waha".encode_utf16() {
        data.extend_from_slice(&ch.to_le_bytes());
    }
    let mut cursor = Cursor::new(data);
    assert_eq!(cursor.read_sized_string_u16().unwrap(), "Waha");
}

#[test]
fn test_read_string_u16_0terminated() {
    let mut data = vec![];
    for ch in "hi".encode_utf16() {
        data.extend_from_slice(&ch.to_le_bytes());
    }
    data.extend_from_slice(&[0, 0]);
    let mut cursor = Cursor::new(data);
    assert_eq!(cursor.read_string_u16_0terminated().unwrap(), "hi");
}
