//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

use super::ini::decode;
use crate::section::TypedValue;

#[test]
fn test_nickname_mixed_type_values_scenario() {
    let sections = decode(b"[Object]\nnickname = li01, foo, 3.5\n").unwrap();
    assert_eq!(sections.len(), 1);

    let entry = sections[0].entry("nickname").unwrap();
    assert_eq!(entry.value(0), Some(&TypedValue::String("li01".to_owned())));
    assert_eq!(entry.value(1), Some(&TypedValue::String("foo".to_owned())));
    assert_eq!(entry.value(2), Some(&TypedValue::Float(3.5)));
}

#[test]
fn test_comments_and_blank_lines_are_ignored() {
    let text = b"; a comment\n\n[Faction]\n; another comment\nnickname = li_n ; trailing comment\n";
    let sections = decode(text).unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].entry("nickname").unwrap().first_str(), Some("li_n"));
}

#[test]
fn test_bool_case_insensitive() {
    let sections = decode(b"[Good]\nvisible = TRUE\nhidden = False\n").unwrap();
    assert_eq!(sections[0].entry("visible").unwrap().first_bool(), Some(true));
    assert_eq!(sections[0].entry("hidden").unwrap().first_bool(), Some(false));
}

#[test]
fn test_crlf_line_endings_tolerated() {
    let sections = decode(b"[System]\r\nnickname = li01\r\n").unwrap();
    assert_eq!(sections[0].entry("nickname").unwrap().first_str(), Some("li01"));
}

#[test]
fn test_utf8_bom_is_stripped() {
    let mut data = vec![0xEF, 0xBB, 0xBF];
    data.extend_from_slice(b"[System]\nnickname = li01\n");
    let sections = decode(&data).unwrap();
    assert_eq!(sections[0].name(), "system");
}

#[test]
fn test_entry_before_any_section_is_skipped_not_fatal() {
    let sections = decode(b"nickname = orphan\n[System]\nnickname = li01\n").unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].entry("nickname").unwrap().first_str(), Some("li01"));
}

#[test]
fn test_section_header_ignores_trailing_content_after_bracket() {
    let sections = decode(b"[System] stray trailing text\nnickname = li01\n").unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].name(), "system");
    assert_eq!(sections[0].entry("nickname").unwrap().first_str(), Some("li01"));
}

#[test]
fn test_line_with_no_equals_is_skipped_not_fatal() {
    let sections = decode(b"[System]\ngarbage line with no equals\nnickname = li01\n").unwrap();
    assert_eq!(sections[0].entries("nickname").count(), 1);
}
