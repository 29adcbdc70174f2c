//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Decoder for the textual config dialect: `;`-commented, `[section]`-delimited, with
//! comma-separated typed values on each `key = ...` line.
//!
//! # Grammar, informally
//!
//! - `;` starts a comment that runs to end of line; blank lines are ignored.
//! - `[identifier]` opens a new section. Sections are not required to be unique.
//! - `identifier = v1, v2, ...` adds an entry to whichever section is currently open.
//! - Each value is classified independently, in this order: integer, float,
//!   case-insensitive `true`/`false`, then string (the fallback, always matches).
//! - A UTF-8 byte-order mark at the start of the file is stripped if present.
//! - Both `\n` and `\r\n` line endings are accepted.
//!
//! A line this crate cannot make sense of -- an entry before any `[section]`, or one with no
//! `=` -- is skipped rather than aborting the whole file; real install trees contain files with
//! the odd stray or commented-out line that the original game's own parser tolerated.

use crate::section::{Entry, Section, TypedValue};

const BOM_UTF8: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Parses a textual config file into its stream of [`Section`]s.
///
/// Malformed individual lines are skipped (and logged at `warn` level) rather than failing the
/// whole decode; this function only returns `Err` if the bytes aren't text at all.
pub fn decode(data: &[u8]) -> crate::error::Result<Vec<Section>> {
    let data = if data.starts_with(&BOM_UTF8) { &data[BOM_UTF8.len()..] } else { data };
    let text = String::from_utf8_lossy(data);

    let mut sections = Vec::new();
    let mut current_name: Option<String> = None;
    let mut current_entries: Vec<Entry> = Vec::new();

    for (line_no, raw_line) in text.lines().enumerate() {
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = parse_section_header(line) {
            if let Some(name) = current_name.take() {
                sections.push(Section::new(name, std::mem::take(&mut current_entries)));
            }
            current_name = Some(name);
            continue;
        }

        match parse_entry_line(line) {
            Some(entry) if current_name.is_some() => current_entries.push(entry),
            _ => log::warn!("skipping unparseable line {}: {line:?}", line_no + 1),
        }
    }

    if let Some(name) = current_name.take() {
        sections.push(Section::new(name, current_entries));
    }

    Ok(sections)
}

fn strip_comment(line: &str) -> &str {
    match line.find(';') {
        Some(index) => &line[..index],
        None => line,
    }
}

fn parse_section_header(line: &str) -> Option<String> {
    let rest = line.strip_prefix('[')?;
    let (name, _trailing) = rest.split_once(']')?;
    let name = name.trim();
    if name.is_empty() { None } else { Some(name.to_owned()) }
}

fn parse_entry_line(line: &str) -> Option<Entry> {
    let (key, rest) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    let values = rest.split(',').map(|token| classify_value(token.trim())).collect();
    Some(Entry::new(key, values))
}

fn classify_value(token: &str) -> TypedValue {
    if let Ok(value) = token.parse::<i64>() {
        return TypedValue::Int(value);
    }
    if let Ok(value) = token.parse::<f64>() {
        return TypedValue::Float(value);
    }
    if token.eq_ignore_ascii_case("true") {
        return TypedValue::Bool(true);
    }
    if token.eq_ignore_ascii_case("false") {
        return TypedValue::Bool(false);
    }
    TypedValue::String(token.to_owned())
}
