//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! The mid-level model both config decoders (binary and textual) produce.
//!
//! Neither [`crate::formats::bini`] nor [`crate::formats::ini`] is the final representation:
//! they both decode into the same stream of [`Section`]s, so that everything above this layer
//! -- the unifier in [`crate::unify`] and the entity builders in [`crate::entities`] -- never
//! has to know or care which on-disk encoding a given file used.

use getset::Getters;

use std::fmt;

/// A single value inside an [`Entry`].
///
/// Typed per-value, not per-entry: `nickname = li01, foo, 3.5` is a perfectly legal entry with
/// three values of three different types, and callers ask for the value they expect by index.
#[derive(Clone, Debug, PartialEq)]
pub enum TypedValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    String(String),
}

impl TypedValue {
    /// Returns this value as an integer, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            TypedValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns this value as a float. Integers widen to float; bools and strings do not.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            TypedValue::Float(value) => Some(*value),
            TypedValue::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// Returns this value as a bool, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns this value as a string slice, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::String(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Int(value) => write!(f, "{value}"),
            TypedValue::Float(value) => write!(f, "{value}"),
            TypedValue::Bool(value) => write!(f, "{value}"),
            TypedValue::String(value) => write!(f, "{value}"),
        }
    }
}

/// One `key = v1, v2, ...` line.
///
/// The key is stored lowercased, per the case-insensitive identifier rule every format in this
/// crate follows; the original casing isn't kept because nothing downstream needs it.
#[derive(Clone, Debug, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct Entry {
    key: String,
    values: Vec<TypedValue>,
}

impl Entry {
    pub fn new(key: impl Into<String>, values: Vec<TypedValue>) -> Self {
        Self { key: key.into().to_ascii_lowercase(), values }
    }

    /// Returns the value at `index`, if present.
    pub fn value(&self, index: usize) -> Option<&TypedValue> {
        self.values.get(index)
    }

    /// Returns the first value's string form, if any. Used constantly: the overwhelming
    /// majority of entries carry exactly one value.
    pub fn first_str(&self) -> Option<&str> {
        self.values.first().and_then(TypedValue::as_str)
    }

    pub fn first_int(&self) -> Option<i64> {
        self.values.first().and_then(TypedValue::as_int)
    }

    pub fn first_float(&self) -> Option<f64> {
        self.values.first().and_then(TypedValue::as_float)
    }

    pub fn first_bool(&self) -> Option<bool> {
        self.values.first().and_then(TypedValue::as_bool)
    }
}

/// A `[name]` block, holding its entries in file order.
///
/// The name is lowercased for the same reason as [`Entry::key`]. Sections are not deduplicated:
/// a file can (and routinely does) repeat the same section name, and each occurrence is kept as
/// its own [`Section`] in the stream.
#[derive(Clone, Debug, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct Section {
    name: String,
    #[getset(skip)]
    entries: Vec<Entry>,
}

impl Section {
    pub fn new(name: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self { name: name.into().to_ascii_lowercase(), entries }
    }

    /// Returns every entry whose key matches `key`, in file order.
    ///
    /// Case-insensitive, and deliberately a multimap lookup: sections are allowed to repeat a
    /// key (`hull_type` showing up under more than one `good`'s `[Equipment]` block, etc.) and
    /// callers that only want the first one should call `.next()` on the result.
    ///
    /// Uses full Unicode case folding rather than ASCII-only comparison, since localized
    /// install trees occasionally carry accented section/key names. This is deliberately a
    /// different case regime than [`crate::entities::EntitySet::get`]'s nickname lookup: a
    /// nickname is a spec-mandated lowercased-ASCII identifier (see `entities::mod`'s builders),
    /// never itself localized text, so ASCII lowercasing is both correct and cheaper there.
    pub fn entries(&self, key: &str) -> impl Iterator<Item = &Entry> {
        let folded_key = caseless::default_case_fold_str(key);
        self.entries.iter().filter(move |entry| caseless::default_case_fold_str(entry.key()) == folded_key)
    }

    /// Returns the first entry matching `key`, if any.
    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries(key).next()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_entry_first_accessors() {
        let entry = Entry::new("Price", vec![TypedValue::Int(42)]);
        assert_eq!(entry.key(), "price");
        assert_eq!(entry.first_int(), Some(42));
        assert_eq!(entry.first_float(), Some(42.0));
        assert_eq!(entry.first_str(), None);
    }

    #[test]
    fn test_section_entries_is_case_insensitive_multimap() {
        let section = Section::new("Good", vec![
            Entry::new("nickname", vec![TypedValue::String("li01_food".to_owned())]),
            Entry::new("NICKNAME", vec![TypedValue::String("li01_water".to_owned())]),
        ]);

        let values: Vec<_> = section.entries("nickname").filter_map(Entry::first_str).collect();
        assert_eq!(values, vec!["li01_food", "li01_water"]);
    }
}
