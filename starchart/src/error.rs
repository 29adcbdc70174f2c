//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This module contains all kind of errors used inside this crate.
//!
//! Not much to say appart of that, really.

use thiserror::Error;

/// Custom `Result` type, to always return our custom error.
pub type Result<T, E = StarchartError> = core::result::Result<T, E>;

/// Custom error type for the lib.
#[derive(Error, Debug)]
pub enum StarchartError {
    #[error("The install path \"{0}\" does not look like a valid install: no freelancer.ini / EXE.rm found under it.")]
    InstallPathMissing(String),

    #[error("File not found: {0}.")]
    FileNotFound(String),

    #[error("There are no more bytes to decode in the data you provided.")]
    DecodingNotMoreBytesToDecode,

    #[error("Error trying to decode \"{0}\" as boolean: invalid value.")]
    DecodingBoolError(u8),

    #[error("Error trying to decode an {0} value: Required bytes: {1}. Provided bytes: {2:?}.")]
    DecodingNotEnoughBytesToDecodeForType(String, usize, Option<usize>),

    #[error(transparent)]
    DecodeIntError(#[from] std::num::ParseIntError),

    #[error(transparent)]
    DecodeUTF8Error(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    DecodeUTF8StrError(#[from] std::str::Utf8Error),

    #[error(transparent)]
    DecodeUTF16Error(#[from] std::string::FromUtf16Error),

    #[error("Error trying to decode a 00-terminated string: no 00 byte found before EOF.")]
    DecodingString0TeminatedNo0Error,

    #[error("Error trying to decode an {0}: Not enough bytes to get his size.")]
    DecodingStringSizeError(String),

    #[error("This is either not a BINI file, or a BINI file that is corrupted: {0}.")]
    MalformedBinary(String),

    #[error("This text config file could not be parsed: {0}.")]
    MalformedText(String),

    #[error("This file is not a valid PE resource container, or not a container at all: {0}.")]
    MalformedResourceContainer(String),

    #[error("This file is not a valid UTF hierarchical container, or not a container at all: {0}.")]
    MalformedUtfContainer(String),

    #[error("Path \"{0}\" could not be found inside the container.")]
    UtfPathNotFound(String),

    #[error("Cycle detected while walking the UTF container's node tree at node index {0}.")]
    UtfCycleDetected(u32),

    #[error("Entity \"{0}\" references a nickname, \"{1}\", that does not resolve to any entity of the expected kind.")]
    DanglingReference(String, String),

    #[error("Nickname \"{0}\" is already used by another entity of the same kind; the earlier definition has been discarded.")]
    CollisionOnNickname(String),

    #[error("Resource id {0} could not be resolved to a string or infocard.")]
    UnresolvedResourceId(u32),

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}
