//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! One module per on-disk format this crate can read.
//!
//! Each of these decodes into a format-appropriate intermediate value; [`bini`] and [`ini`]
//! both converge on the same [`crate::section::Section`] stream, which is what everything
//! above [`crate::unify`] actually consumes.

pub mod bini;
pub mod ini;
pub mod respak;
pub mod utf;

#[cfg(test)] mod bini_test;
#[cfg(test)] mod ini_test;
#[cfg(test)] mod respak_test;
#[cfg(test)] mod utf_test;
