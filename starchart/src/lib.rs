//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! A read-only decoder and object-relational projection for the data assets of a 2003
//! space-simulation game's install tree.
//!
//! This crate never writes to an install, never talks to the network, and never guesses at a
//! path: it is handed one install directory (see [`config::validate_install_path`]) and from
//! then on only reads from it, lazily and on demand, through a [`registry::Registry`].
//!
//! # Layers
//!
//! - [`binary`] -- a bounds-checked, seekable byte-cursor reader shared by every binary format
//!   below it.
//! - [`formats`] -- one module per on-disk encoding this crate understands: [`formats::bini`]
//!   (compiled tabular config), [`formats::ini`] (the textual equivalent), [`formats::respak`]
//!   (the PE-subset resource container holding localized strings and infocards) and
//!   [`formats::utf`] (the hierarchical tree container).
//! - [`section`] -- the mid-level model both config decoders converge on, so nothing above this
//!   layer needs to know which encoding a given file used.
//! - [`unify`] -- picks the right config decoder for a blob of bytes by sniffing its magic.
//! - [`entities`] -- the typed entity hierarchy ([`entities::System`], [`entities::Base`],
//!   [`entities::Faction`], the `Good` family, the `Solar` family) and the [`entities::EntitySet`]
//!   container every collection is held in.
//! - [`markup`] -- renders an infocard's raw markup as `rdl`, a whitelisted HTML subset, or
//!   plain text.
//! - [`registry`] -- the entity-graph layer itself: parses an install tree into the typed
//!   collections above, lazily and with caching, and is the one public entry point most callers
//!   need.
//!
//! # Example
//!
//! ```no_run
//! use starchart::registry::Registry;
//!
//! let registry = Registry::new("/path/to/install")?;
//! for base in registry.bases().iter() {
//!     println!("{}", registry.resolve_name(base.ids_name()));
//! }
//! # Ok::<(), starchart::error::StarchartError>(())
//! ```

pub mod binary;
pub mod config;
pub mod entities;
pub mod error;
pub mod formats;
pub mod logging;
pub mod markup;
pub mod registry;
pub mod section;
pub mod unify;
