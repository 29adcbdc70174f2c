//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Install-path validation and cache-directory discovery.
//!
//! This crate is handed an install path by its caller; it never searches the filesystem or
//! the registry for one. What it does provide is a sanity check on that path (so callers get
//! an early, specific error instead of a confusing one three decoders deep) and a
//! platform-appropriate cache directory for memoized, derived data such as resolved nickname
//! indices.

use directories::ProjectDirs;

use std::fs::DirBuilder;
use std::path::{Path, PathBuf};

use crate::error::{Result, StarchartError};

const QUALIFIER: &str = "";
const ORGANISATION: &str = "";
const PROGRAM_NAME: &str = "starchart";

/// Files that, when present directly under the candidate install path, are considered strong
/// evidence that it really is an install of the game rather than an arbitrary directory.
const INSTALL_MARKERS: &[&str] = &["freelancer.ini", "EXE.rm"];

/// Checks that `path` looks like a game install directory.
///
/// This does not guarantee every asset file referenced by [`crate::registry::Registry`] is
/// present or well-formed, only that the path itself is plausible. The individual format
/// decoders report their own errors when a specific file turns out to be missing or malformed.
pub fn validate_install_path(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(StarchartError::InstallPathMissing(path.display().to_string()));
    }

    let has_marker = INSTALL_MARKERS.iter().any(|marker| path.join(marker).is_file());
    if has_marker {
        Ok(())
    } else {
        Err(StarchartError::InstallPathMissing(path.display().to_string()))
    }
}

/// Returns the platform-appropriate cache directory for this crate, creating it if needed.
///
/// Callers are free to ignore this and keep everything in memory; nothing in [`crate::registry`]
/// requires it to exist.
#[must_use = "the cache directory is only useful if you check it was actually created"]
pub fn init_cache_path() -> Result<PathBuf> {
    match ProjectDirs::from(QUALIFIER, ORGANISATION, PROGRAM_NAME) {
        Some(proj_dirs) => {
            let cache_path = proj_dirs.cache_dir();
            DirBuilder::new().recursive(true).create(cache_path)?;
            Ok(cache_path.to_path_buf())
        }
        None => Err(StarchartError::InstallPathMissing("<no home directory available for cache path>".to_owned())),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs::{create_dir_all, File};

    #[test]
    fn test_validate_install_path_accepts_freelancer_ini() {
        let dir = tempfile_dir();
        File::create(dir.join("freelancer.ini")).unwrap();
        assert!(validate_install_path(&dir).is_ok());
    }

    #[test]
    fn test_validate_install_path_rejects_unrelated_directory() {
        let dir = tempfile_dir();
        assert!(validate_install_path(&dir).is_err());
    }

    #[test]
    fn test_validate_install_path_rejects_missing_directory() {
        let dir = tempfile_dir().join("does-not-exist");
        assert!(validate_install_path(&dir).is_err());
    }

    fn tempfile_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("starchart-config-test-{:?}", std::thread::current().id()));
        create_dir_all(&dir).unwrap();
        dir
    }
}
