//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Logging integration.
//!
//! This crate logs through the [`log`] facade everywhere, exactly like any other consumer of
//! the `log` crate: a bare `log::warn!` in a decoder does nothing unless something installed a
//! logger. The `integration_log` feature (on by default) provides one such logger, a plain
//! terminal one, for binaries that embed `starchart` directly and don't want to wire up their
//! own. GUI or service-style consumers should disable the feature and install their own backend
//! instead.

#[cfg(feature = "integration_log")]
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

pub use log::{debug, error, info, trace, warn};

/// Initializes a simple terminal logger at the given level.
///
/// Calling this more than once, or after another crate already installed a logger, returns an
/// error from the underlying `log` crate; callers that don't control the whole process should
/// generally skip this and install their own logger before touching `starchart`.
#[cfg(feature = "integration_log")]
pub fn init_terminal_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
}

#[cfg(all(test, feature = "integration_log"))]
mod test {
    use super::*;

    #[test]
    fn test_init_terminal_logger_is_callable() {
        // We can't assert much here beyond "it compiles and runs"; a second call in the same
        // process is expected to fail because a logger is already installed.
        let _ = init_terminal_logger(LevelFilter::Warn);
    }
}
