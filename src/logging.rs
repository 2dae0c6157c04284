// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pitchdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! `tracing` subscriber setup for the binary.
//!
//! The filter comes from `PITCHDECK_LOG` (default `warn`). Events go to the file named by
//! `PITCHDECK_LOG_FILE` when it is set. Otherwise they go to stderr, but only when no full-screen
//! terminal UI is running, since writes to stderr would tear the alternate screen.

use std::error::Error;
use std::ffi::OsString;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt as tracing_fmt, prelude::*, EnvFilter};

pub const LOG_FILTER_ENV: &str = "PITCHDECK_LOG";
pub const LOG_FILE_ENV: &str = "PITCHDECK_LOG_FILE";
const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    File(PathBuf),
    Stderr,
    Discard,
}

impl LogDestination {
    pub fn resolve(interactive: bool, log_file: Option<OsString>) -> Self {
        match log_file.filter(|value| !value.is_empty()) {
            Some(path) => Self::File(PathBuf::from(path)),
            None if interactive => Self::Discard,
            None => Self::Stderr,
        }
    }

    pub fn from_env(interactive: bool) -> Self {
        Self::resolve(interactive, std::env::var_os(LOG_FILE_ENV))
    }
}

#[derive(Debug)]
pub enum LoggingError {
    OpenFile { path: PathBuf, source: io::Error },
    Install(tracing_subscriber::util::TryInitError),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenFile { path, source } => {
                write!(f, "cannot open log file {}: {source}", path.display())
            }
            Self::Install(source) => write!(f, "cannot install log subscriber: {source}"),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::OpenFile { source, .. } => Some(source),
            Self::Install(source) => Some(source),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV)
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global subscriber. Does nothing for [`LogDestination::Discard`].
pub fn init(destination: &LogDestination) -> Result<(), LoggingError> {
    let (file, stderr) = match destination {
        LogDestination::Discard => return Ok(()),
        LogDestination::File(path) => (Some(open_log_file(path)?), false),
        LogDestination::Stderr => (None, true),
    };

    let file_layer = file.map(|file| {
        tracing_fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
    });
    let stderr_layer = stderr.then(|| tracing_fmt::layer().with_writer(io::stderr).with_target(false));

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(LoggingError::Install)
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenFile { path: path.to_path_buf(), source })
}
