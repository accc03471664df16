// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sotd-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sotd and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! File-backed tracing setup.
//!
//! The TUI owns stdout/stderr while it runs, so log output only ever goes to a file. Without a
//! log file no subscriber is installed and the `tracing` macros are no-ops.

use std::error::Error;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Layer};

const DEFAULT_LOG_FILTER: &str = "sotd=info";

#[derive(Debug)]
pub enum LogInitError {
    Open { path: PathBuf, source: io::Error },
    Install(TryInitError),
}

impl fmt::Display for LogInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "failed to open log file {}: {source}", path.display())
            }
            Self::Install(err) => write!(f, "failed to install log subscriber: {err}"),
        }
    }
}

impl Error for LogInitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Install(err) => Some(err),
        }
    }
}

/// `RUST_LOG` wins over the built-in default filter.
fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn open_append(path: &Path) -> Result<File, LogInitError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogInitError::Open { path: path.to_owned(), source })
}

/// Installs the global subscriber when a log file is configured.
pub fn init(log_file: Option<&Path>) -> Result<(), LogInitError> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = open_append(path)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_filter(filter()),
        )
        .try_init()
        .map_err(LogInitError::Install)?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::{init, open_append, LogInitError};

    #[test]
    fn no_log_file_installs_nothing() {
        init(None).expect("noop init");
    }

    #[test]
    fn unopenable_log_file_reports_path() {
        let dir = std::env::temp_dir()
            .join(format!("sotd-missing-{}", std::process::id()))
            .join("nested");
        let path = dir.join("sotd.log");

        let err = open_append(&path).unwrap_err();

        assert!(matches!(err, LogInitError::Open { .. }));
        assert!(err.to_string().contains("sotd.log"));
        assert!(err.source().is_some());
    }
}
