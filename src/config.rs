// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sotd-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sotd and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Resolved runtime configuration.
//!
//! Command-line values win; `SOTD_*` environment variables fill whatever the command line left
//! unset. Everything else falls back to built-in defaults.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::document::{DateMode, ParseDateModeError};
use crate::model::{
    CategorySequence, SequenceError, VocabularyError, VocabularySet, DEFAULT_CYCLE_ORDER,
    DEFAULT_MANUAL_ORDER, MAX_CYCLE_SLOTS,
};
use crate::wizard::{Wizard, WizardMode};

pub const ENV_ORDER: &str = "SOTD_ORDER";
pub const ENV_DATE: &str = "SOTD_DATE";
pub const ENV_MODE: &str = "SOTD_MODE";
pub const ENV_VOCAB: &str = "SOTD_VOCAB";
pub const ENV_LOG: &str = "SOTD_LOG";

/// Raw values taken from the command line, before environment fallbacks.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    pub manual: bool,
    pub order: Option<String>,
    pub date: Option<String>,
    pub vocab: Option<String>,
    pub log: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: WizardMode,
    pub order: Option<String>,
    pub date_mode: DateMode,
    pub vocab_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: WizardMode::Cycle,
            order: None,
            date_mode: DateMode::Omitted,
            vocab_file: None,
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_env(overrides: Overrides) -> Result<Self, ConfigError> {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    pub fn resolve(
        overrides: Overrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let lookup = |value: Option<String>, key: &str| {
            value.or_else(|| env(key)).filter(|value| !value.trim().is_empty())
        };

        let mode = if overrides.manual {
            WizardMode::Manual
        } else {
            match env(ENV_MODE) {
                Some(raw) => parse_mode(&raw)?,
                None => WizardMode::Cycle,
            }
        };

        let date_mode = match lookup(overrides.date, ENV_DATE) {
            Some(raw) => raw.parse().map_err(ConfigError::Date)?,
            None => DateMode::Omitted,
        };

        Ok(Self {
            mode,
            order: lookup(overrides.order, ENV_ORDER),
            date_mode,
            vocab_file: lookup(overrides.vocab, ENV_VOCAB).map(PathBuf::from),
            log_file: lookup(overrides.log, ENV_LOG).map(PathBuf::from),
        })
    }

    pub fn vocabularies(&self) -> Result<VocabularySet, ConfigError> {
        let builtin = VocabularySet::builtin();
        match &self.vocab_file {
            Some(path) => builtin.with_file(path).map_err(ConfigError::Vocabulary),
            None => Ok(builtin),
        }
    }

    pub fn sequence(&self, vocabularies: &VocabularySet) -> Result<CategorySequence, ConfigError> {
        let (default_order, cap) = match self.mode {
            WizardMode::Cycle => (DEFAULT_CYCLE_ORDER, Some(MAX_CYCLE_SLOTS)),
            WizardMode::Manual => (DEFAULT_MANUAL_ORDER, None),
        };
        CategorySequence::from_order(self.order.as_deref(), default_order, cap, vocabularies)
            .map_err(|err| match err {
                SequenceError::Empty => {
                    ConfigError::EmptyOrder { order: self.order.clone().unwrap_or_default() }
                }
            })
    }

    pub fn build_wizard(&self) -> Result<Wizard, ConfigError> {
        let vocabularies = self.vocabularies()?;
        let sequence = self.sequence(&vocabularies)?;
        tracing::info!(
            mode = ?self.mode,
            order = %sequence.codes(),
            date = self.date_mode.as_str(),
            "wizard configured"
        );
        Ok(Wizard::new(self.mode, sequence).with_date_mode(self.date_mode))
    }
}

fn parse_mode(raw: &str) -> Result<WizardMode, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "cycle" => Ok(WizardMode::Cycle),
        "manual" => Ok(WizardMode::Manual),
        _ => Err(ConfigError::Mode(raw.to_owned())),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyOrder { order: String },
    Date(ParseDateModeError),
    Mode(String),
    Vocabulary(VocabularyError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyOrder { order } => write!(
                f,
                "category order {order:?} contains no recognized codes (expected some of L B R b P M F p)"
            ),
            Self::Date(err) => write!(f, "{err}"),
            Self::Mode(raw) => write!(f, "invalid {ENV_MODE} {raw:?} (expected cycle or manual)"),
            Self::Vocabulary(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyOrder { .. } | Self::Mode(_) => None,
            Self::Date(err) => Some(err),
            Self::Vocabulary(err) => Some(err),
        }
    }
}
