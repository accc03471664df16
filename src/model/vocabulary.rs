// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sotd-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sotd and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Per-category product vocabularies.
//!
//! Vocabularies are opaque, read-only word lists. The built-in lists can be replaced one by one
//! from a JSON file shaped like `{"lathers": ["..."], "blades": ["..."]}`.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use super::builtin;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VocabularyKind {
    Lathers,
    Brushes,
    Razors,
    Blades,
    PostShaves,
    Fragrances,
    Preps,
}

impl VocabularyKind {
    pub const ALL: [VocabularyKind; 7] = [
        VocabularyKind::Lathers,
        VocabularyKind::Brushes,
        VocabularyKind::Razors,
        VocabularyKind::Blades,
        VocabularyKind::PostShaves,
        VocabularyKind::Fragrances,
        VocabularyKind::Preps,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Lathers => "lathers",
            Self::Brushes => "brushes",
            Self::Razors => "razors",
            Self::Blades => "blades",
            Self::PostShaves => "postshaves",
            Self::Fragrances => "fragrances",
            Self::Preps => "preps",
        }
    }
}

impl fmt::Display for VocabularyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularySet {
    lists: BTreeMap<VocabularyKind, Arc<[String]>>,
}

impl Default for VocabularySet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl VocabularySet {
    pub fn builtin() -> Self {
        let lists = VocabularyKind::ALL
            .into_iter()
            .map(|kind| {
                let words: Arc<[String]> =
                    builtin::words(kind).iter().map(|word| (*word).to_owned()).collect();
                (kind, words)
            })
            .collect();
        Self { lists }
    }

    pub fn get(&self, kind: VocabularyKind) -> Arc<[String]> {
        self.lists.get(&kind).cloned().unwrap_or_else(|| Arc::from(Vec::new()))
    }

    pub fn replace(&mut self, kind: VocabularyKind, words: Vec<String>) {
        self.lists.insert(kind, words.into());
    }

    /// Applies overrides from a JSON document; lists it does not name keep their current words.
    pub fn merge_json(&mut self, source: &str) -> Result<(), VocabularyError> {
        let overrides: BTreeMap<VocabularyKind, Vec<String>> =
            serde_json::from_str(source).map_err(VocabularyError::Parse)?;
        for (kind, words) in overrides {
            tracing::debug!(vocabulary = %kind, words = words.len(), "vocabulary override");
            self.replace(kind, words);
        }
        Ok(())
    }

    pub fn with_file(mut self, path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .map_err(|source| VocabularyError::Read { path: path.to_path_buf(), source })?;
        self.merge_json(&source)?;
        Ok(self)
    }
}

#[derive(Debug)]
pub enum VocabularyError {
    Read { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read vocabulary file {}: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid vocabulary file: {err}"),
        }
    }
}

impl Error for VocabularyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}
