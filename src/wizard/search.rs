// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sotd-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sotd and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Result of the latest query against the active vocabulary.
///
/// A session is rebuilt from scratch on every query change; nothing carries over except the
/// query text itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSession {
    query: String,
    candidates: Vec<String>,
    focused: Option<usize>,
}

impl SearchSession {
    pub(crate) fn new(query: String, candidates: Vec<String>) -> Self {
        Self { query, candidates, focused: None }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn focused_candidate(&self) -> Option<&str> {
        self.focused.and_then(|idx| self.candidates.get(idx)).map(String::as_str)
    }

    pub(crate) fn focus_first(&mut self) -> bool {
        if self.candidates.is_empty() {
            return false;
        }
        self.focused = Some(0);
        true
    }

    /// Moves focus by `delta`, wrapping around. Returns `false` without a focused candidate.
    pub(crate) fn move_focus(&mut self, delta: isize) -> bool {
        let len = self.candidates.len();
        let Some(current) = self.focused.filter(|_| len > 0) else {
            return false;
        };
        let len = len as isize;
        self.focused = Some((current as isize + delta).rem_euclid(len) as usize);
        true
    }
}
