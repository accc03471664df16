// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sotd-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sotd and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Typo-tolerant ranked search over a vocabulary.
//!
//! A needle is split into whitespace-separated terms. Each term must start with a verbatim
//! character of the haystack entry; after that the [`MatchProfile`] decides how many extra
//! characters may be skipped inside a word and which single-character edits are tolerated.
//! Terms may be separated by any amount of text unless `inter_ins` bounds it.

use std::cmp::Reverse;

use smallvec::SmallVec;

mod align;

use align::{align_terms, starts_word, TermMatch};

/// Needles with more terms than this are only matched in order.
pub const MAX_OUT_OF_ORDER_TERMS: usize = 5;

/// Rule applied to the character just outside a matched term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    #[default]
    Any,
    /// Neighbour must be non-alphanumeric (or the edge of the entry).
    Loose,
    /// Neighbour must be whitespace (or the edge of the entry).
    Strict,
}

/// Tolerance profile for [`FuzzyMatcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchProfile {
    /// Characters that may be skipped between two consecutive term characters (per gap, never
    /// across whitespace).
    pub intra_ins: usize,
    pub intra_sub: usize,
    pub intra_trn: usize,
    pub intra_del: usize,
    /// Total substitutions, transpositions and deletions allowed per term.
    pub intra_errors: usize,
    /// Characters allowed between consecutive terms; `None` is unlimited.
    pub inter_ins: Option<usize>,
    pub inter_lft: Boundary,
    pub inter_rgt: Boundary,
}

impl Default for MatchProfile {
    fn default() -> Self {
        Self {
            intra_ins: 1,
            intra_sub: 1,
            intra_trn: 1,
            intra_del: 1,
            intra_errors: 1,
            inter_ins: None,
            inter_lft: Boundary::Any,
            inter_rgt: Boundary::Any,
        }
    }
}

/// Ranked approximate search.
///
/// Implementations return indices into `haystack`, most relevant first, at most `max_results`
/// of them. An empty or blank needle matches nothing.
pub trait Matcher {
    fn search(
        &self,
        haystack: &[String],
        needle: &str,
        allow_out_of_order: bool,
        max_results: usize,
    ) -> Vec<usize>;
}

#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher {
    profile: MatchProfile,
}

impl FuzzyMatcher {
    pub fn new(profile: MatchProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &MatchProfile {
        &self.profile
    }
}

type Terms = SmallVec<[Vec<char>; 4]>;

fn fold(text: &str) -> Vec<char> {
    text.chars().flat_map(char::to_lowercase).collect()
}

fn split_terms(needle: &str) -> Terms {
    needle.split_whitespace().map(fold).filter(|term| !term.is_empty()).collect()
}

/// How well one entry was hit; smaller is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Fit {
    word_starts: Reverse<usize>,
    edits: usize,
    inserted: usize,
    first: usize,
}

impl Fit {
    fn of(hay: &[char], matches: &[TermMatch]) -> Self {
        Self {
            word_starts: Reverse(matches.iter().filter(|m| starts_word(hay, m.start)).count()),
            edits: matches.iter().map(|m| m.edits).sum(),
            inserted: matches.iter().map(|m| m.inserted).sum(),
            first: matches.iter().map(|m| m.start).min().unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Rank {
    fit: Fit,
    similarity: Reverse<i64>,
    len: usize,
    idx: usize,
}

/// All orderings of `0..n`, identity first.
fn permutations(n: usize) -> Vec<Vec<usize>> {
    fn extend(prefix: &mut Vec<usize>, used: &mut [bool], out: &mut Vec<Vec<usize>>) {
        if prefix.len() == used.len() {
            out.push(prefix.clone());
            return;
        }
        for idx in 0..used.len() {
            if used[idx] {
                continue;
            }
            used[idx] = true;
            prefix.push(idx);
            extend(prefix, used, out);
            prefix.pop();
            used[idx] = false;
        }
    }

    let mut out = Vec::new();
    extend(&mut Vec::with_capacity(n), &mut vec![false; n], &mut out);
    out
}

impl FuzzyMatcher {
    fn best_fit(&self, orders: &[Vec<usize>], terms: &Terms, hay: &[char]) -> Option<Fit> {
        orders
            .iter()
            .filter_map(|order| {
                let ordered: SmallVec<[&[char]; 4]> =
                    order.iter().map(|&idx| terms[idx].as_slice()).collect();
                align_terms(&ordered, hay, &self.profile).map(|matches| Fit::of(hay, &matches))
            })
            .min()
    }
}

impl Matcher for FuzzyMatcher {
    fn search(
        &self,
        haystack: &[String],
        needle: &str,
        allow_out_of_order: bool,
        max_results: usize,
    ) -> Vec<usize> {
        let terms = split_terms(needle);
        if terms.is_empty() || max_results == 0 {
            return Vec::new();
        }

        let orders = if allow_out_of_order && terms.len() <= MAX_OUT_OF_ORDER_TERMS {
            permutations(terms.len())
        } else {
            vec![(0..terms.len()).collect()]
        };
        let folded_needle: String = terms
            .iter()
            .map(|term| term.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(" ");

        let mut ranked = Vec::new();
        for (idx, entry) in haystack.iter().enumerate() {
            let hay = fold(entry);
            let Some(fit) = self.best_fit(&orders, &terms, &hay) else {
                continue;
            };

            let ratio = rapidfuzz::fuzz::ratio(folded_needle.chars(), hay.iter().copied());
            ranked.push(Rank {
                fit,
                similarity: Reverse((ratio * 1000.0).round() as i64),
                len: hay.len(),
                idx,
            });
        }

        ranked.sort();
        ranked.truncate(max_results);
        tracing::trace!(needle, hits = ranked.len(), "fuzzy search");
        ranked.into_iter().map(|rank| rank.idx).collect()
    }
}
