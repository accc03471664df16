// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sotd-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sotd and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{Boundary, MatchProfile};

/// Edits are never applied to terms shorter than this.
const MIN_EDIT_TERM_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TermMatch {
    pub(crate) start: usize,
    /// Exclusive.
    pub(crate) end: usize,
    pub(crate) edits: usize,
    pub(crate) inserted: usize,
}

impl TermMatch {
    fn cost(&self) -> (usize, usize, usize) {
        (self.edits, self.inserted, self.end)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Budget {
    gap: usize,
    subs: usize,
    trns: usize,
    dels: usize,
    inserted: usize,
}

impl Budget {
    fn edits(&self) -> usize {
        self.subs + self.trns + self.dels
    }
}

struct Aligner<'a> {
    term: &'a [char],
    hay: &'a [char],
    profile: &'a MatchProfile,
    edits_allowed: bool,
    start: usize,
}

impl Aligner<'_> {
    fn can_edit(&self, budget: &Budget) -> bool {
        self.edits_allowed && budget.edits() < self.profile.intra_errors
    }

    fn best(&self, i: usize, j: usize, budget: Budget) -> Option<TermMatch> {
        let m = self.term.len();
        if i == m {
            return Some(TermMatch {
                start: self.start,
                end: j,
                edits: budget.edits(),
                inserted: budget.inserted,
            });
        }

        let mut best: Option<TermMatch> = None;
        let want = self.term[i];
        let hay_ch = self.hay.get(j).copied();

        if hay_ch == Some(want) {
            keep_cheaper(&mut best, self.best(i + 1, j + 1, Budget { gap: 0, ..budget }));
        }

        // Everything below only applies after the first term character.
        if i == 0 {
            return best;
        }

        if let Some(ch) = hay_ch {
            if ch != want && !ch.is_whitespace() && budget.gap < self.profile.intra_ins {
                let next = Budget { gap: budget.gap + 1, inserted: budget.inserted + 1, ..budget };
                keep_cheaper(&mut best, self.best(i, j + 1, next));
            }
        }

        if !self.can_edit(&budget) {
            return best;
        }

        if let Some(ch) = hay_ch {
            if ch != want && !ch.is_whitespace() && budget.subs < self.profile.intra_sub {
                let next = Budget { gap: 0, subs: budget.subs + 1, ..budget };
                keep_cheaper(&mut best, self.best(i + 1, j + 1, next));
            }
        }

        if i + 1 < m && budget.trns < self.profile.intra_trn {
            let swapped = self.term[i + 1];
            if want != swapped
                && self.hay.get(j) == Some(&swapped)
                && self.hay.get(j + 1) == Some(&want)
            {
                let next = Budget { gap: 0, trns: budget.trns + 1, ..budget };
                keep_cheaper(&mut best, self.best(i + 2, j + 2, next));
            }
        }

        if budget.dels < self.profile.intra_del {
            let next = Budget { gap: 0, dels: budget.dels + 1, ..budget };
            keep_cheaper(&mut best, self.best(i + 1, j, next));
        }

        best
    }
}

fn keep_cheaper(best: &mut Option<TermMatch>, candidate: Option<TermMatch>) {
    let Some(candidate) = candidate else {
        return;
    };
    if best.map_or(true, |current| candidate.cost() < current.cost()) {
        *best = Some(candidate);
    }
}

/// Cheapest alignment of `term` starting exactly at `hay[start]`.
///
/// The first character must match verbatim; later characters may be reached through the
/// insertions and edits the profile allows.
pub(crate) fn align_term(
    term: &[char],
    hay: &[char],
    start: usize,
    profile: &MatchProfile,
) -> Option<TermMatch> {
    if term.is_empty() || hay.get(start) != term.first() {
        return None;
    }

    let aligner = Aligner {
        term,
        hay,
        profile,
        edits_allowed: term.len() >= MIN_EDIT_TERM_LEN,
        start,
    };
    aligner.best(0, start, Budget::default())
}

pub(crate) fn left_edge_ok(hay: &[char], start: usize, rule: Boundary) -> bool {
    let before = start.checked_sub(1).and_then(|idx| hay.get(idx)).copied();
    edge_ok(before, rule)
}

pub(crate) fn right_edge_ok(hay: &[char], end: usize, rule: Boundary) -> bool {
    edge_ok(hay.get(end).copied(), rule)
}

fn edge_ok(neighbour: Option<char>, rule: Boundary) -> bool {
    match (rule, neighbour) {
        (Boundary::Any, _) | (_, None) => true,
        (Boundary::Loose, Some(ch)) => !ch.is_alphanumeric(),
        (Boundary::Strict, Some(ch)) => ch.is_whitespace(),
    }
}

pub(crate) fn starts_word(hay: &[char], start: usize) -> bool {
    left_edge_ok(hay, start, Boundary::Loose)
}

/// Matches `terms` left to right without overlap, honouring the inter-term slack.
pub(crate) fn align_terms(
    terms: &[&[char]],
    hay: &[char],
    profile: &MatchProfile,
) -> Option<Vec<TermMatch>> {
    let mut out = Vec::with_capacity(terms.len());
    if align_from(terms, hay, profile, 0, None, &mut out) {
        Some(out)
    } else {
        None
    }
}

fn align_from(
    terms: &[&[char]],
    hay: &[char],
    profile: &MatchProfile,
    from: usize,
    prev_end: Option<usize>,
    out: &mut Vec<TermMatch>,
) -> bool {
    let Some((term, rest)) = terms.split_first() else {
        return true;
    };

    for start in from..hay.len() {
        if let (Some(prev_end), Some(max)) = (prev_end, profile.inter_ins) {
            if start - prev_end > max {
                break;
            }
        }
        if !left_edge_ok(hay, start, profile.inter_lft) {
            continue;
        }
        let Some(found) = align_term(term, hay, start, profile) else {
            continue;
        };
        if !right_edge_ok(hay, found.end, profile.inter_rgt) {
            continue;
        }

        out.push(found);
        if align_from(rest, hay, profile, found.end, Some(found.end), out) {
            return true;
        }
        out.pop();
    }

    false
}

#[cfg(test)]
mod tests {
    use super::{align_term, align_terms, TermMatch};
    use crate::matcher::{Boundary, MatchProfile};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn exact_term_has_no_cost() {
        let hay = chars("tabac");
        let found = align_term(&chars("tab"), &hay, 0, &MatchProfile::default()).expect("match");
        assert_eq!(found, TermMatch { start: 0, end: 3, edits: 0, inserted: 0 });
    }

    #[test]
    fn single_insertions_bridge_gaps() {
        let hay = chars("tabac");
        let found = align_term(&chars("tbc"), &hay, 0, &MatchProfile::default()).expect("match");
        assert_eq!(found.inserted, 2);
        assert_eq!(found.edits, 0);
        assert_eq!(found.end, 5);
    }

    #[test]
    fn insertions_do_not_cross_words() {
        let hay = chars("ta bac");
        assert_eq!(align_term(&chars("tb"), &hay, 0, &MatchProfile::default()), None);
    }

    #[test]
    fn transposition_counts_as_one_edit() {
        let hay = chars("proraso");
        let found = align_term(&chars("porraso"), &hay, 0, &MatchProfile::default())
            .expect("match");
        assert_eq!(found.edits, 1);
    }

    #[test]
    fn first_character_must_match() {
        let hay = chars("tabac");
        assert_eq!(align_term(&chars("xabac"), &hay, 0, &MatchProfile::default()), None);
    }

    #[test]
    fn short_terms_get_no_edits() {
        let hay = chars("tx");
        assert_eq!(align_term(&chars("ty"), &hay, 0, &MatchProfile::default()), None);
    }

    #[test]
    fn strict_boundaries_require_whitespace() {
        let profile = MatchProfile {
            intra_ins: 0,
            intra_errors: 0,
            inter_lft: Boundary::Strict,
            inter_rgt: Boundary::Strict,
            ..MatchProfile::default()
        };
        let hay = chars("super speed");
        assert!(align_terms(&[&chars("speed")], &hay, &profile).is_some());
        assert!(align_terms(&[&chars("spee")], &hay, &profile).is_none());
        assert!(align_terms(&[&chars("per")], &hay, &profile).is_none());
    }

    #[test]
    fn inter_term_slack_is_bounded_when_configured() {
        let profile = MatchProfile { inter_ins: Some(1), ..MatchProfile::default() };
        let hay = chars("gillette super speed");
        assert!(align_terms(&[&chars("super"), &chars("speed")], &hay, &profile).is_some());
        assert!(align_terms(&[&chars("gillette"), &chars("speed")], &hay, &profile).is_none());
    }
}
