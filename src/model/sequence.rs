// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sotd-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sotd and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::error::Error;
use std::fmt;

use super::category::{Category, CategoryCode};
use super::vocabulary::VocabularySet;

/// Order used by the cycling wizard when none is configured.
pub const DEFAULT_CYCLE_ORDER: &str = "LBRbPM";
/// Product buttons offered by the manual wizard when no order is configured.
pub const DEFAULT_MANUAL_ORDER: &str = "LBRbFPp";
/// The cycling wizard has six slots; longer orders are truncated.
pub const MAX_CYCLE_SLOTS: usize = 6;

/// Keeps the recognized codes of `order` in their original relative order, dropping everything
/// else, then truncates to `cap` entries when a cap is given.
pub fn parse_order(order: &str, cap: Option<usize>) -> Vec<CategoryCode> {
    let codes = order.chars().filter_map(CategoryCode::from_char);
    match cap {
        Some(cap) => codes.take(cap).collect(),
        None => codes.collect(),
    }
}

/// Ordered, possibly repeating list of categories. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySequence {
    slots: Vec<Category>,
}

impl CategorySequence {
    pub fn new(slots: Vec<Category>) -> Result<Self, SequenceError> {
        if slots.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self { slots })
    }

    /// Resolves an order string against `vocabularies`.
    ///
    /// A missing or blank order selects `default_order`. An order with no recognized code at all
    /// is rejected rather than silently replaced.
    pub fn from_order(
        order: Option<&str>,
        default_order: &str,
        cap: Option<usize>,
        vocabularies: &VocabularySet,
    ) -> Result<Self, SequenceError> {
        let order = match order.map(str::trim) {
            Some(order) if !order.is_empty() => order,
            _ => default_order,
        };

        let codes = parse_order(order, cap);
        let dropped = order.chars().filter(|ch| CategoryCode::from_char(*ch).is_none()).count();
        if dropped > 0 {
            tracing::debug!(order, dropped, "ignored unrecognized category codes");
        }

        let slots =
            codes.into_iter().map(|code| Category::resolve(code, vocabularies)).collect::<Vec<_>>();
        Self::new(slots)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Category> {
        self.slots.get(idx)
    }

    pub fn next(&self, idx: usize) -> usize {
        (idx + 1) % self.slots.len()
    }

    pub fn prev(&self, idx: usize) -> usize {
        let n = self.slots.len();
        (idx % n + n - 1) % n
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> + '_ {
        self.slots.iter()
    }

    /// First slot bound to `code`, if any.
    pub fn position(&self, code: CategoryCode) -> Option<usize> {
        self.slots.iter().position(|category| category.code() == code)
    }

    pub fn codes(&self) -> String {
        self.slots.iter().map(|category| category.code().as_char()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    Empty,
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str(
                "category order contains no recognized codes (expected some of L B R b P M F p)",
            ),
        }
    }
}

impl Error for SequenceError {}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{
        parse_order, CategorySequence, SequenceError, DEFAULT_CYCLE_ORDER, MAX_CYCLE_SLOTS,
    };
    use crate::model::{CategoryCode, VocabularySet};

    fn sequence(order: &str) -> CategorySequence {
        CategorySequence::from_order(Some(order), DEFAULT_CYCLE_ORDER, None, &VocabularySet::builtin())
            .expect("sequence")
    }

    #[rstest]
    #[case("LBRbPM", "LBRbPM")]
    #[case("xLyB?", "LB")]
    #[case("RbBLPM", "RbBLPM")]
    #[case("LLLL", "LLLL")]
    #[case("l r", "")]
    #[case("pFMP", "pFMP")]
    fn filtering_keeps_recognized_codes_in_order(#[case] order: &str, #[case] expected: &str) {
        let codes: String = parse_order(order, None).into_iter().map(CategoryCode::as_char).collect();
        assert_eq!(codes, expected);
    }

    #[test]
    fn cap_truncates_after_filtering() {
        let codes = parse_order("L?BRbPMFp", Some(MAX_CYCLE_SLOTS));
        assert_eq!(codes.len(), MAX_CYCLE_SLOTS);
        assert_eq!(codes.last(), Some(&CategoryCode::MoarPostShave));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn missing_order_selects_default(#[case] order: Option<&str>) {
        let seq = CategorySequence::from_order(
            order,
            DEFAULT_CYCLE_ORDER,
            Some(MAX_CYCLE_SLOTS),
            &VocabularySet::builtin(),
        )
        .expect("sequence");
        assert_eq!(seq.codes(), DEFAULT_CYCLE_ORDER);
    }

    #[test]
    fn order_without_recognized_codes_is_rejected() {
        let err = CategorySequence::from_order(
            Some("xyz"),
            DEFAULT_CYCLE_ORDER,
            None,
            &VocabularySet::builtin(),
        )
        .unwrap_err();
        assert_eq!(err, SequenceError::Empty);
    }

    #[test]
    fn next_and_prev_wrap_cyclically() {
        for order in ["L", "LB", "LBR", "LBRbPM"] {
            let seq = sequence(order);
            let n = seq.len();
            for i in 0..n {
                assert_eq!(seq.next(i), (i + 1) % n, "next({i}) in {order}");
                assert_eq!(seq.prev(i), (i + n - 1) % n, "prev({i}) in {order}");
            }
        }
    }

    #[test]
    fn duplicate_codes_share_a_vocabulary() {
        let seq = sequence("PMP");
        assert_eq!(seq.len(), 3);
        let first = seq.get(0).expect("slot 0");
        let last = seq.get(2).expect("slot 2");
        assert_eq!(first.vocabulary(), last.vocabulary());
        assert_eq!(seq.get(1).map(|c| c.label()), Some("Moar Post Shave"));
    }
}
