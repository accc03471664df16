// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sotd-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sotd and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Categories are resolved from an order string into a [`CategorySequence`], each bound to a
//! shared, read-only vocabulary.

mod builtin;
pub mod category;
pub mod sequence;
pub mod vocabulary;

pub use category::{Category, CategoryCode, CategoryDef};
pub use sequence::{
    parse_order, CategorySequence, SequenceError, DEFAULT_CYCLE_ORDER, DEFAULT_MANUAL_ORDER,
    MAX_CYCLE_SLOTS,
};
pub use vocabulary::{VocabularyError, VocabularyKind, VocabularySet};
