// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sotd-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sotd and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::sync::Arc;

use super::vocabulary::{VocabularyKind, VocabularySet};

/// One of the recognized single-character category codes of an order string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryCode {
    Lather,
    Brush,
    Razor,
    Blade,
    PostShave,
    MoarPostShave,
    Fragrance,
    Prep,
}

impl CategoryCode {
    pub const ALL: [CategoryCode; 8] = [
        CategoryCode::Lather,
        CategoryCode::Brush,
        CategoryCode::Razor,
        CategoryCode::Blade,
        CategoryCode::PostShave,
        CategoryCode::MoarPostShave,
        CategoryCode::Fragrance,
        CategoryCode::Prep,
    ];

    /// Order codes are case-sensitive: `B` is a brush, `b` a blade.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'L' => Some(Self::Lather),
            'B' => Some(Self::Brush),
            'R' => Some(Self::Razor),
            'b' => Some(Self::Blade),
            'P' => Some(Self::PostShave),
            'M' => Some(Self::MoarPostShave),
            'F' => Some(Self::Fragrance),
            'p' => Some(Self::Prep),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Lather => 'L',
            Self::Brush => 'B',
            Self::Razor => 'R',
            Self::Blade => 'b',
            Self::PostShave => 'P',
            Self::MoarPostShave => 'M',
            Self::Fragrance => 'F',
            Self::Prep => 'p',
        }
    }

    pub fn def(self) -> &'static CategoryDef {
        match self {
            Self::Lather => &CATEGORY_TABLE[0],
            Self::Brush => &CATEGORY_TABLE[1],
            Self::Razor => &CATEGORY_TABLE[2],
            Self::Blade => &CATEGORY_TABLE[3],
            Self::PostShave => &CATEGORY_TABLE[4],
            Self::MoarPostShave => &CATEGORY_TABLE[5],
            Self::Fragrance => &CATEGORY_TABLE[6],
            Self::Prep => &CATEGORY_TABLE[7],
        }
    }
}

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Static, immutable description of a category before its vocabulary is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDef {
    pub code: CategoryCode,
    pub label: &'static str,
    pub vocabulary: VocabularyKind,
    pub prompt: &'static str,
    pub markdown: &'static str,
}

const CATEGORY_TABLE: [CategoryDef; 8] = [
    CategoryDef {
        code: CategoryCode::Lather,
        label: "Lather",
        vocabulary: VocabularyKind::Lathers,
        prompt: "Search for Lather",
        markdown: "* **Lather:** ",
    },
    CategoryDef {
        code: CategoryCode::Brush,
        label: "Brush",
        vocabulary: VocabularyKind::Brushes,
        prompt: "Search for Brush",
        markdown: "* **Brush:** ",
    },
    CategoryDef {
        code: CategoryCode::Razor,
        label: "Razor",
        vocabulary: VocabularyKind::Razors,
        prompt: "Search for Razor",
        markdown: "* **Razor:** ",
    },
    CategoryDef {
        code: CategoryCode::Blade,
        label: "Blade",
        vocabulary: VocabularyKind::Blades,
        prompt: "Search for Blade",
        markdown: "* **Blade:** ",
    },
    CategoryDef {
        code: CategoryCode::PostShave,
        label: "Post Shave",
        vocabulary: VocabularyKind::PostShaves,
        prompt: "Search for Post Shave",
        markdown: "* **Post Shave:** ",
    },
    CategoryDef {
        code: CategoryCode::MoarPostShave,
        label: "Moar Post Shave",
        vocabulary: VocabularyKind::PostShaves,
        prompt: "Search for Moar Post Shave",
        markdown: "* **Post Shave:** ",
    },
    CategoryDef {
        code: CategoryCode::Fragrance,
        label: "Fragrance",
        vocabulary: VocabularyKind::Fragrances,
        prompt: "Search for Fragrance",
        markdown: "* **Fragrance:** ",
    },
    CategoryDef {
        code: CategoryCode::Prep,
        label: "Prep",
        vocabulary: VocabularyKind::Preps,
        prompt: "Search for Prep",
        markdown: "* **Prep:** ",
    },
];

/// A category with its vocabulary bound. Cheap to clone; the vocabulary is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    def: &'static CategoryDef,
    vocabulary: Arc<[String]>,
}

impl Category {
    pub fn resolve(code: CategoryCode, vocabularies: &VocabularySet) -> Self {
        let def = code.def();
        Self { def, vocabulary: vocabularies.get(def.vocabulary) }
    }

    pub fn code(&self) -> CategoryCode {
        self.def.code
    }

    pub fn label(&self) -> &'static str {
        self.def.label
    }

    pub fn prompt(&self) -> &'static str {
        self.def.prompt
    }

    pub fn markdown(&self) -> &'static str {
        self.def.markdown
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }
}
