// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sotd-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sotd and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! SOTD document assembly.
//!
//! The cycling wizard prints one line per slot in sequence order; the manual wizard prints its
//! committed lines in commit order. Either way the document is derived on demand and never
//! stored on its own.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::model::{CategoryCode, CategorySequence};

/// Format of the optional date line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateMode {
    /// `Fri Oct 16 2026`
    Full,
    /// `10/16/2026`
    Locale,
    #[default]
    Omitted,
}

impl DateMode {
    pub fn format(self, date: NaiveDate) -> Option<String> {
        match self {
            Self::Full => Some(date.format("%a %b %d %Y").to_string()),
            Self::Locale => Some(date.format("%-m/%-d/%Y").to_string()),
            Self::Omitted => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Locale => "locale",
            Self::Omitted => "none",
        }
    }
}

impl FromStr for DateMode {
    type Err = ParseDateModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "locale" => Ok(Self::Locale),
            "none" | "off" | "omit" | "omitted" => Ok(Self::Omitted),
            _ => Err(ParseDateModeError { value: s.to_owned() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDateModeError {
    value: String,
}

impl fmt::Display for ParseDateModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid date mode {:?} (expected full, locale or none)", self.value)
    }
}

impl Error for ParseDateModeError {}

/// One committed line of the manual wizard, tagged with the category it came from (`None` for
/// date lines).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLine {
    category: Option<CategoryCode>,
    text: String,
}

impl DocumentLine {
    pub fn entry(category: CategoryCode, markdown: &str, value: &str) -> Self {
        Self { category: Some(category), text: format!("{markdown}{value}") }
    }

    pub fn date(text: String) -> Self {
        Self { category: None, text }
    }

    pub fn category(&self) -> Option<CategoryCode> {
        self.category
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Markdown text with a hard line break after every line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push_str("  \n");
        }
        out
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Every slot is printed, committed or not.
// NOTE: empty slots still produce a bare prefix line. An earlier revision skipped them; the
// current output keeps them, see DESIGN.md.
pub fn assemble_slots(
    sequence: &CategorySequence,
    slots: &[String],
    date_line: Option<String>,
) -> Document {
    let mut lines = Vec::with_capacity(sequence.len() + 1);
    lines.extend(date_line);
    for (idx, category) in sequence.iter().enumerate() {
        let value = slots.get(idx).map(String::as_str).unwrap_or("");
        lines.push(format!("{}{value}", category.markdown()));
    }
    Document { lines }
}

pub fn assemble_lines(committed: &[DocumentLine]) -> Document {
    Document { lines: committed.iter().map(|line| line.text().to_owned()).collect() }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;

    use super::{assemble_lines, assemble_slots, DateMode, DocumentLine};
    use crate::model::{CategoryCode, CategorySequence, VocabularySet, DEFAULT_CYCLE_ORDER};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).expect("date")
    }

    #[rstest]
    #[case(DateMode::Full, Some("Fri Oct 16 2026"))]
    #[case(DateMode::Locale, Some("10/16/2026"))]
    #[case(DateMode::Omitted, None)]
    fn date_modes_format(#[case] mode: DateMode, #[case] expected: Option<&str>) {
        assert_eq!(mode.format(date()).as_deref(), expected);
    }

    #[rstest]
    #[case("full", DateMode::Full)]
    #[case(" Locale ", DateMode::Locale)]
    #[case("none", DateMode::Omitted)]
    #[case("off", DateMode::Omitted)]
    fn date_modes_parse(#[case] raw: &str, #[case] expected: DateMode) {
        assert_eq!(raw.parse::<DateMode>(), Ok(expected));
    }

    #[test]
    fn unknown_date_mode_is_rejected() {
        let err = "yesterday".parse::<DateMode>().unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn every_slot_is_printed_even_when_empty() {
        let sequence = CategorySequence::from_order(
            Some("LBR"),
            DEFAULT_CYCLE_ORDER,
            None,
            &VocabularySet::builtin(),
        )
        .expect("sequence");
        let slots = vec!["Tabac".to_owned(), String::new(), "Synthetic".to_owned()];

        let document = assemble_slots(&sequence, &slots, None);

        assert_eq!(
            document.lines(),
            ["* **Lather:** Tabac", "* **Brush:** ", "* **Razor:** Synthetic"]
        );
        assert_eq!(document.to_text().lines().count(), 3);
    }

    #[test]
    fn date_line_leads_the_slots() {
        let sequence =
            CategorySequence::from_order(Some("L"), DEFAULT_CYCLE_ORDER, None, &VocabularySet::builtin())
                .expect("sequence");
        let document =
            assemble_slots(&sequence, &["Tabac".to_owned()], DateMode::Locale.format(date()));
        assert_eq!(document.lines(), ["10/16/2026", "* **Lather:** Tabac"]);
        assert_eq!(document.to_text(), "10/16/2026  \n* **Lather:** Tabac  \n");
    }

    #[test]
    fn committed_lines_keep_commit_order() {
        let committed = vec![
            DocumentLine::entry(CategoryCode::Razor, "* **Razor:** ", "Rockwell - 6S"),
            DocumentLine::date("Fri Oct 16 2026".to_owned()),
            DocumentLine::entry(CategoryCode::Lather, "* **Lather:** ", "Tabac"),
        ];
        let document = assemble_lines(&committed);
        assert_eq!(
            document.lines(),
            ["* **Razor:** Rockwell - 6S", "Fri Oct 16 2026", "* **Lather:** Tabac"]
        );
        assert_eq!(committed[1].category(), None);
    }
}
