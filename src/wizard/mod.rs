// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sotd-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sotd and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Category wizard state machine.
//!
//! A [`Wizard`] owns the selection state and the current search session. Every input is applied
//! synchronously through [`Wizard::handle_event`] (or the matching method) and leaves the wizard
//! in a consistent state before the next one arrives.
//!
//! Two variants exist:
//! - [`WizardMode::Cycle`] walks the category sequence, overwrites one slot per category and
//!   moves on after every commit attempt.
//! - [`WizardMode::Manual`] starts with no category, appends one line per commit and supports
//!   undo.

use chrono::NaiveDate;

use crate::document::{assemble_lines, assemble_slots, DateMode, Document, DocumentLine};
use crate::matcher::{FuzzyMatcher, Matcher};
use crate::model::{Category, CategoryCode, CategorySequence};

mod search;
mod selection;

pub use search::SearchSession;
pub use selection::{SelectionBuffer, SelectionState};

/// Upper bound on candidates kept per search.
pub const MAX_RESULTS: usize = 1000;
/// Prompt shown by the manual wizard while no category is chosen.
pub const IDLE_PROMPT: &str = "Choose a product.";
/// Prompt shown after typing without a chosen category.
pub const NO_CATEGORY_PROMPT: &str = "First choose a product, then search here.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardMode {
    #[default]
    Cycle,
    Manual,
}

/// Closed set of inputs understood by the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Input(char),
    Backspace,
    SetQuery(String),
    /// Commit-style key: commits the focused candidate if there is one, otherwise resolves the
    /// typed text against the candidate list.
    Enter,
    /// Commit the typed text as-is.
    UseTyped,
    FocusCandidates,
    FocusMove(isize),
    /// Pointer selection of the candidate at this index.
    SelectCandidate(usize),
    Advance,
    Retreat,
    SelectSlot(usize),
    ChooseCategory(CategoryCode),
    Undo,
    InsertDate,
}

#[derive(Debug, Clone)]
pub struct Wizard<M = FuzzyMatcher> {
    mode: WizardMode,
    sequence: CategorySequence,
    matcher: M,
    selection: SelectionState,
    search: SearchSession,
    prompt: &'static str,
    date_mode: DateMode,
    today: NaiveDate,
}

impl Wizard<FuzzyMatcher> {
    pub fn new(mode: WizardMode, sequence: CategorySequence) -> Self {
        Self::with_matcher(mode, sequence, FuzzyMatcher::default())
    }
}

impl<M: Matcher> Wizard<M> {
    pub fn with_matcher(mode: WizardMode, sequence: CategorySequence, matcher: M) -> Self {
        let (selection, prompt) = match mode {
            WizardMode::Cycle => {
                let prompt = sequence.get(0).map_or(IDLE_PROMPT, Category::prompt);
                (SelectionState::slots(sequence.len()), prompt)
            }
            WizardMode::Manual => (SelectionState::lines(), IDLE_PROMPT),
        };

        Self {
            mode,
            sequence,
            matcher,
            selection,
            search: SearchSession::default(),
            prompt,
            date_mode: DateMode::Omitted,
            today: chrono::Local::now().date_naive(),
        }
    }

    pub fn with_date_mode(mut self, date_mode: DateMode) -> Self {
        self.date_mode = date_mode;
        self
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn mode(&self) -> WizardMode {
        self.mode
    }

    pub fn sequence(&self) -> &CategorySequence {
        &self.sequence
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn pointer(&self) -> Option<usize> {
        self.selection.pointer()
    }

    pub fn active_category(&self) -> Option<&Category> {
        self.selection.pointer().and_then(|idx| self.sequence.get(idx))
    }

    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    pub fn search(&self) -> &SearchSession {
        &self.search
    }

    pub fn query(&self) -> &str {
        self.search.query()
    }

    pub fn candidates(&self) -> &[String] {
        self.search.candidates()
    }

    pub fn focused(&self) -> Option<usize> {
        self.search.focused()
    }

    pub fn document(&self) -> Document {
        match self.selection.buffer() {
            SelectionBuffer::Slots(slots) => {
                assemble_slots(&self.sequence, slots, self.date_mode.format(self.today))
            }
            SelectionBuffer::Lines(lines) => assemble_lines(lines),
        }
    }

    pub fn document_text(&self) -> String {
        self.document().to_text()
    }

    pub fn handle_event(&mut self, event: WizardEvent) {
        match event {
            WizardEvent::Input(ch) => self.push_char(ch),
            WizardEvent::Backspace => self.pop_char(),
            WizardEvent::SetQuery(query) => self.set_query(&query),
            WizardEvent::Enter => {
                if self.search.focused().is_some() {
                    self.commit_focused();
                } else {
                    self.resolve_enter();
                }
            }
            WizardEvent::UseTyped => self.use_typed(),
            WizardEvent::FocusCandidates => self.focus_candidates(),
            WizardEvent::FocusMove(delta) => self.focus_move(delta),
            WizardEvent::SelectCandidate(idx) => {
                if let Some(text) = self.search.candidates().get(idx).cloned() {
                    self.select_candidate(&text);
                }
            }
            WizardEvent::Advance => self.advance(),
            WizardEvent::Retreat => self.retreat(),
            WizardEvent::SelectSlot(idx) => self.select_slot(idx),
            WizardEvent::ChooseCategory(code) => self.choose_category(code),
            WizardEvent::Undo => self.undo(),
            WizardEvent::InsertDate => self.insert_date(),
        }
    }

    pub fn push_char(&mut self, ch: char) {
        let mut query = self.search.query().to_owned();
        query.push(ch);
        self.set_query(&query);
    }

    pub fn pop_char(&mut self) {
        let mut query = self.search.query().to_owned();
        if query.pop().is_some() {
            self.set_query(&query);
        }
    }

    /// Replaces the query and re-runs the search. Without an active vocabulary the input is
    /// reset instead.
    pub fn set_query(&mut self, query: &str) {
        let Some(category) = self.active_category() else {
            self.search = SearchSession::default();
            self.prompt = NO_CATEGORY_PROMPT;
            return;
        };

        let vocabulary = category.vocabulary();
        let candidates = self
            .matcher
            .search(vocabulary, query, true, MAX_RESULTS)
            .into_iter()
            .filter_map(|idx| vocabulary.get(idx))
            .filter(|text| !text.trim().is_empty())
            .cloned()
            .collect::<Vec<_>>();
        tracing::debug!(query, hits = candidates.len(), "search");

        self.search = SearchSession::new(query.to_owned(), candidates);
        if self.mode == WizardMode::Manual {
            self.search.focus_first();
        }
    }

    /// Stores `text` for the active category. Blank text is ignored and never clears a value.
    ///
    /// Returns whether anything was stored.
    pub fn commit(&mut self, text: &str) -> bool {
        let value = text.trim();
        if value.is_empty() {
            return false;
        }
        let Some(idx) = self.selection.pointer() else {
            tracing::warn!(value, "commit without an active category ignored");
            return false;
        };
        let Some(category) = self.sequence.get(idx) else {
            return false;
        };

        tracing::debug!(slot = idx, category = %category.code(), value, "commit");
        self.selection.store(idx, category, value);
        true
    }

    /// Cycling wizard: moves to the next slot. Manual wizard: only resets the search.
    pub fn advance(&mut self) {
        match self.mode {
            WizardMode::Cycle => {
                let next = self.selection.pointer().map_or(0, |idx| self.sequence.next(idx));
                self.enter_slot(next);
            }
            WizardMode::Manual => self.reset_search(),
        }
    }

    pub fn retreat(&mut self) {
        if self.mode != WizardMode::Cycle {
            return;
        }
        let prev = self.selection.pointer().map_or(0, |idx| self.sequence.prev(idx));
        self.enter_slot(prev);
    }

    /// Jumps straight to a slot (cycling) or binds the category at that position (manual).
    pub fn select_slot(&mut self, idx: usize) {
        if idx >= self.sequence.len() {
            return;
        }
        self.enter_slot(idx);
    }

    pub fn choose_category(&mut self, code: CategoryCode) {
        match self.sequence.position(code) {
            Some(idx) => self.enter_slot(idx),
            None => tracing::debug!(category = %code, "category not offered"),
        }
    }

    /// Enter with no focused candidate.
    ///
    /// No candidates: the typed text is committed as-is. Exactly one: that candidate is
    /// committed whatever was typed. More than one: nothing happens until a candidate is picked.
    pub fn resolve_enter(&mut self) {
        match self.search.candidates() {
            [] => {
                let typed = self.search.query().to_owned();
                self.commit_and_settle(&typed);
            }
            [only] => {
                let only = only.clone();
                self.commit_and_settle(&only);
            }
            _ => {}
        }
    }

    pub fn use_typed(&mut self) {
        let typed = self.search.query().to_owned();
        self.commit_and_settle(&typed);
    }

    pub fn focus_candidates(&mut self) {
        self.search.focus_first();
    }

    /// Moves candidate focus by `delta`.
    ///
    /// Callers must establish focus first; a move without it is a bug in the caller.
    pub fn focus_move(&mut self, delta: isize) {
        let moved = self.search.move_focus(delta);
        debug_assert!(moved, "focus move requested without a focused candidate");
        if !moved {
            tracing::error!(delta, "focus move requested without a focused candidate");
        }
    }

    pub fn commit_focused(&mut self) {
        if let Some(text) = self.search.focused_candidate().map(str::to_owned) {
            self.commit_and_settle(&text);
        }
    }

    /// Commits an explicitly picked candidate, bypassing [`Wizard::resolve_enter`].
    pub fn select_candidate(&mut self, text: &str) {
        self.commit_and_settle(text);
    }

    /// Manual wizard: drops the most recent line. If it came from the active category, the
    /// category is unbound and search is disabled until another one is chosen.
    pub fn undo(&mut self) {
        let Some(removed) = self.selection.pop_line() else {
            return;
        };
        tracing::debug!(line = removed.text(), "undo");

        let active = self.active_category().map(Category::code);
        if removed.category().is_some() && removed.category() == active {
            self.unbind_category();
        }
    }

    /// Manual wizard: appends today's date as its own line and unbinds the active category.
    pub fn insert_date(&mut self) {
        if self.mode != WizardMode::Manual {
            return;
        }
        let mode = match self.date_mode {
            DateMode::Omitted => DateMode::Full,
            mode => mode,
        };
        if let Some(text) = mode.format(self.today) {
            self.selection.push_line(DocumentLine::date(text));
        }
        self.unbind_category();
    }

    fn commit_and_settle(&mut self, text: &str) {
        self.commit(text);
        self.advance();
    }

    fn enter_slot(&mut self, idx: usize) {
        self.selection.set_pointer(Some(idx));
        self.prompt = self.sequence.get(idx).map_or(IDLE_PROMPT, Category::prompt);
        self.reset_search();
        tracing::debug!(slot = idx, "enter category");
    }

    fn unbind_category(&mut self) {
        self.selection.set_pointer(None);
        self.prompt = IDLE_PROMPT;
        self.reset_search();
    }

    fn reset_search(&mut self) {
        self.search = SearchSession::default();
    }
}
