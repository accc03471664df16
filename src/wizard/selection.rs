// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sotd-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sotd and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::document::DocumentLine;
use crate::model::Category;

/// Committed values: one overwritable slot per sequence position, or an append-only list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionBuffer {
    Slots(Vec<String>),
    Lines(Vec<DocumentLine>),
}

/// Position pointer plus everything committed so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pointer: Option<usize>,
    buffer: SelectionBuffer,
}

impl SelectionState {
    pub(crate) fn slots(len: usize) -> Self {
        Self { pointer: Some(0), buffer: SelectionBuffer::Slots(vec![String::new(); len]) }
    }

    pub(crate) fn lines() -> Self {
        Self { pointer: None, buffer: SelectionBuffer::Lines(Vec::new()) }
    }

    pub fn pointer(&self) -> Option<usize> {
        self.pointer
    }

    pub(crate) fn set_pointer(&mut self, pointer: Option<usize>) {
        self.pointer = pointer;
    }

    pub fn buffer(&self) -> &SelectionBuffer {
        &self.buffer
    }

    pub fn slot(&self, idx: usize) -> Option<&str> {
        match &self.buffer {
            SelectionBuffer::Slots(slots) => slots.get(idx).map(String::as_str),
            SelectionBuffer::Lines(_) => None,
        }
    }

    /// `value` must already be trimmed and non-empty.
    pub(crate) fn store(&mut self, idx: usize, category: &Category, value: &str) {
        match &mut self.buffer {
            SelectionBuffer::Slots(slots) => {
                if let Some(slot) = slots.get_mut(idx) {
                    value.clone_into(slot);
                }
            }
            SelectionBuffer::Lines(lines) => {
                lines.push(DocumentLine::entry(category.code(), category.markdown(), value));
            }
        }
    }

    pub(crate) fn push_line(&mut self, line: DocumentLine) {
        if let SelectionBuffer::Lines(lines) = &mut self.buffer {
            lines.push(line);
        }
    }

    pub(crate) fn pop_line(&mut self) -> Option<DocumentLine> {
        match &mut self.buffer {
            SelectionBuffer::Lines(lines) => lines.pop(),
            SelectionBuffer::Slots(_) => None,
        }
    }
}
