// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sotd-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sotd and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Getting the finished document out of the terminal.

use std::io::{self, Write};

use crate::document::Document;

pub trait Exporter {
    /// Short name shown to the user after a successful export.
    fn name(&self) -> &'static str;

    fn export(&mut self, document: &Document) -> io::Result<()>;
}

/// Copies the document to the system clipboard through the terminal (OSC 52).
#[derive(Debug)]
pub struct Osc52Exporter<W> {
    out: W,
}

impl Osc52Exporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Osc52Exporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Exporter for Osc52Exporter<W> {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn export(&mut self, document: &Document) -> io::Result<()> {
        self.out.write_all(osc52_sequence(&document.to_text()).as_bytes())?;
        self.out.flush()
    }
}

/// Writes the document as plain markdown text.
#[derive(Debug)]
pub struct TextExporter<W> {
    out: W,
}

impl<W: Write> TextExporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Exporter for TextExporter<W> {
    fn name(&self) -> &'static str {
        "text"
    }

    fn export(&mut self, document: &Document) -> io::Result<()> {
        self.out.write_all(document.to_text().as_bytes())?;
        self.out.flush()
    }
}

pub fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}
