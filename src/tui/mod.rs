// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sotd-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sotd and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Drives a [`Wizard`] from keyboard input (ratatui + crossterm). Printable keys always go to the
//! search input, so every other action sits on Ctrl/Alt chords or non-character keys.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::document::Document;
use crate::export::{Exporter, Osc52Exporter};
use crate::model::CategoryCode;
use crate::wizard::{SelectionBuffer, Wizard, WizardEvent, WizardMode};

const FOCUS_COLOR: Color = Color::LightGreen;
const DOCUMENT_COLOR: Color = Color::Gray;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🆂 🅾 🆃 🅳 ";

/// Runs the interactive terminal UI until the user quits and returns the final document.
pub fn run(wizard: Wizard) -> Result<Document, Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(wizard);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    tracing::info!(lines = app.wizard.document().lines().len(), "session finished");
    Ok(app.wizard.document())
}

/// What a key press means before it reaches the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
enum KeyAction {
    Wizard(WizardEvent),
    Copy,
    ToggleHelp,
    Quit,
}

fn map_key(key: KeyEvent, has_focus: bool) -> Option<KeyAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    let action = match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::F(1) => KeyAction::ToggleHelp,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('y') if ctrl => KeyAction::Copy,
        KeyCode::Char('t') if ctrl => KeyAction::Wizard(WizardEvent::UseTyped),
        KeyCode::Char('z') if ctrl => KeyAction::Wizard(WizardEvent::Undo),
        KeyCode::Char('d') if ctrl => KeyAction::Wizard(WizardEvent::InsertDate),
        KeyCode::Char('u') if ctrl => KeyAction::Wizard(WizardEvent::SetQuery(String::new())),
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char(ch) if alt => match ch.to_digit(10) {
            Some(0) => return None,
            Some(digit) => KeyAction::Wizard(WizardEvent::SelectSlot(digit as usize - 1)),
            None => KeyAction::Wizard(WizardEvent::ChooseCategory(CategoryCode::from_char(ch)?)),
        },
        KeyCode::Char(ch) => KeyAction::Wizard(WizardEvent::Input(ch)),
        KeyCode::Backspace => KeyAction::Wizard(WizardEvent::Backspace),
        KeyCode::Enter => KeyAction::Wizard(WizardEvent::Enter),
        KeyCode::Tab => KeyAction::Wizard(WizardEvent::Advance),
        KeyCode::BackTab => KeyAction::Wizard(WizardEvent::Retreat),
        KeyCode::Down if has_focus => KeyAction::Wizard(WizardEvent::FocusMove(1)),
        KeyCode::Down => KeyAction::Wizard(WizardEvent::FocusCandidates),
        KeyCode::Up if has_focus => KeyAction::Wizard(WizardEvent::FocusMove(-1)),
        _ => return None,
    };
    Some(action)
}

struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    wizard: Wizard,
    should_quit: bool,
    show_help: bool,
    toast: Option<Toast>,
    candidates_state: ListState,
}

impl App {
    fn new(wizard: Wizard) -> Self {
        Self {
            wizard,
            should_quit: false,
            show_help: false,
            toast: None,
            candidates_state: ListState::default(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1)) {
                self.show_help = false;
            }
            return;
        }

        let Some(action) = map_key(key, self.wizard.focused().is_some()) else {
            return;
        };
        match action {
            KeyAction::Wizard(event) => self.wizard.handle_event(event),
            KeyAction::Copy => self.copy_document(),
            KeyAction::ToggleHelp => self.show_help = true,
            KeyAction::Quit => self.should_quit = true,
        }
        self.candidates_state.select(self.wizard.focused());
    }

    fn copy_document(&mut self) {
        let document = self.wizard.document();
        if document.is_empty() {
            self.set_toast("Nothing to copy yet");
            return;
        }

        let mut exporter = Osc52Exporter::stdout();
        match exporter.export(&document) {
            Ok(()) => self.set_toast(format!("Copied SOTD ({})", exporter.name())),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard export failed");
                self.set_toast(format!("Clipboard error: {err}"));
            }
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(2),
        });
    }

    fn toast_suffix(&mut self) -> String {
        if self.toast.as_ref().is_some_and(|toast| toast.expires_at <= Instant::now()) {
            self.toast = None;
        }
        self.toast.as_ref().map(|toast| format!(" | {}", toast.message)).unwrap_or_default()
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let input_area = layout[0];
    let main_area = layout[1];
    let status_area = layout[2];

    let direction = if stack_panes_vertically(main_area) {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let panes = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_area);
    let candidates_area = panes[0];
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.wizard.sequence().len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(panes[1]);
    let categories_area = side[0];
    let document_area = side[1];

    let query = app.wizard.query().to_owned();
    let input = Paragraph::new(query.clone()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(view_title(app.wizard.prompt(), None))
            .border_style(Style::default().fg(FOCUS_COLOR)),
    );
    frame.render_widget(input, input_area);

    let candidate_items = app
        .wizard
        .candidates()
        .iter()
        .map(|candidate| ListItem::new(Line::from(candidate.clone())))
        .collect::<Vec<_>>();
    let candidates_title = view_title(
        "Candidates",
        Some(&candidates_counter_label(app.wizard.focused(), app.wizard.candidates().len())),
    );
    let candidates = List::new(candidate_items)
        .block(Block::default().borders(Borders::ALL).title(candidates_title))
        .highlight_style(candidate_highlight_style());
    app.candidates_state.select(app.wizard.focused());
    frame.render_stateful_widget(candidates, candidates_area, &mut app.candidates_state);

    let category_items =
        category_lines(&app.wizard).into_iter().map(ListItem::new).collect::<Vec<_>>();
    let categories = List::new(category_items)
        .block(Block::default().borders(Borders::ALL).title(view_title("Products", None)));
    frame.render_widget(categories, categories_area);

    let document_text = app
        .wizard
        .document()
        .lines()
        .iter()
        .map(|line| Line::from(line.clone()))
        .collect::<Vec<_>>();
    let document = Paragraph::new(document_text)
        .style(Style::default().fg(DOCUMENT_COLOR))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(view_title("SOTD", None)));
    frame.render_widget(document, document_area);

    let toast_suffix = app.toast_suffix();
    let status = Paragraph::new(footer_help_line(app.wizard.mode(), &toast_suffix));
    frame.render_widget(status, status_area);
    let brand = Paragraph::new(footer_brand_line()).alignment(Alignment::Right);
    frame.render_widget(brand, status_area);

    if app.show_help {
        render_help(frame, app.wizard.mode(), main_area);
        return;
    }

    let cursor_x = input_area
        .x
        .saturating_add(1)
        .saturating_add(query.chars().count() as u16)
        .min(input_area.x.saturating_add(input_area.width.saturating_sub(2)));
    frame.set_cursor_position((cursor_x, input_area.y.saturating_add(1)));
}

/// One line per category; the active one is marked, cycling slots show their current value.
fn category_lines(wizard: &Wizard) -> Vec<Line<'static>> {
    let pointer = wizard.pointer();
    wizard
        .sequence()
        .iter()
        .enumerate()
        .map(|(idx, category)| {
            let is_active = pointer == Some(idx);
            let marker = if is_active { "▶" } else { " " };
            let label_style = if is_active {
                Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(FOCUS_COLOR)),
                Span::raw(format!(" {} ", idx + 1)),
                Span::styled(category.label().to_owned(), label_style),
            ];
            if let SelectionBuffer::Slots(_) = wizard.selection().buffer() {
                let value = wizard.selection().slot(idx).unwrap_or("");
                if !value.is_empty() {
                    spans.push(Span::styled(
                        format!("  {value}"),
                        Style::default().fg(DOCUMENT_COLOR),
                    ));
                }
            }
            Line::from(spans)
        })
        .collect()
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

// Extracted title/footer/help rendering helpers.
include!("chrome.rs");
