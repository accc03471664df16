// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sotd-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sotd and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Layout, title, footer, help, and style helpers used by TUI rendering.
fn stack_panes_vertically(area: Rect) -> bool {
    area.width < 80
}

fn view_title(label: &str, tail: Option<&str>) -> String {
    let mut title = format!("─ {label}");
    if let Some(tail) = tail {
        let tail = tail.trim();
        if !tail.is_empty() {
            title.push(' ');
            title.push_str(tail);
        }
    }
    title.push(' ');
    title
}

fn candidates_counter_label(focused: Option<usize>, total: usize) -> String {
    if total == 0 {
        return "[0/0]".to_owned();
    }

    let width = total.to_string().len();
    let index = focused.map_or(0, |idx| idx + 1).min(total);
    format!("[{index:0width$}/{total}]")
}

fn candidate_highlight_style() -> Style {
    Style::default().fg(Color::Black).bg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
}

fn footer_help_line(mode: WizardMode, toast_suffix: &str) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();

    push_footer_entry(&mut spans, "PICK", "↑↓ ⏎");
    push_footer_entry(&mut spans, "TYPED", "^T");
    match mode {
        WizardMode::Cycle => {
            push_footer_entry(&mut spans, "NEXT", "⇥");
        }
        WizardMode::Manual => {
            push_footer_entry(&mut spans, "PRODUCT", "M-key");
            push_footer_entry(&mut spans, "UNDO", "^Z");
            push_footer_entry(&mut spans, "DATE", "^D");
        }
    }
    push_footer_entry(&mut spans, "COPY", "^Y");
    push_footer_entry(&mut spans, "HELP", "F1");
    push_footer_entry(&mut spans, "QUIT", "Esc");

    let toast_message = toast_suffix.strip_prefix(" | ").unwrap_or(toast_suffix);
    if !toast_message.is_empty() {
        spans.push(Span::styled(" | ".to_owned(), Style::default().fg(FOOTER_LABEL_COLOR)));
        spans.push(Span::raw(toast_message.to_owned()));
    }

    Line::from(spans)
}

fn footer_brand_line() -> Line<'static> {
    Line::from(vec![Span::styled(
        FOOTER_BRAND.to_owned(),
        Style::default().fg(FOOTER_BRAND_COLOR),
    )])
}

fn help_key_style() -> Style {
    Style::default().fg(FOOTER_KEY_COLOR).add_modifier(Modifier::BOLD)
}

fn help_header_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

fn help_kv(key: &str, desc: &str, key_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:>width$}", width = key_width), key_style),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

fn help_lines(mode: WizardMode) -> Vec<Line<'static>> {
    let key_style = help_key_style();
    let header_style = help_header_style();
    let key_col_width = ["Alt-1..9", "Alt-<code>", "Tab/Shift-Tab", "Backspace"]
        .iter()
        .map(|s| s.len())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::<Line<'static>>::new();

    lines.push(Line::from(Span::styled("--- Search ---", header_style)));
    lines.push(help_kv("Type", "Search the active product list", key_col_width, key_style));
    lines.push(help_kv("Backspace", "Delete query char", key_col_width, key_style));
    lines.push(help_kv("Ctrl-U", "Clear query", key_col_width, key_style));
    lines.push(help_kv("↓/↑", "Focus/move through candidates", key_col_width, key_style));
    lines.push(help_kv(
        "Enter",
        "Take focused or only candidate (typed text if none)",
        key_col_width,
        key_style,
    ));
    lines.push(help_kv("Ctrl-T", "Take the typed text as-is", key_col_width, key_style));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("--- Products ---", header_style)));
    match mode {
        WizardMode::Cycle => {
            lines.push(help_kv("Tab/Shift-Tab", "Next/previous product", key_col_width, key_style));
            lines.push(help_kv("Alt-1..9", "Jump to product", key_col_width, key_style));
        }
        WizardMode::Manual => {
            lines.push(help_kv("Alt-1..9", "Choose product by position", key_col_width, key_style));
            lines.push(help_kv(
                "Alt-<code>",
                "Choose product by code (L B R b P M F p)",
                key_col_width,
                key_style,
            ));
            lines.push(help_kv("Ctrl-Z", "Remove last line", key_col_width, key_style));
            lines.push(help_kv("Ctrl-D", "Insert today's date", key_col_width, key_style));
        }
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("--- Global ---", header_style)));
    lines.push(help_kv("Ctrl-Y", "Copy SOTD to clipboard (OSC 52)", key_col_width, key_style));
    lines.push(help_kv("F1", "Help (toggle)", key_col_width, key_style));
    lines.push(help_kv("Esc", "Quit and print SOTD", key_col_width, key_style));
    lines
}

fn render_help(frame: &mut Frame<'_>, mode: WizardMode, main_area: Rect) {
    let area = centered_rect(82, 84, main_area);
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(Text::from(help_lines(mode)))
        .block(Block::default().borders(Borders::ALL).title(view_title("Help", Some("(F1/Esc)"))))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, value: &str) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ".to_owned(), Style::default().fg(FOOTER_LABEL_COLOR)));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    spans.push(Span::styled(
        value.to_owned(),
        Style::default().fg(FOOTER_KEY_COLOR).add_modifier(Modifier::BOLD),
    ));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}
