// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pitchdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Footer, help overlay, and layout helpers used by TUI rendering.
fn footer_uses_compact_mode(area: Rect) -> bool {
    area.width < 90
}

fn position_label(index: usize, total: usize) -> String {
    let mut buf = itoa::Buffer::new();
    let mut label = buf.format(index).to_owned();
    label.push('/');
    label.push_str(buf.format(total));
    label
}

fn stage_label(cursor: &RevealCursor) -> String {
    match cursor.step() {
        Some(step) => position_label(step + 1, cursor.stage_count()),
        None => position_label(0, cursor.stage_count()),
    }
}

fn footer_line(app: &App, toast: Option<&str>, compact: bool) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    let presentation = &app.presentation;
    let (index, total) = presentation.position();

    if !compact {
        push_footer_entry(&mut spans, &app.theme, "deck", presentation.deck().title());
    }
    push_footer_entry(&mut spans, &app.theme, "slide", presentation.current().as_str());
    push_footer_entry(&mut spans, &app.theme, "pos", &position_label(index, total));
    if let Some(cursor) = presentation.reveal() {
        push_footer_entry(&mut spans, &app.theme, "stage", &stage_label(&cursor));
    }
    if compact {
        push_footer_entry(&mut spans, &app.theme, "help", "?");
    } else {
        push_footer_entry(&mut spans, &app.theme, "nav", "←/→");
        push_footer_entry(&mut spans, &app.theme, "help", "?");
        push_footer_entry(&mut spans, &app.theme, "quit", "q");
    }

    if let Some(message) = toast {
        spans.push(Span::styled(" | ".to_owned(), app.theme.footer_label_style()));
        spans.push(Span::styled(message.to_owned(), app.theme.toast_style()));
    }

    Line::from(spans)
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, theme: &TuiTheme, label: &str, value: &str) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ".to_owned(), theme.footer_label_style()));
    }
    spans.push(Span::styled(format!("{}:", footer_label_ucfirst(label)), theme.footer_label_style()));
    spans.push(Span::styled(value.to_owned(), theme.footer_key_style()));
}

fn footer_label_ucfirst(label: &str) -> String {
    let mut chars = label.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(&chars.as_str().to_lowercase());
    out
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

const HELP_KEYS: [(&str, &str); 8] = [
    ("→, click", "Reveal next stage, then next slide"),
    ("←", "Previous stage, then previous slide"),
    ("Space/Enter", "Reveal next stage (where enabled)"),
    ("↑/↓", "Scroll slide"),
    ("PgUp/PgDn", "Scroll slide by a page"),
    ("Home", "Back to the first slide"),
    ("?", "Help (toggle)"),
    ("q, Esc", "Quit"),
];

fn help_lines(theme: &TuiTheme) -> Vec<Line<'static>> {
    let key_width = HELP_KEYS.iter().map(|(key, _)| key.chars().count()).max().unwrap_or(0);
    let mut lines = vec![
        Line::from(Span::styled("--- Keys ---", theme.heading_style())),
        Line::default(),
    ];
    for (key, desc) in HELP_KEYS {
        lines.push(Line::from(vec![
            Span::styled(format!("{key:>key_width$}"), theme.footer_key_style()),
            Span::raw("  "),
            Span::raw(desc.to_owned()),
        ]));
    }
    lines
}

fn render_help(frame: &mut Frame<'_>, theme: &TuiTheme, main_area: Rect) {
    let area = centered_rect(64, 60, main_area);
    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(help_lines(theme))
        .style(theme.base_style())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" Help "),
        );
    frame.render_widget(paragraph, area);
}

/// Rows `lines` occupy when wrapped to `width` columns.
fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines.iter().map(|line| (line.width().max(1) + width - 1) / width).sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}
