// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pitchdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal presenter.
//!
//! Full-screen slide view (ratatui + crossterm) driving a [`Presentation`].

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::deck::ValidationReport;
use crate::model::SlideNode;
use crate::nav::{KeyInput, RevealCursor};
use crate::presentation::{NavigationOutcome, Presentation};

mod theme;

use theme::TuiTheme;

const TOAST_TTL: Duration = Duration::from_secs(2);
const STARTUP_TOAST_TTL: Duration = Duration::from_secs(8);
/// Share of the slide's content height a scroll-into-view request scrolls to.
const SCROLL_INTO_VIEW_PERCENT: u32 = 40;

/// Runs the presenter until the user quits.
pub fn run(presentation: Presentation) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(presentation, theme);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let status_area = layout[1];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style())
        .title(format!(" {} ", app.presentation.current()));
    let inner = block.inner(main_area);

    let lines = match app.presentation.current_slide() {
        Some(slide) => slide_lines(slide, app.presentation.reveal().as_ref(), &app.theme),
        None => Vec::new(),
    };
    app.viewport_height = inner.height;
    app.content_height = wrapped_height(&lines, inner.width);
    if std::mem::take(&mut app.scroll_into_view) {
        app.scroll = scroll_into_view_offset(app.content_height);
    }
    app.scroll = app.scroll.min(app.max_scroll());

    let slide = Paragraph::new(lines)
        .style(app.theme.base_style())
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0))
        .block(block);
    frame.render_widget(slide, main_area);

    let toast_snapshot = app.toast.as_ref().map(|toast| (toast.message.clone(), toast.expires_at));
    let toast = match toast_snapshot {
        Some((message, expires_at)) if expires_at > Instant::now() => Some(message),
        Some(_) => {
            app.toast = None;
            None
        }
        None => None,
    };
    let compact = footer_uses_compact_mode(area);
    let status = Paragraph::new(footer_line(app, toast.as_deref(), compact));
    frame.render_widget(status, status_area);

    if app.show_help {
        render_help(frame, &app.theme, main_area);
    }
}

fn slide_lines(
    slide: &SlideNode,
    cursor: Option<&RevealCursor>,
    theme: &TuiTheme,
) -> Vec<Line<'static>> {
    let content = slide.content();
    let mut lines = vec![Line::from(Span::styled(content.heading().to_owned(), theme.heading_style()))];
    if let Some(subtitle) = content.subtitle() {
        lines.push(Line::from(Span::styled(subtitle.to_owned(), theme.muted_style())));
    }
    if !content.body().is_empty() {
        lines.push(Line::default());
        lines.extend(content.body().iter().map(|paragraph| Line::from(paragraph.clone())));
    }

    let (Some(spec), Some(cursor)) = (slide.reveal(), cursor) else {
        return lines;
    };

    lines.push(Line::default());
    if !cursor.is_started() {
        lines.push(Line::from(Span::styled(
            "click or press → to begin".to_owned(),
            theme.muted_style(),
        )));
    }
    for (idx, stage) in spec.stages().iter().enumerate() {
        if !cursor.is_revealed(idx) {
            lines.push(Line::from(Span::styled("  ○".to_owned(), theme.muted_style())));
            continue;
        }
        let style = if cursor.step() == Some(idx) {
            theme.current_stage_style()
        } else {
            theme.base_style()
        };
        let mut spans = vec![Span::styled("  ● ".to_owned(), style)];
        if let Some(label) = stage.label() {
            spans.push(Span::styled(format!("{label}  "), theme.muted_style()));
        }
        spans.push(Span::styled(stage.text().to_owned(), style));
        lines.push(Line::from(spans));
        if let Some(detail) = stage.detail() {
            lines.push(Line::from(Span::styled(format!("    {detail}"), theme.muted_style())));
        }
    }

    if let Some(finale) = spec.finale().filter(|_| cursor.is_complete()) {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(finale.to_owned(), theme.finale_style())));
    }

    lines
}

fn scroll_into_view_offset(content_height: u16) -> u16 {
    let offset = u32::from(content_height) * SCROLL_INTO_VIEW_PERCENT / 100;
    u16::try_from(offset).unwrap_or(u16::MAX)
}

// Footer, help overlay, and layout helpers.
include!("chrome.rs");

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    presentation: Presentation,
    theme: TuiTheme,
    scroll: u16,
    content_height: u16,
    viewport_height: u16,
    scroll_into_view: bool,
    show_help: bool,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(presentation: Presentation, theme: TuiTheme) -> Self {
        let report = presentation.deck().validate();
        report.log();
        let toast = validation_toast(&report)
            .map(|message| Toast { message, expires_at: Instant::now() + STARTUP_TOAST_TTL });

        Self {
            presentation,
            theme,
            scroll: 0,
            content_height: 0,
            viewport_height: 0,
            scroll_into_view: false,
            show_help: false,
            toast,
            should_quit: false,
        }
    }

    fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-i32::from(self.viewport_height.max(1))),
            KeyCode::PageDown => self.scroll_by(i32::from(self.viewport_height.max(1))),
            KeyCode::Home => {
                let outcome = self.presentation.go_to_start();
                self.apply_outcome(Some(outcome));
            }
            code => {
                if let Some(input) = key_input(code) {
                    let outcome = self.presentation.dispatch_key(input);
                    self.apply_outcome(outcome);
                }
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if !self.show_help => {
                let outcome = self.presentation.click();
                self.apply_outcome(outcome);
            }
            MouseEventKind::ScrollUp => self.scroll_by(-1),
            MouseEventKind::ScrollDown => self.scroll_by(1),
            _ => {}
        }
    }

    fn apply_outcome(&mut self, outcome: Option<NavigationOutcome>) {
        match outcome {
            Some(NavigationOutcome::Moved { .. }) => {
                self.scroll = 0;
                self.scroll_into_view = false;
            }
            Some(NavigationOutcome::Dangling { target }) => {
                self.set_toast(format!("No slide at {target}"));
            }
            Some(NavigationOutcome::Unchanged) | None => {}
        }
        if self.presentation.take_scroll_request() {
            self.scroll_into_view = true;
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = u16::try_from(next).unwrap_or(0);
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast { message: message.into(), expires_at: Instant::now() + TOAST_TTL });
    }
}

/// First deck error, with a count of any further ones; the full list goes to the log.
fn validation_toast(report: &ValidationReport) -> Option<String> {
    let mut errors = report.errors();
    let first = errors.next()?;
    let more = errors.count();
    if more == 0 {
        Some(first.to_string())
    } else {
        Some(format!("{first} (+{more} more)"))
    }
}

fn key_input(code: KeyCode) -> Option<KeyInput> {
    match code {
        KeyCode::Right => Some(KeyInput::ArrowRight),
        KeyCode::Left => Some(KeyInput::ArrowLeft),
        KeyCode::Char(' ') => Some(KeyInput::Space),
        KeyCode::Enter => Some(KeyInput::Enter),
        _ => None,
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
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
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
}
