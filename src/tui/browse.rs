//! Interactive movie browser using ratatui.
//!
//! Search bar on top, result list below, and the detail panel as an overlay
//! sliding in from the right. Every state change goes through
//! [`AppState::dispatch`]; this module only maps input to actions and draws.

use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::{Action, AppState, Screen};
use crate::error::{JfError, Result};
use crate::format::StarStyle;
use crate::view::{DetailView, ListEntry};

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Quit,
    Continue,
}

/// Browser state layered on top of the application state.
pub struct BrowseTui {
    state: AppState,
    stars: StarStyle,
    /// Highlighted row of the result list
    list_state: ListState,
    /// Text in the search box (not yet submitted)
    search_query: String,
    search_focused: bool,
    detail_scroll: u16,
    show_help: bool,
    status_message: Option<String>,
    /// Screen regions from the last draw, for mouse hit-testing
    search_area: Rect,
    list_area: Rect,
    detail_area: Rect,
}

impl BrowseTui {
    #[must_use]
    pub fn new(state: AppState, stars: StarStyle) -> Self {
        let status_message = state
            .load_error()
            .map(|reason| format!("catalog unavailable: {reason}"));

        Self {
            state,
            stars,
            list_state: ListState::default(),
            search_query: String::new(),
            search_focused: true,
            detail_scroll: 0,
            show_help: false,
            status_message,
            search_area: Rect::default(),
            list_area: Rect::default(),
            detail_area: Rect::default(),
        }
    }

    /// Pre-fill the search box and submit it.
    #[must_use]
    pub fn with_query(mut self, query: &str) -> Self {
        self.search_query = query.to_string();
        self.submit();
        self
    }

    /// Run the TUI main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(100))? {
                let flow = match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key.code, key.modifiers)
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => Flow::Continue,
                };
                if flow == Flow::Quit {
                    return Ok(());
                }
            }
        }
    }

    fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Length(3), // Search bar
                Constraint::Min(3),    // Results
                Constraint::Length(1), // Help bar
            ])
            .split(f.area());

        self.draw_title_bar(f, chunks[0]);
        self.draw_search_bar(f, chunks[1]);
        self.draw_list_panel(f, chunks[2]);
        self.draw_help_bar(f, chunks[3]);

        if self.state.screen() == Screen::Detail {
            self.draw_detail_overlay(f);
        } else {
            self.detail_area = Rect::default();
        }

        if self.show_help {
            Self::draw_help_overlay(f);
        }
    }

    fn draw_title_bar(&self, f: &mut Frame, area: Rect) {
        let results = match self.state.screen() {
            Screen::Idle => String::new(),
            Screen::Listing | Screen::Detail => {
                format!(" | {} results", self.state.results().len())
            }
        };

        let mut spans = vec![
            Span::styled("japflix", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" | {} movies{results}", self.state.catalog().len())),
        ];
        if let Some(message) = &self.status_message {
            let style = if self.state.load_error().is_some() {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!(" | {message}"), style));
        }

        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::Cyan));
        f.render_widget(paragraph, area);
    }

    fn draw_search_bar(&mut self, f: &mut Frame, area: Rect) {
        self.search_area = area;

        let border_style = if self.search_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let search_text = if self.search_focused {
            format!("{}_", self.search_query)
        } else if self.search_query.is_empty() {
            "Type / to search...".to_string()
        } else {
            self.search_query.clone()
        };

        let paragraph = Paragraph::new(search_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(" Search "),
            )
            .style(if self.search_query.is_empty() && !self.search_focused {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            });

        f.render_widget(paragraph, area);
    }

    fn draw_list_panel(&mut self, f: &mut Frame, area: Rect) {
        let is_focused = !self.search_focused && self.state.screen() == Screen::Listing;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if is_focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            })
            .title(" Results ");
        self.list_area = block.inner(area);

        let width = usize::from(self.list_area.width);
        let items: Vec<ListItem> = self
            .state
            .list()
            .entries()
            .iter()
            .map(|entry| match entry {
                ListEntry::Movie(movie) => ListItem::new(Line::from(vec![
                    Span::styled(movie.stars.render(self.stars), Style::default().fg(Color::Yellow)),
                    Span::raw("  "),
                    Span::styled(
                        truncate(&movie.title, width / 2),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        truncate(&movie.tagline, width / 2),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])),
                ListEntry::Placeholder { message } => ListItem::new(
                    Line::from(Span::styled(
                        message.clone(),
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::ITALIC),
                    ))
                    .centered(),
                ),
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn draw_help_bar(&self, f: &mut Frame, area: Rect) {
        let help_text = if self.search_focused {
            "Enter: search  Esc: cancel  Backspace: delete"
        } else if self.state.screen() == Screen::Detail {
            "Esc: close  j/k: scroll  ?: help"
        } else {
            "j/k: navigate  Enter: details  /: search  ?: help  q: quit"
        };

        let paragraph = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
        f.render_widget(paragraph, area);
    }

    fn draw_detail_overlay(&mut self, f: &mut Frame) {
        let Some(detail) = self.state.detail() else {
            return;
        };

        let area = f.area();
        let width = (area.width * 3 / 5).max(40).min(area.width);
        let panel = Rect::new(area.x + area.width - width, area.y, width, area.height);
        self.detail_area = panel;

        f.render_widget(Clear, panel);

        let paragraph = Paragraph::new(detail_text(detail, self.stars))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Details ")
                    .title_bottom(" Esc to close "),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.detail_scroll, 0));

        f.render_widget(paragraph, panel);
    }

    fn draw_help_overlay(f: &mut Frame) {
        let area = f.area();

        let help_width = 56.min(area.width.saturating_sub(4));
        let help_height = 19.min(area.height.saturating_sub(4));
        let x = (area.width - help_width) / 2;
        let y = (area.height - help_height) / 2;
        let help_area = Rect::new(x, y, help_width, help_height);

        f.render_widget(Clear, help_area);

        let help_text = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Search:"),
            Line::from("  /            Focus search box"),
            Line::from("  Enter        Run search"),
            Line::from("  Esc          Leave search box"),
            Line::from(""),
            Line::from("Results:"),
            Line::from("  j / Down     Move down"),
            Line::from("  k / Up       Move up"),
            Line::from("  g / G        First / last result"),
            Line::from("  Enter / l    Open details (or click)"),
            Line::from(""),
            Line::from("Details:"),
            Line::from("  j/k PgUp/PgDn  Scroll"),
            Line::from("  Esc / h      Close panel"),
            Line::from(""),
            Line::from("Press ? or Esc to close this help"),
        ];

        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Help "),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, help_area);
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Flow {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return Flow::Quit;
        }

        if self.show_help {
            if matches!(key, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter) {
                self.show_help = false;
            }
            return Flow::Continue;
        }

        if self.search_focused {
            return self.handle_search_key(key);
        }

        if self.state.screen() == Screen::Detail {
            return self.handle_detail_key(key);
        }

        match key {
            KeyCode::Char('q') => Flow::Quit,
            KeyCode::Char('/') => {
                self.search_focused = true;
                Flow::Continue
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                Flow::Continue
            }
            _ => self.handle_list_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyCode) -> Flow {
        match key {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => {
                // Leave the box without searching.
                self.search_focused = false;
            }
            KeyCode::Char(c) => self.search_query.push(c),
            KeyCode::Backspace => {
                self.search_query.pop();
            }
            _ => {}
        }
        Flow::Continue
    }

    fn handle_list_key(&mut self, key: KeyCode) -> Flow {
        let len = self.state.list().selectable_len();
        match key {
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Char('G') if len > 0 => self.list_state.select(Some(len - 1)),
            KeyCode::Char('g') if len > 0 => self.list_state.select(Some(0)),
            KeyCode::Enter | KeyCode::Char('l') => {
                if let Some(position) = self.list_state.selected() {
                    self.open(position);
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    fn handle_detail_key(&mut self, key: KeyCode) -> Flow {
        match key {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h' | 'q') => {
                self.state.dispatch(Action::ClosePanel);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.detail_scroll = self.detail_scroll.saturating_add(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
            }
            KeyCode::PageDown | KeyCode::Tab => {
                self.detail_scroll = self.detail_scroll.saturating_add(10);
            }
            KeyCode::PageUp | KeyCode::BackTab => {
                self.detail_scroll = self.detail_scroll.saturating_sub(10);
            }
            KeyCode::Char('g') => self.detail_scroll = 0,
            KeyCode::Char('?') => self.show_help = true,
            _ => {}
        }
        Flow::Continue
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Flow {
        let at = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.show_help {
                    self.show_help = false;
                } else if self.state.screen() == Screen::Detail {
                    if !self.detail_area.contains(at) {
                        self.state.dispatch(Action::ClosePanel);
                    }
                } else if self.search_area.contains(at) {
                    self.search_focused = true;
                } else if let Some(position) = self.list_position_at(at) {
                    self.search_focused = false;
                    self.list_state.select(Some(position));
                    self.open(position);
                }
            }
            MouseEventKind::ScrollDown => {
                if self.state.screen() == Screen::Detail {
                    self.detail_scroll = self.detail_scroll.saturating_add(1);
                } else {
                    self.select_next();
                }
            }
            MouseEventKind::ScrollUp => {
                if self.state.screen() == Screen::Detail {
                    self.detail_scroll = self.detail_scroll.saturating_sub(1);
                } else {
                    self.select_prev();
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    /// Result position under a screen cell. Each entry is one row.
    fn list_position_at(&self, at: Position) -> Option<usize> {
        if !self.list_area.contains(at) {
            return None;
        }
        let position = self.list_state.offset() + usize::from(at.y - self.list_area.y);
        (position < self.state.list().selectable_len()).then_some(position)
    }

    fn submit(&mut self) {
        self.state.dispatch(Action::Submit(self.search_query.clone()));
        self.search_focused = false;
        self.detail_scroll = 0;

        let found = self.state.list().selectable_len();
        *self.list_state.offset_mut() = 0;
        self.list_state.select((found > 0).then_some(0));

        if self.state.load_error().is_none() {
            self.status_message = Some(format!("searched: {}", self.state.query()));
        }
    }

    fn open(&mut self, position: usize) {
        if self.state.dispatch(Action::Select(position)) == Screen::Detail {
            self.detail_scroll = 0;
        }
    }

    fn select_next(&mut self) {
        let len = self.state.list().selectable_len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0, // Wrap to beginning
        };
        self.list_state.select(Some(i));
    }

    fn select_prev(&mut self) {
        let len = self.state.list().selectable_len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1, // Wrap to end
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    #[cfg(test)]
    const fn app_state(&self) -> &AppState {
        &self.state
    }
}

/// Detail panel contents: title, rating, synopsis, genre tags, metadata.
fn detail_text(detail: &DetailView, stars: StarStyle) -> Text<'static> {
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line<'static>> = vec![
        Line::from(Span::styled(detail.title.clone(), bold)),
        Line::from(Span::styled(
            detail.stars.render(stars),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
    ];

    if !detail.overview.is_empty() {
        lines.push(Line::from(detail.overview.clone()));
        lines.push(Line::from(""));
    }

    if !detail.genres.is_empty() {
        let mut tags = Vec::with_capacity(detail.genres.len() * 2);
        for genre in &detail.genres {
            tags.push(Span::styled(
                format!(" {genre} "),
                Style::default().fg(Color::Black).bg(Color::Gray),
            ));
            tags.push(Span::raw(" "));
        }
        lines.push(Line::from(tags));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled("More info", bold)));
    lines.push(Line::from("─".repeat(24)));
    for row in detail.metadata() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<9}", format!("{}:", row.label)), bold),
            Span::raw(row.value),
        ]));
    }

    Text::from(lines)
}

/// RAII Guard to ensure terminal state is restored even on panic.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

/// Fail early when stdout is not an interactive terminal.
pub fn ensure_terminal() -> Result<()> {
    if io::stdout().is_terminal() {
        Ok(())
    } else {
        Err(JfError::Terminal(
            "browse requires an interactive terminal".to_string(),
        ))
    }
}

/// Run the browse TUI until the user quits.
pub fn run_browse_tui(state: AppState, stars: StarStyle, initial_query: Option<&str>) -> Result<()> {
    ensure_terminal()?;

    let _guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = BrowseTui::new(state, stars);
    if let Some(query) = initial_query {
        app = app.with_query(query);
    }
    app.run(&mut terminal)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        format!("{}...", s.chars().take(max_len - 3).collect::<String>())
    }
}
