use std::collections::BTreeMap;
use std::convert::Infallible;
use std::io::Stdout;
use std::path::PathBuf;

use anyhow::Result;
use codefence_marks_engine::{
    DecorationSink, DecorationStyle, Decorations, KeywordConfig, LineSource, MarkdownFile,
    TextDocument, ThemeKind, decoration_styles, io, refresh,
};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::color::terminal_color;
use crate::icons::GlyphIcons;

/// A document's lines with the per-line styling derived from its decorations.
pub struct DecoratedView {
    lines: Vec<String>,
    backgrounds: Vec<Option<Color>>,
    gutter: Vec<Option<char>>,
    styles: BTreeMap<String, DecorationStyle<char>>,
    theme: ThemeKind,
}

impl DecoratedView {
    pub fn new(doc: &TextDocument, config: &KeywordConfig, theme: ThemeKind) -> Self {
        let lines: Vec<String> = (0..doc.line_count())
            .map(|i| doc.line_text(i).into_owned())
            .collect();
        let n = lines.len();
        Self {
            lines,
            backgrounds: vec![None; n],
            gutter: vec![None; n],
            styles: decoration_styles(config, theme, &GlyphIcons),
            theme,
        }
    }

    pub fn background(&self, line: usize) -> Option<Color> {
        self.backgrounds.get(line).copied().flatten()
    }

    pub fn gutter(&self, line: usize) -> Option<char> {
        self.gutter.get(line).copied().flatten()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl DecorationSink for DecoratedView {
    type Error = Infallible;

    fn apply(&mut self, decorations: Decorations) -> Result<(), Infallible> {
        self.backgrounds.fill(None);
        self.gutter.fill(None);

        for (label, ranges) in decorations.iter() {
            match self.styles.get(label) {
                Some(DecorationStyle::Background { color, .. }) => {
                    let Some(color) = terminal_color(color, self.theme) else {
                        continue;
                    };
                    for line in ranges.iter().flat_map(|r| r.lines()) {
                        if let Some(slot) = self.backgrounds.get_mut(line) {
                            *slot = Some(color);
                        }
                    }
                }
                Some(DecorationStyle::GutterIcon { icon, .. }) => {
                    for range in ranges {
                        if let Some(slot) = self.gutter.get_mut(range.start.line) {
                            *slot = Some(*icon);
                        }
                    }
                }
                None => log::warn!("no style for decoration label {label}"),
            }
        }
        Ok(())
    }
}

pub struct App {
    root: PathBuf,
    files: Vec<MarkdownFile>,
    file_list_state: ListState,
    config: KeywordConfig,
    theme: ThemeKind,
    view: Option<DecoratedView>,
    message: Option<String>,
    scroll: u16,
}

impl App {
    pub fn new(
        root: PathBuf,
        files: Vec<MarkdownFile>,
        config: KeywordConfig,
        theme: ThemeKind,
    ) -> Self {
        let mut app = Self {
            root,
            files,
            file_list_state: ListState::default(),
            config,
            theme,
            view: None,
            message: None,
            scroll: 0,
        };

        // Select first file if available
        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        app
    }

    fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    /// Re-reads the selected file and rescans it.
    fn update_content_for_selection(&mut self) {
        self.scroll = 0;
        let Some(file) = self
            .file_list_state
            .selected()
            .and_then(|i| self.files.get(i))
        else {
            return;
        };

        match io::load_document(file.relative_path(), &self.root) {
            Ok(doc) => {
                let mut view = DecoratedView::new(&doc, &self.config, self.theme);
                let Ok(()) = refresh(&doc, &self.config, &mut view);
                self.view = Some(view);
                self.message = None;
            }
            Err(e) => {
                log::warn!("failed to load {}: {e}", file.relative_path());
                self.view = None;
                self.message = Some(format!("Error reading file: {e}"));
            }
        }
    }

    fn scroll_down(&mut self, by: u16) {
        let max = self
            .view
            .as_ref()
            .map_or(0, |v| v.lines().len().saturating_sub(1));
        self.scroll = self
            .scroll
            .saturating_add(by)
            .min(u16::try_from(max).unwrap_or(u16::MAX));
    }

    fn scroll_up(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_sub(by);
    }
}

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                KeyCode::Char('r') => app.update_content_for_selection(),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(10),
                KeyCode::PageUp => app.scroll_up(10),
                _ => {}
            }
        }
    }
}

fn document_lines(view: &DecoratedView, width: usize) -> Vec<Line<'static>> {
    view.lines()
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let glyph = view.gutter(i).unwrap_or(' ');
            let mut style = Style::default();
            if let Some(bg) = view.background(i) {
                style = style.bg(bg);
            }
            // Pad so the background covers the whole line, like a whole-line editor decoration.
            let padded = format!("{text:<width$}");
            Line::from(vec![
                Span::styled(format!("{glyph} "), Style::default().fg(Color::Yellow)),
                Span::styled(padded, style),
            ])
        })
        .collect()
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // File list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|file| ListItem::new(Line::from(file.display_path().to_string())))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Files"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Content panel
    let width = usize::from(chunks[1].width.saturating_sub(4));
    let content_text = match (&app.view, &app.message) {
        (_, Some(message)) => vec![Line::from(message.clone())],
        (Some(view), None) => document_lines(view, width),
        (None, None) => vec![Line::from("Select a file to view its content")],
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Content"))
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("PgUp/PgDn: Scroll | "),
        Span::raw("r: Rescan"),
    ]);

    f.render_widget(Paragraph::new(help_text), rows[1]);
}
