use crate::app::{App, EditorField, Mode};
use crate::clock::Clock;
use crate::journal_entry::JournalEntry;
use chrono::Local;
use color_eyre::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::{stdout, Stdout};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub struct UI {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl UI {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(UI { terminal })
    }

    /// Draws and dispatches keys until the app asks to quit.
    pub fn run<C: Clock>(&mut self, app: &mut App<C>) -> Result<()> {
        while !app.should_quit() {
            self.terminal.draw(|f| render(f, app))?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
        Ok(())
    }
}

impl Drop for UI {
    fn drop(&mut self) {
        // Nothing useful can be done if restoring the terminal fails here.
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

pub fn render<C: Clock>(f: &mut Frame, app: &App<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    match app.mode() {
        Mode::Editing(_) => render_editor(f, app, chunks[1]),
        _ => render_entries(f, app, chunks[1]),
    }
    render_footer(f, app, chunks[2]);

    if let Mode::ConfirmDelete(id) = app.mode() {
        let title = app.store().get(*id).map(JournalEntry::title).unwrap_or("");
        render_confirm(f, title, f.area());
    }
}

fn render_header<C: Clock>(f: &mut Frame, app: &App<C>, area: Rect) {
    let query = app.store().query();
    let mut spans = vec![
        Span::styled(
            "Journal",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  ({})", query.sort.label())),
    ];
    if query.bookmarks_only {
        spans.push(Span::styled("  bookmarks only", Style::default().fg(Color::Yellow)));
    }

    let search_style = if *app.mode() == Mode::Searching {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    spans.push(Span::raw("  search: "));
    spans.push(Span::styled(query.search_text.clone(), search_style));

    let cursor_x = spans.iter().map(Span::width).sum::<usize>();
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);

    if *app.mode() == Mode::Searching {
        f.set_cursor_position((area.x + 1 + cursor_x as u16, area.y + 1));
    }
}

fn render_entries<C: Clock>(f: &mut Frame, app: &App<C>, area: Rect) {
    let store = app.store();
    if store.is_empty() {
        let prompt = Paragraph::new(vec![
            Line::from(Span::styled(
                "Begin Your Journal",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Craft your personal diary, press a to begin"),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(prompt, area);
        return;
    }

    let view = store.derived_view();
    let items: Vec<ListItem> = view
        .iter()
        .map(|entry| {
            let marker = if entry.is_bookmarked() { "* " } else { "  " };
            let mut lines = vec![Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(
                    entry.title().to_string(),
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", entry.date().format("%Y-%m-%d %H:%M")),
                    Style::default().fg(Color::Gray),
                ),
            ])];
            lines.extend(entry.preview().map(|line| Line::from(format!("  {line}"))));
            ListItem::new(lines)
        })
        .collect();

    let title = format!("Entries ({}/{})", view.len(), store.len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let selected = (!view.is_empty()).then_some(app.selected());
    let mut state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, area, &mut state);
}

fn render_editor<C: Clock>(f: &mut Frame, app: &App<C>, area: Rect) {
    let Mode::Editing(editor) = app.mode() else {
        return;
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let focused = Style::default().fg(Color::Cyan);
    let (title_style, content_style) = match editor.field {
        EditorField::Title => (focused, Style::default()),
        EditorField::Content => (Style::default(), focused),
    };
    let heading = if editor.target.is_some() { "Edit Entry" } else { "New Entry" };

    let title_input = Paragraph::new(editor.title.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(title_style)
            .title(format!("{heading}: Title")),
    );
    f.render_widget(title_input, chunks[0]);

    let date = editor
        .target
        .and_then(|id| app.store().get(id))
        .map(JournalEntry::date)
        .unwrap_or_else(Local::now);
    let content_block = Block::default()
        .borders(Borders::ALL)
        .border_style(content_style)
        .title(format!("Content ({})", date.format("%Y-%m-%d")));
    let inner = content_block.inner(chunks[1]);
    let content = ContentLayout::new(&editor.content, inner.width, inner.height);
    let rows: Vec<Line> = content.rows.iter().map(|row| Line::from(row.as_str())).collect();
    let content_input = Paragraph::new(rows)
        .scroll((content.scroll, 0))
        .block(content_block);
    f.render_widget(content_input, chunks[1]);

    let (x, y) = match editor.field {
        EditorField::Title => {
            let max_x = chunks[0].right().saturating_sub(2);
            let x = chunks[0].x + 1 + editor.title.width() as u16;
            (x.min(max_x), chunks[0].y + 1)
        }
        EditorField::Content => (inner.x + content.cursor.0, inner.y + content.cursor.1),
    };
    f.set_cursor_position((x, y));
}

/// Content of the editor box hard-wrapped to the box width, with the scroll
/// offset that keeps the end of the text (where typing happens) visible.
#[derive(Debug, PartialEq, Eq)]
struct ContentLayout {
    rows: Vec<String>,
    scroll: u16,
    /// Cursor relative to the inner area of the box.
    cursor: (u16, u16),
}

impl ContentLayout {
    fn new(text: &str, width: u16, height: u16) -> Self {
        let width = usize::from(width.max(1));
        let mut rows = Vec::new();
        for line in text.split('\n') {
            let mut row = String::new();
            let mut row_width = 0;
            for c in line.chars() {
                let w = c.width().unwrap_or(0);
                if row_width + w > width {
                    rows.push(std::mem::take(&mut row));
                    row_width = 0;
                }
                row.push(c);
                row_width += w;
            }
            rows.push(row);
        }

        let last_width = rows.last().map(|r| r.width()).unwrap_or(0);
        let (cursor_x, cursor_row) = if last_width >= width {
            (0, rows.len())
        } else {
            (last_width, rows.len() - 1)
        };
        let visible = usize::from(height.max(1));
        let scroll = (cursor_row + 1).saturating_sub(visible);

        ContentLayout {
            rows,
            scroll: scroll as u16,
            cursor: (cursor_x as u16, (cursor_row - scroll) as u16),
        }
    }
}

fn render_footer<C: Clock>(f: &mut Frame, app: &App<C>, area: Rect) {
    let help = match app.mode() {
        Mode::List => "a add  e edit  d delete  b bookmark  / search  f bookmarks  s sort  q quit",
        Mode::Editing(_) => "Tab switch field  Ctrl-S save  Esc cancel",
        Mode::Searching => "Type to filter  Enter/Esc done",
        Mode::ConfirmDelete(_) => "y delete  any other key cancel",
    };
    let mut lines = vec![Line::from(Span::styled(help, Style::default().fg(Color::Yellow)))];
    if let Some(status) = app.status() {
        lines.insert(0, Line::from(status.to_string()));
    }
    let footer = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn render_confirm(f: &mut Frame, title: &str, area: Rect) {
    let popup = centered(area, 50, 5);
    f.render_widget(Clear, popup);
    let body = Paragraph::new(vec![
        Line::from(format!("Delete \"{title}\"?")),
        Line::from("Press y to confirm"),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title("Delete Entry"),
    );
    f.render_widget(body, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
