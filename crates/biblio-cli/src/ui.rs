use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use ratatui::Terminal;

use biblio_core::actions::BrowseAction;
use biblio_core::catalog::Level;
use biblio_core::library::LibraryData;
use biblio_core::pages::{next_page, prev_page, PageId, PageRegistry};
use biblio_core::projection::{
    is_course_list_ready, visible_courses, visible_departments, visible_semesters, visible_years,
};
use biblio_core::session::{BrowseSession, DownloadSink};
use biblio_core::state::SelectionState;
use biblio_notify::journal::DownloadJournal;
use biblio_notify::notice::NoticeBoard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiTheme {
    Dark,
    Light,
}

impl UiTheme {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

#[derive(Clone, Copy)]
struct UiPalette {
    accent: Color,
    text: Color,
    muted: Color,
    border: Color,
    selected_bg: Color,
}

fn palette_for(theme: UiTheme) -> UiPalette {
    match theme {
        UiTheme::Dark => UiPalette {
            accent: Color::Cyan,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            selected_bg: Color::DarkGray,
        },
        UiTheme::Light => UiPalette {
            accent: Color::Blue,
            text: Color::Black,
            muted: Color::Gray,
            border: Color::DarkGray,
            selected_bg: Color::Rgb(220, 220, 220),
        },
    }
}

/// Delivery target wired into the session: every download intent lands on
/// the toast board and, when available, in the journal file.
pub struct PortalSink {
    pub board: NoticeBoard,
    pub journal: Option<DownloadJournal>,
}

impl DownloadSink for PortalSink {
    fn download_requested(&mut self, code: &str, name: &str) {
        self.board.download_requested(code, name);
        if let Some(journal) = self.journal.as_mut() {
            journal.download_requested(code, name);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrowsePane {
    Departments,
    Years,
    Semesters,
    Courses,
}

impl BrowsePane {
    fn next(self) -> Self {
        match self {
            Self::Departments => Self::Years,
            Self::Years => Self::Semesters,
            Self::Semesters => Self::Courses,
            Self::Courses => Self::Departments,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Departments => Self::Courses,
            Self::Years => Self::Departments,
            Self::Semesters => Self::Years,
            Self::Courses => Self::Semesters,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct BrowserCursor {
    pane: BrowsePane,
    department: usize,
    year: usize,
    semester: usize,
    course: usize,
    searching: bool,
}

impl BrowserCursor {
    fn new() -> Self {
        Self {
            pane: BrowsePane::Departments,
            department: 0,
            year: 0,
            semester: 0,
            course: 0,
            searching: false,
        }
    }

    fn reset_below_department(&mut self) {
        self.year = 0;
        self.semester = 0;
        self.course = 0;
    }
}

/// UI context for one portal run: created on entry, dropped on exit.
/// Pure presentation state; the selection itself lives in the session.
struct PortalContext {
    theme: UiTheme,
    sidebar_open: bool,
    sidebar_cursor: usize,
    page: PageId,
    browser: BrowserCursor,
}

impl PortalContext {
    fn new(theme: UiTheme, page: PageId) -> Self {
        let sidebar_cursor = PageRegistry::list()
            .iter()
            .position(|entry| entry.id == page)
            .unwrap_or(0);
        Self {
            theme,
            sidebar_open: true,
            sidebar_cursor,
            page,
            browser: BrowserCursor::new(),
        }
    }
}

/// Glyphs are a presentation capability; the page registry carries data only.
fn glyph_for(page: PageId) -> &'static str {
    match page {
        PageId::Home => "⌂",
        PageId::About => "i",
        PageId::Rules => "§",
        PageId::Syllabi => "✎",
        PageId::EResources => "◈",
        PageId::Gallery => "▣",
        PageId::Opac => "⌕",
        PageId::EBooks => "❖",
        PageId::Policy => "¶",
        PageId::Journals => "≡",
    }
}

struct TuiGuard;

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
    }
}

pub fn run(
    data: LibraryData,
    journal: Option<DownloadJournal>,
    theme: UiTheme,
    start_page: PageId,
) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, crossterm::cursor::Hide)?;
    let _guard = TuiGuard; // Ensures terminal is restored on exit or panic

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let sink = PortalSink {
        board: NoticeBoard::new(16),
        journal,
    };
    let mut session = BrowseSession::new(sink);
    let mut context = PortalContext::new(theme, start_page);

    run_app(&mut terminal, &mut session, &mut context, &data).map_err(|e| e.into())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyOutcome {
    Continue,
    Exit,
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut BrowseSession<PortalSink>,
    context: &mut PortalContext,
    data: &LibraryData,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, data, session.state(), session.sink(), context))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key(key, session, context, data) == KeyOutcome::Exit {
                    return Ok(());
                }
            }
        }
    }
}

fn handle_key(
    key: KeyEvent,
    session: &mut BrowseSession<PortalSink>,
    context: &mut PortalContext,
    data: &LibraryData,
) -> KeyOutcome {
    if context.page == PageId::Syllabi && context.browser.searching {
        return handle_search_keys(key, session, context);
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyOutcome::Exit;
    }

    match key.code {
        KeyCode::Char('q') => return KeyOutcome::Exit,
        KeyCode::Char('t') => context.theme = context.theme.next(),
        KeyCode::Char('m') => context.sidebar_open = !context.sidebar_open,
        KeyCode::Tab => select_page(context, next_page(context.page)),
        KeyCode::BackTab => select_page(context, prev_page(context.page)),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(entry) = page_by_digit(c) {
                select_page(context, entry);
            }
        }
        _ => {}
    }

    if context.page == PageId::Syllabi {
        handle_browser_keys(key, session, context, data);
    } else {
        handle_sidebar_keys(key, context);
    }
    KeyOutcome::Continue
}

fn handle_search_keys(
    key: KeyEvent,
    session: &mut BrowseSession<PortalSink>,
    context: &mut PortalContext,
) -> KeyOutcome {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => context.browser.searching = false,
        KeyCode::Backspace => {
            let mut query = session.state().search.clone();
            query.pop();
            session.dispatch(BrowseAction::SetSearch(query));
            context.browser.department = 0;
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut query = session.state().search.clone();
            query.push(c);
            session.dispatch(BrowseAction::SetSearch(query));
            context.browser.department = 0;
        }
        _ => {}
    }
    KeyOutcome::Continue
}

fn handle_sidebar_keys(key: KeyEvent, context: &mut PortalContext) {
    let len = PageRegistry::list().len();
    match key.code {
        KeyCode::Up => context.sidebar_cursor = context.sidebar_cursor.saturating_sub(1),
        KeyCode::Down => context.sidebar_cursor = (context.sidebar_cursor + 1).min(len - 1),
        KeyCode::Enter => {
            let entry = PageRegistry::list()[context.sidebar_cursor];
            context.page = entry.id;
        }
        _ => {}
    }
}

fn handle_browser_keys(
    key: KeyEvent,
    session: &mut BrowseSession<PortalSink>,
    context: &mut PortalContext,
    data: &LibraryData,
) {
    match key.code {
        KeyCode::Char('/') => context.browser.searching = true,
        KeyCode::Char('l') => {
            let level = session.state().level.next();
            session.dispatch(BrowseAction::SetLevel(level));
            context.browser = BrowserCursor::new();
        }
        KeyCode::Char('r') => {
            session.dispatch(BrowseAction::Reset);
            context.browser = BrowserCursor::new();
        }
        KeyCode::Left => context.browser.pane = context.browser.pane.prev(),
        KeyCode::Right => context.browser.pane = context.browser.pane.next(),
        KeyCode::Up => move_browser_cursor(session.state(), context, data, -1),
        KeyCode::Down => move_browser_cursor(session.state(), context, data, 1),
        KeyCode::Enter | KeyCode::Char('d') => activate_browser_row(session, context, data),
        _ => {}
    }
}

fn pane_len(state: &SelectionState, context: &PortalContext, data: &LibraryData) -> usize {
    match context.browser.pane {
        BrowsePane::Departments => visible_departments(&data.syllabi, state).len(),
        BrowsePane::Years => visible_years(&data.syllabi, state).len(),
        BrowsePane::Semesters => visible_semesters(&data.syllabi, state).len(),
        BrowsePane::Courses => visible_courses(&data.syllabi, state).len(),
    }
}

fn move_browser_cursor(
    state: &SelectionState,
    context: &mut PortalContext,
    data: &LibraryData,
    delta: isize,
) {
    let len = pane_len(state, context, data);
    if len == 0 {
        return;
    }
    let cursor = match context.browser.pane {
        BrowsePane::Departments => &mut context.browser.department,
        BrowsePane::Years => &mut context.browser.year,
        BrowsePane::Semesters => &mut context.browser.semester,
        BrowsePane::Courses => &mut context.browser.course,
    };
    let current = (*cursor).min(len - 1) as isize;
    *cursor = (current + delta).rem_euclid(len as isize) as usize;
}

fn activate_browser_row(
    session: &mut BrowseSession<PortalSink>,
    context: &mut PortalContext,
    data: &LibraryData,
) {
    let state = session.state().clone();
    match context.browser.pane {
        BrowsePane::Departments => {
            let departments = visible_departments(&data.syllabi, &state);
            if let Some(department) = departments.get(context.browser.department) {
                let name = department.name.clone();
                session.dispatch(BrowseAction::SetDepartment(name));
                context.browser.reset_below_department();
                context.browser.pane = BrowsePane::Years;
            }
        }
        BrowsePane::Years => {
            let years = visible_years(&data.syllabi, &state);
            if let Some(year) = years.get(context.browser.year) {
                let label = year.year.clone();
                session.dispatch(BrowseAction::SetYear(label));
                context.browser.semester = 0;
                context.browser.course = 0;
                context.browser.pane = BrowsePane::Semesters;
            }
        }
        BrowsePane::Semesters => {
            let semesters = visible_semesters(&data.syllabi, &state);
            if let Some(semester) = semesters.get(context.browser.semester) {
                let name = semester.name.clone();
                session.dispatch(BrowseAction::SetSemester(name));
                context.browser.course = 0;
                context.browser.pane = BrowsePane::Courses;
            }
        }
        BrowsePane::Courses => {
            let courses = visible_courses(&data.syllabi, &state);
            if let Some(course) = courses.get(context.browser.course) {
                session.dispatch(BrowseAction::RequestDownload {
                    code: course.code.clone(),
                    name: course.name.clone(),
                });
            }
        }
    }
}

fn select_page(context: &mut PortalContext, page: PageId) {
    context.page = page;
    if let Some(idx) = PageRegistry::list()
        .iter()
        .position(|entry| entry.id == page)
    {
        context.sidebar_cursor = idx;
    }
}

fn page_by_digit(digit: char) -> Option<PageId> {
    let pages = PageRegistry::list();
    let idx = match digit {
        '0' => 9,
        _ => (digit as usize) - ('1' as usize),
    };
    pages.get(idx).map(|entry| entry.id)
}

fn ui(
    f: &mut ratatui::Frame,
    data: &LibraryData,
    state: &SelectionState,
    sink: &PortalSink,
    context: &PortalContext,
) {
    let palette = palette_for(context.theme);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, rows[0], context, palette);

    let main_area = if context.sidebar_open {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(0)])
            .split(rows[1]);
        render_sidebar(f, cols[0], context, palette);
        cols[1]
    } else {
        rows[1]
    };

    match context.page {
        PageId::Home => render_home(f, main_area, data, palette),
        PageId::Syllabi => render_syllabi(f, main_area, data, state, context, palette),
        page => render_static_page(f, main_area, page, palette),
    }

    render_footer(f, rows[2], sink, context, palette);
}

fn render_header(f: &mut ratatui::Frame, area: Rect, context: &PortalContext, palette: UiPalette) {
    let entry = PageRegistry::get(context.page);
    let line = Line::from(vec![
        Span::styled(
            "College Library",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", entry.route), Style::default().fg(palette.muted)),
    ]);
    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(format!("theme: {}", context.theme.label())),
    );
    f.render_widget(header, area);
}

fn render_sidebar(f: &mut ratatui::Frame, area: Rect, context: &PortalContext, palette: UiPalette) {
    let items: Vec<ListItem> = PageRegistry::list()
        .iter()
        .map(|entry| {
            let style = if entry.id == context.page {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            ListItem::new(Line::from(Span::styled(
                format!("{} {}", glyph_for(entry.id), entry.label),
                style,
            )))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title("Menu"),
        )
        .highlight_style(Style::default().bg(palette.selected_bg));
    let mut list_state = ListState::default();
    list_state.select(Some(context.sidebar_cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_home(f: &mut ratatui::Frame, area: Rect, data: &LibraryData, palette: UiPalette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let stats = [
        ("Total Books", data.statistics.total_books),
        ("Total Journals", data.statistics.total_journals),
        ("Total E-Books", data.statistics.total_ebooks),
        ("Daily Visitors", data.statistics.daily_visitors),
    ];
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);
    for (idx, (label, value)) in stats.iter().enumerate() {
        let card = Paragraph::new(Line::from(Span::styled(
            format_count(*value),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(*label),
        );
        f.render_widget(card, cols[idx]);
    }

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(34)])
        .split(rows[1]);

    let mut lines: Vec<Line> = Vec::new();
    for announcement in &data.announcements {
        lines.push(Line::from(Span::styled(
            announcement.title.clone(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            announcement.content.clone(),
            Style::default().fg(palette.text),
        )));
        lines.push(Line::from(Span::styled(
            format!("Posted on: {}", announcement.date),
            Style::default().fg(palette.muted),
        )));
        lines.push(Line::from(""));
    }
    let announcements = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title("Latest Announcements"),
    );
    f.render_widget(announcements, lower[0]);

    let hour_items: Vec<ListItem> = data
        .hours
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<10}", entry.day), Style::default().fg(palette.text)),
                Span::styled(entry.time.clone(), Style::default().fg(palette.muted)),
            ]))
        })
        .collect();
    let hours = List::new(hour_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title("Library Hours"),
    );
    f.render_widget(hours, lower[1]);
}

fn render_syllabi(
    f: &mut ratatui::Frame,
    area: Rect,
    data: &LibraryData,
    state: &SelectionState,
    context: &PortalContext,
    palette: UiPalette,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let search_text = if context.browser.searching {
        format!("{}▏", state.search)
    } else if state.search.is_empty() {
        "press / to search departments".to_string()
    } else {
        state.search.clone()
    };
    let search_style = if context.browser.searching || !state.search.is_empty() {
        Style::default().fg(palette.text)
    } else {
        Style::default().fg(palette.muted)
    };
    let search = Paragraph::new(Line::from(Span::styled(search_text, search_style))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title("Find Syllabi"),
    );
    f.render_widget(search, rows[0]);

    let titles: Vec<Line> = [Level::Undergraduate, Level::Postgraduate]
        .iter()
        .map(|level| Line::from(level.label()))
        .collect();
    let selected = match state.level {
        Level::Undergraduate => 0,
        Level::Postgraduate => 1,
    };
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title("Level (l)"),
        )
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, rows[1]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(18),
            Constraint::Percentage(20),
            Constraint::Percentage(32),
        ])
        .split(rows[2]);

    render_department_pane(f, panes[0], data, state, context, palette);
    render_year_pane(f, panes[1], data, state, context, palette);
    render_semester_pane(f, panes[2], data, state, context, palette);
    render_course_pane(f, panes[3], data, state, context, palette);

    let hint = Paragraph::new(Line::from(Span::styled(
        "arrows move, Enter selects, Enter on a course downloads its syllabus, r resets filters",
        Style::default().fg(palette.muted),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(hint, rows[3]);
}

fn pane_block(title: &str, focused: bool, palette: UiPalette) -> Block<'_> {
    let border = if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

fn selectable_style(selected: bool, palette: UiPalette) -> Style {
    if selected {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    }
}

fn render_list_pane(
    f: &mut ratatui::Frame,
    area: Rect,
    items: Vec<ListItem>,
    title: &str,
    focused: bool,
    cursor: usize,
    palette: UiPalette,
) {
    let len = items.len();
    let list = List::new(items)
        .block(pane_block(title, focused, palette))
        .highlight_style(Style::default().bg(palette.selected_bg));
    let mut list_state = ListState::default();
    if focused && len > 0 {
        list_state.select(Some(cursor.min(len - 1)));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_department_pane(
    f: &mut ratatui::Frame,
    area: Rect,
    data: &LibraryData,
    state: &SelectionState,
    context: &PortalContext,
    palette: UiPalette,
) {
    let departments = visible_departments(&data.syllabi, state);
    let items: Vec<ListItem> = departments
        .iter()
        .map(|department| {
            let selected = state.department.as_deref() == Some(department.name.as_str());
            ListItem::new(vec![
                Line::from(Span::styled(
                    department.name.clone(),
                    selectable_style(selected, palette),
                )),
                Line::from(Span::styled(
                    department.description.clone(),
                    Style::default().fg(palette.muted),
                )),
            ])
        })
        .collect();
    render_list_pane(
        f,
        area,
        items,
        "Departments",
        context.browser.pane == BrowsePane::Departments,
        context.browser.department,
        palette,
    );
}

fn render_year_pane(
    f: &mut ratatui::Frame,
    area: Rect,
    data: &LibraryData,
    state: &SelectionState,
    context: &PortalContext,
    palette: UiPalette,
) {
    let years = visible_years(&data.syllabi, state);
    let items: Vec<ListItem> = if state.department.is_none() {
        vec![ListItem::new(Line::from(Span::styled(
            "pick a department",
            Style::default().fg(palette.muted),
        )))]
    } else {
        years
            .iter()
            .map(|year| {
                let selected = state.year.as_deref() == Some(year.year.as_str());
                ListItem::new(Line::from(Span::styled(
                    year.year.clone(),
                    selectable_style(selected, palette),
                )))
            })
            .collect()
    };
    render_list_pane(
        f,
        area,
        items,
        "Year",
        context.browser.pane == BrowsePane::Years,
        context.browser.year,
        palette,
    );
}

fn render_semester_pane(
    f: &mut ratatui::Frame,
    area: Rect,
    data: &LibraryData,
    state: &SelectionState,
    context: &PortalContext,
    palette: UiPalette,
) {
    let semesters = visible_semesters(&data.syllabi, state);
    let items: Vec<ListItem> = if state.year.is_none() {
        vec![ListItem::new(Line::from(Span::styled(
            "pick a year",
            Style::default().fg(palette.muted),
        )))]
    } else {
        semesters
            .iter()
            .map(|semester| {
                let selected = state.semester.as_deref() == Some(semester.name.as_str());
                ListItem::new(Line::from(Span::styled(
                    semester.name.clone(),
                    selectable_style(selected, palette),
                )))
            })
            .collect()
    };
    render_list_pane(
        f,
        area,
        items,
        "Semester",
        context.browser.pane == BrowsePane::Semesters,
        context.browser.semester,
        palette,
    );
}

fn render_course_pane(
    f: &mut ratatui::Frame,
    area: Rect,
    data: &LibraryData,
    state: &SelectionState,
    context: &PortalContext,
    palette: UiPalette,
) {
    let items: Vec<ListItem> = if !is_course_list_ready(state) {
        vec![ListItem::new(Line::from(Span::styled(
            "pick department, year and semester",
            Style::default().fg(palette.muted),
        )))]
    } else {
        visible_courses(&data.syllabi, state)
            .iter()
            .map(|course| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            format!("{} ", course.code),
                            Style::default()
                                .fg(palette.accent)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(course.name.clone(), Style::default().fg(palette.text)),
                    ]),
                    Line::from(Span::styled(
                        format!("Credits: {} · {}", course.credits, course.kind),
                        Style::default().fg(palette.muted),
                    )),
                ])
            })
            .collect()
    };
    render_list_pane(
        f,
        area,
        items,
        "Available Courses",
        context.browser.pane == BrowsePane::Courses,
        context.browser.course,
        palette,
    );
}

fn render_static_page(f: &mut ratatui::Frame, area: Rect, page: PageId, palette: UiPalette) {
    let entry = PageRegistry::get(page);
    let lines = vec![
        Line::from(Span::styled(
            entry.label,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(entry.blurb, Style::default().fg(palette.text))),
    ];
    let body = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(entry.route),
    );
    f.render_widget(body, area);
}

fn render_footer(
    f: &mut ratatui::Frame,
    area: Rect,
    sink: &PortalSink,
    context: &PortalContext,
    palette: UiPalette,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(0)])
        .split(area);

    let hints = Paragraph::new(Line::from(Span::styled(
        "q quit  m menu  t theme  Tab page  / search",
        Style::default().fg(palette.muted),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(hints, cols[0]);

    let toast = sink
        .board
        .latest()
        .map(|notice| notice.message.clone())
        .unwrap_or_default();
    let toast_widget = Paragraph::new(Line::from(Span::styled(
        toast,
        Style::default().fg(palette.accent),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(if context.page == PageId::Syllabi {
                "Downloads"
            } else {
                "Notices"
            }),
    );
    f.render_widget(toast_widget, cols[1]);
}

fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn counts_render_with_thousands_separators() {
        assert_eq!(format_count(450), "450");
        assert_eq!(format_count(45200), "45,200");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn every_page_has_a_glyph() {
        for entry in PageRegistry::list() {
            assert!(!glyph_for(entry.id).is_empty());
        }
    }

    #[test]
    fn digits_map_to_registry_order() {
        assert_eq!(page_by_digit('1'), Some(PageId::Home));
        assert_eq!(page_by_digit('4'), Some(PageId::Syllabi));
        assert_eq!(page_by_digit('0'), Some(PageId::Journals));
    }
}
