use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Gauge;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Tabs;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::application::sample;
use crate::domain::models::Action;
use crate::domain::models::AnalysisRequest;
use crate::domain::models::CompletedAnalysis;
use crate::domain::models::ErrorInfo;
use crate::domain::models::Event;
use crate::domain::models::ExportStatus;
use crate::domain::models::HistoryEntry;
use crate::domain::models::Loading;
use crate::domain::models::SessionState;
use crate::domain::models::TextArea;
use crate::domain::models::MINIMUM_DOCUMENT_CHARS;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Analyze,
    History,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Pane {
    Resume,
    JobDescription,
}

/// Presentation snapshot. Everything here is either local UI chrome (tabs,
/// focus, scroll) or a copy of what the actions worker last sent over; the
/// live session state stays with the controller.
struct Screen {
    session: SessionState,
    history: Vec<HistoryEntry>,
    export_notice: Option<ExportStatus>,
    health_warning: Option<String>,
    waiting: bool,
    tab: Tab,
    focus: Pane,
    history_scroll: u16,
}

impl Default for Screen {
    fn default() -> Screen {
        return Screen {
            session: SessionState::Idle,
            history: vec![],
            export_notice: None,
            health_warning: None,
            waiting: false,
            tab: Tab::Analyze,
            focus: Pane::Resume,
            history_scroll: 0,
        };
    }
}

impl Screen {
    fn apply(&mut self, event: Event) {
        match event {
            Event::SessionUpdate(state) => {
                self.waiting = matches!(state, SessionState::Loading);
                if matches!(state, SessionState::Success(_)) {
                    self.tab = Tab::Analyze;
                }
                self.session = state;
            }
            Event::HistoryUpdate(history) => {
                self.history = history;
            }
            Event::ExportComplete(status) => {
                self.export_notice = Some(status);
                self.waiting = false;
            }
            Event::HealthCheckFailed(message) => {
                self.health_warning = Some(message);
            }
        }
    }
}

fn match_color(percentage: u8) -> Color {
    if percentage >= 80 {
        return Color::Green;
    }
    if percentage >= 60 {
        return Color::Blue;
    }
    if percentage >= 40 {
        return Color::Yellow;
    }
    return Color::Red;
}

fn match_label(percentage: u8) -> &'static str {
    if percentage >= 80 {
        return "Excellent match";
    }
    if percentage >= 60 {
        return "Good match";
    }
    if percentage >= 40 {
        return "Moderate match";
    }
    return "Needs work";
}

fn render_tabs<B: Backend>(frame: &mut Frame<B>, screen: &Screen, rect: Rect) {
    let titles = vec![
        Line::from("Analyze"),
        Line::from(format!("History ({})", screen.history.len())),
    ];
    let index = match screen.tab {
        Tab::Analyze => 0,
        Tab::History => 1,
    };

    frame.render_widget(
        Tabs::new(titles)
            .select(index)
            .block(Block::default().borders(Borders::ALL).title("jobfit"))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        rect,
    );
}

fn render_idle<B: Backend>(frame: &mut Frame<B>, screen: &Screen, rect: Rect) {
    let mut lines: Vec<Line> = vec![];

    if let Some(warning) = &screen.health_warning {
        lines.push(Line::from(Span::styled(
            warning.to_string(),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(
        "Paste your resume and the job description, then press CTRL+S to analyze the match.",
    ));
    lines.push(Line::from(
        "CTRL+L fills both panes with sample documents.",
    ));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Results")),
        rect,
    );
}

fn render_error<B: Backend>(frame: &mut Frame<B>, info: &ErrorInfo, rect: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format!("{} error", info.kind),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(info.message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Press ESC to dismiss.",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title("Error"),
            ),
        rect,
    );
}

fn render_results<B: Backend>(
    frame: &mut Frame<B>,
    screen: &Screen,
    analysis: &CompletedAnalysis,
    rect: Rect,
) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3), Constraint::Min(1)])
        .split(rect);

    let percentage = analysis.result.match_percentage.min(100);
    frame.render_widget(
        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(format!(
                "Match Score: {} (analyzed {})",
                match_label(percentage),
                analysis.finished_at.format("%Y-%m-%d %H:%M:%S")
            )))
            .gauge_style(Style::default().fg(match_color(percentage)))
            .percent(u16::from(percentage)),
        sections[0],
    );

    let mut lines: Vec<Line> = vec![];
    if let Some(notice) = &screen.export_notice {
        let color = if notice.success {
            Color::Green
        } else {
            Color::Red
        };
        lines.push(Line::from(Span::styled(
            notice.message.to_string(),
            Style::default().fg(color),
        )));
        lines.push(Line::from(""));
    }

    if !analysis.result.matched_skills.is_empty() {
        lines.push(Line::from(Span::styled(
            "Matched skills",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for skill in &analysis.result.matched_skills {
            lines.push(Line::from(Span::styled(
                format!("  + {skill}"),
                Style::default().fg(Color::Green),
            )));
        }
    }

    if !analysis.result.missing_skills.is_empty() {
        lines.push(Line::from(Span::styled(
            "Missing skills",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for skill in &analysis.result.missing_skills {
            lines.push(Line::from(Span::styled(
                format!("  - {skill}"),
                Style::default().fg(Color::Red),
            )));
        }
    }

    if !analysis.result.improvement_suggestions.is_empty() {
        lines.push(Line::from(Span::styled(
            "Improvement suggestions",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (idx, suggestion) in analysis.result.improvement_suggestions.iter().enumerate() {
            lines.push(Line::from(format!("  {}. {suggestion}", idx + 1)));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press CTRL+E to export this report.",
        Style::default().add_modifier(Modifier::DIM),
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Results")),
        sections[1],
    );
}

fn render_status<B: Backend>(frame: &mut Frame<B>, screen: &Screen, rect: Rect) {
    match &screen.session {
        SessionState::Idle => {
            render_idle(frame, screen, rect);
        }
        SessionState::Loading => {
            Loading::default().render(frame, rect);
        }
        SessionState::Failure(info) => {
            render_error(frame, info, rect);
        }
        SessionState::Success(analysis) => {
            render_results(frame, screen, analysis, rect);
        }
    }
}

fn render_history<B: Backend>(frame: &mut Frame<B>, screen: &Screen, rect: Rect) {
    let mut lines: Vec<Line> = vec![];

    if screen.history.is_empty() {
        lines.push(Line::from(
            "No analysis history yet. Your results will appear here.",
        ));
    }

    for entry in &screen.history {
        let percentage = entry.result.match_percentage;
        lines.push(Line::from(Span::styled(
            format!(
                "{percentage}%  {}",
                entry.created_at.format("%Y-%m-%d %H:%M:%S")
            ),
            Style::default()
                .fg(match_color(percentage))
                .add_modifier(Modifier::BOLD),
        )));

        if !entry.result.missing_skills.is_empty() {
            lines.push(Line::from(format!(
                "  Missing: {}",
                entry.result.missing_skills.join(", ")
            )));
        }

        for (idx, suggestion) in entry.result.improvement_suggestions.iter().enumerate() {
            lines.push(Line::from(format!("  {}. {suggestion}", idx + 1)));
        }

        lines.push(Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((screen.history_scroll, 0))
            .block(Block::default().borders(Borders::ALL).title("History")),
        rect,
    );
}

fn draw<B: Backend>(
    frame: &mut Frame<B>,
    screen: &Screen,
    resume: &tui_textarea::TextArea,
    job_description: &tui_textarea::TextArea,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(12),
            Constraint::Length(1),
        ])
        .split(frame.size());

    render_tabs(frame, screen, layout[0]);

    if screen.tab == Tab::Analyze {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(layout[1]);

        frame.render_widget(resume.widget(), columns[0]);
        frame.render_widget(job_description.widget(), columns[1]);
        render_status(frame, screen, layout[2]);
    } else {
        render_history(frame, screen, layout[1].union(layout[2]));
    }

    frame.render_widget(
        Paragraph::new("CTRL+S analyze | CTRL+E export | CTRL+T history | CTRL+L sample | CTRL+C quit")
            .style(Style::default().add_modifier(Modifier::DIM)),
        layout[3],
    );
}

fn document_chars(textarea: &tui_textarea::TextArea) -> usize {
    return textarea.lines().join("\n").trim().chars().count();
}

fn set_document_title(textarea: &mut tui_textarea::TextArea, label: &str, focused: bool) {
    let count = document_chars(textarea);
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .title(format!(
            "{label} ({count} / {MINIMUM_DOCUMENT_CHARS} chars minimum)"
        ))
        .padding(Padding::new(1, 1, 0, 0));

    if focused {
        block = block.border_style(Style::default().fg(Color::Cyan));
    }

    textarea.set_block(block);
}

fn fill_document(textarea: &mut tui_textarea::TextArea, text: &str) {
    for (idx, line) in text.lines().enumerate() {
        if idx > 0 {
            textarea.insert_newline();
        }
        textarea.insert_str(line);
    }
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    tx: mpsc::UnboundedSender<Action>,
    rx: &mut mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut screen = Screen::default();
    let mut resume = TextArea::new("Resume");
    let mut job_description = TextArea::new("Job Description");

    #[cfg(feature = "dev")]
    {
        fill_document(&mut resume, sample::resume());
        fill_document(&mut job_description, sample::job_description());
    }

    loop {
        while let Ok(event) = rx.try_recv() {
            screen.apply(event);
        }

        set_document_title(&mut resume, "Resume", screen.focus == Pane::Resume);
        set_document_title(
            &mut job_description,
            "Job Description",
            screen.focus == Pane::JobDescription,
        );

        terminal.draw(|frame| {
            draw(frame, &screen, &resume, &job_description);
        })?;

        if screen.waiting {
            let event = rx.recv().await;
            if event.is_none() {
                continue;
            }

            screen.apply(event.unwrap());
            continue;
        }

        match crossterm::event::read()?.into() {
            Input {
                key: Key::Char('c'),
                ctrl: true,
                ..
            } => {
                break;
            }
            Input {
                key: Key::Char('t'),
                ctrl: true,
                ..
            } => {
                screen.tab = match screen.tab {
                    Tab::Analyze => Tab::History,
                    Tab::History => Tab::Analyze,
                };
            }
            Input {
                key: Key::Char('l'),
                ctrl: true,
                ..
            } => {
                if screen.tab == Tab::Analyze {
                    resume = TextArea::new("Resume");
                    job_description = TextArea::new("Job Description");
                    fill_document(&mut resume, sample::resume());
                    fill_document(&mut job_description, sample::job_description());
                }
            }
            Input {
                key: Key::Char('s'),
                ctrl: true,
                ..
            } => {
                let request = AnalysisRequest::new(
                    &resume.lines().join("\n"),
                    &job_description.lines().join("\n"),
                );

                screen.export_notice = None;
                screen.waiting = true;
                tx.send(Action::Analyze(request))?;
            }
            Input {
                key: Key::Char('e'),
                ctrl: true,
                ..
            } => {
                if matches!(screen.session, SessionState::Success(_)) {
                    screen.waiting = true;
                    tx.send(Action::ExportResult())?;
                }
            }
            Input { key: Key::Esc, .. } => {
                if matches!(screen.session, SessionState::Failure(_)) {
                    screen.waiting = true;
                    tx.send(Action::DismissError())?;
                } else {
                    screen.export_notice = None;
                    screen.health_warning = None;
                }
            }
            Input { key: Key::Tab, .. } => {
                if screen.tab == Tab::Analyze {
                    screen.focus = match screen.focus {
                        Pane::Resume => Pane::JobDescription,
                        Pane::JobDescription => Pane::Resume,
                    };
                }
            }
            Input { key: Key::Up, .. } if screen.tab == Tab::History => {
                screen.history_scroll = screen.history_scroll.saturating_sub(1);
            }
            Input { key: Key::Down, .. } if screen.tab == Tab::History => {
                screen.history_scroll = screen.history_scroll.saturating_add(1);
            }
            input => {
                if screen.tab == Tab::Analyze {
                    match screen.focus {
                        Pane::Resume => {
                            resume.input(input);
                        }
                        Pane::JobDescription => {
                            job_description.input(input);
                        }
                    }
                }
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: &mut mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    start_loop(&mut terminal, tx, rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
