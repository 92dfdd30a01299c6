pub mod screen;
pub mod wrap;

use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget, Wrap},
};

use crate::{
    app::App,
    history::{History, HISTORY_CAPACITY},
    language::Language,
    session::{Phase, TestDuration, WordState},
};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;

struct Styles {
    bold: Style,
    green_bold: Style,
    red_bold: Style,
    dim_bold: Style,
    underlined_bold: Style,
    underlined_red_bold: Style,
    italic: Style,
    magenta_bold: Style,
    selected: Style,
}

impl Styles {
    fn new() -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        Self {
            bold,
            green_bold: bold.fg(Color::Green),
            red_bold: bold.fg(Color::Red),
            dim_bold: bold.add_modifier(Modifier::DIM),
            underlined_bold: bold.add_modifier(Modifier::UNDERLINED),
            underlined_red_bold: bold.fg(Color::Red).add_modifier(Modifier::UNDERLINED),
            italic: Style::default().add_modifier(Modifier::ITALIC),
            magenta_bold: bold.fg(Color::Magenta),
            selected: bold.fg(Color::Black).bg(Color::Cyan),
        }
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        screen::current_screen(&self.state).render(self, area, buf);
    }
}

pub fn render_welcome(app: &App, area: Rect, buf: &mut Buffer) {
    let styles = Styles::new();
    let pool = app.controller.pool();
    let names = Language::ALL
        .iter()
        .map(|lang| pool.display_name(*lang))
        .join(", ");

    let lines = vec![
        Line::from(Span::styled("TYPING TEST • MULTILINGUAL", styles.magenta_bold)),
        Line::from(""),
        Line::from(Span::styled("wordsprint", styles.bold)),
        Line::from(""),
        Line::from("A modern, minimal and relaxing typing test."),
        Line::from(format!("Practice with natural texts in {names}.")),
        Line::from("Live WPM, accuracy and your last results, always in view."),
        Line::from(""),
        Line::from(Span::styled(
            "press any key to start / (esc)ape",
            styles.italic,
        )),
    ];

    let height = (lines.len() as u16).min(area.height);
    let top = (area.height - height) / 2;
    let centered = Rect::new(area.x, area.y + top, area.width, height);

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(centered, buf);
}

pub fn render_typing(app: &App, area: Rect, buf: &mut Buffer) {
    let styles = Styles::new();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1),                              // duration + language
            Constraint::Length(1),                              // time / wpm / accuracy
            Constraint::Length(1),                              // padding
            Constraint::Min(3),                                 // practice text
            Constraint::Length(3),                              // input or summary
            Constraint::Length(HISTORY_CAPACITY as u16 + 3),    // history table
            Constraint::Length(1),                              // legend
        ])
        .split(area);

    render_controls(app, chunks[0], buf, &styles);
    render_status(app, chunks[1], buf, &styles);
    render_practice_text(app, chunks[3], buf, &styles);
    render_input(app, chunks[4], buf, &styles);
    render_history(app.controller.history(), chunks[5], buf, &styles);

    Paragraph::new(Span::styled(
        "(tab) duration / (shift+tab) language / (ctrl+r) reset / (esc)ape",
        styles.italic,
    ))
    .alignment(Alignment::Center)
    .render(chunks[6], buf);
}

fn render_controls(app: &App, area: Rect, buf: &mut Buffer, styles: &Styles) {
    let controller = &app.controller;
    let mut spans = Vec::new();

    for duration in TestDuration::ALL {
        let style = if duration == controller.duration() {
            styles.selected
        } else {
            styles.dim_bold
        };
        spans.push(Span::styled(format!(" {duration} "), style));
    }

    spans.push(Span::raw("    "));

    for lang in Language::ALL {
        let style = if lang == controller.language() {
            styles.selected
        } else {
            styles.dim_bold
        };
        spans.push(Span::styled(format!(" {lang} "), style));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_status(app: &App, area: Rect, buf: &mut Buffer, styles: &Styles) {
    let controller = &app.controller;
    let score = controller.score();

    let spans = vec![
        Span::styled(
            format!("{}s", controller.state().time_remaining_secs),
            styles.bold,
        ),
        Span::raw("   "),
        Span::styled(format!("{} wpm", score.wpm), styles.magenta_bold),
        Span::raw("   "),
        Span::styled(format!("{}% acc", score.accuracy), styles.bold),
    ];

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_practice_text(app: &App, area: Rect, buf: &mut Buffer, styles: &Styles) {
    let controller = &app.controller;
    let text = controller.practice_text();

    if text.is_empty() {
        Paragraph::new(Span::styled("loading text…", styles.italic))
            .alignment(Alignment::Center)
            .render(area, buf);
        return;
    }

    let words = text.words();
    let lines = wrap::wrap_words(words, area.width as usize);
    let focus = controller
        .current_word_index()
        .and_then(|idx| wrap::line_of(&lines, idx))
        .unwrap_or(lines.len().saturating_sub(1));
    let offset = wrap::scroll_offset(focus, area.height as usize, lines.len());
    let pending = controller.state().pending_input.as_str();

    let visible: Vec<Line> = lines[offset..]
        .iter()
        .take(area.height as usize)
        .map(|range| {
            let mut spans = Vec::with_capacity(range.len() * 2);
            for idx in range.clone() {
                if idx > range.start {
                    spans.push(Span::raw(" "));
                }
                let word = &words[idx];
                let style = match controller.word_state(idx) {
                    WordState::ConfirmedCorrect => styles.green_bold,
                    WordState::ConfirmedIncorrect => styles.red_bold,
                    WordState::Current if !word.starts_with(pending) => {
                        styles.underlined_red_bold
                    }
                    WordState::Current => styles.underlined_bold,
                    WordState::Untouched => styles.dim_bold,
                };
                spans.push(Span::styled(word.clone(), style));
            }
            Line::from(spans)
        })
        .collect();

    Paragraph::new(visible).render(area, buf);
}

fn render_input(app: &App, area: Rect, buf: &mut Buffer, styles: &Styles) {
    let controller = &app.controller;

    let (title, content) = match controller.phase() {
        Phase::Finished => {
            let score = controller.score();
            (
                " time's up ",
                Line::from(vec![
                    Span::styled(format!("{} wpm", score.wpm), styles.magenta_bold),
                    Span::raw("   "),
                    Span::styled(format!("{}% acc", score.accuracy), styles.bold),
                    Span::raw("   "),
                    Span::raw(format!(
                        "{}/{} words correct",
                        score.correct_words, score.confirmed_words
                    )),
                    Span::raw("   "),
                    Span::styled("(ctrl+r) again", styles.italic),
                ]),
            )
        }
        phase => (
            if phase == Phase::Idle {
                " type to start the timer "
            } else {
                " space or enter confirms a word "
            },
            Line::from(vec![
                Span::styled(controller.state().pending_input.clone(), styles.bold),
                Span::styled("_", styles.dim_bold),
            ]),
        ),
    };

    Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title(title))
        .render(area, buf);
}

fn render_history(history: &History, area: Rect, buf: &mut Buffer, styles: &Styles) {
    let title = match history.average_wpm() {
        Some(avg) => format!(" recent results / avg {avg:.0} wpm "),
        None => " recent results ".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if history.is_empty() {
        Paragraph::new(Span::styled("no completed tests yet", styles.italic))
            .style(Style::default().fg(Color::Gray))
            .block(block)
            .render(area, buf);
        return;
    }

    let header = Row::new(vec!["time", "lang", "dur", "wpm", "acc", "words"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = history
        .iter()
        .enumerate()
        .map(|(idx, result)| {
            let row = Row::new(vec![
                Cell::from(result.finished_at.format("%H:%M:%S").to_string()),
                Cell::from(result.language.to_string()),
                Cell::from(format!("{}s", result.duration_secs)),
                Cell::from(result.wpm.to_string()),
                Cell::from(format!("{}%", result.accuracy)),
                Cell::from(format!("{}/{}", result.correct_words, result.confirmed_words)),
            ]);
            if idx == 0 {
                row.style(styles.bold)
            } else {
                row
            }
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(block)
    .render(area, buf);
}
