mod components;

use std::sync::OnceLock;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, View};
use crate::confetti::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::theme::Theme;
use crate::verdict::Verdict;
use components::{centered_box, key_hints, revealed, shake_offset, shifted};

// Theme is resolved from config once at startup
static THEME: OnceLock<Theme> = OnceLock::new();

/// Install the theme. Only the first call wins.
pub fn init_theme(theme: Theme) {
    let _ = THEME.set(theme);
}

fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

// Helper functions to get theme colors
fn accent() -> Color { theme().accent }
fn accent_soft() -> Color { theme().accent_soft }
fn success() -> Color { theme().success }
fn danger() -> Color { theme().danger }
fn text() -> Color { theme().text }
fn text_dim() -> Color { theme().text_dim }
fn inactive() -> Color { theme().inactive }

const TITLE: &str = "Am I Good at Golf?";
const SUBTITLE: &str = "Enter your first name to discover your golf prowess";
const PLACEHOLDER: &str = "Enter your first name";

const LOGO: [&str; 3] = [
    "╲    │",
    " ╲   │",
    "  ●   ",
];

const CONFETTI_GLYPHS: [&str; 4] = ["■", "▪", "◆", "●"];
const CONFETTI_FADED: &str = "·";

const CONTENT_WIDTH: u16 = 72;

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // View
            Constraint::Length(1), // Footer
        ])
        .split(area);

    match app.view {
        View::AwaitingInput => draw_input_view(f, app, chunks[0]),
        View::ShowingResult => draw_result_view(f, app, chunks[0]),
    }
    draw_footer(f, app, chunks[1]);

    // Confetti goes over everything
    draw_confetti(f, app, area);
}

fn draw_input_view(f: &mut Frame, app: &App, area: Rect) {
    let elapsed = app.view_elapsed();
    let area = centered_box(CONTENT_WIDTH, 12, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Logo
            Constraint::Length(1),
            Constraint::Length(1), // Title
            Constraint::Length(1), // Subtitle
            Constraint::Length(1),
            Constraint::Length(3), // Name box
            Constraint::Length(1),
            Constraint::Length(1), // Submit
        ])
        .split(area);

    if revealed(elapsed, 200) {
        let logo: Vec<Line> = LOGO
            .iter()
            .map(|l| Line::styled(*l, Style::default().fg(text())))
            .collect();
        f.render_widget(Paragraph::new(logo).alignment(Alignment::Center), chunks[0]);
    }

    if revealed(elapsed, 300) {
        let title = Paragraph::new(Span::styled(
            TITLE,
            Style::default().fg(text()).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        f.render_widget(title, chunks[2]);
    }

    if revealed(elapsed, 400) {
        let subtitle = Paragraph::new(Span::styled(SUBTITLE, Style::default().fg(accent_soft())))
            .alignment(Alignment::Center);
        f.render_widget(subtitle, chunks[3]);
    }

    if !revealed(elapsed, 500) {
        return;
    }

    // Name box
    let input_line = if app.input_buffer.is_empty() {
        Line::from(vec![
            Span::styled("_", Style::default().fg(accent())),
            Span::styled(PLACEHOLDER, Style::default().fg(text_dim())),
        ])
    } else {
        Line::from(vec![
            Span::styled(app.input_buffer.as_str(), Style::default().fg(text())),
            Span::styled("_", Style::default().fg(accent())),
        ])
    };
    let input = Paragraph::new(input_line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent())),
        );
    f.render_widget(input, chunks[5]);

    let submit = Paragraph::new(Line::from(vec![
        Span::styled("[ Enter ] ", Style::default().fg(accent())),
        Span::styled(TITLE, Style::default().fg(success()).add_modifier(Modifier::BOLD)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(submit, chunks[7]);
}

fn draw_result_view(f: &mut Frame, app: &App, area: Rect) {
    let Some(assessment) = app.assessment.as_ref() else {
        return;
    };
    let elapsed = app.view_elapsed();
    let message = assessment.message();

    let headline_color = match app.verdict() {
        Some(Verdict::Yes) => success(),
        _ => danger(),
    };

    // No verdicts get the wobble
    let icon = match assessment.verdict {
        Verdict::Yes => message.icon.to_string(),
        Verdict::No => shifted(message.icon, shake_offset(elapsed)),
    };

    let hidden = || Line::from("");
    let mut lines = vec![
        if revealed(elapsed, 200) { Line::from(icon) } else { hidden() },
        Line::from(""),
        if revealed(elapsed, 300) {
            Line::styled(
                message.headline,
                Style::default().fg(headline_color).add_modifier(Modifier::BOLD),
            )
        } else {
            hidden()
        },
        Line::from(""),
        if revealed(elapsed, 400) {
            Line::styled(message.line, Style::default().fg(text()))
        } else {
            hidden()
        },
        Line::from(""),
    ];

    if revealed(elapsed, 500) {
        lines.push(Line::styled(message.subline, Style::default().fg(accent_soft())));
    }
    lines.push(Line::from(""));
    if revealed(elapsed, 600) {
        lines.push(Line::from(vec![
            Span::styled("[ Enter ] ", Style::default().fg(accent())),
            Span::styled(
                "Try Another Name",
                Style::default().fg(text()).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let area = centered_box(CONTENT_WIDTH, 14, area);
    let result = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(result, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let hints: &[(&str, &str)] = match app.view {
        View::AwaitingInput => &[("Enter", "Submit"), ("Ctrl+U", "Clear"), ("Esc", "Quit")],
        View::ShowingResult => &[("Enter", "Try Another Name"), ("q", "Quit")],
    };

    let footer = Paragraph::new(key_hints(hints, accent(), inactive()))
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn draw_confetti(f: &mut Frame, app: &App, area: Rect) {
    let Some(burst) = app.burst.as_ref() else {
        return;
    };
    if area.width == 0 || area.height == 0 {
        return;
    }

    let buf = f.buffer_mut();
    for p in burst.particles() {
        if p.x < 0.0 || p.y < 0.0 || p.x > CANVAS_WIDTH || p.y >= CANVAS_HEIGHT {
            continue;
        }
        let col = ((p.x / CANVAS_WIDTH) * area.width as f32) as u16;
        let row = ((p.y / CANVAS_HEIGHT) * area.height as f32) as u16;
        let x = area.x + col.min(area.width - 1);
        let y = area.y + row.min(area.height - 1);

        let glyph = if p.life() < 0.3 {
            CONFETTI_FADED
        } else {
            CONFETTI_GLYPHS[p.glyph % CONFETTI_GLYPHS.len()]
        };

        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(glyph).set_fg(p.color);
        }
    }
}
