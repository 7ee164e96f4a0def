//! UI rendering
//!
//! Render functions read the state and draw; they never change it.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;

/// Main rendering entry point
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Pending expression
            Constraint::Length(3), // Main display
            Constraint::Min(3),    // History or keypad hints
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_sub_display(frame, chunks[0], state);
    render_main_display(frame, chunks[1], state);

    if state.history_visible {
        render_history(frame, chunks[2], state);
    } else {
        render_keypad_hints(frame, chunks[2], state);
    }

    render_status_bar(frame, chunks[3], state);

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }
}

fn style(state: &AppState, color: Color) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

fn render_sub_display(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = state.engine.pending_display().unwrap_or_default();

    let widget = Paragraph::new(text)
        .style(style(state, Color::Gray))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::LEFT | Borders::RIGHT | Borders::TOP));

    frame.render_widget(widget, area);
}

fn render_main_display(frame: &mut Frame, area: Rect, state: &AppState) {
    let (title, widget_style) = match &state.last_error {
        Some(error) if state.engine.is_error() => (
            format!(" {} ", error),
            style(state, Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => (String::new(), Style::default().add_modifier(Modifier::BOLD)),
    };

    let widget = Paragraph::new(state.engine.buffer().to_string())
        .style(widget_style)
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM),
        );

    frame.render_widget(widget, area);
}

fn render_history(frame: &mut Frame, area: Rect, state: &AppState) {
    let items: Vec<ListItem> = state
        .history_lines()
        .into_iter()
        .map(ListItem::new)
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" History ")
            .borders(Borders::ALL)
            .border_style(style(state, Color::Cyan)),
    );

    frame.render_widget(list, area);
}

fn render_keypad_hints(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines = vec![
        Line::from("0-9 .      digits"),
        Line::from("+ - * / ^  operators"),
        Line::from("Enter =    evaluate"),
    ];

    let widget = Paragraph::new(lines)
        .style(style(state, Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(widget, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = "F1: Help | h: History | q: Quit";

    let line = match &state.status.message {
        Some(message) => {
            let color = if state.engine.is_error() {
                Color::Red
            } else {
                Color::Green
            };
            Line::from(vec![
                Span::styled(message.clone(), style(state, color)),
                Span::raw(" | "),
                Span::styled(hints, style(state, Color::Gray)),
            ])
        }
        None => Line::from(Span::styled(hints, style(state, Color::Gray))),
    };

    let widget = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  0-9 .      - Enter a number"),
        Line::from("  + - * x /  - Operators"),
        Line::from("  ^          - Power"),
        Line::from("  Enter =    - Evaluate"),
        Line::from("  Backspace  - Delete last digit"),
        Line::from("  Esc c      - Clear everything"),
        Line::from("  h          - Toggle history"),
        Line::from("  F1         - Toggle help"),
        Line::from("  q          - Quit"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(style(state, Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Centered rectangle taking the given share of `r`
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
