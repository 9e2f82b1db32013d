//! UI rendering
//!
//! Render functions take state and a precomputed [`Readout`] and draw a
//! full frame; nothing here mutates state.

use libkeycalc::readout::WELCOME_MESSAGE;
use libkeycalc::Readout;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;

const TAB_WIDTH: usize = 4;

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState, readout: &Readout) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Banner
            Constraint::Min(4),    // Readout
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_banner(frame, chunks[0], state);
    render_readout(frame, chunks[1], state, readout);
    render_status_bar(frame, chunks[2], state, readout);

    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error, state);
    }
}

fn render_banner(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines: Vec<Line> = expand_tabs(WELCOME_MESSAGE, TAB_WIDTH)
        .lines()
        .map(|line| {
            Line::from(Span::styled(
                line.to_string(),
                styled(state, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            ))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Operands or tape, followed by the result block
fn render_readout(frame: &mut Frame, area: Rect, state: &AppState, readout: &Readout) {
    let mut lines: Vec<Line> = expand_tabs(&readout.body, TAB_WIDTH)
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect();

    if let (Some(result), Some(block)) = (&readout.result, readout.result_block()) {
        let style = match result {
            Ok(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            Err(_) => Style::default().fg(Color::Red),
        };
        lines.extend(
            expand_tabs(&block, TAB_WIDTH)
                .lines()
                .map(|line| Line::from(Span::styled(line.to_string(), styled(state, style)))),
        );
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().title(" keycalc ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });

    frame.render_widget(widget, area);
}

/// Reset prompt once finalized, otherwise the key hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, readout: &Readout) {
    let keys = &state.config.keys;

    let line = match readout.prompt {
        Some(ref prompt) => Line::from(Span::styled(
            prompt.clone(),
            styled(state, Style::default().fg(Color::Yellow)),
        )),
        None => {
            let hints = format!(
                "0-9 . + - * / = Backspace | Ctrl+{}: Reset | Ctrl+{}: Quit",
                keys.reset.to_ascii_uppercase(),
                keys.quit.to_ascii_uppercase()
            );
            let mut spans = vec![Span::styled(hints, styled(state, Style::default().fg(Color::Gray)))];
            if let Some(ref message) = state.status.message {
                spans.push(Span::raw(" | "));
                spans.push(Span::raw(message.clone()));
            }
            Line::from(spans)
        }
    };

    let widget = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str, state: &AppState) {
    let popup_area = centered_rect(70, 30, area);

    let error_text = vec![
        Line::from(Span::styled(
            "Error",
            styled(state, Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        )),
        Line::from(""),
        Line::from(error.to_string()),
        Line::from(""),
        Line::from("Press Esc to dismiss, or keep typing"),
    ];

    let widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(styled(state, Style::default().fg(Color::Red))),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(widget, popup_area);
}

fn styled(state: &AppState, style: Style) -> Style {
    if state.config.colors_enabled {
        style
    } else {
        Style::default()
    }
}

/// Replace tabs with spaces up to the next multiple of `width`
pub fn expand_tabs(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;

    for c in text.chars() {
        match c {
            '\t' => {
                let pad = width - column % width;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }

    out
}

/// Helper to create centered rectangle
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{reduce, Action};
    use libkeycalc::{Calculator, Key};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(state: &AppState) -> String {
        let engine = Calculator::new();
        let readout = state.readout(&engine);
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| render(frame, state, &readout)).unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn type_keys(input: &str) -> AppState {
        let engine = Calculator::new();
        input
            .chars()
            .filter_map(Key::from_char)
            .fold(AppState::new(), |state, key| reduce(state, Action::Input(key), &engine))
    }

    #[test]
    fn test_expand_tabs_aligns_columns() {
        assert_eq!(expand_tabs("\t\t5", 4), "        5");
        assert_eq!(expand_tabs("ab\tc", 4), "ab  c");
        assert_eq!(expand_tabs("\t+\t3\n\tx", 4), "    +   3\n    x");
    }

    #[test]
    fn test_renders_welcome_and_hints() {
        let text = screen_text(&AppState::new());
        assert!(text.contains("Welcome to keycalc"));
        assert!(text.contains("Ctrl+R: Reset"));
    }

    #[test]
    fn test_renders_preview_result() {
        let text = screen_text(&type_keys("12*3"));
        assert!(text.contains("=      36"));
    }

    #[test]
    fn test_renders_reset_prompt_when_finalized() {
        let text = screen_text(&type_keys("1+1="));
        assert!(text.contains("Please press 'Ctrl + R' to reset"));
    }

    #[test]
    fn test_renders_error_overlay() {
        let text = screen_text(&type_keys("9/0="));
        assert!(text.contains("Cannot perform division by zero."));
    }
}
