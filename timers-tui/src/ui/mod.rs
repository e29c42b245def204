use crate::app::App;
use crate::time_utils::now_millis;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

mod timer_form;
mod timer_list;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    // One clock reading per frame so every card agrees.
    let now = now_millis();

    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(3),    // Timer cards
            Constraint::Length(3), // Status
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, root[0], app, now);
    timer_list::render_timer_list(frame, root[1], app, now);
    render_status(frame, root[2], app);
    render_controls(frame, root[3], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &mut App, now: i64) {
    const LABEL: &str = " Timers";

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1 + 1 + LABEL.len() as u16),
            Constraint::Min(10),
        ])
        .split(area);

    let throbber_area = Rect {
        x: cols[0].x + 1,
        y: cols[0].y,
        width: 1,
        height: 1,
    };
    let label_area = Rect {
        x: throbber_area.x + 1,
        y: cols[0].y,
        width: cols[0].width.saturating_sub(2),
        height: 1,
    };
    let syncing = app.is_loading || app.refresh_in_flight.is_some();
    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if syncing {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);
    frame.render_widget(
        Paragraph::new(Span::styled(LABEL, Style::default().fg(Color::Yellow))),
        label_area,
    );

    let muted = Style::default().fg(Color::DarkGray);
    let total = app.timers().len();
    let running = app.timers().iter().filter(|t| t.is_running()).count();
    let synced = match app.last_refreshed_at {
        Some(at) => format!("synced {}", utils::format_age(at, now)),
        None => "not synced".to_string(),
    };
    let summary = Line::from(vec![
        Span::styled(format!("{} timers", total), muted),
        Span::styled(" | ", muted),
        Span::styled(
            format!("{} running", running),
            if running > 0 {
                Style::default().fg(Color::Green)
            } else {
                muted
            },
        ),
        Span::styled(" | ", muted),
        Span::styled(synced, muted),
        Span::raw(" "),
    ]);
    frame.render_widget(Paragraph::new(summary).alignment(Alignment::Right), cols[1]);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let (text, color) = match &app.status_message {
        Some(message) => (message.as_str(), Color::Red),
        None => ("Ready", Color::DarkGray),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(status, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    if app.active_form_target().is_some() {
        spans.extend(utils::key_hint("Tab", ": Next field  "));
        spans.extend(utils::key_hint("Enter", ": Submit  "));
        spans.extend(utils::key_hint("Esc", ": Cancel  "));
        spans.extend(utils::key_hint("↑↓", ": Leave form open"));
    } else {
        spans.extend(utils::key_hint("Space", ": Start/Stop  "));
        spans.extend(utils::key_hint("↑↓ / j/k", ": Navigate  "));
        spans.extend(utils::key_hint("Enter/E", ": Edit  "));
        spans.extend(utils::key_hint("N/+", ": New  "));
        spans.extend(utils::key_hint("D", ": Delete  "));
        spans.extend(utils::key_hint("R", ": Refresh  "));
        spans.extend(utils::key_hint("Q", ": Quit"));
    }

    let controls = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(vec![Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                )]))
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(controls, area);
}

fn selected_border(is_selected: bool) -> Style {
    if is_selected {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Timer, TimerId};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_cards_and_create_row() {
        let mut app = App::new();
        let ticket = app.begin_refresh();
        app.apply_refresh(
            ticket,
            vec![Timer {
                id: TimerId::new("a"),
                title: "Write changelog".to_string(),
                project: "Release".to_string(),
                elapsed: 3_723_000,
                running_since: None,
            }],
            now_millis(),
        );

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Write changelog"));
        assert!(text.contains("Release"));
        assert!(text.contains("01:02:03"));
        assert!(text.contains("[+]"));
    }

    #[test]
    fn open_create_form_shows_submit_label() {
        let mut app = App::new();
        app.open_create_form();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Create"));
        assert!(text.contains("Cancel"));
    }
}
