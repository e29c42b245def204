use super::*;
use crate::app::FormTarget;
use crate::time_utils::{format_started_at, render_elapsed};
use crate::types::Timer;

const CARD_HEIGHT: u16 = 5;
const CREATE_ROW_HEIGHT: u16 = 3;

enum Row<'a> {
    Card { index: usize, timer: &'a Timer },
    Form(FormTarget),
    CreateButton,
}

impl Row<'_> {
    fn height(&self) -> u16 {
        match self {
            Row::Card { .. } => CARD_HEIGHT,
            Row::Form(_) => super::timer_form::FORM_HEIGHT,
            Row::CreateButton => CREATE_ROW_HEIGHT,
        }
    }
}

pub fn render_timer_list(frame: &mut Frame, area: Rect, app: &App, now: i64) {
    let area = Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    };

    let mut rows: Vec<Row> = app
        .timers()
        .iter()
        .enumerate()
        .map(|(index, timer)| {
            let target = FormTarget::Edit(timer.id.clone());
            if app.forms.is_open(&target) {
                Row::Form(target)
            } else {
                Row::Card { index, timer }
            }
        })
        .collect();
    rows.push(if app.forms.is_open(&FormTarget::Create) {
        Row::Form(FormTarget::Create)
    } else {
        Row::CreateButton
    });

    let selected = app.selected_index().min(rows.len() - 1);
    let skip = first_visible_row(&rows, selected, area.height);

    let mut y = area.y;
    for (row_index, row) in rows.iter().enumerate().skip(skip) {
        let height = row.height();
        if y + height > area.y + area.height {
            break;
        }
        let row_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        let is_selected = row_index == selected;

        match row {
            Row::Card { index, timer } => {
                render_timer_card(frame, row_area, timer, *index, is_selected, now)
            }
            Row::Form(target) => {
                if let Some(draft) = app.forms.draft(target) {
                    super::timer_form::render_timer_form(frame, row_area, draft, is_selected);
                }
            }
            Row::CreateButton => render_create_button(frame, row_area, is_selected),
        }

        y += height;
    }
}

/// Smallest number of leading rows to skip so the selected row fits.
fn first_visible_row(rows: &[Row], selected: usize, height: u16) -> usize {
    let mut skip = 0;
    loop {
        let used: u16 = rows[skip..=selected].iter().map(Row::height).sum();
        if used <= height || skip == selected {
            return skip;
        }
        skip += 1;
    }
}

fn render_timer_card(
    frame: &mut Frame,
    area: Rect,
    timer: &Timer,
    index: usize,
    is_selected: bool,
    now: i64,
) {
    let elapsed = render_elapsed(timer.elapsed, timer.running_since, now);

    let (state_span, border_style) = match timer.running_since {
        Some(since) => {
            let label = match format_started_at(since) {
                Some(at) => format!("⏵ running since {}", at),
                None => "⏵ running".to_string(),
            };
            let border = if is_selected {
                selected_border(true)
            } else {
                Style::default().fg(Color::Green)
            };
            (
                Span::styled(label, Style::default().fg(Color::Green)),
                border,
            )
        }
        None => (
            Span::styled("stopped", Style::default().fg(Color::DarkGray)),
            selected_border(is_selected),
        ),
    };

    let lines = vec![
        Line::from(Span::styled(
            timer.project.as_str(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            elapsed,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(state_span),
    ];

    let title = Line::from(vec![
        Span::styled(format!(" {}. ", index + 1), Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} ", timer.title),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);

    let action = if timer.is_running() { " Stop " } else { " Start " };
    let action_style = if timer.is_running() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };

    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_bottom(Line::from(Span::styled(action, action_style)).right_aligned())
            .border_style(border_style),
    );

    frame.render_widget(card, area);
}

fn render_create_button(frame: &mut Frame, area: Rect, is_selected: bool) {
    let button = Paragraph::new(Span::styled(
        "[+]",
        Style::default().fg(if is_selected {
            Color::Magenta
        } else {
            Color::DarkGray
        }),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(selected_border(is_selected)),
    );

    frame.render_widget(button, area);
}
