use super::*;
use crate::app::{FormDraft, FormField, TextInput};

pub(super) const FORM_HEIGHT: u16 = 6;

const LABEL_WIDTH: u16 = 10;

pub(super) fn render_timer_form(frame: &mut Frame, area: Rect, draft: &FormDraft, is_selected: bool) {
    let border_style = if is_selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title_focused = is_selected && draft.focused_field == FormField::Title;
    let project_focused = is_selected && draft.focused_field == FormField::Project;

    let lines = vec![
        field_line("Title", &draft.title, title_focused),
        field_line("Project", &draft.project, project_focused),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("[Enter] {}", draft.submit_label()),
                Style::default().fg(Color::Blue),
            ),
            Span::raw("    "),
            Span::styled("[Esc] Cancel", Style::default().fg(Color::Red)),
        ]),
    ];

    let heading = if draft.is_edit() {
        " Edit timer "
    } else {
        " New timer "
    };

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(heading, border_style))
            .border_style(border_style)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(form, area);

    if is_selected {
        let input = draft.focused_input();
        let (before, _) = input.split_at_cursor();
        let row = match draft.focused_field {
            FormField::Title => 0,
            FormField::Project => 1,
        };
        // border + padding + label
        let x = area.x + 2 + LABEL_WIDTH + before.chars().count() as u16;
        let y = area.y + 1 + row;
        if x < area.x + area.width.saturating_sub(1) {
            frame.set_cursor_position((x, y));
        }
    }
}

fn field_line<'a>(label: &'a str, input: &'a TextInput, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        Span::styled(
            format!("{:<width$}", format!("{}:", label), width = LABEL_WIDTH as usize),
            label_style,
        ),
        Span::styled(input.value.as_str(), value_style),
    ])
}
