use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::super::modal;
use super::{App, Focus, StatusKind};

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App<'_>) {
    let area = frame.area();
    let outer = Block::default().borders(Borders::ALL).title(Line::from(vec![
        Span::styled(
            "Select Command",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::styled("F1 help", Style::default().fg(Color::Gray)),
    ]));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(inner);

    draw_command_row(frame, app, chunks[0]);
    let params_area = draw_params(frame, app, chunks[1]);
    draw_details(frame, app, chunks[2]);
    draw_list(frame, app, chunks[3]);
    draw_status(frame, app, chunks[4]);

    if let Some(help) = &app.help.0 {
        modal::draw_help(frame, help);
        return;
    }

    if app.focus == Focus::Params {
        let x = app.params.cursor_col() as u16;
        frame.set_cursor_position((params_area.x + 1 + x, params_area.y + 1));
    }
}

fn button(label: &str, enabled: bool) -> Paragraph<'_> {
    let style = if enabled {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };
    Paragraph::new(Span::styled(label, style))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style))
}

fn draw_command_row(frame: &mut ratatui::Frame, app: &App<'_>, area: Rect) {
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(22),
            Constraint::Length(18),
        ])
        .split(area);

    let st = app.selector.state();
    frame.render_widget(
        Paragraph::new(st.display_text.as_str())
            .block(Block::default().borders(Borders::ALL).title("Command")),
        parts[0],
    );
    frame.render_widget(
        button("Edit Parameters ^E", st.can_edit_parameters()),
        parts[1],
    );
    frame.render_widget(button("Use Preset ^P", st.can_use_preset()), parts[2]);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn draw_params(frame: &mut ratatui::Frame, app: &App<'_>, area: Rect) -> Rect {
    frame.render_widget(
        Paragraph::new(app.params.buf.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(app.focus == Focus::Params))
                .title("Parameters"),
        ),
        area,
    );
    area
}

fn draw_details(frame: &mut ratatui::Frame, app: &App<'_>, area: Rect) {
    let lines: Vec<Line> = app
        .selector
        .state()
        .detail_text
        .lines()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Gray))))
        .collect();
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::TOP).title("Details")),
        area,
    );
}

fn draw_list(frame: &mut ratatui::Frame, app: &App<'_>, area: Rect) {
    let rows: Vec<ListItem> = if app.selector.entries().is_empty() {
        vec![ListItem::new("(no commands)")]
    } else {
        app.selector.list_items().map(ListItem::new).collect()
    };

    let mut state = ListState::default();
    state.select(app.selector.state().selected_index);

    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(app.focus == Focus::List))
                .title("Choose command"),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status(frame: &mut ratatui::Frame, app: &App<'_>, area: Rect) {
    let mut lines = Vec::new();
    if let Some((kind, msg)) = &app.status {
        let style = match kind {
            StatusKind::Output => Style::default().fg(Color::White),
            StatusKind::Error => Style::default().fg(Color::Red),
        };
        lines.push(Line::from(Span::styled(msg.as_str(), style)));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Enter: OK  Esc: cancel  Tab: focus  ^E: edit  ^P: preset",
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
    )));
    frame.render_widget(Paragraph::new(lines), area);
}
