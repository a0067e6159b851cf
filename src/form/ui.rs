use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::form::{
    app::{App, Focus, Phase},
    widgets,
};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Token
            Constraint::Length(3), // Playlist id
            Constraint::Length(3), // Output path
            Constraint::Length(3), // Buttons
            Constraint::Min(0),    // Spacer
            Constraint::Length(3), // Status bar
            Constraint::Length(1), // Help text
        ])
        .split(area);

    let title = Paragraph::new("Deezer Playlist Exporter").style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(title, chunks[0]);

    widgets::render_input_field(
        frame,
        chunks[1],
        "ARL Token",
        &app.fields.token,
        app.focus == Focus::Token,
        true,
    );
    widgets::render_input_field(
        frame,
        chunks[2],
        "Playlist ID",
        &app.fields.playlist_id,
        app.focus == Focus::PlaylistId,
        false,
    );
    widgets::render_input_field(
        frame,
        chunks[3],
        "Save as (Excel file)",
        &app.fields.output,
        app.focus == Focus::Output,
        false,
    );

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Length(22), Constraint::Min(0)])
        .split(chunks[4]);

    widgets::render_button(frame, buttons[0], "Browse", app.focus == Focus::Browse, true);

    let export_label = match app.phase {
        Phase::Idle => "Export Playlist".to_string(),
        Phase::Fetching => format!(
            "{} Exporting",
            widgets::SPINNER[app.spinner_frame % widgets::SPINNER.len()]
        ),
    };
    widgets::render_button(
        frame,
        buttons[1],
        &export_label,
        app.focus == Focus::Export,
        app.export_enabled(),
    );

    let status = Paragraph::new(format!("Status: {}", app.status_message))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[6]);

    let help = Paragraph::new(
        "[Tab: Next] [Enter: Activate] [Ctrl-B: Browse] [Ctrl-E: Export] [Esc: Quit]",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[7]);

    if let Some(picker) = &app.picker {
        widgets::render_file_picker(frame, area, picker);
    }

    if let Some(dialog) = &app.dialog {
        widgets::render_dialog(frame, area, dialog);
    }
}
