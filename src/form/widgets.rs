use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::form::{
    app::{Dialog, DialogKind},
    picker::{EntryKind, FilePicker, PickerEntry, PickerFocus, VISIBLE_ENTRIES},
};

pub const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render an input field with focus indicator
pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_focused: bool,
    masked: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(label)
        .border_style(if is_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        });

    let mut text = if masked {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    if is_focused {
        text.push('▏');
    }

    let paragraph = Paragraph::new(text).block(block).style(if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    });

    frame.render_widget(paragraph, area);
}

/// Render a button; disabled buttons are greyed out whatever the focus.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, is_focused: bool, enabled: bool) {
    let style = if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::bordered());

    frame.render_widget(button, area);
}

/// Render a modal dialog centered over `area`.
pub fn render_dialog(frame: &mut Frame, area: Rect, dialog: &Dialog) {
    let color = match dialog.kind {
        DialogKind::Info => Color::Green,
        DialogKind::Error => Color::Red,
    };

    let popup = popup_area(area, 60, 9);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(dialog.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter: OK]",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .title(dialog.title.as_str())
                .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(paragraph, popup);
}

/// Render the save-as picker: current directory, entries and file name.
pub fn render_file_picker(frame: &mut Frame, area: Rect, picker: &FilePicker) {
    let popup = popup_area(area, 70, VISIBLE_ENTRIES as u16 + 9);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .title("Save as")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Directory
            Constraint::Min(3),    // Entries
            Constraint::Length(3), // File name
            Constraint::Length(1), // Help text
        ])
        .split(inner);

    let dir = Paragraph::new(picker.dir.display().to_string())
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(dir, chunks[0]);

    let list_focused = picker.focus == PickerFocus::List;
    let list_block = Block::default().borders(Borders::ALL).border_style(if list_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    });

    match &picker.error {
        Some(e) if picker.entries.len() <= 1 => {
            let paragraph = Paragraph::new(e.as_str())
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::Red))
                .block(list_block);
            frame.render_widget(paragraph, chunks[1]);
        }
        _ => {
            let items: Vec<_> = picker
                .entries
                .iter()
                .enumerate()
                .skip(picker.scroll)
                .take(chunks[1].height.saturating_sub(2) as usize)
                .map(|(idx, entry)| render_picker_entry(entry, list_focused && idx == picker.selected))
                .collect();
            frame.render_widget(List::new(items).block(list_block), chunks[1]);
        }
    }

    render_input_field(
        frame,
        chunks[2],
        "File name",
        &picker.file_name,
        picker.focus == PickerFocus::FileName,
        false,
    );

    let help = Paragraph::new("[Tab: List/Name] [Enter: Open/Save] [←: Up] [Esc: Cancel]")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}

fn render_picker_entry(entry: &PickerEntry, is_selected: bool) -> ListItem<'_> {
    let prefix = if is_selected { "> " } else { "  " };
    let style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        match entry.kind {
            EntryKind::Parent | EntryKind::Directory => Style::default().fg(Color::Blue),
            EntryKind::Spreadsheet => Style::default(),
        }
    };

    let name = match entry.kind {
        EntryKind::Parent | EntryKind::Directory => format!("{}/", entry.name),
        EntryKind::Spreadsheet => entry.name.clone(),
    };

    ListItem::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(name, style),
    ]))
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
