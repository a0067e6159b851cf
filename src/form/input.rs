use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::form::{
    app::{App, Focus},
    picker::PickerFocus,
};

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.dialog.is_some() {
        handle_dialog_input(app, key);
        return;
    }

    if app.picker.is_some() {
        handle_picker_input(app, key);
        return;
    }

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char('e') if ctrl => app.submit(),
        KeyCode::Char('b') if ctrl => app.browse(),
        KeyCode::Tab | KeyCode::Down => app.focus = app.focus.next(),
        KeyCode::BackTab | KeyCode::Up => app.focus = app.focus.previous(),
        KeyCode::Enter => match app.focus {
            Focus::Browse => app.browse(),
            Focus::Export => app.submit(),
            _ => app.focus = app.focus.next(),
        },
        KeyCode::Char(' ') if !app.focus.is_text_field() => match app.focus {
            Focus::Browse => app.browse(),
            _ => app.submit(),
        },
        KeyCode::Char(c) if !ctrl => {
            if let Some(field) = focused_field(app) {
                field.push(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(field) = focused_field(app) {
                field.pop();
            }
        }
        _ => {}
    }
}

/// Appends pasted text to the focused field, dropping line breaks.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.dialog.is_some() {
        return;
    }

    if let Some(picker) = app.picker.as_mut() {
        if picker.focus == PickerFocus::FileName {
            picker
                .file_name
                .extend(text.chars().filter(|c| !matches!(c, '\r' | '\n')));
        }
        return;
    }

    if let Some(field) = focused_field(app) {
        field.extend(text.chars().filter(|c| !matches!(c, '\r' | '\n')));
    }
}

fn handle_dialog_input(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.dismiss_dialog();
    }
}

/// Keys while the save-as picker is open.
///
/// Tab switches between the entry list and the file name. In the list, Enter
/// opens a directory or picks an existing spreadsheet; in the file name,
/// Enter picks `<dir>/<name>`.
fn handle_picker_input(app: &mut App, key: KeyEvent) {
    let playlist_id = app.fields.playlist_id.clone();
    let Some(picker) = app.picker.as_mut() else {
        return;
    };

    let chosen = match (picker.focus, key.code) {
        (_, KeyCode::Esc) => {
            app.close_picker();
            return;
        }
        (_, KeyCode::Tab | KeyCode::BackTab) => {
            picker.toggle_focus();
            None
        }
        (PickerFocus::List, KeyCode::Up | KeyCode::Char('k')) => {
            picker.select_previous();
            None
        }
        (PickerFocus::List, KeyCode::Down | KeyCode::Char('j')) => {
            picker.select_next();
            None
        }
        (PickerFocus::List, KeyCode::Left | KeyCode::Backspace) => {
            picker.go_up();
            None
        }
        (PickerFocus::List, KeyCode::Enter | KeyCode::Right) => picker.activate(),
        (PickerFocus::FileName, KeyCode::Enter) => Some(picker.chosen_path(&playlist_id)),
        (PickerFocus::FileName, KeyCode::Backspace) => {
            picker.file_name.pop();
            None
        }
        (PickerFocus::FileName, KeyCode::Char(c))
            if !key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            picker.file_name.push(c);
            None
        }
        _ => None,
    };

    if let Some(path) = chosen {
        app.choose_output(path);
    }
}

fn focused_field(app: &mut App) -> Option<&mut String> {
    match app.focus {
        Focus::Token => Some(&mut app.fields.token),
        Focus::PlaylistId => Some(&mut app.fields.playlist_id),
        Focus::Output => Some(&mut app.fields.output),
        Focus::Browse | Focus::Export => None,
    }
}
