mod common;

use std::path::{Path, PathBuf};

use axum::http::StatusCode;
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use deezer_export::form::{
    app::{App, DialogKind, Focus, FormSettings, Phase},
    event::{Event, EventHandler, FetchEvent},
    picker::PickerFocus,
};

use common::{serve_pages, serve_status, track_json};

// Helper function to create a form talking to `api_url`
fn create_test_app(api_url: &str, default_dir: &Path) -> App {
    App::new(
        FormSettings {
            api_url: api_url.to_string(),
            token: None,
            default_dir: default_dir.to_path_buf(),
        },
        EventHandler::without_terminal(),
    )
}

fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    app.handle_event(Event::Terminal(CrosstermEvent::Key(KeyEvent::new(
        code, modifiers,
    ))));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c), KeyModifiers::NONE);
    }
}

async fn wait_until_idle(app: &mut App) {
    while app.phase == Phase::Fetching {
        assert!(app.step().await);
    }
}

#[test]
fn test_prefilled_token() {
    let app = App::new(
        FormSettings {
            api_url: "http://unused".to_string(),
            token: Some("from-env".to_string()),
            default_dir: PathBuf::from("/tmp"),
        },
        EventHandler::without_terminal(),
    );

    assert_eq!(app.fields.token, "from-env");
    assert_eq!(app.phase, Phase::Idle);
    assert!(app.export_enabled());
}

#[test]
fn test_focus_cycles_through_fields_and_buttons() {
    let mut app = create_test_app("http://unused", Path::new("/tmp"));

    assert_eq!(app.focus, Focus::Token);
    let mut seen = Vec::new();
    for _ in 0..5 {
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        seen.push(app.focus);
    }
    assert_eq!(
        seen,
        vec![
            Focus::PlaylistId,
            Focus::Output,
            Focus::Browse,
            Focus::Export,
            Focus::Token
        ]
    );

    press(&mut app, KeyCode::BackTab, KeyModifiers::SHIFT);
    assert_eq!(app.focus, Focus::Export);
}

#[test]
fn test_typing_and_pasting_into_focused_field() {
    let mut app = create_test_app("http://unused", Path::new("/tmp"));

    type_text(&mut app, "abc");
    press(&mut app, KeyCode::Backspace, KeyModifiers::NONE);
    assert_eq!(app.fields.token, "ab");

    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(app.focus, Focus::PlaylistId);
    app.handle_event(Event::Terminal(CrosstermEvent::Paste(
        "908622995\n".to_string(),
    )));
    assert_eq!(app.fields.playlist_id, "908622995");
}

// Helper function to create a directory with something to browse
fn create_browse_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("exports")).unwrap();
    std::fs::create_dir(dir.path().join(".cache")).unwrap();
    std::fs::write(dir.path().join("old.xlsx"), "").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "").unwrap();
    dir
}

fn entry_names(app: &App) -> Vec<String> {
    app.picker
        .as_ref()
        .unwrap()
        .entries
        .iter()
        .map(|entry| entry.name.clone())
        .collect()
}

#[test]
fn test_browse_opens_picker_in_default_dir() {
    let dir = create_browse_dir();
    let mut app = create_test_app("http://unused", dir.path());
    app.fields.playlist_id = "42".to_string();

    press(&mut app, KeyCode::Char('b'), KeyModifiers::CONTROL);

    let picker = app.picker.as_ref().unwrap();
    assert_eq!(picker.dir, dir.path());
    assert_eq!(picker.file_name, "deezer-playlist-42.xlsx");
    assert_eq!(picker.focus, PickerFocus::List);
    // Hidden entries and non-spreadsheets are left out
    assert_eq!(entry_names(&app), vec!["..", "exports", "old.xlsx"]);
    assert_eq!(app.fields.output, "");
}

#[test]
fn test_browse_picks_new_file_in_sub_directory() {
    let dir = create_browse_dir();
    let mut app = create_test_app("http://unused", dir.path());
    app.fields.playlist_id = "42".to_string();
    app.focus = Focus::Browse;

    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    press(&mut app, KeyCode::Down, KeyModifiers::NONE);
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

    assert_eq!(app.picker.as_ref().unwrap().dir, dir.path().join("exports"));
    assert_eq!(entry_names(&app), vec![".."]);
    assert_eq!(app.fields.output, "");

    press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
    for _ in 0.."deezer-playlist-42.xlsx".len() {
        press(&mut app, KeyCode::Backspace, KeyModifiers::NONE);
    }
    type_text(&mut app, "mix");
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

    assert!(app.picker.is_none());
    assert_eq!(
        app.fields.output,
        dir.path().join("exports").join("mix.xlsx").display().to_string()
    );
    assert!(app.running);
}

#[test]
fn test_browse_picks_existing_spreadsheet() {
    let dir = create_browse_dir();
    let mut app = create_test_app("http://unused", dir.path());

    press(&mut app, KeyCode::Char('b'), KeyModifiers::CONTROL);
    press(&mut app, KeyCode::Down, KeyModifiers::NONE);
    press(&mut app, KeyCode::Down, KeyModifiers::NONE);
    // Stays on the last entry
    press(&mut app, KeyCode::Down, KeyModifiers::NONE);
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

    assert!(app.picker.is_none());
    assert_eq!(
        app.fields.output,
        dir.path().join("old.xlsx").display().to_string()
    );
}

#[test]
fn test_browse_starts_from_current_output_and_navigates_up() {
    let dir = create_browse_dir();
    let mut app = create_test_app("http://unused", Path::new("/nonexistent"));
    let current = dir.path().join("exports").join("report.xlsx");
    app.fields.output = current.display().to_string();

    press(&mut app, KeyCode::Char('b'), KeyModifiers::CONTROL);

    let picker = app.picker.as_ref().unwrap();
    assert_eq!(picker.dir, dir.path().join("exports"));
    assert_eq!(picker.file_name, "report.xlsx");

    press(&mut app, KeyCode::Left, KeyModifiers::NONE);
    assert_eq!(app.picker.as_ref().unwrap().dir, dir.path());

    press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(
        app.fields.output,
        dir.path().join("report.xlsx").display().to_string()
    );
}

#[test]
fn test_browse_escape_keeps_output_and_form_open() {
    let dir = create_browse_dir();
    let mut app = create_test_app("http://unused", dir.path());
    app.fields.output = "kept.xlsx".to_string();

    press(&mut app, KeyCode::Char('b'), KeyModifiers::CONTROL);
    press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
    type_text(&mut app, "zzz");
    app.handle_event(Event::Terminal(CrosstermEvent::Paste("\n".to_string())));
    press(&mut app, KeyCode::Esc, KeyModifiers::NONE);

    assert!(app.picker.is_none());
    assert!(app.running);
    assert_eq!(app.fields.output, "kept.xlsx");
}

#[test]
fn test_submit_with_missing_fields_shows_dialog_without_fetching() {
    let mut app = create_test_app("http://unused", Path::new("/tmp"));
    app.fields.token = "arl".to_string();
    app.fields.playlist_id = "42".to_string();

    press(&mut app, KeyCode::Char('e'), KeyModifiers::CONTROL);

    assert_eq!(app.phase, Phase::Idle);
    let dialog = app.dialog.clone().unwrap();
    assert_eq!(dialog.kind, DialogKind::Error);
    assert_eq!(dialog.message, "Please fill all fields!");

    // Keys only dismiss the dialog while it is open
    press(&mut app, KeyCode::Char('x'), KeyModifiers::NONE);
    assert_eq!(app.fields.token, "arl");
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    assert!(app.dialog.is_none());
}

#[test]
fn test_progress_updates_status() {
    let mut app = create_test_app("http://unused", Path::new("/tmp"));

    app.handle_fetch_event(FetchEvent::Progress {
        fetched: 25,
        total: Some(100),
    });

    assert_eq!(app.fetched, 25);
    assert_eq!(app.total, Some(100));
    assert_eq!(app.status_message, "Fetched 25/100 tracks...");
}

#[tokio::test]
async fn test_export_writes_workbook_and_reports_success() {
    let api = serve_pages(vec![
        vec![track_json("One"), track_json("Two")],
        vec![track_json("Three")],
    ])
    .await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("playlist.xlsx");

    let mut app = create_test_app(&api.base, dir.path());
    app.fields.token = "secret".to_string();
    app.fields.playlist_id = "1234".to_string();
    app.fields.output = output.display().to_string();

    app.submit();
    assert_eq!(app.phase, Phase::Fetching);
    assert!(!app.export_enabled());

    // A second submit while fetching is ignored
    app.submit();

    wait_until_idle(&mut app).await;

    assert!(app.export_enabled());
    assert_eq!(app.fetched, 3);
    assert!(output.is_file());
    let dialog = app.dialog.clone().unwrap();
    assert_eq!(dialog.kind, DialogKind::Info);
    assert!(dialog.message.contains(&output.display().to_string()));
    assert_eq!(api.authorizations.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_export_forbidden_shows_status_and_writes_nothing() {
    let base = serve_status(StatusCode::FORBIDDEN, "forbidden").await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("playlist.xlsx");

    let mut app = create_test_app(&base, dir.path());
    app.fields.token = "secret".to_string();
    app.fields.playlist_id = "1234".to_string();
    app.fields.output = output.display().to_string();

    app.submit();
    wait_until_idle(&mut app).await;

    assert!(!output.exists());
    assert!(app.export_enabled());
    let dialog = app.dialog.clone().unwrap();
    assert_eq!(dialog.kind, DialogKind::Error);
    assert!(dialog.message.contains("403"));
}

#[tokio::test]
async fn test_export_unwritable_output_reports_error() {
    let api = serve_pages(vec![vec![track_json("One")]]).await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing").join("playlist.xlsx");

    let mut app = create_test_app(&api.base, dir.path());
    app.fields.token = "secret".to_string();
    app.fields.playlist_id = "1234".to_string();
    app.fields.output = output.display().to_string();

    app.submit();
    wait_until_idle(&mut app).await;

    assert!(app.export_enabled());
    assert_eq!(app.dialog.clone().unwrap().kind, DialogKind::Error);
}
