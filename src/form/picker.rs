use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::utils;

/// Entries visible at once; used to keep the selection on screen.
pub const VISIBLE_ENTRIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Parent,
    Directory,
    Spreadsheet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerFocus {
    List,
    FileName,
}

/// Save-as browser over the local file system.
///
/// Lists the parent directory, sub-directories and existing `.xlsx` files of
/// `dir`. Hidden entries are left out.
#[derive(Debug, Clone)]
pub struct FilePicker {
    pub dir: PathBuf,
    pub entries: Vec<PickerEntry>,
    pub selected: usize,
    pub scroll: usize,
    pub file_name: String,
    pub focus: PickerFocus,
    /// Set when `dir` could not be listed.
    pub error: Option<String>,
}

impl FilePicker {
    /// Opens the picker next to the current output, or in `default_dir` when
    /// the output field is empty or points nowhere.
    pub fn open(output: &str, playlist_id: &str, default_dir: &Path) -> Self {
        let output = output.trim();
        let current = PathBuf::from(output);

        let (dir, file_name) = if output.is_empty() {
            (default_dir.to_path_buf(), None)
        } else if current.is_dir() {
            (current, None)
        } else {
            let parent = current
                .parent()
                .filter(|p| p.is_dir())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| default_dir.to_path_buf());
            let name = current
                .file_name()
                .map(|name| name.to_string_lossy().to_string());
            (parent, name)
        };

        let mut picker = Self {
            dir,
            entries: Vec::new(),
            selected: 0,
            scroll: 0,
            file_name: file_name.unwrap_or_else(|| utils::default_file_name(playlist_id)),
            focus: PickerFocus::List,
            error: None,
        };
        picker.refresh();
        picker
    }

    /// Re-reads the current directory and resets the selection.
    pub fn refresh(&mut self) {
        self.selected = 0;
        self.scroll = 0;

        match list_dir(&self.dir) {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
            }
            Err(e) => {
                self.entries = self
                    .dir
                    .parent()
                    .map(|parent| vec![parent_entry(parent)])
                    .unwrap_or_default();
                self.error = Some(format!("Cannot read {}: {}", self.dir.display(), e));
            }
        }
    }

    pub fn selected_entry(&self) -> Option<&PickerEntry> {
        self.entries.get(self.selected)
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            if self.selected < self.scroll {
                self.scroll = self.selected;
            }
        }
    }

    pub fn select_next(&mut self) {
        if self.selected < self.entries.len().saturating_sub(1) {
            self.selected += 1;
            if self.selected >= self.scroll + VISIBLE_ENTRIES {
                self.scroll = self.selected + 1 - VISIBLE_ENTRIES;
            }
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PickerFocus::List => PickerFocus::FileName,
            PickerFocus::FileName => PickerFocus::List,
        };
    }

    pub fn enter_dir(&mut self, dir: PathBuf) {
        self.dir = dir;
        self.refresh();
    }

    pub fn go_up(&mut self) {
        if let Some(parent) = self.dir.parent().map(Path::to_path_buf) {
            self.enter_dir(parent);
        }
    }

    /// Activates the highlighted entry.
    ///
    /// Directories are entered and `None` is returned; an existing spreadsheet
    /// is returned as the chosen path.
    pub fn activate(&mut self) -> Option<PathBuf> {
        let entry = self.selected_entry()?.clone();

        match entry.kind {
            EntryKind::Parent | EntryKind::Directory => {
                self.enter_dir(entry.path);
                None
            }
            EntryKind::Spreadsheet => Some(entry.path),
        }
    }

    /// Path for the typed file name in the current directory, `.xlsx` appended
    /// when it has no extension.
    pub fn chosen_path(&self, playlist_id: &str) -> PathBuf {
        utils::resolve_output_path(
            &self.dir.join(self.file_name.trim()).display().to_string(),
            playlist_id,
            &self.dir,
        )
    }
}

fn parent_entry(parent: &Path) -> PickerEntry {
    PickerEntry {
        name: "..".to_string(),
        path: parent.to_path_buf(),
        kind: EntryKind::Parent,
    }
}

fn list_dir(dir: &Path) -> io::Result<Vec<PickerEntry>> {
    let mut dirs = Vec::new();
    let mut sheets = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            dirs.push(PickerEntry {
                name,
                path,
                kind: EntryKind::Directory,
            });
        } else if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(utils::XLSX_EXTENSION))
        {
            sheets.push(PickerEntry {
                name,
                path,
                kind: EntryKind::Spreadsheet,
            });
        }
    }

    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    sheets.sort_by(|a, b| a.name.cmp(&b.name));

    let mut entries: Vec<PickerEntry> = dir.parent().map(parent_entry).into_iter().collect();
    entries.extend(dirs);
    entries.extend(sheets);
    Ok(entries)
}
