//! Headless Notepad editor buffer backed by the virtual file tree.

use chrono::Utc;
use virtual_fs::{FileStore, FsError, NodeId, NodeKind};

/// Editor state for one open Notepad window.
///
/// The buffer lives only in memory; closing the window discards unsaved text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotepadPane {
    file: Option<NodeId>,
    buffer: String,
    status: String,
}

impl NotepadPane {
    /// Creates an empty, unbound editor.
    pub fn new() -> Self {
        Self {
            file: None,
            buffer: String::new(),
            status: "Ready".to_string(),
        }
    }

    /// Creates an editor bound to an existing file, loading its content.
    pub fn open(fs: &FileStore, file: NodeId) -> Self {
        let buffer = fs
            .get(file)
            .and_then(|node| node.content())
            .unwrap_or_default()
            .to_string();
        Self {
            file: Some(file),
            buffer,
            status: "Loaded".to_string(),
        }
    }

    /// File the editor is bound to, if any.
    pub fn file(&self) -> Option<NodeId> {
        self.file
    }

    /// Current buffer text.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Status line shown in the editor chrome.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Replaces the buffer and marks it unsaved.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.status = "Unsaved".to_string();
    }

    /// Writes the buffer back to the store.
    ///
    /// Bound editors update their file in place; unbound editors create a new
    /// `Untitled_<millis>.txt` under `fallback_dir` (the user's Desktop) and
    /// bind to it. Failures surface in the status line as well as the result.
    pub fn save(&mut self, fs: &mut FileStore, fallback_dir: NodeId) -> Result<NodeId, FsError> {
        let result = match self.file {
            Some(file) => fs.update_file_content(file, self.buffer.clone()).map(|()| file),
            None => {
                let name = format!("Untitled_{}.txt", Utc::now().timestamp_millis());
                fs.create_node(fallback_dir, name, NodeKind::File, self.buffer.clone())
            }
        };
        match &result {
            Ok(file) => {
                self.file = Some(*file);
                self.status = "Saved".to_string();
            }
            Err(err) => {
                self.status = format!("Save failed: {err}");
            }
        }
        result
    }
}

impl Default for NotepadPane {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use virtual_fs::{resolve_path, seed_tree};

    fn desktop(fs: &FileStore) -> NodeId {
        resolve_path(fs, fs.root(), "/Users/Admin/Desktop").expect("seed desktop")
    }

    #[test]
    fn open_loads_existing_file_content() {
        let fs = seed_tree();
        let notes = resolve_path(&fs, fs.root(), "/Users/Admin/Desktop/Meeting_Notes.txt").unwrap();
        let pane = NotepadPane::open(&fs, notes);
        assert!(pane.text().starts_with("- Review safety protocols"));
        assert_eq!(pane.status(), "Loaded");
    }

    #[test]
    fn save_updates_the_bound_file_in_place() {
        let mut fs = seed_tree();
        let notes = resolve_path(&fs, fs.root(), "/Users/Admin/Desktop/Meeting_Notes.txt").unwrap();
        let mut pane = NotepadPane::open(&fs, notes);

        pane.set_text("rewritten");
        assert_eq!(pane.status(), "Unsaved");
        let desktop = desktop(&fs);
        assert_eq!(pane.save(&mut fs, desktop), Ok(notes));
        assert_eq!(fs.node(notes).unwrap().content(), Some("rewritten"));
        assert_eq!(pane.status(), "Saved");
    }

    #[test]
    fn save_without_a_bound_file_creates_an_untitled_file_on_desktop() {
        let mut fs = seed_tree();
        let desktop = desktop(&fs);
        let mut pane = NotepadPane::new();
        pane.set_text("draft");

        let file = pane.save(&mut fs, desktop).unwrap();
        let node = fs.node(file).unwrap();
        assert!(node.name.starts_with("Untitled_"));
        assert_eq!(node.parent, Some(desktop));
        assert_eq!(node.content(), Some("draft"));
        assert_eq!(pane.file(), Some(file));
    }

    #[test]
    fn save_after_the_file_was_deleted_reports_failure() {
        let mut fs = seed_tree();
        let notes = resolve_path(&fs, fs.root(), "/Users/Admin/Desktop/Meeting_Notes.txt").unwrap();
        let mut pane = NotepadPane::open(&fs, notes);
        fs.delete_node(notes).unwrap();

        pane.set_text("lost");
        let desktop = desktop(&fs);
        assert_eq!(pane.save(&mut fs, desktop), Err(FsError::NotFound));
        assert!(pane.status().starts_with("Save failed"));
    }
}
