//! Desktop composition root: owns the file store, window state, and the
//! content pane behind each open window.

use std::collections::HashMap;

use desktop_app_explorer::ExplorerRequest;
use virtual_fs::{resolve_path, seed_tree, FileStore, NodeId};

use crate::apps::{build_content, AppContent};
use crate::model::{
    AppId, DesktopState, InteractionState, OpenWindowRequest, WindowKey,
};
use crate::reducer::{reduce_desktop, DesktopAction, RuntimeEffect};

/// The running desktop: seeded file system, window manager state, and one
/// [`AppContent`] per open window.
pub struct DesktopRuntime {
    fs: FileStore,
    state: DesktopState,
    interaction: InteractionState,
    contents: HashMap<WindowKey, AppContent>,
}

impl DesktopRuntime {
    /// Boots a desktop over the standard seeded drive.
    pub fn new() -> Self {
        Self {
            fs: seed_tree(),
            state: DesktopState::default(),
            interaction: InteractionState::default(),
            contents: HashMap::new(),
        }
    }

    /// Current window-manager state.
    pub fn state(&self) -> &DesktopState {
        &self.state
    }

    /// The shared file store.
    pub fn fs(&self) -> &FileStore {
        &self.fs
    }

    /// Content pane behind a window, if the window is open.
    pub fn content(&self, key: &WindowKey) -> Option<&AppContent> {
        self.contents.get(key)
    }

    /// Launches an application from the start menu or a desktop icon.
    ///
    /// Launcher windows are singletons keyed by the app's canonical id, so a
    /// second launch focuses the existing window instead of opening another.
    /// Per-document editors come from [`DesktopRuntime::open_file`] instead.
    pub fn activate_app(&mut self, app_id: AppId) -> WindowKey {
        self.open(OpenWindowRequest::new(app_id))
    }

    /// Opens a file in a notepad window keyed by the file's node id, so a
    /// second open of the same file focuses the existing editor.
    pub fn open_file(&mut self, file: NodeId) -> WindowKey {
        let name = self
            .fs
            .get(file)
            .map(|node| node.name.clone())
            .unwrap_or_else(|| "Untitled".to_string());
        let mut request = OpenWindowRequest::new(AppId::Notepad);
        request.key = WindowKey::new(format!("notepad-{}", file.0));
        request.title = Some(format!("Notepad - {name}"));
        request.launch_params = serde_json::json!({ "file_id": file.0 });
        self.open(request)
    }

    /// Opens (or re-focuses) the window described by the request.
    pub fn open(&mut self, request: OpenWindowRequest) -> WindowKey {
        let key = request.key.clone();
        if !self.contents.contains_key(&key) {
            let content = build_content(request.app_id, &request.launch_params, &self.fs);
            self.contents.insert(key.clone(), content);
        }
        self.dispatch(DesktopAction::OpenWindow(request));
        key
    }

    /// Applies a window-manager action and executes its effects.
    ///
    /// Actions that reference a window which no longer exists are dropped
    /// silently; a stale taskbar click must not disturb the desktop.
    pub fn dispatch(&mut self, action: DesktopAction) {
        let Ok(effects) = reduce_desktop(&mut self.state, &mut self.interaction, action) else {
            return;
        };
        for effect in effects {
            match effect {
                RuntimeEffect::WindowClosed(key) => {
                    self.contents.remove(&key);
                }
                RuntimeEffect::FocusWindowInput(_) => {}
            }
        }
    }

    /// Runs one command line in a terminal window's shell session.
    pub fn execute_terminal(&mut self, key: &WindowKey, line: &str) -> Vec<String> {
        match self.contents.get_mut(key) {
            Some(AppContent::Terminal(pane)) => pane.submit(&mut self.fs, line),
            _ => Vec::new(),
        }
    }

    /// Handles a double-click in an explorer window. Folders navigate in
    /// place; files open in a notepad window, whose key is returned.
    pub fn explorer_activate(&mut self, key: &WindowKey, target: NodeId) -> Option<WindowKey> {
        let request = match self.contents.get_mut(key) {
            Some(AppContent::Explorer(pane)) => pane.activate(&self.fs, target),
            _ => None,
        };
        match request {
            Some(ExplorerRequest::OpenFile(file)) => Some(self.open_file(file)),
            None => None,
        }
    }

    /// Saves a notepad window's buffer, creating an untitled file on the
    /// Desktop when the pane has no bound file yet.
    pub fn save_notepad(&mut self, key: &WindowKey) -> Option<NodeId> {
        let desktop = resolve_path(&self.fs, self.fs.root(), "/Users/Admin/Desktop")
            .unwrap_or_else(|| self.fs.root());
        match self.contents.get_mut(key) {
            Some(AppContent::Notepad(pane)) => pane.save(&mut self.fs, desktop).ok(),
            _ => None,
        }
    }
}

impl Default for DesktopRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn launching_an_app_twice_reuses_the_window() {
        let mut desktop = DesktopRuntime::new();
        let first = desktop.activate_app(AppId::Explorer);
        let second = desktop.activate_app(AppId::Explorer);

        assert_eq!(first, second);
        assert_eq!(desktop.state().windows.len(), 1);
        assert_eq!(desktop.contents.len(), 1);
    }

    #[test]
    fn launching_notepad_twice_reuses_the_launcher_window() {
        let mut desktop = DesktopRuntime::new();
        let first = desktop.activate_app(AppId::Notepad);
        let second = desktop.activate_app(AppId::Notepad);

        assert_eq!(first, second);
        assert_eq!(first.as_str(), "notepad");
        assert_eq!(desktop.state().windows.len(), 1);
        assert_eq!(desktop.state().active_window, Some(first));
    }

    #[test]
    fn launcher_notepad_and_file_editors_keep_separate_windows() {
        let mut desktop = DesktopRuntime::new();
        let launcher = desktop.activate_app(AppId::Notepad);
        let readme = resolve_path(desktop.fs(), desktop.fs().root(), "/Documentation/README.md")
            .expect("seeded readme");
        let editor = desktop.open_file(readme);

        assert_ne!(launcher, editor);
        assert_eq!(desktop.state().windows.len(), 2);
        match desktop.content(&launcher) {
            Some(AppContent::Notepad(pane)) => assert_eq!(pane.file(), None),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn closing_a_window_drops_its_content() {
        let mut desktop = DesktopRuntime::new();
        let key = desktop.activate_app(AppId::Terminal);
        desktop.dispatch(DesktopAction::CloseWindow { key: key.clone() });

        assert!(desktop.content(&key).is_none());
        assert!(desktop.state().window(&key).is_none());
    }

    #[test]
    fn actions_on_unknown_windows_are_ignored() {
        let mut desktop = DesktopRuntime::new();
        let key = desktop.activate_app(AppId::Explorer);
        let state_before = desktop.state().clone();

        desktop.dispatch(DesktopAction::FocusWindow {
            key: WindowKey::new("gone"),
        });
        desktop.dispatch(DesktopAction::CloseWindow {
            key: WindowKey::new("gone"),
        });

        assert_eq!(desktop.state(), &state_before);
        assert!(desktop.content(&key).is_some());
    }

    #[test]
    fn opening_the_same_file_twice_focuses_the_existing_editor() {
        let mut desktop = DesktopRuntime::new();
        let readme = resolve_path(desktop.fs(), desktop.fs().root(), "/Documentation/README.md")
            .expect("seeded readme");

        let first = desktop.open_file(readme);
        desktop.activate_app(AppId::Explorer);
        let second = desktop.open_file(readme);

        assert_eq!(first, second);
        assert_eq!(desktop.state().active_window, Some(first.clone()));
        assert_eq!(
            desktop.state().window(&first).unwrap().title,
            "Notepad - README.md"
        );
    }

    #[test]
    fn saving_an_unbound_notepad_lands_on_the_desktop_folder() {
        let mut desktop = DesktopRuntime::new();
        let key = desktop.activate_app(AppId::Notepad);
        match desktop.contents.get_mut(&key) {
            Some(AppContent::Notepad(pane)) => pane.set_text("site notes"),
            other => panic!("unexpected content: {other:?}"),
        }

        let saved = desktop.save_notepad(&key).expect("save succeeds");
        let node = desktop.fs().get(saved).expect("saved node");
        let parent = node.parent.expect("saved under a folder");
        let desktop_dir =
            resolve_path(desktop.fs(), desktop.fs().root(), "/Users/Admin/Desktop").unwrap();

        assert_eq!(parent, desktop_dir);
        assert!(node.name.starts_with("Untitled_"));
        assert_eq!(node.content(), Some("site notes"));
    }
}
