//! Headless File Explorer pane: navigation history, search filter, and item
//! activation over the shared file tree. Rendering lives elsewhere.

use virtual_fs::{node_path, FileNode, FileStore, NodeId};

/// Request raised by the pane for the desktop runtime to fulfil.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerRequest {
    /// Open the given file in a per-document Notepad window.
    OpenFile(NodeId),
}

/// Browsing state for one open Explorer window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerPane {
    current: NodeId,
    history: Vec<NodeId>,
    history_index: usize,
    search: String,
}

impl ExplorerPane {
    /// Opens the pane at the given folder.
    pub fn new(initial: NodeId) -> Self {
        Self {
            current: initial,
            history: vec![initial],
            history_index: 0,
            search: String::new(),
        }
    }

    /// Folder currently shown.
    pub fn current(&self) -> NodeId {
        self.current
    }

    /// Absolute path of the current folder.
    pub fn current_path(&self, fs: &FileStore) -> String {
        node_path(fs, self.current)
    }

    /// Updates the search filter applied by [`ExplorerPane::entries`].
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Navigates to a folder, truncating any forward history.
    pub fn navigate(&mut self, target: NodeId) {
        self.history.truncate(self.history_index + 1);
        self.history.push(target);
        self.history_index = self.history.len() - 1;
        self.current = target;
    }

    /// Steps back in history; no-op at the oldest entry.
    pub fn back(&mut self) {
        if self.history_index > 0 {
            self.history_index -= 1;
            self.current = self.history[self.history_index];
        }
    }

    /// Steps forward in history; no-op at the newest entry.
    pub fn forward(&mut self) {
        if self.history_index + 1 < self.history.len() {
            self.history_index += 1;
            self.current = self.history[self.history_index];
        }
    }

    /// Navigates to the parent folder; no-op at the root.
    pub fn up(&mut self, fs: &FileStore) {
        if let Some(parent) = fs.get(self.current).and_then(|node| node.parent) {
            self.navigate(parent);
        }
    }

    /// Children of the current folder matching the search filter.
    ///
    /// A stale current folder (deleted underneath the pane) lists as empty.
    pub fn entries<'a>(&self, fs: &'a FileStore) -> Vec<&'a FileNode> {
        let query = self.search.to_lowercase();
        fs.list_children(self.current)
            .unwrap_or_default()
            .into_iter()
            .filter(|node| query.is_empty() || node.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Double-click semantics: folders navigate, files ask to be opened.
    pub fn activate(&mut self, fs: &FileStore, target: NodeId) -> Option<ExplorerRequest> {
        let node = fs.get(target)?;
        if node.is_folder() {
            self.navigate(target);
            None
        } else {
            Some(ExplorerRequest::OpenFile(target))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use virtual_fs::{resolve_path, seed_tree};

    fn pane() -> (FileStore, ExplorerPane) {
        let fs = seed_tree();
        let root = fs.root();
        (fs, ExplorerPane::new(root))
    }

    #[test]
    fn navigate_back_forward_and_up_walk_history() {
        let (fs, mut pane) = pane();
        let users = resolve_path(&fs, fs.root(), "/Users").unwrap();
        let admin = resolve_path(&fs, fs.root(), "/Users/Admin").unwrap();

        pane.navigate(users);
        pane.navigate(admin);
        assert_eq!(pane.current_path(&fs), "/Users/Admin");

        pane.back();
        assert_eq!(pane.current(), users);
        pane.forward();
        assert_eq!(pane.current(), admin);
        pane.up(&fs);
        assert_eq!(pane.current(), users);
    }

    #[test]
    fn navigating_truncates_forward_history() {
        let (fs, mut pane) = pane();
        let users = resolve_path(&fs, fs.root(), "/Users").unwrap();
        let system = resolve_path(&fs, fs.root(), "/System").unwrap();

        pane.navigate(users);
        pane.back();
        pane.navigate(system);
        pane.forward();
        assert_eq!(pane.current(), system);
    }

    #[test]
    fn up_at_root_is_a_noop() {
        let (fs, mut pane) = pane();
        pane.up(&fs);
        assert_eq!(pane.current(), fs.root());
    }

    #[test]
    fn search_filter_is_case_insensitive() {
        let (fs, mut pane) = pane();
        let docs = resolve_path(&fs, fs.root(), "/Users/Admin/Documents").unwrap();
        pane.navigate(docs);
        pane.set_search("budget");

        let names: Vec<&str> = pane.entries(&fs).iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Budget_2025.csv"]);
    }

    #[test]
    fn activate_navigates_folders_and_requests_files() {
        let (fs, mut pane) = pane();
        let docs = resolve_path(&fs, fs.root(), "/Users/Admin/Documents").unwrap();
        let plan = resolve_path(&fs, fs.root(), "/Users/Admin/Documents/Project_Alpha.txt").unwrap();

        assert_eq!(pane.activate(&fs, docs), None);
        assert_eq!(pane.current(), docs);
        assert_eq!(pane.activate(&fs, plan), Some(ExplorerRequest::OpenFile(plan)));
    }

    #[test]
    fn stale_current_folder_lists_as_empty() {
        let (mut fs, mut pane) = pane();
        let downloads = resolve_path(&fs, fs.root(), "/Users/Admin/Downloads").unwrap();
        pane.navigate(downloads);
        fs.delete_node(downloads).unwrap();
        assert!(pane.entries(&fs).is_empty());
    }
}
