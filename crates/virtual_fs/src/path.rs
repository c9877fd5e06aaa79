//! Stateless translation between node identity and absolute path strings.

use crate::store::{FileStore, NodeId};

/// Returns the absolute path of a node, `/`-joined from root to leaf.
///
/// The root itself renders as `/`; its name never appears in paths.
pub fn node_path(fs: &FileStore, id: NodeId) -> String {
    let mut path = String::new();
    let mut current = fs.get(id);
    while let Some(node) = current {
        let Some(parent) = node.parent else { break };
        path.insert_str(0, &node.name);
        path.insert(0, '/');
        current = fs.get(parent);
    }
    if path.is_empty() {
        "/".to_string()
    } else {
        path
    }
}

/// Resolves a path string to a node id, or `None` when any segment fails.
///
/// Paths with a leading `/` resolve from the root, others from `cwd`. Empty
/// segments and `.` are skipped; `..` moves to the parent (a no-op at the
/// root); every other segment is a linear first-match name lookup among the
/// current folder's children. Descending into a file fails.
pub fn resolve_path(fs: &FileStore, cwd: NodeId, path: &str) -> Option<NodeId> {
    let mut current = if path.starts_with('/') { fs.root() } else { cwd };

    for segment in path.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if segment == ".." {
            if let Some(parent) = fs.get(current)?.parent {
                current = parent;
            }
            continue;
        }
        current = fs.child_by_name(current, segment)?;
    }
    Some(current)
}
