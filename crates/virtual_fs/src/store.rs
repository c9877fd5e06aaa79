//! Arena-backed file tree store and its mutation operations.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable node identifier, unique for the node's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

/// File tree entry kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// Text file entry.
    File,
    /// Folder entry.
    Folder,
}

/// Kind-specific node payload: files carry content, folders carry children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum NodeBody {
    /// File payload.
    File {
        /// UTF-8 text content.
        content: String,
    },
    /// Folder payload.
    Folder {
        /// Ordered ids of owned children.
        children: Vec<NodeId>,
    },
}

/// One entry in the virtual file tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    /// Stable identifier.
    pub id: NodeId,
    /// Display name, unique only by convention (sibling collisions are allowed).
    pub name: String,
    /// Owning folder, `None` only for the root.
    pub parent: Option<NodeId>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Kind-specific payload.
    pub body: NodeBody,
}

impl FileNode {
    /// Returns the entry kind.
    pub fn kind(&self) -> NodeKind {
        match self.body {
            NodeBody::File { .. } => NodeKind::File,
            NodeBody::Folder { .. } => NodeKind::Folder,
        }
    }

    /// Returns `true` for folder entries.
    pub fn is_folder(&self) -> bool {
        matches!(self.body, NodeBody::Folder { .. })
    }

    /// Returns `true` for file entries.
    pub fn is_file(&self) -> bool {
        matches!(self.body, NodeBody::File { .. })
    }

    /// Returns file content, or `None` for folders.
    pub fn content(&self) -> Option<&str> {
        match &self.body {
            NodeBody::File { content } => Some(content),
            NodeBody::Folder { .. } => None,
        }
    }

    /// Returns the ordered child id list, or `None` for files.
    pub fn children(&self) -> Option<&[NodeId]> {
        match &self.body {
            NodeBody::Folder { children } => Some(children),
            NodeBody::File { .. } => None,
        }
    }
}

/// File tree store failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FsError {
    /// The referenced node id does not exist.
    #[error("node not found")]
    NotFound,
    /// The supplied parent id does not name an existing folder.
    #[error("parent is not an existing folder")]
    InvalidParent,
    /// The operation requires a folder but the node is a file.
    #[error("not a folder")]
    NotAFolder,
    /// The operation requires a file but the node is a folder.
    #[error("not a file")]
    NotAFile,
    /// The tree root cannot be deleted.
    #[error("cannot delete root")]
    CannotDeleteRoot,
}

/// Process-wide arena holding every node of one virtual file tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    nodes: HashMap<NodeId, FileNode>,
    root: NodeId,
    next_id: u64,
}

impl FileStore {
    /// Creates a store containing only a root folder with the given name.
    pub fn new(root_name: impl Into<String>) -> Self {
        let root = NodeId(0);
        let mut nodes = HashMap::new();
        nodes.insert(
            root,
            FileNode {
                id: root,
                name: root_name.into(),
                parent: None,
                created_at: Utc::now(),
                body: NodeBody::Folder {
                    children: Vec::new(),
                },
            },
        );
        Self {
            nodes,
            root,
            next_id: 1,
        }
    }

    /// Returns the root node id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Looks up a node by id.
    pub fn node(&self, id: NodeId) -> Result<&FileNode, FsError> {
        self.nodes.get(&id).ok_or(FsError::NotFound)
    }

    /// Looks up a node by id without an error wrapper.
    pub fn get(&self, id: NodeId) -> Option<&FileNode> {
        self.nodes.get(&id)
    }

    /// Creates a node under `parent` and appends it to the parent's children.
    ///
    /// `content` is ignored for folders. Sibling name collisions are permitted;
    /// path resolution takes the first match.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::InvalidParent`] when `parent` is missing or a file.
    pub fn create_node(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        kind: NodeKind,
        content: impl Into<String>,
    ) -> Result<NodeId, FsError> {
        if !self.nodes.get(&parent).is_some_and(FileNode::is_folder) {
            return Err(FsError::InvalidParent);
        }
        let id = NodeId(self.next_id);
        self.next_id += 1;
        let body = match kind {
            NodeKind::File => NodeBody::File {
                content: content.into(),
            },
            NodeKind::Folder => NodeBody::Folder {
                children: Vec::new(),
            },
        };
        self.nodes.insert(
            id,
            FileNode {
                id,
                name: name.into(),
                parent: Some(parent),
                created_at: Utc::now(),
                body,
            },
        );
        if let Some(NodeBody::Folder { children }) =
            self.nodes.get_mut(&parent).map(|node| &mut node.body)
        {
            children.push(id);
        }
        Ok(id)
    }

    /// Replaces a file's content in place.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::NotFound`] for missing ids and [`FsError::NotAFile`]
    /// for folders.
    pub fn update_file_content(
        &mut self,
        id: NodeId,
        content: impl Into<String>,
    ) -> Result<(), FsError> {
        let node = self.nodes.get_mut(&id).ok_or(FsError::NotFound)?;
        match &mut node.body {
            NodeBody::File { content: current } => {
                *current = content.into();
                Ok(())
            }
            NodeBody::Folder { .. } => Err(FsError::NotAFile),
        }
    }

    /// Unlinks a node from its parent and drops its record.
    ///
    /// Descendants of a deleted folder are **not** cascaded: they stay in the
    /// arena, addressable by id but unreachable from the root.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::CannotDeleteRoot`] for the root and
    /// [`FsError::NotFound`] for missing ids.
    pub fn delete_node(&mut self, id: NodeId) -> Result<(), FsError> {
        if id == self.root {
            return Err(FsError::CannotDeleteRoot);
        }
        let parent = self.nodes.get(&id).ok_or(FsError::NotFound)?.parent;
        if let Some(parent) = parent {
            if let Some(NodeBody::Folder { children }) =
                self.nodes.get_mut(&parent).map(|node| &mut node.body)
            {
                children.retain(|child| *child != id);
            }
        }
        self.nodes.remove(&id);
        Ok(())
    }

    /// Lists a folder's children in `children`-list order.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::NotFound`] for missing ids and
    /// [`FsError::NotAFolder`] for files.
    pub fn list_children(&self, folder: NodeId) -> Result<Vec<&FileNode>, FsError> {
        let node = self.node(folder)?;
        let children = node.children().ok_or(FsError::NotAFolder)?;
        Ok(children
            .iter()
            .filter_map(|child| self.nodes.get(child))
            .collect())
    }

    /// Returns the first child of `folder` whose name matches exactly.
    pub fn child_by_name(&self, folder: NodeId, name: &str) -> Option<NodeId> {
        let children = self.get(folder)?.children()?;
        children
            .iter()
            .copied()
            .find(|child| self.get(*child).is_some_and(|node| node.name == name))
    }
}
