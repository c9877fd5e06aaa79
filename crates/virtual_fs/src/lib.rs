//! In-memory virtual file tree shared by the desktop runtime, shell, and apps.
//!
//! The store is an arena: a flat id-to-node table with explicit parent/child
//! index fields. Parent links are weak back-references used for lookups only;
//! ownership of a node belongs solely to its parent folder's `children` list.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod path;
mod seed;
mod store;

pub use path::{node_path, resolve_path};
pub use seed::seed_tree;
pub use store::{FileNode, FileStore, FsError, NodeBody, NodeId, NodeKind};
