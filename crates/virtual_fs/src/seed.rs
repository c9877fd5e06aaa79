//! Fixed BuildOS seed tree rebuilt at every startup (no persistence).

use crate::store::{FileStore, NodeKind};

/// Builds the default BuildOS file tree.
///
/// Layout: `Users/Admin/{Documents,Desktop,Downloads}`, `System/Logs`, and
/// `Documentation` under the `C:` root, with the stock project files.
pub fn seed_tree() -> FileStore {
    let mut fs = FileStore::new("C:");
    let root = fs.root();

    let folder = |fs: &mut FileStore, parent, name: &str| {
        fs.create_node(parent, name, NodeKind::Folder, "")
            .expect("seed parent is a folder")
    };
    let file = |fs: &mut FileStore, parent, name: &str, content: &str| {
        fs.create_node(parent, name, NodeKind::File, content)
            .expect("seed parent is a folder");
    };

    let users = folder(&mut fs, root, "Users");
    let admin = folder(&mut fs, users, "Admin");
    let documents = folder(&mut fs, admin, "Documents");
    let desktop = folder(&mut fs, admin, "Desktop");
    folder(&mut fs, admin, "Downloads");
    let system = folder(&mut fs, root, "System");
    let logs = folder(&mut fs, system, "Logs");
    let docs = folder(&mut fs, root, "Documentation");

    file(
        &mut fs,
        documents,
        "Project_Alpha.txt",
        "Project Alpha Status: ON TRACK\nTimeline: Phase 2 initiated.\nBudget: 85% remaining.",
    );
    file(
        &mut fs,
        documents,
        "Budget_2025.csv",
        "Category,Amount\nLabor,500000\nMaterials,350000\nOverhead,100000",
    );
    file(
        &mut fs,
        desktop,
        "Meeting_Notes.txt",
        "- Review safety protocols\n- Discuss Q4 roadmap\n- Team lunch at 12:30",
    );
    file(
        &mut fs,
        logs,
        "boot.log",
        "[SYSTEM] Kernel loaded.\n[SYSTEM] UI Subsystem initialized.\n[SYSTEM] Network connected.",
    );
    file(
        &mut fs,
        docs,
        "README.md",
        "# BuildOS v2.5\nWelcome to the next generation construction OS.",
    );

    fs
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::path::{node_path, resolve_path};

    #[test]
    fn seed_tree_exposes_the_stock_layout() {
        let fs = seed_tree();
        let root = fs.root();

        for path in [
            "/Users/Admin/Documents",
            "/Users/Admin/Desktop",
            "/Users/Admin/Downloads",
            "/System/Logs/boot.log",
            "/Documentation/README.md",
            "/Users/Admin/Documents/Project_Alpha.txt",
        ] {
            assert!(resolve_path(&fs, root, path).is_some(), "missing {path}");
        }

        let readme = resolve_path(&fs, root, "/Documentation/README.md").unwrap();
        assert!(fs.node(readme).unwrap().is_file());
        assert_eq!(node_path(&fs, readme), "/Documentation/README.md");
    }
}
