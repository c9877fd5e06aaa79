//! Application registry and window-content construction.

use desktop_app_explorer::ExplorerPane;
use desktop_app_notepad::NotepadPane;
use desktop_app_terminal::TerminalPane;
use serde_json::Value;
use virtual_fs::{resolve_path, FileStore, NodeId};

use crate::model::AppId;

/// Launcher metadata for one registered application.
///
/// Every launcher entry opens a singleton keyed by the app's canonical id;
/// only file-bound Notepad windows get per-document keys, minted by the
/// runtime rather than the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    /// Application this descriptor launches.
    pub app_id: AppId,
    /// Label shown in the start menu and on desktop icons.
    pub launcher_label: &'static str,
}

const APP_REGISTRY: [AppDescriptor; 7] = [
    AppDescriptor {
        app_id: AppId::Explorer,
        launcher_label: "File Explorer",
    },
    AppDescriptor {
        app_id: AppId::Browser,
        launcher_label: "Web Browser",
    },
    AppDescriptor {
        app_id: AppId::Terminal,
        launcher_label: "Terminal",
    },
    AppDescriptor {
        app_id: AppId::Monitor,
        launcher_label: "SysMonitor",
    },
    AppDescriptor {
        app_id: AppId::Calculator,
        launcher_label: "Calculator",
    },
    AppDescriptor {
        app_id: AppId::Notepad,
        launcher_label: "Notepad",
    },
    AppDescriptor {
        app_id: AppId::Cams,
        launcher_label: "Site Cams",
    },
];

/// Returns every registered application in launcher order.
pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

/// Stateful content backing one window.
#[derive(Debug)]
pub enum AppContent {
    /// File browser pane.
    Explorer(ExplorerPane),
    /// Text editor pane.
    Notepad(NotepadPane),
    /// Shell session pane.
    Terminal(TerminalPane),
    /// Static pane rendered by the host from a label.
    Placeholder(&'static str),
}

/// Builds fresh content for a window, honoring opaque launch parameters.
pub fn build_content(app_id: AppId, launch_params: &Value, fs: &FileStore) -> AppContent {
    match app_id {
        AppId::Explorer => AppContent::Explorer(ExplorerPane::new(fs.root())),
        AppId::Notepad => {
            let file = launch_params
                .get("file_id")
                .and_then(Value::as_u64)
                .map(NodeId);
            let pane = match file {
                Some(id) => NotepadPane::open(fs, id),
                None => NotepadPane::new(),
            };
            AppContent::Notepad(pane)
        }
        AppId::Terminal => {
            let home = resolve_path(fs, fs.root(), "/Users/Admin").unwrap_or_else(|| fs.root());
            AppContent::Terminal(TerminalPane::new(home))
        }
        AppId::Browser => AppContent::Placeholder("BuildPro Portal"),
        AppId::Monitor => AppContent::Placeholder("System Monitor"),
        AppId::Calculator => AppContent::Placeholder("Calculator"),
        AppId::Cams => AppContent::Placeholder("Site Cameras"),
    }
}
