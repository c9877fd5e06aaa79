//! Window-manager data model for the desktop runtime.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// First cascade position for newly opened windows.
pub const CASCADE_ORIGIN: i32 = 50;
/// Per-window cascade offset step.
pub const CASCADE_STEP: i32 = 30;
/// Initial value of the monotonic z counter.
pub const BASE_Z_INDEX: u32 = 10;

/// Window identity key.
///
/// Defaults to the app's canonical id, which gives singleton behavior:
/// re-opening focuses the existing window. Callers supply a distinguishing
/// key (for example `notepad-<node id>`) to allow multiple instances.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowKey(String);

impl WindowKey {
    /// Creates a key from trusted caller input.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Registered desktop applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppId {
    Explorer,
    Browser,
    Terminal,
    Monitor,
    Calculator,
    Notepad,
    Cams,
}

impl AppId {
    /// Default window title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Explorer => "File Explorer",
            Self::Browser => "Web Browser",
            Self::Terminal => "Terminal",
            Self::Monitor => "SysMonitor",
            Self::Calculator => "Calculator",
            Self::Notepad => "Notepad",
            Self::Cams => "Site Cams",
        }
    }

    /// Icon identifier resolved by the rendering layer.
    pub fn icon_id(self) -> &'static str {
        match self {
            Self::Explorer => "folder",
            Self::Browser => "globe",
            Self::Terminal => "terminal",
            Self::Monitor => "activity",
            Self::Calculator => "calculator",
            Self::Notepad => "type",
            Self::Cams => "video",
        }
    }

    /// Stable string id used as the default window key.
    pub fn canonical_id(self) -> &'static str {
        match self {
            Self::Explorer => "explorer",
            Self::Browser => "browser",
            Self::Terminal => "terminal",
            Self::Monitor => "monitor",
            Self::Calculator => "calc",
            Self::Notepad => "notepad",
            Self::Cams => "cams",
        }
    }

    /// Parses a canonical id back to an app.
    pub fn from_canonical_id(raw: &str) -> Option<Self> {
        match raw {
            "explorer" => Some(Self::Explorer),
            "browser" => Some(Self::Browser),
            "terminal" => Some(Self::Terminal),
            "monitor" => Some(Self::Monitor),
            "calc" => Some(Self::Calculator),
            "notepad" => Some(Self::Notepad),
            "cams" => Some(Self::Cams),
            _ => None,
        }
    }

    /// Default window size.
    pub fn default_size(self) -> (i32, i32) {
        match self {
            Self::Explorer => (800, 500),
            Self::Browser => (1000, 700),
            Self::Terminal => (600, 400),
            Self::Monitor => (500, 450),
            Self::Calculator => (320, 460),
            Self::Notepad => (500, 400),
            Self::Cams => (600, 400),
        }
    }
}

/// Window position and size; ignored by layout while maximized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    /// Returns the rect moved by the given deltas, size unchanged.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

/// Pointer coordinates in desktop space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// One open application window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub key: WindowKey,
    pub app_id: AppId,
    pub title: String,
    pub icon_id: String,
    pub rect: WindowRect,
    pub z_index: u32,
    pub is_open: bool,
    pub minimized: bool,
    pub maximized: bool,
}

/// Request to open (or re-focus) a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub app_id: AppId,
    /// Identity key; equal to the canonical app id for singleton apps.
    pub key: WindowKey,
    pub title: Option<String>,
    pub rect: Option<WindowRect>,
    /// Opaque parameters handed to the app's content factory.
    pub launch_params: Value,
}

impl OpenWindowRequest {
    /// Builds a request with the app's default singleton key.
    pub fn new(app_id: AppId) -> Self {
        Self {
            app_id,
            key: WindowKey::new(app_id.canonical_id()),
            title: None,
            rect: None,
            launch_params: Value::Null,
        }
    }
}

/// Whole-desktop window-manager state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    pub windows: Vec<WindowRecord>,
    pub active_window: Option<WindowKey>,
    /// Monotonic z counter; the most recently focused window holds it.
    pub next_z: u32,
    pub start_menu_open: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            active_window: None,
            next_z: BASE_Z_INDEX,
            start_menu_open: false,
        }
    }
}

impl DesktopState {
    /// Looks up a window record by key.
    pub fn window(&self, key: &WindowKey) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.key == key)
    }
}

/// Captured state of an in-progress title-bar drag.
///
/// `pointer_start` is never re-snapshotted: displacement is always computed
/// relative to the drag origin, so repeated updates at a fixed pointer are
/// idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub key: WindowKey,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

/// Transient pointer-interaction state, separate from the window records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}
