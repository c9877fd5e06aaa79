//! Core state machine for the BuildOS desktop.
//!
//! The runtime composes three layers: the seeded virtual drive from
//! [`virtual_fs`], per-window application panes (explorer, notepad,
//! terminal), and a window manager driven through [`DesktopAction`]. The
//! [`DesktopRuntime`] composition root ties them together and is the only
//! type a host shell needs to embed a working desktop.

mod apps;
mod model;
mod reducer;
mod runtime;

pub use apps::{app_registry, build_content, AppContent, AppDescriptor};
pub use model::{
    AppId, DesktopState, DragSession, InteractionState, OpenWindowRequest, PointerPosition,
    WindowKey, WindowRecord, WindowRect, BASE_Z_INDEX, CASCADE_ORIGIN, CASCADE_STEP,
};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use runtime::DesktopRuntime;
