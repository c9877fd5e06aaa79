//! Window-manager actions and transition logic for the desktop runtime.

use thiserror::Error;

use crate::model::{
    DesktopState, DragSession, InteractionState, OpenWindowRequest, PointerPosition, WindowKey,
    WindowRecord, WindowRect, CASCADE_ORIGIN, CASCADE_STEP,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window, or re-focus the existing one with the same key.
    OpenWindow(OpenWindowRequest),
    /// Close a window and drop its record.
    CloseWindow {
        /// Window to close.
        key: WindowKey,
    },
    /// Focus (and raise) a window.
    FocusWindow {
        /// Window to focus.
        key: WindowKey,
    },
    /// Minimize a window; it stays listed for the taskbar.
    MinimizeWindow {
        /// Window to minimize.
        key: WindowKey,
    },
    /// Flip the maximize flag without touching the stored rect.
    ToggleMaximize {
        /// Window to toggle.
        key: WindowKey,
    },
    /// Taskbar button behavior: restore if minimized, minimize if focused,
    /// focus otherwise.
    ToggleTaskbarWindow {
        /// Window associated with the taskbar button.
        key: WindowKey,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Show desktop: minimize every window.
    MinimizeAll,
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        key: WindowKey,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active drag; the rect keeps its last value.
    EndMove,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the runtime to execute.
pub enum RuntimeEffect {
    /// Move keyboard focus into the newly focused window's primary input.
    FocusWindowInput(WindowKey),
    /// The window was removed; its content handle should be dropped.
    WindowClosed(WindowKey),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions referencing a missing window.
pub enum ReducerError {
    /// The target window key was not found in the current state.
    #[error("window not found")]
    WindowNotFound,
}

/// Applies a [`DesktopAction`] and collects resulting side effects.
///
/// This is the authoritative transition engine for window lifecycle, focus,
/// z-order, and dragging. Focus raises use a monotonic counter, so the most
/// recently focused open window always holds the strictly greatest z-index.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a
/// window that is not present; callers that must degrade gracefully (stale
/// taskbar clicks) discard the error.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(req) => {
            state.start_menu_open = false;
            if state.window(&req.key).is_some() {
                raise_window(state, &req.key)?;
                effects.push(RuntimeEffect::FocusWindowInput(req.key));
                return Ok(effects);
            }
            let cascade = CASCADE_ORIGIN + CASCADE_STEP * state.windows.len() as i32;
            let (w, h) = req.app_id.default_size();
            let rect = req.rect.unwrap_or(WindowRect {
                x: cascade,
                y: cascade,
                w,
                h,
            });
            state.next_z += 1;
            let record = WindowRecord {
                key: req.key.clone(),
                app_id: req.app_id,
                title: req.title.unwrap_or_else(|| req.app_id.title().to_string()),
                icon_id: req.app_id.icon_id().to_string(),
                rect,
                z_index: state.next_z,
                is_open: true,
                minimized: false,
                maximized: false,
            };
            state.windows.push(record);
            state.active_window = Some(req.key.clone());
            effects.push(RuntimeEffect::FocusWindowInput(req.key));
        }
        DesktopAction::CloseWindow { key } => {
            let before = state.windows.len();
            state.windows.retain(|w| w.key != key);
            if state.windows.len() == before {
                return Err(ReducerError::WindowNotFound);
            }
            if state.active_window.as_ref() == Some(&key) {
                state.active_window = None;
            }
            effects.push(RuntimeEffect::WindowClosed(key));
        }
        DesktopAction::FocusWindow { key } => {
            raise_window(state, &key)?;
            effects.push(RuntimeEffect::FocusWindowInput(key));
        }
        DesktopAction::MinimizeWindow { key } => {
            let window = find_window_mut(state, &key)?;
            window.minimized = true;
            if state.active_window.as_ref() == Some(&key) {
                state.active_window = None;
            }
        }
        DesktopAction::ToggleMaximize { key } => {
            let window = find_window_mut(state, &key)?;
            window.maximized = !window.maximized;
        }
        DesktopAction::ToggleTaskbarWindow { key } => {
            let window = state.window(&key).ok_or(ReducerError::WindowNotFound)?;
            let focused = state.active_window.as_ref() == Some(&key);
            let action = if window.minimized || !focused {
                DesktopAction::FocusWindow { key }
            } else {
                DesktopAction::MinimizeWindow { key }
            };
            effects.extend(reduce_desktop(state, interaction, action)?);
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::MinimizeAll => {
            for window in &mut state.windows {
                window.minimized = true;
            }
            state.active_window = None;
        }
        DesktopAction::BeginMove { key, pointer } => {
            let window = state.window(&key).ok_or(ReducerError::WindowNotFound)?;
            // Maximized windows are not draggable; the click still focuses.
            interaction.dragging = (!window.maximized).then(|| DragSession {
                key: key.clone(),
                pointer_start: pointer,
                rect_start: window.rect,
            });
            raise_window(state, &key)?;
            effects.push(RuntimeEffect::FocusWindowInput(key));
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let key = session.key.clone();
                let rect = session.rect_start.offset(dx, dy);
                let window = find_window_mut(state, &key)?;
                if !window.maximized {
                    window.rect = rect;
                }
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
    }
    Ok(effects)
}

fn find_window_mut<'a>(
    state: &'a mut DesktopState,
    key: &WindowKey,
) -> Result<&'a mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| &w.key == key)
        .ok_or(ReducerError::WindowNotFound)
}

fn raise_window(state: &mut DesktopState, key: &WindowKey) -> Result<(), ReducerError> {
    state.next_z += 1;
    let next_z = state.next_z;
    let window = find_window_mut(state, key)?;
    window.minimized = false;
    window.z_index = next_z;
    state.active_window = Some(key.clone());
    Ok(())
}
