//! Platform-specific key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Platform-appropriate modifier for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Save shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SAVE_SHORTCUT: &str = "Ctrl+S";

#[cfg(target_os = "macos")]
pub const NEXT_STEP_SHORTCUT: &str = "Cmd+N";

#[cfg(not(target_os = "macos"))]
pub const NEXT_STEP_SHORTCUT: &str = "Ctrl+N";

#[cfg(target_os = "macos")]
pub const PREV_STEP_SHORTCUT: &str = "Cmd+P";

#[cfg(not(target_os = "macos"))]
pub const PREV_STEP_SHORTCUT: &str = "Ctrl+P";

#[cfg(target_os = "macos")]
pub const ORIENTATION_SHORTCUT: &str = "Cmd+O";

#[cfg(not(target_os = "macos"))]
pub const ORIENTATION_SHORTCUT: &str = "Ctrl+O";

#[cfg(target_os = "macos")]
pub const TOOLTIP_SHORTCUT: &str = "Cmd+T";

#[cfg(not(target_os = "macos"))]
pub const TOOLTIP_SHORTCUT: &str = "Ctrl+T";

/// Whether `key` is `c` pressed with Ctrl or the platform modifier
pub fn is_shortcut(key: &KeyEvent, c: char) -> bool {
    key.code == KeyCode::Char(c)
        && (key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(SHORTCUT_MODIFIER))
}
