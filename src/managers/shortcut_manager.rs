//! Shortcut Manager for FishBrowser.
//!
//! Holds the fixed keyboard bindings, adapted to the platform's primary
//! modifier, and resolves key chords reported by the page into menu actions.

use std::collections::HashMap;

use crate::types::menu::MenuAction;

/// Default bindings, action name → accelerator.
///
/// The accelerator strings double as menu accelerators, so they use the
/// `CmdOrCtrl` spelling understood by the native menu layer.
pub const DEFAULT_SHORTCUTS: &[(&str, &str)] = &[
    ("home", "Alt+Home"),
    ("back", "Alt+Left"),
    ("forward", "Alt+Right"),
    ("reload", "F5"),
    ("dev_tools", "F12"),
    ("opacity_up", "Ctrl+Shift+Up"),
    ("opacity_down", "Ctrl+Shift+Down"),
    ("quick_hide", "F2"),
    ("close_window", "CmdOrCtrl+W"),
];

/// Returns the default accelerator for `action`, unadapted.
pub fn default_accelerator(action: &str) -> Option<&'static str> {
    DEFAULT_SHORTCUTS
        .iter()
        .find(|(a, _)| *a == action)
        .map(|(_, keys)| *keys)
}

/// Maps a shortcut action name to the menu action it triggers.
pub fn command_for(action: &str) -> Option<MenuAction> {
    let command = match action {
        "home" => MenuAction::Home,
        "back" => MenuAction::Back,
        "forward" => MenuAction::Forward,
        "reload" => MenuAction::Reload,
        "dev_tools" => MenuAction::ToggleDevTools,
        "opacity_up" => MenuAction::OpacityUp,
        "opacity_down" => MenuAction::OpacityDown,
        "quick_hide" => MenuAction::ToggleVisibility,
        "close_window" => MenuAction::Quit,
        _ => return None,
    };
    Some(command)
}

/// Trait defining shortcut lookup.
pub trait ShortcutManagerTrait {
    /// Returns the action bound to `keys`, if any.
    fn resolve(&self, keys: &str) -> Option<&str>;
}

/// Shortcut table keyed by normalized chord.
pub struct ShortcutManager {
    bindings: HashMap<String, &'static str>,
}

impl ShortcutManager {
    pub fn new() -> Self {
        let bindings = DEFAULT_SHORTCUTS
            .iter()
            .map(|(action, keys)| (Self::adapt_for_platform(keys), *action))
            .collect();
        Self { bindings }
    }

    /// Adapts modifier keys for the current platform and normalizes the chord.
    fn adapt_for_platform(keys: &str) -> String {
        let primary = if cfg!(target_os = "macos") { "Cmd" } else { "Ctrl" };
        normalize_chord(&keys.replace("CmdOrCtrl", primary))
    }
}

impl Default for ShortcutManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical form of a key chord: modifiers in `Ctrl+Alt+Shift+Cmd` order,
/// then the key. Browser key names such as `ArrowUp` are shortened to `Up`.
pub fn normalize_chord(keys: &str) -> String {
    let mut ctrl = false;
    let mut alt = false;
    let mut shift = false;
    let mut cmd = false;
    let mut key = String::new();

    for part in keys.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => ctrl = true,
            "alt" | "option" => alt = true,
            "shift" => shift = true,
            "cmd" | "command" | "meta" | "super" => cmd = true,
            other => {
                let other = other.strip_prefix("arrow").unwrap_or(other);
                let mut chars = other.chars();
                key = match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                };
            }
        }
    }

    let mut parts: Vec<&str> = Vec::new();
    if ctrl {
        parts.push("Ctrl");
    }
    if alt {
        parts.push("Alt");
    }
    if shift {
        parts.push("Shift");
    }
    if cmd {
        parts.push("Cmd");
    }
    if !key.is_empty() {
        parts.push(&key);
    }
    parts.join("+")
}

impl ShortcutManagerTrait for ShortcutManager {
    fn resolve(&self, keys: &str) -> Option<&str> {
        self.bindings.get(&normalize_chord(keys)).copied()
    }
}
