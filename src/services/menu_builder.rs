// FishBrowser menu builder
// Projects the bookmark ledger, history ledger and current opacity into the
// full application menu. The tree is rebuilt from scratch after every
// mutation; nothing here reads or writes state.

use crate::managers::shortcut_manager::default_accelerator;
use crate::types::bookmark::Bookmark;
use crate::types::history::HistoryEntry;
use crate::types::menu::{MenuAction, MenuItem, MenuNode, MenuTree, PredefinedItem};
use crate::types::window::Opacity;

pub const MENU_FILE: &str = "File";
pub const MENU_NAVIGATE: &str = "Navigate";
pub const MENU_BOOKMARKS: &str = "Bookmarks";
pub const MENU_HISTORY: &str = "History";
pub const MENU_EDIT: &str = "Edit";
pub const MENU_VIEW: &str = "View";
pub const MENU_WINDOW: &str = "Window";

pub const VIEW_BOOKMARKS: &str = "View Bookmarks";
pub const NO_BOOKMARKS: &str = "No bookmarks";
pub const NO_HISTORY: &str = "No history";

/// Builds the menu tree for the given state.
///
/// Deterministic: the same inputs always give the same tree, and bookmark and
/// history entries appear in ledger order.
pub fn build_menu_tree(bookmarks: &[Bookmark], history: &[HistoryEntry], opacity: Opacity) -> MenuTree {
    MenuTree {
        menus: vec![
            file_menu(),
            navigate_menu(),
            bookmarks_menu(bookmarks),
            history_menu(history),
            edit_menu(),
            view_menu(),
            window_menu(opacity),
        ],
    }
}

/// Label for the disabled opacity readout in the Window menu.
pub fn opacity_label(opacity: Opacity) -> String {
    format!("Current opacity: {}%", opacity.percent())
}

fn shortcut(label: &str, action: MenuAction, shortcut_action: &str) -> MenuNode {
    MenuNode::Item(
        MenuItem::action(label, action)
            .with_accelerator(default_accelerator(shortcut_action).map(String::from)),
    )
}

fn item(label: &str, action: MenuAction) -> MenuNode {
    MenuNode::Item(MenuItem::action(label, action))
}

/// Menu label for a ledger entry; untitled pages show their URL.
fn entry_label<'a>(title: &'a str, url: &'a str) -> &'a str {
    if title.trim().is_empty() {
        url
    } else {
        title
    }
}

fn file_menu() -> MenuNode {
    MenuNode::submenu(
        MENU_FILE,
        vec![item("About", MenuAction::About), item("Quit", MenuAction::Quit)],
    )
}

fn navigate_menu() -> MenuNode {
    MenuNode::submenu(
        MENU_NAVIGATE,
        vec![
            shortcut("Home", MenuAction::Home, "home"),
            MenuNode::Separator,
            shortcut("Back", MenuAction::Back, "back"),
            shortcut("Forward", MenuAction::Forward, "forward"),
            MenuNode::Separator,
            shortcut("Reload", MenuAction::Reload, "reload"),
        ],
    )
}

fn bookmarks_menu(bookmarks: &[Bookmark]) -> MenuNode {
    let entries = if bookmarks.is_empty() {
        vec![MenuNode::Item(MenuItem::disabled(NO_BOOKMARKS))]
    } else {
        bookmarks
            .iter()
            .map(|b| {
                MenuNode::submenu(
                    entry_label(&b.title, &b.url),
                    vec![
                        item("Open Bookmark", MenuAction::OpenUrl(b.url.clone())),
                        item(
                            "Delete Bookmark",
                            MenuAction::DeleteBookmark {
                                url: b.url.clone(),
                                title: b.title.clone(),
                            },
                        ),
                    ],
                )
            })
            .collect()
    };

    MenuNode::submenu(
        MENU_BOOKMARKS,
        vec![
            item("Add Bookmark", MenuAction::AddBookmark),
            MenuNode::Separator,
            MenuNode::submenu(VIEW_BOOKMARKS, entries),
        ],
    )
}

fn history_menu(history: &[HistoryEntry]) -> MenuNode {
    let entries = if history.is_empty() {
        vec![MenuNode::Item(MenuItem::disabled(NO_HISTORY))]
    } else {
        history
            .iter()
            .map(|h| {
                MenuNode::submenu(
                    entry_label(&h.title, &h.url),
                    vec![
                        item("Open", MenuAction::OpenUrl(h.url.clone())),
                        item(
                            "Delete",
                            MenuAction::DeleteHistory {
                                url: h.url.clone(),
                                title: h.title.clone(),
                            },
                        ),
                    ],
                )
            })
            .collect()
    };

    MenuNode::submenu(MENU_HISTORY, entries)
}

fn edit_menu() -> MenuNode {
    MenuNode::submenu(
        MENU_EDIT,
        vec![
            MenuNode::Predefined(PredefinedItem::Undo),
            MenuNode::Predefined(PredefinedItem::Redo),
            MenuNode::Separator,
            MenuNode::Predefined(PredefinedItem::Cut),
            MenuNode::Predefined(PredefinedItem::Copy),
            MenuNode::Predefined(PredefinedItem::Paste),
            MenuNode::Predefined(PredefinedItem::SelectAll),
        ],
    )
}

fn view_menu() -> MenuNode {
    MenuNode::submenu(
        MENU_VIEW,
        vec![
            item("Reload", MenuAction::Reload),
            item("Force Reload", MenuAction::ForceReload),
            shortcut("Developer Tools", MenuAction::ToggleDevTools, "dev_tools"),
            MenuNode::Separator,
            item("Reset Zoom", MenuAction::ResetZoom),
            item("Zoom In", MenuAction::ZoomIn),
        ],
    )
}

fn window_menu(opacity: Opacity) -> MenuNode {
    MenuNode::submenu(
        MENU_WINDOW,
        vec![
            MenuNode::Predefined(PredefinedItem::Minimize),
            MenuNode::Predefined(PredefinedItem::Maximize),
            MenuNode::Separator,
            MenuNode::Item(MenuItem::disabled(opacity_label(opacity))),
            shortcut("Opacity +", MenuAction::OpacityUp, "opacity_up"),
            shortcut("Opacity -", MenuAction::OpacityDown, "opacity_down"),
            MenuNode::Separator,
            MenuNode::Predefined(PredefinedItem::Fullscreen),
            MenuNode::Separator,
            MenuNode::Predefined(PredefinedItem::CloseWindow),
            MenuNode::Separator,
            MenuNode::Predefined(PredefinedItem::BringAllToFront),
            MenuNode::Separator,
            shortcut("Quick Hide", MenuAction::ToggleVisibility, "quick_hide"),
        ],
    )
}
