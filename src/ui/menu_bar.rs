//! Native menu bar rendered from a [`MenuTree`] with `muda`.
//!
//! The top-level `muda::Menu` is attached to the window once. Every refresh
//! removes the current top-level submenus and appends freshly built ones, so
//! the platform attachment never has to be redone.

use std::collections::HashMap;

use muda::accelerator::Accelerator;
use muda::{Menu, MenuId, PredefinedMenuItem, Submenu};
use tao::window::Window;

use crate::types::menu::{MenuAction, MenuNode, MenuTree, PredefinedItem};

pub struct MenuBar {
    menu: Menu,
    top_level: Vec<Submenu>,
    actions: HashMap<MenuId, MenuAction>,
}

impl MenuBar {
    pub fn new() -> Self {
        Self {
            menu: Menu::new(),
            top_level: Vec::new(),
            actions: HashMap::new(),
        }
    }

    /// Attaches the menu bar to `window` (the application menu on macOS).
    pub fn attach(&self, window: &Window) -> Result<(), muda::Error> {
        #[cfg(target_os = "macos")]
        {
            let _ = window;
            self.menu.init_for_nsapp();
        }

        #[cfg(target_os = "windows")]
        {
            use tao::platform::windows::WindowExtWindows;
            unsafe {
                self.menu.init_for_hwnd(window.hwnd() as isize)?;
            }
        }

        #[cfg(target_os = "linux")]
        {
            use tao::platform::unix::WindowExtUnix;
            self.menu
                .init_for_gtk_window(window.gtk_window(), window.default_vbox())?;
        }

        Ok(())
    }

    /// Replaces the menu contents with `tree`.
    pub fn render(&mut self, tree: &MenuTree) -> Result<(), muda::Error> {
        for submenu in self.top_level.drain(..) {
            self.menu.remove(&submenu)?;
        }
        self.actions.clear();

        for node in &tree.menus {
            if let MenuNode::Submenu { label, children } = node {
                let submenu = Submenu::new(label, true);
                self.fill(&submenu, children)?;
                self.menu.append(&submenu)?;
                self.top_level.push(submenu);
            }
        }

        log::debug!("Menu rendered with {} actionable items", self.actions.len());
        Ok(())
    }

    /// The action behind a clicked menu id. Ids from a previous render are unknown.
    pub fn action_for(&self, id: &MenuId) -> Option<&MenuAction> {
        self.actions.get(id)
    }

    fn fill(&mut self, submenu: &Submenu, children: &[MenuNode]) -> Result<(), muda::Error> {
        for node in children {
            match node {
                MenuNode::Item(item) => {
                    let accelerator = item
                        .accelerator
                        .as_deref()
                        .and_then(|a| a.parse::<Accelerator>().ok());
                    let entry = muda::MenuItem::new(&item.label, item.enabled, accelerator);
                    if let Some(action) = &item.action {
                        self.actions.insert(entry.id().clone(), action.clone());
                    }
                    submenu.append(&entry)?;
                }
                MenuNode::Submenu { label, children } => {
                    let nested = Submenu::new(label, true);
                    self.fill(&nested, children)?;
                    submenu.append(&nested)?;
                }
                MenuNode::Predefined(item) => submenu.append(&predefined(*item))?,
                MenuNode::Separator => submenu.append(&PredefinedMenuItem::separator())?,
            }
        }
        Ok(())
    }
}

impl Default for MenuBar {
    fn default() -> Self {
        Self::new()
    }
}

fn predefined(item: PredefinedItem) -> PredefinedMenuItem {
    match item {
        PredefinedItem::Undo => PredefinedMenuItem::undo(None),
        PredefinedItem::Redo => PredefinedMenuItem::redo(None),
        PredefinedItem::Cut => PredefinedMenuItem::cut(None),
        PredefinedItem::Copy => PredefinedMenuItem::copy(None),
        PredefinedItem::Paste => PredefinedMenuItem::paste(None),
        PredefinedItem::SelectAll => PredefinedMenuItem::select_all(None),
        PredefinedItem::Minimize => PredefinedMenuItem::minimize(None),
        PredefinedItem::Maximize => PredefinedMenuItem::maximize(None),
        PredefinedItem::Fullscreen => PredefinedMenuItem::fullscreen(None),
        PredefinedItem::CloseWindow => PredefinedMenuItem::close_window(None),
        PredefinedItem::BringAllToFront => PredefinedMenuItem::bring_all_to_front(None),
    }
}
