//! Declarative menu model produced by the menu builder and rendered by the UI.

/// Commands a menu item (or the matching keyboard shortcut) can trigger.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MenuAction {
    About,
    Quit,
    Home,
    Back,
    Forward,
    Reload,
    ForceReload,
    ToggleDevTools,
    ResetZoom,
    ZoomIn,
    AddBookmark,
    OpenUrl(String),
    DeleteBookmark { url: String, title: String },
    DeleteHistory { url: String, title: String },
    OpacityUp,
    OpacityDown,
    ToggleVisibility,
}

/// Items whose behaviour is supplied by the platform menu implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredefinedItem {
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    SelectAll,
    Minimize,
    Maximize,
    Fullscreen,
    CloseWindow,
    BringAllToFront,
}

/// A clickable (or disabled, display-only) menu entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub label: String,
    pub action: Option<MenuAction>,
    pub accelerator: Option<String>,
    pub enabled: bool,
}

impl MenuItem {
    pub fn action(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            action: Some(action),
            accelerator: None,
            enabled: true,
        }
    }

    /// A greyed-out entry that only displays text.
    pub fn disabled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: None,
            accelerator: None,
            enabled: false,
        }
    }

    pub fn with_accelerator(mut self, accelerator: Option<String>) -> Self {
        self.accelerator = accelerator;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuNode {
    Item(MenuItem),
    Submenu { label: String, children: Vec<MenuNode> },
    Predefined(PredefinedItem),
    Separator,
}

impl MenuNode {
    pub fn submenu(label: impl Into<String>, children: Vec<MenuNode>) -> Self {
        MenuNode::Submenu {
            label: label.into(),
            children,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            MenuNode::Item(item) => Some(&item.label),
            MenuNode::Submenu { label, .. } => Some(label),
            _ => None,
        }
    }

    pub fn children(&self) -> &[MenuNode] {
        match self {
            MenuNode::Submenu { children, .. } => children,
            _ => &[],
        }
    }
}

/// The full menu bar: a list of top-level submenus.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuTree {
    pub menus: Vec<MenuNode>,
}

impl MenuTree {
    /// Looks up a top-level menu by label.
    pub fn menu(&self, label: &str) -> Option<&MenuNode> {
        self.menus.iter().find(|m| m.label() == Some(label))
    }

    /// Depth-first walk over every item that carries an action.
    pub fn actions(&self) -> Vec<&MenuAction> {
        fn walk<'a>(nodes: &'a [MenuNode], out: &mut Vec<&'a MenuAction>) {
            for node in nodes {
                match node {
                    MenuNode::Item(MenuItem {
                        action: Some(action),
                        ..
                    }) => out.push(action),
                    MenuNode::Submenu { children, .. } => walk(children, out),
                    _ => {}
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.menus, &mut out);
        out
    }
}
