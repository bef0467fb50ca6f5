//! Events fed into the event router and the effects it hands back to the UI.

use std::time::Instant;

use super::errors::PageQueryError;
use super::menu::{MenuAction, MenuTree};
use super::window::{Opacity, WindowSize};

/// A ledger entry the user asked to delete, pending confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Bookmark { url: String, title: String },
    History { url: String, title: String },
}

/// Input reaching the core from the UI layer or the browser engine.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A menu item was clicked.
    Menu(MenuAction),
    /// A key chord such as `Ctrl+Shift+Up` was pressed inside the page.
    KeyPressed(String),
    /// The web view started loading `url`.
    PageLoadStarted { url: String },
    /// The web view finished loading `url`.
    PageLoaded { url: String },
    /// The answer to a title query. `Ok` holds the raw JSON produced by the
    /// engine's script evaluation.
    TitleResolved {
        query_id: u64,
        result: Result<String, PageQueryError>,
    },
    /// The event loop woke up; overdue title queries are expired.
    Tick(Instant),
    Resized(WindowSize),
    /// The window is closing; carries its final size when known.
    CloseRequested(Option<WindowSize>),
    /// The user confirmed a deletion previously requested with `Effect::Confirm`.
    DeleteConfirmed(DeleteTarget),
    /// The page tried to open a new window.
    NewWindowRequested(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// User-facing feedback.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Transient in-page message.
    Toast(String),
    /// Modal message box.
    Dialog {
        level: NoticeLevel,
        title: String,
        message: String,
    },
}

/// Work the UI layer must carry out after an event has been handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    LoadUrl(String),
    GoBack,
    GoForward,
    Reload,
    ToggleDevTools,
    SetZoom(f64),
    /// Evaluate `document.title` and report back with `AppEvent::TitleResolved`.
    QueryTitle { query_id: u64 },
    ApplyOpacity(Opacity),
    SetVisible(bool),
    RefreshMenu(MenuTree),
    Notify(Notice),
    /// Ask the user before deleting; on "yes" send `AppEvent::DeleteConfirmed`.
    Confirm {
        title: String,
        message: String,
        target: DeleteTarget,
    },
    Exit,
}
