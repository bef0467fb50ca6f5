//! Event router for FishBrowser.
//!
//! Translates UI and engine events into ledger mutations plus a list of
//! effects for the UI layer to carry out. Every mutation that changes what
//! the menu shows is followed by a `RefreshMenu` carrying a freshly built
//! tree.

use std::time::Instant;

use log::{debug, info, warn};

use crate::app::App;
use crate::config::{APP_NAME, APP_VERSION};
use crate::managers::bookmark_manager::BookmarkManagerTrait;
use crate::managers::history_manager::HistoryManagerTrait;
use crate::managers::shortcut_manager::{command_for, ShortcutManagerTrait};
use crate::managers::window_state_manager::WindowStateManagerTrait;
use crate::services::title_query::{ResolvedTitle, TitlePurpose};
use crate::types::errors::BookmarkError;
use crate::types::events::{AppEvent, DeleteTarget, Effect, Notice, NoticeLevel};
use crate::types::menu::MenuAction;
use crate::types::page::{self, BLANK_PAGE};
use crate::types::window::{Opacity, OPACITY_STEP};

pub const ZOOM_STEP: f64 = 1.1;
pub const MAX_ZOOM: f64 = 5.0;

/// Handles one event against `app` and returns the effects to apply, in order.
pub fn handle_event(app: &mut App, event: AppEvent) -> Vec<Effect> {
    match event {
        AppEvent::Menu(action) => handle_action(app, action, Instant::now()),
        AppEvent::KeyPressed(chord) => {
            let command = app.shortcut_manager.resolve(&chord).and_then(command_for);
            match command {
                Some(action) => {
                    debug!("Shortcut {} -> {:?}", chord, action);
                    handle_action(app, action, Instant::now())
                }
                None => Vec::new(),
            }
        }
        AppEvent::PageLoadStarted { url } => {
            app.current_url = Some(url);
            Vec::new()
        }
        AppEvent::PageLoaded { url } => page_loaded(app, url, Instant::now()),
        AppEvent::TitleResolved { query_id, result } => match app.title_queries.resolve(query_id, result) {
            Some(resolved) => settle_title(app, resolved),
            None => {
                debug!("Ignoring late answer for title query {}", query_id);
                Vec::new()
            }
        },
        AppEvent::Tick(now) => app
            .title_queries
            .expire(now)
            .into_iter()
            .flat_map(|resolved| settle_title(app, resolved))
            .collect(),
        AppEvent::Resized(size) => {
            app.window_state().record_resize(size);
            Vec::new()
        }
        AppEvent::CloseRequested(size) => {
            if let Some(size) = size {
                app.window_state().record_resize(size);
            }
            vec![Effect::Exit]
        }
        AppEvent::DeleteConfirmed(target) => delete_confirmed(app, target),
        AppEvent::NewWindowRequested(url) => {
            debug!("Opening new-window request in place: {}", url);
            vec![Effect::LoadUrl(url)]
        }
    }
}

/// Same as [`handle_event`] for a menu action, with an explicit clock so
/// title-query deadlines are predictable.
pub fn handle_action(app: &mut App, action: MenuAction, now: Instant) -> Vec<Effect> {
    match action {
        MenuAction::About => vec![dialog(
            NoticeLevel::Info,
            &format!("About {}", APP_NAME),
            &format!("{} {}\nA see-through browser for the corner of your screen.", APP_NAME, APP_VERSION),
        )],
        MenuAction::Quit => vec![Effect::Exit],
        MenuAction::Home => vec![Effect::LoadUrl(app.home_url().to_string())],
        MenuAction::Back => vec![Effect::GoBack],
        MenuAction::Forward => vec![Effect::GoForward],
        MenuAction::Reload | MenuAction::ForceReload => vec![Effect::Reload],
        MenuAction::ToggleDevTools => vec![Effect::ToggleDevTools],
        MenuAction::ResetZoom => {
            app.zoom = 1.0;
            vec![Effect::SetZoom(app.zoom)]
        }
        MenuAction::ZoomIn => {
            app.zoom = (app.zoom * ZOOM_STEP).min(MAX_ZOOM);
            vec![Effect::SetZoom(app.zoom)]
        }
        MenuAction::AddBookmark => add_bookmark(app, now),
        MenuAction::OpenUrl(url) => vec![Effect::LoadUrl(url)],
        MenuAction::DeleteBookmark { url, title } => vec![Effect::Confirm {
            title: "Delete Bookmark".to_string(),
            message: format!("Delete bookmark \"{}\"?", title),
            target: DeleteTarget::Bookmark { url, title },
        }],
        MenuAction::DeleteHistory { url, title } => vec![Effect::Confirm {
            title: "Delete History Entry".to_string(),
            message: format!("Delete history entry \"{}\"?", title),
            target: DeleteTarget::History { url, title },
        }],
        MenuAction::OpacityUp => change_opacity(app, OPACITY_STEP),
        MenuAction::OpacityDown => change_opacity(app, -OPACITY_STEP),
        MenuAction::ToggleVisibility => {
            app.window_visible = !app.window_visible;
            vec![Effect::SetVisible(app.window_visible), Effect::RefreshMenu(app.menu_tree())]
        }
    }
}

fn dialog(level: NoticeLevel, title: &str, message: &str) -> Effect {
    Effect::Notify(Notice::Dialog {
        level,
        title: title.to_string(),
        message: message.to_string(),
    })
}

fn page_loaded(app: &mut App, url: String, now: Instant) -> Vec<Effect> {
    let mut effects = vec![Effect::ApplyOpacity(app.window_state().get_opacity())];
    if page::is_recordable(&url) {
        let query_id = app.title_queries.start(TitlePurpose::History, &url, now);
        effects.push(Effect::QueryTitle { query_id });
    }
    app.current_url = Some(url);
    effects
}

fn add_bookmark(app: &mut App, now: Instant) -> Vec<Effect> {
    let url = app.current_url.clone().unwrap_or_else(|| BLANK_PAGE.to_string());
    if !page::is_recordable(&url) {
        return vec![invalid_target(BookmarkError::InvalidTarget(url))];
    }
    let query_id = app.title_queries.start(TitlePurpose::Bookmark, &url, now);
    vec![Effect::QueryTitle { query_id }]
}

fn invalid_target(err: BookmarkError) -> Effect {
    warn!("{}", err);
    dialog(
        NoticeLevel::Warning,
        "Cannot Add Bookmark",
        &format!("{}\nBrowse to a web page and try again.", err),
    )
}

fn settle_title(app: &mut App, mut resolved: ResolvedTitle) -> Vec<Effect> {
    // The title belongs to whatever page is showing now.
    if app.current_url.as_deref() != Some(resolved.url.as_str()) {
        debug!("Page moved on from {} before its title arrived", resolved.url);
        resolved.title = resolved.url.clone();
        resolved.fell_back = true;
    }

    match resolved.purpose {
        TitlePurpose::Bookmark => match app.bookmarks().add_bookmark(&resolved.url, &resolved.title) {
            Ok(bookmark) => {
                info!("Bookmarked {}", bookmark.url);
                vec![
                    Effect::RefreshMenu(app.menu_tree()),
                    dialog(
                        NoticeLevel::Info,
                        "Bookmark Added",
                        &format!("Bookmark added: {}", bookmark.title),
                    ),
                ]
            }
            Err(e) => vec![invalid_target(e)],
        },
        TitlePurpose::History => match app.history().record_visit(&resolved.url, &resolved.title) {
            Some(_) => vec![Effect::RefreshMenu(app.menu_tree())],
            None => Vec::new(),
        },
    }
}

fn change_opacity(app: &mut App, delta: f64) -> Vec<Effect> {
    let opacity: Opacity = app.window_state().adjust_opacity(delta);
    vec![
        Effect::ApplyOpacity(opacity),
        Effect::RefreshMenu(app.menu_tree()),
        Effect::Notify(Notice::Toast(format!("Opacity: {}%", opacity.percent()))),
    ]
}

fn delete_confirmed(app: &mut App, target: DeleteTarget) -> Vec<Effect> {
    match target {
        DeleteTarget::Bookmark { url, title } => {
            let notice = if app.bookmarks().remove_bookmark(&url) {
                dialog(
                    NoticeLevel::Info,
                    "Bookmark Deleted",
                    &format!("Bookmark \"{}\" deleted", title),
                )
            } else {
                debug!("Bookmark {} was already gone", url);
                dialog(
                    NoticeLevel::Info,
                    "Bookmark Not Found",
                    &format!("Bookmark \"{}\" was not found", title),
                )
            };
            vec![Effect::RefreshMenu(app.menu_tree()), notice]
        }
        DeleteTarget::History { url, title } => {
            let text = if app.history().delete_entry(&url) {
                format!("History entry \"{}\" deleted", title)
            } else {
                debug!("History entry {} was already gone", url);
                format!("History entry \"{}\" was not found", title)
            };
            vec![Effect::RefreshMenu(app.menu_tree()), Effect::Notify(Notice::Toast(text))]
        }
    }
}
