//! Unit tests for the event router, driven against an in-memory app.
//!
//! Title queries are answered by feeding `TitleResolved` events back in, the
//! same way the UI layer does after evaluating the page script.

use std::time::{Duration, Instant};

use fishbrowser::app::App;
use fishbrowser::config::AppConfig;
use fishbrowser::event_router::{handle_action, handle_event};
use fishbrowser::managers::bookmark_manager::BookmarkManagerTrait;
use fishbrowser::managers::history_manager::HistoryManagerTrait;
use fishbrowser::managers::window_state_manager::WindowStateManagerTrait;
use fishbrowser::storage::{MemoryStorage, Slot};
use fishbrowser::types::errors::PageQueryError;
use fishbrowser::types::events::{AppEvent, DeleteTarget, Effect, Notice, NoticeLevel};
use fishbrowser::types::menu::MenuAction;
use fishbrowser::types::window::{Opacity, WindowSize};

fn app() -> App {
    App::with_storage(AppConfig::with_data_dir("/tmp/fishbrowser-test"), MemoryStorage::new())
}

fn query_id(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::QueryTitle { query_id } => Some(*query_id),
            _ => None,
        })
        .expect("no title query issued")
}

fn answer(app: &mut App, query_id: u64, title: &str) -> Vec<Effect> {
    handle_event(
        app,
        AppEvent::TitleResolved {
            query_id,
            result: Ok(serde_json::Value::String(title.to_string()).to_string()),
        },
    )
}

fn load(app: &mut App, url: &str) -> Vec<Effect> {
    handle_event(app, AppEvent::PageLoaded { url: url.to_string() })
}

fn has_menu_refresh(effects: &[Effect]) -> bool {
    effects.iter().any(|e| matches!(e, Effect::RefreshMenu(_)))
}

fn dialog(effects: &[Effect]) -> Option<(NoticeLevel, &str)> {
    effects.iter().find_map(|e| match e {
        Effect::Notify(Notice::Dialog { level, message, .. }) => Some((*level, message.as_str())),
        _ => None,
    })
}

// === Page loads and history ===

#[test]
fn test_page_load_records_history_with_page_title() {
    let mut app = app();
    let effects = load(&mut app, "https://a.com");

    assert!(matches!(effects[0], Effect::ApplyOpacity(_)));
    let effects = answer(&mut app, query_id(&effects), "Site A");

    assert!(has_menu_refresh(&effects));
    let history = app.history().list_history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].title, "Site A");
    assert_eq!(app.current_url.as_deref(), Some("https://a.com"));
}

#[test]
fn test_home_page_load_applies_opacity_only() {
    let mut app = app();
    let home = app.home_url().to_string();

    let effects = load(&mut app, &home);

    assert_eq!(effects, vec![Effect::ApplyOpacity(Opacity::default())]);
    assert!(app.history().list_history().is_empty());
}

#[test]
fn test_title_timeout_records_url_as_title() {
    let mut app = app();
    let start = Instant::now();
    load(&mut app, "https://slow.com");

    let effects = handle_event(&mut app, AppEvent::Tick(start + Duration::from_secs(10)));

    assert!(has_menu_refresh(&effects));
    assert_eq!(app.history().list_history()[0].title, "https://slow.com");
    assert_eq!(app.title_queries.pending_count(), 0);
}

#[test]
fn test_script_failure_records_url_as_title() {
    let mut app = app();
    let id = query_id(&load(&mut app, "https://a.com"));

    handle_event(
        &mut app,
        AppEvent::TitleResolved {
            query_id: id,
            result: Err(PageQueryError::ScriptFailed("detached".to_string())),
        },
    );

    assert_eq!(app.history().list_history()[0].title, "https://a.com");
}

#[test]
fn test_late_answer_is_ignored() {
    let mut app = app();
    let id = query_id(&load(&mut app, "https://a.com"));
    handle_event(&mut app, AppEvent::Tick(Instant::now() + Duration::from_secs(10)));

    let effects = answer(&mut app, id, "Too late");

    assert!(effects.is_empty());
    assert_eq!(app.history().list_history()[0].title, "https://a.com");
}

#[test]
fn test_history_title_from_next_page_is_not_used() {
    let mut app = app();
    let id = query_id(&load(&mut app, "https://a.com"));

    handle_event(&mut app, AppEvent::PageLoadStarted { url: "https://b.com".to_string() });
    answer(&mut app, id, "Site B");

    let history = app.history().list_history();
    assert_eq!(history[0].url, "https://a.com");
    assert_eq!(history[0].title, "https://a.com");
}

// === Bookmarks ===

#[test]
fn test_add_bookmark_uses_current_page() {
    let mut app = app();
    load(&mut app, "https://a.com");

    let effects = handle_action(&mut app, MenuAction::AddBookmark, Instant::now());
    let effects = answer(&mut app, query_id(&effects), "Site A");

    assert!(has_menu_refresh(&effects));
    assert_eq!(dialog(&effects), Some((NoticeLevel::Info, "Bookmark added: Site A")));
    assert!(app.bookmarks().contains("https://a.com"));
}

#[test]
fn test_add_bookmark_on_local_page_warns_and_leaves_ledger() {
    let mut app = app();
    load(&mut app, "file:///local.html");

    let effects = handle_action(&mut app, MenuAction::AddBookmark, Instant::now());

    assert_eq!(effects.len(), 1);
    assert!(matches!(dialog(&effects), Some((NoticeLevel::Warning, _))));
    assert!(app.bookmarks().list_bookmarks().is_empty());
    assert_eq!(app.title_queries.pending_count(), 0);
}

#[test]
fn test_add_bookmark_before_any_page_warns() {
    let mut app = app();
    let effects = handle_action(&mut app, MenuAction::AddBookmark, Instant::now());
    assert!(matches!(dialog(&effects), Some((NoticeLevel::Warning, _))));
}

#[test]
fn test_delete_bookmark_asks_first() {
    let mut app = app();
    app.bookmarks().add_bookmark("https://a.com", "A").unwrap();

    let effects = handle_event(
        &mut app,
        AppEvent::Menu(MenuAction::DeleteBookmark {
            url: "https://a.com".to_string(),
            title: "A".to_string(),
        }),
    );

    assert_eq!(effects.len(), 1);
    match &effects[0] {
        Effect::Confirm { message, target, .. } => {
            assert!(message.contains("\"A\""));
            assert_eq!(
                target,
                &DeleteTarget::Bookmark {
                    url: "https://a.com".to_string(),
                    title: "A".to_string(),
                }
            );
        }
        other => panic!("expected a confirmation, got {:?}", other),
    }
    assert!(app.bookmarks().contains("https://a.com"));
}

#[test]
fn test_confirmed_bookmark_delete_removes_and_refreshes() {
    let mut app = app();
    app.bookmarks().add_bookmark("https://a.com", "A").unwrap();

    let effects = handle_event(
        &mut app,
        AppEvent::DeleteConfirmed(DeleteTarget::Bookmark {
            url: "https://a.com".to_string(),
            title: "A".to_string(),
        }),
    );

    assert!(has_menu_refresh(&effects));
    assert_eq!(dialog(&effects), Some((NoticeLevel::Info, "Bookmark \"A\" deleted")));
    assert!(!app.bookmarks().contains("https://a.com"));
}

#[test]
fn test_confirmed_history_delete_toasts() {
    let mut app = app();
    app.history().record_visit("https://a.com", "A");

    let effects = handle_event(
        &mut app,
        AppEvent::DeleteConfirmed(DeleteTarget::History {
            url: "https://a.com".to_string(),
            title: "A".to_string(),
        }),
    );

    assert!(has_menu_refresh(&effects));
    assert!(effects.contains(&Effect::Notify(Notice::Toast(
        "History entry \"A\" deleted".to_string()
    ))));
    assert!(app.history().list_history().is_empty());
}

#[test]
fn test_confirmed_delete_of_missing_bookmark_reports_not_found() {
    let mut app = app();
    app.bookmarks().add_bookmark("https://a.com", "A").unwrap();

    let effects = handle_event(
        &mut app,
        AppEvent::DeleteConfirmed(DeleteTarget::Bookmark {
            url: "https://not-present.example".to_string(),
            title: "Ghost".to_string(),
        }),
    );

    assert!(has_menu_refresh(&effects));
    assert_eq!(
        dialog(&effects),
        Some((NoticeLevel::Info, "Bookmark \"Ghost\" was not found"))
    );
    assert_eq!(app.bookmarks().list_bookmarks().len(), 1);
}

#[test]
fn test_confirmed_delete_of_missing_history_entry_reports_not_found() {
    let mut app = app();
    app.history().record_visit("https://a.com", "A");

    let effects = handle_event(
        &mut app,
        AppEvent::DeleteConfirmed(DeleteTarget::History {
            url: "https://not-present.example".to_string(),
            title: "Ghost".to_string(),
        }),
    );

    assert!(effects.contains(&Effect::Notify(Notice::Toast(
        "History entry \"Ghost\" was not found".to_string()
    ))));
    assert_eq!(app.history().list_history().len(), 1);
}

#[test]
fn test_bookmark_title_from_next_page_is_not_used() {
    let mut app = app();
    load(&mut app, "https://a.com");
    let id = query_id(&handle_action(&mut app, MenuAction::AddBookmark, Instant::now()));

    handle_event(&mut app, AppEvent::PageLoadStarted { url: "https://b.com".to_string() });
    let effects = answer(&mut app, id, "Site B");

    assert_eq!(
        dialog(&effects),
        Some((NoticeLevel::Info, "Bookmark added: https://a.com"))
    );
    let bookmarks = app.bookmarks().list_bookmarks();
    assert_eq!(bookmarks.len(), 1);
    assert_eq!(bookmarks[0].url, "https://a.com");
    assert_eq!(bookmarks[0].title, "https://a.com");
}

// === Opacity, visibility and shortcuts ===

#[test]
fn test_opacity_down_applies_persists_and_toasts() {
    let storage = MemoryStorage::new();
    let mut app = App::with_storage(AppConfig::with_data_dir("/tmp/fishbrowser-test"), storage.clone());

    let effects = handle_action(&mut app, MenuAction::OpacityDown, Instant::now());

    assert_eq!(effects[0], Effect::ApplyOpacity(Opacity::new(0.9)));
    assert!(has_menu_refresh(&effects));
    assert!(effects.contains(&Effect::Notify(Notice::Toast("Opacity: 90%".to_string()))));
    assert_eq!(storage.raw(Slot::Opacity).as_deref(), Some("0.9"));
}

#[test]
fn test_opacity_up_at_max_stays_at_max() {
    let mut app = app();
    let effects = handle_action(&mut app, MenuAction::OpacityUp, Instant::now());
    assert_eq!(effects[0], Effect::ApplyOpacity(Opacity::new(1.0)));
}

#[test]
fn test_key_chord_triggers_opacity_change() {
    let mut app = app();
    handle_event(&mut app, AppEvent::KeyPressed("Ctrl+Shift+ArrowDown".to_string()));
    handle_event(&mut app, AppEvent::KeyPressed("Ctrl+Shift+ArrowDown".to_string()));
    assert_eq!(app.window_state().get_opacity().percent(), 80);
}

#[test]
fn test_unbound_key_does_nothing() {
    let mut app = app();
    assert!(handle_event(&mut app, AppEvent::KeyPressed("Ctrl+K".to_string())).is_empty());
}

#[test]
fn test_quick_hide_toggles_visibility() {
    let mut app = app();

    let effects = handle_event(&mut app, AppEvent::KeyPressed("F2".to_string()));
    assert_eq!(effects[0], Effect::SetVisible(false));
    assert!(has_menu_refresh(&effects));

    let effects = handle_action(&mut app, MenuAction::ToggleVisibility, Instant::now());
    assert_eq!(effects[0], Effect::SetVisible(true));
}

// === Navigation and window ===

#[test]
fn test_navigation_actions() {
    let mut app = app();
    let now = Instant::now();
    let home = app.home_url().to_string();

    assert_eq!(handle_action(&mut app, MenuAction::Home, now), vec![Effect::LoadUrl(home)]);
    assert_eq!(handle_action(&mut app, MenuAction::Back, now), vec![Effect::GoBack]);
    assert_eq!(handle_action(&mut app, MenuAction::Forward, now), vec![Effect::GoForward]);
    assert_eq!(handle_action(&mut app, MenuAction::ForceReload, now), vec![Effect::Reload]);
    assert_eq!(
        handle_action(&mut app, MenuAction::OpenUrl("https://a.com".to_string()), now),
        vec![Effect::LoadUrl("https://a.com".to_string())]
    );
    assert_eq!(handle_action(&mut app, MenuAction::Quit, now), vec![Effect::Exit]);
}

#[test]
fn test_zoom_in_and_reset() {
    let mut app = app();
    let now = Instant::now();

    handle_action(&mut app, MenuAction::ZoomIn, now);
    let effects = handle_action(&mut app, MenuAction::ZoomIn, now);
    match effects[0] {
        Effect::SetZoom(z) => assert!((z - 1.21).abs() < 1e-9),
        ref other => panic!("expected zoom, got {:?}", other),
    }

    assert_eq!(handle_action(&mut app, MenuAction::ResetZoom, now), vec![Effect::SetZoom(1.0)]);
}

#[test]
fn test_new_window_request_loads_in_place() {
    let mut app = app();
    let effects = handle_event(&mut app, AppEvent::NewWindowRequested("https://popup.com".to_string()));
    assert_eq!(effects, vec![Effect::LoadUrl("https://popup.com".to_string())]);
}

#[test]
fn test_resize_and_close_persist_size() {
    let mut app = app();

    handle_event(&mut app, AppEvent::Resized(WindowSize::new(900, 600)));
    assert_eq!(app.window_state().get_window_size(), Some(WindowSize::new(900, 600)));

    let effects = handle_event(&mut app, AppEvent::CloseRequested(Some(WindowSize::new(1000, 700))));
    assert_eq!(effects, vec![Effect::Exit]);
    assert_eq!(app.window_state().get_window_size(), Some(WindowSize::new(1000, 700)));
}

#[test]
fn test_about_dialog_names_version() {
    let mut app = app();
    let effects = handle_action(&mut app, MenuAction::About, Instant::now());
    let (level, message) = dialog(&effects).unwrap();
    assert_eq!(level, NoticeLevel::Info);
    assert!(message.contains(env!("CARGO_PKG_VERSION")));
}
