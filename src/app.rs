//! App Core for FishBrowser.
//!
//! Central struct holding the durable store and the in-memory session state
//! every event handler works against.

use std::path::{Path, PathBuf};

use log::info;

use crate::config::{AppConfig, APP_NAME, APP_VERSION};
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::managers::shortcut_manager::ShortcutManager;
use crate::managers::window_state_manager::{WindowStateManager, WindowStateManagerTrait};
use crate::services::menu_builder::build_menu_tree;
use crate::services::title_query::TitleQueries;
use crate::storage::{DurableStore, SlotStorage};
use crate::types::errors::ConfigError;
use crate::types::menu::MenuTree;
use crate::types::page::LOCAL_FILE_PREFIX;

/// Bundled start page.
pub const HOME_PAGE_HTML: &str = include_str!("../resources/ui/home.html");
pub const HOME_PAGE_FILE: &str = "home.html";

/// Central application struct.
///
/// The ledger managers borrow the store with a lifetime, so they are not
/// stored here; create them on demand with [`App::bookmarks`],
/// [`App::history`] and [`App::window_state`].
pub struct App {
    pub config: AppConfig,
    pub store: DurableStore,
    pub shortcut_manager: ShortcutManager,
    pub title_queries: TitleQueries,
    /// Page currently shown in the web view, as last reported by a load.
    pub current_url: Option<String>,
    pub window_visible: bool,
    pub zoom: f64,
    home_url: String,
}

impl App {
    /// Creates the app with file-backed storage in `config.data_dir` and
    /// installs the home page there.
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        let home_path = install_home_page(&config.data_dir)?;
        let store = DurableStore::open(&config.data_dir);
        let mut app = Self::with_store(config, store);
        app.home_url = file_url(&home_path);
        Ok(app)
    }

    /// Creates the app over arbitrary slot storage. Nothing is written to
    /// disk; the home URL still points into `config.data_dir`.
    pub fn with_storage<S: SlotStorage + 'static>(config: AppConfig, storage: S) -> Self {
        Self::with_store(config, DurableStore::new(storage))
    }

    fn with_store(config: AppConfig, store: DurableStore) -> Self {
        let home_url = file_url(&config.data_dir.join(HOME_PAGE_FILE));
        let title_queries = TitleQueries::new(config.title_timeout);
        Self {
            config,
            store,
            shortcut_manager: ShortcutManager::new(),
            title_queries,
            current_url: None,
            window_visible: true,
            zoom: 1.0,
            home_url,
        }
    }

    pub fn bookmarks(&self) -> BookmarkManager<'_> {
        BookmarkManager::new(&self.store)
    }

    pub fn history(&self) -> HistoryManager<'_> {
        HistoryManager::new(&self.store)
    }

    pub fn window_state(&self) -> WindowStateManager<'_> {
        WindowStateManager::new(&self.store)
    }

    pub fn home_url(&self) -> &str {
        &self.home_url
    }

    /// Projects the current ledgers and opacity into a fresh menu tree.
    pub fn menu_tree(&self) -> MenuTree {
        build_menu_tree(
            &self.bookmarks().list_bookmarks(),
            &self.history().list_history(),
            self.window_state().get_opacity(),
        )
    }

    pub fn startup(&self) {
        info!(
            "{} {} starting (data dir: {}, {} bookmarks, {} history entries)",
            APP_NAME,
            APP_VERSION,
            self.config.data_dir.display(),
            self.bookmarks().list_bookmarks().len(),
            self.history().list_history().len()
        );
    }

    pub fn shutdown(&self) {
        if self.title_queries.pending_count() > 0 {
            info!(
                "Dropping {} unanswered title queries",
                self.title_queries.pending_count()
            );
        }
        info!("{} shutting down", APP_NAME);
    }
}

/// Writes the bundled home page into `dir`, creating it if needed.
fn install_home_page(dir: &Path) -> Result<PathBuf, ConfigError> {
    std::fs::create_dir_all(dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {}", dir.display(), e)))?;
    let path = dir.join(HOME_PAGE_FILE);
    std::fs::write(&path, HOME_PAGE_HTML)
        .map_err(|e| ConfigError::DataDir(format!("{}: {}", path.display(), e)))?;
    Ok(path)
}

/// `file://` URL for an absolute local path.
fn file_url(path: &Path) -> String {
    let path = path.to_string_lossy().replace('\\', "/");
    if path.starts_with('/') {
        format!("{}{}", LOCAL_FILE_PREFIX, path)
    } else {
        format!("{}/{}", LOCAL_FILE_PREFIX, path)
    }
}
