//! FishBrowser: a translucent single-window browser.
//!
//! Entry point: opens the browser window. When built without the `gui`
//! feature, runs a console demo of the core against a temporary directory.

use fishbrowser::config::AppConfig;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[cfg(feature = "gui")]
fn main() {
    init_logging();

    let result = AppConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
        .and_then(fishbrowser::ui::webview_app::run);

    if let Err(e) = result {
        log::error!("FishBrowser failed to start: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    init_logging();

    println!();
    println!("FishBrowser v{} — Demo Mode", env!("CARGO_PKG_VERSION"));
    println!();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let dir = std::env::temp_dir().join(format!("fishbrowser-demo-{}", std::process::id()));
    let config = AppConfig {
        data_dir: dir.clone(),
        ..config
    };

    match demo::run(config) {
        Ok(()) => println!("  ✓ All components demonstrated successfully"),
        Err(e) => eprintln!("  Demo failed: {}", e),
    }
    let _ = std::fs::remove_dir_all(&dir);
}

#[cfg(not(feature = "gui"))]
mod demo {
    use std::time::Instant;

    use fishbrowser::app::App;
    use fishbrowser::config::AppConfig;
    use fishbrowser::event_router::{handle_action, handle_event};
    use fishbrowser::managers::bookmark_manager::BookmarkManagerTrait;
    use fishbrowser::managers::history_manager::HistoryManagerTrait;
    use fishbrowser::managers::window_state_manager::WindowStateManagerTrait;
    use fishbrowser::types::events::{AppEvent, DeleteTarget, Effect, Notice};
    use fishbrowser::types::menu::MenuAction;

    fn section(name: &str) {
        println!("───────────────────────────────────────────────────────────────");
        println!("  {}", name);
        println!("───────────────────────────────────────────────────────────────");
    }

    fn show(effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::RefreshMenu(tree) => println!("    → menu rebuilt ({} actions)", tree.actions().len()),
                Effect::Notify(Notice::Toast(text)) => println!("    → toast: {}", text),
                Effect::Notify(Notice::Dialog { title, message, .. }) => {
                    println!("    → dialog [{}]: {}", title, message)
                }
                other => println!("    → {:?}", other),
            }
        }
    }

    /// Answers every pending title query the way a page titled `title` would.
    fn answer_titles(app: &mut App, effects: Vec<Effect>, title: &str) -> Vec<Effect> {
        let mut out = Vec::new();
        for effect in effects {
            if let Effect::QueryTitle { query_id } = effect {
                out.extend(handle_event(
                    app,
                    AppEvent::TitleResolved {
                        query_id,
                        result: Ok(format!("\"{}\"", title)),
                    },
                ));
            } else {
                out.push(effect);
            }
        }
        out
    }

    pub fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
        let mut app = App::new(config)?;
        app.startup();

        section("Browsing");
        for (url, title) in [
            ("https://www.rust-lang.org/", "Rust Programming Language"),
            ("https://docs.rs/", "Docs.rs"),
            ("https://www.rust-lang.org/", "Rust Programming Language"),
        ] {
            println!("  Loaded {}", url);
            let effects = handle_event(&mut app, AppEvent::PageLoaded { url: url.to_string() });
            show(&answer_titles(&mut app, effects, title));
        }
        println!("  History: {} entries", app.history().list_history().len());

        section("Bookmarks");
        let effects = handle_action(&mut app, MenuAction::AddBookmark, Instant::now());
        show(&answer_titles(&mut app, effects, "Rust Programming Language"));

        let home = app.home_url().to_string();
        handle_event(&mut app, AppEvent::PageLoaded { url: home });
        println!("  Bookmarking the home page:");
        show(&handle_action(&mut app, MenuAction::AddBookmark, Instant::now()));

        let deleted = handle_event(
            &mut app,
            AppEvent::DeleteConfirmed(DeleteTarget::Bookmark {
                url: "https://www.rust-lang.org/".to_string(),
                title: "Rust Programming Language".to_string(),
            }),
        );
        show(&deleted);
        println!("  Bookmarks left: {}", app.bookmarks().list_bookmarks().len());

        section("Opacity");
        for _ in 0..3 {
            show(&handle_event(&mut app, AppEvent::KeyPressed("Ctrl+Shift+ArrowDown".to_string())));
        }
        println!("  Stored opacity: {}%", app.window_state().get_opacity().percent());

        app.shutdown();
        Ok(())
    }
}
