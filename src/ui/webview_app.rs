//! WebView-based browser shell using `wry` + `tao`.
//!
//! Architecture:
//! - A single transparent window hosts one web view; opacity is applied to the
//!   page root after every load.
//! - `with_initialization_script(SHELL_JS)` injects the toast overlay and the
//!   key-chord listener into every page.
//! - IPC, page-load, new-window and menu callbacks only forward events to the
//!   event loop through the proxy. All state lives on the event-loop thread.
//! - Title queries are answered by `evaluate_script_with_callback`; the loop
//!   wakes at the earliest pending deadline to expire unanswered ones.

use std::sync::Mutex;
use std::time::Instant;

use log::{debug, error, info, warn};
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use tao::dpi::LogicalSize;
use tao::event::{Event, StartCause, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::{Window, WindowBuilder};
use wry::{PageLoadEvent, WebView, WebViewBuilder};

use super::menu_bar::MenuBar;
use crate::app::App;
use crate::config::{AppConfig, APP_NAME};
use crate::event_router::{handle_action, handle_event};
use crate::managers::window_state_manager::WindowStateManagerTrait;
use crate::services::title_query::TITLE_SCRIPT;
use crate::types::errors::PageQueryError;
use crate::types::events::{AppEvent, Effect, Notice, NoticeLevel};
use crate::types::window::{resolve_window_size, WindowSize};

const SHELL_JS: &str = include_str!("../../resources/ui/shell.js");

/// Used as the work area when the platform reports no monitor.
const FALLBACK_WORK_AREA: WindowSize = WindowSize {
    width: 1280,
    height: 800,
};

#[derive(Debug)]
enum UserEvent {
    App(AppEvent),
    Menu(muda::MenuId),
}

struct Shell {
    app: App,
    window: Window,
    webview: WebView,
    menu_bar: MenuBar,
    proxy: EventLoopProxy<UserEvent>,
}

// ─── IPC ───

/// Decodes a message posted by the page shell script.
fn parse_ipc(body: &str) -> Option<AppEvent> {
    let msg: serde_json::Value = serde_json::from_str(body).ok()?;
    match msg.get("cmd")?.as_str()? {
        "key" => {
            let chord = msg.get("chord")?.as_str()?;
            Some(AppEvent::KeyPressed(chord.to_string()))
        }
        other => {
            debug!("Unknown IPC command: {}", other);
            None
        }
    }
}

fn logical_size(window: &Window) -> WindowSize {
    let size = window.inner_size().to_logical::<u32>(window.scale_factor());
    WindowSize::new(size.width, size.height)
}

fn work_area(event_loop: &EventLoop<UserEvent>) -> WindowSize {
    event_loop
        .primary_monitor()
        .map(|monitor| {
            let size = monitor.size().to_logical::<u32>(monitor.scale_factor());
            WindowSize::new(size.width, size.height)
        })
        .filter(WindowSize::is_valid)
        .unwrap_or(FALLBACK_WORK_AREA)
}

impl Shell {
    /// Routes `event` through the core and applies the resulting effects.
    /// Returns `true` when the application should exit.
    fn dispatch(&mut self, event: AppEvent) -> bool {
        let effects = handle_event(&mut self.app, event);
        self.apply_all(effects)
    }

    fn apply_all(&mut self, effects: Vec<Effect>) -> bool {
        let mut exit = false;
        for effect in effects {
            exit |= self.apply(effect);
        }
        exit
    }

    fn eval(&self, script: &str) {
        if let Err(e) = self.webview.evaluate_script(script) {
            warn!("Script evaluation failed: {}", e);
        }
    }

    fn apply(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::LoadUrl(url) => {
                info!("Loading {}", url);
                if let Err(e) = self.webview.load_url(&url) {
                    warn!("Failed to load {}: {}", url, e);
                }
            }
            Effect::GoBack => self.eval("history.back();"),
            Effect::GoForward => self.eval("history.forward();"),
            Effect::Reload => self.eval("location.reload();"),
            Effect::ToggleDevTools => {
                if self.webview.is_devtools_open() {
                    self.webview.close_devtools();
                } else {
                    self.webview.open_devtools();
                }
            }
            Effect::SetZoom(scale) => {
                if let Err(e) = self.webview.zoom(scale) {
                    warn!("Failed to zoom to {}: {}", scale, e);
                }
            }
            Effect::QueryTitle { query_id } => return self.query_title(query_id),
            Effect::ApplyOpacity(opacity) => self.eval(&format!(
                "document.documentElement.style.opacity = '{}';",
                opacity.value()
            )),
            Effect::SetVisible(visible) => self.window.set_visible(visible),
            Effect::RefreshMenu(tree) => {
                if let Err(e) = self.menu_bar.render(&tree) {
                    error!("Failed to rebuild menu: {}", e);
                }
            }
            Effect::Notify(Notice::Toast(text)) => self.eval(&format!(
                "window.__fishToast && window.__fishToast({});",
                serde_json::Value::String(text)
            )),
            Effect::Notify(Notice::Dialog { level, title, message }) => {
                MessageDialog::new()
                    .set_level(message_level(level))
                    .set_title(&title)
                    .set_description(&message)
                    .set_buttons(MessageButtons::Ok)
                    .show();
            }
            Effect::Confirm { title, message, target } => {
                let answer = MessageDialog::new()
                    .set_level(MessageLevel::Warning)
                    .set_title(&title)
                    .set_description(&message)
                    .set_buttons(MessageButtons::YesNo)
                    .show();
                if matches!(answer, MessageDialogResult::Yes) {
                    return self.dispatch(AppEvent::DeleteConfirmed(target));
                }
            }
            Effect::Exit => return true,
        }
        false
    }

    /// Asks the page for its title. The answer arrives later as a user event;
    /// if the script cannot even be started the query settles right away.
    fn query_title(&mut self, query_id: u64) -> bool {
        let proxy = self.proxy.clone();
        let started = self.webview.evaluate_script_with_callback(TITLE_SCRIPT, move |raw| {
            let _ = proxy.send_event(UserEvent::App(AppEvent::TitleResolved {
                query_id,
                result: Ok(raw),
            }));
        });

        match started {
            Ok(()) => false,
            Err(e) => self.dispatch(AppEvent::TitleResolved {
                query_id,
                result: Err(PageQueryError::ScriptFailed(e.to_string())),
            }),
        }
    }

    fn control_flow(&self) -> ControlFlow {
        match self.app.title_queries.next_deadline() {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        }
    }
}

fn message_level(level: NoticeLevel) -> MessageLevel {
    match level {
        NoticeLevel::Info => MessageLevel::Info,
        NoticeLevel::Warning => MessageLevel::Warning,
        NoticeLevel::Error => MessageLevel::Error,
    }
}

// ─── Main entry point ───

pub fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = App::new(config)?;
    app.startup();

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let size = resolve_window_size(app.window_state().get_window_size(), work_area(&event_loop));
    let window = WindowBuilder::new()
        .with_title(APP_NAME)
        .with_inner_size(LogicalSize::new(size.width, size.height))
        .with_transparent(true)
        .build(&event_loop)?;

    let ipc_proxy = proxy.clone();
    let load_proxy = proxy.clone();
    let nw_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_url(app.home_url())
        .with_user_agent(&app.config.user_agent)
        .with_transparent(true)
        .with_initialization_script(SHELL_JS)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            if let Some(event) = parse_ipc(msg.body()) {
                let _ = ipc_proxy.send_event(UserEvent::App(event));
            }
        })
        .with_on_page_load_handler(move |event, url| {
            let event = match event {
                PageLoadEvent::Started => AppEvent::PageLoadStarted { url },
                PageLoadEvent::Finished => AppEvent::PageLoaded { url },
            };
            let _ = load_proxy.send_event(UserEvent::App(event));
        })
        .with_new_window_req_handler(move |url, _features| {
            let _ = nw_proxy.send_event(UserEvent::App(AppEvent::NewWindowRequested(url)));
            wry::NewWindowResponse::Deny
        })
        .with_devtools(true);

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().ok_or("window has no GTK container")?;
        builder.build_gtk(vbox)?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window)?;

    let mut menu_bar = MenuBar::new();
    menu_bar.attach(&window)?;
    menu_bar.render(&app.menu_tree())?;

    let menu_proxy = Mutex::new(proxy.clone());
    muda::MenuEvent::set_event_handler(Some(move |event: muda::MenuEvent| {
        if let Ok(proxy) = menu_proxy.lock() {
            let _ = proxy.send_event(UserEvent::Menu(event.id));
        }
    }));

    let mut shell = Shell {
        app,
        window,
        webview,
        menu_bar,
        proxy,
    };

    event_loop.run(move |event, _, control_flow| {
        let exit = match event {
            Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
                shell.dispatch(AppEvent::Tick(Instant::now()))
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => {
                let size = logical_size(&shell.window);
                shell.dispatch(AppEvent::Resized(size))
            }

            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                let size = logical_size(&shell.window);
                shell.dispatch(AppEvent::CloseRequested(Some(size)))
            }

            Event::UserEvent(UserEvent::App(app_event)) => shell.dispatch(app_event),

            Event::UserEvent(UserEvent::Menu(id)) => match shell.menu_bar.action_for(&id).cloned() {
                Some(action) => {
                    let effects = handle_action(&mut shell.app, action, Instant::now());
                    shell.apply_all(effects)
                }
                None => false,
            },

            _ => false,
        };

        if exit {
            shell.app.shutdown();
            *control_flow = ControlFlow::Exit;
        } else {
            *control_flow = shell.control_flow();
        }
    })
}
