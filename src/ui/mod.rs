//! FishBrowser UI layer.
//!
//! Uses `wry` for the web view, `tao` for the window and event loop, `muda`
//! for the native menu bar and `rfd` for message boxes:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The UI owns no browser state; it feeds events to the event router and
//! carries out the effects it returns.

pub mod menu_bar;
pub mod webview_app;
