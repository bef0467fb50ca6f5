//! Classification of page URLs reported by the web view.

/// The placeholder page shown before anything has been navigated to.
pub const BLANK_PAGE: &str = "about:blank";

/// Scheme prefix of local file references, including the bundled home page.
pub const LOCAL_FILE_PREFIX: &str = "file://";

/// Returns true for URLs that point at local content rather than a navigated
/// destination: local files and the blank placeholder.
pub fn is_local_or_blank(url: &str) -> bool {
    url.starts_with(LOCAL_FILE_PREFIX) || url == BLANK_PAGE
}

/// Returns true when a page-load for `url` should be written to history.
pub fn is_recordable(url: &str) -> bool {
    !url.is_empty() && !is_local_or_blank(url)
}
