use fishbrowser::types::errors::*;

// === StorageError Tests ===

#[test]
fn storage_error_display_variants() {
    assert_eq!(
        StorageError::ReadFailed("permission denied".to_string()).to_string(),
        "Storage read failed: permission denied"
    );
    assert_eq!(
        StorageError::WriteFailed("disk full".to_string()).to_string(),
        "Storage write failed: disk full"
    );
    assert_eq!(
        StorageError::SerializationError("NaN".to_string()).to_string(),
        "Storage serialization error: NaN"
    );
}

#[test]
fn storage_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(StorageError::ReadFailed("x".to_string()));
    assert!(err.source().is_none());
}

// === BookmarkError Tests ===

#[test]
fn bookmark_error_invalid_target_display() {
    let err = BookmarkError::InvalidTarget("file:///local.html".to_string());
    assert_eq!(err.to_string(), "This page cannot be bookmarked: file:///local.html");
}

// === PageQueryError Tests ===

#[test]
fn page_query_error_display_variants() {
    assert_eq!(PageQueryError::Timeout.to_string(), "Page title query timed out");
    assert_eq!(
        PageQueryError::InvalidResult("42".to_string()).to_string(),
        "Page title query returned an invalid result: 42"
    );
    assert_eq!(
        PageQueryError::ScriptFailed("webview gone".to_string()).to_string(),
        "Page title script failed: webview gone"
    );
}

// === ConfigError Tests ===

#[test]
fn config_error_display_variants() {
    let err = ConfigError::InvalidValue {
        key: "FISHBROWSER_TITLE_TIMEOUT_MS".to_string(),
        value: "soon".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid value for FISHBROWSER_TITLE_TIMEOUT_MS: soon");
    assert_eq!(
        ConfigError::DataDir("read-only".to_string()).to_string(),
        "Data directory error: read-only"
    );
}

#[test]
fn config_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(ConfigError::DataDir("x".to_string()));
    assert!(err.source().is_none());
}
