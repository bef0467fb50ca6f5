use std::fmt;

// === StorageError ===

/// Errors raised by a slot storage backend.
///
/// These never leave the durable store: every read or write failure is logged
/// and replaced by the slot's default value.
#[derive(Debug)]
pub enum StorageError {
    /// Reading the slot failed for a reason other than the slot being absent.
    ReadFailed(String),
    /// Writing the slot failed.
    WriteFailed(String),
    /// The slot content could not be parsed or serialized.
    SerializationError(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadFailed(msg) => write!(f, "Storage read failed: {}", msg),
            StorageError::WriteFailed(msg) => write!(f, "Storage write failed: {}", msg),
            StorageError::SerializationError(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

// === BookmarkError ===

/// Errors related to bookmark ledger operations.
#[derive(Debug, Clone, PartialEq)]
pub enum BookmarkError {
    /// The page is a local file or the blank placeholder and cannot be bookmarked.
    InvalidTarget(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::InvalidTarget(url) => {
                write!(f, "This page cannot be bookmarked: {}", url)
            }
        }
    }
}

impl std::error::Error for BookmarkError {}

// === PageQueryError ===

/// Errors raised while reading the title of the active page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageQueryError {
    /// The page did not answer before the query deadline.
    Timeout,
    /// The script ran but its result was not a usable title.
    InvalidResult(String),
    /// The engine refused or failed to evaluate the script.
    ScriptFailed(String),
}

impl fmt::Display for PageQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageQueryError::Timeout => write!(f, "Page title query timed out"),
            PageQueryError::InvalidResult(raw) => {
                write!(f, "Page title query returned an invalid result: {}", raw)
            }
            PageQueryError::ScriptFailed(msg) => {
                write!(f, "Page title script failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for PageQueryError {}

// === ConfigError ===

/// Errors raised while building the application configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// An environment override holds a value that cannot be used.
    InvalidValue { key: String, value: String },
    /// The data directory could not be prepared.
    DataDir(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {}: {}", key, value)
            }
            ConfigError::DataDir(msg) => write!(f, "Data directory error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
