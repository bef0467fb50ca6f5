//! Pending page-title queries.
//!
//! Reading `document.title` from the web view is asynchronous and may never
//! answer. Each query is registered here with a deadline; it is settled either
//! by the engine's answer or by [`TitleQueries::expire`], and every failure
//! settles with the raw URL as the title.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::types::errors::PageQueryError;

/// Default time the page gets to answer a title query.
pub const DEFAULT_TITLE_TIMEOUT: Duration = Duration::from_secs(3);

/// Script evaluated in the page to read its title.
pub const TITLE_SCRIPT: &str = "document.title";

/// What the title is needed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitlePurpose {
    Bookmark,
    History,
}

#[derive(Debug, Clone)]
struct PendingTitle {
    purpose: TitlePurpose,
    url: String,
    deadline: Instant,
}

/// A settled query. `title` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTitle {
    pub purpose: TitlePurpose,
    pub url: String,
    pub title: String,
    /// True when the page did not supply a title and the URL was used instead.
    pub fell_back: bool,
}

/// Decodes the JSON value produced by evaluating [`TITLE_SCRIPT`].
pub fn parse_title(raw: &str) -> Result<String, PageQueryError> {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::String(title)) => Ok(title.trim().to_string()),
        Ok(other) => Err(PageQueryError::InvalidResult(other.to_string())),
        Err(_) => Err(PageQueryError::InvalidResult(raw.to_string())),
    }
}

#[derive(Debug)]
pub struct TitleQueries {
    next_id: u64,
    pending: BTreeMap<u64, PendingTitle>,
    timeout: Duration,
}

impl TitleQueries {
    pub fn new(timeout: Duration) -> Self {
        Self {
            next_id: 1,
            pending: BTreeMap::new(),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Registers a query for the page at `url` and returns its id.
    pub fn start(&mut self, purpose: TitlePurpose, url: &str, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.insert(
            id,
            PendingTitle {
                purpose,
                url: url.to_string(),
                deadline: now + self.timeout,
            },
        );
        id
    }

    /// Settles query `id` with the engine's answer. `result` holds the raw
    /// JSON of the script evaluation. Returns `None` for unknown ids, which
    /// includes queries that already expired.
    pub fn resolve(&mut self, id: u64, result: Result<String, PageQueryError>) -> Option<ResolvedTitle> {
        let pending = self.pending.remove(&id)?;
        let title = result.and_then(|raw| parse_title(&raw));
        Some(Self::settle(pending, title))
    }

    /// Settles every query whose deadline is at or before `now`.
    pub fn expire(&mut self, now: Instant) -> Vec<ResolvedTitle> {
        let overdue: Vec<u64> = self
            .pending
            .iter()
            .filter(|(_, p)| p.deadline <= now)
            .map(|(id, _)| *id)
            .collect();

        overdue
            .into_iter()
            .filter_map(|id| self.pending.remove(&id))
            .map(|pending| Self::settle(pending, Err(PageQueryError::Timeout)))
            .collect()
    }

    /// Earliest deadline among pending queries.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|p| p.deadline).min()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn settle(pending: PendingTitle, title: Result<String, PageQueryError>) -> ResolvedTitle {
        match title {
            Ok(title) if !title.is_empty() => {
                debug!("Title for {}: {}", pending.url, title);
                ResolvedTitle {
                    purpose: pending.purpose,
                    url: pending.url,
                    title,
                    fell_back: false,
                }
            }
            Ok(_) => ResolvedTitle {
                purpose: pending.purpose,
                title: pending.url.clone(),
                url: pending.url,
                fell_back: true,
            },
            Err(e) => {
                warn!("Could not read title of {}: {}; using the URL", pending.url, e);
                ResolvedTitle {
                    purpose: pending.purpose,
                    title: pending.url.clone(),
                    url: pending.url,
                    fell_back: true,
                }
            }
        }
    }
}

impl Default for TitleQueries {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE_TIMEOUT)
    }
}
