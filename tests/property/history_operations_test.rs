//! Property-based tests for history ledger operations.
//!
//! For any sequence of recorded visits the ledger holds each URL at most
//! once, never exceeds the cap, and lists the most recent visit first.

use fishbrowser::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use fishbrowser::storage::DurableStore;
use fishbrowser::types::history::HISTORY_CAP;
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_url(hosts: u32) -> impl Strategy<Value = String> {
    (0..hosts).prop_map(|i| format!("https://site{}.com/", i))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn history_is_deduplicated_and_recent_first(
        visits in proptest::collection::vec(arb_url(12), 1..60),
    ) {
        let store = DurableStore::open_in_memory();
        let mut mgr = HistoryManager::new(&store);

        for url in &visits {
            mgr.record_visit(url, "Title");
            prop_assert_eq!(&mgr.list_history()[0].url, url);
        }

        let history = mgr.list_history();
        let unique: HashSet<&str> = history.iter().map(|h| h.url.as_str()).collect();
        prop_assert_eq!(unique.len(), history.len());

        let distinct: HashSet<&String> = visits.iter().collect();
        prop_assert_eq!(history.len(), distinct.len());
    }

    #[test]
    fn history_never_exceeds_cap(
        visits in proptest::collection::vec(arb_url(400), HISTORY_CAP..HISTORY_CAP + 80),
    ) {
        let store = DurableStore::open_in_memory();
        let mut mgr = HistoryManager::new(&store);

        for url in &visits {
            mgr.record_visit(url, "Title");
        }

        prop_assert!(mgr.list_history().len() <= HISTORY_CAP);
    }

    #[test]
    fn deleting_absent_url_changes_nothing(
        visits in proptest::collection::vec(arb_url(10), 0..20),
    ) {
        let store = DurableStore::open_in_memory();
        let mut mgr = HistoryManager::new(&store);
        for url in &visits {
            mgr.record_visit(url, "Title");
        }
        let before = mgr.list_history();

        prop_assert!(!mgr.delete_entry("http://not-present"));
        prop_assert_eq!(mgr.list_history(), before);
    }
}
