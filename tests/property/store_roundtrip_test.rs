//! Property-based tests for the durable store: whatever is saved into a slot
//! loads back unchanged, through both storage backends.

use fishbrowser::storage::DurableStore;
use fishbrowser::types::bookmark::Bookmark;
use fishbrowser::types::history::HistoryEntry;
use fishbrowser::types::window::{Opacity, WindowSize};
use proptest::prelude::*;

fn arb_bookmark() -> impl Strategy<Value = Bookmark> {
    ("https://[a-z]{1,10}\\.com/[a-z0-9]{0,8}", "\\PC{0,30}")
        .prop_map(|(url, title)| Bookmark::new(url, title))
}

fn arb_entry() -> impl Strategy<Value = HistoryEntry> {
    (
        "https://[a-z]{1,10}\\.org",
        "\\PC{0,30}",
        "20[0-9]{2}-0[1-9]-1[0-9]T0[0-9]:[0-5][0-9]:[0-5][0-9]\\.[0-9]{3}Z",
    )
        .prop_map(|(url, title, timestamp)| HistoryEntry { url, title, timestamp })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn ledgers_roundtrip_in_memory(
        bookmarks in proptest::collection::vec(arb_bookmark(), 0..10),
        history in proptest::collection::vec(arb_entry(), 0..10),
    ) {
        let store = DurableStore::open_in_memory();
        prop_assert!(store.save(&bookmarks));
        prop_assert!(store.save(&history));
        prop_assert_eq!(store.load::<Vec<Bookmark>>(), bookmarks);
        prop_assert_eq!(store.load::<Vec<HistoryEntry>>(), history);
    }

    #[test]
    fn window_state_roundtrips_on_disk(
        percent in 10u32..=100,
        width in 1u32..8000,
        height in 1u32..8000,
    ) {
        let opacity = f64::from(percent) / 100.0;
        let dir = tempfile::tempdir().unwrap();
        let store = DurableStore::open(dir.path());

        prop_assert!(store.save(&Opacity::new(opacity)));
        prop_assert!(store.save(&Some(WindowSize::new(width, height))));

        let reopened = DurableStore::open(dir.path());
        prop_assert_eq!(reopened.load::<Opacity>().value(), opacity);
        prop_assert_eq!(reopened.load::<Option<WindowSize>>(), Some(WindowSize::new(width, height)));
    }
}
