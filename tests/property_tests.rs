use flipcards::cards::{Card, Deck};
use flipcards::core::{ReviewRng, ScriptedDraws, StoreConfig};
use flipcards::review::{score, select_next};
use flipcards::store::{Codec, DeckStore, Decks, FileStore, MemoryStore};
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    fn arb_card()(
        title in "[a-zA-Z0-9 ]{0,12}",
        description in "\\PC{0,20}",
        left in 0u32..1000,
        right in 0u32..1000
    ) -> Card {
        Card::new(title, description).with_swipes(left, right)
    }
}

prop_compose! {
    fn arb_deck()(
        name in "[a-z]{1,10}",
        cards in proptest::collection::vec(arb_card(), 0..8)
    ) -> Deck {
        Deck { name, cards }
    }
}

fn arb_decks() -> impl Strategy<Value = Decks> {
    proptest::collection::vec(arb_deck(), 0..5).prop_map(Decks::from)
}

fn arb_codec() -> impl Strategy<Value = Codec> {
    prop_oneof![Just(Codec::Json), Just(Codec::Bincode)]
}

// --- SCORE ---

proptest! {
    #[test]
    fn prop_score_in_range(left in any::<u32>(), right in any::<u32>()) {
        let s = score(&Card::new("q", "a").with_swipes(left, right));
        prop_assert!(s <= 100);
    }

    #[test]
    fn prop_score_monotonic_in_left(left in 0u32..100_000, right in 0u32..100_000) {
        let lower = score(&Card::new("q", "a").with_swipes(left, right));
        let higher = score(&Card::new("q", "a").with_swipes(left + 1, right));
        prop_assert!(lower <= higher, "{} > {} at ({}, {})", lower, higher, left, right);
    }

    #[test]
    fn prop_score_antitonic_in_right(left in 0u32..100_000, right in 0u32..100_000) {
        let before = score(&Card::new("q", "a").with_swipes(left, right));
        let after = score(&Card::new("q", "a").with_swipes(left, right + 1));
        prop_assert!(after <= before, "{} > {} at ({}, {})", after, before, left, right);
    }

    #[test]
    fn prop_equal_counts_score_fifty(n in 0u32..1_000_000) {
        prop_assert_eq!(score(&Card::new("q", "a").with_swipes(n, n)), 50);
    }
}

// --- SELECTION ---

proptest! {
    #[test]
    fn prop_never_repeats_current(
        cards in proptest::collection::vec(arb_card(), 2..12),
        current_seed in any::<usize>(),
        draw in any::<u64>()
    ) {
        let current = current_seed % cards.len();
        let next = select_next(&cards, current, &mut ScriptedDraws::new(vec![draw]));
        prop_assert_ne!(next, current);
        prop_assert!(next < cards.len());
    }

    #[test]
    fn prop_small_decks_select_zero(
        cards in proptest::collection::vec(arb_card(), 0..2),
        current in any::<usize>(),
        seed in any::<u64>()
    ) {
        prop_assert_eq!(select_next(&cards, current, &mut ReviewRng::new(seed)), 0);
    }

    #[test]
    fn prop_out_of_range_cursor_is_accepted(
        cards in proptest::collection::vec(arb_card(), 2..12),
        offset in 0usize..1000,
        seed in any::<u64>()
    ) {
        let next = select_next(&cards, cards.len() + offset, &mut ReviewRng::new(seed));
        prop_assert!(next < cards.len());
    }
}

// --- PERSISTENCE ROUND-TRIP ---

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_memory_store_round_trip(decks in arb_decks(), codec in arb_codec()) {
        let mut store = MemoryStore::with_config(StoreConfig::default().with_codec(codec));
        store.save(&decks).unwrap();
        prop_assert_eq!(store.load().unwrap(), decks);
    }

    #[test]
    fn prop_file_store_round_trip(decks in arb_decks(), codec in arb_codec()) {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::in_dir(dir.path(), &StoreConfig::default().with_codec(codec));
        store.save(&decks).unwrap();
        prop_assert_eq!(store.load().unwrap(), decks);
    }
}
