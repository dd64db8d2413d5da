//! Property tests for generation and validation.
//!
//! Generation must produce a valid card for every valid configuration and
//! every seed; these properties pin that down over the whole configuration
//! space rather than a handful of examples.

use proptest::prelude::*;

use bingo_card_engine::{CardConfig, CardEngine, CardRng, CARD_SIZE, FREE_COL, FREE_ROW};

/// Any 5 distinct uppercase letters, in arbitrary order.
fn header_strategy() -> impl Strategy<Value = String> {
    prop::collection::hash_set(prop::char::range('A', 'Z'), 5)
        .prop_map(|letters| letters.into_iter().collect())
}

/// Any accepted maximum number: a multiple of 5 in [50, 90].
fn max_number_strategy() -> impl Strategy<Value = u32> {
    (10u32..=18).prop_map(|k| k * 5)
}

proptest! {
    #[test]
    fn valid_configs_construct_with_derived_span(
        header in header_strategy(),
        max_number in max_number_strategy(),
    ) {
        let config = CardConfig::new(&header, max_number).unwrap();
        prop_assert_eq!(config.column_span(), max_number / 5);
        prop_assert_eq!(config.max_number(), max_number);
    }

    #[test]
    fn out_of_family_max_numbers_are_rejected(max_number in 0u32..200) {
        let accepted = (50..=90).contains(&max_number) && max_number % 5 == 0;
        prop_assert_eq!(CardConfig::new("BINGO", max_number).is_ok(), accepted);
    }

    #[test]
    fn generated_cards_always_validate(
        header in header_strategy(),
        max_number in max_number_strategy(),
        seed in any::<u64>(),
    ) {
        let engine = CardEngine::new(&header, max_number).unwrap();
        let card = engine.generate_card(&mut CardRng::new(seed));
        prop_assert!(engine.validate_card(&card));
    }

    #[test]
    fn free_cell_is_exactly_the_center(
        max_number in max_number_strategy(),
        seed in any::<u64>(),
    ) {
        let engine = CardEngine::new("BINGO", max_number).unwrap();
        let card = engine.generate_card(&mut CardRng::new(seed));

        for row in 0..CARD_SIZE {
            for col in 0..CARD_SIZE {
                prop_assert_eq!(
                    card.get(row, col).is_free(),
                    row == FREE_ROW && col == FREE_COL
                );
            }
        }
    }

    #[test]
    fn columns_hold_distinct_numbers_in_their_span(
        max_number in max_number_strategy(),
        seed in any::<u64>(),
    ) {
        let engine = CardEngine::new("BINGO", max_number).unwrap();
        let card = engine.generate_card(&mut CardRng::new(seed));

        for col in 0..CARD_SIZE {
            let range = engine.config().column_range(col);
            let numbers: Vec<u32> = card.column(col).filter_map(|c| c.number()).collect();

            for &n in &numbers {
                prop_assert!(range.contains(&n));
            }

            let mut deduped = numbers.clone();
            deduped.sort_unstable();
            deduped.dedup();
            prop_assert_eq!(deduped.len(), numbers.len());
        }
    }

    #[test]
    fn rendering_never_panics_even_on_mangled_cards(
        seed in any::<u64>(),
        row in 0usize..CARD_SIZE,
        col in 0usize..CARD_SIZE,
        junk in any::<u32>(),
    ) {
        let engine = CardEngine::default();
        let mut card = engine.generate_card(&mut CardRng::new(seed));
        card.set(row, col, bingo_card_engine::Cell::Number(junk));

        let text = engine.render_card(&card);
        prop_assert_eq!(text.lines().count(), CARD_SIZE + 3);
    }
}
