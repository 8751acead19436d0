#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use proptest::collection::vec;
use proptest::prelude::*;
use tagtree::test_utils::*;

// Class-like tokens without whitespace
fn token_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

// Style keys and values free of separators
fn style_part_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,10}"
}

proptest! {
    #[test]
    fn class_tokens_survive_any_spacing(
        tokens in vec(token_strategy(), 0..8),
        pad in 1usize..4
    ) {
        let joined = format!(
            "{}{}{}",
            " ".repeat(pad),
            tokens.join(" ".repeat(pad).as_str()),
            " ".repeat(pad)
        );
        let el = div().class(&joined);
        prop_assert_eq!(el.classes(), tokens.as_slice());
    }

    #[test]
    fn well_formed_declarations_are_all_kept(
        pairs in vec((style_part_strategy(), style_part_strategy()), 1..6)
    ) {
        let block = pairs
            .iter()
            .map(|(k, v)| format!(" {} : {} ", k, v))
            .collect::<Vec<_>>()
            .join(";");
        let el = div().style_block(&block);
        for (k, _) in &pairs {
            // the last declaration for a key wins
            let expected = pairs.iter().rev().find(|(key, _)| key == k).map(|(_, v)| v.as_str());
            prop_assert_eq!(el.style_value(k), expected);
        }
    }

    #[test]
    fn fragments_with_extra_colons_are_dropped(
        a in style_part_strategy(),
        b in style_part_strategy(),
        c in style_part_strategy()
    ) {
        let el = div().style_block(&format!("{}:{}:{}", a, b, c));
        prop_assert!(el.styles().is_empty());
    }

    #[test]
    fn rendering_is_deterministic(
        attrs in vec((token_strategy(), token_strategy()), 0..6),
        text in "[a-z ]{0,20}"
    ) {
        let build = || {
            attrs
                .iter()
                .fold(span().text(text.clone()), |el, (k, v)| el.attr(k.as_str(), v.as_str()))
        };
        let first = div().child(build()).render();
        let second = div().child(build()).render();
        prop_assert_eq!(&first, &second);
        prop_assert!(first.starts_with("<div>"));
        prop_assert!(first.ends_with("</div>"));
    }
}
