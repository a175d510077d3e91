//! Property tests for the filter.

use proptest::prelude::*;

use sift::{by_color, by_name, Color, Filter, Product, SpecFilter, Specification};

fn color() -> impl Strategy<Value = Color> {
    proptest::sample::select(Color::ALL.to_vec())
}

fn product() -> impl Strategy<Value = Product> {
    (
        "(Red|Blue|Green|Big|Small) (Shirt|Hat|Sock)",
        color(),
        proptest::option::of(0u32..1_000),
    )
        .prop_map(|(name, color, price)| {
            let product = Product::new(name, color);
            match price {
                Some(price) => product.with_price(price),
                None => product,
            }
        })
}

fn catalog() -> impl Strategy<Value = Vec<Product>> {
    proptest::collection::vec(product(), 0..=24)
}

/// True when `sub` appears in `full` in the same relative order.
fn is_subsequence(sub: &[&Product], full: &[Product]) -> bool {
    let mut rest = full.iter();
    sub.iter()
        .all(|wanted| rest.by_ref().any(|item| std::ptr::eq(item, *wanted)))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Output is an order-preserving subsequence of the input.
    #[test]
    fn property_filter_preserves_order(items in catalog(), wanted in color()) {
        let matched = SpecFilter.filter(&items, &by_color(wanted));
        prop_assert!(is_subsequence(&matched, &items));
    }

    /// PROPERTY: Every match satisfies the specification, and every item
    /// satisfying it is in the output.
    #[test]
    fn property_filter_is_sound_and_complete(items in catalog(), needle in "(Shirt|Hat|Red|e)") {
        let spec = by_name(needle.as_str());
        let matched = SpecFilter.filter(&items, &spec);

        prop_assert!(matched.iter().all(|item| spec.is_satisfied(item)));
        let expected = items.iter().filter(|item| spec.is_satisfied(item)).count();
        prop_assert_eq!(matched.len(), expected);
    }

    /// PROPERTY: Filtering the output again with the same specification is a no-op.
    #[test]
    fn property_filter_is_idempotent(items in catalog(), wanted in color()) {
        let spec = by_color(wanted);
        let once: Vec<Product> = SpecFilter.filter_cloned(&items, &spec);
        let twice: Vec<Product> = SpecFilter.filter_cloned(&once, &spec);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: The input is never mutated.
    #[test]
    fn property_filter_leaves_input_untouched(items in catalog(), wanted in color()) {
        let before = items.clone();
        let _ = SpecFilter.filter(&items, &by_color(wanted));
        prop_assert_eq!(items, before);
    }
}

#[test]
fn empty_input_yields_empty_output() {
    let items: Vec<Product> = Vec::new();
    for color in Color::ALL {
        assert!(SpecFilter.filter(&items, &by_color(color)).is_empty());
    }
}
