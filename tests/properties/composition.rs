//! Property tests for composite specifications.

use proptest::prelude::*;

use sift::{
    all_of, any_of, by_color, by_name, by_price, Color, Filter, PriceRange, Product, SpecFilter,
    Specification, SpecificationExt,
};

fn product() -> impl Strategy<Value = Product> {
    (
        "(Red|Blue) (Shirt|Hat)",
        proptest::sample::select(Color::ALL.to_vec()),
        proptest::option::of(0u32..100),
    )
        .prop_map(|(name, color, price)| {
            let product = Product::new(name, color);
            match price {
                Some(price) => product.with_price(price),
                None => product,
            }
        })
}

fn price_range() -> impl Strategy<Value = PriceRange> {
    (proptest::option::of(0u32..100), proptest::option::of(0u32..100)).prop_map(|(a, b)| {
        let (min, max) = match (a, b) {
            (Some(a), Some(b)) if a > b => (Some(b), Some(a)),
            other => other,
        };
        PriceRange::new(min, max).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: AND matches exactly when both children match.
    #[test]
    fn property_and_is_conjunction(item in product(), color in proptest::sample::select(Color::ALL.to_vec())) {
        let left = by_color(color);
        let right = by_name("Shirt");
        let both = left.and(right.clone());
        prop_assert_eq!(
            both.is_satisfied(&item),
            left.is_satisfied(&item) && right.is_satisfied(&item)
        );
    }

    /// PROPERTY: OR matches exactly when either child matches.
    #[test]
    fn property_or_is_disjunction(item in product(), range in price_range()) {
        let left = by_price(range);
        let right = by_name("Hat");
        let either = left.or(right.clone());
        prop_assert_eq!(
            either.is_satisfied(&item),
            left.is_satisfied(&item) || right.is_satisfied(&item)
        );
    }

    /// PROPERTY: NOT inverts, and double negation is the identity.
    #[test]
    fn property_not_inverts(item in product(), color in proptest::sample::select(Color::ALL.to_vec())) {
        let spec = by_color(color);
        prop_assert_eq!(spec.not().is_satisfied(&item), !spec.is_satisfied(&item));
        prop_assert_eq!(spec.not().not().is_satisfied(&item), spec.is_satisfied(&item));
    }

    /// PROPERTY: Filtering by AND equals the intersection of the separate filters.
    #[test]
    fn property_and_filter_is_intersection(
        items in proptest::collection::vec(product(), 0..=24),
        range in price_range(),
    ) {
        let by_range = SpecFilter.filter(&items, &by_price(range));
        let shirts = SpecFilter.filter(&items, &by_name("Shirt"));
        let combined = SpecFilter.filter(&items, &by_price(range).and(by_name("Shirt")));

        let intersection: Vec<&Product> = by_range
            .iter()
            .copied()
            .filter(|item| shirts.iter().any(|s| std::ptr::eq(*s, *item)))
            .collect();
        prop_assert_eq!(combined, intersection);
    }

    /// PROPERTY: The N-ary forms agree with the binary ones.
    #[test]
    fn property_nary_matches_binary(item in product(), range in price_range()) {
        let binary_all = by_price(range).and(by_name("Red")).boxed();
        let nary_all = all_of([by_price(range).boxed(), by_name("Red").boxed()]);
        prop_assert_eq!(binary_all.is_satisfied(&item), nary_all.is_satisfied(&item));

        let binary_any = by_price(range).or(by_name("Red")).boxed();
        let nary_any = any_of([by_price(range).boxed(), by_name("Red").boxed()]);
        prop_assert_eq!(binary_any.is_satisfied(&item), nary_any.is_satisfied(&item));
    }

    /// PROPERTY: Unpriced products never satisfy a price specification.
    #[test]
    fn property_unpriced_never_matches_price(name in "[A-Za-z ]{0,12}", range in price_range()) {
        let item = Product::new(name, Color::Gray);
        prop_assert!(!by_price(range).is_satisfied(&item));
    }
}
