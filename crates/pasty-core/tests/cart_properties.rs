//! Property-based tests for cart operations
//!
//! Uses proptest to verify the length/total invariants and the
//! order-preservation property of removal.

use proptest::prelude::*;

use pasty_core::catalog::Product;
use pasty_core::Cart;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate an arbitrary product drawn from a small synthetic catalog.
fn product_strategy() -> impl Strategy<Value = Product> {
    // Names only matter for identity in assertions, so indexing into a
    // fixed set keeps the cases readable.
    (0u32..8, 0u32..500).prop_map(|(id, price)| Product {
        id,
        name: "synthetic",
        price,
        image: "/none.jpg",
        desc: "generated",
    })
}

fn products_strategy(max: usize) -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(product_strategy(), 0..max)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// After N adds, the cart holds N entries and totals the price sum,
    /// whatever the order of insertion.
    #[test]
    fn add_tracks_length_and_total(products in products_strategy(32)) {
        let mut cart = Cart::new();
        let expected: u32 = products.iter().map(|p| p.price).sum();

        for (i, p) in products.iter().enumerate() {
            cart.add(*p);
            prop_assert_eq!(cart.len(), i + 1);
        }
        prop_assert_eq!(cart.total(), expected);
    }

    /// The total is insensitive to insertion order.
    #[test]
    fn total_is_order_independent(mut products in products_strategy(16)) {
        let mut forward = Cart::new();
        for p in &products {
            forward.add(*p);
        }

        products.reverse();
        let mut backward = Cart::new();
        for p in &products {
            backward.add(*p);
        }

        prop_assert_eq!(forward.total(), backward.total());
    }

    /// Removing index i yields the original sequence with i excluded,
    /// relative order preserved.
    #[test]
    fn remove_excludes_only_index(
        products in products_strategy(16).prop_filter("non-empty", |v| !v.is_empty()),
        index_seed in any::<prop::sample::Index>(),
    ) {
        let mut cart = Cart::new();
        for p in &products {
            cart.add(*p);
        }

        let index = index_seed.index(products.len());
        cart.remove(index);

        prop_assert_eq!(cart.len(), products.len() - 1);
        let mut expected = products.clone();
        expected.remove(index);
        for (item, product) in cart.items().iter().zip(expected.iter()) {
            prop_assert_eq!(item.product, *product);
        }
    }
}
