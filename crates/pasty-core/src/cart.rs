//! The shopping cart: an ordered, session-local list of product copies.
//!
//! Insertion order is display order. Duplicates are allowed — adding the
//! same product twice yields two distinct entries. The total is recomputed
//! on demand; with a three-item catalog there is nothing to cache.

use serde::Serialize;

use crate::catalog::Product;

/// A single cart entry, holding the product as captured at add time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartItem {
    pub product: Product,
}

/// Ordered list of selected products. Client-local, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value copy of `product` at the end of the cart.
    pub fn add(&mut self, product: Product) {
        self.items.push(CartItem { product });
    }

    /// Removes and returns the entry at `index`, shifting later entries
    /// down by one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds. The UI only ever passes indices
    /// taken from the current render of the cart, so an out-of-range index
    /// is a wiring bug, not a user-facing error.
    pub fn remove(&mut self, index: usize) -> CartItem {
        self.items.remove(index)
    }

    /// Sum of unit prices over all entries.
    pub fn total(&self) -> u32 {
        self.items.iter().map(|item| item.product.price).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Checkout placeholder. There is no backend to confirm an order
    /// against, so this only empties the list.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PRODUCTS;

    #[test]
    fn add_appends_in_order() {
        let mut cart = Cart::new();
        cart.add(PRODUCTS[2]);
        cart.add(PRODUCTS[0]);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0].product.id, PRODUCTS[2].id);
        assert_eq!(cart.items()[1].product.id, PRODUCTS[0].id);
    }

    #[test]
    fn duplicates_are_distinct_entries() {
        let mut cart = Cart::new();
        cart.add(PRODUCTS[0]);
        cart.add(PRODUCTS[0]);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), PRODUCTS[0].price * 2);
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut cart = Cart::new();
        cart.add(PRODUCTS[0]); // Tee $35
        cart.add(PRODUCTS[2]); // Hat $20

        let removed = cart.remove(0);
        assert_eq!(removed.product.id, PRODUCTS[0].id);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].product.id, PRODUCTS[2].id);
        assert_eq!(cart.total(), 20);
    }

    #[test]
    fn total_is_sum_of_prices() {
        let mut cart = Cart::new();
        assert_eq!(cart.total(), 0);

        let expected: u32 = PRODUCTS.iter().map(|p| p.price).sum();
        for p in PRODUCTS {
            cart.add(p);
        }
        assert_eq!(cart.total(), expected);
    }

    #[test]
    fn captured_product_is_a_value_copy() {
        let mut cart = Cart::new();
        cart.add(PRODUCTS[0]);

        let mut item = cart.remove(0);
        item.product.price = 9999;

        // Catalog stays canonical regardless of what happens to the copy.
        assert_eq!(PRODUCTS[0].price, 35);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add(PRODUCTS[0]);
        cart.add(PRODUCTS[1]);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }
}
