//! The cart: an ordered, id-keyed sequence of line items.
//!
//! All mutation rules live here as plain synchronous methods. The actor in
//! [`cart_actor`](crate::cart_actor) wraps them with persistence.

use serde::Serialize;
use thiserror::Error;

use super::line_item::{LineItem, NewLineItem, ProductId};

/// Ordered sequence of [`LineItem`]s.
///
/// # Invariants
/// - ids are unique
/// - every item has `quantity >= 1`
/// - insertion order is kept across mutations
///
/// Serializes as a bare JSON array of line items.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

/// What a successful mutation did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// A new line was appended.
    Inserted,
    /// An existing line's quantity went up by one.
    Incremented,
    /// An existing line's quantity went down by one and the line stayed.
    Decremented,
    /// The line reached zero and was removed.
    Removed,
}

/// A line is already at `u32::MAX` and cannot take another unit.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Quantity overflow for product: {0}")]
pub struct QuantityOverflow(pub ProductId);

impl Mutation {
    /// Whether the mutation changed the number of lines.
    pub fn resizes(self) -> bool {
        matches!(self, Mutation::Inserted | Mutation::Removed)
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from stored items, restoring the invariants.
    ///
    /// Zero-quantity items are dropped. Repeated ids are folded into the first
    /// occurrence with their quantities summed.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            match cart.position(&item.id) {
                Some(index) => {
                    let existing = &mut cart.items[index];
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    /// Parses the persisted JSON text of a cart.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let items: Vec<LineItem> = serde_json::from_str(text)?;
        Ok(Self::from_items(items))
    }

    /// Serializes the cart to the persisted JSON text.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.items)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `price * quantity` over all lines.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Adds one unit of a product.
    ///
    /// An existing line keeps its stored title, image and price; only the quantity
    /// changes. Otherwise a new line with quantity 1 is appended.
    pub fn add(&mut self, item: NewLineItem) -> Result<Mutation, QuantityOverflow> {
        match self.position(&item.id) {
            Some(index) => {
                self.bump(index)?;
                Ok(Mutation::Incremented)
            }
            None => {
                self.items.push(item.into_line_item());
                Ok(Mutation::Inserted)
            }
        }
    }

    /// Adds one unit to an existing line. `Ok(None)` when the id is not in the cart.
    pub fn increment(&mut self, id: &ProductId) -> Result<Option<Mutation>, QuantityOverflow> {
        match self.position(id) {
            Some(index) => {
                self.bump(index)?;
                Ok(Some(Mutation::Incremented))
            }
            None => Ok(None),
        }
    }

    /// Removes one unit from an existing line, dropping the line at zero.
    /// `None` when the id is not in the cart.
    pub fn decrement(&mut self, id: &ProductId) -> Option<Mutation> {
        let index = self.position(id)?;
        let item = &mut self.items[index];
        if item.quantity <= 1 {
            self.items.remove(index);
            Some(Mutation::Removed)
        } else {
            item.quantity -= 1;
            Some(Mutation::Decremented)
        }
    }

    fn bump(&mut self, index: usize) -> Result<(), QuantityOverflow> {
        let item = &mut self.items[index];
        match item.quantity.checked_add(1) {
            Some(quantity) => {
                item.quantity = quantity;
                Ok(())
            }
            None => Err(QuantityOverflow(item.id.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> NewLineItem {
        NewLineItem::new(id, format!("Product {id}"), format!("https://img/{id}.png"), 10.0)
    }

    fn quantities(cart: &Cart) -> Vec<(String, u32)> {
        cart.items()
            .iter()
            .map(|item| (item.id.to_string(), item.quantity))
            .collect()
    }

    #[test]
    fn test_distinct_adds_append_in_order_with_quantity_one() {
        let mut cart = Cart::new();
        for id in ["c", "a", "b"] {
            assert_eq!(cart.add(product(id)).unwrap(), Mutation::Inserted);
        }
        assert_eq!(
            quantities(&cart),
            vec![("c".into(), 1), ("a".into(), 1), ("b".into(), 1)]
        );
    }

    #[test]
    fn test_repeat_add_keeps_stored_fields() {
        let mut cart = Cart::new();
        cart.add(NewLineItem::new("1", "A", "u", 10.0)).unwrap();
        let mutation = cart.add(NewLineItem::new("1", "Renamed", "other", 99.0)).unwrap();

        assert_eq!(mutation, Mutation::Incremented);
        assert_eq!(cart.len(), 1);
        let item = &cart.items()[0];
        assert_eq!(item.quantity, 2);
        assert_eq!(item.title, "A");
        assert_eq!(item.image_url, "u");
        assert_eq!(item.price, 10.0);
    }

    #[test]
    fn test_increment_touches_only_target() {
        let mut cart = Cart::new();
        cart.add(product("1")).unwrap();
        cart.add(product("2")).unwrap();

        assert_eq!(
            cart.increment(&"2".into()).unwrap(),
            Some(Mutation::Incremented)
        );
        assert_eq!(quantities(&cart), vec![("1".into(), 1), ("2".into(), 2)]);
    }

    #[test]
    fn test_decrement_removes_at_zero_and_keeps_order() {
        let mut cart = Cart::new();
        for id in ["1", "2", "3"] {
            cart.add(product(id)).unwrap();
        }
        cart.increment(&"3".into()).unwrap();

        assert_eq!(cart.decrement(&"3".into()), Some(Mutation::Decremented));
        assert_eq!(cart.decrement(&"2".into()), Some(Mutation::Removed));
        assert_eq!(quantities(&cart), vec![("1".into(), 1), ("3".into(), 1)]);
    }

    #[test]
    fn test_missing_id_is_reported_not_applied() {
        let mut cart = Cart::new();
        cart.add(product("1")).unwrap();

        assert_eq!(cart.increment(&"404".into()).unwrap(), None);
        assert_eq!(cart.decrement(&"404".into()), None);
        assert_eq!(quantities(&cart), vec![("1".into(), 1)]);
    }

    #[test]
    fn test_increment_overflow_is_rejected() {
        let mut cart = Cart::from_items(vec![LineItem {
            quantity: u32::MAX,
            ..product("1").into_line_item()
        }]);

        let err = cart.increment(&"1".into()).unwrap_err();
        assert_eq!(err, QuantityOverflow("1".into()));
        assert_eq!(cart.items()[0].quantity, u32::MAX);
    }

    #[test]
    fn test_from_items_restores_invariants() {
        let line = |id: &str, quantity| LineItem {
            quantity,
            ..product(id).into_line_item()
        };
        let cart = Cart::from_items(vec![line("1", 2), line("2", 0), line("3", 1), line("1", 3)]);

        assert_eq!(quantities(&cart), vec![("1".into(), 5), ("3".into(), 1)]);
    }

    #[test]
    fn test_json_uses_storefront_field_names() {
        let mut cart = Cart::new();
        cart.add(NewLineItem::new("1", "A", "u", 10.0)).unwrap();

        let json = cart.to_json().unwrap();
        assert_eq!(
            json,
            r#"[{"id":"1","title":"A","image_url":"u","price":10.0,"quantity":1}]"#
        );
        assert_eq!(Cart::from_json(&json).unwrap(), cart);

        // Integer prices as written by other clients parse too
        let parsed =
            Cart::from_json(r#"[{"id":"7","title":"B","image_url":"v","price":5,"quantity":4}]"#)
                .unwrap();
        assert_eq!(parsed.get(&"7".into()).map(|i| i.quantity), Some(4));
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add(NewLineItem::new("1", "A", "u", 2.5)).unwrap();
        cart.add(NewLineItem::new("1", "A", "u", 2.5)).unwrap();
        cart.add(NewLineItem::new("2", "B", "v", 4.0)).unwrap();

        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.subtotal(), 9.0);
    }
}
