//! # Cart Store
//!
//! An ordered list of line items plus a pure reducer over it.
//!
//! ```text
//! &CartState + CartCommand  →  apply()  →  CartState
//! ```
//!
//! `apply` never touches its input; every call hands back a fresh snapshot.
//! Two invariants hold for every snapshot it produces:
//!
//! - at most one line item per product id
//! - every stored quantity is at least 1 (decreasing past 1 removes the line)
//!
//! Ids that aren't in the cart are silently ignored. Nothing here can fail.

use rust_decimal::Decimal;

use crate::core::catalog::{Product, ProductId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartLineItem {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Mutation commands accepted by the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    AddToCart(Product),
    IncreaseQuantity(ProductId),
    DecreaseQuantity(ProductId),
    RemoveFromCart(ProductId),
}

/// Line items in first-add order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    items: Vec<CartLineItem>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_in_cart(&self, id: ProductId) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    /// Sum of all quantities (what the header badge shows).
    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, item| total.saturating_add(item.quantity))
    }

    pub fn total_cost(&self) -> Decimal {
        self.items.iter().map(CartLineItem::subtotal).sum()
    }

    /// Convenience for `apply(self, command)`.
    pub fn apply(&self, command: CartCommand) -> CartState {
        apply(self, command)
    }
}

pub fn apply(state: &CartState, command: CartCommand) -> CartState {
    match command {
        CartCommand::AddToCart(product) => {
            if state.is_in_cart(product.id) {
                increment(state, product.id)
            } else {
                let mut items = state.items.clone();
                items.push(CartLineItem {
                    product,
                    quantity: 1,
                });
                CartState { items }
            }
        }
        CartCommand::IncreaseQuantity(id) => increment(state, id),
        CartCommand::DecreaseQuantity(id) => {
            let items = state
                .items
                .iter()
                .filter_map(|item| {
                    if item.id() != id {
                        Some(item.clone())
                    } else if item.quantity > 1 {
                        Some(CartLineItem {
                            quantity: item.quantity - 1,
                            ..item.clone()
                        })
                    } else {
                        None
                    }
                })
                .collect();
            CartState { items }
        }
        CartCommand::RemoveFromCart(id) => CartState {
            items: state
                .items
                .iter()
                .filter(|item| item.id() != id)
                .cloned()
                .collect(),
        },
    }
}

fn increment(state: &CartState, id: ProductId) -> CartState {
    CartState {
        items: state
            .items
            .iter()
            .map(|item| {
                if item.id() == id {
                    CartLineItem {
                        quantity: item.quantity.saturating_add(1),
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect(),
    }
}
