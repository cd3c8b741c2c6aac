//! # Application State
//!
//! Core business state for the storefront. Domain logic only, no
//! TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog              // static product table
//! ├── cart: CartState               // current cart snapshot
//! ├── navigation: NavigationState   // which page is showing
//! ├── store_name: String            // header / landing title
//! ├── currency_symbol: String       // price prefix
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! The cart snapshot is replaced wholesale on every cart action.

use crate::core::cart::CartState;
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::money::format_amount;
use crate::core::navigation::{NavigationState, ViewId};
use rust_decimal::Decimal;

pub struct App {
    pub catalog: Catalog,
    pub cart: CartState,
    pub navigation: NavigationState,
    pub store_name: String,
    pub currency_symbol: String,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Catalog, store_name: String) -> Self {
        let status_message = format!("Welcome to {store_name}!");
        Self {
            catalog,
            cart: CartState::new(),
            navigation: NavigationState::new(),
            store_name,
            currency_symbol: crate::core::config::DEFAULT_CURRENCY_SYMBOL.to_string(),
            status_message,
        }
    }

    pub fn from_config(catalog: Catalog, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(catalog, config.store_name.clone());
        app.currency_symbol = config.currency_symbol.clone();
        app
    }

    pub fn current_view(&self) -> ViewId {
        self.navigation.current()
    }

    pub fn format_price(&self, amount: Decimal) -> String {
        format_amount(amount, &self.currency_symbol)
    }
}
