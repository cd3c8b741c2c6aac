//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `Header`: store name, page tabs and the cart badge
//! - `LandingPage`: the welcome card
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state in `TuiState` and emit events:
//! - `ProductList`: scrollable catalog with a selected card
//! - `CartView`: line items with quantity controls
//! - `Notice`: modal message, dismissed by any key
//!
//! Pages never call into `core` themselves. They emit small events
//! (`ProductListEvent::Add(index)`, `CartViewEvent::Remove(index)`) and the
//! event loop turns those into `core::action::Action` values.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header.rs        (top bar)
//! ├── landing.rs       (home page)
//! ├── product_list.rs  (products page)
//! ├── cart_view.rs     (cart page)
//! └── notice.rs        (modal overlay)
//! ```

pub mod cart_view;
pub mod header;
pub mod landing;
pub mod notice;
pub mod product_list;

pub use cart_view::{CartView, CartViewEvent, CartViewState};
pub use header::Header;
pub use landing::LandingPage;
pub use notice::{Notice, NoticeEvent, NoticeState};
pub use product_list::{ProductList, ProductListEvent, ProductListState};
