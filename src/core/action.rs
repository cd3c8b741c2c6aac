//! # Actions
//!
//! Everything that can happen in the storefront becomes an `Action`.
//! User presses Enter on a product? That's `Action::AddToCart(product)`.
//! User presses `3`? That's `Action::Navigate(ViewId::Cart)`.
//!
//! The `update()` function takes the current state and an action,
//! applies it, and reports anything the adapter has to do as an `Effect`.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::cart::CartCommand;
use crate::core::catalog::{Product, ProductId};
use crate::core::navigation::ViewId;
use crate::core::state::App;

pub const CHECKOUT_NOTICE: &str = "Coming Soon - Checkout functionality will be available soon!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(ViewId),
    AddToCart(Product),
    IncreaseQuantity(ProductId),
    DecreaseQuantity(ProductId),
    RemoveFromCart(ProductId),
    /// Placeholder: surfaces a notice and changes nothing.
    Checkout,
    Quit,
}

/// Work the adapter must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    Notice(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Navigate(target) => {
            let from = app.navigation.current();
            let to = app.navigation.navigate(target);
            info!("Navigate {} -> {}", from, to);
            Effect::None
        }
        Action::AddToCart(product) => {
            app.status_message = format!("Added {} to cart", product.name);
            dispatch(app, CartCommand::AddToCart(product));
            Effect::None
        }
        Action::IncreaseQuantity(id) => {
            dispatch(app, CartCommand::IncreaseQuantity(id));
            if let Some(item) = app.cart.get(id) {
                app.status_message = format!("{} × {}", item.product.name, item.quantity);
            }
            Effect::None
        }
        Action::DecreaseQuantity(id) => {
            let name = product_name(app, id);
            dispatch(app, CartCommand::DecreaseQuantity(id));
            match (app.cart.get(id), name) {
                (Some(item), _) => {
                    app.status_message = format!("{} × {}", item.product.name, item.quantity);
                }
                (None, Some(name)) => {
                    app.status_message = format!("Removed {name} from cart");
                }
                (None, None) => {}
            }
            Effect::None
        }
        Action::RemoveFromCart(id) => {
            if let Some(name) = product_name(app, id) {
                app.status_message = format!("Removed {name} from cart");
            }
            dispatch(app, CartCommand::RemoveFromCart(id));
            Effect::None
        }
        Action::Checkout => {
            info!(
                "Checkout requested with {} item(s), total {}",
                app.cart.total_quantity(),
                app.cart.total_cost()
            );
            Effect::Notice(CHECKOUT_NOTICE.to_string())
        }
        Action::Quit => Effect::Quit,
    }
}

/// Name of the product currently in the cart under `id`, if any.
fn product_name(app: &App, id: ProductId) -> Option<String> {
    app.cart.get(id).map(|item| item.product.name.clone())
}

fn dispatch(app: &mut App, command: CartCommand) {
    app.cart = app.cart.apply(command);
    debug!(
        "Cart now has {} line(s), {} unit(s)",
        app.cart.len(),
        app.cart.total_quantity()
    );
}
