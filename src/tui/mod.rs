//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! ```text
//! crossterm key ─► TuiEvent ─┬─► Ctrl+C           → Action::Quit
//!                            ├─► notice open?     → NoticeState (any key closes)
//!                            ├─► 1/2/3, Tab, q    → Action::Navigate / Quit
//!                            └─► current page     → page event → Action
//! ```
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 250ms waiting for input and
//! only redraws after an event (including terminal resize).

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::navigation::ViewId;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CartViewEvent, CartViewState, NoticeEvent, NoticeState, ProductListEvent, ProductListState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub product_list: ProductListState,
    pub cart_view: CartViewState,
    // Modal notice (None = hidden)
    pub notice: Option<NoticeState>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            product_list: ProductListState::new(),
            cart_view: CartViewState::new(),
            notice: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(Catalog::builtin(), &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => guard,
        Err(e) => return restore_with(Err(e)),
    };
    info!("Storefront started on {}", app.current_view());

    let mut needs_redraw = true; // Force first frame
    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let first_event = match poll_event_timeout(Duration::from_millis(250)) {
            Ok(event) => event,
            Err(e) => break Err(e),
        };
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        match drain_events(&mut app, &mut tui, first_event) {
            Ok(true) => break Ok(()),
            Ok(false) => {}
            Err(e) => break Err(e),
        }
    };

    info!("Storefront shutting down");
    restore_with(result)
}

/// Handle `first` and everything already queued behind it.
/// Returns true when the app should quit.
fn drain_events(
    app: &mut App,
    tui: &mut TuiState,
    first: Option<TuiEvent>,
) -> std::io::Result<bool> {
    let mut pending = first;
    while let Some(event) = pending {
        if handle_event(app, tui, event) {
            return Ok(true);
        }
        pending = poll_event_immediate()?;
    }
    Ok(false)
}

fn restore_with(result: std::io::Result<()>) -> std::io::Result<()> {
    ratatui::restore();
    result
}

/// Route one terminal event. Returns true when the app should quit.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    // Resize just needs a redraw
    if matches!(event, TuiEvent::Resize) {
        return false;
    }

    // ForceQuit (Ctrl+C) always quits regardless of overlays
    if matches!(event, TuiEvent::ForceQuit) {
        return apply(app, tui, Action::Quit);
    }

    // When a notice is open, it swallows every key
    if let Some(ref mut notice) = tui.notice {
        if let Some(NoticeEvent::Dismiss) = notice.handle_event(&event) {
            tui.notice = None;
        }
        return false;
    }

    // Global keys
    match event {
        TuiEvent::InputChar('q') => return apply(app, tui, Action::Quit),
        TuiEvent::InputChar('1') => return apply(app, tui, Action::Navigate(ViewId::Home)),
        TuiEvent::InputChar('2') => return apply(app, tui, Action::Navigate(ViewId::Products)),
        TuiEvent::InputChar('3') => return apply(app, tui, Action::Navigate(ViewId::Cart)),
        TuiEvent::NextView => {
            let next = app.current_view().next();
            return apply(app, tui, Action::Navigate(next));
        }
        _ => {}
    }

    let action = match app.current_view() {
        ViewId::Home => match event {
            // "Get Started"
            TuiEvent::Submit => Some(Action::Navigate(ViewId::Products)),
            _ => None,
        },
        ViewId::Products => {
            tui.product_list.item_count = app.catalog.len();
            match tui.product_list.handle_event(&event) {
                Some(ProductListEvent::Add(index)) => app
                    .catalog
                    .listing()
                    .get(index)
                    // The button is disabled once the product is in the cart
                    .filter(|product| !app.cart.is_in_cart(product.id))
                    .map(|product| Action::AddToCart((*product).clone())),
                None => None,
            }
        }
        ViewId::Cart => {
            tui.cart_view.sync(app.cart.len());
            tui.cart_view
                .handle_event(&event)
                .and_then(|cart_event| cart_action(app, cart_event))
        }
    };

    match action {
        Some(action) => apply(app, tui, action),
        None => false,
    }
}

fn cart_action(app: &App, event: CartViewEvent) -> Option<Action> {
    let id_at = |index: usize| app.cart.items().get(index).map(|item| item.id());
    match event {
        CartViewEvent::Increase(index) => id_at(index).map(Action::IncreaseQuantity),
        CartViewEvent::Decrease(index) => id_at(index).map(Action::DecreaseQuantity),
        CartViewEvent::Remove(index) => id_at(index).map(Action::RemoveFromCart),
        CartViewEvent::Checkout => Some(Action::Checkout),
        CartViewEvent::ContinueShopping => Some(Action::Navigate(ViewId::Products)),
    }
}

/// Run an action through core::update and carry out its effect.
fn apply(app: &mut App, tui: &mut TuiState, action: Action) -> bool {
    debug!("Dispatching {:?}", action);
    match update(app, action) {
        Effect::Quit => true,
        Effect::Notice(message) => {
            tui.notice = Some(NoticeState::new(message));
            false
        }
        Effect::None => {
            tui.cart_view.sync(app.cart.len());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::CHECKOUT_NOTICE;
    use crate::core::catalog::ProductId;
    use crate::test_support::test_app;

    fn press(app: &mut App, tui: &mut TuiState, events: &[TuiEvent]) -> bool {
        events.iter().any(|&event| handle_event(app, tui, event))
    }

    #[test]
    fn test_get_started_opens_products() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(app.current_view(), ViewId::Products);
    }

    #[test]
    fn test_number_keys_and_tab_navigate() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, &[TuiEvent::InputChar('3')]);
        assert_eq!(app.current_view(), ViewId::Cart);
        press(&mut app, &mut tui, &[TuiEvent::NextView]);
        assert_eq!(app.current_view(), ViewId::Home);
        press(&mut app, &mut tui, &[TuiEvent::InputChar('2'), TuiEvent::InputChar('2')]);
        assert_eq!(app.current_view(), ViewId::Products);
    }

    #[test]
    fn test_add_from_listing_is_disabled_once_in_cart() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        press(
            &mut app,
            &mut tui,
            &[TuiEvent::InputChar('2'), TuiEvent::CursorDown, TuiEvent::Submit, TuiEvent::Submit],
        );
        assert_eq!(app.cart.len(), 1);
        assert_eq!(app.cart.items()[0].id(), ProductId(2));
        assert_eq!(app.cart.total_quantity(), 1);
    }

    #[test]
    fn test_cart_controls() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        press(
            &mut app,
            &mut tui,
            &[
                TuiEvent::InputChar('2'),
                TuiEvent::Submit,
                TuiEvent::InputChar('3'),
                TuiEvent::InputChar('+'),
                TuiEvent::InputChar('+'),
                TuiEvent::InputChar('-'),
            ],
        );
        assert_eq!(app.cart.get(ProductId(1)).unwrap().quantity, 2);

        press(&mut app, &mut tui, &[TuiEvent::InputChar('d')]);
        assert!(app.cart.is_empty());
        // Quantity keys do nothing on the empty variant
        press(&mut app, &mut tui, &[TuiEvent::InputChar('+')]);
        assert!(app.cart.is_empty());
    }

    #[test]
    fn test_checkout_opens_notice_and_any_key_closes() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        press(
            &mut app,
            &mut tui,
            &[TuiEvent::InputChar('2'), TuiEvent::Submit, TuiEvent::InputChar('3'), TuiEvent::Submit],
        );
        assert_eq!(
            tui.notice.as_ref().map(|n| n.message.as_str()),
            Some(CHECKOUT_NOTICE)
        );
        assert_eq!(app.cart.len(), 1);

        // 'q' only closes the notice, it doesn't quit
        assert!(!press(&mut app, &mut tui, &[TuiEvent::InputChar('q')]));
        assert!(tui.notice.is_none());
        assert_eq!(app.current_view(), ViewId::Cart);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert!(press(&mut app, &mut tui, &[TuiEvent::InputChar('q')]));
        tui.notice = Some(NoticeState::new("open"));
        assert!(press(&mut app, &mut tui, &[TuiEvent::ForceQuit]));
    }

    #[test]
    fn test_escape_leaves_cart_but_only_closes_notice() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        press(
            &mut app,
            &mut tui,
            &[TuiEvent::InputChar('2'), TuiEvent::Submit, TuiEvent::InputChar('3'), TuiEvent::Submit],
        );
        assert!(tui.notice.is_some());

        press(&mut app, &mut tui, &[TuiEvent::Escape]);
        assert!(tui.notice.is_none());
        assert_eq!(app.current_view(), ViewId::Cart);

        press(&mut app, &mut tui, &[TuiEvent::Escape]);
        assert_eq!(app.current_view(), ViewId::Products);
        assert_eq!(app.cart.len(), 1);
    }

    #[test]
    fn test_continue_shopping_from_empty_cart() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, &[TuiEvent::InputChar('3'), TuiEvent::Submit]);
        assert_eq!(app.current_view(), ViewId::Products);
    }
}
