//! # Cart View Component
//!
//! The shopping cart page. Two variants, picked purely from the cart:
//!
//! - **empty**: a short message and a Continue Shopping button
//! - **filled**: summary (total items / total cost), one row per line
//!   item with quantity controls, then Continue Shopping and Checkout
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CartViewState` lives in `TuiState`
//! - `CartView` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::cart::{CartLineItem, CartState};
use crate::core::money::format_amount;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent state for the cart page.
pub struct CartViewState {
    pub selected: usize,
    pub list_state: ListState,
    /// Number of line items, synced from the cart before events are handled.
    pub line_count: usize,
}

impl Default for CartViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl CartViewState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default(),
            line_count: 0,
        }
    }

    /// Keep the selection on a real row after lines come and go.
    pub fn sync(&mut self, line_count: usize) {
        self.line_count = line_count;
        if line_count == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(line_count - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}

/// Events emitted by the cart page. Indices refer to line item order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartViewEvent {
    Increase(usize),
    Decrease(usize),
    Remove(usize),
    Checkout,
    ContinueShopping,
}

impl EventHandler for CartViewState {
    type Event = CartViewEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.line_count == 0 {
            // Only the Continue Shopping button exists
            return match event {
                TuiEvent::Submit
                | TuiEvent::InputChar('b')
                | TuiEvent::Backspace
                | TuiEvent::Escape => Some(CartViewEvent::ContinueShopping),
                _ => None,
            };
        }

        match event {
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                self.selected = (self.selected + 1).min(self.line_count - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorRight | TuiEvent::InputChar('+') | TuiEvent::InputChar('=') => {
                Some(CartViewEvent::Increase(self.selected))
            }
            TuiEvent::CursorLeft | TuiEvent::InputChar('-') => {
                Some(CartViewEvent::Decrease(self.selected))
            }
            TuiEvent::Delete | TuiEvent::InputChar('d') => Some(CartViewEvent::Remove(self.selected)),
            TuiEvent::Submit => Some(CartViewEvent::Checkout),
            TuiEvent::InputChar('b') | TuiEvent::Backspace | TuiEvent::Escape => {
                Some(CartViewEvent::ContinueShopping)
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the cart page.
pub struct CartView<'a> {
    state: &'a mut CartViewState,
    cart: &'a CartState,
    currency_symbol: &'a str,
}

impl<'a> CartView<'a> {
    pub fn new(state: &'a mut CartViewState, cart: &'a CartState, currency_symbol: &'a str) -> Self {
        Self {
            state,
            cart,
            currency_symbol,
        }
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from("🛒"),
            Line::from(""),
            Line::from(Span::styled(
                "Your cart is empty",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Add some beautiful plants to get started!",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                " ← Continue Shopping ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        let height = lines.len() as u16;
        let [center] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).centered(), center);
    }

    fn render_filled(&mut self, frame: &mut Frame, area: Rect) {
        let [title_area, summary_area, items_area, actions_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Shopping Cart",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            title_area,
        );

        let summary = Line::from(vec![
            Span::raw("Total Items: "),
            Span::styled(
                self.cart.total_quantity().to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    Total Cost: "),
            Span::styled(
                format_amount(self.cart.total_cost(), self.currency_symbol),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(summary).block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .padding(Padding::horizontal(1)),
            ),
            summary_area,
        );

        let name_width = self
            .cart
            .items()
            .iter()
            .map(|item| item.product.name.width())
            .max()
            .unwrap_or(0);
        let rows: Vec<ListItem> = self
            .cart
            .items()
            .iter()
            .map(|item| ListItem::new(self.row(item, name_width)))
            .collect();
        let list = List::new(rows)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, items_area, &mut self.state.list_state);

        let actions = Line::from(vec![
            Span::styled(" ← Continue Shopping ", Style::default().fg(Color::Green)),
            Span::raw("   "),
            Span::styled(
                " Checkout ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .right_aligned();
        frame.render_widget(actions, actions_area);
    }

    fn row(&self, item: &CartLineItem, name_width: usize) -> Line<'static> {
        Line::from(vec![
            Span::raw(format!("{} ", item.product.thumbnail)),
            Span::styled(
                pad_to_width(&item.product.name, name_width),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {:>9}", format_amount(item.product.price, self.currency_symbol)),
                Style::default().fg(Color::Green),
            ),
            Span::raw("   [-] "),
            Span::styled(
                format!("{:>3}", item.quantity),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" [+]   "),
            Span::styled("[delete]", Style::default().fg(Color::Red)),
        ])
    }
}

impl Component for CartView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync(self.cart.len());
        if self.cart.is_empty() {
            self.render_empty(frame, area);
        } else {
            self.render_filled(frame, area);
        }
    }
}

/// Right-pad with spaces to a display width (names may hold wide glyphs).
fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cart::CartCommand;
    use crate::test_support::{buffer_lines, product};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(state: &mut CartViewState, cart: &CartState) -> Vec<String> {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| CartView::new(state, cart, "$").render(f, f.area()))
            .unwrap();
        buffer_lines(terminal.backend())
    }

    fn cart_of(adds: &[u32]) -> CartState {
        adds.iter().fold(CartState::new(), |cart, &id| {
            cart.apply(CartCommand::AddToCart(product(id)))
        })
    }

    #[test]
    fn test_empty_variant_iff_cart_empty() {
        let mut state = CartViewState::new();
        let empty = render(&mut state, &CartState::new()).concat();
        assert!(empty.contains("Your cart is empty"));
        assert!(empty.contains("Continue Shopping"));
        assert!(!empty.contains("Shopping Cart"));

        let filled = render(&mut state, &cart_of(&[1])).concat();
        assert!(!filled.contains("Your cart is empty"));
        assert!(filled.contains("Shopping Cart"));
    }

    #[test]
    fn test_summary_totals() {
        let mut state = CartViewState::new();
        let lines = render(&mut state, &cart_of(&[1, 1, 3]));
        let text = lines.concat();
        assert!(text.contains("Total Items: 3"));
        assert!(text.contains("Total Cost: $110.73"));
        let monstera = lines.iter().find(|l| l.contains("Monstera")).unwrap();
        assert!(monstera.contains("$45.99"));
        assert!(monstera.contains("  2 [+]"));
    }

    #[test]
    fn test_empty_cart_only_continues_shopping() {
        let mut state = CartViewState::new();
        state.sync(0);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(CartViewEvent::ContinueShopping)
        );
        assert_eq!(state.handle_event(&TuiEvent::InputChar('+')), None);
        assert_eq!(state.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_quantity_keys_target_selected_row() {
        let mut state = CartViewState::new();
        state.sync(3);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('+')),
            Some(CartViewEvent::Increase(1))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::CursorLeft),
            Some(CartViewEvent::Decrease(1))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('d')),
            Some(CartViewEvent::Remove(1))
        );
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(CartViewEvent::Checkout));
    }

    #[test]
    fn test_escape_goes_back_in_both_variants() {
        let mut state = CartViewState::new();
        state.sync(0);
        assert_eq!(
            state.handle_event(&TuiEvent::Escape),
            Some(CartViewEvent::ContinueShopping)
        );
        state.sync(2);
        assert_eq!(
            state.handle_event(&TuiEvent::Escape),
            Some(CartViewEvent::ContinueShopping)
        );
    }

    #[test]
    fn test_sync_clamps_selection_after_removal() {
        let mut state = CartViewState::new();
        state.sync(3);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 2);
        state.sync(2);
        assert_eq!(state.selected, 1);
        state.sync(0);
        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("Aloe", 6), "Aloe  ");
        assert_eq!(pad_to_width("Jade Plant", 4), "Jade Plant");
    }
}
