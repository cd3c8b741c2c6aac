//! # ProductList Component
//!
//! The "Our Plant Collection" page: one section per category, one card per
//! product. The card's button reads "Add to Cart", or "Added to Cart" (and
//! does nothing) once that product is in the cart.
//!
//! ## Architecture
//!
//! `ProductList` is a transient component (created each frame) that wraps
//! `&'a mut ProductListState` (persistent state) plus the catalog listing
//! and cart as props. The page is usually taller than the terminal, so
//! everything is drawn into a `ScrollView` and the selection is kept in view.
//!
//! ```text
//! Our Plant Collection
//!
//! Indoor Plants
//! ╭──────────────────────────────────────────────╮
//! │🌿 Monstera Deliciosa      $45.99 [Add to Cart]│
//! ╰──────────────────────────────────────────────╯
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::cart::CartState;
use crate::core::catalog::Product;
use crate::core::money::format_amount;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const TITLE: &str = "Our Plant Collection";
const CARD_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 17;
const PRICE_WIDTH: u16 = 10;

/// Selection and scroll state for the listing page.
/// Must be persisted in the parent TuiState.
pub struct ProductListState {
    pub selected: usize,
    pub scroll_state: ScrollViewState,
    /// Number of products in the listing, synced from the catalog each frame.
    pub item_count: usize,
    /// Canvas y of each card's top edge, rebuilt every render.
    pub card_tops: Vec<u16>,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            scroll_state: ScrollViewState::default(),
            item_count: 0,
            card_tops: Vec::new(),
            viewport_height: 0,
        }
    }

    /// Scroll the viewport so the selected card is fully visible.
    pub fn scroll_to_selected(&mut self) {
        let Some(&top) = self.card_tops.get(self.selected) else {
            return;
        };
        let bottom = top + CARD_HEIGHT;
        let offset_y = self.scroll_state.offset().y;

        if self.selected == 0 {
            // First card: show the page title too
            self.scroll_state.set_offset(Position { x: 0, y: 0 });
        } else if top < offset_y {
            // Include the category heading when it sits right above the card
            self.scroll_state.set_offset(Position {
                x: 0,
                y: top.saturating_sub(1),
            });
        } else if bottom > offset_y + self.viewport_height {
            self.scroll_state.set_offset(Position {
                x: 0,
                y: bottom.saturating_sub(self.viewport_height),
            });
        }
    }
}

/// Events emitted by the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductListEvent {
    /// Activate the button of the card at this listing index.
    Add(usize),
}

impl EventHandler for ProductListState {
    type Event = ProductListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.item_count == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                self.selected = self.selected.saturating_sub(1);
                self.scroll_to_selected();
                None
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                self.selected = (self.selected + 1).min(self.item_count - 1);
                self.scroll_to_selected();
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar('a') => Some(ProductListEvent::Add(self.selected)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the listing page.
pub struct ProductList<'a> {
    state: &'a mut ProductListState,
    listing: &'a [&'a Product],
    cart: &'a CartState,
    currency_symbol: &'a str,
}

impl<'a> ProductList<'a> {
    pub fn new(
        state: &'a mut ProductListState,
        listing: &'a [&'a Product],
        cart: &'a CartState,
        currency_symbol: &'a str,
    ) -> Self {
        Self {
            state,
            listing,
            cart,
            currency_symbol,
        }
    }

    fn render_card(&self, scroll_view: &mut ScrollView, product: &Product, rect: Rect, selected: bool) {
        let in_cart = self.cart.is_in_cart(product.id);

        let border_style = if selected {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(rect);
        scroll_view.render_widget(block, rect);

        let [thumb_area, name_area, price_area, button_area] = Layout::horizontal([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(PRICE_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .areas(inner);

        scroll_view.render_widget(Paragraph::new(product.thumbnail.as_str()), thumb_area);
        scroll_view.render_widget(
            Paragraph::new(Span::styled(
                product.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            name_area,
        );
        scroll_view.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format_amount(product.price, self.currency_symbol),
                Style::default().fg(Color::Green),
            ))
            .right_aligned()),
            price_area,
        );

        let (label, style) = if in_cart {
            (
                "Added to Cart",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            )
        } else if selected {
            (
                "Add to Cart",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("Add to Cart", Style::default().fg(Color::Green))
        };
        scroll_view.render_widget(
            Paragraph::new(Line::from(Span::styled(format!(" {label} "), style)).centered()),
            button_area,
        );
    }
}

impl Component for ProductList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.item_count = self.listing.len();
        if self.state.selected >= self.listing.len() {
            self.state.selected = self.listing.len().saturating_sub(1);
        }

        // Scrollbar takes one column
        let content_width = area.width.saturating_sub(1);

        // 1. Lay out the page: title, then per category a heading, its cards, a spacer
        let mut headings: Vec<(u16, &str)> = Vec::new();
        let mut card_tops = Vec::with_capacity(self.listing.len());
        let mut y: u16 = 2;
        let mut previous_category: Option<&str> = None;
        for product in self.listing {
            if previous_category != Some(product.category.as_str()) {
                if previous_category.is_some() {
                    y += 1;
                }
                headings.push((y, product.category.as_str()));
                y += 1;
                previous_category = Some(product.category.as_str());
            }
            card_tops.push(y);
            y += CARD_HEIGHT;
        }
        let total_height = y;
        self.state.card_tops = card_tops;
        self.state.viewport_height = area.height;

        // 2. Clamp scroll so resizing never leaves us past the end
        let max_y = total_height.saturating_sub(area.height);
        if self.state.scroll_state.offset().y > max_y {
            self.state.scroll_state.set_offset(Position { x: 0, y: max_y });
        }

        // 3. Draw into the scroll canvas
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        scroll_view.render_widget(
            Paragraph::new(Line::from(Span::styled(
                TITLE,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))),
            Rect::new(0, 0, content_width, 1),
        );

        if self.listing.is_empty() {
            scroll_view.render_widget(
                Paragraph::new("Nothing for sale right now.")
                    .style(Style::default().fg(Color::DarkGray)),
                Rect::new(0, 1, content_width, 1),
            );
        }

        for &(heading_y, category) in &headings {
            scroll_view.render_widget(
                Paragraph::new(Span::styled(
                    category,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Rect::new(0, heading_y, content_width, 1),
            );
        }

        for (i, product) in self.listing.iter().enumerate() {
            let rect = Rect::new(0, self.state.card_tops[i], content_width, CARD_HEIGHT);
            self.render_card(&mut scroll_view, product, rect, i == self.state.selected);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cart::CartCommand;
    use crate::core::catalog::Catalog;
    use crate::test_support::{buffer_lines, product};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(state: &mut ProductListState, cart: &CartState, height: u16) -> Vec<String> {
        let catalog = Catalog::builtin();
        let listing = catalog.listing();
        let backend = TestBackend::new(70, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ProductList::new(state, &listing, cart, "$").render(f, f.area()))
            .unwrap();
        buffer_lines(terminal.backend())
    }

    fn line_with<'a>(lines: &'a [String], needle: &str) -> &'a str {
        lines
            .iter()
            .find(|line| line.contains(needle))
            .map(String::as_str)
            .unwrap_or_else(|| panic!("no line contains {needle:?}"))
    }

    #[test]
    fn test_listing_shows_categories_and_prices() {
        let mut state = ProductListState::new();
        let lines = render(&mut state, &CartState::new(), 40);
        let text = lines.concat();

        assert!(text.contains("Our Plant Collection"));
        for category in ["Indoor Plants", "Succulents", "Flowering Plants"] {
            assert!(text.contains(category), "missing {category}");
        }
        assert!(line_with(&lines, "Snake Plant").contains("$32.50"));
        assert!(line_with(&lines, "Aloe Vera").contains("$22.00"));
        assert_eq!(state.item_count, 6);
    }

    #[test]
    fn test_in_cart_products_show_added() {
        let cart = CartState::new().apply(CartCommand::AddToCart(product(3)));
        let mut state = ProductListState::new();
        let lines = render(&mut state, &cart, 40);

        assert!(line_with(&lines, "Jade Plant").contains("Added to Cart"));
        assert!(!line_with(&lines, "Aloe Vera").contains("Added to Cart"));
        assert!(line_with(&lines, "Aloe Vera").contains("Add to Cart"));
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let mut state = ProductListState::new();
        render(&mut state, &CartState::new(), 40);

        assert_eq!(state.handle_event(&TuiEvent::CursorUp), None);
        assert_eq!(state.selected, 0);
        for _ in 0..10 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected, 5);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(ProductListEvent::Add(5))
        );
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let mut state = ProductListState::new();
        render(&mut state, &CartState::new(), 10);
        for _ in 0..5 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert!(state.scroll_state.offset().y > 0);

        let lines = render(&mut state, &CartState::new(), 10);
        assert!(lines.concat().contains("African Violet"));
    }

    #[test]
    fn test_no_events_before_first_render() {
        let mut state = ProductListState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }
}
