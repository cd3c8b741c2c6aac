//! # Header Component
//!
//! Top bar with the store logo on the left and the page tabs on the right.
//!
//! ## Responsibilities
//!
//! - Display the store name
//! - Highlight the tab of the page currently showing
//! - Show the cart badge (total quantity) when the cart isn't empty
//!
//! ## Design Decisions
//!
//! Header is purely presentational. It receives everything as props and
//! never reads `App` directly:
//!
//! ```rust,ignore
//! let mut header = Header::new(&app.store_name, app.current_view(), app.cart.total_quantity());
//! header.render(frame, header_area);
//! ```
//!
//! The badge count is a projection of the cart. Header has no idea a cart
//! exists beyond that one number.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::navigation::ViewId;
use crate::tui::component::Component;

pub struct Header<'a> {
    pub store_name: &'a str,
    pub current: ViewId,
    pub cart_count: u32,
}

impl<'a> Header<'a> {
    pub fn new(store_name: &'a str, current: ViewId, cart_count: u32) -> Self {
        Self {
            store_name,
            current,
            cart_count,
        }
    }

    /// Tab text for a view. Only the cart tab carries a badge.
    fn tab_label(&self, view: ViewId) -> String {
        match view {
            ViewId::Cart if self.cart_count > 0 => {
                format!(" {} ({}) ", view.label(), self.cart_count)
            }
            _ => format!(" {} ", view.label()),
        }
    }

    fn tabs(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, view) in ViewId::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if view == self.current {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(self.tab_label(view), style));
        }
        Line::from(spans)
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let tabs = self.tabs();
        let tabs_width = tabs.width() as u16;
        let [logo_area, tabs_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(tabs_width)]).areas(inner);

        let logo = Line::from(vec![
            Span::styled("🌱 ", Style::default().fg(Color::Green)),
            Span::styled(
                self.store_name.to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(logo), logo_area);
        frame.render_widget(Paragraph::new(tabs), tabs_area);
    }
}
