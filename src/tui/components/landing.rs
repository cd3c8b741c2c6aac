//! # Landing Page Component
//!
//! The welcome card shown on the home page. Enter behaves like its
//! "Get Started" button and takes the shopper to the product listing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::tui::component::Component;

const DESCRIPTION: &str = ", your premier destination for beautiful \
houseplants that bring life and tranquility to your home. We specialize in carefully curated \
indoor plants, from easy-care succulents to exotic flowering varieties. Each plant is \
hand-selected for quality and health, ensuring you receive the perfect green companion for your \
space. Whether you're a seasoned plant parent or just starting your botanical journey, we have \
the perfect plants to transform your living space into a lush, green oasis.";

const CARD_MAX_WIDTH: u16 = 72;

pub struct LandingPage<'a> {
    store_name: &'a str,
}

impl<'a> LandingPage<'a> {
    pub fn new(store_name: &'a str) -> Self {
        Self { store_name }
    }
}

impl Component for LandingPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let card_width = area.width.min(CARD_MAX_WIDTH);
        // borders + horizontal padding
        let text_width = card_width.saturating_sub(6);

        let description = Paragraph::new(format!("Welcome to {}{DESCRIPTION}", self.store_name))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        let description_height = description.line_count(text_width) as u16;

        // title, spacer, description, spacer, button + borders and padding
        let card_height = (1 + 1 + description_height + 1 + 1 + 4).min(area.height);

        let [card_area] = Layout::horizontal([Constraint::Length(card_width)])
            .flex(Flex::Center)
            .areas(area);
        let [card_area] = Layout::vertical([Constraint::Length(card_height)])
            .flex(Flex::Center)
            .areas(card_area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green))
            .padding(Padding::new(2, 2, 1, 1));
        let inner = block.inner(card_area);
        frame.render_widget(block, card_area);

        let [title_area, _, description_area, _, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let title = Line::from(Span::styled(
            self.store_name.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .centered();
        frame.render_widget(title, title_area);
        frame.render_widget(description, description_area);

        let button = Line::from(Span::styled(
            "  Get Started  ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .centered();
        frame.render_widget(button, button_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_landing_renders_card() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| LandingPage::new("GreenThumb Gardens").render(f, f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("GreenThumb Gardens"));
        assert!(text.contains("premier destination"));
        assert!(text.contains("Get Started"));
    }

    #[test]
    fn test_landing_survives_tiny_terminal() {
        let backend = TestBackend::new(10, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| LandingPage::new("GreenThumb Gardens").render(f, f.area()))
            .unwrap();
    }
}
