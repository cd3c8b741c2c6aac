//! # Notice Overlay
//!
//! Centered modal for one-off messages (the checkout placeholder). Any key
//! dismisses it; while it is open no other component sees events.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const MAX_WIDTH: u16 = 50;

/// Persistent state for an open notice.
pub struct NoticeState {
    pub message: String,
}

impl NoticeState {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Events emitted by the notice overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeEvent {
    Dismiss,
}

impl EventHandler for NoticeState {
    type Event = NoticeEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Resize => None,
            _ => Some(NoticeEvent::Dismiss),
        }
    }
}

/// Transient render wrapper for the notice overlay.
pub struct Notice<'a> {
    state: &'a NoticeState,
}

impl<'a> Notice<'a> {
    pub fn new(state: &'a NoticeState) -> Self {
        Self { state }
    }
}

impl Component for Notice<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width.min(MAX_WIDTH);
        // borders + padding on both sides
        let text_width = width.saturating_sub(4).max(1) as usize;
        let wrapped = textwrap::wrap(&self.state.message, text_width);
        let height = (wrapped.len() as u16 + 4).min(area.height);

        let [overlay] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [overlay] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(overlay);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Notice ")
            .title_bottom(Line::from(" any key to close ").centered())
            .padding(Padding::new(1, 1, 1, 0));

        let lines: Vec<Line> = wrapped
            .into_iter()
            .map(|line| Line::from(line.into_owned()))
            .collect();
        let paragraph = Paragraph::new(lines)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::CHECKOUT_NOTICE;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_notice_renders_wrapped_message() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = NoticeState::new(CHECKOUT_NOTICE);
        terminal
            .draw(|f| Notice::new(&state).render(f, f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Coming Soon"));
        assert!(text.contains("available soon!"));
        assert!(text.contains("Notice"));
    }

    #[test]
    fn test_any_key_dismisses_except_resize() {
        let mut state = NoticeState::new("hi");
        assert_eq!(state.handle_event(&TuiEvent::Resize), None);
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('x')),
            Some(NoticeEvent::Dismiss)
        );
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(NoticeEvent::Dismiss));
    }
}
