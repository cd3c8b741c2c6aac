use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::navigation::ViewId;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CartView, Header, LandingPage, Notice, ProductList};

/// Draw one frame: header, the current page, status bar, and any open notice.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(2), Min(0), Length(1)]);
    let [header_area, main_area, status_area] = layout.areas(frame.area());

    let mut header = Header::new(&app.store_name, app.current_view(), app.cart.total_quantity());
    header.render(frame, header_area);

    let page_area = main_area.inner(Margin::new(1, 1));
    match app.current_view() {
        ViewId::Home => LandingPage::new(&app.store_name).render(frame, page_area),
        ViewId::Products => {
            let listing = app.catalog.listing();
            ProductList::new(
                &mut tui.product_list,
                &listing,
                &app.cart,
                &app.currency_symbol,
            )
            .render(frame, page_area);
        }
        ViewId::Cart => {
            CartView::new(&mut tui.cart_view, &app.cart, &app.currency_symbol)
                .render(frame, page_area);
        }
    }

    draw_status_bar(frame, status_area, app);

    if let Some(notice) = &tui.notice {
        Notice::new(notice).render(frame, frame.area());
    }
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let help = key_help(app.current_view(), app.cart.is_empty());
    let [status_area, help_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(help.width() as u16)])
            .areas(area);

    frame.render_widget(
        Span::styled(
            app.status_message.as_str(),
            Style::default().fg(Color::Green).add_modifier(Modifier::ITALIC),
        ),
        status_area,
    );
    frame.render_widget(
        Line::from(Span::styled(help, Style::default().fg(Color::DarkGray))).right_aligned(),
        help_area,
    );
}

/// Key hints for the page currently showing.
pub fn key_help(view: ViewId, cart_empty: bool) -> &'static str {
    match view {
        ViewId::Home => "Enter get started · 1/2/3 pages · q quit",
        ViewId::Products => "↑↓ select · Enter add · Tab next · q quit",
        ViewId::Cart if cart_empty => "Enter continue shopping · q quit",
        ViewId::Cart => "↑↓ select · +/- qty · d delete · Esc back · Enter checkout",
    }
}
