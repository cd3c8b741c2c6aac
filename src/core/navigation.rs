//! # Navigation
//!
//! Which of the three pages is showing. Any page can be reached from any
//! other (including itself) and nothing is ever refused; the cart page is
//! reachable even when the cart is empty. There is no history stack.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewId {
    #[default]
    Home,
    Products,
    Cart,
}

impl ViewId {
    pub const ALL: [ViewId; 3] = [ViewId::Home, ViewId::Products, ViewId::Cart];

    /// Header tab label.
    pub fn label(&self) -> &'static str {
        match self {
            ViewId::Home => "Home",
            ViewId::Products => "Shop",
            ViewId::Cart => "Cart",
        }
    }

    /// Tab order, wrapping back to Home after Cart.
    pub fn next(&self) -> ViewId {
        match self {
            ViewId::Home => ViewId::Products,
            ViewId::Products => ViewId::Cart,
            ViewId::Cart => ViewId::Home,
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewId::Home => "home",
            ViewId::Products => "products",
            ViewId::Cart => "cart",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    current: ViewId,
}

impl NavigationState {
    /// Starts on the landing page.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ViewId {
        self.current
    }

    pub fn navigate(&mut self, target: ViewId) -> ViewId {
        self.current = target;
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home() {
        assert_eq!(NavigationState::new().current(), ViewId::Home);
    }

    #[test]
    fn test_every_transition_is_accepted() {
        for from in ViewId::ALL {
            for to in ViewId::ALL {
                let mut nav = NavigationState::new();
                nav.navigate(from);
                assert_eq!(nav.navigate(to), to);
                assert_eq!(nav.current(), to);
            }
        }
    }

    #[test]
    fn test_next_cycles_through_all_views() {
        let mut view = ViewId::Home;
        let mut visited = Vec::new();
        for _ in 0..3 {
            visited.push(view);
            view = view.next();
        }
        assert_eq!(visited, ViewId::ALL.to_vec());
        assert_eq!(view, ViewId::Home);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ViewId::Products.label(), "Shop");
        assert_eq!(ViewId::Products.to_string(), "products");
    }
}
