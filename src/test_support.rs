//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use crate::core::catalog::{Catalog, Product, ProductId};
use crate::core::state::App;

/// Creates a test App over the built-in catalog.
pub fn test_app() -> App {
    App::new(Catalog::builtin(), "GreenThumb Gardens".to_string())
}

/// Looks up a built-in catalog product by id.
pub fn product(id: u32) -> Product {
    Catalog::builtin()
        .get(ProductId(id))
        .cloned()
        .unwrap_or_else(|| panic!("no product {id} in the built-in catalog"))
}

/// Flattens a rendered buffer into one string for `contains` checks.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}

/// Renders each row of the test backend as its own line.
pub fn buffer_lines(backend: &TestBackend) -> Vec<String> {
    let buffer = backend.buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect())
        .collect()
}
