//! # Catalog
//!
//! The static product table. Built once at startup and never edited:
//! no operation in the app adds, removes, or changes a product.
//!
//! ```text
//! Indoor Plants     Monstera Deliciosa, Snake Plant
//! Succulents        Jade Plant, Aloe Vera
//! Flowering Plants  Peace Lily, African Violet
//! ```

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

/// Unique product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price. Serialized as a string so no precision is lost.
    pub price: Decimal,
    pub category: String,
    pub thumbnail: String,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            price,
            category: category.into(),
            thumbnail: thumbnail.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The shop's fixed six-plant inventory.
    pub fn builtin() -> Self {
        Self::new(vec![
            Product::new(1, "Monstera Deliciosa", Decimal::new(4599, 2), "Indoor Plants", "🌿"),
            Product::new(2, "Snake Plant", Decimal::new(3250, 2), "Indoor Plants", "🐍"),
            Product::new(3, "Jade Plant", Decimal::new(1875, 2), "Succulents", "💎"),
            Product::new(4, "Aloe Vera", Decimal::new(2200, 2), "Succulents", "🌵"),
            Product::new(5, "Peace Lily", Decimal::new(3825, 2), "Flowering Plants", "🕊"),
            Product::new(6, "African Violet", Decimal::new(2899, 2), "Flowering Plants", "💜"),
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct category labels in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Products in display order: grouped by category, categories in
    /// first-appearance order. The listing page indexes its selection
    /// into this sequence.
    pub fn listing(&self) -> Vec<&Product> {
        self.categories()
            .into_iter()
            .flat_map(|category| self.in_category(category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_six_products_in_three_categories() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 6);
        assert_eq!(
            catalog.categories(),
            vec!["Indoor Plants", "Succulents", "Flowering Plants"]
        );
    }

    #[test]
    fn test_product_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<ProductId> = catalog.products().iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::builtin();
        let monstera = catalog.get(ProductId(1)).unwrap();
        assert_eq!(monstera.name, "Monstera Deliciosa");
        assert_eq!(monstera.price, Decimal::new(4599, 2));
        assert!(catalog.get(ProductId(99)).is_none());
    }

    #[test]
    fn test_listing_groups_interleaved_categories() {
        let catalog = Catalog::new(vec![
            Product::new(1, "A", Decimal::ONE, "Ferns", "*"),
            Product::new(2, "B", Decimal::ONE, "Cacti", "*"),
            Product::new(3, "C", Decimal::ONE, "Ferns", "*"),
        ]);
        let order: Vec<u32> = catalog.listing().iter().map(|p| p.id.0).collect();
        assert_eq!(order, vec![1, 3, 2]);
        assert_eq!(catalog.categories(), vec!["Ferns", "Cacti"]);
    }

    #[test]
    fn test_catalog_serializes_price_as_string() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["price"], "45.99");
        assert_eq!(json[3]["price"], "22.00");
    }
}
