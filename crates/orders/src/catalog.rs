//! Read-only product catalog.

use mercato_core::{Category, CategoryId, Product, ProductId};

/// An in-memory product catalog.
///
/// The catalog is loaded once at construction and never mutated; cart and
/// order operations borrow products from it but do not write back.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl ProductCatalog {
    /// Build a catalog from its full product and category listings.
    #[must_use]
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// All products, in listing order.
    #[must_use]
    pub fn fetch_all(&self) -> &[Product] {
        &self.products
    }

    /// All categories, in listing order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by id.
    #[must_use]
    pub fn fetch_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products belonging to the given category.
    #[must_use]
    pub fn filter_by_category(&self, category: CategoryId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Case-insensitive substring search over product names.
    ///
    /// An empty query matches every product.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }
}
