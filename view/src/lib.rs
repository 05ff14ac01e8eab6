//! Product list view.
//!
//! # Overview
//! `ProductListView` fetches the catalog once, on its first `mount`, and
//! renders each product as a block of text: name, description and price.
//!
//! # Design
//! - The view owns its displayed state; only `mount` writes it.
//! - A failed fetch leaves the state empty. The failure is logged, never
//!   rendered.
//! - There is no refresh: build a new view to read the catalog again.

use catalog_core::{ApiError, Product, ProductService, Transport};
use tracing::{debug, warn};

/// Anything the view can pull the product list from.
pub trait ProductSource {
    fn list_products(&self) -> Result<Vec<Product>, ApiError>;
}

impl<T: Transport> ProductSource for ProductService<T> {
    fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        ProductService::list_products(self)
    }
}

pub struct ProductListView<S> {
    source: S,
    products: Vec<Product>,
    mounted: bool,
}

impl<S: ProductSource> ProductListView<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            products: Vec::new(),
            mounted: false,
        }
    }

    /// Fetches the product list on the first call; later calls are no-ops.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        match self.source.list_products() {
            Ok(products) => {
                debug!(count = products.len(), "product list loaded");
                self.products = products;
            }
            Err(err) => warn!(error = %err, "failed to load products"),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for product in &self.products {
            out.push_str(&format!(
                "{}\n{}\n{}\n\n",
                product.name,
                product.description,
                format_price(product.price)
            ));
        }
        out
    }
}

/// Formats an amount in reais, e.g. `R$ 9.99`.
pub fn format_price(price: f64) -> String {
    format!("R$ {price:.2}")
}
