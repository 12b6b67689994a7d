//! Product catalog: seeded demo data plus lookup and search operations.

pub mod model;

pub use model::{Product, PLACEHOLDER_IMAGE};

use serde::Serialize;

use crate::error::{EcoCartError, EcoCartResult};

/// The in-memory product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build the catalog with the demo product set.
    pub fn seeded() -> Self {
        Self {
            products: seed_products(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: u32) -> EcoCartResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(EcoCartError::ProductNotFound(id))
    }

    /// Case-insensitive substring search over product names.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Find a product by exact name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

/// A shopping cart holding product ids.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    items: Vec<u32>,
}

impl Cart {
    /// Add a product to the cart; returns the new item count.
    pub fn add(&mut self, catalog: &Catalog, product_id: u32) -> EcoCartResult<usize> {
        catalog.get(product_id)?;
        self.items.push(product_id);
        Ok(self.items.len())
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Sum of the current prices of everything in the cart.
    pub fn subtotal(&self, catalog: &Catalog) -> u32 {
        self.items
            .iter()
            .filter_map(|id| catalog.get(*id).ok())
            .map(|p| p.price)
            .sum()
    }
}

fn seed_products() -> Vec<Product> {
    let features = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();

    vec![
        Product {
            id: 1,
            name: "Bamboo Toothbrush Set".to_string(),
            price: 999,
            original_price: 1299,
            image: "/images/bamboo-toothbrush.png".to_string(),
            eco_rating: 5,
            discount: 19,
            description: "100% biodegradable bamboo toothbrushes".to_string(),
            eco_features: features(&["Biodegradable", "Plastic-free", "Sustainable bamboo"]),
        },
        Product {
            id: 2,
            name: "Organic Cotton Tote Bag".to_string(),
            price: 699,
            original_price: 999,
            image: "/images/cotton-tote-bag.png".to_string(),
            eco_rating: 4,
            discount: 31,
            description: "Reusable organic cotton shopping bag".to_string(),
            eco_features: features(&["Organic cotton", "Reusable", "Fair trade"]),
        },
        Product {
            id: 3,
            name: "Solar Power Bank".to_string(),
            price: 2299,
            original_price: 2999,
            image: "/images/solar-power-bank.png".to_string(),
            eco_rating: 4,
            discount: 25,
            description: "Portable solar-powered charging device".to_string(),
            eco_features: features(&["Solar powered", "Renewable energy", "Long-lasting"]),
        },
        Product {
            id: 4,
            name: "Stainless Steel Water Bottle".to_string(),
            price: 1499,
            original_price: 1999,
            image: "/images/steel-water-bottle.png".to_string(),
            eco_rating: 5,
            discount: 24,
            description: "Insulated stainless steel bottle".to_string(),
            eco_features: features(&["BPA-free", "Reusable", "Durable"]),
        },
        Product {
            id: 5,
            name: "Beeswax Food Wraps".to_string(),
            price: 1299,
            original_price: 1699,
            image: "/images/beeswax-wraps.png".to_string(),
            eco_rating: 5,
            discount: 23,
            description: "Natural alternative to plastic wrap".to_string(),
            eco_features: features(&["Biodegradable", "Reusable", "Natural beeswax"]),
        },
        Product {
            id: 6,
            name: "LED Smart Bulbs".to_string(),
            price: 1799,
            original_price: 2299,
            image: "/images/led-bulbs.png".to_string(),
            eco_rating: 3,
            discount: 23,
            description: "Energy-efficient smart LED bulbs".to_string(),
            eco_features: features(&["Energy efficient", "Long-lasting", "Smart controls"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::seeded();
        let hits = catalog.search("BAMBOO");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Bamboo Toothbrush Set");
    }

    #[test]
    fn test_search_empty_query_matches_everything() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.search("").len(), catalog.products().len());
    }

    #[test]
    fn test_get_unknown_product_fails() {
        let catalog = Catalog::seeded();
        assert!(matches!(
            catalog.get(999),
            Err(EcoCartError::ProductNotFound(999))
        ));
    }

    #[test]
    fn test_cart_add_and_subtotal() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::default();

        assert_eq!(cart.add(&catalog, 1).unwrap(), 1);
        assert_eq!(cart.add(&catalog, 4).unwrap(), 2);
        assert_eq!(cart.count(), 2);
        assert_eq!(cart.subtotal(&catalog), 999 + 1499);
    }

    #[test]
    fn test_cart_rejects_unknown_product() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::default();

        assert!(cart.add(&catalog, 42).is_err());
        assert_eq!(cart.count(), 0);
    }
}
