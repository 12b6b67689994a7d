//! Product catalog models.

use serde::{Deserialize, Serialize};

/// Image path standing in for "no real photo". Analysis requests for
/// such products take the text-only path.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// A storefront product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Price in rupees.
    pub price: u32,
    pub original_price: u32,
    pub image: String,
    /// Eco rating, 1-5 stars.
    pub eco_rating: u8,
    /// Discount percentage against the original price.
    pub discount: u8,
    pub description: String,
    pub eco_features: Vec<String>,
}

impl Product {
    /// Whether the product ships with a real photo usable for vision
    /// analysis.
    pub fn has_real_image(&self) -> bool {
        !self.image.is_empty() && self.image != PLACEHOLDER_IMAGE
    }
}
