//! Second-hand marketplace models.

use serde::{Deserialize, Serialize};

/// Condition of a second-hand listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    LikeNew,
    Good,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LikeNew => "Like New",
            Self::Good => "Good",
        }
    }
}

/// A second-hand marketplace listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: u32,
    pub title: String,
    /// Asking price in rupees.
    pub price: u32,
    pub original_price: u32,
    pub image: String,
    pub condition: Condition,
    pub seller: String,
    pub seller_rating: f32,
    pub location: String,
    /// Relative posting time as shown in the feed ("2 hours ago").
    pub posted: String,
    pub description: String,
    pub category: String,
    pub eco_rating: u8,
    pub liked: bool,
}
