//! Rewards dashboard models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The shopper profile shown at the top of the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub member_since: String,
    pub eco_score: u32,
    pub eco_coins: u32,
    /// Lifetime spend in rupees.
    pub total_spent: u32,
    pub carbon_saved_kg: f32,
    pub plastic_saved_g: u32,
    pub trees_planted: u32,
    pub level: String,
    pub next_level: String,
    pub points_to_next_level: u32,
}

/// Delivery status of a past order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Processing,
    Delivered,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::Delivered => "Delivered",
        }
    }
}

/// A line item inside a past order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseItem {
    pub name: String,
    pub price: u32,
    pub eco_rating: u8,
    pub eco_coins: u32,
}

/// A past order with its eco-coin reward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    pub id: u32,
    pub date: NaiveDate,
    pub items: Vec<PurchaseItem>,
    pub total: u32,
    pub eco_coins_earned: u32,
    pub status: DeliveryStatus,
}

impl Purchase {
    /// Sum of the item prices.
    pub fn items_total(&self) -> u32 {
        self.items.iter().map(|i| i.price).sum()
    }

    /// Sum of the per-item coin rewards.
    pub fn items_coins(&self) -> u32 {
        self.items.iter().map(|i| i.eco_coins).sum()
    }
}

/// A gamification badge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub earned: bool,
    pub icon: String,
}

/// What an offer unlocks once its target is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferKind {
    Delivery,
    Cashback,
    Membership,
}

/// A progress-gated offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub target: u32,
    pub current: u32,
    pub kind: OfferKind,
}

impl Offer {
    /// Progress toward the target in whole percent, capped at 100.
    pub fn progress_percent(&self) -> u8 {
        if self.target == 0 {
            return 100;
        }
        ((self.current.min(self.target) as u64 * 100) / self.target as u64) as u8
    }
}
