//! Group-buy domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A community group-buy order: neighbors pooling a purchase to unlock
/// a group price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupOrder {
    pub id: String,
    pub product_name: String,
    pub image: String,
    pub target_quantity: u32,
    pub current_quantity: u32,
    /// Regular per-unit price in rupees.
    pub price_per_unit: u32,
    /// Per-unit price once the target is reached.
    pub group_price: u32,
    pub savings: u32,
    pub location: String,
    pub time_left: String,
    pub organizer: String,
    pub members: Vec<String>,
    pub carbon_saving: String,
    pub delivery_date: NaiveDate,
}

impl GroupOrder {
    /// Progress toward the target quantity in whole percent, capped at
    /// 100.
    pub fn progress_percent(&self) -> u8 {
        if self.target_quantity == 0 {
            return 100;
        }
        ((self.current_quantity.min(self.target_quantity) as u64 * 100)
            / self.target_quantity as u64) as u8
    }

    pub fn is_full(&self) -> bool {
        self.current_quantity >= self.target_quantity
    }
}

/// Payload for creating a group order.
#[derive(Debug, Clone, Deserialize)]
pub struct NewGroupOrder {
    pub product_name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub target_quantity: u32,
    pub price_per_unit: u32,
    pub group_price: u32,
    pub location: String,
    pub organizer: String,
    pub delivery_date: NaiveDate,
}
