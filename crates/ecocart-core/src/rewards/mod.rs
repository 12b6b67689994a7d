//! Rewards dashboard: seeded profile, purchase history, achievements
//! and offers.

pub mod model;

pub use model::{
    Achievement, DeliveryStatus, Offer, OfferKind, Profile, Purchase, PurchaseItem,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything the dashboard shows for the demo shopper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rewards {
    pub profile: Profile,
    pub purchases: Vec<Purchase>,
    pub achievements: Vec<Achievement>,
    pub offers: Vec<Offer>,
}

impl Rewards {
    /// Build the dashboard with the demo data set.
    pub fn seeded() -> Self {
        Self {
            profile: seed_profile(),
            purchases: seed_purchases(),
            achievements: seed_achievements(),
            offers: seed_offers(),
        }
    }

    /// Lifetime eco-coins earned across the purchase history.
    pub fn lifetime_coins(&self) -> u32 {
        self.purchases.iter().map(|p| p.eco_coins_earned).sum()
    }

    /// Lifetime spend across the purchase history.
    pub fn lifetime_spend(&self) -> u32 {
        self.purchases.iter().map(|p| p.total).sum()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn seed_profile() -> Profile {
    Profile {
        name: "Priya Sharma".to_string(),
        email: "priya.sharma@email.com".to_string(),
        member_since: "March 2024".to_string(),
        eco_score: 2850,
        eco_coins: 450,
        total_spent: 15750,
        carbon_saved_kg: 12.5,
        plastic_saved_g: 850,
        trees_planted: 3,
        level: "Eco Warrior".to_string(),
        next_level: "Green Champion".to_string(),
        points_to_next_level: 150,
    }
}

fn seed_purchases() -> Vec<Purchase> {
    let item = |name: &str, price: u32, eco_rating: u8, eco_coins: u32| PurchaseItem {
        name: name.to_string(),
        price,
        eco_rating,
        eco_coins,
    };

    vec![
        Purchase {
            id: 1,
            date: date(2024, 12, 1),
            items: vec![
                item("Bamboo Toothbrush Set", 999, 5, 50),
                item("Organic Cotton Tote Bag", 699, 4, 35),
            ],
            total: 1698,
            eco_coins_earned: 85,
            status: DeliveryStatus::Delivered,
        },
        Purchase {
            id: 2,
            date: date(2024, 11, 28),
            items: vec![item("Solar Power Bank", 2299, 4, 90)],
            total: 2299,
            eco_coins_earned: 90,
            status: DeliveryStatus::Delivered,
        },
        Purchase {
            id: 3,
            date: date(2024, 11, 25),
            items: vec![
                item("Stainless Steel Water Bottle", 1499, 5, 75),
                item("Beeswax Food Wraps", 1299, 5, 65),
            ],
            total: 2798,
            eco_coins_earned: 140,
            status: DeliveryStatus::Delivered,
        },
    ]
}

fn seed_achievements() -> Vec<Achievement> {
    let achievement = |id: u32, title: &str, description: &str, earned: bool, icon: &str| {
        Achievement {
            id,
            title: title.to_string(),
            description: description.to_string(),
            earned,
            icon: icon.to_string(),
        }
    };

    vec![
        achievement(1, "First Green Purchase", "Made your first eco-friendly purchase", true, "🌱"),
        achievement(2, "Plastic Warrior", "Saved 500g of plastic waste", true, "♻️"),
        achievement(3, "Carbon Saver", "Reduced 10kg of carbon footprint", true, "🌍"),
        achievement(4, "Tree Planter", "Contributed to planting 3 trees", true, "🌳"),
        achievement(5, "Eco Champion", "Reach 3000 eco points", false, "🏆"),
        achievement(6, "Green Streak", "10 consecutive eco purchases", false, "🔥"),
    ]
}

fn seed_offers() -> Vec<Offer> {
    vec![
        Offer {
            id: 1,
            title: "Free Delivery".to_string(),
            description: "Spend ₹2000 more to unlock free delivery".to_string(),
            target: 2000,
            current: 1500,
            kind: OfferKind::Delivery,
        },
        Offer {
            id: 2,
            title: "10% Cashback".to_string(),
            description: "Earn 500 more eco coins for 10% cashback".to_string(),
            target: 500,
            current: 300,
            kind: OfferKind::Cashback,
        },
        Offer {
            id: 3,
            title: "Premium Membership".to_string(),
            description: "Reach 3000 eco score for premium benefits".to_string(),
            target: 3000,
            current: 2850,
            kind: OfferKind::Membership,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_totals_match_items() {
        for purchase in Rewards::seeded().purchases {
            assert_eq!(purchase.total, purchase.items_total());
            assert_eq!(purchase.eco_coins_earned, purchase.items_coins());
        }
    }

    #[test]
    fn test_offer_progress_percent() {
        let offers = seed_offers();

        assert_eq!(offers[0].progress_percent(), 75);
        assert_eq!(offers[1].progress_percent(), 60);
        assert_eq!(offers[2].progress_percent(), 95);
    }

    #[test]
    fn test_offer_progress_caps_at_hundred() {
        let mut offer = seed_offers().remove(0);
        offer.current = offer.target * 2;

        assert_eq!(offer.progress_percent(), 100);
    }

    #[test]
    fn test_lifetime_totals() {
        let rewards = Rewards::seeded();

        assert_eq!(rewards.lifetime_coins(), 85 + 90 + 140);
        assert_eq!(rewards.lifetime_spend(), 1698 + 2299 + 2798);
    }
}
