//! Second-hand marketplace: seeded listings with filter and like
//! operations.

pub mod model;

pub use model::{Condition, Listing};

use crate::error::{EcoCartError, EcoCartResult};

/// Category chips shown above the listing feed. "All" disables the
/// category filter.
pub const CATEGORIES: [&str; 7] = [
    "All",
    "Electronics",
    "Home & Living",
    "Kitchen",
    "Garden & Outdoor",
    "Bags & Accessories",
    "Office Supplies",
];

/// The in-memory marketplace feed.
#[derive(Debug, Clone)]
pub struct Marketplace {
    listings: Vec<Listing>,
}

impl Marketplace {
    /// Build the marketplace with the demo listing set.
    pub fn seeded() -> Self {
        Self {
            listings: seed_listings(),
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Filter by category chip and search text. Both are optional and
    /// ANDed; the "All" chip matches every category.
    pub fn filter(&self, category: Option<&str>, query: Option<&str>) -> Vec<&Listing> {
        let query = query.map(str::to_lowercase);
        self.listings
            .iter()
            .filter(|l| match category {
                Some(c) if !c.eq_ignore_ascii_case("All") => l.category.eq_ignore_ascii_case(c),
                _ => true,
            })
            .filter(|l| match &query {
                Some(q) => l.title.to_lowercase().contains(q),
                None => true,
            })
            .collect()
    }

    /// Flip the liked flag on a listing; returns the new state.
    pub fn toggle_like(&mut self, id: u32) -> EcoCartResult<bool> {
        let listing = self
            .listings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(EcoCartError::ListingNotFound(id))?;
        listing.liked = !listing.liked;
        Ok(listing.liked)
    }
}

fn seed_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: 1,
            title: "Bamboo Laptop Stand - Like New".to_string(),
            price: 899,
            original_price: 1499,
            image: "/images/bamboo-laptop-stand.png".to_string(),
            condition: Condition::LikeNew,
            seller: "Priya S.".to_string(),
            seller_rating: 4.8,
            location: "Koramangala, Bangalore".to_string(),
            posted: "2 hours ago".to_string(),
            description: "Barely used bamboo laptop stand. Perfect for work from home setup."
                .to_string(),
            category: "Electronics".to_string(),
            eco_rating: 5,
            liked: false,
        },
        Listing {
            id: 2,
            title: "Organic Cotton Bedsheet Set".to_string(),
            price: 1299,
            original_price: 2199,
            image: "/images/organic-bedsheet.png".to_string(),
            condition: Condition::Good,
            seller: "Rahul K.".to_string(),
            seller_rating: 4.6,
            location: "HSR Layout, Bangalore".to_string(),
            posted: "5 hours ago".to_string(),
            description: "100% organic cotton bedsheet set. Washed and sanitized.".to_string(),
            category: "Home & Living".to_string(),
            eco_rating: 4,
            liked: true,
        },
        Listing {
            id: 3,
            title: "Solar Garden Lights (Set of 6)".to_string(),
            price: 799,
            original_price: 1299,
            image: "/images/solar-garden-lights.png".to_string(),
            condition: Condition::Good,
            seller: "Anita M.".to_string(),
            seller_rating: 4.9,
            location: "Indiranagar, Bangalore".to_string(),
            posted: "1 day ago".to_string(),
            description: "Solar-powered garden lights. Works perfectly, just upgrading to newer model."
                .to_string(),
            category: "Garden & Outdoor".to_string(),
            eco_rating: 5,
            liked: false,
        },
        Listing {
            id: 4,
            title: "Reusable Glass Food Containers".to_string(),
            price: 649,
            original_price: 999,
            image: "/images/glass-containers.png".to_string(),
            condition: Condition::LikeNew,
            seller: "Suresh P.".to_string(),
            seller_rating: 4.7,
            location: "Whitefield, Bangalore".to_string(),
            posted: "1 day ago".to_string(),
            description: "Set of 5 glass food containers with airtight lids. Excellent condition."
                .to_string(),
            category: "Kitchen".to_string(),
            eco_rating: 4,
            liked: false,
        },
        Listing {
            id: 5,
            title: "Jute Shopping Bags (Pack of 3)".to_string(),
            price: 299,
            original_price: 499,
            image: "/images/jute-bags.png".to_string(),
            condition: Condition::Good,
            seller: "Maya R.".to_string(),
            seller_rating: 4.5,
            location: "Jayanagar, Bangalore".to_string(),
            posted: "2 days ago".to_string(),
            description: "Sturdy jute shopping bags. Perfect for grocery shopping.".to_string(),
            category: "Bags & Accessories".to_string(),
            eco_rating: 5,
            liked: true,
        },
        Listing {
            id: 6,
            title: "Wooden Desk Organizer".to_string(),
            price: 549,
            original_price: 899,
            image: "/images/wooden-organizer.png".to_string(),
            condition: Condition::Good,
            seller: "Vikram A.".to_string(),
            seller_rating: 4.8,
            location: "Electronic City, Bangalore".to_string(),
            posted: "3 days ago".to_string(),
            description: "Handcrafted wooden desk organizer. Minor scratches but fully functional."
                .to_string(),
            category: "Office Supplies".to_string(),
            eco_rating: 4,
            liked: false,
        },
    ]
}
