//! Community group-buy orders: seeded data plus create and join
//! operations.

pub mod model;

pub use model::{GroupOrder, NewGroupOrder};

use chrono::NaiveDate;

use crate::catalog::PLACEHOLDER_IMAGE;
use crate::error::{EcoCartError, EcoCartResult};

/// The in-memory set of active group orders.
#[derive(Debug, Clone)]
pub struct Groups {
    orders: Vec<GroupOrder>,
}

impl Groups {
    /// Build the board with the demo group orders.
    pub fn seeded() -> Self {
        Self {
            orders: seed_orders(),
        }
    }

    pub fn orders(&self) -> &[GroupOrder] {
        &self.orders
    }

    pub fn get(&self, id: &str) -> EcoCartResult<&GroupOrder> {
        self.orders
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| EcoCartError::GroupNotFound(id.to_string()))
    }

    /// Open a new group order with the caller as organizer.
    pub fn create(&mut self, req: NewGroupOrder) -> EcoCartResult<GroupOrder> {
        let product_name = req.product_name.trim();
        if product_name.is_empty() {
            return Err(EcoCartError::validation("product name must not be empty"));
        }
        let organizer = req.organizer.trim();
        if organizer.is_empty() {
            return Err(EcoCartError::validation("organizer name must not be empty"));
        }
        if req.target_quantity < 2 {
            return Err(EcoCartError::validation(
                "a group order needs a target of at least 2",
            ));
        }
        if req.group_price >= req.price_per_unit {
            return Err(EcoCartError::validation(
                "group price must be below the per-unit price",
            ));
        }

        let order = GroupOrder {
            id: uuid::Uuid::new_v4().to_string(),
            product_name: product_name.to_string(),
            image: req.image.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            target_quantity: req.target_quantity,
            current_quantity: 1,
            price_per_unit: req.price_per_unit,
            group_price: req.group_price,
            savings: req.price_per_unit - req.group_price,
            location: req.location.trim().to_string(),
            // New orders run on the demo's fixed one-week window.
            time_left: "7 days".to_string(),
            organizer: organizer.to_string(),
            members: Vec::new(),
            carbon_saving: String::new(),
            delivery_date: req.delivery_date,
        };

        self.orders.push(order.clone());
        Ok(order)
    }

    /// Join a group order, taking one of the remaining spots.
    pub fn join(&mut self, id: &str, member: &str) -> EcoCartResult<GroupOrder> {
        let member = member.trim();
        if member.is_empty() {
            return Err(EcoCartError::validation("member name must not be empty"));
        }

        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| EcoCartError::GroupNotFound(id.to_string()))?;

        if order.is_full() {
            return Err(EcoCartError::GroupFull {
                id: id.to_string(),
                target: order.target_quantity,
            });
        }
        if order.organizer.eq_ignore_ascii_case(member)
            || order.members.iter().any(|m| m.eq_ignore_ascii_case(member))
        {
            return Err(EcoCartError::AlreadyJoined {
                id: id.to_string(),
                member: member.to_string(),
            });
        }

        order.members.push(member.to_string());
        order.current_quantity += 1;

        Ok(order.clone())
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn members(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn seed_orders() -> Vec<GroupOrder> {
    vec![
        GroupOrder {
            id: uuid::Uuid::new_v4().to_string(),
            product_name: "Bamboo Toothbrush Set (Pack of 4)".to_string(),
            image: "/images/bamboo-toothbrush.png".to_string(),
            target_quantity: 20,
            current_quantity: 15,
            price_per_unit: 999,
            group_price: 799,
            savings: 200,
            location: "Koramangala, Bangalore".to_string(),
            time_left: "2 days".to_string(),
            organizer: "Priya S.".to_string(),
            members: members(&["Rahul K.", "Anita M.", "Suresh P.", "Maya R."]),
            carbon_saving: "2.5kg CO₂".to_string(),
            delivery_date: date(2024, 12, 20),
        },
        GroupOrder {
            id: uuid::Uuid::new_v4().to_string(),
            product_name: "Organic Cotton Tote Bags (Set of 3)".to_string(),
            image: "/images/cotton-tote-bag.png".to_string(),
            target_quantity: 15,
            current_quantity: 12,
            price_per_unit: 699,
            group_price: 549,
            savings: 150,
            location: "HSR Layout, Bangalore".to_string(),
            time_left: "1 day".to_string(),
            organizer: "Amit T.".to_string(),
            members: members(&["Kavya L.", "Ravi N.", "Deepa S."]),
            carbon_saving: "1.8kg CO₂".to_string(),
            delivery_date: date(2024, 12, 19),
        },
        GroupOrder {
            id: uuid::Uuid::new_v4().to_string(),
            product_name: "Solar Power Bank (10000mAh)".to_string(),
            image: "/images/solar-power-bank.png".to_string(),
            target_quantity: 10,
            current_quantity: 7,
            price_per_unit: 2299,
            group_price: 1999,
            savings: 300,
            location: "Indiranagar, Bangalore".to_string(),
            time_left: "3 days".to_string(),
            organizer: "Neha K.".to_string(),
            members: members(&["Vikram A.", "Pooja M.", "Arjun R."]),
            carbon_saving: "3.2kg CO₂".to_string(),
            delivery_date: date(2024, 12, 21),
        },
        GroupOrder {
            id: uuid::Uuid::new_v4().to_string(),
            product_name: "Stainless Steel Water Bottles".to_string(),
            image: "/images/steel-water-bottle.png".to_string(),
            target_quantity: 12,
            current_quantity: 8,
            price_per_unit: 1499,
            group_price: 1299,
            savings: 200,
            location: "Whitefield, Bangalore".to_string(),
            time_left: "4 days".to_string(),
            organizer: "Sanjay P.".to_string(),
            members: members(&["Meera K.", "Rohit S."]),
            carbon_saving: "2.1kg CO₂".to_string(),
            delivery_date: date(2024, 12, 22),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> NewGroupOrder {
        NewGroupOrder {
            product_name: "Beeswax Food Wraps (Set of 6)".to_string(),
            image: None,
            target_quantity: 10,
            price_per_unit: 1299,
            group_price: 1099,
            location: "Jayanagar, Bangalore".to_string(),
            organizer: "Maya R.".to_string(),
            delivery_date: date(2025, 1, 15),
        }
    }

    #[test]
    fn test_join_takes_a_spot() {
        let mut groups = Groups::seeded();
        let id = groups.orders()[0].id.clone();
        let before = groups.orders()[0].current_quantity;

        let order = groups.join(&id, "Asha D.").unwrap();

        assert_eq!(order.current_quantity, before + 1);
        assert!(order.members.iter().any(|m| m == "Asha D."));
    }

    #[test]
    fn test_join_unknown_group_fails() {
        let mut groups = Groups::seeded();
        assert!(matches!(
            groups.join("nope", "Asha D."),
            Err(EcoCartError::GroupNotFound(_))
        ));
    }

    #[test]
    fn test_join_twice_is_rejected() {
        let mut groups = Groups::seeded();
        let id = groups.orders()[0].id.clone();

        groups.join(&id, "Asha D.").unwrap();
        assert!(matches!(
            groups.join(&id, "asha d."),
            Err(EcoCartError::AlreadyJoined { .. })
        ));
    }

    #[test]
    fn test_join_full_group_is_rejected() {
        let mut groups = Groups::seeded();
        let order = groups.create(request()).unwrap();

        for i in 1..order.target_quantity {
            groups.join(&order.id, &format!("Member {i}")).unwrap();
        }

        assert!(matches!(
            groups.join(&order.id, "One Too Many"),
            Err(EcoCartError::GroupFull { .. })
        ));
    }

    #[test]
    fn test_create_computes_savings() {
        let mut groups = Groups::seeded();
        let order = groups.create(request()).unwrap();

        assert_eq!(order.savings, 200);
        assert_eq!(order.current_quantity, 1);
        assert!(groups.get(&order.id).is_ok());
    }

    #[test]
    fn test_create_rejects_bad_pricing() {
        let mut groups = Groups::seeded();
        let mut req = request();
        req.group_price = req.price_per_unit;

        assert!(matches!(
            groups.create(req),
            Err(EcoCartError::ValidationError(_))
        ));
    }

    #[test]
    fn test_create_rejects_tiny_target() {
        let mut groups = Groups::seeded();
        let mut req = request();
        req.target_quantity = 1;

        assert!(groups.create(req).is_err());
    }

    #[test]
    fn test_progress_percent() {
        let groups = Groups::seeded();
        // 15 of 20 spots taken.
        assert_eq!(groups.orders()[0].progress_percent(), 75);
    }
}
