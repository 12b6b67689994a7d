//! Application state.

use std::sync::Arc;

use tokio::sync::RwLock;

use ecocart_ai::{AiConfig, GeminiClient};
use ecocart_core::catalog::{Cart, Catalog};
use ecocart_core::groups::Groups;
use ecocart_core::marketplace::Marketplace;
use ecocart_core::rewards::Rewards;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub rewards: Arc<Rewards>,
    pub marketplace: Arc<RwLock<Marketplace>>,
    pub groups: Arc<RwLock<Groups>>,
    pub cart: Arc<RwLock<Cart>>,
    pub ai: Arc<GeminiClient>,
}

impl AppState {
    /// Seeded state with a Gemini client built from the injected
    /// configuration.
    pub fn new(config: &AiConfig) -> Self {
        Self {
            catalog: Arc::new(Catalog::seeded()),
            rewards: Arc::new(Rewards::seeded()),
            marketplace: Arc::new(RwLock::new(Marketplace::seeded())),
            groups: Arc::new(RwLock::new(Groups::seeded())),
            cart: Arc::new(RwLock::new(Cart::default())),
            ai: Arc::new(GeminiClient::new(config)),
        }
    }
}
