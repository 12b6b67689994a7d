//! Rewards dashboard command.

use anyhow::Result;

use crate::output;
use ecocart_core::rewards::Rewards;

pub fn execute() -> Result<()> {
    output::print_dashboard(&Rewards::seeded());
    Ok(())
}
