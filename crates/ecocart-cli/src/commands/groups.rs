//! Group-buy commands.

use anyhow::{anyhow, Result};
use clap::Subcommand;
use colored::Colorize;

use crate::output;
use ecocart_core::groups::Groups;

#[derive(Subcommand)]
pub enum GroupCommands {
    /// List active group orders
    List,

    /// Join a group order
    Join {
        /// Group order id (a unique prefix is enough)
        id: String,

        /// Name to join as
        #[arg(long)]
        member: String,
    },
}

pub fn execute(cmd: GroupCommands) -> Result<()> {
    let mut groups = Groups::seeded();

    match cmd {
        GroupCommands::List => {
            output::print_groups_table(groups.orders());
        }
        GroupCommands::Join { id, member } => {
            let full_id = groups
                .orders()
                .iter()
                .find(|order| order.id.starts_with(&id))
                .map(|order| order.id.clone())
                .ok_or_else(|| anyhow!("No group order matches id '{id}'"))?;

            let order = groups.join(&full_id, &member)?;

            println!(
                "{} joined {} ({} of {} spots taken)",
                member.green().bold(),
                order.product_name.bold(),
                order.current_quantity,
                order.target_quantity
            );
            println!(
                "Group price ₹{} saves ₹{} per unit. Delivery {}.",
                order.group_price,
                order.savings,
                order.delivery_date.format("%b %d, %Y")
            );
        }
    }

    Ok(())
}
