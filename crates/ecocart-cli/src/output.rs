//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use ecocart_core::analysis::{ProductAnalysis, SectionKind};
use ecocart_core::catalog::Product;
use ecocart_core::groups::GroupOrder;
use ecocart_core::marketplace::Listing;
use ecocart_core::rewards::Rewards;

/// Print products as a table.
pub fn print_products_table(products: &[&Product]) {
    if products.is_empty() {
        println!("{}", "No products found.".dimmed());
        return;
    }

    println!(
        "{:<4} {:<30} {:>8} {:>8} {:<7} {}",
        "ID", "Name", "Price", "Was", "Rating", "Features"
    );
    println!("{}", "─".repeat(term_width().min(90)));

    for product in products {
        println!(
            "{:<4} {:<30} {:>8} {:>8} {:<7} {}",
            product.id,
            truncate(&product.name, 28),
            format!("₹{}", product.price).green(),
            format!("₹{}", product.original_price).dimmed(),
            stars(product.eco_rating),
            product.eco_features.join(", ").dimmed()
        );
    }

    println!();
    println!("{} product(s)", products.len());
}

/// Print a single product.
pub fn print_product(product: &Product) {
    println!(
        "{} {}",
        product.name.cyan().bold(),
        format!("(#{})", product.id).dimmed()
    );
    println!();
    println!("{}", product.description);
    println!();
    println!(
        "{}: {} {}",
        "Price".bold(),
        format!("₹{}", product.price).green(),
        format!("(was ₹{}, -{}%)", product.original_price, product.discount).dimmed()
    );
    println!(
        "{}: {} {}/5",
        "Eco rating".bold(),
        stars(product.eco_rating).yellow(),
        product.eco_rating
    );
    println!("{}", "Eco features".bold());
    for feature in &product.eco_features {
        println!("  - {}", feature);
    }
}

/// Print marketplace listings as a table.
pub fn print_listings_table(listings: &[&Listing]) {
    if listings.is_empty() {
        println!("{}", "No listings found.".dimmed());
        return;
    }

    println!(
        "{:<4} {:<34} {:>8} {:<10} {:<18} {}",
        "ID", "Title", "Price", "Condition", "Seller", "Location"
    );
    println!("{}", "─".repeat(term_width().min(95)));

    for listing in listings {
        let like = if listing.liked { "♥".red() } else { " ".normal() };
        println!(
            "{:<4} {:<34} {:>8} {:<10} {:<18} {} {}",
            listing.id,
            truncate(&listing.title, 32),
            format!("₹{}", listing.price).green(),
            listing.condition.as_str(),
            format!("{} ({:.1})", listing.seller, listing.seller_rating),
            truncate(&listing.location, 24).dimmed(),
            like
        );
    }

    println!();
    println!("{} listing(s)", listings.len());
}

/// Print group orders as a table.
pub fn print_groups_table(orders: &[GroupOrder]) {
    if orders.is_empty() {
        println!("{}", "No group orders found.".dimmed());
        return;
    }

    println!(
        "{:<10} {:<34} {:>9} {:>7} {:<14} {}",
        "ID", "Product", "Group ₹", "Filled", "Delivery", "Spots"
    );
    println!("{}", "─".repeat(term_width().min(95)));

    for order in orders {
        println!(
            "{:<10} {:<34} {:>9} {:>6}% {:<14} {}",
            &order.id[..8],
            truncate(&order.product_name, 32),
            order.group_price,
            order.progress_percent(),
            order.delivery_date.format("%b %d, %Y").to_string(),
            format!("{}/{}", order.current_quantity, order.target_quantity).dimmed()
        );
    }

    println!();
    println!("{} group order(s)", orders.len());
}

/// Print the rewards dashboard.
pub fn print_dashboard(rewards: &Rewards) {
    let profile = &rewards.profile;

    println!(
        "{} {}",
        profile.name.cyan().bold(),
        format!("<{}>", profile.email).dimmed()
    );
    println!("{} since {}", profile.level.green().bold(), profile.member_since);
    println!();
    println!(
        "{}: {}   {}: {}   {}: ₹{}",
        "Eco score".bold(),
        profile.eco_score,
        "Eco coins".bold(),
        profile.eco_coins,
        "Total spent".bold(),
        profile.total_spent
    );
    println!(
        "{}: {:.1} kg CO₂   {}: {} g plastic   {}: {}",
        "Saved".bold(),
        profile.carbon_saved_kg,
        "Avoided".bold(),
        profile.plastic_saved_g,
        "Trees planted".bold(),
        profile.trees_planted
    );
    println!(
        "{} more points to {}",
        profile.points_to_next_level,
        profile.next_level.bold()
    );
    println!();

    println!("{}", "Purchase history".bold());
    for purchase in &rewards.purchases {
        println!(
            "  {}  ₹{:<6} {:>4} coins  {}",
            purchase.date.format("%b %d, %Y"),
            purchase.total,
            purchase.eco_coins_earned,
            purchase.status.as_str().dimmed()
        );
        for item in &purchase.items {
            println!("    - {} (₹{}, {})", item.name, item.price, stars(item.eco_rating));
        }
    }
    println!();

    println!("{}", "Achievements".bold());
    for achievement in &rewards.achievements {
        let mark = if achievement.earned {
            "✔".green()
        } else {
            "○".dimmed()
        };
        println!(
            "  {} {} {}",
            mark,
            achievement.title.bold(),
            achievement.description.dimmed()
        );
    }
    println!();

    println!("{}", "Offers".bold());
    for offer in &rewards.offers {
        println!(
            "  {:<20} {:>3}%  {}",
            offer.title,
            offer.progress_percent(),
            offer.description.dimmed()
        );
    }

    println!();
    println!(
        "{}: {} orders, ₹{} spent, {} coins earned",
        "Lifetime".bold(),
        rewards.purchases.len(),
        rewards.lifetime_spend(),
        rewards.lifetime_coins()
    );
}

/// Print a parsed analysis section by section.
pub fn print_analysis(analysis: &ProductAnalysis) {
    for section in &analysis.sections {
        match section.kind {
            Some(kind) => {
                println!("{}", heading(kind));
                if kind == SectionKind::Score {
                    if let Some(score) = analysis.score {
                        println!(
                            "{} {}",
                            stars(score).yellow(),
                            format!("{}/5 stars", score).dimmed()
                        );
                    }
                }
                println!("{}", section.content);
            }
            None => {
                println!("{}", "Complete AI Analysis".bold());
                println!("{}", section.content);
            }
        }
        println!();
    }
}

fn heading(kind: SectionKind) -> ColoredString {
    let title = kind.title();
    match kind {
        SectionKind::Components => title.yellow().bold(),
        SectionKind::EcoFeatures => title.green().bold(),
        SectionKind::Recycling => title.blue().bold(),
        SectionKind::Impact => title.cyan().bold(),
        SectionKind::Score => title.magenta().bold(),
    }
}

/// Star row for a 1-5 rating.
fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Truncate a string to a display width, appending an ellipsis.
fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }

    let mut out = String::new();
    for c in s.chars() {
        if out.width() + 1 >= max {
            break;
        }
        out.push(c);
    }
    format!("{}…", out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_row() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
    }

    #[test]
    fn test_truncate_keeps_short_strings() {
        assert_eq!(truncate("Bamboo", 28), "Bamboo");
    }

    #[test]
    fn test_truncate_appends_ellipsis() {
        let truncated = truncate("A very long product name indeed", 10);
        assert!(truncated.width() <= 10);
        assert!(truncated.ends_with('…'));
    }
}
