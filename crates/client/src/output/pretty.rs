//! Pretty output formatting.

use itemstore_core::item::Item;

use crate::client::health::ServiceInfo;

/// Format an item for display.
pub fn format_item(item: &Item) -> String {
    let mut output = format!("{} ({:.2})\n  ID: {}", item.name, item.price, item.id);
    if let Some(desc) = &item.description {
        output.push_str(&format!("\n  Description: {desc}"));
    }
    if let Some(is_offer) = item.is_offer {
        output.push_str(&format!("\n  Offer: {}", if is_offer { "yes" } else { "no" }));
    }
    output.push_str(&format!(
        "\n  Created: {}\n  Updated: {}",
        item.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
        item.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output
}

/// Format items for display.
pub fn format_items(items: &[Item]) -> String {
    if items.is_empty() {
        return "No items found.".to_string();
    }
    let mut output = format!("ITEMS ({})\n", items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}", format_item(item)));
        output.push('\n');
    }
    output
}

/// Format the service banner.
pub fn format_info(info: &ServiceInfo) -> String {
    format!(
        "{}\n  Status: {}\n  Storage: {}",
        info.message, info.status, info.storage
    )
}
