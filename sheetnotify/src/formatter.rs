//! Output formatters for payloads and deliveries

use anyhow::Result;
use colored::*;
use sheetnotify_core::range::column_to_letters;
use sheetnotify_core::{Delivery, EditRange, UpdatePayload, Url};

/// Print a payload preview with one line per cell
pub fn print_human(endpoint: &Url, range: &EditRange, payload: &UpdatePayload) {
    println!(
        "{} {} {}",
        "Sheet:".bold(),
        payload.sheet_name.cyan().bold(),
        format!("({})", range).bright_black()
    );
    println!("{} {}", "Endpoint:".bold(), endpoint);
    println!();

    if payload.updates.is_empty() {
        println!("{}", "No cells in range; an empty update list would be sent.".yellow());
        return;
    }

    for update in &payload.updates {
        let cell_ref = format!("{}{}", column_to_letters(update.col), update.row);
        let value = if update.value.is_empty() {
            "(empty)".bright_black().to_string()
        } else {
            update.value.to_string()
        };
        println!("  {} {}", cell_ref.yellow(), value);
    }

    println!();
    println!(
        "{} {}",
        "Updates:".bold().underline(),
        payload.updates.len()
    );
}

/// Print the request body, byte for byte as it would be posted
pub fn print_json(payload: &UpdatePayload) -> Result<()> {
    println!("{}", render_body(payload)?);
    Ok(())
}

fn render_body(payload: &UpdatePayload) -> Result<String> {
    Ok(String::from_utf8(payload.to_json()?)?)
}

pub fn print_delivery(delivery: &Delivery) {
    println!(
        "{} {} updates to {} (status {})",
        "✓ Sent".green().bold(),
        delivery.updates,
        delivery.endpoint,
        delivery.status
    );
}

pub fn print_delivery_json(delivery: &Delivery) -> Result<()> {
    let output = serde_json::json!({
        "endpoint": delivery.endpoint.as_str(),
        "status": delivery.status,
        "updates": delivery.updates,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
