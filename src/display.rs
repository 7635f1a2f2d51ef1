//! Text helpers for presenting listings. Nothing here renders; callers
//! decide where the strings go.

use crate::models::Listing;
use chrono::{DateTime, Utc};

/// Whole-euro amount with thousands separators, e.g. "€2,062"
pub fn format_currency(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("€{}", grouped)
}

/// "14 Mar 2025"
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%d %b %Y").to_string()
}

/// "1 Bedroom", "2 Bedrooms"
pub fn pluralize(count: u32, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

pub fn availability_label(listing: &Listing, now: DateTime<Utc>) -> String {
    if listing.is_available_now(now) {
        "Available now".to_string()
    } else {
        format!("Available from {}", format_date(listing.available_from))
    }
}

/// Multi-line detail view used by the CLI
pub fn detail_block(listing: &Listing, now: DateTime<Utc>) -> String {
    let mut lines = vec![
        format!("{} [{}]", listing.title, listing.id),
        format!("   {} per month · {}", format_currency(listing.price), listing.status),
        format!("   {}", listing.address.one_line()),
        format!(
            "   {}, {}, {} m² · {}",
            pluralize(listing.bedrooms, "Bedroom"),
            pluralize(listing.bathrooms, "Bathroom"),
            listing.size_sqm,
            listing.property_type.label()
        ),
        format!("   BER {} · {}", listing.ber, availability_label(listing, now)),
        format!("   Listed {}", format_date(listing.created_at)),
        format!("   Cover image: {}", listing.cover_image()),
    ];
    if !listing.features.is_empty() {
        lines.push(format!("   Features: {}", listing.features.join(", ")));
    }
    if let Some(tour) = &listing.virtual_tour {
        lines.push(format!("   Virtual tour: {}", tour));
    }
    lines.push(format!("   {}", listing.description));
    lines.join("\n")
}
