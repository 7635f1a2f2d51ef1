use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use rental_listings::display::{detail_block, format_currency};
use rental_listings::sources::write_dataset;
use rental_listings::{
    init_logging, Catalog, CliArgs, JsonFileSource, Listing, ListingGenerator, ListingSource,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Initialize logging
    init_logging(args.log_format);

    info!("🏠 Rental Listings");

    let source: Box<dyn ListingSource> = match &args.input {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(
            ListingGenerator::with_config(args.generator_config())
                .context("Invalid generator configuration")?,
        ),
    };

    info!("Loading listings from {}...", source.source_name());
    let catalog = Catalog::new(source.load().await?);
    info!("✅ Loaded {} listings", catalog.len());

    let now = Utc::now();

    if let Some(id) = &args.show {
        let listing = catalog.find(id)?;
        println!("{}", detail_block(listing, now));
        return Ok(());
    }

    let criteria = args.criteria();
    let mut matches = catalog.filter(&criteria);
    if args.featured {
        matches.retain(|listing| listing.is_featured);
    }

    if matches.is_empty() {
        info!("No listings match the current filters");
        println!("No properties match your filters. Try adjusting your search.");
    } else {
        info!("{} properties available for rent", matches.len());
        for (i, listing) in matches.iter().enumerate() {
            print_summary(i + 1, listing);
        }
    }

    if let Some(dir) = &args.output {
        write_dataset(dir, catalog.listings()).await?;
    }

    Ok(())
}

fn print_summary(position: usize, listing: &Listing) {
    println!(
        "{}. {} ({} / month)",
        position,
        listing.title,
        format_currency(listing.price)
    );
    println!(
        "   {} bed, {} bath, {} m², BER {}",
        listing.bedrooms, listing.bathrooms, listing.size_sqm, listing.ber
    );
    println!("   {}", listing.address.one_line());
    println!("   ID: {}", listing.id);
    println!("   Features: {}", listing.features.join(", "));
    println!();
}
