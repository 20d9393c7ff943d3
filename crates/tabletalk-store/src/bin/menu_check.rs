//! # Menu Check Utility
//!
//! Loads the catalog through the full fallback chain and prints what a
//! session would actually see. Run it after editing the menu export to
//! confirm the file parses and the prices read back correctly.
//!
//! ## Usage
//! ```bash
//! # Default paths (data/catalog.json, data/menu.csv)
//! cargo run -p tabletalk-store --bin menu-check
//!
//! # Explicit paths
//! cargo run -p tabletalk-store --bin menu-check -- --cache /tmp/catalog.json --menu ./menu.csv
//!
//! # See each fallback step
//! RUST_LOG=tabletalk_store=debug cargo run -p tabletalk-store --bin menu-check
//! ```

use std::env;

use tracing_subscriber::EnvFilter;

use tabletalk_store::CatalogSource;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut cache_path = "data/catalog.json".to_string();
    let mut menu_path = "data/menu.csv".to_string();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--cache" => {
                if let Some(value) = args.next() {
                    cache_path = value;
                }
            }
            "--menu" => {
                if let Some(value) = args.next() {
                    menu_path = value;
                }
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Usage: menu-check [--cache PATH] [--menu PATH]");
                std::process::exit(2);
            }
        }
    }

    let source = CatalogSource::new(&cache_path, &menu_path);
    let catalog = source.load().await;

    println!("Catalog: {} items", catalog.len());
    println!("{:<20} {:<30} {:>10}  {}", "ID", "NAME", "PRICE", "CATEGORY");
    for item in catalog.items() {
        let name = item.display_name();
        let availability = if item.is_available { "" } else { "  (unavailable)" };
        println!(
            "{:<20} {:<30} {:>10}  {}{}",
            item.id,
            name,
            item.price.to_string(),
            item.category,
            availability
        );
    }
}
