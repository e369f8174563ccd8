use std::path::PathBuf;

use dotenvy::dotenv;
use enrollment::config::AppConfig;
use enrollment::database::seed_catalog;

fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    // Path argument wins over ACTIVITIES_CATALOG; neither means the built-in catalog.
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or(AppConfig::from_env().catalog_path);

    let catalog = match &path {
        Some(path) => match seed_catalog::load_catalog(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("catalog check failed: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            let catalog = seed_catalog::default_catalog();
            if let Err(e) = seed_catalog::validate_catalog(&catalog) {
                eprintln!("built-in catalog check failed: {}", e);
                std::process::exit(1);
            }
            catalog
        }
    };

    let seats: usize = catalog.iter().map(|a| a.max_participants).sum();
    let enrolled: usize = catalog.iter().map(|a| a.participants.len()).sum();
    println!(
        "catalog ok: activities={}, seats={}, enrolled={}",
        catalog.len(),
        seats,
        enrolled
    );
    for activity in &catalog {
        println!(
            "- {:<24} {:>3}/{:<3} {}",
            activity.name,
            activity.participants.len(),
            activity.max_participants,
            activity.schedule
        );
    }
}
