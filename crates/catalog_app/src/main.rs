use std::time::Duration;

use catalog_app::CatalogStore;
use catalog_engine::FetchSettings;
use catalog_logging::{catalog_warn, LogDestination};
use log::LevelFilter;

const LOAD_WAIT: Duration = Duration::from_secs(60);

fn main() -> anyhow::Result<()> {
    let destination = if cfg!(debug_assertions) {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    };
    catalog_logging::initialize(destination, LevelFilter::Info);

    let mut store = CatalogStore::launches(FetchSettings::default())?;
    store.init();
    if !store.wait_until_idle(LOAD_WAIT) {
        catalog_warn!("Catalog still loading after {:?}", LOAD_WAIT);
    }

    let categories = store.view().categories;
    println!(
        "{} courses, {} categories",
        store.state().courses().len(),
        categories.len()
    );
    for category in categories {
        store.set_filter(Some(category.id));
        println!(
            "{:>6}  {:<40} {} courses",
            category.id,
            category.name,
            store.state().filtered_courses().len()
        );
        store.set_filter(None);
    }
    Ok(())
}
