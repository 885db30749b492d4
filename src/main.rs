use dotenvy::dotenv;
use product_catalog::{
    ProductService, Result,
    config::{categories, database},
    core::category,
    store::{SeaOrmCategoryStore, SeaOrmProductStore},
};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Connect and make sure the tables exist
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db).await?;

    // 4. Seed categories from config.toml, if present
    match categories::load_default_config() {
        Ok(config) => {
            category::seed_categories(&db, &config.categories).await?;
        }
        Err(e) => warn!("Skipping category seeding: {}", e),
    }

    // 5. Report what the catalog holds
    let service = ProductService::new(
        Arc::new(SeaOrmProductStore::new(db.clone())),
        Arc::new(SeaOrmCategoryStore::new(db.clone())),
    );
    let categories = category::get_all_categories(&db).await?;
    let products = service.list_products().await?;
    info!(
        categories = categories.len(),
        products = products.len(),
        "Catalog ready"
    );
    for product in &products {
        info!(
            id = product.id,
            name = %product.name,
            price = product.price,
            category = %product.category.name,
            "Product"
        );
    }

    Ok(())
}
