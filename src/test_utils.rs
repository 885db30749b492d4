//! Shared test utilities.
//!
//! Helpers for setting up an in-memory database and creating test entities
//! with sensible defaults.

use crate::{
    core::ProductService,
    entities::category,
    errors::Result,
    models::{Category, NewProduct, Product},
    store::{ProductStore, SeaOrmCategoryStore, SeaOrmProductStore},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;

/// Product service wired to the SeaORM stores.
pub type TestService = ProductService<SeaOrmProductStore, SeaOrmCategoryStore>;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Inserts a category row directly.
pub async fn create_test_category(db: &DatabaseConnection, name: &str) -> Result<Category> {
    let model = category::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(model.into())
}

/// Inserts a product through the store, bypassing service validation.
///
/// # Defaults
/// * price: 10.0
pub async fn create_test_product(
    store: &SeaOrmProductStore,
    name: &str,
    category: &Category,
) -> Result<Product> {
    store
        .insert(NewProduct {
            name: name.to_string(),
            price: 10.0,
            category: category.clone(),
        })
        .await
}

/// Sets up a database with one "Electronics" category.
/// Returns (db, category) for store-level tests.
pub async fn setup_with_category() -> Result<(DatabaseConnection, Category)> {
    let db = setup_test_db().await?;
    let category = create_test_category(&db, "Electronics").await?;
    Ok((db, category))
}

/// Builds a product service over a fresh database.
/// The connection is returned too so tests can insert fixtures.
pub async fn setup_test_service() -> Result<(TestService, DatabaseConnection)> {
    let db = setup_test_db().await?;
    let service = ProductService::new(
        Arc::new(SeaOrmProductStore::new(db.clone())),
        Arc::new(SeaOrmCategoryStore::new(db.clone())),
    );
    Ok((service, db))
}

/// Builds a product service with one "Electronics" category already stored.
pub async fn setup_service_with_category() -> Result<(TestService, Category)> {
    let (service, db) = setup_test_service().await?;
    let category = create_test_category(&db, "Electronics").await?;
    Ok((service, category))
}
