//! Category business logic - seeding from configuration and listing.

use crate::{
    config::categories::CategoryConfig,
    entities::{Category, category},
    errors::Result,
    models,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// Retrieves all categories ordered by id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_categories(db: &DatabaseConnection) -> Result<Vec<models::Category>> {
    let categories = Category::find()
        .order_by_asc(category::Column::Id)
        .all(db)
        .await?;
    Ok(categories.into_iter().map(models::Category::from).collect())
}

/// Inserts every configured category whose name is not already present
/// (ignoring case) and returns how many rows were added.
///
/// Blank names are skipped, so running this on every startup is safe.
///
/// # Errors
/// Returns an error if reading or inserting categories fails.
#[instrument(skip_all, fields(configured = configs.len()))]
pub async fn seed_categories(db: &DatabaseConnection, configs: &[CategoryConfig]) -> Result<usize> {
    let mut known: HashSet<String> = Category::find()
        .all(db)
        .await?
        .into_iter()
        .map(|category| category.name.to_lowercase())
        .collect();
    let mut inserted = 0;

    for config in configs {
        let name = config.name.trim();
        if name.is_empty() {
            debug!("Skipping category with blank name");
            continue;
        }

        if !known.insert(name.to_lowercase()) {
            debug!(name, "Category already exists, skipping");
            continue;
        }

        category::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        inserted += 1;
    }

    info!(inserted, "Seeded categories");
    Ok(inserted)
}
