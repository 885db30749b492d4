//! SeaORM-backed store implementations.

use super::{CategoryStore, ProductStore};
use crate::{
    entities::{Category as CategoryEntity, Product as ProductEntity, category, product},
    errors::{Error, Result},
    models::{Category, NewProduct, Product},
};
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::{debug, instrument};

/// Joins a product row with its category row.
///
/// A missing category means the foreign key was bypassed, which is reported as
/// an integrity failure rather than silently dropped.
fn to_product(row: (product::Model, Option<category::Model>)) -> Result<Product> {
    let (product, category) = row;
    let category = category.ok_or_else(|| Error::Integrity {
        message: format!(
            "Product {} references missing category {}",
            product.id, product.category_id
        ),
    })?;
    Ok(Product {
        id: product.id,
        name: product.name,
        price: product.price,
        category: category.into(),
    })
}

/// Product store over a SeaORM database connection.
#[derive(Debug, Clone)]
pub struct SeaOrmProductStore {
    db: DatabaseConnection,
}

impl SeaOrmProductStore {
    /// Creates a store that issues its queries on `db`.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductStore for SeaOrmProductStore {
    async fn find_all(&self) -> Result<Vec<Product>> {
        ProductEntity::find()
            .find_also_related(CategoryEntity)
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(to_product)
            .collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        ProductEntity::find_by_id(id)
            .find_also_related(CategoryEntity)
            .one(&self.db)
            .await?
            .map(to_product)
            .transpose()
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let count = ProductEntity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn exists_by_name_ignore_case(&self, name: &str) -> Result<bool> {
        let count = ProductEntity::find()
            .filter(product::Column::NameKey.eq(product::name_key(name)))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    #[instrument(skip(self, product), fields(name = %product.name))]
    async fn insert(&self, product: NewProduct) -> Result<Product> {
        let model = product::ActiveModel {
            name_key: Set(product::name_key(&product.name)),
            name: Set(product.name),
            price: Set(product.price),
            category_id: Set(product.category.id),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        debug!(id = model.id, "Inserted product");

        Ok(Product {
            id: model.id,
            name: model.name,
            price: model.price,
            category: product.category,
        })
    }

    #[instrument(skip(self, product), fields(id = product.id))]
    async fn save(&self, product: Product) -> Result<Product> {
        let model = product::ActiveModel {
            id: Set(product.id),
            name_key: Set(product::name_key(&product.name)),
            name: Set(product.name),
            price: Set(product.price),
            category_id: Set(product.category.id),
        }
        .update(&self.db)
        .await?;
        debug!("Updated product");

        Ok(Product {
            id: model.id,
            name: model.name,
            price: model.price,
            category: product.category,
        })
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let result = ProductEntity::delete_by_id(id).exec(&self.db).await?;
        debug!(rows_affected = result.rows_affected, "Deleted product");
        Ok(())
    }
}

/// Category store over a SeaORM database connection.
#[derive(Debug, Clone)]
pub struct SeaOrmCategoryStore {
    db: DatabaseConnection,
}

impl SeaOrmCategoryStore {
    /// Creates a store that issues its queries on `db`.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryStore for SeaOrmCategoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>> {
        Ok(CategoryEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Category::from))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let count = CategoryEntity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }
}
